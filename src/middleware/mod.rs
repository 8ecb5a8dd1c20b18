//! Extractors and helpers for request authentication and authorization.
//!
//! - [`auth`]: [`auth::CurrentUser`], the authenticated and active principal
//! - [`permission`]: permission checks and the `require_permission!` extractors
//! - [`role`]: role-restricted extractors and helpers
//!
//! # Authentication Flow
//!
//! 1. Client sends `Authorization: Bearer <token>`
//! 2. `CurrentUser` verifies the token and loads the user record
//! 3. Unknown or unverifiable users get 401, deactivated users get 400
//! 4. Permission and role extractors answer 403 with a fixed message
//!
//! # Example
//!
//! ```ignore
//! use crate::middleware::auth::CurrentUser;
//! use crate::middleware::permission::RequireManageGrades;
//!
//! async fn profile(user: CurrentUser) -> impl IntoResponse { /* ... */ }
//!
//! async fn record_grade(RequireManageGrades(user): RequireManageGrades) -> impl IntoResponse {
//!     // Only runs when the user's role holds "manage_grades"
//! }
//! ```

pub mod auth;
pub mod permission;
pub mod role;
