//! # Academia Core
//!
//! Core types, errors, and the closed authorization vocabulary for the Academia API.
//!
//! - [`errors`]: Application error type with HTTP response conversion
//! - [`roles`]: The role registry (admin, teacher, student, parent)
//! - [`permissions`]: The permission catalog
//!
//! # Example
//!
//! ```ignore
//! use academia_core::{Permission, Role, is_valid_role};
//!
//! assert!(is_valid_role("teacher"));
//! let role: Role = "teacher".parse()?;
//! let permission = Permission::parse("manage_grades").unwrap();
//! ```

pub mod errors;
pub mod permissions;
pub mod roles;

// Re-export commonly used types at crate root
pub use errors::AppError;
pub use permissions::{
    InvalidPermission, Permission, PermissionCategory, all_permission_names, all_permissions,
};
pub use roles::{InvalidRole, Role, RoleSet, is_valid_role};
