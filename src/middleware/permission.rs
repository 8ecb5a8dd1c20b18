//! Permission-based authorization for request handlers.
//!
//! Checks resolve the user's role against the shared role table. The helpers
//! return 403 with a message naming what was required.

use academia_core::{AppError, Permission};

use crate::middleware::auth::CurrentUser;
use crate::state::AppState;

fn quoted_list(permissions: &[&str]) -> String {
    let quoted: Vec<String> = permissions.iter().map(|p| format!("'{p}'")).collect();
    format!("[{}]", quoted.join(", "))
}

/// Require a single permission.
///
/// # Example
///
/// ```rust,ignore
/// pub async fn record_grade(
///     State(state): State<AppState>,
///     user: CurrentUser,
/// ) -> Result<Json<Grade>, AppError> {
///     check_permission(&state, &user, "manage_grades")?;
///     // ...
/// }
/// ```
pub fn check_permission(
    state: &AppState,
    user: &CurrentUser,
    permission: &str,
) -> Result<(), AppError> {
    if state
        .evaluator()
        .has_permission_named(user.role().as_str(), permission)
    {
        return Ok(());
    }
    Err(AppError::forbidden(format!(
        "Permission '{permission}' required"
    )))
}

/// Require at least one of `permissions`. An empty list always fails.
pub fn check_any_permission(
    state: &AppState,
    user: &CurrentUser,
    permissions: &[&str],
) -> Result<(), AppError> {
    if state
        .evaluator()
        .has_any_permission_named(user.role().as_str(), permissions)
    {
        return Ok(());
    }
    Err(AppError::forbidden(format!(
        "One of permissions {} required",
        quoted_list(permissions)
    )))
}

/// Require every one of `permissions`.
pub fn check_all_permissions(
    state: &AppState,
    user: &CurrentUser,
    permissions: &[&str],
) -> Result<(), AppError> {
    if state
        .evaluator()
        .has_all_permissions_named(user.role().as_str(), permissions)
    {
        return Ok(());
    }
    Err(AppError::forbidden(format!(
        "All permissions {} required",
        quoted_list(permissions)
    )))
}

/// Typed variant of [`check_permission`] for callers holding a [`Permission`].
pub fn require_permission(
    state: &AppState,
    user: &CurrentUser,
    permission: Permission,
) -> Result<(), AppError> {
    check_permission(state, user, permission.as_str())
}

/// Define an extractor that requires one permission.
///
/// # Example
///
/// ```rust,ignore
/// require_permission!(RequireManageGrades, Permission::ManageGrades);
///
/// pub async fn record_grade(RequireManageGrades(user): RequireManageGrades) { /* ... */ }
/// ```
#[macro_export]
macro_rules! require_permission {
    ($name:ident, $permission:expr) => {
        #[derive(Debug, Clone)]
        pub struct $name(pub $crate::middleware::auth::CurrentUser);

        impl ::axum::extract::FromRequestParts<$crate::state::AppState> for $name {
            type Rejection = ::academia_core::AppError;

            async fn from_request_parts(
                parts: &mut ::axum::http::request::Parts,
                state: &$crate::state::AppState,
            ) -> Result<Self, Self::Rejection> {
                let user = <$crate::middleware::auth::CurrentUser as ::axum::extract::FromRequestParts<
                    $crate::state::AppState,
                >>::from_request_parts(parts, state)
                .await?;
                $crate::middleware::permission::require_permission(state, &user, $permission)?;
                Ok($name(user))
            }
        }
    };
}

require_permission!(RequireCreateUser, Permission::CreateUser);
require_permission!(RequireConfigureSystem, Permission::ConfigureSystem);
require_permission!(RequireManageGrades, Permission::ManageGrades);
require_permission!(RequireManageAttendance, Permission::ManageAttendance);
require_permission!(RequireManageFees, Permission::ManageFees);
require_permission!(RequireRunReports, Permission::RunReports);
require_permission!(RequireSendAnnouncements, Permission::SendAnnouncements);
