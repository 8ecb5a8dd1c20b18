//! Role-based authorization for Axum.
//!
//! Two styles are available:
//! 1. Extractors such as [`RequireAdmin`] that reject before the handler runs
//! 2. Helper functions for checks inside controller logic
//!
//! Admin is the top-level role, so "super admin" and "admin" accept the same
//! principals. The distinct extractors keep the distinct 403 messages.

use academia_core::{AppError, RoleSet};
use axum::{extract::FromRequestParts, http::request::Parts};

use crate::middleware::auth::CurrentUser;
use crate::state::AppState;

/// Fail with 403 `message` unless the user's role is in `allowed`.
pub fn check_role(user: &CurrentUser, allowed: RoleSet, message: &str) -> Result<(), AppError> {
    if allowed.contains(user.role()) {
        Ok(())
    } else {
        Err(AppError::forbidden(message))
    }
}

pub fn check_super_admin(user: &CurrentUser) -> Result<(), AppError> {
    check_role(user, RoleSet::ADMIN, "Super admin privileges required")
}

pub fn check_admin(user: &CurrentUser) -> Result<(), AppError> {
    check_role(user, RoleSet::ADMIN, "Admin privileges required")
}

pub fn check_teacher_or_admin(user: &CurrentUser) -> Result<(), AppError> {
    check_role(
        user,
        RoleSet::STAFF,
        "Access restricted to admins and teachers",
    )
}

pub fn check_student_or_parent(user: &CurrentUser) -> Result<(), AppError> {
    check_role(
        user,
        RoleSet::FAMILY,
        "Access restricted to students and parents",
    )
}

macro_rules! role_extractor {
    ($(#[$meta:meta])* $name:ident, $check:path) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $name(pub CurrentUser);

        impl FromRequestParts<AppState> for $name {
            type Rejection = AppError;

            async fn from_request_parts(
                parts: &mut Parts,
                state: &AppState,
            ) -> Result<Self, Self::Rejection> {
                let user = CurrentUser::from_request_parts(parts, state).await?;
                $check(&user)?;
                Ok($name(user))
            }
        }
    };
}

role_extractor!(
    /// Admin only, reported as a super admin requirement.
    RequireSuperAdmin,
    check_super_admin
);
role_extractor!(RequireAdmin, check_admin);
role_extractor!(
    /// Admin or teacher.
    RequireTeacherOrAdmin,
    check_teacher_or_admin
);
role_extractor!(RequireStudentOrParent, check_student_or_parent);
