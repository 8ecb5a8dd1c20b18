use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use tracing::warn;

use academia_auth::verify_token;
use academia_core::{AppError, Role};
use academia_models::{Principal, UserId, UserRecord};

use crate::state::AppState;

const INVALID_CREDENTIALS: &str = "Could not validate credentials";

/// The authenticated, active user behind a request.
///
/// Role and active flag come from the stored user record, not from the token.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub principal: Principal,
    pub record: UserRecord,
}

impl CurrentUser {
    pub fn id(&self) -> UserId {
        self.principal.id
    }

    pub fn role(&self) -> Role {
        self.principal.role
    }

    pub fn email(&self) -> &str {
        &self.record.email
    }

    /// Resolve a stored user record into a request principal.
    ///
    /// A role outside the registry is treated like a bad token. A deactivated
    /// account gets 400 "Inactive user".
    pub fn from_record(record: UserRecord) -> Result<Self, AppError> {
        let principal = Principal::try_from(&record).map_err(|e| {
            warn!(user_id = %record.id, error = %e, "User record has an unknown role");
            AppError::unauthorized(INVALID_CREDENTIALS)
        })?;

        if !principal.is_active() {
            return Err(AppError::bad_request("Inactive user"));
        }

        Ok(Self { principal, record })
    }
}

fn bearer_token(parts: &Parts) -> Option<&str> {
    parts
        .headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts).ok_or_else(|| AppError::unauthorized(INVALID_CREDENTIALS))?;

        let claims = verify_token(token, &state.jwt_config)?;
        let user_id = claims.user_id()?;

        let record = state
            .store
            .find_user(user_id)
            .await
            .map_err(AppError::internal)?
            .ok_or_else(|| AppError::unauthorized(INVALID_CREDENTIALS))?;

        Self::from_record(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{Request, StatusCode};

    fn record(role: &str, is_active: bool) -> UserRecord {
        UserRecord {
            id: UserId::new(7),
            email: "parent@example.com".to_string(),
            role: role.to_string(),
            is_active,
        }
    }

    #[test]
    fn test_from_record_active() {
        let user = CurrentUser::from_record(record("parent", true)).unwrap();
        assert_eq!(user.id(), UserId::new(7));
        assert_eq!(user.role(), Role::Parent);
        assert_eq!(user.email(), "parent@example.com");
    }

    #[test]
    fn test_from_record_inactive() {
        let err = CurrentUser::from_record(record("teacher", false)).unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.message(), "Inactive user");
    }

    #[test]
    fn test_from_record_unknown_role() {
        let err = CurrentUser::from_record(record("finance", true)).unwrap_err();
        assert_eq!(err.status, StatusCode::UNAUTHORIZED);
        assert_eq!(err.message(), INVALID_CREDENTIALS);
    }

    #[test]
    fn test_bearer_token() {
        let (parts, _) = Request::builder()
            .header("Authorization", "Bearer abc.def")
            .body(())
            .unwrap()
            .into_parts();
        assert_eq!(bearer_token(&parts), Some("abc.def"));

        let (parts, _) = Request::builder()
            .header("Authorization", "Basic abc")
            .body(())
            .unwrap()
            .into_parts();
        assert_eq!(bearer_token(&parts), None);
    }
}
