//! JWT claim structures.

use academia_core::AppError;
use academia_models::UserId;
use serde::{Deserialize, Serialize};

/// Claims of an access token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// User ID (subject claim)
    pub sub: String,
    pub email: String,
    /// Role at issue time. Informational only; requests re-read the user record.
    pub role: String,
    /// Token expiration timestamp (Unix timestamp)
    pub exp: usize,
    /// Token issued-at timestamp (Unix timestamp)
    pub iat: usize,
}

impl Claims {
    /// The subject as a user id.
    pub fn user_id(&self) -> Result<UserId, AppError> {
        self.sub
            .parse()
            .map_err(|_| AppError::unauthorized("Could not validate credentials"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims(sub: &str) -> Claims {
        Claims {
            sub: sub.to_string(),
            email: "teacher@example.com".to_string(),
            role: "teacher".to_string(),
            exp: 2_000_000_000,
            iat: 1_700_000_000,
        }
    }

    #[test]
    fn test_user_id_from_subject() {
        assert_eq!(claims("42").user_id().unwrap(), UserId::new(42));
    }

    #[test]
    fn test_non_numeric_subject_is_unauthorized() {
        let err = claims("not-a-number").user_id().unwrap_err();
        assert_eq!(err.status.as_u16(), 401);
        assert_eq!(err.message(), "Could not validate credentials");
    }

    #[test]
    fn test_claims_serialization() {
        let json = serde_json::to_value(claims("7")).unwrap();
        assert_eq!(json["sub"], "7");
        assert_eq!(json["role"], "teacher");
    }
}
