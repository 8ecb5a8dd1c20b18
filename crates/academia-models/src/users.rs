//! User records and the authenticated principal.

use crate::ids::UserId;
use academia_core::{InvalidRole, Role};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A user row as persisted.
///
/// `role` stays a plain string here: the database does not constrain it, and
/// the conversion into a [`Principal`] is where unknown roles get rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct UserRecord {
    pub id: UserId,
    pub email: String,
    pub role: String,
    pub is_active: bool,
}

/// The authenticated actor a policy decision is made for.
///
/// Carries exactly the identity, the role and the active flag. Built from a
/// [`UserRecord`] once per request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    pub id: UserId,
    pub role: Role,
    pub active: bool,
}

impl Principal {
    /// An active principal.
    pub const fn new(id: UserId, role: Role) -> Self {
        Self {
            id,
            role,
            active: true,
        }
    }

    pub const fn deactivated(self) -> Self {
        Self {
            active: false,
            ..self
        }
    }

    pub const fn is_active(&self) -> bool {
        self.active
    }
}

impl TryFrom<&UserRecord> for Principal {
    type Error = InvalidRole;

    fn try_from(record: &UserRecord) -> Result<Self, Self::Error> {
        Ok(Self {
            id: record.id,
            role: record.role.parse()?,
            active: record.is_active,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(role: &str, is_active: bool) -> UserRecord {
        UserRecord {
            id: UserId::new(7),
            email: "parent@example.com".to_string(),
            role: role.to_string(),
            is_active,
        }
    }

    #[test]
    fn test_principal_from_record() {
        let principal = Principal::try_from(&record("parent", true)).unwrap();
        assert_eq!(principal, Principal::new(UserId::new(7), Role::Parent));
    }

    #[test]
    fn test_principal_keeps_inactive_flag() {
        let principal = Principal::try_from(&record("teacher", false)).unwrap();
        assert!(!principal.is_active());
    }

    #[test]
    fn test_unknown_role_rejected() {
        let err = Principal::try_from(&record("finance", true)).unwrap_err();
        assert_eq!(err.0, "finance");
    }

    #[test]
    fn test_deactivated() {
        let principal = Principal::new(UserId::new(1), Role::Admin).deactivated();
        assert!(!principal.active);
        assert_eq!(principal.role, Role::Admin);
    }
}
