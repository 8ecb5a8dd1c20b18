use academia_core::{Permission, Role};
use academia_models::{StudentId, UserId};
use academia_rbac::Grant;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

/// The caller's effective authorization profile.
#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub user_id: UserId,
    pub email: String,
    pub role: Role,
    pub permissions: Vec<Permission>,
    pub capabilities: BTreeMap<&'static str, bool>,
    /// Students the caller is linked to as a parent. Empty for other roles.
    pub linked_students: Vec<StudentId>,
}

/// Comma-separated permission names, e.g. `?names=manage_fees,manage_payments`.
#[derive(Debug, Deserialize)]
pub struct PermissionNamesQuery {
    #[serde(default)]
    pub names: String,
}

impl PermissionNamesQuery {
    pub fn names(&self) -> Vec<&str> {
        self.names
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .collect()
    }
}

#[derive(Debug, Serialize)]
pub struct PermissionCheckResponse {
    pub permissions: Vec<String>,
    pub granted: bool,
}

/// A successful gate evaluation.
#[derive(Debug, Serialize)]
pub struct AccessResponse {
    pub gate: &'static str,
    pub allowed: bool,
    pub grant: Grant,
}

impl AccessResponse {
    pub fn new(gate: &'static str, grant: Grant) -> Self {
        Self {
            gate,
            allowed: true,
            grant,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_query_splits_and_trims() {
        let query = PermissionNamesQuery {
            names: "manage_fees, manage_payments,,".to_string(),
        };
        assert_eq!(query.names(), vec!["manage_fees", "manage_payments"]);
    }

    #[test]
    fn test_empty_names_query() {
        let query = PermissionNamesQuery {
            names: String::new(),
        };
        assert!(query.names().is_empty());
    }
}
