//! Authorization policy settings.
//!
//! - `RBAC_ROLE_TABLE`: path to a JSON role table that replaces the built-in
//!   one. Unset means the built-in table.

use std::path::PathBuf;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PolicyConfig {
    pub role_table_path: Option<PathBuf>,
}

impl PolicyConfig {
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            role_table_path: lookup("RBAC_ROLE_TABLE")
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
        }
    }
}
