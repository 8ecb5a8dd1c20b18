//! # Academia Config
//!
//! Configuration types for Academia, loaded from environment variables:
//!
//! - [`jwt`]: JWT verification configuration
//! - [`database`]: PostgreSQL connection settings
//! - [`policy`]: Authorization policy settings (role table source)
//!
//! Every config exposes `from_env()` plus a `from_lookup()` variant that takes
//! an arbitrary key lookup, so tests never touch the process environment.
//!
//! # Example
//!
//! ```ignore
//! use academia_config::{DatabaseConfig, JwtConfig, PolicyConfig};
//!
//! let jwt_config = JwtConfig::from_env();
//! let database_config = DatabaseConfig::from_env();
//! let policy_config = PolicyConfig::from_env();
//! ```

pub mod database;
pub mod jwt;
pub mod policy;

// Re-export commonly used types at crate root
pub use database::DatabaseConfig;
pub use jwt::JwtConfig;
pub use policy::PolicyConfig;

/// Reads `key` through `lookup` and parses it, falling back to `default`.
pub(crate) fn parse_or<T, F>(lookup: &F, key: &str, default: T) -> T
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    lookup(key).and_then(|v| v.parse().ok()).unwrap_or(default)
}
