//! # Academia CLI
//!
//! Inspection commands over a role table. Each command renders to a `String`
//! so the binary only has to print it.
//!
//! ## Usage
//!
//! ```ignore
//! use academia_cli::commands;
//! use academia_rbac::RolePermissionMap;
//!
//! let table = RolePermissionMap::builtin();
//! println!("{}", commands::check(&table, "teacher", "manage_grades"));
//! ```

pub mod commands;
