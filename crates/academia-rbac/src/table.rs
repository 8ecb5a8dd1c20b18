//! The role→permission table.
//!
//! Built once at startup, either from the built-in assignment or from a JSON
//! file, then shared behind an `Arc` and never mutated. Every role has exactly
//! one entry; a table that would violate that is rejected while loading.

use academia_core::{Permission, Role};
use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

static NO_PERMISSIONS: BTreeSet<Permission> = BTreeSet::new();

#[derive(Debug, Error)]
pub enum TableError {
    #[error("unknown role in role table: {0}")]
    UnknownRole(String),
    #[error("unknown permission {permission:?} assigned to role {role}")]
    UnknownPermission { role: Role, permission: String },
    #[error("role {0} appears more than once in role table")]
    DuplicateRole(Role),
    #[error("role {0} has no entry in role table")]
    MissingRole(Role),
    #[error("invalid role table: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("failed to read role table {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Role table entries in document order, duplicates kept.
struct RawEntries(Vec<(String, Vec<String>)>);

impl<'de> Deserialize<'de> for RawEntries {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = RawEntries;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object mapping role names to permission lists")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry::<String, Vec<String>>()? {
                    entries.push(entry);
                }
                Ok(RawEntries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}

/// Mapping from each role to the set of permissions it holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RolePermissionMap {
    entries: BTreeMap<Role, BTreeSet<Permission>>,
}

impl RolePermissionMap {
    /// The standard assignment.
    pub fn builtin() -> Self {
        use Permission::*;

        const SELF_SERVICE: [Permission; 6] = [
            ViewOwnProfile,
            UpdateOwnProfile,
            ViewOwnAcademics,
            ViewOwnAttendance,
            ViewOwnSchedule,
            CommunicateWithTeachers,
        ];

        let admin = Permission::ALL.iter().copied().collect();

        let teacher = [
            ManageGrades,
            ManageAttendance,
            SendAnnouncements,
            SendMessages,
            RunReports,
        ]
        .into_iter()
        .chain(SELF_SERVICE)
        .collect();

        let entries = BTreeMap::from([
            (Role::Admin, admin),
            (Role::Teacher, teacher),
            (Role::Student, SELF_SERVICE.into_iter().collect()),
            (Role::Parent, SELF_SERVICE.into_iter().collect()),
        ]);

        Self { entries }
    }

    /// Build a table from role and permission names.
    ///
    /// Every role must appear exactly once, and every name must belong to the
    /// registry or the catalog.
    pub fn from_entries<I, R, P, S>(entries: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = (R, P)>,
        R: AsRef<str>,
        P: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut table = BTreeMap::new();

        for (role_name, permission_names) in entries {
            let role_name = role_name.as_ref();
            let role = Role::parse(role_name)
                .ok_or_else(|| TableError::UnknownRole(role_name.to_string()))?;

            let permissions = permission_names
                .into_iter()
                .map(|name| {
                    let name = name.as_ref();
                    Permission::parse(name).ok_or_else(|| TableError::UnknownPermission {
                        role,
                        permission: name.to_string(),
                    })
                })
                .collect::<Result<BTreeSet<_>, _>>()?;

            if table.insert(role, permissions).is_some() {
                return Err(TableError::DuplicateRole(role));
            }
        }

        if let Some(missing) = Role::ALL.into_iter().find(|r| !table.contains_key(r)) {
            return Err(TableError::MissingRole(missing));
        }

        Ok(Self { entries: table })
    }

    /// Parse a JSON object of the form `{"admin": ["create_user", ...], ...}`.
    ///
    /// A role key repeated in the object is rejected, not merged.
    pub fn from_json(raw: &str) -> Result<Self, TableError> {
        let RawEntries(entries) = serde_json::from_str(raw)?;
        Self::from_entries(entries)
    }

    /// Load a JSON role table from disk.
    pub fn load(path: &Path) -> Result<Self, TableError> {
        let raw = std::fs::read_to_string(path).map_err(|source| TableError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let table = Self::from_json(&raw)?;
        info!(path = %path.display(), "Loaded role table");
        Ok(table)
    }

    /// Load from `path` when given, otherwise use [`RolePermissionMap::builtin`].
    pub fn load_or_builtin(path: Option<&Path>) -> Result<Self, TableError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::builtin()),
        }
    }

    /// The permissions held by `role`. Empty for a role without an entry.
    pub fn permissions_for(&self, role: Role) -> &BTreeSet<Permission> {
        self.entries.get(&role).unwrap_or(&NO_PERMISSIONS)
    }

    pub fn roles(&self) -> impl Iterator<Item = Role> + '_ {
        self.entries.keys().copied()
    }

    /// Serialize back to the JSON shape accepted by [`RolePermissionMap::from_json`].
    pub fn to_json(&self) -> serde_json::Value {
        let object = self
            .entries
            .iter()
            .map(|(role, permissions)| {
                let names = permissions
                    .iter()
                    .map(|p| serde_json::Value::from(p.as_str()))
                    .collect();
                (role.as_str().to_string(), serde_json::Value::Array(names))
            })
            .collect();
        serde_json::Value::Object(object)
    }
}

impl Default for RolePermissionMap {
    fn default() -> Self {
        Self::builtin()
    }
}
