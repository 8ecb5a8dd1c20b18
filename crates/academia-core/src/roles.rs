//! The role registry.
//!
//! Roles form a closed set. A string that does not name one of them is never
//! promoted to a [`Role`]; callers that receive such a string treat the
//! principal as holding no permissions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Coarse-grained category of principal, used as the primary permission key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Teacher,
    Student,
    Parent,
}

impl Role {
    /// Every role, in registry order.
    pub const ALL: [Role; 4] = [Role::Admin, Role::Teacher, Role::Student, Role::Parent];

    pub const fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Teacher => "teacher",
            Role::Student => "student",
            Role::Parent => "parent",
        }
    }

    /// Look up a role by its wire name. Matching is exact.
    pub fn parse(value: &str) -> Option<Role> {
        match value {
            "admin" => Some(Role::Admin),
            "teacher" => Some(Role::Teacher),
            "student" => Some(Role::Student),
            "parent" => Some(Role::Parent),
            _ => None,
        }
    }

    pub(crate) const fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A role name outside the registry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid role: {0}")]
pub struct InvalidRole(pub String);

impl FromStr for Role {
    type Err = InvalidRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::parse(s).ok_or_else(|| InvalidRole(s.to_string()))
    }
}

/// Whether `value` names a registered role.
pub fn is_valid_role(value: &str) -> bool {
    Role::parse(value).is_some()
}

/// A small set of roles, used for blanket grants.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RoleSet(u8);

impl RoleSet {
    pub const EMPTY: RoleSet = RoleSet(0);
    pub const ADMIN: RoleSet = RoleSet::EMPTY.with(Role::Admin);
    pub const STAFF: RoleSet = RoleSet::ADMIN.with(Role::Teacher);
    pub const FAMILY: RoleSet = RoleSet::EMPTY.with(Role::Student).with(Role::Parent);

    pub const fn with(self, role: Role) -> Self {
        RoleSet(self.0 | role.bit())
    }

    pub fn of(roles: &[Role]) -> Self {
        roles.iter().fold(RoleSet::EMPTY, |set, role| set.with(*role))
    }

    /// Build a set from wire names, dropping any name outside the registry.
    ///
    /// Returns the set together with the names that were dropped.
    pub fn from_names<'a, I>(names: I) -> (Self, Vec<&'a str>)
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut set = RoleSet::EMPTY;
        let mut unknown = Vec::new();
        for name in names {
            match Role::parse(name) {
                Some(role) => set = set.with(role),
                None => unknown.push(name),
            }
        }
        (set, unknown)
    }

    pub const fn contains(self, role: Role) -> bool {
        self.0 & role.bit() != 0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn iter(self) -> impl Iterator<Item = Role> {
        Role::ALL.into_iter().filter(move |role| self.contains(*role))
    }
}

impl fmt::Debug for RoleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
