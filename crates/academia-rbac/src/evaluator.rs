//! Permission membership questions over a [`RolePermissionMap`].
//!
//! All answers are plain booleans and default to `false`. The `_named`
//! variants accept wire strings for roles and permissions; a role name outside
//! the registry yields `false` from every one of them, and an unknown
//! permission name is simply never held.

use crate::table::RolePermissionMap;
use academia_core::{Permission, Role};
use std::collections::BTreeSet;

/// Stateless evaluator borrowing an immutable table.
#[derive(Debug, Clone, Copy)]
pub struct PolicyEvaluator<'a> {
    table: &'a RolePermissionMap,
}

impl<'a> PolicyEvaluator<'a> {
    pub const fn new(table: &'a RolePermissionMap) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &'a RolePermissionMap {
        self.table
    }

    pub fn permissions_for(&self, role: Role) -> &'a BTreeSet<Permission> {
        self.table.permissions_for(role)
    }

    pub fn has_permission(&self, role: Role, permission: Permission) -> bool {
        self.permissions_for(role).contains(&permission)
    }

    /// True when `role` holds at least one of `permissions`.
    ///
    /// An empty request is never a grant.
    pub fn has_any_permission(&self, role: Role, permissions: &[Permission]) -> bool {
        permissions.iter().any(|p| self.has_permission(role, *p))
    }

    /// True when `role` holds every one of `permissions`.
    ///
    /// An empty request is vacuously satisfied. Guards protecting a real
    /// action must not pass an empty list.
    pub fn has_all_permissions(&self, role: Role, permissions: &[Permission]) -> bool {
        permissions.iter().all(|p| self.has_permission(role, *p))
    }

    pub fn has_permission_named(&self, role: &str, permission: &str) -> bool {
        match (Role::parse(role), Permission::parse(permission)) {
            (Some(role), Some(permission)) => self.has_permission(role, permission),
            _ => false,
        }
    }

    pub fn has_any_permission_named(&self, role: &str, permissions: &[&str]) -> bool {
        let Some(role) = Role::parse(role) else {
            return false;
        };
        permissions
            .iter()
            .filter_map(|name| Permission::parse(name))
            .any(|p| self.has_permission(role, p))
    }

    pub fn has_all_permissions_named(&self, role: &str, permissions: &[&str]) -> bool {
        let Some(role) = Role::parse(role) else {
            return false;
        };
        permissions.iter().all(|name| {
            Permission::parse(name).is_some_and(|p| self.has_permission(role, p))
        })
    }

    /// The permissions of a role given by name; empty for an unknown name.
    pub fn role_permissions(&self, role: &str) -> Vec<Permission> {
        Role::parse(role)
            .map(|role| self.permissions_for(role).iter().copied().collect())
            .unwrap_or_default()
    }
}
