use academia_core::{Permission, Role};
use academia_rbac::{PolicyEvaluator, RolePermissionMap, TableError, policies};
use std::fmt::Write;
use std::path::Path;

/// Every role with the number of permissions it holds.
pub fn roles(table: &RolePermissionMap) -> String {
    let mut out = String::new();
    for role in table.roles() {
        let _ = writeln!(out, "{:<8} {:>2} permissions", role.as_str(), table.permissions_for(role).len());
    }
    out
}

/// The permissions of `role`, or the whole catalog grouped by category.
pub fn permissions(table: &RolePermissionMap, role: Option<Role>) -> String {
    let mut out = String::new();
    match role {
        Some(role) => {
            for permission in table.permissions_for(role) {
                let _ = writeln!(out, "{permission}");
            }
        }
        None => {
            for permission in Permission::ALL {
                let _ = writeln!(out, "{:<22} {}", permission.category().as_str(), permission);
            }
        }
    }
    out
}

/// Whether a role, given by name, holds a permission, given by name.
///
/// Unknown names are answered, not rejected: they are simply never granted.
pub fn check(table: &RolePermissionMap, role: &str, permission: &str) -> String {
    let evaluator = PolicyEvaluator::new(table);
    let verdict = if evaluator.has_permission_named(role, permission) {
        "allowed"
    } else {
        "denied"
    };
    format!("{role} / {permission}: {verdict}\n")
}

pub fn capabilities(table: &RolePermissionMap, role: Role) -> String {
    let evaluator = PolicyEvaluator::new(table);
    let mut out = String::new();
    for (name, granted) in evaluator.capabilities(role) {
        let _ = writeln!(out, "{name:<26} {}", if granted { "yes" } else { "no" });
    }
    out
}

/// Every guarded operation with its blanket roles.
pub fn gates() -> String {
    let mut out = String::new();
    for gate in policies::catalog() {
        let blanket: Vec<&str> = gate.blanket.iter().map(|r| r.as_str()).collect();
        let _ = writeln!(
            out,
            "{:<32} [{}]{} Not authorized to {}",
            gate.name,
            blanket.join(", "),
            if gate.ownership { " +ownership" } else { "" },
            gate.action
        );
    }
    out
}

/// Load and validate a role table file.
pub fn validate(path: &Path) -> Result<String, TableError> {
    let table = RolePermissionMap::load(path)?;
    let mut out = format!("{}: ok\n", path.display());
    out.push_str(&roles(&table));
    Ok(out)
}
