//! Parent-to-student link records.

use super::owner;
use crate::gate::{AuthorizationGate, GateInfo, RoleGate};
use academia_core::RoleSet;
use academia_models::{ParentLink, UserId};

/// Admins link anyone. A user may link their own account to a student.
pub const CREATE_PARENT_LINK: AuthorizationGate<ParentLink> = AuthorizationGate::new(
    "parent_link.create",
    "create this parent relationship",
    RoleSet::ADMIN,
    owner,
);

pub const READ_PARENT_LINK: AuthorizationGate<ParentLink> = AuthorizationGate::new(
    "parent_link.read",
    "access this parent relationship",
    RoleSet::ADMIN,
    owner,
);

/// All links of the given user.
pub const READ_USER_PARENT_LINKS: AuthorizationGate<UserId> = AuthorizationGate::new(
    "parent_link.read_for_user",
    "access these parent relationships",
    RoleSet::ADMIN,
    owner,
);

pub const UPDATE_PARENT_LINK: RoleGate =
    AuthorizationGate::role_only("parent_link.update", "update parent relationships", RoleSet::ADMIN);

pub const DELETE_PARENT_LINK: RoleGate =
    AuthorizationGate::role_only("parent_link.delete", "delete parent relationships", RoleSet::ADMIN);

pub(crate) fn gates() -> Vec<GateInfo> {
    vec![
        CREATE_PARENT_LINK.info(),
        READ_PARENT_LINK.info(),
        READ_USER_PARENT_LINKS.info(),
        UPDATE_PARENT_LINK.info(),
        DELETE_PARENT_LINK.info(),
    ]
}
