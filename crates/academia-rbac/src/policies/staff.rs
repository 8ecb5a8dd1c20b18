//! Staff profiles.

use super::owner;
use crate::gate::{AuthorizationGate, GateInfo, RoleGate};
use academia_core::RoleSet;
use academia_models::staff::StaffProfile;

pub const CREATE_STAFF: RoleGate =
    AuthorizationGate::role_only("staff.create", "create staff", RoleSet::ADMIN);

/// Staff read any profile; everyone else only their own.
pub const READ_STAFF_PROFILE: AuthorizationGate<StaffProfile> = AuthorizationGate::new(
    "staff.read",
    "access this staff profile",
    RoleSet::STAFF,
    owner,
);

pub const LIST_STAFF: RoleGate =
    AuthorizationGate::role_only("staff.list", "access staff list", RoleSet::STAFF);

pub const STAFF_BY_DEPARTMENT: RoleGate = AuthorizationGate::role_only(
    "staff.by_department",
    "access staff by department",
    RoleSet::STAFF,
);

pub const UPDATE_STAFF: RoleGate =
    AuthorizationGate::role_only("staff.update", "update staff profiles", RoleSet::ADMIN);

pub const DELETE_STAFF: RoleGate =
    AuthorizationGate::role_only("staff.delete", "delete staff profiles", RoleSet::ADMIN);

pub(crate) fn gates() -> Vec<GateInfo> {
    vec![
        CREATE_STAFF.info(),
        READ_STAFF_PROFILE.info(),
        LIST_STAFF.info(),
        STAFF_BY_DEPARTMENT.info(),
        UPDATE_STAFF.info(),
        DELETE_STAFF.info(),
    ]
}
