//! The gate for every guarded operation.
//!
//! Each submodule declares its gates as constants. Handlers pick the gate for
//! the operation they serve and evaluate it after the target resource has been
//! loaded, so a missing resource is reported before any authorization answer.
//!
//! The old `finance` role string is not part of the role registry. Gates that
//! used to grant it now grant admins only, see [`FINANCE_STAFF`].

use crate::gate::GateInfo;
use crate::ownership::{Owned, OwnershipResolver, StudentScoped};
use academia_core::RoleSet;
use academia_models::Principal;

pub mod analytics;
pub mod communication;
pub mod data_transfer;
pub mod finance;
pub mod parents;
pub mod staff;

/// Roles with blanket access to financial records.
pub const FINANCE_STAFF: RoleSet = RoleSet::ADMIN;

pub(crate) fn owner<R: Owned>(
    resolver: &OwnershipResolver<'_>,
    principal: &Principal,
    resource: &R,
) -> bool {
    resolver.is_owner(principal, resource)
}

pub(crate) fn guardian<R: StudentScoped>(
    resolver: &OwnershipResolver<'_>,
    principal: &Principal,
    resource: &R,
) -> bool {
    resolver.is_guardian_for(principal, resource)
}

/// Every gate declared in this module, grouped by area.
pub fn catalog() -> Vec<GateInfo> {
    let mut gates = Vec::new();
    gates.extend(communication::gates());
    gates.extend(finance::gates());
    gates.extend(parents::gates());
    gates.extend(analytics::gates());
    gates.extend(staff::gates());
    gates.extend(data_transfer::gates());
    gates
}
