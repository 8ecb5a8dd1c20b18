//! Bulk data transfers and their bookkeeping records.

use crate::gate::{AuthorizationGate, GateInfo, RoleGate};
use academia_core::RoleSet;

// =============================================================================
// Transfers
// =============================================================================

pub const IMPORT_DATA: RoleGate =
    AuthorizationGate::role_only("data.import", "import data", RoleSet::ADMIN);

pub const EXPORT_DATA: RoleGate =
    AuthorizationGate::role_only("data.export", "export data", RoleSet::STAFF);

// =============================================================================
// Import records
// =============================================================================

pub const CREATE_IMPORT_RECORD: RoleGate = AuthorizationGate::role_only(
    "data_import.create",
    "create data import records",
    RoleSet::ADMIN,
);

pub const READ_IMPORT_RECORDS: RoleGate = AuthorizationGate::role_only(
    "data_import.read",
    "access data import records",
    RoleSet::ADMIN,
);

pub const UPDATE_IMPORT_RECORD: RoleGate = AuthorizationGate::role_only(
    "data_import.update",
    "update data import records",
    RoleSet::ADMIN,
);

pub const DELETE_IMPORT_RECORD: RoleGate = AuthorizationGate::role_only(
    "data_import.delete",
    "delete data import records",
    RoleSet::ADMIN,
);

// =============================================================================
// Export records
// =============================================================================

pub const CREATE_EXPORT_RECORD: RoleGate = AuthorizationGate::role_only(
    "data_export.create",
    "create data export records",
    RoleSet::STAFF,
);

pub const READ_EXPORT_RECORDS: RoleGate = AuthorizationGate::role_only(
    "data_export.read",
    "access data export records",
    RoleSet::STAFF,
);

pub const UPDATE_EXPORT_RECORD: RoleGate = AuthorizationGate::role_only(
    "data_export.update",
    "update data export records",
    RoleSet::STAFF,
);

pub const DELETE_EXPORT_RECORD: RoleGate = AuthorizationGate::role_only(
    "data_export.delete",
    "delete data export records",
    RoleSet::STAFF,
);

pub(crate) fn gates() -> Vec<GateInfo> {
    vec![
        IMPORT_DATA.info(),
        EXPORT_DATA.info(),
        CREATE_IMPORT_RECORD.info(),
        READ_IMPORT_RECORDS.info(),
        UPDATE_IMPORT_RECORD.info(),
        DELETE_IMPORT_RECORD.info(),
        CREATE_EXPORT_RECORD.info(),
        READ_EXPORT_RECORDS.info(),
        UPDATE_EXPORT_RECORD.info(),
        DELETE_EXPORT_RECORD.info(),
    ]
}
