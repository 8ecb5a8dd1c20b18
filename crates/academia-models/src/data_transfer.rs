//! Bookkeeping records for bulk data imports and exports.
//!
//! The file conversion itself lives elsewhere; these rows only record who ran
//! a transfer and how it ended.

use crate::ids::{DataExportId, DataImportId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataImport {
    pub id: DataImportId,
    pub file_name: String,
    pub import_type: String,
    pub status: String,
    pub imported_by: UserId,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataExport {
    pub id: DataExportId,
    pub file_name: String,
    pub export_type: String,
    pub status: String,
    pub exported_by: UserId,
    pub created_at: DateTime<Utc>,
}
