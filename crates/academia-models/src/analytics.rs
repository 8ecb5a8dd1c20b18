//! Report templates and the reports generated from them.

use crate::ids::{GeneratedReportId, ReportTemplateId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportTemplate {
    pub id: ReportTemplateId,
    pub name: String,
    pub template_type: String,
    pub created_by: UserId,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedReport {
    pub id: GeneratedReportId,
    pub template_id: ReportTemplateId,
    pub report_name: String,
    pub report_type: String,
    pub generated_by: UserId,
    pub generated_at: DateTime<Utc>,
}
