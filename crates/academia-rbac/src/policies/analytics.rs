//! Report templates, generated reports and analytics views.

use super::{FINANCE_STAFF, guardian, owner};
use crate::gate::{AuthorizationGate, GateInfo, RoleGate};
use academia_core::RoleSet;
use academia_models::StudentId;
use academia_models::analytics::GeneratedReport;

// =============================================================================
// Report templates
// =============================================================================

pub const CREATE_REPORT_TEMPLATE: RoleGate = AuthorizationGate::role_only(
    "report_template.create",
    "create report templates",
    RoleSet::ADMIN,
);

pub const READ_REPORT_TEMPLATES: RoleGate = AuthorizationGate::role_only(
    "report_template.read",
    "access report templates",
    RoleSet::STAFF,
);

pub const UPDATE_REPORT_TEMPLATE: RoleGate = AuthorizationGate::role_only(
    "report_template.update",
    "update report templates",
    RoleSet::ADMIN,
);

pub const DELETE_REPORT_TEMPLATE: RoleGate = AuthorizationGate::role_only(
    "report_template.delete",
    "delete report templates",
    RoleSet::ADMIN,
);

// =============================================================================
// Generated reports
// =============================================================================

pub const CREATE_GENERATED_REPORT: RoleGate = AuthorizationGate::role_only(
    "generated_report.create",
    "create generated reports",
    RoleSet::STAFF,
);

pub const READ_GENERATED_REPORTS: RoleGate = AuthorizationGate::role_only(
    "generated_report.read",
    "access generated reports",
    RoleSet::STAFF,
);

pub const READ_GENERATED_REPORT: AuthorizationGate<GeneratedReport> = AuthorizationGate::new(
    "generated_report.read_one",
    "access this generated report",
    RoleSet::ADMIN,
    owner,
);

pub const UPDATE_GENERATED_REPORT: AuthorizationGate<GeneratedReport> = AuthorizationGate::new(
    "generated_report.update",
    "update this generated report",
    RoleSet::ADMIN,
    owner,
);

pub const DELETE_GENERATED_REPORT: AuthorizationGate<GeneratedReport> = AuthorizationGate::new(
    "generated_report.delete",
    "delete this generated report",
    RoleSet::ADMIN,
    owner,
);

// =============================================================================
// Analytics views
// =============================================================================

pub const ATTENDANCE_ANALYTICS: RoleGate = AuthorizationGate::role_only(
    "analytics.attendance",
    "access attendance analytics",
    RoleSet::STAFF,
);

pub const GRADE_ANALYTICS: RoleGate =
    AuthorizationGate::role_only("analytics.grades", "access grade analytics", RoleSet::STAFF);

/// Performance of one student: staff, or a parent linked to the student.
pub const STUDENT_PERFORMANCE: AuthorizationGate<StudentId> = AuthorizationGate::new(
    "analytics.student_performance",
    "access this student's performance data",
    RoleSet::STAFF,
    guardian,
);

pub const CLASS_PERFORMANCE: RoleGate = AuthorizationGate::role_only(
    "analytics.class_performance",
    "access class performance summary",
    RoleSet::STAFF,
);

pub const FINANCIAL_SUMMARY: RoleGate = AuthorizationGate::role_only(
    "analytics.financial_summary",
    "access financial summary",
    FINANCE_STAFF,
);

pub(crate) fn gates() -> Vec<GateInfo> {
    vec![
        CREATE_REPORT_TEMPLATE.info(),
        READ_REPORT_TEMPLATES.info(),
        UPDATE_REPORT_TEMPLATE.info(),
        DELETE_REPORT_TEMPLATE.info(),
        CREATE_GENERATED_REPORT.info(),
        READ_GENERATED_REPORTS.info(),
        READ_GENERATED_REPORT.info(),
        UPDATE_GENERATED_REPORT.info(),
        DELETE_GENERATED_REPORT.info(),
        ATTENDANCE_ANALYTICS.info(),
        GRADE_ANALYTICS.info(),
        STUDENT_PERFORMANCE.info(),
        CLASS_PERFORMANCE.info(),
        FINANCIAL_SUMMARY.info(),
    ]
}
