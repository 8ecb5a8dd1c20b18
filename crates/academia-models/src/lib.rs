//! # Academia Models
//!
//! Domain records the authorization layer reads:
//!
//! - [`ids`]: Strongly-typed integer ids
//! - [`users`]: Persisted user records and the authenticated [`Principal`]
//! - [`parents`]: Parent-to-student links
//! - [`communication`]: Messages, notifications, announcements
//! - [`finance`]: Fee structures, fee payments, expenses
//! - [`analytics`]: Report templates and generated reports
//! - [`staff`]: Staff profiles
//! - [`data_transfer`]: Data import and export records
//!
//! Only the fields that carry ownership or relationship facts are modelled in
//! full; everything else about these entities belongs to their CRUD handlers.

pub mod analytics;
pub mod communication;
pub mod data_transfer;
pub mod finance;
pub mod ids;
pub mod parents;
pub mod staff;
pub mod users;

pub use ids::{
    AnnouncementId, DataExportId, DataImportId, ExpenseId, FeePaymentId, FeeStructureId,
    GeneratedReportId, MessageId, NotificationId, ParentLinkId, ReportTemplateId, StaffId,
    StudentId, UserId,
};
pub use parents::ParentLink;
pub use users::{Principal, UserRecord};
