//! The permission catalog.
//!
//! Every capability the system can grant is listed here exactly once. Call
//! sites refer to [`Permission`] variants, and the string form only exists at
//! the boundary (tokens, role tables loaded from disk, CLI arguments).
//!
//! # Example
//!
//! ```ignore
//! use academia_core::Permission;
//!
//! assert_eq!(Permission::ManageGrades.as_str(), "manage_grades");
//! assert_eq!(Permission::parse("manage_grades"), Some(Permission::ManageGrades));
//! assert_eq!(Permission::parse("fly"), None);
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Grouping used when listing the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PermissionCategory {
    UserManagement,
    SystemConfiguration,
    DataAccess,
    ModuleManagement,
    AcademicManagement,
    FinancialManagement,
    Communication,
    SelfService,
}

impl PermissionCategory {
    pub const fn as_str(self) -> &'static str {
        match self {
            PermissionCategory::UserManagement => "user_management",
            PermissionCategory::SystemConfiguration => "system_configuration",
            PermissionCategory::DataAccess => "data_access",
            PermissionCategory::ModuleManagement => "module_management",
            PermissionCategory::AcademicManagement => "academic_management",
            PermissionCategory::FinancialManagement => "financial_management",
            PermissionCategory::Communication => "communication",
            PermissionCategory::SelfService => "self_service",
        }
    }
}

macro_rules! permission_catalog {
    (
        $(
            $(#[$meta:meta])*
            $variant:ident => $name:literal in $category:ident;
        )+
    ) => {
        /// A named, fine-grained capability.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Permission {
            $(
                $(#[$meta])*
                $variant,
            )+
        }

        impl Permission {
            /// The full catalog, in declaration order.
            pub const ALL: &'static [Permission] = &[$(Permission::$variant,)+];

            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Permission::$variant => $name,)+
                }
            }

            pub const fn category(self) -> PermissionCategory {
                match self {
                    $(Permission::$variant => PermissionCategory::$category,)+
                }
            }

            /// Look up a permission by its wire name. Matching is exact.
            pub fn parse(value: &str) -> Option<Permission> {
                match value {
                    $($name => Some(Permission::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

permission_catalog! {
    // =========================================================================
    // User management
    // =========================================================================

    /// Create user accounts
    CreateUser => "create_user" in UserManagement;
    /// Read user accounts
    ReadUser => "read_user" in UserManagement;
    /// Update user accounts
    UpdateUser => "update_user" in UserManagement;
    /// Delete user accounts
    DeleteUser => "delete_user" in UserManagement;
    /// Reset another user's password
    ResetPassword => "reset_password" in UserManagement;

    // =========================================================================
    // System configuration
    // =========================================================================

    ConfigureSystem => "configure_system" in SystemConfiguration;
    ManageLicenses => "manage_licenses" in SystemConfiguration;
    ViewAuditLogs => "view_audit_logs" in SystemConfiguration;

    // =========================================================================
    // Data access
    // =========================================================================

    /// Read any record regardless of ownership
    AccessAllData => "access_all_data" in DataAccess;
    RunReports => "run_reports" in DataAccess;

    // =========================================================================
    // Module management
    // =========================================================================

    ManageModules => "manage_modules" in ModuleManagement;

    // =========================================================================
    // Academic management
    // =========================================================================

    ManageClasses => "manage_classes" in AcademicManagement;
    ManageSubjects => "manage_subjects" in AcademicManagement;
    ManageTimetables => "manage_timetables" in AcademicManagement;
    ManageGrades => "manage_grades" in AcademicManagement;
    ManageAttendance => "manage_attendance" in AcademicManagement;

    // =========================================================================
    // Financial management
    // =========================================================================

    ManageFees => "manage_fees" in FinancialManagement;
    ManagePayments => "manage_payments" in FinancialManagement;
    ManageExpenses => "manage_expenses" in FinancialManagement;

    // =========================================================================
    // Communication
    // =========================================================================

    SendAnnouncements => "send_announcements" in Communication;
    SendMessages => "send_messages" in Communication;

    // =========================================================================
    // Self service
    // =========================================================================

    ViewOwnProfile => "view_own_profile" in SelfService;
    UpdateOwnProfile => "update_own_profile" in SelfService;
    ViewOwnAcademics => "view_own_academics" in SelfService;
    ViewOwnAttendance => "view_own_attendance" in SelfService;
    ViewOwnSchedule => "view_own_schedule" in SelfService;
    CommunicateWithTeachers => "communicate_with_teachers" in SelfService;
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A permission name outside the catalog.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown permission: {0}")]
pub struct InvalidPermission(pub String);

impl FromStr for Permission {
    type Err = InvalidPermission;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Permission::parse(s).ok_or_else(|| InvalidPermission(s.to_string()))
    }
}

impl Serialize for Permission {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Permission {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// The full catalog as a set.
pub fn all_permissions() -> BTreeSet<Permission> {
    Permission::ALL.iter().copied().collect()
}

/// The full catalog as wire names.
pub fn all_permission_names() -> BTreeSet<&'static str> {
    Permission::ALL.iter().map(|p| p.as_str()).collect()
}
