//! Named capabilities derived from a role's permissions.

use crate::evaluator::PolicyEvaluator;
use academia_core::{Permission, Role};

const ACADEMIC: [Permission; 5] = [
    Permission::ManageClasses,
    Permission::ManageSubjects,
    Permission::ManageTimetables,
    Permission::ManageGrades,
    Permission::ManageAttendance,
];

const FINANCE: [Permission; 3] = [
    Permission::ManageFees,
    Permission::ManagePayments,
    Permission::ManageExpenses,
];

const COMMUNICATION: [Permission; 2] = [Permission::SendAnnouncements, Permission::SendMessages];

const OWN_DATA: [Permission; 4] = [
    Permission::ViewOwnProfile,
    Permission::ViewOwnAcademics,
    Permission::ViewOwnAttendance,
    Permission::ViewOwnSchedule,
];

/// Whether `role` is the top-level administrator. Independent of the table.
pub fn is_super_admin(role: Role) -> bool {
    role == Role::Admin
}

impl PolicyEvaluator<'_> {
    pub fn can_manage_users(&self, role: Role) -> bool {
        self.has_permission(role, Permission::CreateUser)
    }

    /// Only the super admin manages other admins.
    pub fn can_manage_admins(&self, role: Role) -> bool {
        is_super_admin(role)
    }

    pub fn can_access_system_config(&self, role: Role) -> bool {
        self.has_permission(role, Permission::ConfigureSystem)
    }

    pub fn can_manage_modules(&self, role: Role) -> bool {
        self.has_permission(role, Permission::ManageModules)
    }

    pub fn can_access_all_data(&self, role: Role) -> bool {
        self.has_permission(role, Permission::AccessAllData)
    }

    pub fn can_run_reports(&self, role: Role) -> bool {
        self.has_permission(role, Permission::RunReports)
    }

    pub fn can_manage_academics(&self, role: Role) -> bool {
        self.has_any_permission(role, &ACADEMIC)
    }

    pub fn can_manage_finance(&self, role: Role) -> bool {
        self.has_any_permission(role, &FINANCE)
    }

    pub fn can_communicate(&self, role: Role) -> bool {
        self.has_any_permission(role, &COMMUNICATION)
    }

    pub fn can_view_own_data(&self, role: Role) -> bool {
        self.has_any_permission(role, &OWN_DATA)
    }

    pub fn can_update_own_data(&self, role: Role) -> bool {
        self.has_permission(role, Permission::UpdateOwnProfile)
    }

    /// Every capability with its answer for `role`, in a stable order.
    pub fn capabilities(&self, role: Role) -> Vec<(&'static str, bool)> {
        vec![
            ("is_super_admin", is_super_admin(role)),
            ("can_manage_users", self.can_manage_users(role)),
            ("can_manage_admins", self.can_manage_admins(role)),
            ("can_access_system_config", self.can_access_system_config(role)),
            ("can_manage_modules", self.can_manage_modules(role)),
            ("can_access_all_data", self.can_access_all_data(role)),
            ("can_run_reports", self.can_run_reports(role)),
            ("can_manage_academics", self.can_manage_academics(role)),
            ("can_manage_finance", self.can_manage_finance(role)),
            ("can_communicate", self.can_communicate(role)),
            ("can_view_own_data", self.can_view_own_data(role)),
            ("can_update_own_data", self.can_update_own_data(role)),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::RolePermissionMap;

    #[test]
    fn test_admin_has_every_capability() {
        let table = RolePermissionMap::builtin();
        let evaluator = PolicyEvaluator::new(&table);
        for (name, granted) in evaluator.capabilities(Role::Admin) {
            assert!(granted, "admin should have {name}");
        }
    }

    #[test]
    fn test_teacher_capabilities() {
        let table = RolePermissionMap::builtin();
        let evaluator = PolicyEvaluator::new(&table);

        assert!(evaluator.can_manage_academics(Role::Teacher));
        assert!(evaluator.can_communicate(Role::Teacher));
        assert!(evaluator.can_run_reports(Role::Teacher));
        assert!(evaluator.can_view_own_data(Role::Teacher));
        assert!(!evaluator.can_manage_users(Role::Teacher));
        assert!(!evaluator.can_manage_finance(Role::Teacher));
        assert!(!evaluator.can_manage_admins(Role::Teacher));
        assert!(!evaluator.can_access_system_config(Role::Teacher));
    }

    #[test]
    fn test_family_roles_are_self_service_only() {
        let table = RolePermissionMap::builtin();
        let evaluator = PolicyEvaluator::new(&table);

        for role in [Role::Student, Role::Parent] {
            let granted: Vec<&str> = evaluator
                .capabilities(role)
                .into_iter()
                .filter(|(_, granted)| *granted)
                .map(|(name, _)| name)
                .collect();
            assert_eq!(granted, vec!["can_view_own_data", "can_update_own_data"]);
        }
    }

    #[test]
    fn test_super_admin_ignores_table() {
        let table = RolePermissionMap::from_entries([
            ("admin", Vec::<&str>::new()),
            ("teacher", vec![]),
            ("student", vec![]),
            ("parent", vec![]),
        ])
        .unwrap();
        let evaluator = PolicyEvaluator::new(&table);

        assert!(evaluator.can_manage_admins(Role::Admin));
        assert!(!evaluator.can_manage_users(Role::Admin));
    }
}
