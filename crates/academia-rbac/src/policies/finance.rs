//! Fee structures, fee payments and expenses.

use super::{FINANCE_STAFF, guardian};
use crate::gate::{AuthorizationGate, Denied, GateInfo, Grant, RoleGate};
use crate::ownership::OwnershipResolver;
use academia_core::{Role, RoleSet};
use academia_models::{Principal, StudentId};

// =============================================================================
// Fee structures
// =============================================================================

pub const CREATE_FEE_STRUCTURE: RoleGate =
    AuthorizationGate::role_only("fee_structure.create", "create fee structures", RoleSet::ADMIN);

pub const READ_FEE_STRUCTURES: RoleGate =
    AuthorizationGate::role_only("fee_structure.read", "access fee structures", FINANCE_STAFF);

pub const UPDATE_FEE_STRUCTURE: RoleGate =
    AuthorizationGate::role_only("fee_structure.update", "update fee structures", RoleSet::ADMIN);

pub const DELETE_FEE_STRUCTURE: RoleGate =
    AuthorizationGate::role_only("fee_structure.delete", "delete fee structures", RoleSet::ADMIN);

// =============================================================================
// Fee payments
// =============================================================================

pub const CREATE_FEE_PAYMENT: RoleGate =
    AuthorizationGate::role_only("fee_payment.create", "create fee payments", FINANCE_STAFF);

pub const READ_FEE_PAYMENTS: RoleGate =
    AuthorizationGate::role_only("fee_payment.read", "access fee payments", FINANCE_STAFF);

/// Payments of one student: finance staff, or a parent linked to the student.
pub const STUDENT_FEE_PAYMENTS: AuthorizationGate<StudentId> = AuthorizationGate::new(
    "fee_payment.read_for_student",
    "access this student's fee payments",
    FINANCE_STAFF,
    guardian,
);

/// Per-student fee payment access.
///
/// Parents are judged on their links to the student. Every other role is
/// screened by [`READ_FEE_PAYMENTS`] first, so a role without finance access
/// is denied fee payments as a whole rather than this student's.
pub fn authorize_student_fee_payments(
    principal: &Principal,
    student: StudentId,
    resolver: &OwnershipResolver<'_>,
) -> Result<Grant, Denied> {
    if principal.role != Role::Parent {
        READ_FEE_PAYMENTS.require(principal)?;
    }
    STUDENT_FEE_PAYMENTS.authorize(principal, &student, resolver)
}

pub const UPDATE_FEE_PAYMENT: RoleGate =
    AuthorizationGate::role_only("fee_payment.update", "update fee payments", FINANCE_STAFF);

pub const DELETE_FEE_PAYMENT: RoleGate =
    AuthorizationGate::role_only("fee_payment.delete", "delete fee payments", FINANCE_STAFF);

// =============================================================================
// Expenses
// =============================================================================

pub const CREATE_EXPENSE: RoleGate =
    AuthorizationGate::role_only("expense.create", "create expenses", FINANCE_STAFF);

pub const READ_EXPENSES: RoleGate =
    AuthorizationGate::role_only("expense.read", "access expenses", FINANCE_STAFF);

pub const UPDATE_EXPENSE: RoleGate =
    AuthorizationGate::role_only("expense.update", "update expenses", FINANCE_STAFF);

pub const DELETE_EXPENSE: RoleGate =
    AuthorizationGate::role_only("expense.delete", "delete expenses", FINANCE_STAFF);

pub(crate) fn gates() -> Vec<GateInfo> {
    vec![
        CREATE_FEE_STRUCTURE.info(),
        READ_FEE_STRUCTURES.info(),
        UPDATE_FEE_STRUCTURE.info(),
        DELETE_FEE_STRUCTURE.info(),
        CREATE_FEE_PAYMENT.info(),
        READ_FEE_PAYMENTS.info(),
        STUDENT_FEE_PAYMENTS.info(),
        UPDATE_FEE_PAYMENT.info(),
        DELETE_FEE_PAYMENT.info(),
        CREATE_EXPENSE.info(),
        READ_EXPENSES.info(),
        UPDATE_EXPENSE.info(),
        DELETE_EXPENSE.info(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use academia_models::{ParentLink, ParentLinkId, UserId};

    fn links() -> Vec<ParentLink> {
        vec![
            ParentLink::new(ParentLinkId::new(1), UserId::new(7), StudentId::new(101)),
            ParentLink::new(ParentLinkId::new(2), UserId::new(7), StudentId::new(102)),
        ]
    }

    #[test]
    fn test_linked_parent_reads_child_payments() {
        let links = links();
        let resolver = OwnershipResolver::new(&links);
        let parent = Principal::new(UserId::new(7), Role::Parent);

        let decision = STUDENT_FEE_PAYMENTS.evaluate(&parent, &StudentId::new(101), &resolver);
        assert!(decision.allowed);
        assert_eq!(decision.reason, None);
        assert_eq!(decision.grant, Some(Grant::Ownership));
    }

    #[test]
    fn test_unlinked_student_payments_denied() {
        let links = links();
        let resolver = OwnershipResolver::new(&links);
        let parent = Principal::new(UserId::new(7), Role::Parent);

        let decision = STUDENT_FEE_PAYMENTS.evaluate(&parent, &StudentId::new(103), &resolver);
        assert!(!decision.allowed);
        assert_eq!(
            decision.reason.as_deref(),
            Some("Not authorized to access this student's fee payments")
        );
    }

    #[test]
    fn test_teacher_and_student_cannot_read_student_payments() {
        let links = links();
        let resolver = OwnershipResolver::new(&links);
        for role in [Role::Teacher, Role::Student] {
            let principal = Principal::new(UserId::new(7), role);
            assert!(
                !STUDENT_FEE_PAYMENTS
                    .evaluate(&principal, &StudentId::new(101), &resolver)
                    .allowed
            );
        }
    }

    #[test]
    fn test_student_fee_payments_messages_by_role() {
        let links = links();
        let resolver = OwnershipResolver::new(&links);

        for role in [Role::Teacher, Role::Student] {
            let principal = Principal::new(UserId::new(3), role);
            let err = authorize_student_fee_payments(&principal, StudentId::new(101), &resolver)
                .unwrap_err();
            assert_eq!(err.reason, "Not authorized to access fee payments");
        }

        let parent = Principal::new(UserId::new(7), Role::Parent);
        let err = authorize_student_fee_payments(&parent, StudentId::new(103), &resolver)
            .unwrap_err();
        assert_eq!(err.reason, "Not authorized to access this student's fee payments");
        assert_eq!(
            authorize_student_fee_payments(&parent, StudentId::new(101), &resolver),
            Ok(Grant::Ownership)
        );

        let admin = Principal::new(UserId::new(1), Role::Admin);
        assert_eq!(
            authorize_student_fee_payments(&admin, StudentId::new(103), &resolver),
            Ok(Grant::Blanket)
        );
    }

    #[test]
    fn test_finance_gates_are_admin_only() {
        let admin = Principal::new(UserId::new(1), Role::Admin);
        let teacher = Principal::new(UserId::new(2), Role::Teacher);

        for gate in [READ_FEE_STRUCTURES, READ_FEE_PAYMENTS, CREATE_EXPENSE, DELETE_EXPENSE] {
            assert!(gate.check(&admin).allowed);
            assert!(!gate.check(&teacher).allowed);
        }
        assert_eq!(
            READ_EXPENSES.check(&teacher).reason.as_deref(),
            Some("Not authorized to access expenses")
        );
    }
}
