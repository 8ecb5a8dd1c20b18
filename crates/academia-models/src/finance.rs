//! Fee structures, fee payments and expenses.

use crate::ids::{ExpenseId, FeePaymentId, FeeStructureId, StudentId, UserId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeeStructure {
    pub id: FeeStructureId,
    pub name: String,
    pub grade_level: String,
    pub academic_year: String,
    pub amount: f64,
    pub created_by: UserId,
}

/// A payment made against a fee structure on behalf of one student.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeePayment {
    pub id: FeePaymentId,
    pub student_id: StudentId,
    pub fee_structure_id: FeeStructureId,
    pub amount_paid: f64,
    pub payment_date: NaiveDate,
    pub status: String,
    pub created_by: UserId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: ExpenseId,
    pub category: String,
    pub amount: f64,
    pub expense_date: NaiveDate,
    pub approved_by: Option<UserId>,
    pub created_by: UserId,
}
