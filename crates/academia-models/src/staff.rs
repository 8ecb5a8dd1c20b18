use crate::ids::{StaffId, UserId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Employment profile attached to a staff member's user account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffProfile {
    pub id: StaffId,
    pub user_id: UserId,
    pub employee_id: String,
    pub department: String,
    pub position: String,
    pub hire_date: NaiveDate,
    pub is_active: bool,
}
