//! Parent-to-student links.
//!
//! A parent account may be linked to several students, one row per link.
//! These rows are the only source of guardianship facts.

use crate::ids::{ParentLinkId, StudentId, UserId};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct ParentLink {
    pub id: ParentLinkId,
    /// The parent's user account.
    pub user_id: UserId,
    pub student_id: StudentId,
    /// Free-form relationship, e.g. "mother" or "guardian".
    pub relationship_type: String,
}

impl ParentLink {
    pub fn new(id: ParentLinkId, user_id: UserId, student_id: StudentId) -> Self {
        Self {
            id,
            user_id,
            student_id,
            relationship_type: "guardian".to_string(),
        }
    }

    pub fn with_relationship(mut self, relationship_type: impl Into<String>) -> Self {
        self.relationship_type = relationship_type.into();
        self
    }
}
