//! Relationship facts between a principal and a resource.
//!
//! Two kinds of fact exist. Self-ownership compares the principal's id with an
//! owner field on the resource. Guardianship asks whether a parent has a link
//! to the student the resource belongs to. The resolver borrows the parent's
//! link records for the duration of one request and never caches answers.

use academia_core::Role;
use academia_models::analytics::GeneratedReport;
use academia_models::communication::{Announcement, Message, Notification};
use academia_models::finance::FeePayment;
use academia_models::staff::StaffProfile;
use academia_models::{ParentLink, Principal, StudentId, UserId};
use std::collections::BTreeSet;

/// A resource with a single owning user.
pub trait Owned {
    fn owner_id(&self) -> UserId;
}

/// A resource that belongs to one student.
pub trait StudentScoped {
    fn student_id(&self) -> StudentId;
}

impl Owned for UserId {
    fn owner_id(&self) -> UserId {
        *self
    }
}

impl Owned for Notification {
    fn owner_id(&self) -> UserId {
        self.user_id
    }
}

impl Owned for Announcement {
    fn owner_id(&self) -> UserId {
        self.created_by
    }
}

impl Owned for GeneratedReport {
    fn owner_id(&self) -> UserId {
        self.generated_by
    }
}

impl Owned for ParentLink {
    fn owner_id(&self) -> UserId {
        self.user_id
    }
}

impl Owned for StaffProfile {
    fn owner_id(&self) -> UserId {
        self.user_id
    }
}

impl StudentScoped for StudentId {
    fn student_id(&self) -> StudentId {
        *self
    }
}

impl StudentScoped for FeePayment {
    fn student_id(&self) -> StudentId {
        self.student_id
    }
}

impl StudentScoped for ParentLink {
    fn student_id(&self) -> StudentId {
        self.student_id
    }
}

/// Answers relationship questions for one request.
#[derive(Debug, Clone, Copy)]
pub struct OwnershipResolver<'a> {
    parent_links: &'a [ParentLink],
}

impl<'a> OwnershipResolver<'a> {
    /// A resolver over the parent links loaded for the current principal.
    ///
    /// Links belonging to other users are ignored, so passing a broader slice
    /// never widens what a principal can see.
    pub const fn new(parent_links: &'a [ParentLink]) -> Self {
        Self { parent_links }
    }

    /// A resolver with no parent links. Guardianship is never established.
    pub const fn empty() -> OwnershipResolver<'static> {
        OwnershipResolver { parent_links: &[] }
    }

    /// Self-ownership: the principal's id equals the resource's owner field.
    pub fn is_owner<T: Owned + ?Sized>(&self, principal: &Principal, resource: &T) -> bool {
        principal.id == resource.owner_id()
    }

    /// The principal sent or received `message`.
    pub fn is_participant(&self, principal: &Principal, message: &Message) -> bool {
        message.involves(principal.id)
    }

    pub fn is_recipient(&self, principal: &Principal, message: &Message) -> bool {
        principal.id == message.recipient_id
    }

    /// Guardianship: a parent principal with at least one link to `student`.
    pub fn is_guardian_of(&self, principal: &Principal, student: StudentId) -> bool {
        principal.role == Role::Parent
            && self
                .parent_links
                .iter()
                .any(|link| link.user_id == principal.id && link.student_id == student)
    }

    /// Guardianship over the student a resource belongs to.
    pub fn is_guardian_for<T: StudentScoped + ?Sized>(
        &self,
        principal: &Principal,
        resource: &T,
    ) -> bool {
        self.is_guardian_of(principal, resource.student_id())
    }

    /// Every student the principal is linked to as a parent.
    pub fn linked_students(&self, principal: &Principal) -> BTreeSet<StudentId> {
        if principal.role != Role::Parent {
            return BTreeSet::new();
        }
        self.parent_links
            .iter()
            .filter(|link| link.user_id == principal.id)
            .map(|link| link.student_id)
            .collect()
    }
}

impl Default for OwnershipResolver<'_> {
    fn default() -> Self {
        Self { parent_links: &[] }
    }
}
