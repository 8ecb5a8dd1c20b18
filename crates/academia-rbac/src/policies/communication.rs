//! Messages, notifications and announcements.

use super::owner;
use crate::gate::{AuthorizationGate, GateInfo, RoleGate};
use crate::ownership::OwnershipResolver;
use academia_core::RoleSet;
use academia_models::Principal;
use academia_models::communication::{Announcement, Message, Notification};

fn participant(resolver: &OwnershipResolver<'_>, principal: &Principal, message: &Message) -> bool {
    resolver.is_participant(principal, message)
}

fn recipient(resolver: &OwnershipResolver<'_>, principal: &Principal, message: &Message) -> bool {
    resolver.is_recipient(principal, message)
}

// =============================================================================
// Announcements
// =============================================================================

pub const CREATE_ANNOUNCEMENT: RoleGate =
    AuthorizationGate::role_only("announcement.create", "create announcements", RoleSet::STAFF);

pub const UPDATE_ANNOUNCEMENT: AuthorizationGate<Announcement> = AuthorizationGate::new(
    "announcement.update",
    "update this announcement",
    RoleSet::STAFF,
    owner,
);

pub const DELETE_ANNOUNCEMENT: AuthorizationGate<Announcement> = AuthorizationGate::new(
    "announcement.delete",
    "delete this announcement",
    RoleSet::STAFF,
    owner,
);

// =============================================================================
// Messages
// =============================================================================

/// Sender or recipient only. No role reads other people's mail.
pub const READ_MESSAGE: AuthorizationGate<Message> = AuthorizationGate::new(
    "message.read",
    "access this message",
    RoleSet::EMPTY,
    participant,
);

/// Marking read and similar updates belong to the recipient.
pub const UPDATE_MESSAGE: AuthorizationGate<Message> = AuthorizationGate::new(
    "message.update",
    "update this message",
    RoleSet::EMPTY,
    recipient,
);

pub const DELETE_MESSAGE: AuthorizationGate<Message> = AuthorizationGate::new(
    "message.delete",
    "delete this message",
    RoleSet::EMPTY,
    participant,
);

// =============================================================================
// Notifications
// =============================================================================

pub const CREATE_NOTIFICATION: RoleGate =
    AuthorizationGate::role_only("notification.create", "create notifications", RoleSet::ADMIN);

pub const READ_NOTIFICATION: AuthorizationGate<Notification> = AuthorizationGate::new(
    "notification.read",
    "access this notification",
    RoleSet::EMPTY,
    owner,
);

pub const UPDATE_NOTIFICATION: AuthorizationGate<Notification> = AuthorizationGate::new(
    "notification.update",
    "update this notification",
    RoleSet::EMPTY,
    owner,
);

pub const DELETE_NOTIFICATION: AuthorizationGate<Notification> = AuthorizationGate::new(
    "notification.delete",
    "delete this notification",
    RoleSet::EMPTY,
    owner,
);

pub(crate) fn gates() -> Vec<GateInfo> {
    vec![
        CREATE_ANNOUNCEMENT.info(),
        UPDATE_ANNOUNCEMENT.info(),
        DELETE_ANNOUNCEMENT.info(),
        READ_MESSAGE.info(),
        UPDATE_MESSAGE.info(),
        DELETE_MESSAGE.info(),
        CREATE_NOTIFICATION.info(),
        READ_NOTIFICATION.info(),
        UPDATE_NOTIFICATION.info(),
        DELETE_NOTIFICATION.info(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gate::Grant;
    use academia_core::Role;
    use academia_models::{AnnouncementId, MessageId, NotificationId, UserId};
    use chrono::{NaiveDate, TimeZone, Utc};

    fn message(sender: i64, recipient: i64) -> Message {
        Message {
            id: MessageId::new(1),
            sender_id: UserId::new(sender),
            recipient_id: UserId::new(recipient),
            subject: "Field trip".to_string(),
            is_read: false,
            sent_at: Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap(),
        }
    }

    fn announcement(created_by: i64) -> Announcement {
        Announcement {
            id: AnnouncementId::new(1),
            title: "Sports day".to_string(),
            start_date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            end_date: None,
            is_active: true,
            created_by: UserId::new(created_by),
        }
    }

    #[test]
    fn test_message_participants() {
        let resolver = OwnershipResolver::empty();
        let message = message(10, 20);
        let sender = Principal::new(UserId::new(10), Role::Teacher);
        let recipient = Principal::new(UserId::new(20), Role::Parent);
        let admin = Principal::new(UserId::new(1), Role::Admin);

        assert!(READ_MESSAGE.evaluate(&sender, &message, &resolver).allowed);
        assert!(READ_MESSAGE.evaluate(&recipient, &message, &resolver).allowed);

        let decision = READ_MESSAGE.evaluate(&admin, &message, &resolver);
        assert!(!decision.allowed);
        assert_eq!(decision.reason.as_deref(), Some("Not authorized to access this message"));
    }

    #[test]
    fn test_only_recipient_updates_message() {
        let resolver = OwnershipResolver::empty();
        let message = message(10, 20);
        let sender = Principal::new(UserId::new(10), Role::Teacher);
        let recipient = Principal::new(UserId::new(20), Role::Parent);

        assert!(UPDATE_MESSAGE.evaluate(&recipient, &message, &resolver).allowed);
        assert!(!UPDATE_MESSAGE.evaluate(&sender, &message, &resolver).allowed);
        assert!(DELETE_MESSAGE.evaluate(&sender, &message, &resolver).allowed);
    }

    #[test]
    fn test_announcement_creator_or_staff() {
        let resolver = OwnershipResolver::empty();
        let by_student = announcement(30);
        let student = Principal::new(UserId::new(30), Role::Student);
        let other_student = Principal::new(UserId::new(31), Role::Student);
        let teacher = Principal::new(UserId::new(2), Role::Teacher);

        assert_eq!(
            UPDATE_ANNOUNCEMENT.authorize(&student, &by_student, &resolver),
            Ok(Grant::Ownership)
        );
        assert_eq!(
            UPDATE_ANNOUNCEMENT.authorize(&teacher, &by_student, &resolver),
            Ok(Grant::Blanket)
        );
        let err = DELETE_ANNOUNCEMENT
            .authorize(&other_student, &by_student, &resolver)
            .unwrap_err();
        assert_eq!(err.reason, "Not authorized to delete this announcement");
    }

    #[test]
    fn test_create_announcement_requires_staff() {
        assert!(CREATE_ANNOUNCEMENT.check(&Principal::new(UserId::new(2), Role::Teacher)).allowed);
        assert!(!CREATE_ANNOUNCEMENT.check(&Principal::new(UserId::new(3), Role::Parent)).allowed);
    }

    #[test]
    fn test_notifications_belong_to_their_user() {
        let resolver = OwnershipResolver::empty();
        let notification = Notification {
            id: NotificationId::new(4),
            user_id: UserId::new(40),
            title: "Fee due".to_string(),
            notification_type: "finance".to_string(),
            is_read: false,
        };
        let owner = Principal::new(UserId::new(40), Role::Parent);
        let admin = Principal::new(UserId::new(1), Role::Admin);

        assert!(READ_NOTIFICATION.evaluate(&owner, &notification, &resolver).allowed);
        assert!(!READ_NOTIFICATION.evaluate(&admin, &notification, &resolver).allowed);
        assert!(CREATE_NOTIFICATION.check(&admin).allowed);
        assert!(!CREATE_NOTIFICATION.check(&owner).allowed);
    }
}
