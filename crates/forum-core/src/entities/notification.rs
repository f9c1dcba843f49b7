//! Notification entity - a message delivered to a user's inbox

use chrono::{DateTime, Utc};
use serde_json::{json, Value};

use crate::value_objects::{AuthorType, DocumentId};

/// Notification kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    UserBanned,
    UserSuspended,
    MemberKicked,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UserBanned => "user_banned",
            Self::UserSuspended => "user_suspended",
            Self::MemberKicked => "member_kicked",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "user_banned" => Some(Self::UserBanned),
            "user_suspended" => Some(Self::UserSuspended),
            "member_kicked" => Some(Self::MemberKicked),
            _ => None,
        }
    }
}

/// Notification entity, stored under `notifications/{recipient}/messages`
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: DocumentId,
    pub recipient_id: DocumentId,
    pub recipient_type: AuthorType,
    pub message: String,
    pub kind: NotificationKind,
    pub created_at: DateTime<Utc>,
    pub is_read: bool,
    pub additional_data: Value,
}

impl Notification {
    fn new(
        recipient_id: DocumentId,
        recipient_type: AuthorType,
        kind: NotificationKind,
        message: String,
        additional_data: Value,
    ) -> Self {
        Self {
            id: DocumentId::generate(),
            recipient_id,
            recipient_type,
            message,
            kind,
            created_at: Utc::now(),
            is_read: false,
            additional_data,
        }
    }

    /// Ban notice
    pub fn banned(recipient_id: DocumentId, recipient_type: AuthorType, reason: &str) -> Self {
        Self::new(
            recipient_id,
            recipient_type,
            NotificationKind::UserBanned,
            format!("Your account has been banned for the following reason: {reason}"),
            Value::Null,
        )
    }

    /// Suspension notice
    pub fn suspended(
        recipient_id: DocumentId,
        recipient_type: AuthorType,
        days: u32,
        reason: &str,
    ) -> Self {
        Self::new(
            recipient_id,
            recipient_type,
            NotificationKind::UserSuspended,
            format!(
                "Your account has been suspended for {days} days for the following reason: {reason}"
            ),
            Value::Null,
        )
    }

    /// Kick notice
    pub fn kicked(recipient_id: DocumentId, forum_id: &DocumentId, forum_title: &str) -> Self {
        Self::new(
            recipient_id,
            AuthorType::User,
            NotificationKind::MemberKicked,
            format!("You have been kicked from the \"{forum_title}\" forum."),
            json!({ "forumId": forum_id.as_str() }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banned_message() {
        let n = Notification::banned("u1".into(), AuthorType::User, "hate speech");
        assert_eq!(
            n.message,
            "Your account has been banned for the following reason: hate speech"
        );
        assert_eq!(n.kind, NotificationKind::UserBanned);
        assert!(!n.is_read);
    }

    #[test]
    fn test_kicked_carries_forum_id() {
        let n = Notification::kicked("u1".into(), &"f9".into(), "Anxiety Support");
        assert_eq!(n.additional_data["forumId"], "f9");
        assert!(n.message.contains("\"Anxiety Support\""));
    }

    #[test]
    fn test_kind_round_trip() {
        for kind in [
            NotificationKind::UserBanned,
            NotificationKind::UserSuspended,
            NotificationKind::MemberKicked,
        ] {
            assert_eq!(NotificationKind::parse(kind.as_str()), Some(kind));
        }
    }
}
