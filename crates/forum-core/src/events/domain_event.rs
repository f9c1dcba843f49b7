//! Domain events - emitted when a moderation action completes
//!
//! Delivered to moderation listeners once the action's writes have all
//! been committed. Used for:
//! - Completion callbacks of the admin dashboard
//! - Audit logging

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::{DocumentId, ReportLevel};

/// All possible domain events
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DomainEvent {
    UserBanned(UserBannedEvent),
    UserSuspended(UserSuspendedEvent),
    MemberKicked(MemberKickedEvent),
    ReportSubmitted(ReportSubmittedEvent),
}

impl DomainEvent {
    /// Get the event type name
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::UserBanned(_) => "USER_BANNED",
            Self::UserSuspended(_) => "USER_SUSPENDED",
            Self::MemberKicked(_) => "MEMBER_KICKED",
            Self::ReportSubmitted(_) => "REPORT_SUBMITTED",
        }
    }

    /// Get the timestamp of the event
    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            Self::UserBanned(e) => e.timestamp,
            Self::UserSuspended(e) => e.timestamp,
            Self::MemberKicked(e) => e.timestamp,
            Self::ReportSubmitted(e) => e.timestamp,
        }
    }

    /// Forum the event happened in
    pub fn forum_id(&self) -> &DocumentId {
        match self {
            Self::UserBanned(e) => &e.forum_id,
            Self::UserSuspended(e) => &e.forum_id,
            Self::MemberKicked(e) => &e.forum_id,
            Self::ReportSubmitted(e) => &e.forum_id,
        }
    }
}

// ============================================================================
// Event Structs
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserBannedEvent {
    pub forum_id: DocumentId,
    pub report_id: DocumentId,
    pub ban_id: DocumentId,
    pub author_name: String,
    pub report_source: Option<ReportLevel>,
    pub banned_by: DocumentId,
    pub posts_deleted: u64,
    pub comments_deleted: u64,
    pub likes_deleted: u64,
    pub reports_deleted: u64,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSuspendedEvent {
    pub forum_id: DocumentId,
    pub report_id: DocumentId,
    pub suspension_id: DocumentId,
    pub author_name: String,
    pub suspended_by: DocumentId,
    pub suspended_until: DateTime<Utc>,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberKickedEvent {
    pub forum_id: DocumentId,
    pub user_id: DocumentId,
    pub kicked_by: DocumentId,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSubmittedEvent {
    pub forum_id: DocumentId,
    pub report_id: DocumentId,
    pub level: ReportLevel,
    pub timestamp: DateTime<Utc>,
}

impl MemberKickedEvent {
    pub fn new(forum_id: DocumentId, user_id: DocumentId, kicked_by: DocumentId) -> Self {
        Self {
            forum_id,
            user_id,
            kicked_by,
            timestamp: Utc::now(),
        }
    }
}

impl ReportSubmittedEvent {
    pub fn new(forum_id: DocumentId, report_id: DocumentId, level: ReportLevel) -> Self {
        Self {
            forum_id,
            report_id,
            level,
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_serialization() {
        let event = DomainEvent::MemberKicked(MemberKickedEvent::new(
            "f1".into(),
            "u1".into(),
            "admin".into(),
        ));

        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("MEMBER_KICKED"));

        let parsed: DomainEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.event_type(), "MEMBER_KICKED");
        assert_eq!(parsed.forum_id().as_str(), "f1");
    }

    #[test]
    fn test_event_type() {
        let event = DomainEvent::ReportSubmitted(ReportSubmittedEvent::new(
            "f1".into(),
            "r1".into(),
            ReportLevel::Comment,
        ));
        assert_eq!(event.event_type(), "REPORT_SUBMITTED");
    }
}
