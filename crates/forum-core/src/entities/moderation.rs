//! Moderation records - append-only ban and suspension logs

use chrono::{DateTime, Duration, Utc};

use crate::value_objects::{AuthorType, DocumentId, ReportLevel};

use super::ResolvedAuthor;

/// Status string stored on moderation records
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BanStatus {
    Banned,
    Suspended,
}

impl BanStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Banned => "banned",
            Self::Suspended => "suspended",
        }
    }
}

/// One ban action. Never updated or deduplicated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BannedUser {
    pub id: DocumentId,
    pub report_id: DocumentId,
    pub forum_id: DocumentId,
    pub author_id: Option<DocumentId>,
    pub author_name: String,
    pub author_type: AuthorType,
    pub report_source: Option<ReportLevel>,
    pub banned_at: DateTime<Utc>,
    pub banned_by: DocumentId,
    pub reason: String,
    pub status: BanStatus,
}

impl BannedUser {
    /// Build a ban record for a resolved (or unknown) author
    pub fn new(
        report_id: DocumentId,
        forum_id: DocumentId,
        author: &ResolvedAuthor,
        banned_by: DocumentId,
        reason: String,
    ) -> Self {
        Self {
            id: DocumentId::generate(),
            report_id,
            forum_id,
            author_id: author.author_id.clone(),
            author_name: author.name.clone(),
            author_type: author.author_type,
            report_source: author.source(),
            banned_at: Utc::now(),
            banned_by,
            reason,
            status: BanStatus::Banned,
        }
    }
}

/// One time-boxed suspension. Never updated or deduplicated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuspendedUser {
    pub id: DocumentId,
    pub report_id: DocumentId,
    pub forum_id: DocumentId,
    pub author_id: Option<DocumentId>,
    pub author_name: String,
    pub author_type: AuthorType,
    pub report_source: Option<ReportLevel>,
    pub suspended_at: DateTime<Utc>,
    pub suspended_by: DocumentId,
    pub reason: String,
    pub suspended_until: DateTime<Utc>,
    pub status: BanStatus,
}

impl SuspendedUser {
    /// Build a suspension lasting `days` from now
    pub fn new(
        report_id: DocumentId,
        forum_id: DocumentId,
        author: &ResolvedAuthor,
        suspended_by: DocumentId,
        reason: String,
        days: u32,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: DocumentId::generate(),
            report_id,
            forum_id,
            author_id: author.author_id.clone(),
            author_name: author.name.clone(),
            author_type: author.author_type,
            report_source: author.source(),
            suspended_at: now,
            suspended_by,
            reason,
            suspended_until: now + Duration::days(i64::from(days)),
            status: BanStatus::Suspended,
        }
    }

    /// Whether the suspension still applies at `now`
    pub fn is_active_at(&self, now: DateTime<Utc>) -> bool {
        now < self.suspended_until
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Report;
    use crate::value_objects::ReportLocation;

    fn resolved() -> ResolvedAuthor {
        let report = Report::new(
            "r1".into(),
            ReportLocation::post("f1".into(), "p1".into()),
            "Sam".to_string(),
            AuthorType::User,
            "harassment".to_string(),
            "u2".into(),
        );
        ResolvedAuthor::from_report(&report)
    }

    #[test]
    fn test_ban_copies_author_and_source() {
        let ban = BannedUser::new(
            "r1".into(),
            "f1".into(),
            &resolved(),
            "admin".into(),
            "harassment".to_string(),
        );
        assert_eq!(ban.author_name, "Sam");
        assert_eq!(ban.report_source, Some(ReportLevel::Post));
        assert_eq!(ban.status.as_str(), "banned");
    }

    #[test]
    fn test_ban_for_unknown_author_has_no_source() {
        let ban = BannedUser::new(
            "r1".into(),
            "f1".into(),
            &ResolvedAuthor::unknown(),
            "admin".into(),
            "spam".to_string(),
        );
        assert_eq!(ban.author_name, "Unknown");
        assert!(ban.report_source.is_none());
    }

    #[test]
    fn test_suspension_window() {
        let suspension = SuspendedUser::new(
            "r1".into(),
            "f1".into(),
            &resolved(),
            "admin".into(),
            "spam".to_string(),
            7,
        );
        assert_eq!(
            suspension.suspended_until - suspension.suspended_at,
            Duration::days(7)
        );
        assert!(suspension.is_active_at(suspension.suspended_at + Duration::days(6)));
        assert!(!suspension.is_active_at(suspension.suspended_at + Duration::days(7)));
    }
}
