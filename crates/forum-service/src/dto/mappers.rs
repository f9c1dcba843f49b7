//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain results to response DTOs.

use chrono::Utc;

use forum_core::entities::{BannedUser, Report, ResolvedAuthor, SuspendedUser};

use crate::services::{BanOutcome, ReportSummary, SuspensionOutcome, WeeklyPostCount};

use super::responses::{
    BanOutcomeResponse, BannedUserResponse, DeletionCountsResponse, ReportResponse,
    ReportSummaryResponse, ResolvedAuthorResponse, SuspendedUserResponse,
    SuspensionOutcomeResponse, WeeklyPostsResponse,
};

// ============================================================================
// Moderation Mappers
// ============================================================================

impl From<&ResolvedAuthor> for ResolvedAuthorResponse {
    fn from(author: &ResolvedAuthor) -> Self {
        Self {
            author_id: author.author_id.as_ref().map(ToString::to_string),
            author_name: author.name.clone(),
            author_type: author.author_type,
            source: author.source(),
            resolved: author.is_resolved(),
        }
    }
}

impl From<&BannedUser> for BannedUserResponse {
    fn from(ban: &BannedUser) -> Self {
        Self {
            id: ban.id.to_string(),
            report_id: ban.report_id.to_string(),
            forum_id: ban.forum_id.to_string(),
            author_id: ban.author_id.as_ref().map(ToString::to_string),
            author_name: ban.author_name.clone(),
            author_type: ban.author_type,
            report_source: ban.report_source,
            banned_at: ban.banned_at,
            banned_by: ban.banned_by.to_string(),
            reason: ban.reason.clone(),
            status: ban.status.as_str(),
        }
    }
}

impl From<BannedUser> for BannedUserResponse {
    fn from(ban: BannedUser) -> Self {
        Self::from(&ban)
    }
}

impl From<&SuspendedUser> for SuspendedUserResponse {
    fn from(suspension: &SuspendedUser) -> Self {
        Self {
            id: suspension.id.to_string(),
            report_id: suspension.report_id.to_string(),
            forum_id: suspension.forum_id.to_string(),
            author_id: suspension.author_id.as_ref().map(ToString::to_string),
            author_name: suspension.author_name.clone(),
            author_type: suspension.author_type,
            report_source: suspension.report_source,
            suspended_at: suspension.suspended_at,
            suspended_by: suspension.suspended_by.to_string(),
            reason: suspension.reason.clone(),
            suspended_until: suspension.suspended_until,
            status: suspension.status.as_str(),
            active: suspension.is_active_at(Utc::now()),
        }
    }
}

impl From<SuspendedUser> for SuspendedUserResponse {
    fn from(suspension: SuspendedUser) -> Self {
        Self::from(&suspension)
    }
}

impl From<&BanOutcome> for BanOutcomeResponse {
    fn from(outcome: &BanOutcome) -> Self {
        Self {
            ban: BannedUserResponse::from(&outcome.ban),
            author: ResolvedAuthorResponse::from(&outcome.author),
            deleted: DeletionCountsResponse {
                posts: outcome.content.posts,
                comments: outcome.content.comments,
                likes: outcome.content.likes,
                reports: outcome.reports_deleted,
            },
            notified: outcome.notified,
        }
    }
}

impl From<BanOutcome> for BanOutcomeResponse {
    fn from(outcome: BanOutcome) -> Self {
        Self::from(&outcome)
    }
}

impl From<&SuspensionOutcome> for SuspensionOutcomeResponse {
    fn from(outcome: &SuspensionOutcome) -> Self {
        Self {
            suspension: SuspendedUserResponse::from(&outcome.suspension),
            author: ResolvedAuthorResponse::from(&outcome.author),
            notified: outcome.notified,
        }
    }
}

impl From<SuspensionOutcome> for SuspensionOutcomeResponse {
    fn from(outcome: SuspensionOutcome) -> Self {
        Self::from(&outcome)
    }
}

// ============================================================================
// Report Mappers
// ============================================================================

impl From<&Report> for ReportResponse {
    fn from(report: &Report) -> Self {
        Self {
            id: report.id.to_string(),
            level: report.level(),
            forum_id: report.forum_id().to_string(),
            post_id: report.location.post_id().map(ToString::to_string),
            comment_id: report.location.comment_id().map(ToString::to_string),
            author_id: report.author_id.as_ref().map(ToString::to_string),
            author_name: report.author_name.clone(),
            author_type: report.author_type,
            reason: report.reason.clone(),
            reported_by: report.reported_by.to_string(),
            created_at: report.created_at,
        }
    }
}

impl From<Report> for ReportResponse {
    fn from(report: Report) -> Self {
        Self::from(&report)
    }
}

impl From<ReportSummary> for ReportSummaryResponse {
    fn from(summary: ReportSummary) -> Self {
        Self {
            forum_id: summary.forum_id.into_inner(),
            forum_title: summary.forum_title,
            forum_reports: summary.counts.forum,
            post_reports: summary.counts.post,
            comment_reports: summary.counts.comment,
            total: summary.counts.total(),
        }
    }
}

impl From<WeeklyPostCount> for WeeklyPostsResponse {
    fn from(weekly: WeeklyPostCount) -> Self {
        Self {
            week_start: weekly.week_start,
            count: weekly.count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use forum_core::traits::ReportCounts;
    use forum_core::value_objects::{AuthorType, DocumentId, ReportLevel, ReportLocation};

    fn comment_report() -> Report {
        let mut report = Report::new(
            DocumentId::new("r1"),
            ReportLocation::comment(
                DocumentId::new("f1"),
                DocumentId::new("p1"),
                DocumentId::new("c1"),
            ),
            "mallory".to_string(),
            AuthorType::User,
            "spam".to_string(),
            DocumentId::new("u9"),
        );
        report.author_id = Some(DocumentId::new("u1"));
        report
    }

    #[test]
    fn test_report_response_carries_location() {
        let response = ReportResponse::from(comment_report());

        assert_eq!(response.level, ReportLevel::Comment);
        assert_eq!(response.forum_id, "f1");
        assert_eq!(response.post_id.as_deref(), Some("p1"));
        assert_eq!(response.comment_id.as_deref(), Some("c1"));
        assert_eq!(response.author_id.as_deref(), Some("u1"));
    }

    #[test]
    fn test_ban_response_from_unresolved_author() {
        let author = ResolvedAuthor::unknown();
        let ban = BannedUser::new(
            DocumentId::new("r404"),
            DocumentId::new("f1"),
            &author,
            DocumentId::new("admin"),
            "spam".to_string(),
        );

        let response = BannedUserResponse::from(&ban);
        assert_eq!(response.author_name, "Unknown");
        assert_eq!(response.status, "banned");
        assert!(response.report_source.is_none());

        let author = ResolvedAuthorResponse::from(&author);
        assert!(!author.resolved);
    }

    #[test]
    fn test_suspension_response_is_active() {
        let author = ResolvedAuthor::from_report(&comment_report());
        let suspension = SuspendedUser::new(
            DocumentId::new("r1"),
            DocumentId::new("f1"),
            &author,
            DocumentId::new("admin"),
            "rude".to_string(),
            3,
        );

        let response = SuspendedUserResponse::from(&suspension);
        assert!(response.active);
        assert_eq!(response.status, "suspended");
        assert_eq!(response.report_source, Some(ReportLevel::Comment));
    }

    #[test]
    fn test_summary_total() {
        let summary = ReportSummary {
            forum_id: DocumentId::new("f1"),
            forum_title: "General".to_string(),
            counts: ReportCounts {
                forum: 1,
                post: 2,
                comment: 3,
            },
        };

        let response = ReportSummaryResponse::from(summary);
        assert_eq!(response.total, 6);
        assert_eq!(response.post_reports, 2);
    }
}
