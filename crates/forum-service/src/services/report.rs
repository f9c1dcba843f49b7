//! Report service
//!
//! Report submission, per-forum report summaries and the weekly post count.

use chrono::{DateTime, Datelike, Duration, NaiveTime, Utc};
use tracing::{info, instrument};
use validator::Validate;

use forum_core::entities::Report;
use forum_core::events::ReportSubmittedEvent;
use forum_core::traits::ReportCounts;
use forum_core::value_objects::{AuthorType, DocumentId, ReportLocation};
use forum_core::{DomainError, DomainEvent};

use crate::dto::SubmitReportRequest;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Report counts of one forum
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSummary {
    pub forum_id: DocumentId,
    pub forum_title: String,
    pub counts: ReportCounts,
}

/// Posts created since the start of the current week
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeeklyPostCount {
    pub week_start: DateTime<Utc>,
    pub count: u64,
}

/// Most recent Sunday 00:00 UTC at or before `now`
pub fn week_start(now: DateTime<Utc>) -> DateTime<Utc> {
    let days_since_sunday = i64::from(now.weekday().num_days_from_sunday());
    (now.date_naive() - Duration::days(days_since_sunday))
        .and_time(NaiveTime::MIN)
        .and_utc()
}

fn optional_id(raw: Option<&str>) -> Option<DocumentId> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .map(DocumentId::new)
}

/// Report service
pub struct ReportService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReportService<'a> {
    /// Create a new ReportService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// File a report at forum, post or comment level.
    ///
    /// The level follows from which of `post_id` / `comment_id` are set.
    /// The reported item must exist.
    #[instrument(skip(self, request), fields(reported_by = %request.reported_by))]
    pub async fn submit_report(
        &self,
        forum_id: &DocumentId,
        request: SubmitReportRequest,
    ) -> ServiceResult<Report> {
        request.validate()?;

        let reason = request.reason.trim();
        if reason.is_empty() {
            return Err(DomainError::EmptyReason.into());
        }
        let author_name = request.author_name.trim();
        if author_name.is_empty() {
            return Err(ServiceError::validation("Author name is required"));
        }

        let location = ReportLocation::from_parts(
            forum_id.clone(),
            optional_id(request.post_id.as_deref()),
            optional_id(request.comment_id.as_deref()),
        )
        .ok_or_else(|| DomainError::InvalidLocation("comment_id requires post_id".to_string()))?;

        self.ensure_target_exists(&location).await?;

        let mut report = Report::new(
            DocumentId::generate(),
            location,
            author_name.to_string(),
            request
                .author_type
                .as_deref()
                .map_or(AuthorType::Unknown, AuthorType::parse),
            reason.to_string(),
            DocumentId::new(request.reported_by.trim()),
        );
        report.author_id = optional_id(request.author_id.as_deref());

        self.ctx.report_repo().create(&report).await?;

        info!(
            report_id = %report.id,
            path = %report.location,
            "Report submitted"
        );

        let event = DomainEvent::ReportSubmitted(ReportSubmittedEvent::new(
            forum_id.clone(),
            report.id.clone(),
            report.level(),
        ));
        self.ctx.emit(&event).await?;

        Ok(report)
    }

    async fn ensure_target_exists(&self, location: &ReportLocation) -> ServiceResult<()> {
        let forum_id = location.forum_id();
        if self.ctx.forum_repo().find_by_id(forum_id).await?.is_none() {
            return Err(DomainError::ForumNotFound(forum_id.clone()).into());
        }

        if let Some(post_id) = location.post_id() {
            if self.ctx.post_repo().find_by_id(forum_id, post_id).await?.is_none() {
                return Err(DomainError::PostNotFound(post_id.clone()).into());
            }

            if let Some(comment_id) = location.comment_id() {
                if self
                    .ctx
                    .comment_repo()
                    .find_by_id(forum_id, post_id, comment_id)
                    .await?
                    .is_none()
                {
                    return Err(DomainError::CommentNotFound(comment_id.clone()).into());
                }
            }
        }
        Ok(())
    }

    /// Count a forum's reports by level
    #[instrument(skip(self))]
    pub async fn summarize_forum(&self, forum_id: &DocumentId) -> ServiceResult<ReportSummary> {
        let forum = self
            .ctx
            .forum_repo()
            .find_by_id(forum_id)
            .await?
            .ok_or_else(|| DomainError::ForumNotFound(forum_id.clone()))?;

        let counts = self.ctx.report_repo().count_by_level(forum_id).await?;

        Ok(ReportSummary {
            forum_id: forum.id,
            forum_title: forum.title,
            counts,
        })
    }

    /// One summary per forum
    #[instrument(skip(self))]
    pub async fn summarize_all(&self) -> ServiceResult<Vec<ReportSummary>> {
        let forums = self.ctx.forum_repo().list().await?;

        let mut summaries = Vec::with_capacity(forums.len());
        for forum in forums {
            let counts = self.ctx.report_repo().count_by_level(&forum.id).await?;
            summaries.push(ReportSummary {
                forum_id: forum.id,
                forum_title: forum.title,
                counts,
            });
        }
        Ok(summaries)
    }

    /// Posts created across all forums since the week containing `now` began
    #[instrument(skip(self))]
    pub async fn weekly_post_count(&self, now: DateTime<Utc>) -> ServiceResult<WeeklyPostCount> {
        let week_start = week_start(now);
        let count = self.ctx.post_repo().count_created_since(week_start).await?;
        Ok(WeeklyPostCount { week_start, count })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_week_start_midweek() {
        // Wednesday 2024-05-15 13:45 UTC
        let now = Utc.with_ymd_and_hms(2024, 5, 15, 13, 45, 0).unwrap();
        assert_eq!(week_start(now), Utc.with_ymd_and_hms(2024, 5, 12, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_week_start_on_sunday() {
        let now = Utc.with_ymd_and_hms(2024, 5, 12, 0, 0, 0).unwrap();
        assert_eq!(week_start(now), now);

        let late_saturday = Utc.with_ymd_and_hms(2024, 5, 11, 23, 59, 59).unwrap();
        assert_eq!(
            week_start(late_saturday),
            Utc.with_ymd_and_hms(2024, 5, 5, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_optional_id() {
        assert_eq!(optional_id(Some(" p1 ")), Some(DocumentId::new("p1")));
        assert_eq!(optional_id(Some("  ")), None);
        assert_eq!(optional_id(None), None);
    }
}
