//! Moderation service
//!
//! The ban cascade and the suspension workflow. Both resolve the author of
//! reported content from a report id, append a moderation record, and notify
//! the author. A ban additionally deletes everything the author wrote in the
//! forum.
//!
//! Every repository call is awaited in sequence and commits on its own.
//! When a step fails the workflow stops and reports the stage; writes from
//! earlier steps are not rolled back. Content is matched by display name.

use forum_core::entities::{BannedUser, Notification, ResolvedAuthor, SuspendedUser};
use forum_core::events::{UserBannedEvent, UserSuspendedEvent};
use forum_core::value_objects::{DocumentId, ReportLocation};
use forum_core::{DomainError, DomainEvent};
use serde::Serialize;
use tracing::{debug, error, info, instrument, warn};

use super::context::ServiceContext;
use super::error::{ModerationStage, ServiceError, ServiceResult};

/// Number of documents removed by [`ModerationService::delete_content_by_author`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ContentDeletion {
    pub posts: u64,
    pub comments: u64,
    pub likes: u64,
}

/// Result of a completed ban
#[derive(Debug, Clone)]
pub struct BanOutcome {
    pub ban: BannedUser,
    pub author: ResolvedAuthor,
    pub content: ContentDeletion,
    pub reports_deleted: u64,
    pub notified: bool,
}

/// Result of a completed suspension
#[derive(Debug, Clone)]
pub struct SuspensionOutcome {
    pub suspension: SuspendedUser,
    pub author: ResolvedAuthor,
    pub notified: bool,
}

/// Trimmed, non-empty reason
fn require_reason(reason: &str) -> Result<String, DomainError> {
    let reason = reason.trim();
    if reason.is_empty() {
        return Err(DomainError::EmptyReason);
    }
    Ok(reason.to_string())
}

fn require_admin(admin_id: &str) -> Result<DocumentId, DomainError> {
    let admin_id = admin_id.trim();
    if admin_id.is_empty() {
        return Err(DomainError::MissingAdmin);
    }
    Ok(DocumentId::new(admin_id))
}

/// Moderation service
pub struct ModerationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ModerationService<'a> {
    /// Create a new ModerationService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    // ========================================================================
    // Workflow steps
    // ========================================================================

    /// Find who wrote the content a report points at.
    ///
    /// Looks in the forum-level reports first, then in every post's reports,
    /// then in every comment's reports. The first match wins. An id found
    /// nowhere resolves to the `Unknown` author.
    #[instrument(skip(self))]
    pub async fn find_author_for_report(
        &self,
        forum_id: &DocumentId,
        report_id: &DocumentId,
    ) -> ServiceResult<ResolvedAuthor> {
        let reports = self.ctx.report_repo();

        let forum_level = ReportLocation::forum(forum_id.clone());
        if let Some(report) = reports.find(&forum_level, report_id).await? {
            debug!("Report found at forum level");
            return Ok(ResolvedAuthor::from_report(&report));
        }

        let posts = self.ctx.post_repo().find_by_forum(forum_id).await?;

        for post in &posts {
            let location = ReportLocation::post(forum_id.clone(), post.id.clone());
            if let Some(report) = reports.find(&location, report_id).await? {
                debug!(post_id = %post.id, "Report found at post level");
                return Ok(ResolvedAuthor::from_report(&report));
            }
        }

        for post in &posts {
            let comments = self.ctx.comment_repo().find_by_post(forum_id, &post.id).await?;
            for comment in comments {
                let location =
                    ReportLocation::comment(forum_id.clone(), post.id.clone(), comment.id.clone());
                if let Some(report) = reports.find(&location, report_id).await? {
                    debug!(post_id = %post.id, comment_id = %comment.id, "Report found at comment level");
                    return Ok(ResolvedAuthor::from_report(&report));
                }
            }
        }

        debug!("Report not found at any level");
        Ok(ResolvedAuthor::unknown())
    }

    /// Append one ban record
    #[instrument(skip(self, author), fields(author_name = %author.name))]
    pub async fn record_ban(
        &self,
        forum_id: &DocumentId,
        report_id: &DocumentId,
        author: &ResolvedAuthor,
        admin_id: &str,
        reason: &str,
    ) -> ServiceResult<BannedUser> {
        let admin_id = require_admin(admin_id)?;
        let reason = require_reason(reason)?;

        let ban = BannedUser::new(report_id.clone(), forum_id.clone(), author, admin_id, reason);
        self.ctx.banned_user_repo().create(&ban).await?;

        info!(ban_id = %ban.id, "Ban recorded");
        Ok(ban)
    }

    /// Delete every comment, like and post in the forum written under `author_name`
    #[instrument(skip(self))]
    pub async fn delete_content_by_author(
        &self,
        forum_id: &DocumentId,
        author_name: &str,
    ) -> ServiceResult<ContentDeletion> {
        let mut deleted = ContentDeletion::default();
        let posts = self.ctx.post_repo().find_by_forum(forum_id).await?;

        for post in posts {
            let comments = self.ctx.comment_repo().find_by_post(forum_id, &post.id).await?;
            for comment in comments.iter().filter(|c| c.is_authored_by(author_name)) {
                if self
                    .ctx
                    .comment_repo()
                    .delete(forum_id, &post.id, &comment.id)
                    .await?
                {
                    deleted.comments += 1;
                }
            }

            let likes = self.ctx.like_repo().find_by_post(forum_id, &post.id).await?;
            for like in likes.iter().filter(|l| l.is_authored_by(author_name)) {
                if self.ctx.like_repo().delete(forum_id, &post.id, &like.id).await? {
                    deleted.likes += 1;
                }
            }

            if post.is_authored_by(author_name)
                && self.ctx.post_repo().delete(forum_id, &post.id).await?
            {
                deleted.posts += 1;
            }
        }

        info!(
            posts = deleted.posts,
            comments = deleted.comments,
            likes = deleted.likes,
            "Authored content deleted"
        );
        Ok(deleted)
    }

    /// Delete every report in the forum whose reported author is `author_name`
    #[instrument(skip(self))]
    pub async fn delete_reports_by_author(
        &self,
        forum_id: &DocumentId,
        author_name: &str,
    ) -> ServiceResult<u64> {
        let mut deleted = self
            .delete_matching_reports(&ReportLocation::forum(forum_id.clone()), author_name)
            .await?;

        let posts = self.ctx.post_repo().find_by_forum(forum_id).await?;
        for post in posts {
            let at_post = ReportLocation::post(forum_id.clone(), post.id.clone());
            deleted += self.delete_matching_reports(&at_post, author_name).await?;

            let comments = self.ctx.comment_repo().find_by_post(forum_id, &post.id).await?;
            for comment in comments {
                let at_comment =
                    ReportLocation::comment(forum_id.clone(), post.id.clone(), comment.id.clone());
                deleted += self.delete_matching_reports(&at_comment, author_name).await?;
            }
        }

        info!(reports = deleted, "Authored reports deleted");
        Ok(deleted)
    }

    async fn delete_matching_reports(
        &self,
        location: &ReportLocation,
        author_name: &str,
    ) -> ServiceResult<u64> {
        let mut deleted = 0;
        let reports = self.ctx.report_repo().find_at(location).await?;
        for report in reports.iter().filter(|r| r.is_authored_by(author_name)) {
            if self.ctx.report_repo().delete(location, &report.id).await? {
                deleted += 1;
            }
        }
        Ok(deleted)
    }

    // ========================================================================
    // Workflows
    // ========================================================================

    async fn require_forum(&self, forum_id: &DocumentId) -> ServiceResult<()> {
        match self.ctx.forum_repo().find_by_id(forum_id).await? {
            Some(_) => Ok(()),
            None => Err(DomainError::ForumNotFound(forum_id.clone()).into()),
        }
    }

    /// Ban the author of a reported item and delete everything they wrote in the forum.
    ///
    /// Running this twice for the same report appends a second ban record.
    #[instrument(skip(self, reason))]
    pub async fn ban_from_report(
        &self,
        forum_id: &DocumentId,
        report_id: &DocumentId,
        admin_id: &str,
        reason: &str,
    ) -> ServiceResult<BanOutcome> {
        // Checked up front so that no store call happens on bad input
        require_admin(admin_id)?;
        let reason = require_reason(reason)?;

        self.run_ban(forum_id, report_id, admin_id, &reason)
            .await
            .inspect_err(|e| {
                error!(
                    forum_id = %forum_id,
                    report_id = %report_id,
                    stage = e.stage().map(|s| s.as_str()),
                    error = %e,
                    "Ban workflow failed"
                );
            })
    }

    async fn run_ban(
        &self,
        forum_id: &DocumentId,
        report_id: &DocumentId,
        admin_id: &str,
        reason: &str,
    ) -> ServiceResult<BanOutcome> {
        self.require_forum(forum_id)
            .await
            .map_err(|e| e.at_stage(ModerationStage::ResolveAuthor))?;

        let author = self
            .find_author_for_report(forum_id, report_id)
            .await
            .map_err(|e| e.at_stage(ModerationStage::ResolveAuthor))?;

        if !author.is_resolved() {
            warn!(
                forum_id = %forum_id,
                report_id = %report_id,
                author_name = %author.name,
                "Report not found; banning and deleting content by the placeholder name"
            );
        }

        let ban = self
            .record_ban(forum_id, report_id, &author, admin_id, reason)
            .await
            .map_err(|e| e.at_stage(ModerationStage::RecordBan))?;

        let notified = match (&author.author_id, self.ctx.moderation().notify_on_ban) {
            (Some(author_id), true) => {
                let notification = Notification::banned(author_id.clone(), author.author_type, reason);
                self.ctx
                    .notification_repo()
                    .create(&notification)
                    .await
                    .map_err(|e| ServiceError::from(e).at_stage(ModerationStage::NotifyAuthor))?;
                true
            }
            _ => false,
        };

        let content = self
            .delete_content_by_author(forum_id, &author.name)
            .await
            .map_err(|e| e.at_stage(ModerationStage::DeleteContent))?;

        let reports_deleted = self
            .delete_reports_by_author(forum_id, &author.name)
            .await
            .map_err(|e| e.at_stage(ModerationStage::DeleteReports))?;

        let event = DomainEvent::UserBanned(UserBannedEvent {
            forum_id: forum_id.clone(),
            report_id: report_id.clone(),
            ban_id: ban.id.clone(),
            author_name: author.name.clone(),
            report_source: author.source(),
            banned_by: ban.banned_by.clone(),
            posts_deleted: content.posts,
            comments_deleted: content.comments,
            likes_deleted: content.likes,
            reports_deleted,
            timestamp: ban.banned_at,
        });
        self.ctx
            .emit(&event)
            .await
            .map_err(|e| ServiceError::from(e).at_stage(ModerationStage::Completion))?;

        info!(
            forum_id = %forum_id,
            report_id = %report_id,
            author_name = %author.name,
            posts = content.posts,
            comments = content.comments,
            likes = content.likes,
            reports = reports_deleted,
            "User banned and content deleted"
        );

        Ok(BanOutcome {
            ban,
            author,
            content,
            reports_deleted,
            notified,
        })
    }

    /// Suspend the author of a reported item for `days` (or the configured default).
    ///
    /// No content is deleted; only the originating report is removed.
    #[instrument(skip(self, reason))]
    pub async fn suspend_from_report(
        &self,
        forum_id: &DocumentId,
        report_id: &DocumentId,
        admin_id: &str,
        reason: &str,
        days: Option<u32>,
    ) -> ServiceResult<SuspensionOutcome> {
        let admin = require_admin(admin_id)?;
        let reason = require_reason(reason)?;
        let days = days.unwrap_or(self.ctx.moderation().default_suspension_days);
        if days < 1 {
            return Err(DomainError::InvalidSuspensionPeriod.into());
        }

        self.run_suspension(forum_id, report_id, admin, &reason, days)
            .await
            .inspect_err(|e| {
                error!(
                    forum_id = %forum_id,
                    report_id = %report_id,
                    stage = e.stage().map(|s| s.as_str()),
                    error = %e,
                    "Suspension workflow failed"
                );
            })
    }

    async fn run_suspension(
        &self,
        forum_id: &DocumentId,
        report_id: &DocumentId,
        admin: DocumentId,
        reason: &str,
        days: u32,
    ) -> ServiceResult<SuspensionOutcome> {
        self.require_forum(forum_id)
            .await
            .map_err(|e| e.at_stage(ModerationStage::ResolveAuthor))?;

        let author = self
            .find_author_for_report(forum_id, report_id)
            .await
            .map_err(|e| e.at_stage(ModerationStage::ResolveAuthor))?;

        let Some(location) = author.location.clone() else {
            return Err(DomainError::ReportNotFound {
                forum_id: forum_id.clone(),
                report_id: report_id.clone(),
            }
            .into());
        };

        let suspension = SuspendedUser::new(
            report_id.clone(),
            forum_id.clone(),
            &author,
            admin,
            reason.to_string(),
            days,
        );
        self.ctx
            .suspended_user_repo()
            .create(&suspension)
            .await
            .map_err(|e| ServiceError::from(e).at_stage(ModerationStage::RecordSuspension))?;

        let notified = if let Some(author_id) = &author.author_id {
            let notification =
                Notification::suspended(author_id.clone(), author.author_type, days, reason);
            self.ctx
                .notification_repo()
                .create(&notification)
                .await
                .map_err(|e| ServiceError::from(e).at_stage(ModerationStage::NotifyAuthor))?;
            true
        } else {
            false
        };

        self.ctx
            .report_repo()
            .delete(&location, report_id)
            .await
            .map_err(|e| ServiceError::from(e).at_stage(ModerationStage::DeleteReport))?;

        let event = DomainEvent::UserSuspended(UserSuspendedEvent {
            forum_id: forum_id.clone(),
            report_id: report_id.clone(),
            suspension_id: suspension.id.clone(),
            author_name: author.name.clone(),
            suspended_by: suspension.suspended_by.clone(),
            suspended_until: suspension.suspended_until,
            timestamp: suspension.suspended_at,
        });
        self.ctx
            .emit(&event)
            .await
            .map_err(|e| ServiceError::from(e).at_stage(ModerationStage::Completion))?;

        info!(
            forum_id = %forum_id,
            report_id = %report_id,
            author_name = %author.name,
            days,
            "User suspended"
        );

        Ok(SuspensionOutcome {
            suspension,
            author,
            notified,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_reason_trims() {
        assert_eq!(require_reason("  spam  ").unwrap(), "spam");
        assert!(matches!(require_reason(" \n\t"), Err(DomainError::EmptyReason)));
    }

    #[test]
    fn test_require_admin() {
        assert_eq!(require_admin(" admin-1 ").unwrap().as_str(), "admin-1");
        assert!(matches!(require_admin(""), Err(DomainError::MissingAdmin)));
    }
}
