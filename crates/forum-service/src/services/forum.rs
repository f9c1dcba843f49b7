//! Forum service
//!
//! Member kicks and the ban / suspension listings.

use forum_core::entities::{BannedUser, Notification, SuspendedUser};
use forum_core::events::MemberKickedEvent;
use forum_core::value_objects::DocumentId;
use forum_core::{DomainError, DomainEvent};
use tracing::{info, instrument};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Forum service
pub struct ForumService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ForumService<'a> {
    /// Create a new ForumService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    async fn require_forum(&self, forum_id: &DocumentId) -> ServiceResult<forum_core::Forum> {
        self.ctx
            .forum_repo()
            .find_by_id(forum_id)
            .await?
            .ok_or_else(|| DomainError::ForumNotFound(forum_id.clone()).into())
    }

    /// Remove a member from a forum and tell them about it
    #[instrument(skip(self))]
    pub async fn kick_member(
        &self,
        forum_id: &DocumentId,
        user_id: &DocumentId,
        admin_id: &str,
    ) -> ServiceResult<()> {
        let admin_id = admin_id.trim();
        if admin_id.is_empty() {
            return Err(DomainError::MissingAdmin.into());
        }

        let forum = self.require_forum(forum_id).await?;
        let member_missing = || -> ServiceError {
            DomainError::MemberNotFound {
                forum_id: forum_id.clone(),
                user_id: user_id.clone(),
            }
            .into()
        };

        if !forum.has_member(user_id) {
            return Err(member_missing());
        }
        // Another admin may have removed them since the read above.
        if !self.ctx.forum_repo().remove_member(forum_id, user_id).await? {
            return Err(member_missing());
        }

        let notification = Notification::kicked(user_id.clone(), forum_id, &forum.title);
        self.ctx.notification_repo().create(&notification).await?;

        info!(forum_id = %forum_id, user_id = %user_id, admin_id = %admin_id, "Member kicked");

        let event = DomainEvent::MemberKicked(MemberKickedEvent::new(
            forum_id.clone(),
            user_id.clone(),
            DocumentId::new(admin_id),
        ));
        self.ctx.emit(&event).await?;

        Ok(())
    }

    /// Ban records of a forum, newest first
    #[instrument(skip(self))]
    pub async fn list_banned_users(&self, forum_id: &DocumentId) -> ServiceResult<Vec<BannedUser>> {
        self.require_forum(forum_id).await?;
        Ok(self.ctx.banned_user_repo().find_by_forum(forum_id).await?)
    }

    /// Suspension records of a forum, newest first
    #[instrument(skip(self))]
    pub async fn list_suspended_users(
        &self,
        forum_id: &DocumentId,
    ) -> ServiceResult<Vec<SuspendedUser>> {
        self.require_forum(forum_id).await?;
        Ok(self.ctx.suspended_user_repo().find_by_forum(forum_id).await?)
    }

    /// Ban records across every forum, newest first
    #[instrument(skip(self))]
    pub async fn list_all_banned_users(&self) -> ServiceResult<Vec<BannedUser>> {
        Ok(self.ctx.banned_user_repo().list_all().await?)
    }

    /// Suspension records across every forum, newest first
    #[instrument(skip(self))]
    pub async fn list_all_suspended_users(&self) -> ServiceResult<Vec<SuspendedUser>> {
        Ok(self.ctx.suspended_user_repo().list_all().await?)
    }
}
