//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. The contract mirrors a document store:
//! read-by-id, list children of a parent, add a document, delete a document.
//! Each call is independently consistent; no call composes with another
//! into a transaction.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::entities::{
    BannedUser, Comment, Forum, Like, Notification, Post, Report, SuspendedUser,
};
use crate::error::DomainError;
use crate::value_objects::{DocumentId, ReportLevel, ReportLocation};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Forum Repository
// ============================================================================

#[async_trait]
pub trait ForumRepository: Send + Sync {
    /// Find forum by ID
    async fn find_by_id(&self, id: &DocumentId) -> RepoResult<Option<Forum>>;

    /// List all forums
    async fn list(&self) -> RepoResult<Vec<Forum>>;

    /// Create a new forum
    async fn create(&self, forum: &Forum) -> RepoResult<()>;

    /// Remove a user from the member list; returns whether they were a member
    async fn remove_member(&self, forum_id: &DocumentId, user_id: &DocumentId) -> RepoResult<bool>;
}

// ============================================================================
// Post Repository
// ============================================================================

#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Find post by ID
    async fn find_by_id(&self, forum_id: &DocumentId, post_id: &DocumentId)
        -> RepoResult<Option<Post>>;

    /// List all posts in a forum, oldest first
    async fn find_by_forum(&self, forum_id: &DocumentId) -> RepoResult<Vec<Post>>;

    /// Count posts in every forum created at or after `since`
    async fn count_created_since(&self, since: DateTime<Utc>) -> RepoResult<u64>;

    /// Create a new post
    async fn create(&self, post: &Post) -> RepoResult<()>;

    /// Delete a post together with its comments, likes, and nested reports
    async fn delete(&self, forum_id: &DocumentId, post_id: &DocumentId) -> RepoResult<bool>;
}

// ============================================================================
// Comment Repository
// ============================================================================

#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Find comment by ID
    async fn find_by_id(
        &self,
        forum_id: &DocumentId,
        post_id: &DocumentId,
        comment_id: &DocumentId,
    ) -> RepoResult<Option<Comment>>;

    /// List all comments on a post, oldest first
    async fn find_by_post(&self, forum_id: &DocumentId, post_id: &DocumentId)
        -> RepoResult<Vec<Comment>>;

    /// Create a new comment
    async fn create(&self, comment: &Comment) -> RepoResult<()>;

    /// Delete a comment together with its nested reports
    async fn delete(
        &self,
        forum_id: &DocumentId,
        post_id: &DocumentId,
        comment_id: &DocumentId,
    ) -> RepoResult<bool>;
}

// ============================================================================
// Like Repository
// ============================================================================

#[async_trait]
pub trait LikeRepository: Send + Sync {
    /// List all likes on a post
    async fn find_by_post(&self, forum_id: &DocumentId, post_id: &DocumentId)
        -> RepoResult<Vec<Like>>;

    /// Add a like
    async fn create(&self, like: &Like) -> RepoResult<()>;

    /// Remove a like
    async fn delete(
        &self,
        forum_id: &DocumentId,
        post_id: &DocumentId,
        like_id: &DocumentId,
    ) -> RepoResult<bool>;
}

// ============================================================================
// Report Repository
// ============================================================================

/// Number of reports per nesting depth within one forum
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReportCounts {
    pub forum: u64,
    pub post: u64,
    pub comment: u64,
}

impl ReportCounts {
    pub fn total(&self) -> u64 {
        self.forum + self.post + self.comment
    }

    /// Increment the bucket for `level`
    pub fn add(&mut self, level: ReportLevel, n: u64) {
        match level {
            ReportLevel::Forum => self.forum += n,
            ReportLevel::Post => self.post += n,
            ReportLevel::Comment => self.comment += n,
        }
    }
}

#[async_trait]
pub trait ReportRepository: Send + Sync {
    /// Find a report by ID inside one `reports` collection
    async fn find(&self, location: &ReportLocation, report_id: &DocumentId)
        -> RepoResult<Option<Report>>;

    /// List every report in one `reports` collection
    async fn find_at(&self, location: &ReportLocation) -> RepoResult<Vec<Report>>;

    /// Count reports per level across a forum
    async fn count_by_level(&self, forum_id: &DocumentId) -> RepoResult<ReportCounts>;

    /// Create a new report
    async fn create(&self, report: &Report) -> RepoResult<()>;

    /// Delete a report
    async fn delete(&self, location: &ReportLocation, report_id: &DocumentId) -> RepoResult<bool>;
}

// ============================================================================
// Moderation Record Repositories
// ============================================================================

#[async_trait]
pub trait BannedUserRepository: Send + Sync {
    /// Append a ban record
    async fn create(&self, ban: &BannedUser) -> RepoResult<()>;

    /// List ban records for a forum, newest first
    async fn find_by_forum(&self, forum_id: &DocumentId) -> RepoResult<Vec<BannedUser>>;

    /// List ban records across all forums, newest first
    async fn list_all(&self) -> RepoResult<Vec<BannedUser>>;
}

#[async_trait]
pub trait SuspendedUserRepository: Send + Sync {
    /// Append a suspension record
    async fn create(&self, suspension: &SuspendedUser) -> RepoResult<()>;

    /// List suspension records for a forum, newest first
    async fn find_by_forum(&self, forum_id: &DocumentId) -> RepoResult<Vec<SuspendedUser>>;

    /// List suspension records across all forums, newest first
    async fn list_all(&self) -> RepoResult<Vec<SuspendedUser>>;
}

// ============================================================================
// Notification Repository
// ============================================================================

#[async_trait]
pub trait NotificationRepository: Send + Sync {
    /// Deliver a notification
    async fn create(&self, notification: &Notification) -> RepoResult<()>;

    /// List a user's notifications, newest first
    async fn find_by_recipient(&self, recipient_id: &DocumentId) -> RepoResult<Vec<Notification>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_counts() {
        let mut counts = ReportCounts::default();
        counts.add(ReportLevel::Forum, 2);
        counts.add(ReportLevel::Comment, 3);
        assert_eq!(counts.forum, 2);
        assert_eq!(counts.post, 0);
        assert_eq!(counts.total(), 5);
    }
}
