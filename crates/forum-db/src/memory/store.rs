//! Shared state of the in-memory backend

use std::collections::BTreeMap;
use std::sync::Arc;

use parking_lot::RwLock;

use forum_core::entities::{
    BannedUser, Comment, Forum, Like, Notification, Post, Report, SuspendedUser,
};
use forum_core::value_objects::{DocumentId, ReportLocation};

pub(super) type PostKey = (DocumentId, DocumentId);
pub(super) type ChildKey = (DocumentId, DocumentId, DocumentId);

/// Every collection of the document tree
#[derive(Debug, Default)]
pub(super) struct Collections {
    pub forums: BTreeMap<DocumentId, Forum>,
    pub posts: BTreeMap<PostKey, Post>,
    pub comments: BTreeMap<ChildKey, Comment>,
    pub likes: BTreeMap<ChildKey, Like>,
    pub reports: BTreeMap<(ReportLocation, DocumentId), Report>,
    pub banned_users: Vec<BannedUser>,
    pub suspended_users: Vec<SuspendedUser>,
    pub notifications: Vec<Notification>,
}

impl Collections {
    /// Remove a comment and the reports filed against it
    pub fn remove_comment(
        &mut self,
        forum_id: &DocumentId,
        post_id: &DocumentId,
        comment_id: &DocumentId,
    ) -> bool {
        let key = (forum_id.clone(), post_id.clone(), comment_id.clone());
        let removed = self.comments.remove(&key).is_some();
        if removed {
            self.reports.retain(|(location, _), _| {
                !(location.forum_id() == forum_id
                    && location.post_id() == Some(post_id)
                    && location.comment_id() == Some(comment_id))
            });
        }
        removed
    }

    /// Remove a post and its whole subtree
    pub fn remove_post(&mut self, forum_id: &DocumentId, post_id: &DocumentId) -> bool {
        let removed = self
            .posts
            .remove(&(forum_id.clone(), post_id.clone()))
            .is_some();
        if removed {
            let in_post = |f: &DocumentId, p: &DocumentId| f == forum_id && p == post_id;
            self.comments.retain(|(f, p, _), _| !in_post(f, p));
            self.likes.retain(|(f, p, _), _| !in_post(f, p));
            self.reports.retain(|(location, _), _| {
                !(location.forum_id() == forum_id && location.post_id() == Some(post_id))
            });
        }
        removed
    }
}

/// Number of documents per collection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreCounts {
    pub forums: usize,
    pub posts: usize,
    pub comments: usize,
    pub likes: usize,
    pub reports: usize,
    pub banned_users: usize,
    pub suspended_users: usize,
    pub notifications: usize,
}

/// In-memory document store
///
/// Cloning is cheap and clones share state. Each repository call takes the
/// lock once, so a call is atomic but consecutive calls are not.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    pub(super) inner: Arc<RwLock<Collections>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Seeding
    // ========================================================================

    pub fn insert_forum(&self, forum: Forum) {
        self.inner.write().forums.insert(forum.id.clone(), forum);
    }

    pub fn insert_post(&self, post: Post) {
        let key = (post.forum_id.clone(), post.id.clone());
        self.inner.write().posts.insert(key, post);
    }

    pub fn insert_comment(&self, comment: Comment) {
        let key = (
            comment.forum_id.clone(),
            comment.post_id.clone(),
            comment.id.clone(),
        );
        self.inner.write().comments.insert(key, comment);
    }

    pub fn insert_like(&self, like: Like) {
        let key = (like.forum_id.clone(), like.post_id.clone(), like.id.clone());
        self.inner.write().likes.insert(key, like);
    }

    pub fn insert_report(&self, report: Report) {
        let key = (report.location.clone(), report.id.clone());
        self.inner.write().reports.insert(key, report);
    }

    // ========================================================================
    // Inspection
    // ========================================================================

    pub fn counts(&self) -> StoreCounts {
        let state = self.inner.read();
        StoreCounts {
            forums: state.forums.len(),
            posts: state.posts.len(),
            comments: state.comments.len(),
            likes: state.likes.len(),
            reports: state.reports.len(),
            banned_users: state.banned_users.len(),
            suspended_users: state.suspended_users.len(),
            notifications: state.notifications.len(),
        }
    }

    /// Whether any post, comment, like or report in the forum carries `author_name`
    pub fn has_content_by(&self, forum_id: &DocumentId, author_name: &str) -> bool {
        let state = self.inner.read();
        state
            .posts
            .values()
            .any(|p| &p.forum_id == forum_id && p.is_authored_by(author_name))
            || state
                .comments
                .values()
                .any(|c| &c.forum_id == forum_id && c.is_authored_by(author_name))
            || state
                .likes
                .values()
                .any(|l| &l.forum_id == forum_id && l.is_authored_by(author_name))
            || state
                .reports
                .values()
                .any(|r| r.forum_id() == forum_id && r.is_authored_by(author_name))
    }
}
