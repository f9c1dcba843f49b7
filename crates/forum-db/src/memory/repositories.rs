//! Repository trait implementations for [`MemoryStore`]

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::instrument;

use forum_core::entities::{
    BannedUser, Comment, Forum, Like, Notification, Post, Report, SuspendedUser,
};
use forum_core::traits::{
    BannedUserRepository, CommentRepository, ForumRepository, LikeRepository,
    NotificationRepository, PostRepository, RepoResult, ReportCounts, ReportRepository,
    SuspendedUserRepository,
};
use forum_core::value_objects::{DocumentId, ReportLocation};

use super::store::MemoryStore;

/// Storage order of a child collection
fn oldest_first<T>(items: &mut [T], key: impl Fn(&T) -> (DateTime<Utc>, DocumentId)) {
    items.sort_by_key(key);
}

#[async_trait]
impl ForumRepository for MemoryStore {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: &DocumentId) -> RepoResult<Option<Forum>> {
        Ok(self.inner.read().forums.get(id).cloned())
    }

    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<Forum>> {
        let mut forums: Vec<Forum> = self.inner.read().forums.values().cloned().collect();
        oldest_first(&mut forums, |f| (f.created_at, f.id.clone()));
        Ok(forums)
    }

    #[instrument(skip(self, forum), fields(forum_id = %forum.id))]
    async fn create(&self, forum: &Forum) -> RepoResult<()> {
        self.insert_forum(forum.clone());
        Ok(())
    }

    #[instrument(skip(self))]
    async fn remove_member(&self, forum_id: &DocumentId, user_id: &DocumentId) -> RepoResult<bool> {
        Ok(self
            .inner
            .write()
            .forums
            .get_mut(forum_id)
            .is_some_and(|forum| forum.remove_member(user_id)))
    }
}

#[async_trait]
impl PostRepository for MemoryStore {
    #[instrument(skip(self))]
    async fn find_by_id(
        &self,
        forum_id: &DocumentId,
        post_id: &DocumentId,
    ) -> RepoResult<Option<Post>> {
        let key = (forum_id.clone(), post_id.clone());
        Ok(self.inner.read().posts.get(&key).cloned())
    }

    #[instrument(skip(self))]
    async fn find_by_forum(&self, forum_id: &DocumentId) -> RepoResult<Vec<Post>> {
        let mut posts: Vec<Post> = self
            .inner
            .read()
            .posts
            .values()
            .filter(|p| &p.forum_id == forum_id)
            .cloned()
            .collect();
        oldest_first(&mut posts, |p| (p.created_at, p.id.clone()));
        Ok(posts)
    }

    #[instrument(skip(self))]
    async fn count_created_since(&self, since: DateTime<Utc>) -> RepoResult<u64> {
        let count = self
            .inner
            .read()
            .posts
            .values()
            .filter(|p| p.created_at >= since)
            .count();
        Ok(count as u64)
    }

    #[instrument(skip(self, post), fields(post_id = %post.id))]
    async fn create(&self, post: &Post) -> RepoResult<()> {
        self.insert_post(post.clone());
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, forum_id: &DocumentId, post_id: &DocumentId) -> RepoResult<bool> {
        Ok(self.inner.write().remove_post(forum_id, post_id))
    }
}

#[async_trait]
impl CommentRepository for MemoryStore {
    #[instrument(skip(self))]
    async fn find_by_id(
        &self,
        forum_id: &DocumentId,
        post_id: &DocumentId,
        comment_id: &DocumentId,
    ) -> RepoResult<Option<Comment>> {
        let key = (forum_id.clone(), post_id.clone(), comment_id.clone());
        Ok(self.inner.read().comments.get(&key).cloned())
    }

    #[instrument(skip(self))]
    async fn find_by_post(
        &self,
        forum_id: &DocumentId,
        post_id: &DocumentId,
    ) -> RepoResult<Vec<Comment>> {
        let mut comments: Vec<Comment> = self
            .inner
            .read()
            .comments
            .values()
            .filter(|c| &c.forum_id == forum_id && &c.post_id == post_id)
            .cloned()
            .collect();
        oldest_first(&mut comments, |c| (c.created_at, c.id.clone()));
        Ok(comments)
    }

    #[instrument(skip(self, comment), fields(comment_id = %comment.id))]
    async fn create(&self, comment: &Comment) -> RepoResult<()> {
        self.insert_comment(comment.clone());
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(
        &self,
        forum_id: &DocumentId,
        post_id: &DocumentId,
        comment_id: &DocumentId,
    ) -> RepoResult<bool> {
        Ok(self
            .inner
            .write()
            .remove_comment(forum_id, post_id, comment_id))
    }
}

#[async_trait]
impl LikeRepository for MemoryStore {
    #[instrument(skip(self))]
    async fn find_by_post(
        &self,
        forum_id: &DocumentId,
        post_id: &DocumentId,
    ) -> RepoResult<Vec<Like>> {
        let mut likes: Vec<Like> = self
            .inner
            .read()
            .likes
            .values()
            .filter(|l| &l.forum_id == forum_id && &l.post_id == post_id)
            .cloned()
            .collect();
        oldest_first(&mut likes, |l| (l.created_at, l.id.clone()));
        Ok(likes)
    }

    #[instrument(skip(self, like), fields(like_id = %like.id))]
    async fn create(&self, like: &Like) -> RepoResult<()> {
        self.insert_like(like.clone());
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(
        &self,
        forum_id: &DocumentId,
        post_id: &DocumentId,
        like_id: &DocumentId,
    ) -> RepoResult<bool> {
        let key = (forum_id.clone(), post_id.clone(), like_id.clone());
        Ok(self.inner.write().likes.remove(&key).is_some())
    }
}

#[async_trait]
impl ReportRepository for MemoryStore {
    #[instrument(skip(self), fields(path = %location))]
    async fn find(
        &self,
        location: &ReportLocation,
        report_id: &DocumentId,
    ) -> RepoResult<Option<Report>> {
        let key = (location.clone(), report_id.clone());
        Ok(self.inner.read().reports.get(&key).cloned())
    }

    #[instrument(skip(self), fields(path = %location))]
    async fn find_at(&self, location: &ReportLocation) -> RepoResult<Vec<Report>> {
        let mut reports: Vec<Report> = self
            .inner
            .read()
            .reports
            .values()
            .filter(|r| &r.location == location)
            .cloned()
            .collect();
        oldest_first(&mut reports, |r| (r.created_at, r.id.clone()));
        Ok(reports)
    }

    #[instrument(skip(self))]
    async fn count_by_level(&self, forum_id: &DocumentId) -> RepoResult<ReportCounts> {
        let mut counts = ReportCounts::default();
        for report in self.inner.read().reports.values() {
            if report.forum_id() == forum_id {
                counts.add(report.level(), 1);
            }
        }
        Ok(counts)
    }

    #[instrument(skip(self, report), fields(report_id = %report.id))]
    async fn create(&self, report: &Report) -> RepoResult<()> {
        self.insert_report(report.clone());
        Ok(())
    }

    #[instrument(skip(self), fields(path = %location))]
    async fn delete(&self, location: &ReportLocation, report_id: &DocumentId) -> RepoResult<bool> {
        let key = (location.clone(), report_id.clone());
        Ok(self.inner.write().reports.remove(&key).is_some())
    }
}

#[async_trait]
impl BannedUserRepository for MemoryStore {
    #[instrument(skip(self, ban), fields(ban_id = %ban.id))]
    async fn create(&self, ban: &BannedUser) -> RepoResult<()> {
        self.inner.write().banned_users.push(ban.clone());
        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_by_forum(&self, forum_id: &DocumentId) -> RepoResult<Vec<BannedUser>> {
        let mut bans: Vec<BannedUser> = self
            .inner
            .read()
            .banned_users
            .iter()
            .filter(|b| &b.forum_id == forum_id)
            .cloned()
            .collect();
        bans.sort_by(|a, b| b.banned_at.cmp(&a.banned_at));
        Ok(bans)
    }

    #[instrument(skip(self))]
    async fn list_all(&self) -> RepoResult<Vec<BannedUser>> {
        let mut bans = self.inner.read().banned_users.clone();
        bans.sort_by(|a, b| b.banned_at.cmp(&a.banned_at));
        Ok(bans)
    }
}

#[async_trait]
impl SuspendedUserRepository for MemoryStore {
    #[instrument(skip(self, suspension), fields(suspension_id = %suspension.id))]
    async fn create(&self, suspension: &SuspendedUser) -> RepoResult<()> {
        self.inner.write().suspended_users.push(suspension.clone());
        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_by_forum(&self, forum_id: &DocumentId) -> RepoResult<Vec<SuspendedUser>> {
        let mut suspensions: Vec<SuspendedUser> = self
            .inner
            .read()
            .suspended_users
            .iter()
            .filter(|s| &s.forum_id == forum_id)
            .cloned()
            .collect();
        suspensions.sort_by(|a, b| b.suspended_at.cmp(&a.suspended_at));
        Ok(suspensions)
    }

    #[instrument(skip(self))]
    async fn list_all(&self) -> RepoResult<Vec<SuspendedUser>> {
        let mut suspensions = self.inner.read().suspended_users.clone();
        suspensions.sort_by(|a, b| b.suspended_at.cmp(&a.suspended_at));
        Ok(suspensions)
    }
}

#[async_trait]
impl NotificationRepository for MemoryStore {
    #[instrument(skip(self, notification), fields(recipient_id = %notification.recipient_id))]
    async fn create(&self, notification: &Notification) -> RepoResult<()> {
        self.inner.write().notifications.push(notification.clone());
        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_by_recipient(&self, recipient_id: &DocumentId) -> RepoResult<Vec<Notification>> {
        let mut notifications: Vec<Notification> = self
            .inner
            .read()
            .notifications
            .iter()
            .filter(|n| &n.recipient_id == recipient_id)
            .cloned()
            .collect();
        notifications.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(notifications)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use forum_core::value_objects::{AuthorType, ReportLevel};

    fn seeded() -> MemoryStore {
        let store = MemoryStore::new();
        let mut forum = Forum::new("f1".into(), "Anxiety".to_string(), "owner".to_string());
        forum.members = vec!["u1".into(), "u2".into()];
        store.insert_forum(forum);

        let now = Utc::now();
        for (i, id) in ["p2", "p1"].iter().enumerate() {
            let mut post = Post::new((*id).into(), "f1".into(), "alice".to_string(), "hi".to_string());
            post.created_at = now + Duration::seconds(i as i64);
            store.insert_post(post);
        }
        store.insert_comment(Comment::new(
            "c1".into(),
            "f1".into(),
            "p1".into(),
            "bob".to_string(),
            "reply".to_string(),
        ));
        store.insert_like(Like::new("l1".into(), "f1".into(), "p1".into(), "bob".to_string()));
        store.insert_report(Report::new(
            "r1".into(),
            ReportLocation::post("f1".into(), "p1".into()),
            "alice".to_string(),
            AuthorType::User,
            "spam".to_string(),
            "u9".into(),
        ));
        store.insert_report(Report::new(
            "r2".into(),
            ReportLocation::comment("f1".into(), "p1".into(), "c1".into()),
            "bob".to_string(),
            AuthorType::User,
            "rude".to_string(),
            "u9".into(),
        ));
        store.insert_report(Report::new(
            "r3".into(),
            ReportLocation::forum("f1".into()),
            "owner".to_string(),
            AuthorType::Organization,
            "off topic".to_string(),
            "u9".into(),
        ));
        store
    }

    #[tokio::test]
    async fn test_posts_listed_in_creation_order() {
        let store = seeded();
        let posts = PostRepository::find_by_forum(&store, &"f1".into()).await.unwrap();
        let ids: Vec<&str> = posts.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["p2", "p1"]);
    }

    #[tokio::test]
    async fn test_post_delete_removes_subtree() {
        let store = seeded();
        assert!(PostRepository::delete(&store, &"f1".into(), &"p1".into())
            .await
            .unwrap());

        let counts = store.counts();
        assert_eq!(counts.posts, 1);
        assert_eq!(counts.comments, 0);
        assert_eq!(counts.likes, 0);
        // Only the forum-level report survives.
        assert_eq!(counts.reports, 1);

        assert!(!PostRepository::delete(&store, &"f1".into(), &"p1".into())
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn test_comment_delete_removes_its_reports() {
        let store = seeded();
        assert!(CommentRepository::delete(&store, &"f1".into(), &"p1".into(), &"c1".into())
            .await
            .unwrap());
        let at_comment = ReportLocation::comment("f1".into(), "p1".into(), "c1".into());
        assert!(store.find_at(&at_comment).await.unwrap().is_empty());
        assert_eq!(store.counts().reports, 2);
    }

    #[tokio::test]
    async fn test_report_lookup_is_scoped_to_location() {
        let store = seeded();
        let forum_level = ReportLocation::forum("f1".into());
        assert!(store.find(&forum_level, &"r1".into()).await.unwrap().is_none());
        let found = store.find(&forum_level, &"r3".into()).await.unwrap().unwrap();
        assert_eq!(found.author_name, "owner");

        let counts = store.count_by_level(&"f1".into()).await.unwrap();
        assert_eq!((counts.forum, counts.post, counts.comment), (1, 1, 1));

        let at_post = ReportLocation::post("f1".into(), "p1".into());
        let reports = store.find_at(&at_post).await.unwrap();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].level(), ReportLevel::Post);
    }

    #[tokio::test]
    async fn test_remove_member() {
        let store = seeded();
        assert!(store.remove_member(&"f1".into(), &"u1".into()).await.unwrap());
        assert!(!store.remove_member(&"f1".into(), &"u1".into()).await.unwrap());
        assert!(!store.remove_member(&"missing".into(), &"u2".into()).await.unwrap());

        let forum = ForumRepository::find_by_id(&store, &"f1".into())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(forum.members, vec![DocumentId::new("u2")]);
    }

    #[tokio::test]
    async fn test_has_content_by() {
        let store = seeded();
        assert!(store.has_content_by(&"f1".into(), "bob"));
        assert!(!store.has_content_by(&"f1".into(), "carol"));
        assert!(!store.has_content_by(&"f2".into(), "bob"));
    }
}
