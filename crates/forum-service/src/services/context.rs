//! Service context - dependency container for services
//!
//! Holds all repositories, moderation listeners and workflow settings.

use std::sync::Arc;

use tracing::warn;

use forum_common::ModerationConfig;
use forum_core::traits::{
    BannedUserRepository, CommentRepository, ForumRepository, LikeRepository,
    NotificationRepository, PostRepository, ReportRepository, SuspendedUserRepository,
};
use forum_core::{DomainError, DomainEvent};
use forum_db::{
    MemoryStore, PgBannedUserRepository, PgCommentRepository, PgForumRepository,
    PgLikeRepository, PgNotificationRepository, PgPool, PgPostRepository, PgReportRepository,
    PgSuspendedUserRepository,
};

use super::error::{ServiceError, ServiceResult};
use super::listener::ModerationListener;

/// Service context containing all dependencies
///
/// Passed by reference to every service. Cloning is cheap.
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool, absent for the in-memory backend
    pool: Option<PgPool>,

    // Repositories
    forum_repo: Arc<dyn ForumRepository>,
    post_repo: Arc<dyn PostRepository>,
    comment_repo: Arc<dyn CommentRepository>,
    like_repo: Arc<dyn LikeRepository>,
    report_repo: Arc<dyn ReportRepository>,
    banned_user_repo: Arc<dyn BannedUserRepository>,
    suspended_user_repo: Arc<dyn SuspendedUserRepository>,
    notification_repo: Arc<dyn NotificationRepository>,

    // Completion callbacks
    listeners: Vec<Arc<dyn ModerationListener>>,

    moderation: ModerationConfig,
}

impl ServiceContext {
    /// Context backed by an in-memory store, with no listeners
    pub fn in_memory(store: &MemoryStore, moderation: ModerationConfig) -> ServiceResult<Self> {
        ServiceContextBuilder::memory(store)
            .moderation(moderation)
            .build()
    }

    // === Database Pool ===

    /// Get the PostgreSQL connection pool
    pub fn pool(&self) -> Option<&PgPool> {
        self.pool.as_ref()
    }

    /// Whether the storage backend answers
    pub async fn store_healthy(&self) -> bool {
        match &self.pool {
            Some(pool) => sqlx::query("SELECT 1").execute(pool).await.is_ok(),
            None => true,
        }
    }

    // === Repositories ===

    pub fn forum_repo(&self) -> &dyn ForumRepository {
        self.forum_repo.as_ref()
    }

    pub fn post_repo(&self) -> &dyn PostRepository {
        self.post_repo.as_ref()
    }

    pub fn comment_repo(&self) -> &dyn CommentRepository {
        self.comment_repo.as_ref()
    }

    pub fn like_repo(&self) -> &dyn LikeRepository {
        self.like_repo.as_ref()
    }

    pub fn report_repo(&self) -> &dyn ReportRepository {
        self.report_repo.as_ref()
    }

    pub fn banned_user_repo(&self) -> &dyn BannedUserRepository {
        self.banned_user_repo.as_ref()
    }

    pub fn suspended_user_repo(&self) -> &dyn SuspendedUserRepository {
        self.suspended_user_repo.as_ref()
    }

    pub fn notification_repo(&self) -> &dyn NotificationRepository {
        self.notification_repo.as_ref()
    }

    // === Settings ===

    pub fn moderation(&self) -> &ModerationConfig {
        &self.moderation
    }

    // === Events ===

    /// Deliver an event to every listener in registration order.
    ///
    /// Stops at the first listener that fails.
    pub async fn emit(&self, event: &DomainEvent) -> Result<(), DomainError> {
        for listener in &self.listeners {
            if let Err(e) = listener.on_event(event).await {
                warn!(event_type = event.event_type(), error = %e, "Moderation listener failed");
                return Err(e);
            }
        }
        Ok(())
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("backend", &if self.pool.is_some() { "postgres" } else { "memory" })
            .field("repositories", &"...")
            .field("listeners", &self.listeners.len())
            .field("moderation", &self.moderation)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    forum_repo: Option<Arc<dyn ForumRepository>>,
    post_repo: Option<Arc<dyn PostRepository>>,
    comment_repo: Option<Arc<dyn CommentRepository>>,
    like_repo: Option<Arc<dyn LikeRepository>>,
    report_repo: Option<Arc<dyn ReportRepository>>,
    banned_user_repo: Option<Arc<dyn BannedUserRepository>>,
    suspended_user_repo: Option<Arc<dyn SuspendedUserRepository>>,
    notification_repo: Option<Arc<dyn NotificationRepository>>,
    listeners: Vec<Arc<dyn ModerationListener>>,
    moderation: ModerationConfig,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder preloaded with every PostgreSQL repository
    pub fn postgres(pool: PgPool) -> Self {
        Self {
            forum_repo: Some(Arc::new(PgForumRepository::new(pool.clone()))),
            post_repo: Some(Arc::new(PgPostRepository::new(pool.clone()))),
            comment_repo: Some(Arc::new(PgCommentRepository::new(pool.clone()))),
            like_repo: Some(Arc::new(PgLikeRepository::new(pool.clone()))),
            report_repo: Some(Arc::new(PgReportRepository::new(pool.clone()))),
            banned_user_repo: Some(Arc::new(PgBannedUserRepository::new(pool.clone()))),
            suspended_user_repo: Some(Arc::new(PgSuspendedUserRepository::new(pool.clone()))),
            notification_repo: Some(Arc::new(PgNotificationRepository::new(pool.clone()))),
            pool: Some(pool),
            ..Self::default()
        }
    }

    /// Builder preloaded with one in-memory store behind every repository
    pub fn memory(store: &MemoryStore) -> Self {
        let store = Arc::new(store.clone());
        Self {
            forum_repo: Some(store.clone()),
            post_repo: Some(store.clone()),
            comment_repo: Some(store.clone()),
            like_repo: Some(store.clone()),
            report_repo: Some(store.clone()),
            banned_user_repo: Some(store.clone()),
            suspended_user_repo: Some(store.clone()),
            notification_repo: Some(store),
            ..Self::default()
        }
    }

    pub fn forum_repo(mut self, repo: Arc<dyn ForumRepository>) -> Self {
        self.forum_repo = Some(repo);
        self
    }

    pub fn post_repo(mut self, repo: Arc<dyn PostRepository>) -> Self {
        self.post_repo = Some(repo);
        self
    }

    pub fn comment_repo(mut self, repo: Arc<dyn CommentRepository>) -> Self {
        self.comment_repo = Some(repo);
        self
    }

    pub fn like_repo(mut self, repo: Arc<dyn LikeRepository>) -> Self {
        self.like_repo = Some(repo);
        self
    }

    pub fn report_repo(mut self, repo: Arc<dyn ReportRepository>) -> Self {
        self.report_repo = Some(repo);
        self
    }

    pub fn banned_user_repo(mut self, repo: Arc<dyn BannedUserRepository>) -> Self {
        self.banned_user_repo = Some(repo);
        self
    }

    pub fn suspended_user_repo(mut self, repo: Arc<dyn SuspendedUserRepository>) -> Self {
        self.suspended_user_repo = Some(repo);
        self
    }

    pub fn notification_repo(mut self, repo: Arc<dyn NotificationRepository>) -> Self {
        self.notification_repo = Some(repo);
        self
    }

    /// Register a completion listener
    pub fn listener(mut self, listener: Arc<dyn ModerationListener>) -> Self {
        self.listeners.push(listener);
        self
    }

    pub fn moderation(mut self, moderation: ModerationConfig) -> Self {
        self.moderation = moderation;
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any repository is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        fn required<T>(value: Option<T>, name: &str) -> ServiceResult<T> {
            value.ok_or_else(|| ServiceError::validation(format!("{name} is required")))
        }

        if self.moderation.default_suspension_days == 0 {
            return Err(ServiceError::validation(
                "default_suspension_days must be at least 1",
            ));
        }

        Ok(ServiceContext {
            pool: self.pool,
            forum_repo: required(self.forum_repo, "forum_repo")?,
            post_repo: required(self.post_repo, "post_repo")?,
            comment_repo: required(self.comment_repo, "comment_repo")?,
            like_repo: required(self.like_repo, "like_repo")?,
            report_repo: required(self.report_repo, "report_repo")?,
            banned_user_repo: required(self.banned_user_repo, "banned_user_repo")?,
            suspended_user_repo: required(self.suspended_user_repo, "suspended_user_repo")?,
            notification_repo: required(self.notification_repo, "notification_repo")?,
            listeners: self.listeners,
            moderation: self.moderation,
        })
    }
}
