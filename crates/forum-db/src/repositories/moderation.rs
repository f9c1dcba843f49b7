//! PostgreSQL implementations of the ban and suspension record repositories
//!
//! Both tables are append-only: there is no update or delete.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use forum_core::entities::{BannedUser, SuspendedUser};
use forum_core::traits::{BannedUserRepository, RepoResult, SuspendedUserRepository};
use forum_core::value_objects::{DocumentId, ReportLevel};

use crate::models::{BannedUserModel, SuspendedUserModel};

use super::error::map_db_error;

/// PostgreSQL implementation of BannedUserRepository
#[derive(Clone)]
pub struct PgBannedUserRepository {
    pool: PgPool,
}

impl PgBannedUserRepository {
    /// Create a new PgBannedUserRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BannedUserRepository for PgBannedUserRepository {
    #[instrument(skip(self, ban), fields(ban_id = %ban.id, forum_id = %ban.forum_id))]
    async fn create(&self, ban: &BannedUser) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO banned_users (id, report_id, forum_id, author_id, author_name, author_type,
                                      report_source, banned_at, banned_by, reason, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            ",
        )
        .bind(ban.id.as_str())
        .bind(ban.report_id.as_str())
        .bind(ban.forum_id.as_str())
        .bind(ban.author_id.as_ref().map(DocumentId::as_str))
        .bind(&ban.author_name)
        .bind(ban.author_type.as_str())
        .bind(ban.report_source.as_ref().map(ReportLevel::as_str))
        .bind(ban.banned_at)
        .bind(ban.banned_by.as_str())
        .bind(&ban.reason)
        .bind(ban.status.as_str())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_by_forum(&self, forum_id: &DocumentId) -> RepoResult<Vec<BannedUser>> {
        let results = sqlx::query_as::<_, BannedUserModel>(
            r"
            SELECT id, report_id, forum_id, author_id, author_name, author_type,
                   report_source, banned_at, banned_by, reason, status
            FROM banned_users
            WHERE forum_id = $1
            ORDER BY banned_at DESC, id
            ",
        )
        .bind(forum_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(BannedUser::from).collect())
    }

    #[instrument(skip(self))]
    async fn list_all(&self) -> RepoResult<Vec<BannedUser>> {
        let results = sqlx::query_as::<_, BannedUserModel>(
            r"
            SELECT id, report_id, forum_id, author_id, author_name, author_type,
                   report_source, banned_at, banned_by, reason, status
            FROM banned_users
            ORDER BY banned_at DESC, id
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(BannedUser::from).collect())
    }
}

/// PostgreSQL implementation of SuspendedUserRepository
#[derive(Clone)]
pub struct PgSuspendedUserRepository {
    pool: PgPool,
}

impl PgSuspendedUserRepository {
    /// Create a new PgSuspendedUserRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SuspendedUserRepository for PgSuspendedUserRepository {
    #[instrument(skip(self, suspension), fields(suspension_id = %suspension.id))]
    async fn create(&self, suspension: &SuspendedUser) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO suspended_users (id, report_id, forum_id, author_id, author_name, author_type,
                                         report_source, suspended_at, suspended_by, reason,
                                         suspended_until, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            ",
        )
        .bind(suspension.id.as_str())
        .bind(suspension.report_id.as_str())
        .bind(suspension.forum_id.as_str())
        .bind(suspension.author_id.as_ref().map(DocumentId::as_str))
        .bind(&suspension.author_name)
        .bind(suspension.author_type.as_str())
        .bind(suspension.report_source.as_ref().map(ReportLevel::as_str))
        .bind(suspension.suspended_at)
        .bind(suspension.suspended_by.as_str())
        .bind(&suspension.reason)
        .bind(suspension.suspended_until)
        .bind(suspension.status.as_str())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_by_forum(&self, forum_id: &DocumentId) -> RepoResult<Vec<SuspendedUser>> {
        let results = sqlx::query_as::<_, SuspendedUserModel>(
            r"
            SELECT id, report_id, forum_id, author_id, author_name, author_type, report_source,
                   suspended_at, suspended_by, reason, suspended_until, status
            FROM suspended_users
            WHERE forum_id = $1
            ORDER BY suspended_at DESC, id
            ",
        )
        .bind(forum_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(SuspendedUser::from).collect())
    }

    #[instrument(skip(self))]
    async fn list_all(&self) -> RepoResult<Vec<SuspendedUser>> {
        let results = sqlx::query_as::<_, SuspendedUserModel>(
            r"
            SELECT id, report_id, forum_id, author_id, author_name, author_type, report_source,
                   suspended_at, suspended_by, reason, suspended_until, status
            FROM suspended_users
            ORDER BY suspended_at DESC, id
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(SuspendedUser::from).collect())
    }
}
