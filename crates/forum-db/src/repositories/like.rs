//! PostgreSQL implementation of LikeRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use forum_core::entities::Like;
use forum_core::traits::{LikeRepository, RepoResult};
use forum_core::value_objects::DocumentId;

use crate::models::LikeModel;

use super::error::map_db_error;

/// PostgreSQL implementation of LikeRepository
#[derive(Clone)]
pub struct PgLikeRepository {
    pool: PgPool,
}

impl PgLikeRepository {
    /// Create a new PgLikeRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LikeRepository for PgLikeRepository {
    #[instrument(skip(self))]
    async fn find_by_post(
        &self,
        forum_id: &DocumentId,
        post_id: &DocumentId,
    ) -> RepoResult<Vec<Like>> {
        let results = sqlx::query_as::<_, LikeModel>(
            r"
            SELECT forum_id, post_id, id, author_id, author_name, created_at
            FROM likes
            WHERE forum_id = $1 AND post_id = $2
            ORDER BY created_at, id
            ",
        )
        .bind(forum_id.as_str())
        .bind(post_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Like::from).collect())
    }

    #[instrument(skip(self, like), fields(like_id = %like.id))]
    async fn create(&self, like: &Like) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO likes (forum_id, post_id, id, author_id, author_name, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ",
        )
        .bind(like.forum_id.as_str())
        .bind(like.post_id.as_str())
        .bind(like.id.as_str())
        .bind(like.author_id.as_ref().map(DocumentId::as_str))
        .bind(&like.author_name)
        .bind(like.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(
        &self,
        forum_id: &DocumentId,
        post_id: &DocumentId,
        like_id: &DocumentId,
    ) -> RepoResult<bool> {
        let result = sqlx::query(
            r"
            DELETE FROM likes WHERE forum_id = $1 AND post_id = $2 AND id = $3
            ",
        )
        .bind(forum_id.as_str())
        .bind(post_id.as_str())
        .bind(like_id.as_str())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }
}
