//! PostgreSQL implementation of PostRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;

use forum_core::entities::Post;
use forum_core::traits::{PostRepository, RepoResult};
use forum_core::value_objects::DocumentId;

use crate::models::PostModel;

use super::error::{map_db_error, to_count};

/// PostgreSQL implementation of PostRepository
#[derive(Clone)]
pub struct PgPostRepository {
    pool: PgPool,
}

impl PgPostRepository {
    /// Create a new PgPostRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostRepository for PgPostRepository {
    #[instrument(skip(self))]
    async fn find_by_id(
        &self,
        forum_id: &DocumentId,
        post_id: &DocumentId,
    ) -> RepoResult<Option<Post>> {
        let result = sqlx::query_as::<_, PostModel>(
            r"
            SELECT forum_id, id, author_id, author_name, author_type, content, created_at
            FROM posts
            WHERE forum_id = $1 AND id = $2
            ",
        )
        .bind(forum_id.as_str())
        .bind(post_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Post::from))
    }

    #[instrument(skip(self))]
    async fn find_by_forum(&self, forum_id: &DocumentId) -> RepoResult<Vec<Post>> {
        let results = sqlx::query_as::<_, PostModel>(
            r"
            SELECT forum_id, id, author_id, author_name, author_type, content, created_at
            FROM posts
            WHERE forum_id = $1
            ORDER BY created_at, id
            ",
        )
        .bind(forum_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Post::from).collect())
    }

    #[instrument(skip(self))]
    async fn count_created_since(&self, since: DateTime<Utc>) -> RepoResult<u64> {
        let count = sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*) FROM posts WHERE created_at >= $1
            ",
        )
        .bind(since)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(to_count(count))
    }

    #[instrument(skip(self, post), fields(forum_id = %post.forum_id, post_id = %post.id))]
    async fn create(&self, post: &Post) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO posts (forum_id, id, author_id, author_name, author_type, content, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ",
        )
        .bind(post.forum_id.as_str())
        .bind(post.id.as_str())
        .bind(post.author_id.as_ref().map(DocumentId::as_str))
        .bind(&post.author_name)
        .bind(post.author_type.as_str())
        .bind(&post.content)
        .bind(post.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    /// Comments, likes and nested reports go with the post via `ON DELETE CASCADE`.
    #[instrument(skip(self))]
    async fn delete(&self, forum_id: &DocumentId, post_id: &DocumentId) -> RepoResult<bool> {
        let result = sqlx::query(
            r"
            DELETE FROM posts WHERE forum_id = $1 AND id = $2
            ",
        )
        .bind(forum_id.as_str())
        .bind(post_id.as_str())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgPostRepository>();
    }
}
