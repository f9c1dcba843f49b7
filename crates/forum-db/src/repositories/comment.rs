//! PostgreSQL implementation of CommentRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use forum_core::entities::Comment;
use forum_core::traits::{CommentRepository, RepoResult};
use forum_core::value_objects::DocumentId;

use crate::models::CommentModel;

use super::error::map_db_error;

/// PostgreSQL implementation of CommentRepository
#[derive(Clone)]
pub struct PgCommentRepository {
    pool: PgPool,
}

impl PgCommentRepository {
    /// Create a new PgCommentRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for PgCommentRepository {
    #[instrument(skip(self))]
    async fn find_by_id(
        &self,
        forum_id: &DocumentId,
        post_id: &DocumentId,
        comment_id: &DocumentId,
    ) -> RepoResult<Option<Comment>> {
        let result = sqlx::query_as::<_, CommentModel>(
            r"
            SELECT forum_id, post_id, id, author_id, author_name, author_type, content, created_at
            FROM comments
            WHERE forum_id = $1 AND post_id = $2 AND id = $3
            ",
        )
        .bind(forum_id.as_str())
        .bind(post_id.as_str())
        .bind(comment_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Comment::from))
    }

    #[instrument(skip(self))]
    async fn find_by_post(
        &self,
        forum_id: &DocumentId,
        post_id: &DocumentId,
    ) -> RepoResult<Vec<Comment>> {
        let results = sqlx::query_as::<_, CommentModel>(
            r"
            SELECT forum_id, post_id, id, author_id, author_name, author_type, content, created_at
            FROM comments
            WHERE forum_id = $1 AND post_id = $2
            ORDER BY created_at, id
            ",
        )
        .bind(forum_id.as_str())
        .bind(post_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Comment::from).collect())
    }

    #[instrument(skip(self, comment), fields(comment_id = %comment.id))]
    async fn create(&self, comment: &Comment) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO comments (forum_id, post_id, id, author_id, author_name, author_type, content, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ",
        )
        .bind(comment.forum_id.as_str())
        .bind(comment.post_id.as_str())
        .bind(comment.id.as_str())
        .bind(comment.author_id.as_ref().map(DocumentId::as_str))
        .bind(&comment.author_name)
        .bind(comment.author_type.as_str())
        .bind(&comment.content)
        .bind(comment.created_at)
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
        comment_id: &DocumentId,
    ) -> RepoResult<bool> {
        let result = sqlx::query(
            r"
            DELETE FROM comments WHERE forum_id = $1 AND post_id = $2 AND id = $3
            ",
        )
        .bind(forum_id.as_str())
        .bind(post_id.as_str())
        .bind(comment_id.as_str())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }
}
