//! PostgreSQL implementation of ForumRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use forum_core::entities::Forum;
use forum_core::traits::{ForumRepository, RepoResult};
use forum_core::value_objects::DocumentId;

use crate::models::ForumModel;

use super::error::map_db_error;

/// PostgreSQL implementation of ForumRepository
#[derive(Clone)]
pub struct PgForumRepository {
    pool: PgPool,
}

impl PgForumRepository {
    /// Create a new PgForumRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ForumRepository for PgForumRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: &DocumentId) -> RepoResult<Option<Forum>> {
        let result = sqlx::query_as::<_, ForumModel>(
            r"
            SELECT id, title, author_id, author_name, author_type, members, created_at
            FROM forums
            WHERE id = $1
            ",
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Forum::from))
    }

    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<Forum>> {
        let results = sqlx::query_as::<_, ForumModel>(
            r"
            SELECT id, title, author_id, author_name, author_type, members, created_at
            FROM forums
            ORDER BY created_at, id
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Forum::from).collect())
    }

    #[instrument(skip(self, forum), fields(forum_id = %forum.id))]
    async fn create(&self, forum: &Forum) -> RepoResult<()> {
        let members: Vec<String> = forum.members.iter().map(|m| m.as_str().to_owned()).collect();

        sqlx::query(
            r"
            INSERT INTO forums (id, title, author_id, author_name, author_type, members, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ",
        )
        .bind(forum.id.as_str())
        .bind(&forum.title)
        .bind(forum.author_id.as_ref().map(DocumentId::as_str))
        .bind(&forum.author_name)
        .bind(forum.author_type.as_str())
        .bind(members)
        .bind(forum.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn remove_member(&self, forum_id: &DocumentId, user_id: &DocumentId) -> RepoResult<bool> {
        let result = sqlx::query(
            r"
            UPDATE forums
            SET members = array_remove(members, $2)
            WHERE id = $1 AND $2 = ANY(members)
            ",
        )
        .bind(forum_id.as_str())
        .bind(user_id.as_str())
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
        assert_send_sync::<PgForumRepository>();
    }
}
