//! PostgreSQL implementation of NotificationRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use forum_core::entities::Notification;
use forum_core::traits::{NotificationRepository, RepoResult};
use forum_core::value_objects::DocumentId;

use crate::models::NotificationModel;

use super::error::map_db_error;

/// PostgreSQL implementation of NotificationRepository
#[derive(Clone)]
pub struct PgNotificationRepository {
    pool: PgPool,
}

impl PgNotificationRepository {
    /// Create a new PgNotificationRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NotificationRepository for PgNotificationRepository {
    #[instrument(skip(self, notification), fields(recipient_id = %notification.recipient_id, kind = notification.kind.as_str()))]
    async fn create(&self, notification: &Notification) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO notifications (id, recipient_id, recipient_type, message, kind,
                                       created_at, is_read, additional_data)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ",
        )
        .bind(notification.id.as_str())
        .bind(notification.recipient_id.as_str())
        .bind(notification.recipient_type.as_str())
        .bind(&notification.message)
        .bind(notification.kind.as_str())
        .bind(notification.created_at)
        .bind(notification.is_read)
        .bind(&notification.additional_data)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_by_recipient(&self, recipient_id: &DocumentId) -> RepoResult<Vec<Notification>> {
        let results = sqlx::query_as::<_, NotificationModel>(
            r"
            SELECT id, recipient_id, recipient_type, message, kind, created_at, is_read, additional_data
            FROM notifications
            WHERE recipient_id = $1
            ORDER BY created_at DESC, id
            ",
        )
        .bind(recipient_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        results.into_iter().map(Notification::try_from).collect()
    }
}
