//! Notification database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for notifications table
#[derive(Debug, Clone, FromRow)]
pub struct NotificationModel {
    pub id: String,
    pub recipient_id: String,
    pub recipient_type: String,
    pub message: String,
    pub kind: String,
    pub created_at: DateTime<Utc>,
    pub is_read: bool,
    pub additional_data: serde_json::Value,
}
