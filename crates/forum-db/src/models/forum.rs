//! Forum database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for forums table
#[derive(Debug, Clone, FromRow)]
pub struct ForumModel {
    pub id: String,
    pub title: String,
    pub author_id: Option<String>,
    pub author_name: String,
    pub author_type: String,
    pub members: Vec<String>,
    pub created_at: DateTime<Utc>,
}
