//! Report database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for reports table
#[derive(Debug, Clone, FromRow)]
pub struct ReportModel {
    pub path: String,
    pub id: String,
    pub level: String,
    pub forum_id: String,
    pub post_id: Option<String>,
    pub comment_id: Option<String>,
    pub author_id: Option<String>,
    pub author_name: String,
    pub author_type: String,
    pub reason: String,
    pub reported_by: String,
    pub created_at: DateTime<Utc>,
}

/// Row of a `GROUP BY level` count
#[derive(Debug, Clone, FromRow)]
pub struct ReportCountModel {
    pub level: String,
    pub count: i64,
}
