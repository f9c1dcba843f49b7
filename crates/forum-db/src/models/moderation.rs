//! Ban and suspension record models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for banned_users table
#[derive(Debug, Clone, FromRow)]
pub struct BannedUserModel {
    pub id: String,
    pub report_id: String,
    pub forum_id: String,
    pub author_id: Option<String>,
    pub author_name: String,
    pub author_type: String,
    pub report_source: Option<String>,
    pub banned_at: DateTime<Utc>,
    pub banned_by: String,
    pub reason: String,
    pub status: String,
}

/// Database model for suspended_users table
#[derive(Debug, Clone, FromRow)]
pub struct SuspendedUserModel {
    pub id: String,
    pub report_id: String,
    pub forum_id: String,
    pub author_id: Option<String>,
    pub author_name: String,
    pub author_type: String,
    pub report_source: Option<String>,
    pub suspended_at: DateTime<Utc>,
    pub suspended_by: String,
    pub reason: String,
    pub suspended_until: DateTime<Utc>,
    pub status: String,
}
