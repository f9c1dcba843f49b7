//! Post, comment and like database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for posts table
#[derive(Debug, Clone, FromRow)]
pub struct PostModel {
    pub forum_id: String,
    pub id: String,
    pub author_id: Option<String>,
    pub author_name: String,
    pub author_type: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Database model for comments table
#[derive(Debug, Clone, FromRow)]
pub struct CommentModel {
    pub forum_id: String,
    pub post_id: String,
    pub id: String,
    pub author_id: Option<String>,
    pub author_name: String,
    pub author_type: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Database model for likes table
#[derive(Debug, Clone, FromRow)]
pub struct LikeModel {
    pub forum_id: String,
    pub post_id: String,
    pub id: String,
    pub author_id: Option<String>,
    pub author_name: String,
    pub created_at: DateTime<Utc>,
}
