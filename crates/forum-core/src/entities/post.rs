//! Post entity - a top-level entry in a forum

use chrono::{DateTime, Utc};

use crate::value_objects::{AuthorType, DocumentId};

/// Post entity, owned by a forum's `posts` collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: DocumentId,
    pub forum_id: DocumentId,
    pub author_id: Option<DocumentId>,
    pub author_name: String,
    pub author_type: AuthorType,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Post {
    /// Create a new Post
    pub fn new(id: DocumentId, forum_id: DocumentId, author_name: String, content: String) -> Self {
        Self {
            id,
            forum_id,
            author_id: None,
            author_name,
            author_type: AuthorType::User,
            content,
            created_at: Utc::now(),
        }
    }

    /// Display-name match used by the moderation cascade
    #[inline]
    pub fn is_authored_by(&self, author_name: &str) -> bool {
        self.author_name == author_name
    }
}
