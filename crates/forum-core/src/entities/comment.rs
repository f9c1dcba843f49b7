//! Comment entity - a reply under a post

use chrono::{DateTime, Utc};

use crate::value_objects::{AuthorType, DocumentId};

/// Comment entity, owned by a post's `comments` collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: DocumentId,
    pub forum_id: DocumentId,
    pub post_id: DocumentId,
    pub author_id: Option<DocumentId>,
    pub author_name: String,
    pub author_type: AuthorType,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    /// Create a new Comment
    pub fn new(
        id: DocumentId,
        forum_id: DocumentId,
        post_id: DocumentId,
        author_name: String,
        content: String,
    ) -> Self {
        Self {
            id,
            forum_id,
            post_id,
            author_id: None,
            author_name,
            author_type: AuthorType::User,
            content,
            created_at: Utc::now(),
        }
    }

    #[inline]
    pub fn is_authored_by(&self, author_name: &str) -> bool {
        self.author_name == author_name
    }
}
