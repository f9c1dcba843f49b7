//! Like entity - a reaction on a post

use chrono::{DateTime, Utc};

use crate::value_objects::DocumentId;

/// Like entity, owned by a post's `likes` collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Like {
    pub id: DocumentId,
    pub forum_id: DocumentId,
    pub post_id: DocumentId,
    pub author_id: Option<DocumentId>,
    pub author_name: String,
    pub created_at: DateTime<Utc>,
}

impl Like {
    pub fn new(id: DocumentId, forum_id: DocumentId, post_id: DocumentId, author_name: String) -> Self {
        Self {
            id,
            forum_id,
            post_id,
            author_id: None,
            author_name,
            created_at: Utc::now(),
        }
    }

    #[inline]
    pub fn is_authored_by(&self, author_name: &str) -> bool {
        self.author_name == author_name
    }
}
