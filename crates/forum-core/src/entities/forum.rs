//! Forum entity - a topic-scoped discussion space

use chrono::{DateTime, Utc};

use crate::value_objects::{AuthorType, DocumentId};

/// Forum entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Forum {
    pub id: DocumentId,
    pub title: String,
    pub author_id: Option<DocumentId>,
    pub author_name: String,
    pub author_type: AuthorType,
    pub members: Vec<DocumentId>,
    pub created_at: DateTime<Utc>,
}

impl Forum {
    /// Create a new Forum with no members
    pub fn new(id: DocumentId, title: String, author_name: String) -> Self {
        Self {
            id,
            title,
            author_id: None,
            author_name,
            author_type: AuthorType::User,
            members: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Check if a user is in the member list
    pub fn has_member(&self, user_id: &DocumentId) -> bool {
        self.members.contains(user_id)
    }

    /// Remove a user from the member list; returns whether they were present
    pub fn remove_member(&mut self, user_id: &DocumentId) -> bool {
        let before = self.members.len();
        self.members.retain(|m| m != user_id);
        self.members.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_member() {
        let mut forum = Forum::new("f1".into(), "Coping".to_string(), "Ana".to_string());
        forum.members = vec!["u1".into(), "u2".into()];

        assert!(forum.remove_member(&"u1".into()));
        assert!(!forum.has_member(&"u1".into()));
        assert!(!forum.remove_member(&"u1".into()));
        assert_eq!(forum.members.len(), 1);
    }
}
