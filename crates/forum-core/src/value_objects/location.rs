//! Report locations - the three nesting depths a report can live at
//!
//! ```text
//! forums/{forum}/reports
//! forums/{forum}/posts/{post}/reports
//! forums/{forum}/posts/{post}/comments/{comment}/reports
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use super::DocumentId;

/// Nesting depth of a report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportLevel {
    Forum,
    Post,
    Comment,
}

impl ReportLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Forum => "forum",
            Self::Post => "post",
            Self::Comment => "comment",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "forum" => Some(Self::Forum),
            "post" => Some(Self::Post),
            "comment" => Some(Self::Comment),
            _ => None,
        }
    }
}

impl fmt::Display for ReportLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The `reports` collection a report belongs to
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(tag = "level", rename_all = "lowercase")]
pub enum ReportLocation {
    Forum {
        forum_id: DocumentId,
    },
    Post {
        forum_id: DocumentId,
        post_id: DocumentId,
    },
    Comment {
        forum_id: DocumentId,
        post_id: DocumentId,
        comment_id: DocumentId,
    },
}

impl ReportLocation {
    pub fn forum(forum_id: DocumentId) -> Self {
        Self::Forum { forum_id }
    }

    pub fn post(forum_id: DocumentId, post_id: DocumentId) -> Self {
        Self::Post { forum_id, post_id }
    }

    pub fn comment(forum_id: DocumentId, post_id: DocumentId, comment_id: DocumentId) -> Self {
        Self::Comment {
            forum_id,
            post_id,
            comment_id,
        }
    }

    /// Build a location from optional path segments.
    ///
    /// Returns `None` when a comment id is given without its post id.
    pub fn from_parts(
        forum_id: DocumentId,
        post_id: Option<DocumentId>,
        comment_id: Option<DocumentId>,
    ) -> Option<Self> {
        match (post_id, comment_id) {
            (None, None) => Some(Self::forum(forum_id)),
            (Some(post_id), None) => Some(Self::post(forum_id, post_id)),
            (Some(post_id), Some(comment_id)) => {
                Some(Self::comment(forum_id, post_id, comment_id))
            }
            (None, Some(_)) => None,
        }
    }

    pub fn level(&self) -> ReportLevel {
        match self {
            Self::Forum { .. } => ReportLevel::Forum,
            Self::Post { .. } => ReportLevel::Post,
            Self::Comment { .. } => ReportLevel::Comment,
        }
    }

    pub fn forum_id(&self) -> &DocumentId {
        match self {
            Self::Forum { forum_id } | Self::Post { forum_id, .. } | Self::Comment { forum_id, .. } => {
                forum_id
            }
        }
    }

    pub fn post_id(&self) -> Option<&DocumentId> {
        match self {
            Self::Forum { .. } => None,
            Self::Post { post_id, .. } | Self::Comment { post_id, .. } => Some(post_id),
        }
    }

    pub fn comment_id(&self) -> Option<&DocumentId> {
        match self {
            Self::Comment { comment_id, .. } => Some(comment_id),
            _ => None,
        }
    }

    /// Slash-separated path of the `reports` collection
    pub fn collection_path(&self) -> String {
        match self {
            Self::Forum { forum_id } => format!("forums/{forum_id}/reports"),
            Self::Post { forum_id, post_id } => {
                format!("forums/{forum_id}/posts/{post_id}/reports")
            }
            Self::Comment {
                forum_id,
                post_id,
                comment_id,
            } => format!("forums/{forum_id}/posts/{post_id}/comments/{comment_id}/reports"),
        }
    }
}

impl fmt::Display for ReportLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.collection_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_paths() {
        let f = DocumentId::new("f1");
        let p = DocumentId::new("p1");
        let c = DocumentId::new("c1");

        assert_eq!(ReportLocation::forum(f.clone()).to_string(), "forums/f1/reports");
        assert_eq!(
            ReportLocation::post(f.clone(), p.clone()).to_string(),
            "forums/f1/posts/p1/reports"
        );
        assert_eq!(
            ReportLocation::comment(f, p, c).to_string(),
            "forums/f1/posts/p1/comments/c1/reports"
        );
    }

    #[test]
    fn test_from_parts() {
        let f = DocumentId::new("f1");
        let loc = ReportLocation::from_parts(f.clone(), Some("p1".into()), None).unwrap();
        assert_eq!(loc.level(), ReportLevel::Post);
        assert_eq!(loc.post_id().map(DocumentId::as_str), Some("p1"));
        assert!(loc.comment_id().is_none());

        assert!(ReportLocation::from_parts(f, None, Some("c1".into())).is_none());
    }

    #[test]
    fn test_level_strings() {
        assert_eq!(ReportLevel::parse("comment"), Some(ReportLevel::Comment));
        assert_eq!(ReportLevel::parse("thread"), None);
        assert_eq!(ReportLevel::Forum.as_str(), "forum");
    }
}
