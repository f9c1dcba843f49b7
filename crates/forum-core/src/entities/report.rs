//! Report entity - a user-submitted flag against a forum, post, or comment

use chrono::{DateTime, Utc};

use crate::value_objects::{AuthorType, DocumentId, ReportLevel, ReportLocation};

/// Author name recorded when a report cannot be resolved
pub const UNKNOWN_AUTHOR: &str = "Unknown";

/// Report entity
///
/// `author_*` fields describe the author of the reported content, not the reporter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub id: DocumentId,
    pub location: ReportLocation,
    pub author_id: Option<DocumentId>,
    pub author_name: String,
    pub author_type: AuthorType,
    pub reason: String,
    pub reported_by: DocumentId,
    pub created_at: DateTime<Utc>,
}

impl Report {
    /// Create a new Report
    pub fn new(
        id: DocumentId,
        location: ReportLocation,
        author_name: String,
        author_type: AuthorType,
        reason: String,
        reported_by: DocumentId,
    ) -> Self {
        Self {
            id,
            location,
            author_id: None,
            author_name,
            author_type,
            reason,
            reported_by,
            created_at: Utc::now(),
        }
    }

    #[inline]
    pub fn forum_id(&self) -> &DocumentId {
        self.location.forum_id()
    }

    #[inline]
    pub fn level(&self) -> ReportLevel {
        self.location.level()
    }

    #[inline]
    pub fn is_authored_by(&self, author_name: &str) -> bool {
        self.author_name == author_name
    }
}

/// Author of reported content, as resolved from a report id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedAuthor {
    pub author_id: Option<DocumentId>,
    pub name: String,
    pub author_type: AuthorType,
    /// Where the matching report was found; `None` when unresolved
    pub location: Option<ReportLocation>,
}

impl ResolvedAuthor {
    /// Placeholder used when no report matched
    pub fn unknown() -> Self {
        Self {
            author_id: None,
            name: UNKNOWN_AUTHOR.to_string(),
            author_type: AuthorType::Unknown,
            location: None,
        }
    }

    pub fn from_report(report: &Report) -> Self {
        Self {
            author_id: report.author_id.clone(),
            name: report.author_name.clone(),
            author_type: report.author_type,
            location: Some(report.location.clone()),
        }
    }

    #[inline]
    pub fn is_resolved(&self) -> bool {
        self.location.is_some()
    }

    /// Level the report was found at
    pub fn source(&self) -> Option<ReportLevel> {
        self.location.as_ref().map(ReportLocation::level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_author() {
        let author = ResolvedAuthor::unknown();
        assert_eq!(author.name, "Unknown");
        assert_eq!(author.author_type, AuthorType::Unknown);
        assert!(!author.is_resolved());
        assert!(author.source().is_none());
    }

    #[test]
    fn test_from_report_keeps_location() {
        let location = ReportLocation::comment("f1".into(), "p1".into(), "c1".into());
        let mut report = Report::new(
            "r1".into(),
            location,
            "Jamie".to_string(),
            AuthorType::Professional,
            "spam".to_string(),
            "u9".into(),
        );
        report.author_id = Some("u7".into());

        let author = ResolvedAuthor::from_report(&report);
        assert_eq!(author.name, "Jamie");
        assert_eq!(author.source(), Some(ReportLevel::Comment));
        assert_eq!(author.author_id, Some("u7".into()));
        assert_eq!(report.forum_id().as_str(), "f1");
    }
}
