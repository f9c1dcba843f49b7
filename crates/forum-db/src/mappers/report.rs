//! Report entity <-> model mapper

use forum_core::entities::Report;
use forum_core::error::DomainError;
use forum_core::value_objects::{AuthorType, DocumentId, ReportLocation};

use crate::models::ReportModel;

impl TryFrom<ReportModel> for Report {
    type Error = DomainError;

    fn try_from(model: ReportModel) -> Result<Self, Self::Error> {
        let location = ReportLocation::from_parts(
            DocumentId::new(model.forum_id),
            model.post_id.map(DocumentId::new),
            model.comment_id.map(DocumentId::new),
        )
        .ok_or_else(|| DomainError::InvalidLocation(model.path.clone()))?;

        if location.level().as_str() != model.level {
            return Err(DomainError::InvalidLocation(format!(
                "{} stored as level {}",
                model.path, model.level
            )));
        }

        Ok(Report {
            id: DocumentId::new(model.id),
            location,
            author_id: model.author_id.map(DocumentId::new),
            author_name: model.author_name,
            author_type: AuthorType::parse(&model.author_type),
            reason: model.reason,
            reported_by: DocumentId::new(model.reported_by),
            created_at: model.created_at,
        })
    }
}

/// Flattened report columns for insertion
pub struct ReportInsert<'a> {
    pub path: String,
    pub id: &'a str,
    pub level: &'static str,
    pub forum_id: &'a str,
    pub post_id: Option<&'a str>,
    pub comment_id: Option<&'a str>,
}

impl<'a> ReportInsert<'a> {
    pub fn new(report: &'a Report) -> Self {
        Self {
            path: report.location.collection_path(),
            id: report.id.as_str(),
            level: report.level().as_str(),
            forum_id: report.location.forum_id().as_str(),
            post_id: report.location.post_id().map(DocumentId::as_str),
            comment_id: report.location.comment_id().map(DocumentId::as_str),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn model(post_id: Option<&str>, comment_id: Option<&str>, level: &str) -> ReportModel {
        ReportModel {
            path: "forums/f1/reports".to_string(),
            id: "r1".to_string(),
            level: level.to_string(),
            forum_id: "f1".to_string(),
            post_id: post_id.map(String::from),
            comment_id: comment_id.map(String::from),
            author_id: None,
            author_name: "alice".to_string(),
            author_type: "user".to_string(),
            reason: "spam".to_string(),
            reported_by: "u9".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_comment_level_row() {
        let report = Report::try_from(model(Some("p1"), Some("c1"), "comment")).unwrap();
        assert_eq!(
            report.location,
            ReportLocation::comment("f1".into(), "p1".into(), "c1".into())
        );
        assert_eq!(report.author_type, AuthorType::User);
    }

    #[test]
    fn test_rejects_inconsistent_rows() {
        assert!(Report::try_from(model(None, Some("c1"), "comment")).is_err());
        assert!(Report::try_from(model(Some("p1"), None, "forum")).is_err());
    }

    #[test]
    fn test_insert_flattening() {
        let report = Report::try_from(model(Some("p1"), None, "post")).unwrap();
        let insert = ReportInsert::new(&report);
        assert_eq!(insert.path, "forums/f1/posts/p1/reports");
        assert_eq!(insert.level, "post");
        assert_eq!(insert.post_id, Some("p1"));
        assert_eq!(insert.comment_id, None);
    }
}
