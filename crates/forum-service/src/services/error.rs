//! Service layer error types

use std::fmt;

use forum_core::DomainError;

/// Step of a moderation workflow, reported when that step fails
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModerationStage {
    ResolveAuthor,
    RecordBan,
    NotifyAuthor,
    DeleteContent,
    DeleteReports,
    Completion,
    RecordSuspension,
    DeleteReport,
}

impl ModerationStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ResolveAuthor => "resolve_author",
            Self::RecordBan => "record_ban",
            Self::NotifyAuthor => "notify_author",
            Self::DeleteContent => "delete_content",
            Self::DeleteReports => "delete_reports",
            Self::Completion => "completion",
            Self::RecordSuspension => "record_suspension",
            Self::DeleteReport => "delete_report",
        }
    }
}

impl fmt::Display for ModerationStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors returned by service operations
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// Domain rule violation, or a storage failure outside a workflow
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// A moderation workflow aborted; earlier steps stay committed
    #[error("Moderation action failed at {stage}: {source}")]
    Moderation {
        stage: ModerationStage,
        #[source]
        source: DomainError,
    },

    /// Malformed input caught before any store call
    #[error("Validation error: {0}")]
    Validation(String),
}

impl ServiceError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Attribute a storage failure to a workflow stage.
    ///
    /// Only storage failures are wrapped; validation and not-found errors
    /// pass through unchanged.
    pub fn at_stage(self, stage: ModerationStage) -> Self {
        match self {
            Self::Domain(source) if source.is_infrastructure() => Self::Moderation { stage, source },
            other => other,
        }
    }

    pub fn stage(&self) -> Option<ModerationStage> {
        match self {
            Self::Moderation { stage, .. } => Some(*stage),
            _ => None,
        }
    }

    pub fn status_code(&self) -> u16 {
        match self {
            Self::Domain(e) if e.is_not_found() => 404,
            Self::Domain(e) if e.is_validation() => 400,
            Self::Validation(_) => 400,
            Self::Domain(_) | Self::Moderation { .. } => 500,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Domain(e) => e.code(),
            Self::Moderation { .. } => "MODERATION_FAILED",
            Self::Validation(_) => "VALIDATION_ERROR",
        }
    }
}

impl From<validator::ValidationErrors> for ServiceError {
    fn from(err: validator::ValidationErrors) -> Self {
        Self::Validation(err.to_string())
    }
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;
    use forum_core::DocumentId;

    #[test]
    fn test_domain_error_codes_pass_through() {
        let err = ServiceError::from(DomainError::EmptyReason);
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.error_code(), "REASON_REQUIRED");

        let err = ServiceError::from(DomainError::ForumNotFound(DocumentId::new("f1")));
        assert_eq!(err.status_code(), 404);
        assert_eq!(err.error_code(), "UNKNOWN_FORUM");
    }

    #[test]
    fn test_at_stage_wraps_storage_failures() {
        let err = ServiceError::from(DomainError::DatabaseError("connection reset".to_string()))
            .at_stage(ModerationStage::DeleteContent);

        assert_eq!(err.stage(), Some(ModerationStage::DeleteContent));
        assert_eq!(err.status_code(), 500);
        assert_eq!(err.error_code(), "MODERATION_FAILED");
        assert_eq!(
            err.to_string(),
            "Moderation action failed at delete_content: Database error: connection reset"
        );
    }

    #[test]
    fn test_at_stage_keeps_client_errors() {
        let err = ServiceError::from(DomainError::MissingAdmin).at_stage(ModerationStage::RecordBan);
        assert!(err.stage().is_none());
        assert_eq!(err.status_code(), 400);

        let err = ServiceError::validation("days must be positive")
            .at_stage(ModerationStage::RecordSuspension);
        assert!(err.stage().is_none());
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
    }
}
