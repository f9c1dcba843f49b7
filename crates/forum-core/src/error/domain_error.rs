//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::DocumentId;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Forum not found: {0}")]
    ForumNotFound(DocumentId),

    #[error("Post not found: {0}")]
    PostNotFound(DocumentId),

    #[error("Comment not found: {0}")]
    CommentNotFound(DocumentId),

    #[error("Report {report_id} not found in forum {forum_id}")]
    ReportNotFound {
        forum_id: DocumentId,
        report_id: DocumentId,
    },

    #[error("User {user_id} is not a member of forum {forum_id}")]
    MemberNotFound {
        forum_id: DocumentId,
        user_id: DocumentId,
    },

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("A reason is required")]
    EmptyReason,

    #[error("Admin ID is required")]
    MissingAdmin,

    #[error("Suspension period must be at least 1 day")]
    InvalidSuspensionPeriod,

    #[error("Invalid report location: {0}")]
    InvalidLocation(String),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::ForumNotFound(_) => "UNKNOWN_FORUM",
            Self::PostNotFound(_) => "UNKNOWN_POST",
            Self::CommentNotFound(_) => "UNKNOWN_COMMENT",
            Self::ReportNotFound { .. } => "UNKNOWN_REPORT",
            Self::MemberNotFound { .. } => "UNKNOWN_MEMBER",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::EmptyReason => "REASON_REQUIRED",
            Self::MissingAdmin => "ADMIN_REQUIRED",
            Self::InvalidSuspensionPeriod => "INVALID_SUSPENSION_PERIOD",
            Self::InvalidLocation(_) => "INVALID_LOCATION",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::ForumNotFound(_)
                | Self::PostNotFound(_)
                | Self::CommentNotFound(_)
                | Self::ReportNotFound { .. }
                | Self::MemberNotFound { .. }
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::EmptyReason
                | Self::MissingAdmin
                | Self::InvalidSuspensionPeriod
                | Self::InvalidLocation(_)
        )
    }

    /// Check if this came from the storage backend
    pub fn is_infrastructure(&self) -> bool {
        matches!(self, Self::DatabaseError(_) | Self::InternalError(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = DomainError::ForumNotFound(DocumentId::new("f1"));
        assert_eq!(err.code(), "UNKNOWN_FORUM");
        assert_eq!(DomainError::EmptyReason.code(), "REASON_REQUIRED");
    }

    #[test]
    fn test_classification() {
        assert!(DomainError::PostNotFound("p1".into()).is_not_found());
        assert!(DomainError::MissingAdmin.is_validation());
        assert!(DomainError::DatabaseError("boom".to_string()).is_infrastructure());
        assert!(!DomainError::EmptyReason.is_not_found());
    }

    #[test]
    fn test_error_display() {
        let err = DomainError::ReportNotFound {
            forum_id: "f1".into(),
            report_id: "r1".into(),
        };
        assert_eq!(err.to_string(), "Report r1 not found in forum f1");
        assert!(err.is_not_found());
    }
}
