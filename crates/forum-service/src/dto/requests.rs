//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.
//! Services trim and re-check free-text fields, so in-process callers get the
//! same guarantees.

use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Moderation Requests
// ============================================================================

/// Ban the author of a reported item
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct BanUserRequest {
    #[validate(length(min = 1, max = 128, message = "Admin ID is required"))]
    pub admin_id: String,

    #[validate(length(min = 1, max = 500, message = "Reason must be 1-500 characters"))]
    pub reason: String,
}

/// Suspend the author of a reported item
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SuspendUserRequest {
    #[validate(length(min = 1, max = 128, message = "Admin ID is required"))]
    pub admin_id: String,

    #[validate(length(min = 1, max = 500, message = "Reason must be 1-500 characters"))]
    pub reason: String,

    /// Suspension length; the configured default applies when omitted
    #[validate(range(min = 1, max = 3650, message = "Days must be between 1 and 3650"))]
    pub days: Option<u32>,
}

// ============================================================================
// Forum Requests
// ============================================================================

/// Remove a member from a forum
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct KickMemberRequest {
    #[validate(length(min = 1, max = 128, message = "Admin ID is required"))]
    pub admin_id: String,
}

// ============================================================================
// Report Requests
// ============================================================================

/// File a report against a forum, post or comment.
///
/// `author_*` describe who wrote the reported content, not the reporter.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SubmitReportRequest {
    pub post_id: Option<String>,

    pub comment_id: Option<String>,

    pub author_id: Option<String>,

    #[validate(length(min = 1, max = 100, message = "Author name must be 1-100 characters"))]
    pub author_name: String,

    /// `user`, `professional` or `organization`
    pub author_type: Option<String>,

    #[validate(length(min = 1, max = 500, message = "Reason must be 1-500 characters"))]
    pub reason: String,

    #[validate(length(min = 1, max = 128, message = "Reporter ID is required"))]
    pub reported_by: String,
}
