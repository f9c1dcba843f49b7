//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.

use chrono::{DateTime, Utc};
use serde::Serialize;

use forum_core::value_objects::{AuthorType, ReportLevel};

// ============================================================================
// Moderation Responses
// ============================================================================

/// Author of reported content
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedAuthorResponse {
    pub author_id: Option<String>,
    pub author_name: String,
    pub author_type: AuthorType,
    /// Level the report was found at; null when unresolved
    pub source: Option<ReportLevel>,
    pub resolved: bool,
}

/// Ban record
#[derive(Debug, Clone, Serialize)]
pub struct BannedUserResponse {
    pub id: String,
    pub report_id: String,
    pub forum_id: String,
    pub author_id: Option<String>,
    pub author_name: String,
    pub author_type: AuthorType,
    pub report_source: Option<ReportLevel>,
    pub banned_at: DateTime<Utc>,
    pub banned_by: String,
    pub reason: String,
    pub status: &'static str,
}

/// Suspension record
#[derive(Debug, Clone, Serialize)]
pub struct SuspendedUserResponse {
    pub id: String,
    pub report_id: String,
    pub forum_id: String,
    pub author_id: Option<String>,
    pub author_name: String,
    pub author_type: AuthorType,
    pub report_source: Option<ReportLevel>,
    pub suspended_at: DateTime<Utc>,
    pub suspended_by: String,
    pub reason: String,
    pub suspended_until: DateTime<Utc>,
    pub status: &'static str,
    pub active: bool,
}

/// Documents removed by a ban
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DeletionCountsResponse {
    pub posts: u64,
    pub comments: u64,
    pub likes: u64,
    pub reports: u64,
}

/// Completed ban
#[derive(Debug, Clone, Serialize)]
pub struct BanOutcomeResponse {
    pub ban: BannedUserResponse,
    pub author: ResolvedAuthorResponse,
    pub deleted: DeletionCountsResponse,
    pub notified: bool,
}

/// Completed suspension
#[derive(Debug, Clone, Serialize)]
pub struct SuspensionOutcomeResponse {
    pub suspension: SuspendedUserResponse,
    pub author: ResolvedAuthorResponse,
    pub notified: bool,
}

// ============================================================================
// Report Responses
// ============================================================================

/// Stored report
#[derive(Debug, Clone, Serialize)]
pub struct ReportResponse {
    pub id: String,
    pub level: ReportLevel,
    pub forum_id: String,
    pub post_id: Option<String>,
    pub comment_id: Option<String>,
    pub author_id: Option<String>,
    pub author_name: String,
    pub author_type: AuthorType,
    pub reason: String,
    pub reported_by: String,
    pub created_at: DateTime<Utc>,
}

/// Report counts for one forum
#[derive(Debug, Clone, Serialize)]
pub struct ReportSummaryResponse {
    pub forum_id: String,
    pub forum_title: String,
    pub forum_reports: u64,
    pub post_reports: u64,
    pub comment_reports: u64,
    pub total: u64,
}

/// Posts created since the start of the week
#[derive(Debug, Clone, Serialize)]
pub struct WeeklyPostsResponse {
    pub week_start: DateTime<Utc>,
    pub count: u64,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub backend: &'static str,
    pub store: String,
}

impl ReadinessResponse {
    pub fn ready(backend: &'static str, store_healthy: bool) -> Self {
        Self {
            status: if store_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                backend,
                store: if store_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_response() {
        let health = HealthResponse::healthy();
        assert_eq!(health.status, "healthy");
    }

    #[test]
    fn test_readiness_response() {
        let ready = ReadinessResponse::ready("memory", true);
        assert_eq!(ready.status, "ready");
        assert_eq!(ready.checks.store, "healthy");

        let not_ready = ReadinessResponse::ready("postgres", false);
        assert_eq!(not_ready.status, "not_ready");
        assert_eq!(not_ready.checks.store, "unhealthy");
    }

    #[test]
    fn test_author_serialization() {
        let author = ResolvedAuthorResponse {
            author_id: None,
            author_name: "Unknown".to_string(),
            author_type: AuthorType::Unknown,
            source: None,
            resolved: false,
        };
        let json = serde_json::to_value(&author).unwrap();
        assert_eq!(json["author_type"], "Unknown");
        assert!(json["source"].is_null());
    }
}
