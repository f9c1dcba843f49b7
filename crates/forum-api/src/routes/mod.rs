//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::handlers::{forums, health, moderation, reports, stats};
use crate::state::AppState;

/// Create the main API router with all routes
pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(health_routes())
        .nest("/api/v1", api_v1_routes())
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(moderation_routes())
        .merge(report_routes())
        .merge(forum_routes())
        .route("/stats/weekly-posts", get(stats::get_weekly_posts))
}

/// Ban, suspend, and author lookup for a report
fn moderation_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/forums/:forum_id/reports/:report_id/ban",
            post(moderation::ban_user),
        )
        .route(
            "/forums/:forum_id/reports/:report_id/suspend",
            post(moderation::suspend_user),
        )
        .route(
            "/forums/:forum_id/reports/:report_id/author",
            get(moderation::get_report_author),
        )
}

/// Report routes
fn report_routes() -> Router<AppState> {
    Router::new()
        .route("/forums/:forum_id/reports", post(reports::submit_report))
        .route(
            "/forums/:forum_id/reports/summary",
            get(reports::get_forum_report_summary),
        )
        .route("/reports/summary", get(reports::get_report_summaries))
}

/// Forum administration routes
fn forum_routes() -> Router<AppState> {
    Router::new()
        .route("/forums/:forum_id/bans", get(forums::get_forum_bans))
        .route("/forums/:forum_id/suspensions", get(forums::get_forum_suspensions))
        .route("/forums/:forum_id/members/:user_id", delete(forums::kick_member))
        .route("/bans", get(forums::get_all_bans))
        .route("/suspensions", get(forums::get_all_suspensions))
}
