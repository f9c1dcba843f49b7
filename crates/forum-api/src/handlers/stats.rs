//! Statistics handlers

use axum::{extract::State, Json};
use chrono::Utc;
use forum_service::dto::WeeklyPostsResponse;
use forum_service::ReportService;

use crate::response::ApiResult;
use crate::state::AppState;

/// Posts created since Sunday 00:00 UTC
///
/// GET /stats/weekly-posts
pub async fn get_weekly_posts(
    State(state): State<AppState>,
) -> ApiResult<Json<WeeklyPostsResponse>> {
    let service = ReportService::new(state.service_context());
    let weekly = service.weekly_post_count(Utc::now()).await?;
    Ok(Json(weekly.into()))
}
