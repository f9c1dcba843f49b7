//! Report handlers
//!
//! Report submission and per-forum report summaries.

use axum::{extract::State, Json};
use forum_service::dto::{ReportResponse, ReportSummaryResponse, SubmitReportRequest};
use forum_service::ReportService;

use crate::extractors::{ForumPath, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// File a report against a forum, post, or comment
///
/// POST /forums/{forum_id}/reports
pub async fn submit_report(
    State(state): State<AppState>,
    path: ForumPath,
    ValidatedJson(request): ValidatedJson<SubmitReportRequest>,
) -> ApiResult<Created<Json<ReportResponse>>> {
    let service = ReportService::new(state.service_context());
    let report = service.submit_report(&path.forum_id, request).await?;
    Ok(Created(Json(report.into())))
}

/// Report counts for one forum
///
/// GET /forums/{forum_id}/reports/summary
pub async fn get_forum_report_summary(
    State(state): State<AppState>,
    path: ForumPath,
) -> ApiResult<Json<ReportSummaryResponse>> {
    let service = ReportService::new(state.service_context());
    let summary = service.summarize_forum(&path.forum_id).await?;
    Ok(Json(summary.into()))
}

/// Report counts for every forum
///
/// GET /reports/summary
pub async fn get_report_summaries(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<ReportSummaryResponse>>> {
    let service = ReportService::new(state.service_context());
    let summaries = service.summarize_all().await?;
    Ok(Json(summaries.into_iter().map(Into::into).collect()))
}
