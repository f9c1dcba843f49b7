//! Moderation handlers
//!
//! Ban, suspend, and author lookup for a reported item.

use axum::{extract::State, Json};
use forum_service::dto::{
    BanOutcomeResponse, BanUserRequest, ResolvedAuthorResponse, SuspendUserRequest,
    SuspensionOutcomeResponse,
};
use forum_service::ModerationService;

use crate::extractors::{ReportPath, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// Ban the author of a reported item and delete their content in the forum
///
/// POST /forums/{forum_id}/reports/{report_id}/ban
pub async fn ban_user(
    State(state): State<AppState>,
    path: ReportPath,
    ValidatedJson(request): ValidatedJson<BanUserRequest>,
) -> ApiResult<Json<BanOutcomeResponse>> {
    let service = ModerationService::new(state.service_context());
    let outcome = service
        .ban_from_report(&path.forum_id, &path.report_id, &request.admin_id, &request.reason)
        .await?;
    Ok(Json(outcome.into()))
}

/// Suspend the author of a reported item
///
/// POST /forums/{forum_id}/reports/{report_id}/suspend
pub async fn suspend_user(
    State(state): State<AppState>,
    path: ReportPath,
    ValidatedJson(request): ValidatedJson<SuspendUserRequest>,
) -> ApiResult<Json<SuspensionOutcomeResponse>> {
    let service = ModerationService::new(state.service_context());
    let outcome = service
        .suspend_from_report(
            &path.forum_id,
            &path.report_id,
            &request.admin_id,
            &request.reason,
            request.days,
        )
        .await?;
    Ok(Json(outcome.into()))
}

/// Resolve who wrote the reported content
///
/// GET /forums/{forum_id}/reports/{report_id}/author
pub async fn get_report_author(
    State(state): State<AppState>,
    path: ReportPath,
) -> ApiResult<Json<ResolvedAuthorResponse>> {
    let service = ModerationService::new(state.service_context());
    let author = service
        .find_author_for_report(&path.forum_id, &path.report_id)
        .await?;
    Ok(Json(ResolvedAuthorResponse::from(&author)))
}
