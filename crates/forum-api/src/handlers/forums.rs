//! Forum handlers
//!
//! Member kicks and moderation record listings.

use axum::{extract::State, Json};
use forum_service::dto::{BannedUserResponse, KickMemberRequest, SuspendedUserResponse};
use forum_service::ForumService;

use crate::extractors::{ForumPath, MemberPath, ValidatedJson};
use crate::response::{ApiResult, NoContent};
use crate::state::AppState;

/// Remove a member from a forum
///
/// DELETE /forums/{forum_id}/members/{user_id}
pub async fn kick_member(
    State(state): State<AppState>,
    path: MemberPath,
    ValidatedJson(request): ValidatedJson<KickMemberRequest>,
) -> ApiResult<NoContent> {
    let service = ForumService::new(state.service_context());
    service
        .kick_member(&path.forum_id, &path.user_id, &request.admin_id)
        .await?;
    Ok(NoContent)
}

/// Ban records of one forum
///
/// GET /forums/{forum_id}/bans
pub async fn get_forum_bans(
    State(state): State<AppState>,
    path: ForumPath,
) -> ApiResult<Json<Vec<BannedUserResponse>>> {
    let service = ForumService::new(state.service_context());
    let bans = service.list_banned_users(&path.forum_id).await?;
    Ok(Json(bans.into_iter().map(Into::into).collect()))
}

/// Suspension records of one forum
///
/// GET /forums/{forum_id}/suspensions
pub async fn get_forum_suspensions(
    State(state): State<AppState>,
    path: ForumPath,
) -> ApiResult<Json<Vec<SuspendedUserResponse>>> {
    let service = ForumService::new(state.service_context());
    let suspensions = service.list_suspended_users(&path.forum_id).await?;
    Ok(Json(suspensions.into_iter().map(Into::into).collect()))
}

/// Ban records across every forum
///
/// GET /bans
pub async fn get_all_bans(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<BannedUserResponse>>> {
    let service = ForumService::new(state.service_context());
    let bans = service.list_all_banned_users().await?;
    Ok(Json(bans.into_iter().map(Into::into).collect()))
}

/// Suspension records across every forum
///
/// GET /suspensions
pub async fn get_all_suspensions(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<SuspendedUserResponse>>> {
    let service = ForumService::new(state.service_context());
    let suspensions = service.list_all_suspended_users().await?;
    Ok(Json(suspensions.into_iter().map(Into::into).collect()))
}
