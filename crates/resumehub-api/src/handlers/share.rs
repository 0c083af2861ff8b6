//! Share link handlers. All routes are public.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use resumehub_entity::share::{CreatedShare, PublicShare, ShareMetadata, ShareStats};
use resumehub_service::Acknowledgement;

use crate::dto::request::{CreateShareRequest, UpdateShareRequest};
use crate::dto::response::ApiResponse;
use crate::error::ApiResult;
use crate::extractors::{ClientContext, JsonBody};
use crate::state::AppState;

/// POST /api/shares
pub async fn create_share(
    State(state): State<AppState>,
    ctx: ClientContext,
    JsonBody(req): JsonBody<CreateShareRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<CreatedShare>>)> {
    let created = state.share_service.create(&ctx, req).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(created))))
}

/// GET /api/shares/{shareId}, counts as a view.
pub async fn get_share(
    State(state): State<AppState>,
    ctx: ClientContext,
    Path(share_id): Path<String>,
) -> ApiResult<Json<ApiResponse<PublicShare>>> {
    let share = state.share_service.get_by_share_id(&ctx, &share_id).await?;
    Ok(Json(ApiResponse::ok(share)))
}

/// PATCH /api/shares/{shareId}
pub async fn update_share(
    State(state): State<AppState>,
    Path(share_id): Path<String>,
    JsonBody(req): JsonBody<UpdateShareRequest>,
) -> ApiResult<Json<ApiResponse<ShareMetadata>>> {
    let metadata = state.share_service.update(&share_id, req).await?;
    Ok(Json(ApiResponse::ok(metadata)))
}

/// DELETE /api/shares/{shareId}
pub async fn delete_share(
    State(state): State<AppState>,
    Path(share_id): Path<String>,
) -> ApiResult<Json<Acknowledgement>> {
    let ack = state.share_service.delete(&share_id).await?;
    Ok(Json(ack))
}

/// GET /api/shares/{shareId}/stats
pub async fn get_share_stats(
    State(state): State<AppState>,
    Path(share_id): Path<String>,
) -> ApiResult<Json<ApiResponse<ShareStats>>> {
    let stats = state.share_service.get_stats(&share_id).await?;
    Ok(Json(ApiResponse::ok(stats)))
}
