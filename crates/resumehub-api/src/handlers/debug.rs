//! Operator endpoints, mounted only when `share.debug_endpoints` is set.

use axum::Json;
use axum::extract::State;

use resumehub_entity::share::ShareDebugEntry;

use crate::dto::response::ApiResponse;
use crate::error::ApiResult;
use crate::extractors::ClientContext;
use crate::state::AppState;

/// GET /api/debug/shares
pub async fn list_shares(
    State(state): State<AppState>,
    ctx: ClientContext,
) -> ApiResult<Json<ApiResponse<Vec<ShareDebugEntry>>>> {
    let entries = state.share_service.debug_list(&ctx).await?;
    Ok(Json(ApiResponse::ok(entries)))
}
