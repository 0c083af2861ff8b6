//! Health check handlers.

use axum::Json;
use axum::extract::State;


use crate::dto::response::{ApiResponse, DetailedHealthResponse, HealthResponse, StoreHealth};
use crate::state::AppState;

/// GET /api/health
pub async fn health(State(state): State<AppState>) -> Json<ApiResponse<HealthResponse>> {
    Json(ApiResponse::ok(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.started_at.elapsed().as_secs(),
    }))
}

/// GET /api/health/detailed
///
/// Counts resumes in the store, which connects it if it is not connected yet.
pub async fn health_detailed(
    State(state): State<AppState>,
) -> Json<ApiResponse<DetailedHealthResponse>> {
    let counted = state.stores.resumes.count().await;
    if let Err(e) = &counted {
        tracing::warn!(error = %e, "Store health check failed");
    }

    let reachable = counted.is_ok();
    Json(ApiResponse::ok(DetailedHealthResponse {
        status: if reachable { "ok" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.started_at.elapsed().as_secs(),
        store: StoreHealth {
            provider: state.stores.provider().to_string(),
            connection: state.stores.connection_state(),
            reachable,
            resume_count: counted.ok(),
        },
    }))
}
