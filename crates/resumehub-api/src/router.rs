//! Route definitions for the ResumeHub HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{get, patch, post, put},
};
use tower_http::compression::CompressionLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let config = Arc::clone(&state.config);
    let server = &config.server;

    let mut api_routes = Router::new()
        .merge(health_routes())
        .merge(resume_routes())
        .merge(share_routes());

    if config.share.debug_endpoints {
        tracing::warn!("Debug endpoints enabled: GET /api/debug/shares is publicly reachable");
        api_routes = api_routes.merge(debug_routes());
    }

    Router::new()
        .nest("/api", api_routes)
        .fallback(handlers::not_found)
        .layer(DefaultBodyLimit::max(server.max_body_bytes))
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(
            server.request_timeout_seconds,
        )))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::cors::build_cors_layer(&server.cors))
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Liveness and readiness
fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/health/detailed", get(handlers::health::health_detailed))
}

/// Resume CRUD and section updates
fn resume_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/users/{user_id}/resumes",
            get(handlers::resume::list_by_user),
        )
        .route(
            "/resumes",
            get(handlers::resume::list_all).post(handlers::resume::create_resume),
        )
        .route(
            "/resumes/{id}",
            get(handlers::resume::get_resume)
                .patch(handlers::resume::update_resume)
                .delete(handlers::resume::delete_resume),
        )
        .route(
            "/resumes/{id}/personal-info",
            put(handlers::resume::update_personal_info),
        )
        .route(
            "/resumes/{id}/contact",
            patch(handlers::resume::update_contact),
        )
        .route("/resumes/{id}/about", put(handlers::resume::update_about))
        .route(
            "/resumes/{id}/experiences",
            put(handlers::resume::update_experiences),
        )
        .route(
            "/resumes/{id}/educations",
            put(handlers::resume::update_educations),
        )
        .route("/resumes/{id}/skills", put(handlers::resume::update_skills))
        .route(
            "/resumes/{id}/projects",
            put(handlers::resume::update_projects),
        )
        .route(
            "/resumes/{id}/technologies",
            put(handlers::resume::update_technologies),
        )
        .route(
            "/resumes/{id}/contributions",
            put(handlers::resume::update_contributions),
        )
}

/// Share link CRUD and statistics
fn share_routes() -> Router<AppState> {
    Router::new()
        .route("/shares", post(handlers::share::create_share))
        .route(
            "/shares/{share_id}",
            get(handlers::share::get_share)
                .patch(handlers::share::update_share)
                .delete(handlers::share::delete_share),
        )
        .route(
            "/shares/{share_id}/stats",
            get(handlers::share::get_share_stats),
        )
}

/// Operator listing of recent links
fn debug_routes() -> Router<AppState> {
    Router::new().route("/debug/shares", get(handlers::debug::list_shares))
}
