//! Application builder: wires configuration, stores and clock into an
//! Axum app.

use std::sync::Arc;

use axum::Router;

use resumehub_core::config::AppConfig;
use resumehub_core::traits::Clock;
use resumehub_database::Stores;

use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(config: AppConfig, stores: Stores, clock: Arc<dyn Clock>) -> Router {
    build_router(AppState::new(config, stores, clock))
}
