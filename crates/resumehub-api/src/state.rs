//! Application state shared across all handlers and middleware.

use std::sync::Arc;
use std::time::Instant;

use resumehub_core::config::AppConfig;
use resumehub_core::traits::Clock;
use resumehub_database::Stores;
use resumehub_service::{ResumeService, ShareService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Configured store backend
    pub stores: Stores,
    /// Resume service
    pub resume_service: Arc<ResumeService>,
    /// Share link service
    pub share_service: Arc<ShareService>,
    /// Process start, for uptime reporting
    pub started_at: Instant,
}

impl AppState {
    /// Wire the services over `stores`.
    pub fn new(config: AppConfig, stores: Stores, clock: Arc<dyn Clock>) -> Self {
        let resume_service = Arc::new(ResumeService::new(
            Arc::clone(&stores.resumes),
            Arc::clone(&clock),
        ));
        let share_service = Arc::new(ShareService::new(
            Arc::clone(&stores.shares),
            clock,
            config.share.clone(),
        ));

        Self {
            config: Arc::new(config),
            stores,
            resume_service,
            share_service,
            started_at: Instant::now(),
        }
    }
}
