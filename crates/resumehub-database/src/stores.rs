//! Selection of the configured store backend.

use std::sync::Arc;

use tracing::info;

use resumehub_core::config::AppConfig;
use resumehub_core::result::AppResult;

use crate::connection::{self, PgConnectionManager};
use crate::manager::ConnectionState;
use crate::memory::{MemoryResumeRepository, MemoryShareRepository};
use crate::repositories::{PgResumeRepository, PgShareRepository, ResumeRepository, ShareRepository};

/// The two repositories plus, for PostgreSQL, the shared connection.
#[derive(Debug, Clone)]
pub struct Stores {
    pub resumes: Arc<dyn ResumeRepository>,
    pub shares: Arc<dyn ShareRepository>,
    pub connections: Option<Arc<PgConnectionManager>>,
}

impl Stores {
    /// Build the backend named by `store.provider`.
    ///
    /// No connection is opened here; PostgreSQL connects on first use.
    pub fn from_config(config: &AppConfig) -> AppResult<Self> {
        config.validate()?;

        if config.store.is_memory() {
            info!("Using in-memory store");
            return Ok(Self::in_memory());
        }

        info!(
            url = %connection::mask_password(&config.database.url),
            "Using PostgreSQL store"
        );
        let connections = connection::manager(&config.database);
        Ok(Self {
            resumes: Arc::new(PgResumeRepository::new(Arc::clone(&connections))),
            shares: Arc::new(PgShareRepository::new(Arc::clone(&connections))),
            connections: Some(connections),
        })
    }

    /// Fresh, empty in-process stores.
    pub fn in_memory() -> Self {
        Self {
            resumes: Arc::new(MemoryResumeRepository::new()),
            shares: Arc::new(MemoryShareRepository::new()),
            connections: None,
        }
    }

    /// Connection state of the PostgreSQL backend, if any.
    pub fn connection_state(&self) -> Option<ConnectionState> {
        self.connections.as_ref().map(|c| c.state())
    }

    /// Backend name for health reporting.
    pub fn provider(&self) -> &'static str {
        if self.connections.is_some() {
            "postgres"
        } else {
            "memory"
        }
    }
}
