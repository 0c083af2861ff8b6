//! Application configuration schemas.
//!
//! All configuration structs are deserialized via the `config` crate from
//! `config/default.toml`, an environment overlay and `RESUMEHUB__*`
//! environment variables. Each sub-module represents a logical section.

pub mod app;
pub mod database;
pub mod logging;
pub mod share;

use serde::{Deserialize, Serialize};

pub use self::app::{CorsConfig, ServerConfig};
pub use self::database::{DatabaseConfig, StoreConfig};
pub use self::logging::LoggingConfig;
pub use self::share::{MAX_SHARE_ID_LENGTH, MIN_SHARE_ID_LENGTH, ShareConfig};

use crate::error::AppError;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Store backend selection.
    #[serde(default)]
    pub store: StoreConfig,
    /// Database connection settings.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Share link settings.
    #[serde(default)]
    pub share: ShareConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration for the given environment name.
    ///
    /// Merges `config/default`, `config/{env}` and environment variables
    /// prefixed with `RESUMEHUB__` (for example `RESUMEHUB__SERVER__PORT`).
    pub fn load(env: &str) -> Result<Self, AppError> {
        Self::load_from("config", env)
    }

    /// Load configuration from an explicit directory.
    pub fn load_from(dir: &str, env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(&format!("{dir}/default")).required(false))
            .add_source(config::File::with_name(&format!("{dir}/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("RESUMEHUB")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        let loaded: Self = config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))?;

        loaded.validate()?;
        Ok(loaded)
    }

    /// Reject settings the services cannot run with.
    pub fn validate(&self) -> Result<(), AppError> {
        if !(MIN_SHARE_ID_LENGTH..=MAX_SHARE_ID_LENGTH).contains(&self.share.id_length) {
            return Err(AppError::configuration(format!(
                "share.id_length must be between {MIN_SHARE_ID_LENGTH} and {MAX_SHARE_ID_LENGTH}"
            )));
        }
        if self.share.debug_list_limit <= 0 {
            return Err(AppError::configuration(
                "share.debug_list_limit must be positive",
            ));
        }
        if self.share.max_snapshot_bytes == 0 {
            return Err(AppError::configuration(
                "share.max_snapshot_bytes must be positive",
            ));
        }
        if !self.store.is_memory() && !self.store.provider.eq_ignore_ascii_case("postgres") {
            return Err(AppError::configuration(format!(
                "Unknown store provider '{}'",
                self.store.provider
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.share.id_length, 12);
        assert_eq!(config.share.debug_list_limit, 20);
        assert!(!config.share.debug_endpoints);
    }

    #[test]
    fn test_missing_files_fall_back_to_defaults() {
        let config = AppConfig::load_from("does-not-exist", "test").expect("load");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.store.provider, "postgres");
    }

    #[test]
    fn test_share_id_length_bounds() {
        let mut config = AppConfig::default();
        for (length, ok) in [(7, false), (8, true), (64, true), (65, false), (80, false)] {
            config.share.id_length = length;
            assert_eq!(config.validate().is_ok(), ok, "id_length {length}");
        }
    }

    #[test]
    fn test_non_positive_debug_list_limit_is_rejected() {
        let mut config = AppConfig::default();
        for limit in [0, -1] {
            config.share.debug_list_limit = limit;
            assert!(config.validate().is_err());
        }
    }

    #[test]
    fn test_unknown_provider_is_rejected() {
        let mut config = AppConfig::default();
        config.store.provider = "mongo".to_string();
        assert!(config.validate().is_err());
    }
}
