//! CLI command definitions and dispatch.

pub mod config;
pub mod migrate;
pub mod shares;

use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};

use resumehub_core::config::AppConfig;
use resumehub_core::traits::SystemClock;
use resumehub_database::Stores;
use resumehub_service::ShareService;

use crate::output::OutputFormat;

/// ResumeHub administration
#[derive(Debug, Parser)]
#[command(name = "resumehub-cli", version, about, long_about = None)]
pub struct Cli {
    /// Directory holding default.toml and the per-environment files
    #[arg(long, default_value = "config")]
    pub config_dir: String,

    /// Environment overlay to load
    #[arg(short, long, env = "RESUMEHUB_ENV", default_value = "development")]
    pub env: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Database migration management
    Migrate(migrate::MigrateArgs),
    /// Share link inspection and maintenance
    Shares(shares::SharesArgs),
    /// Configuration inspection
    Config(config::ConfigArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> anyhow::Result<()> {
        match &self.command {
            Commands::Migrate(args) => migrate::execute(args, &self.load_config()?).await,
            Commands::Shares(args) => {
                shares::execute(args, &self.load_config()?, self.format).await
            }
            Commands::Config(args) => config::execute(args, self).await,
        }
    }

    /// Load configuration for the selected environment.
    pub fn load_config(&self) -> anyhow::Result<AppConfig> {
        AppConfig::load_from(&self.config_dir, &self.env).with_context(|| {
            format!(
                "Failed to load configuration from '{}' (env: {})",
                self.config_dir, self.env
            )
        })
    }
}

/// Helper: share service over the configured store, on the wall clock
pub fn share_service(config: &AppConfig) -> anyhow::Result<ShareService> {
    let stores = Stores::from_config(config).context("Failed to open store")?;
    Ok(ShareService::new(
        stores.shares,
        Arc::new(SystemClock),
        config.share.clone(),
    ))
}
