//! Share link inspection and maintenance commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use resumehub_core::config::AppConfig;
use resumehub_entity::share::ShareDebugEntry;
use resumehub_service::RequestContext;

use crate::output::{self, OutputFormat};

/// Arguments for share commands
#[derive(Debug, Args)]
pub struct SharesArgs {
    /// Share subcommand
    #[command(subcommand)]
    pub command: SharesCommand,
}

/// Share subcommands
#[derive(Debug, Subcommand)]
pub enum SharesCommand {
    /// List the most recently created links
    List,
    /// Show statistics for one link without counting a view
    Stats {
        /// Share ID
        share_id: String,
    },
    /// Delete links whose expiry has passed
    PurgeExpired {
        /// Skip confirmation
        #[arg(long)]
        force: bool,
    },
}

/// Share display row
#[derive(Debug, Serialize, Tabled)]
struct ShareRow {
    /// Share ID
    share_id: String,
    /// Title
    title: String,
    /// Public
    public: String,
    /// Views
    views: i64,
    /// Created
    created: String,
    /// Expires
    expires: String,
}

impl From<&ShareDebugEntry> for ShareRow {
    fn from(entry: &ShareDebugEntry) -> Self {
        let expires = match entry.expires_at {
            None => "never".to_string(),
            Some(at) if entry.is_expired => format!("{} (expired)", at.format("%Y-%m-%d %H:%M")),
            Some(at) => at.format("%Y-%m-%d %H:%M").to_string(),
        };

        Self {
            share_id: entry.share_id.clone(),
            title: entry.title.clone(),
            public: if entry.is_public { "✓" } else { "✗" }.to_string(),
            views: entry.view_count,
            created: entry.created_at.format("%Y-%m-%d %H:%M").to_string(),
            expires,
        }
    }
}

/// Execute share commands
pub async fn execute(
    args: &SharesArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let service = super::share_service(config)?;

    match &args.command {
        SharesCommand::List => {
            let entries = service
                .debug_list(&RequestContext::internal("resumehub-cli"))
                .await?;
            match format {
                OutputFormat::Json => output::print_json(&entries)?,
                OutputFormat::Table => {
                    let rows: Vec<ShareRow> = entries.iter().map(ShareRow::from).collect();
                    output::print_list(&rows, format)?;
                }
            }
        }
        SharesCommand::Stats { share_id } => {
            let stats = service.get_stats(share_id).await?;
            match format {
                OutputFormat::Json => output::print_json(&stats)?,
                OutputFormat::Table => {
                    output::print_kv("Share ID", &stats.share_id);
                    output::print_kv("Title", &stats.title);
                    output::print_kv("Views", &stats.view_count.to_string());
                    output::print_kv("Public", &stats.is_public.to_string());
                    output::print_kv("Created", &stats.created_at.to_rfc3339());
                    output::print_kv("Updated", &stats.updated_at.to_rfc3339());
                    output::print_kv(
                        "Expires",
                        &stats
                            .expires_at
                            .map(|at| at.to_rfc3339())
                            .unwrap_or_else(|| "never".to_string()),
                    );
                    output::print_kv("Expired", &stats.is_expired.to_string());
                }
            }
        }
        SharesCommand::PurgeExpired { force } => {
            if !force {
                let confirm = dialoguer::Confirm::new()
                    .with_prompt("Permanently delete all expired share links?")
                    .default(false)
                    .interact()?;

                if !confirm {
                    println!("Cancelled.");
                    return Ok(());
                }
            }

            let removed = service.purge_expired().await?;
            output::print_success(&format!("Purged {removed} expired share links"));
        }
    }

    Ok(())
}
