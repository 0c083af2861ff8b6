//! Configuration inspection commands.

use clap::{Args, Subcommand};

use resumehub_database::connection::mask_password;

use super::Cli;
use crate::output;

/// Arguments for config commands
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Config subcommand
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration as JSON
    Show,
    /// Validate the configuration and print a summary
    Validate,
}

/// Execute config commands
pub async fn execute(args: &ConfigArgs, cli: &Cli) -> anyhow::Result<()> {
    let mut config = cli.load_config()?;

    match &args.command {
        ConfigCommand::Show => {
            config.database.url = mask_password(&config.database.url);
            output::print_json(&config)?;
        }
        ConfigCommand::Validate => {
            output::print_success(&format!(
                "Configuration '{}' (env: {}) is valid",
                cli.config_dir, cli.env
            ));
            output::print_kv(
                "Server",
                &format!("{}:{}", config.server.host, config.server.port),
            );
            output::print_kv("Store", &config.store.provider);
            if !config.store.is_memory() {
                output::print_kv("Database", &mask_password(&config.database.url));
            }
            output::print_kv("Share base URL", config.share.normalized_base_url());
            if config.share.debug_endpoints {
                output::print_warning("share.debug_endpoints is enabled");
            }
        }
    }

    Ok(())
}
