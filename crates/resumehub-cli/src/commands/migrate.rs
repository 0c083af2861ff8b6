//! Database migration management commands.

use anyhow::{Context, bail};
use clap::{Args, Subcommand};

use resumehub_core::config::AppConfig;
use resumehub_database::{connection, migration};

use crate::output;

/// Arguments for the migrate command
#[derive(Debug, Args)]
pub struct MigrateArgs {
    /// Migration subcommand
    #[command(subcommand)]
    pub command: MigrateCommand,
}

/// Migration subcommands
#[derive(Debug, Subcommand)]
pub enum MigrateCommand {
    /// Run all pending migrations
    Run,
}

/// Execute migration commands
pub async fn execute(args: &MigrateArgs, config: &AppConfig) -> anyhow::Result<()> {
    if config.store.is_memory() {
        bail!("Migrations apply to the postgres store; store.provider is 'memory'");
    }

    match &args.command {
        MigrateCommand::Run => {
            let mut database = config.database.clone();
            database.run_migrations = false;

            output::print_kv("Database", &connection::mask_password(&database.url));
            let pool = connection::connect(&database)
                .await
                .context("Failed to connect to database")?;

            println!("Running database migrations...");
            migration::run_migrations(&pool)
                .await
                .context("Migration failed")?;
            output::print_success("All migrations applied successfully.");
        }
    }

    Ok(())
}
