//! Entry point: load environment, parse CLI and dispatch to command handlers.

use anyhow::Context;
use clap::Parser;
use qb_stats::{
    cli::{Commands, QbStats},
    commands::{
        records::{handle_clear, handle_list, handle_search},
        serve::handle_serve,
        sync::handle_sync,
        CommandContext,
    },
    Config,
};
use tracing_subscriber::EnvFilter;

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let app = QbStats::parse();

    let mut config = Config::from_env().context("failed to read configuration")?;
    if let Some(db) = app.db {
        config.database_path = db;
    }

    match app.command {
        Commands::Serve { host, port } => handle_serve(config, host, port).await?,

        Commands::Sync { season, team, json } => {
            let ctx = CommandContext::new(config)?;
            handle_sync(&ctx, season, team, json).await?;
        }

        Commands::Search { name, json } => {
            let ctx = CommandContext::new(config)?;
            if handle_search(&ctx, &name, json).await?.is_none() {
                std::process::exit(1);
            }
        }

        Commands::List { team, json } => {
            let ctx = CommandContext::new(config)?;
            handle_list(&ctx, team, json)?;
        }

        Commands::Clear => {
            let ctx = CommandContext::new(config)?;
            handle_clear(&ctx)?;
        }
    }

    Ok(())
}
