//! `gchat` -- post messages to a Google Chat incoming webhook.
//!
//! Provides the following subcommands:
//!
//! - `gchat text` -- Send a (optionally formatted) text message.
//! - `gchat card` -- Send a card message read from a JSON file.
//! - `gchat demo` -- Send a sample status text and a sample card.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

/// Google Chat webhook CLI.
#[derive(Parser)]
#[command(name = "gchat", about = "Send messages to a Google Chat incoming webhook", version)]
struct Cli {
    /// Enable verbose (debug-level) logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Webhook URL (overrides $WEBHOOK_URL and the config file).
    #[arg(long, global = true)]
    url: Option<String>,

    /// Config file path (overrides $GCHAT_WEBHOOK_CONFIG).
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Send a text message.
    Text(commands::text::TextArgs),

    /// Send a card message from a JSON file.
    Card(commands::card::CardArgs),

    /// Send a sample status text and card.
    Demo,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let client = commands::build_client(cli.url.as_deref(), cli.config.as_deref()).await?;

    match cli.command {
        Commands::Text(args) => commands::text::run(&client, args).await?,
        Commands::Card(args) => commands::card::run(&client, args).await?,
        Commands::Demo => commands::demo::run(&client).await?,
    }

    Ok(())
}
