//! Evently CLI
//!
//! Command-line front end for the events service.

mod commands;
mod config;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use config::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "evently")]
#[command(about = "Manage events on an events service", long_about = None)]
struct Cli {
    /// Host of the events service
    #[arg(long, env = "EVENTS_HOST", default_value = "localhost")]
    host: String,

    /// HTTP port of the events service
    #[arg(short, long, env = "EVENTS_HTTP_PORT", default_value_t = 9080)]
    port: u16,

    /// Request timeout in seconds
    #[arg(long, env = "EVENTS_TIMEOUT_SECS", default_value_t = 30)]
    timeout: u64,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so command output stays pipeable
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "evently_cli=warn,evently_client=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = Config::new(cli.host, cli.port, cli.timeout)?;
    tracing::debug!("Using events service at {}", config.service.base_url());

    handle_command(cli.command, &config).await
}
