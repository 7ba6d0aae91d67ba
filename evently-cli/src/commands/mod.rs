//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod event;

pub use event::EventCommands;

use anyhow::Result;
use clap::Subcommand;

use crate::config::Config;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Event management
    Event {
        #[command(subcommand)]
        command: EventCommands,
    },
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler module.
pub async fn handle_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Event { command } => event::handle_event_command(command, config).await,
    }
}
