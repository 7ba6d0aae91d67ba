//! Event command handlers
//!
//! Handles all event-related CLI commands including creation, update,
//! deletion, listing and lookup.

use anyhow::{Context, Result, bail};
use clap::Subcommand;
use colored::*;
use evently_client::{Event, EventId, EventService, EventsClient};
use evently_core::dto::event::{CreateEvent, UpdateEvent};

use crate::config::Config;

/// Event subcommands
#[derive(Subcommand)]
pub enum EventCommands {
    /// Create a new event
    Create {
        /// Event name
        #[arg(short, long)]
        name: String,

        /// Where the event takes place
        #[arg(short, long)]
        location: String,

        /// When the event takes place
        #[arg(short, long)]
        time: String,
    },
    /// Replace the details of an existing event
    Update {
        /// Event ID
        id: EventId,

        /// New event name
        #[arg(short, long)]
        name: String,

        /// New location
        #[arg(short, long)]
        location: String,

        /// New time
        #[arg(short, long)]
        time: String,
    },
    /// Delete an event
    Delete {
        /// Event ID
        id: EventId,
    },
    /// List all events
    List,
    /// Show a single event
    Get {
        /// Event ID
        #[arg(allow_negative_numbers = true)]
        id: i64,
    },
}

/// Handle event commands
///
/// Routes event subcommands to their respective handlers.
pub async fn handle_event_command(command: EventCommands, config: &Config) -> Result<()> {
    let client = EventsClient::from_config(&config.service)
        .context("Failed to create events client")?;

    run(command, &client).await
}

async fn run(command: EventCommands, service: &dyn EventService) -> Result<()> {
    match command {
        EventCommands::Create {
            name,
            location,
            time,
        } => create_event(service, CreateEvent::new(name, location, time)).await,
        EventCommands::Update {
            id,
            name,
            location,
            time,
        } => update_event(service, UpdateEvent::new(name, location, time, id)).await,
        EventCommands::Delete { id } => delete_event(service, id).await,
        EventCommands::List => list_events(service).await,
        EventCommands::Get { id } => get_event(service, id).await,
    }
}

/// Submit a new event
async fn create_event(service: &dyn EventService, req: CreateEvent) -> Result<()> {
    let name = req.name.clone();
    service
        .submit_event(req)
        .await
        .context("Failed to submit event")?;

    println!(
        "{}",
        format!("✓ Event '{}' submitted successfully!", name)
            .green()
            .bold()
    );

    Ok(())
}

/// Submit replacement details for an event
async fn update_event(service: &dyn EventService, req: UpdateEvent) -> Result<()> {
    let id = req.id;
    service
        .update_event(req)
        .await
        .with_context(|| format!("Failed to update event {}", id))?;

    println!(
        "{}",
        format!("✓ Event {} updated successfully!", id).green().bold()
    );

    Ok(())
}

/// Delete an event
async fn delete_event(service: &dyn EventService, id: EventId) -> Result<()> {
    service
        .delete_event(id)
        .await
        .with_context(|| format!("Failed to delete event {}", id))?;

    println!(
        "{}",
        format!("✓ Event {} deleted successfully!", id).green().bold()
    );

    Ok(())
}

/// List all events
async fn list_events(service: &dyn EventService) -> Result<()> {
    let events = service
        .list_events()
        .await
        .context("Failed to retrieve events")?;

    if events.is_empty() {
        println!("{}", "No events found.".yellow());
    } else {
        println!("{}", format!("Found {} event(s):", events.len()).bold());
        println!();
        for event in &events {
            print_event_summary(event);
        }
    }

    Ok(())
}

/// Look up and display a single event
async fn get_event(service: &dyn EventService, id: i64) -> Result<()> {
    let event = service
        .find_event(id)
        .await
        .with_context(|| format!("Failed to look up event {}", id))?;

    match event {
        Some(event) => {
            print_event_details(&event);
            Ok(())
        }
        None => bail!("Event {} not found", id),
    }
}

/// Print an event summary
fn print_event_summary(event: &Event) {
    println!("  {} {}", "▸".cyan(), event.name.bold());
    println!("    ID:       {}", event.id.to_string().dimmed());
    println!("    Location: {}", event.location.dimmed());
    println!("    Time:     {}", event.time.dimmed());
    println!();
}

/// Print detailed event information
fn print_event_details(event: &Event) {
    println!("{}", "Event Details:".bold());
    println!("  ID:       {}", event.id.to_string().cyan());
    println!("  Name:     {}", event.name.bold());
    println!("  Location: {}", event.location);
    println!("  Time:     {}", event.time);
}
