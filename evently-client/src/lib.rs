//! Evently HTTP Client
//!
//! A small, type-safe HTTP client for the events REST service.
//!
//! The client forwards create, update, delete and list calls to the service
//! and maps its JSON responses into [`Event`] values. Nothing is cached: every
//! read goes back to the service.
//!
//! # Example
//!
//! ```no_run
//! use evently_client::{EventService, EventsClient};
//! use evently_core::dto::event::CreateEvent;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = EventsClient::new("http://localhost:9080");
//!
//!     client
//!         .submit_event(CreateEvent::new("Standup", "Room 2", "09:00"))
//!         .await?;
//!
//!     for event in client.list_events().await? {
//!         println!("{}", event);
//!     }
//!
//!     if let Some(event) = client.find_event(1).await? {
//!         println!("Found: {}", event.name);
//!     }
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
mod events;
mod service;

// Re-export commonly used types
pub use config::ServiceConfig;
pub use error::{ClientError, Result};
pub use evently_core::domain::event::{Event, EventId};
pub use service::EventService;

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::warn;

/// HTTP client for the events service
#[derive(Debug, Clone)]
pub struct EventsClient {
    /// Base URL of the service (e.g., "http://localhost:9080")
    base_url: String,
    /// HTTP client instance
    client: Client,
}

impl EventsClient {
    /// Create a new events client
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the events service (e.g., "http://localhost:9080")
    ///
    /// # Example
    /// ```
    /// use evently_client::EventsClient;
    ///
    /// let client = EventsClient::new("http://localhost:9080");
    /// ```
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, Client::new())
    }

    /// Create a new events client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Create a client from validated service configuration
    ///
    /// The configured timeout applies to every request.
    pub fn from_config(config: &ServiceConfig) -> Result<Self> {
        config.validate()?;

        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self::with_client(config.base_url(), client))
    }

    /// Get the base URL of the events service
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Handle an API response and deserialize JSON
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            return Err(Self::status_error(response).await);
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }

    /// Release a response to a write without reading it
    ///
    /// A non-success status is logged, never returned; only the transport
    /// failing fails the write.
    fn discard_response(&self, response: reqwest::Response) {
        let status = response.status();
        if !status.is_success() {
            warn!("{} returned {}; response discarded", response.url(), status);
        }
    }

    async fn status_error(response: reqwest::Response) -> ClientError {
        let status = response.status();
        let url = response.url().to_string();
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());

        warn!("{} returned {}: {}", url, status, error_text);
        ClientError::api_error(status.as_u16(), error_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_client_creation() {
        let client = EventsClient::new("http://localhost:9080");
        assert_eq!(client.base_url(), "http://localhost:9080");
    }

    #[test]
    fn test_client_trims_trailing_slash() {
        let client = EventsClient::new("http://localhost:9080/");
        assert_eq!(client.base_url(), "http://localhost:9080");
    }

    #[test]
    fn test_client_from_config() {
        let config = ServiceConfig::new(9443).with_host("events.local");
        let client = EventsClient::from_config(&config).unwrap();
        assert_eq!(client.base_url(), "http://events.local:9443");
    }

    #[test]
    fn test_client_from_invalid_config() {
        let config = ServiceConfig::new(9080).with_timeout(Duration::ZERO);
        let err = EventsClient::from_config(&config).unwrap_err();
        assert!(matches!(err, ClientError::InvalidConfig(_)));
    }
}
