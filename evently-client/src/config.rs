//! Service configuration
//!
//! Describes where the events service lives and how long to wait for it.

use std::time::Duration;

use crate::error::{ClientError, Result};

/// Default host of the events service
pub const DEFAULT_HOST: &str = "localhost";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection settings for the events service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Host name or address of the service
    pub host: String,

    /// HTTP port the service listens on
    pub port: u16,

    /// Per-request timeout
    pub timeout: Duration,
}

impl ServiceConfig {
    /// Creates a configuration for the given port with default host and timeout
    pub fn new(port: u16) -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Creates configuration from environment variables
    ///
    /// Expected environment variables:
    /// - EVENTS_HTTP_PORT (required)
    /// - EVENTS_HOST (optional, default: localhost)
    /// - EVENTS_TIMEOUT_SECS (optional, default: 30)
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let port = var("EVENTS_HTTP_PORT").ok_or_else(|| {
            ClientError::InvalidConfig("EVENTS_HTTP_PORT environment variable not set".to_string())
        })?;
        let port = port.parse::<u16>().map_err(|e| {
            ClientError::InvalidConfig(format!("EVENTS_HTTP_PORT is not a valid port: {}", e))
        })?;

        let host = var("EVENTS_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        let timeout = var("EVENTS_TIMEOUT_SECS")
            .and_then(|s| s.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));

        let config = Self {
            host,
            port,
            timeout,
        };
        config.validate()?;

        Ok(config)
    }

    /// Overrides the host
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Overrides the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Base URL of the service, e.g. `http://localhost:9080`
    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }

    /// Validates the configuration
    pub fn validate(&self) -> Result<()> {
        if self.host.trim().is_empty() {
            return Err(ClientError::InvalidConfig(
                "host cannot be empty".to_string(),
            ));
        }

        if self.port == 0 {
            return Err(ClientError::InvalidConfig(
                "port must be greater than 0".to_string(),
            ));
        }

        if self.timeout.is_zero() {
            return Err(ClientError::InvalidConfig(
                "timeout must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
