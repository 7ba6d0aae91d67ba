//! Configuration module
//!
//! Handles CLI configuration for reaching the events service.

use std::time::Duration;

use anyhow::{Context, Result};
use evently_client::ServiceConfig;

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Where the events service lives
    pub service: ServiceConfig,
}

impl Config {
    /// Builds and validates the configuration from command-line values
    pub fn new(host: String, port: u16, timeout_secs: u64) -> Result<Self> {
        let service = ServiceConfig::new(port)
            .with_host(host)
            .with_timeout(Duration::from_secs(timeout_secs));

        service
            .validate()
            .context("Invalid events service settings")?;

        Ok(Self { service })
    }
}
