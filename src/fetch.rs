// Copyright (c) 2025 - Cowboy AI, Inc.

//! Remote Configuration Fetch
//!
//! Retrieves raw configuration data from a configuration API over HTTP.
//! The response body must be a JSON document in the same shape
//! [`NetworkConfig::from_data`](crate::domain::NetworkConfig::from_data)
//! accepts.
//!
//! Every failure (connect, timeout, non-success status, undecodable body) is
//! reported as [`ProvisioningError::Transport`]. There is no retry here;
//! retry policy belongs to the caller.
//!
//! # Example
//!
//! ```rust,no_run
//! use cim_provisioning::fetch::{ConfigFetcher, FetchConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let fetcher = ConfigFetcher::new(FetchConfig {
//!         url: "http://config.example.com/api/network".to_string(),
//!         timeout_secs: 10,
//!     })?;
//!
//!     let raw = fetcher.fetch().await?;
//!     println!("{}", raw);
//!     Ok(())
//! }
//! ```

use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error, info};

use crate::errors::{ProvisioningError, ProvisioningResult};

/// Configuration for the configuration API connection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Full URL of the configuration document
    pub url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_timeout() -> u64 {
    10
}

impl FetchConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout_secs: default_timeout(),
        }
    }
}

/// HTTP client for the configuration API
pub struct ConfigFetcher {
    config: FetchConfig,
    client: Client,
}

impl ConfigFetcher {
    /// Create a fetcher with a bounded request timeout
    pub fn new(config: FetchConfig) -> ProvisioningResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| {
                ProvisioningError::Transport(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self { config, client })
    }

    pub fn url(&self) -> &str {
        &self.config.url
    }

    /// Fetch the raw configuration document
    pub async fn fetch(&self) -> ProvisioningResult<serde_json::Value> {
        info!("Fetching configuration from {}", self.config.url);

        let response = self
            .client
            .get(&self.config.url)
            .send()
            .await
            .map_err(|e| self.failed(format!("request error: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(self.failed(format!("API returned {}: {}", status, body)));
        }

        let raw = response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| self.failed(format!("invalid JSON body: {}", e)))?;

        debug!("Fetched configuration from {}", self.config.url);
        Ok(raw)
    }

    fn failed(&self, message: String) -> ProvisioningError {
        error!("Failed to fetch configuration from {}: {}", self.config.url, message);
        ProvisioningError::Transport(message)
    }
}
