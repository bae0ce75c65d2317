// Copyright (c) 2025 - Cowboy AI, Inc.
//! Zero-Touch Provisioning Service
//!
//! Loads a network configuration, validates it, and deploys it to the fleet.
//!
//! ```text
//! config source (file or URL) → NetworkConfig::from_data → DeploymentOrchestrator → devices
//! ```
//!
//! Run with: cargo run --bin ztp-provision --features fetch
//!
//! Environment:
//! - `ZTP_CONFIG_SOURCE`: path or http(s) URL of the configuration (default: config.json)
//! - `ZTP_FETCH_TIMEOUT_SECS`: HTTP timeout for URL sources (default: 10)
//! - `ZTP_DEVICE_TIMEOUT_SECS`: per-device push bound (default: 30)
//! - `ZTP_CONCURRENT`: `true`/`1` to push to all devices at once
//! - `ZTP_INVENTORY`: JSON fleet inventory (default: router1 + switch1)

use anyhow::{Context, Result};
use cim_provisioning::{
    deployment::{DeployStrategy, DeploymentOrchestrator, DeploymentSettings},
    device::Inventory,
    diagnostics::TracingSink,
    domain::NetworkConfig,
    fetch::{ConfigFetcher, FetchConfig},
};
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};

/// Configuration for the provisioning run
#[derive(Debug, Clone)]
struct ProvisionerConfig {
    /// Path or URL of the network configuration
    source: String,
    /// HTTP timeout for URL sources
    fetch_timeout_secs: u64,
    /// Orchestrator settings
    deployment: DeploymentSettings,
    /// Optional fleet inventory file
    inventory_path: Option<String>,
}

impl ProvisionerConfig {
    /// Load configuration from environment variables
    fn from_env() -> Result<Self> {
        let source =
            std::env::var("ZTP_CONFIG_SOURCE").unwrap_or_else(|_| "config.json".to_string());

        let fetch_timeout_secs = parse_env("ZTP_FETCH_TIMEOUT_SECS", 10)?;
        let device_timeout_secs = parse_env("ZTP_DEVICE_TIMEOUT_SECS", 30)?;

        let strategy = match std::env::var("ZTP_CONCURRENT").as_deref() {
            Ok("1") | Ok("true") => DeployStrategy::Concurrent,
            _ => DeployStrategy::Sequential,
        };

        Ok(Self {
            source,
            fetch_timeout_secs,
            deployment: DeploymentSettings {
                strategy,
                device_timeout: Some(Duration::from_secs(device_timeout_secs)),
            },
            inventory_path: std::env::var("ZTP_INVENTORY").ok(),
        })
    }

    fn is_remote(&self) -> bool {
        self.source.starts_with("http://") || self.source.starts_with("https://")
    }
}

fn parse_env(name: &str, default: u64) -> Result<u64> {
    match std::env::var(name) {
        Ok(value) => value
            .parse()
            .with_context(|| format!("{} must be a whole number of seconds", name)),
        Err(_) => Ok(default),
    }
}

async fn load_raw(config: &ProvisionerConfig) -> Result<serde_json::Value> {
    if config.is_remote() {
        let fetcher = ConfigFetcher::new(FetchConfig {
            url: config.source.clone(),
            timeout_secs: config.fetch_timeout_secs,
        })?;
        Ok(fetcher.fetch().await?)
    } else {
        let json = tokio::fs::read_to_string(&config.source)
            .await
            .with_context(|| format!("Failed to read configuration file {}", config.source))?;
        serde_json::from_str(&json)
            .with_context(|| format!("Configuration file {} is not valid JSON", config.source))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config = ProvisionerConfig::from_env()?;
    info!("Configuration source: {}", config.source);
    info!("Deployment strategy: {:?}", config.deployment.strategy);

    let inventory = match &config.inventory_path {
        Some(path) => Inventory::load(path).context("Failed to load fleet inventory")?,
        None => Inventory::default(),
    };
    let targets = inventory.build_targets()?;
    info!("Fleet: {} devices", targets.len());

    let sink = Arc::new(TracingSink);

    let raw = load_raw(&config).await?;
    let network_config = match NetworkConfig::from_data(raw, sink.as_ref()) {
        Ok(network_config) => network_config,
        Err(e) => {
            error!("Configuration deployment failed: {}", e);
            return Err(e.into());
        }
    };

    let orchestrator = DeploymentOrchestrator::with_settings(config.deployment.clone(), sink);
    let report = orchestrator.deploy(&network_config, &targets).await;

    info!(
        "Deployment {}: {} succeeded, {} failed",
        report.deployment_id,
        report.succeeded(),
        report.failed()
    );
    println!("{}", serde_json::to_string_pretty(&report)?);

    if !report.success {
        anyhow::bail!("Deployment failed on {} of {} devices", report.failed(), report.devices.len());
    }

    Ok(())
}
