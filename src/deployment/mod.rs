// Copyright (c) 2025 - Cowboy AI, Inc.
//! Deployment Layer
//!
//! Coordinates pushing a validated [`NetworkConfig`](crate::domain::NetworkConfig)
//! to a fleet and aggregating what happened.
//!
//! # Architecture
//!
//! ```text
//! raw config data
//!     ↓
//! NetworkConfig::from_data (parse + validate)
//!     ↓
//! DeploymentOrchestrator::deploy
//!     ↓
//! DeviceTarget::apply  (per device, failures contained)
//!     ↓
//! DeploymentReport (per-device outcome + fleet-wide success)
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use cim_provisioning::deployment::DeploymentOrchestrator;
//! use cim_provisioning::device::Inventory;
//! use cim_provisioning::diagnostics::TracingSink;
//! use cim_provisioning::domain::NetworkConfig;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let sink = Arc::new(TracingSink);
//!     let raw = serde_json::json!({ "vlans": [{ "id": 10, "name": "users", "subnet": "10.10.0.0/24" }] });
//!     let config = NetworkConfig::from_data(raw, sink.as_ref())?;
//!
//!     let targets = Inventory::default().build_targets()?;
//!     let report = DeploymentOrchestrator::new(sink).deploy(&config, &targets).await;
//!     assert!(report.success);
//!
//!     Ok(())
//! }
//! ```

pub mod orchestrator;
pub mod report;

pub use orchestrator::{
    deploy_configuration, DeployStrategy, DeploymentOrchestrator, DeploymentSettings,
};
pub use report::{DeploymentReport, DeviceOutcome, DeviceReport};
