// Copyright (c) 2025 - Cowboy AI, Inc.

//! Device Targets - where a validated configuration ends up
//!
//! A [`DeviceTarget`] knows how to apply a [`NetworkConfig`] to one kind of
//! device. The deployment orchestrator only ever sees the trait, so adding a
//! device kind never touches orchestration.
//!
//! ```text
//! NetworkConfig ──apply──> Router  (DHCP + firewall rules)
//!       │
//!       └──────apply──> Switch  (VLANs)
//! ```
//!
//! # Contract
//!
//! - The caller guarantees the config already passed validation; targets do
//!   not re-validate.
//! - The config is borrowed for the duration of the call and must not be
//!   retained or mutated.
//! - Failure is reported as `Err(DeviceError)`. Implementations with real
//!   network I/O should not apply their own retry policy.
//!
//! # Example Implementation
//!
//! ```rust,no_run
//! use async_trait::async_trait;
//! use cim_provisioning::device::{DeviceError, DeviceIdentity, DeviceKind, DeviceTarget};
//! use cim_provisioning::diagnostics::{Diagnostic, DiagnosticSink};
//! use cim_provisioning::domain::NetworkConfig;
//!
//! struct AccessPoint {
//!     identity: DeviceIdentity,
//! }
//!
//! #[async_trait]
//! impl DeviceTarget for AccessPoint {
//!     fn identity(&self) -> &DeviceIdentity {
//!         &self.identity
//!     }
//!
//!     fn kind(&self) -> DeviceKind {
//!         DeviceKind::Other("access-point".to_string())
//!     }
//!
//!     async fn apply(
//!         &self,
//!         _config: &NetworkConfig,
//!         sink: &dyn DiagnosticSink,
//!     ) -> Result<(), DeviceError> {
//!         sink.record(Diagnostic::info("access-point", "Configuring SSIDs"));
//!         Ok(())
//!     }
//! }
//! ```

pub mod inventory;
pub mod router;
pub mod switch;

pub use inventory::{DeviceSpec, Inventory};
pub use router::Router;
pub use switch::Switch;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

use crate::diagnostics::DiagnosticSink;
use crate::domain::NetworkConfig;

/// Identity shared by every device: hostname and management address
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeviceIdentity {
    pub hostname: String,
    pub ip: String,
}

impl DeviceIdentity {
    /// Create a new device identity
    pub fn new(hostname: impl Into<String>, ip: impl Into<String>) -> Self {
        Self {
            hostname: hostname.into(),
            ip: ip.into(),
        }
    }
}

impl fmt::Display for DeviceIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.hostname, self.ip)
    }
}

/// Device taxonomy
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceKind {
    Router,
    Switch,
    /// Any kind provided outside this crate
    Other(String),
}

impl fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeviceKind::Router => write!(f, "router"),
            DeviceKind::Switch => write!(f, "switch"),
            DeviceKind::Other(kind) => write!(f, "{}", kind),
        }
    }
}

/// Errors that can occur while applying a configuration to one device
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum DeviceError {
    /// Device answered but refused the configuration
    #[error("Device rejected configuration: {0}")]
    Rejected(String),

    /// Device could not be reached
    #[error("Device unreachable: {0}")]
    Unreachable(String),

    /// Apply did not finish within the per-device bound
    #[error("Deployment timed out after {0:?}")]
    Timeout(Duration),

    /// Apply panicked; the panic was contained to this device
    #[error("Device driver panicked: {0}")]
    Panicked(String),
}

/// Capability to apply a validated configuration to one kind of device
#[async_trait]
pub trait DeviceTarget: Send + Sync {
    /// Hostname and management address
    fn identity(&self) -> &DeviceIdentity;

    /// What kind of device this is
    fn kind(&self) -> DeviceKind;

    /// Apply `config` to the device
    ///
    /// Emits one diagnostic per sub-step applied.
    async fn apply(&self, config: &NetworkConfig, sink: &dyn DiagnosticSink)
        -> Result<(), DeviceError>;

    /// Hostname shorthand
    fn hostname(&self) -> &str {
        &self.identity().hostname
    }
}
