// Copyright (c) 2025 - Cowboy AI, Inc.
//! Static fleet inventory
//!
//! The fleet a configuration is deployed to, described as data:
//!
//! ```json
//! [
//!   { "kind": "router", "hostname": "router1", "ip": "192.168.1.1" },
//!   { "kind": "switch", "hostname": "switch1", "ip": "192.168.1.2" }
//! ]
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use super::{DeviceKind, DeviceTarget, Router, Switch};
use crate::errors::{ProvisioningError, ProvisioningResult};

/// One inventory entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeviceSpec {
    pub kind: DeviceKind,
    pub hostname: String,
    pub ip: String,
}

impl DeviceSpec {
    /// Create a new inventory entry
    pub fn new(kind: DeviceKind, hostname: impl Into<String>, ip: impl Into<String>) -> Self {
        Self {
            kind,
            hostname: hostname.into(),
            ip: ip.into(),
        }
    }

    /// Build the device target for this entry
    pub fn build(&self) -> ProvisioningResult<Box<dyn DeviceTarget>> {
        match &self.kind {
            DeviceKind::Router => Ok(Box::new(Router::new(&self.hostname, &self.ip))),
            DeviceKind::Switch => Ok(Box::new(Switch::new(&self.hostname, &self.ip))),
            DeviceKind::Other(kind) => Err(ProvisioningError::Configuration(format!(
                "No driver for device kind '{}' ({})",
                kind, self.hostname
            ))),
        }
    }
}

/// Ordered list of fleet devices
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inventory {
    devices: Vec<DeviceSpec>,
}

impl Inventory {
    /// Create a new inventory from entries in deployment order
    pub fn new(devices: Vec<DeviceSpec>) -> Self {
        Self { devices }
    }

    /// Parse an inventory from JSON text
    pub fn from_json_str(json: &str) -> ProvisioningResult<Self> {
        serde_json::from_str(json).map_err(|e| {
            ProvisioningError::Configuration(format!("Invalid inventory: {}", e))
        })
    }

    /// Load an inventory file
    pub fn load(path: impl AsRef<Path>) -> ProvisioningResult<Self> {
        let path = path.as_ref();
        debug!("Loading fleet inventory from {}", path.display());
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn devices(&self) -> &[DeviceSpec] {
        &self.devices
    }

    pub fn len(&self) -> usize {
        self.devices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    /// Build every target, in inventory order
    ///
    /// Fails on the first entry without a driver, before anything is built.
    pub fn build_targets(&self) -> ProvisioningResult<Vec<Box<dyn DeviceTarget>>> {
        self.devices.iter().map(DeviceSpec::build).collect()
    }
}

impl Default for Inventory {
    /// One router and one switch on the management LAN
    fn default() -> Self {
        Self::new(vec![
            DeviceSpec::new(DeviceKind::Router, "router1", "192.168.1.1"),
            DeviceSpec::new(DeviceKind::Switch, "switch1", "192.168.1.2"),
        ])
    }
}
