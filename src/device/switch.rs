// Copyright (c) 2025 - Cowboy AI, Inc.
//! Switch target: VLANs

use async_trait::async_trait;

use super::{DeviceError, DeviceIdentity, DeviceKind, DeviceTarget};
use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::domain::NetworkConfig;

/// Switch device
///
/// Applies every VLAN in configuration order. Pushing is simulated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Switch {
    identity: DeviceIdentity,
}

impl Switch {
    /// Create a new switch target at the given management address
    pub fn new(hostname: impl Into<String>, ip: impl Into<String>) -> Self {
        Self {
            identity: DeviceIdentity::new(hostname, ip),
        }
    }
}

#[async_trait]
impl DeviceTarget for Switch {
    fn identity(&self) -> &DeviceIdentity {
        &self.identity
    }

    fn kind(&self) -> DeviceKind {
        DeviceKind::Switch
    }

    async fn apply(
        &self,
        config: &NetworkConfig,
        sink: &dyn DiagnosticSink,
    ) -> Result<(), DeviceError> {
        let hostname = &self.identity.hostname;

        sink.record(
            Diagnostic::info(
                "switch",
                format!(
                    "Deploying configuration to switch {} at {}",
                    hostname, self.identity.ip
                ),
            )
            .for_device(hostname),
        );

        for vlan in config.vlans() {
            sink.record(
                Diagnostic::info(
                    "switch",
                    format!(
                        "Configuring VLAN {} ({}, {}) on {}",
                        vlan.id, vlan.name, vlan.subnet, hostname
                    ),
                )
                .for_device(hostname),
            );
        }

        Ok(())
    }
}
