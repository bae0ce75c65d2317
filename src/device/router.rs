// Copyright (c) 2025 - Cowboy AI, Inc.
//! Router target: DHCP service and firewall rules

use async_trait::async_trait;

use super::{DeviceError, DeviceIdentity, DeviceKind, DeviceTarget};
use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::domain::NetworkConfig;

/// Router device
///
/// Applies the DHCP block (if present) and the firewall rules (if any).
/// VLANs are left to switches. Pushing is simulated: each step is recorded
/// and the apply always succeeds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Router {
    identity: DeviceIdentity,
}

impl Router {
    /// Create a new router target at the given management address
    pub fn new(hostname: impl Into<String>, ip: impl Into<String>) -> Self {
        Self {
            identity: DeviceIdentity::new(hostname, ip),
        }
    }
}

#[async_trait]
impl DeviceTarget for Router {
    fn identity(&self) -> &DeviceIdentity {
        &self.identity
    }

    fn kind(&self) -> DeviceKind {
        DeviceKind::Router
    }

    async fn apply(
        &self,
        config: &NetworkConfig,
        sink: &dyn DiagnosticSink,
    ) -> Result<(), DeviceError> {
        let hostname = &self.identity.hostname;
        let step = |message: String| Diagnostic::info("router", message).for_device(hostname);

        sink.record(step(format!(
            "Deploying configuration to router {} at {}",
            hostname, self.identity.ip
        )));

        if let Some(dhcp) = config.dhcp() {
            sink.record(step(format!(
                "Configuring DHCP on {}: subnet {} gateway {} ({} reservations)",
                hostname,
                dhcp.subnet,
                dhcp.gateway,
                dhcp.reservations.len()
            )));
        }

        if !config.firewall_rules().is_empty() {
            sink.record(step(format!(
                "Applying {} firewall rules on {}",
                config.firewall_rules().len(),
                hostname
            )));
        }

        Ok(())
    }
}
