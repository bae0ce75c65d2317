// Copyright (c) 2025 - Cowboy AI, Inc.
//! DHCP Configuration

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::invariants::{validate_cidr, validate_ip, validate_reservations, ValidationResult};
use crate::diagnostics::{Diagnostic, DiagnosticSink};

/// DHCP settings: served subnet, gateway, and fixed MAC → IP reservations
///
/// Deserialization is strict. A missing or unknown field fails the parse,
/// so a typo in the input never silently drops a setting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DhcpConfig {
    /// MAC address → reserved IP address
    pub reservations: BTreeMap<String, String>,
    /// Served subnet in CIDR notation
    pub subnet: String,
    /// Default gateway address
    pub gateway: String,
}

impl DhcpConfig {
    /// Create a DHCP configuration with no reservations
    pub fn new(subnet: impl Into<String>, gateway: impl Into<String>) -> Self {
        Self {
            reservations: BTreeMap::new(),
            subnet: subnet.into(),
            gateway: gateway.into(),
        }
    }

    /// Add a reservation, builder style
    pub fn with_reservation(mut self, mac: impl Into<String>, ip: impl Into<String>) -> Self {
        self.reservations.insert(mac.into(), ip.into());
        self
    }

    /// Check every rule, stopping at the first violation
    ///
    /// # Rules (in order)
    /// - Subnet is valid CIDR
    /// - Gateway is a valid IP
    /// - Each reservation: MAC well-formed, then IP valid
    pub fn check(&self) -> ValidationResult {
        validate_cidr("dhcp subnet", &self.subnet)?;
        validate_ip("dhcp gateway", &self.gateway)?;
        validate_reservations(&self.reservations)
    }

    /// Validate, recording what failed to `sink`
    pub fn validate(&self, sink: &dyn DiagnosticSink) -> bool {
        match self.check() {
            Ok(()) => true,
            Err(e) => {
                sink.record(Diagnostic::error("dhcp", e.to_string()));
                false
            }
        }
    }
}
