// Copyright (c) 2025 - Cowboy AI, Inc.
//! VLAN Configuration

use serde::{Deserialize, Serialize};

use super::invariants::{validate_cidr, validate_vlan_id, ValidationResult};
use crate::diagnostics::{Diagnostic, DiagnosticSink};

/// A single VLAN definition
///
/// `id` is held as a wide integer on purpose: an out-of-range id in the input
/// is a validation failure, not a parse failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VlanConfig {
    /// IEEE 802.1Q id, valid range 1-4094
    pub id: i64,
    /// Human-readable name
    pub name: String,
    /// VLAN subnet in CIDR notation
    pub subnet: String,
}

impl VlanConfig {
    /// Create a new VLAN definition; nothing is checked until `check()`
    pub fn new(id: i64, name: impl Into<String>, subnet: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            subnet: subnet.into(),
        }
    }

    /// Check id range, then subnet
    pub fn check(&self) -> ValidationResult {
        validate_vlan_id(self.id)?;
        validate_cidr(&format!("vlan {} subnet", self.id), &self.subnet)
    }

    /// Validate, recording what failed to `sink`
    pub fn validate(&self, sink: &dyn DiagnosticSink) -> bool {
        match self.check() {
            Ok(()) => true,
            Err(e) => {
                sink.record(Diagnostic::error("vlan", e.to_string()));
                false
            }
        }
    }
}
