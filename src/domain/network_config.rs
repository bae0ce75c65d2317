// Copyright (c) 2025 - Cowboy AI, Inc.
//! Network Configuration Aggregate
//!
//! [`NetworkConfig`] is the unit of deployment. Every way of obtaining one
//! ([`from_data`](NetworkConfig::from_data), [`new`](NetworkConfig::new),
//! `Deserialize`) validates first, and the fields are read-only afterwards,
//! so a config handed to the orchestrator has always passed validation.
//!
//! # Validation Order
//!
//! ```text
//! dhcp (if present) → each vlan → duplicate vlan ids → each dns server
//! ```
//!
//! The first failure wins. [`NetworkConfig::violations`] is the opt-in
//! alternative that reports every violation in raw input at once.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use super::dhcp::DhcpConfig;
use super::invariants::{
    validate_dns_servers, validate_ip, validate_unique_vlan_ids, ValidationError,
    ValidationResult,
};
use super::vlan::VlanConfig;
use crate::diagnostics::{Diagnostic, DiagnosticSink, LogLevel};
use crate::errors::{ProvisioningError, ProvisioningResult};

/// Opaque firewall rule, passed through to devices uninterpreted
pub type FirewallRule = Map<String, Value>;

/// Input shape, parsed but not yet validated
///
/// Unknown top-level keys are ignored; the nested DHCP and VLAN records are
/// strict.
#[derive(Debug, Deserialize)]
struct NetworkConfigData {
    #[serde(default, deserialize_with = "present_dhcp")]
    dhcp: Option<DhcpConfig>,

    #[serde(default)]
    vlans: Vec<VlanConfig>,

    #[serde(default)]
    dns_servers: Vec<String>,

    #[serde(default)]
    firewall_rules: Vec<FirewallRule>,
}

// An absent key falls back to the field default; an explicit `null` must
// still parse as a DHCP object and so fails.
fn present_dhcp<'de, D>(deserializer: D) -> Result<Option<DhcpConfig>, D::Error>
where
    D: Deserializer<'de>,
{
    DhcpConfig::deserialize(deserializer).map(Some)
}

/// Complete, validated network configuration for a fleet
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NetworkConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    dhcp: Option<DhcpConfig>,
    vlans: Vec<VlanConfig>,
    dns_servers: Vec<String>,
    firewall_rules: Vec<FirewallRule>,
}

impl NetworkConfig {
    /// Create a validated configuration from its parts
    pub fn new(
        dhcp: Option<DhcpConfig>,
        vlans: Vec<VlanConfig>,
        dns_servers: Vec<String>,
        firewall_rules: Vec<FirewallRule>,
    ) -> Result<Self, ValidationError> {
        let config = Self {
            dhcp,
            vlans,
            dns_servers,
            firewall_rules,
        };
        config.check()?;
        Ok(config)
    }

    /// Build and validate a configuration from untyped input data
    ///
    /// Fails with [`ProvisioningError::Schema`] when the input does not match
    /// the schema, and with [`ProvisioningError::Validation`] carrying the
    /// first violated rule otherwise. A half-valid config is never returned.
    pub fn from_data(raw: Value, sink: &dyn DiagnosticSink) -> ProvisioningResult<Self> {
        let data = parse(raw).map_err(|e| {
            sink.record(Diagnostic::error(
                "network_config",
                format!("Configuration does not match schema: {}", e),
            ));
            e
        })?;

        let config = Self::new(data.dhcp, data.vlans, data.dns_servers, data.firewall_rules)
            .map_err(|e| {
                sink.record(Diagnostic::error(
                    "network_config",
                    format!("Network configuration validation error: {}", e),
                ));
                ProvisioningError::from(e)
            })?;

        sink.record(Diagnostic::new(
            LogLevel::Debug,
            "network_config",
            format!(
                "Configuration accepted: dhcp={} vlans={} dns_servers={} firewall_rules={}",
                config.dhcp.is_some(),
                config.vlans.len(),
                config.dns_servers.len(),
                config.firewall_rules.len()
            ),
        ));
        Ok(config)
    }

    /// Parse JSON text, then [`from_data`](Self::from_data)
    pub fn from_json_str(json: &str, sink: &dyn DiagnosticSink) -> ProvisioningResult<Self> {
        let raw: Value = serde_json::from_str(json)?;
        Self::from_data(raw, sink)
    }

    /// Every violated rule in raw input, in validation order
    ///
    /// Unlike [`from_data`](Self::from_data) this does not stop at the first
    /// failure. Each DHCP block or VLAN contributes at most its first
    /// violation; each repeated VLAN id is reported once. Schema errors still
    /// fail outright. An empty list means `from_data` would succeed.
    pub fn violations(raw: Value) -> ProvisioningResult<Vec<ValidationError>> {
        let data = parse(raw)?;
        Ok(collect_violations(
            data.dhcp.as_ref(),
            &data.vlans,
            &data.dns_servers,
        ))
    }

    /// Check every rule, stopping at the first violation
    pub fn check(&self) -> ValidationResult {
        if let Some(dhcp) = &self.dhcp {
            dhcp.check()?;
        }

        for vlan in &self.vlans {
            vlan.check()?;
        }

        // Only meaningful once every id is individually in range
        validate_unique_vlan_ids(self.vlans.iter().map(|v| v.id))?;

        validate_dns_servers(&self.dns_servers)
    }

    /// Validate, recording what failed to `sink`
    ///
    /// Pure apart from the diagnostic: calling it twice gives the same answer.
    pub fn validate(&self, sink: &dyn DiagnosticSink) -> bool {
        match self.check() {
            Ok(()) => true,
            Err(e) => {
                sink.record(Diagnostic::error("network_config", e.to_string()));
                false
            }
        }
    }

    pub fn dhcp(&self) -> Option<&DhcpConfig> {
        self.dhcp.as_ref()
    }

    pub fn vlans(&self) -> &[VlanConfig] {
        &self.vlans
    }

    pub fn dns_servers(&self) -> &[String] {
        &self.dns_servers
    }

    pub fn firewall_rules(&self) -> &[FirewallRule] {
        &self.firewall_rules
    }

    /// VLAN ids in configuration order
    pub fn vlan_ids(&self) -> Vec<i64> {
        self.vlans.iter().map(|v| v.id).collect()
    }
}

impl<'de> Deserialize<'de> for NetworkConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let data = NetworkConfigData::deserialize(deserializer)?;
        Self::new(data.dhcp, data.vlans, data.dns_servers, data.firewall_rules)
            .map_err(serde::de::Error::custom)
    }
}

fn parse(raw: Value) -> ProvisioningResult<NetworkConfigData> {
    Ok(serde_json::from_value(raw)?)
}

fn collect_violations(
    dhcp: Option<&DhcpConfig>,
    vlans: &[VlanConfig],
    dns_servers: &[String],
) -> Vec<ValidationError> {
    let mut found = Vec::new();

    if let Some(Err(e)) = dhcp.map(DhcpConfig::check) {
        found.push(e);
    }

    found.extend(vlans.iter().filter_map(|v| v.check().err()));

    let mut seen = std::collections::HashSet::new();
    let mut reported = std::collections::HashSet::new();
    for vlan in vlans {
        if !seen.insert(vlan.id) && reported.insert(vlan.id) {
            found.push(ValidationError::DuplicateVlanId(vlan.id));
        }
    }

    found.extend(
        dns_servers
            .iter()
            .filter_map(|server| validate_ip("dns_servers", server).err()),
    );

    found
}
