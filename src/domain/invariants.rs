// Copyright (c) 2025 - Cowboy AI, Inc.
//! Pure Validation Functions - Configuration Invariants
//!
//! Every rule a network configuration must satisfy before it may be deployed.
//! All functions are pure (no I/O, no mutation) and fail fast: the first
//! violated rule is returned and nothing after it is checked.
//!
//! # Invariant Categories
//!
//! 1. **Syntax**: IP addresses, CIDR blocks and MAC addresses are well-formed
//! 2. **Semantic**: VLAN ids are in range and pairwise distinct
//!
//! Entity types call these from their `check()` methods; the boolean
//! `validate()` wrappers add the diagnostic record.

use std::collections::{BTreeMap, HashSet};

use super::network::{CidrBlock, MacAddress, VlanId};

/// Validation result with detailed error information
pub type ValidationResult = Result<(), ValidationError>;

/// Validation error with context
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Malformed CIDR block
    #[error("Invalid CIDR notation for {field}: {value}")]
    InvalidCidr { field: String, value: String },

    /// Malformed IP address
    #[error("Invalid IP address for {field}: {value}")]
    InvalidIpAddress { field: String, value: String },

    /// Malformed MAC address in a DHCP reservation
    #[error("Invalid MAC address format: {0}")]
    InvalidMacAddress(String),

    /// VLAN id outside 1-4094
    #[error("Invalid VLAN ID: {0} (must be 1-4094)")]
    InvalidVlanId(i64),

    /// Two VLANs share an id
    #[error("Duplicate VLAN ID detected: {0}")]
    DuplicateVlanId(i64),
}

impl ValidationError {
    /// Malformed address syntax (IP, CIDR, MAC)
    pub fn is_syntax(&self) -> bool {
        matches!(
            self,
            ValidationError::InvalidCidr { .. }
                | ValidationError::InvalidIpAddress { .. }
                | ValidationError::InvalidMacAddress(_)
        )
    }

    /// Well-formed but semantically wrong (VLAN range, duplicates)
    pub fn is_semantic(&self) -> bool {
        !self.is_syntax()
    }
}

/// Validate a CIDR block
pub fn validate_cidr(field: &str, value: &str) -> ValidationResult {
    CidrBlock::new(value)
        .map(|_| ())
        .map_err(|_| ValidationError::InvalidCidr {
            field: field.to_string(),
            value: value.to_string(),
        })
}

/// Validate an IP address
pub fn validate_ip(field: &str, value: &str) -> ValidationResult {
    if super::network::is_valid_ip(value) {
        Ok(())
    } else {
        Err(ValidationError::InvalidIpAddress {
            field: field.to_string(),
            value: value.to_string(),
        })
    }
}

/// Validate DHCP reservations
///
/// # Rules
/// - Each MAC is checked before its IP
/// - Entries are visited in key order
pub fn validate_reservations(reservations: &BTreeMap<String, String>) -> ValidationResult {
    for (mac, ip) in reservations {
        MacAddress::new(mac).map_err(|_| ValidationError::InvalidMacAddress(mac.clone()))?;
        validate_ip(&format!("reservation {}", mac), ip)?;
    }
    Ok(())
}

/// Validate a VLAN id is within 1-4094
pub fn validate_vlan_id(id: i64) -> ValidationResult {
    VlanId::new(id)
        .map(|_| ())
        .map_err(|_| ValidationError::InvalidVlanId(id))
}

/// Validate VLAN ids are pairwise distinct
///
/// Reports the first id seen twice, in sequence order.
pub fn validate_unique_vlan_ids<I>(ids: I) -> ValidationResult
where
    I: IntoIterator<Item = i64>,
{
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(ValidationError::DuplicateVlanId(id));
        }
    }
    Ok(())
}

/// Validate every DNS server is an IP address
pub fn validate_dns_servers(servers: &[String]) -> ValidationResult {
    servers
        .iter()
        .try_for_each(|server| validate_ip("dns_servers", server))
}
