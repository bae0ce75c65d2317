// Copyright (c) 2025 - Cowboy AI, Inc.
//! Network Configuration Domain Models
//!
//! The configuration that zero-touch provisioning distributes to a fleet,
//! together with the rules that decide whether it is internally consistent.
//!
//! # Value Objects with Invariants
//!
//! - [`CidrBlock`] - IPv4/IPv6 address with mandatory prefix length
//! - [`MacAddress`] - 48-bit MAC address in `aa:bb:cc:dd:ee:ff` form
//! - [`VlanId`] - IEEE 802.1Q VLAN ID (1-4094)
//!
//! # Configuration Entities
//!
//! - [`DhcpConfig`] - subnet, gateway and MAC → IP reservations
//! - [`VlanConfig`] - VLAN id, name and subnet
//! - [`NetworkConfig`] - the deployable aggregate (DHCP, VLANs, DNS, firewall)
//!
//! Every entity exposes `check()` (pure, returns the first [`ValidationError`])
//! and `validate(sink)` (boolean, records one diagnostic on failure).

pub mod dhcp;
pub mod invariants;
pub mod network;
pub mod network_config;
pub mod vlan;

pub use dhcp::DhcpConfig;
pub use invariants::{ValidationError, ValidationResult};
pub use network::{
    is_valid_cidr, is_valid_ip, is_valid_mac, CidrBlock, MacAddress, NetworkError, VlanId,
};
pub use network_config::{FirewallRule, NetworkConfig};
pub use vlan::VlanConfig;
