// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for Configuration Validation
//!
//! Generates whole configurations and checks the laws construction and
//! validation must obey: valid input is accepted, each rule rejects what it
//! names, and validation is repeatable.

use cim_provisioning::diagnostics::{CollectingSink, NullSink};
use cim_provisioning::domain::{DhcpConfig, NetworkConfig, ValidationError, VlanConfig};
use cim_provisioning::ProvisioningError;
use proptest::prelude::*;
use serde_json::{json, Value};
use std::collections::BTreeSet;

// ============================================================================
// Property Test Strategies
// ============================================================================

/// Distinct in-range VLAN ids
fn vlan_ids() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::btree_set(1i64..=4094, 0..16).prop_map(|ids| ids.into_iter().collect())
}

fn vlans_for(ids: &[i64]) -> Vec<VlanConfig> {
    ids.iter()
        .map(|id| {
            VlanConfig::new(
                *id,
                format!("vlan{}", id),
                format!("10.{}.{}.0/24", id / 256, id % 256),
            )
        })
        .collect()
}

/// DHCP block on 192.168.x.0/24 with a handful of reservations
fn dhcp() -> impl Strategy<Value = DhcpConfig> {
    (any::<u8>(), prop::collection::btree_set(any::<[u8; 6]>(), 0..8)).prop_map(
        |(third, macs)| {
            macs.into_iter().enumerate().fold(
                DhcpConfig::new(
                    format!("192.168.{}.0/24", third),
                    format!("192.168.{}.1", third),
                ),
                |dhcp, (host, mac)| {
                    let mac = mac
                        .iter()
                        .map(|b| format!("{:02x}", b))
                        .collect::<Vec<_>>()
                        .join(":");
                    dhcp.with_reservation(mac, format!("192.168.{}.{}", third, host + 10))
                },
            )
        },
    )
}

fn dns_servers() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(
        any::<u32>().prop_map(|bits| std::net::Ipv4Addr::from(bits).to_string()),
        0..4,
    )
}

/// Parts of a configuration that satisfies every rule
#[derive(Debug, Clone)]
struct ValidParts {
    dhcp: Option<DhcpConfig>,
    vlans: Vec<VlanConfig>,
    dns_servers: Vec<String>,
}

impl ValidParts {
    fn build(self) -> NetworkConfig {
        NetworkConfig::new(self.dhcp, self.vlans, self.dns_servers, Vec::new())
            .expect("generated parts must validate")
    }

    fn raw(&self) -> Value {
        let mut raw = json!({
            "vlans": self.vlans,
            "dns_servers": self.dns_servers,
        });
        if let Some(dhcp) = &self.dhcp {
            raw["dhcp"] = json!(dhcp);
        }
        raw
    }
}

fn valid_parts() -> impl Strategy<Value = ValidParts> {
    (prop::option::of(dhcp()), vlan_ids(), dns_servers()).prop_map(|(dhcp, ids, dns_servers)| {
        ValidParts {
            dhcp,
            vlans: vlans_for(&ids),
            dns_servers,
        }
    })
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Property: Generated valid configurations are accepted
    #[test]
    fn prop_valid_config_is_accepted(parts in valid_parts()) {
        let raw = parts.raw();
        let config = parts.build();

        let sink = CollectingSink::new();
        prop_assert!(config.validate(&sink));
        prop_assert!(sink.is_empty());
        prop_assert!(NetworkConfig::violations(raw).unwrap().is_empty());
    }

    /// Property: Construction from serialized data reproduces the config
    #[test]
    fn prop_from_data_reconstructs(parts in valid_parts()) {
        let config = parts.build();
        let raw = serde_json::to_value(&config).unwrap();
        let rebuilt = NetworkConfig::from_data(raw, &NullSink).unwrap();
        prop_assert_eq!(rebuilt, config);
    }

    /// Property: Construction gives the same answer for the same input
    #[test]
    fn prop_construction_is_repeatable(parts in valid_parts(), bad_dns in any::<bool>()) {
        let mut raw = parts.raw();
        if bad_dns {
            raw["dns_servers"]
                .as_array_mut()
                .unwrap()
                .push(json!("not-an-address"));
        }

        let first = NetworkConfig::from_data(raw.clone(), &NullSink).map_err(|e| e.to_string());
        let second = NetworkConfig::from_data(raw, &NullSink).map_err(|e| e.to_string());

        prop_assert_eq!(first.is_ok(), !bad_dns);
        prop_assert_eq!(first, second);
    }

    /// Property: Any VLAN id outside 1-4094 is rejected by id
    #[test]
    fn prop_out_of_range_vlan_rejected(
        id in prop_oneof![i64::MIN..=0, 4095i64..=i64::MAX]
    ) {
        let vlans = vec![VlanConfig::new(id, "bad", "10.0.0.0/24")];

        prop_assert_eq!(
            NetworkConfig::new(None, vlans, Vec::new(), Vec::new()),
            Err(ValidationError::InvalidVlanId(id))
        );
    }

    /// Property: Repeating any id is reported as that duplicate
    #[test]
    fn prop_duplicate_vlan_rejected(ids in vlan_ids(), pick in any::<prop::sample::Index>()) {
        prop_assume!(!ids.is_empty());
        let dup = ids[pick.index(ids.len())];

        let mut vlans = vlans_for(&ids);
        vlans.push(VlanConfig::new(dup, "again", "172.16.0.0/24"));

        prop_assert_eq!(
            NetworkConfig::new(None, vlans.clone(), Vec::new(), Vec::new()),
            Err(ValidationError::DuplicateVlanId(dup))
        );

        let err = NetworkConfig::from_data(json!({ "vlans": vlans }), &NullSink).unwrap_err();
        prop_assert!(matches!(
            err,
            ProvisioningError::Validation(ValidationError::DuplicateVlanId(d)) if d == dup
        ));
    }

    /// Property: Fail-fast reports the first of the full violation list
    #[test]
    fn prop_from_data_agrees_with_violations(
        parts in valid_parts(),
        bad_ids in prop::collection::btree_set(4095i64..5000, 0..3)
    ) {
        let mut parts = parts;
        let bad: BTreeSet<i64> = bad_ids;
        parts.vlans.extend(bad.iter().map(|id| VlanConfig::new(*id, "bad", "10.0.0.0/24")));
        let raw = parts.raw();

        let violations = NetworkConfig::violations(raw.clone()).unwrap();
        match NetworkConfig::from_data(raw, &NullSink) {
            Ok(_) => prop_assert!(violations.is_empty()),
            Err(ProvisioningError::Validation(first)) => {
                prop_assert_eq!(Some(&first), violations.first())
            }
            Err(other) => prop_assert!(false, "unexpected error: {}", other),
        }
        prop_assert_eq!(violations.len(), bad.len());
    }
}
