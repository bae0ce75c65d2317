// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for Address Validation
//!
//! The predicates must be total: every input string yields a boolean, never
//! a panic, and well-formed addresses generated from their parts are always
//! accepted.

use cim_provisioning::domain::{is_valid_cidr, is_valid_ip, is_valid_mac, CidrBlock, MacAddress};
use proptest::prelude::*;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

// ============================================================================
// Property Test Strategies
// ============================================================================

/// Arbitrary IPv4 or IPv6 address
fn ip_addr() -> impl Strategy<Value = IpAddr> {
    prop_oneof![
        any::<u32>().prop_map(|bits| IpAddr::V4(Ipv4Addr::from(bits))),
        any::<u128>().prop_map(|bits| IpAddr::V6(Ipv6Addr::from(bits))),
    ]
}

/// Six octets rendered as a colon MAC, each group in random case
fn mac_string() -> impl Strategy<Value = ([u8; 6], String)> {
    (any::<[u8; 6]>(), any::<[bool; 6]>()).prop_map(|(octets, upper)| {
        let groups: Vec<String> = octets
            .iter()
            .zip(upper.iter())
            .map(|(octet, upper)| {
                if *upper {
                    format!("{:02X}", octet)
                } else {
                    format!("{:02x}", octet)
                }
            })
            .collect();
        (octets, groups.join(":"))
    })
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Property: The predicates never panic, whatever the input
    #[test]
    fn prop_predicates_are_total(s in ".*") {
        let _ = is_valid_ip(&s);
        let _ = is_valid_cidr(&s);
        let _ = is_valid_mac(&s);
    }

    /// Property: Any rendered IP address is accepted
    #[test]
    fn prop_rendered_ip_is_valid(addr in ip_addr()) {
        prop_assert!(is_valid_ip(&addr.to_string()));
    }

    /// Property: A CIDR is valid exactly when its prefix fits the family
    #[test]
    fn prop_cidr_prefix_bound(addr in ip_addr(), prefix in 0u16..=300) {
        let cidr = format!("{}/{}", addr, prefix);
        let max = if addr.is_ipv4() { 32 } else { 128 };

        prop_assert_eq!(is_valid_cidr(&cidr), prefix <= max, "{}", cidr);
    }

    /// Property: A parsed CIDR keeps its address and prefix
    #[test]
    fn prop_cidr_parse_preserves_parts(addr in ip_addr(), prefix in 0u8..=32) {
        let block = CidrBlock::new(format!("{}/{}", addr, prefix)).unwrap();

        prop_assert_eq!(block.address(), addr);
        prop_assert_eq!(block.prefix_length(), prefix);
        prop_assert_eq!(block.to_string(), format!("{}/{}", addr, prefix));
    }

    /// Property: A bare address is never a CIDR block
    #[test]
    fn prop_bare_address_is_not_cidr(addr in ip_addr()) {
        prop_assert!(!is_valid_cidr(&addr.to_string()));
    }

    /// Property: Colon-separated hex pairs are accepted in any case
    #[test]
    fn prop_generated_mac_is_valid((octets, mac) in mac_string()) {
        prop_assert!(is_valid_mac(&mac));
        prop_assert_eq!(MacAddress::new(&mac).unwrap().octets(), octets);
    }

    /// Property: Dropping or adding a group invalidates a MAC
    #[test]
    fn prop_wrong_group_count_is_invalid((_, mac) in mac_string(), extra in "[0-9a-f]{2}") {
        let (shorter, _) = mac.rsplit_once(':').unwrap();
        prop_assert!(!is_valid_mac(shorter));

        let longer = format!("{}:{}", mac, extra);
        prop_assert!(!is_valid_mac(&longer));
    }

    /// Property: Any other separator invalidates a MAC
    #[test]
    fn prop_other_separator_is_invalid((_, mac) in mac_string(), sep in "[-. _]") {
        prop_assert!(!is_valid_mac(&mac.replace(':', &sep)));
    }

    /// Property: A non-hex character anywhere invalidates a MAC
    #[test]
    fn prop_non_hex_is_invalid((_, mac) in mac_string(), pos in 0usize..17, bad in "[g-zG-Z]") {
        // Skip the separators so the group layout stays intact
        prop_assume!(pos % 3 != 2);

        let mut chars: Vec<char> = mac.chars().collect();
        chars[pos] = bad.chars().next().unwrap();
        let mangled: String = chars.into_iter().collect();

        prop_assert!(!is_valid_mac(&mangled));
    }
}
