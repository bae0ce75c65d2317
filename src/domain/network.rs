// Copyright (c) 2025 - Cowboy AI, Inc.
//! Network Value Objects and Address Syntax Predicates
//!
//! The predicates [`is_valid_ip`], [`is_valid_cidr`] and [`is_valid_mac`] are
//! total: they never panic and only ever answer `true` or `false`. They are
//! thin wrappers over the value objects below, which carry the parsed form.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;
use thiserror::Error;

/// Network value object parse error
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NetworkError {
    #[error("Invalid IP address format: {0}")]
    InvalidIpAddress(String),

    #[error("Invalid CIDR notation: {0}")]
    InvalidCidr(String),

    #[error("Invalid prefix length: {0} (must be 0-32 for IPv4, 0-128 for IPv6)")]
    InvalidPrefixLength(u8),

    #[error("Invalid MAC address format: {0}")]
    InvalidMacAddress(String),

    #[error("Invalid VLAN ID: {0} (must be 1-4094)")]
    InvalidVlanId(i64),
}

/// True iff `s` is an IPv4 or IPv6 address in standard notation
pub fn is_valid_ip(s: &str) -> bool {
    IpAddr::from_str(s).is_ok()
}

/// True iff `s` is `<ip>/<prefix-length>` with a prefix valid for the family
///
/// Host bits may be set (see [`CidrBlock`]).
pub fn is_valid_cidr(s: &str) -> bool {
    CidrBlock::new(s).is_ok()
}

/// True iff `s` is six colon-separated groups of two hex digits
pub fn is_valid_mac(s: &str) -> bool {
    MacAddress::new(s).is_ok()
}

/// CIDR block value object
///
/// An IPv4 or IPv6 address paired with a mandatory prefix length.
/// Invariants:
/// - Valid IP address format
/// - Prefix is plain decimal, 0-32 for IPv4 and 0-128 for IPv6
///
/// Host bits are not required to be zero: `192.168.1.10/24` is accepted.
/// This is looser than strict network parsing, which rejects an address
/// with bits set beyond the prefix; the address is kept exactly as given.
///
/// # Examples
///
/// ```rust
/// use cim_provisioning::domain::CidrBlock;
///
/// let block = CidrBlock::new("192.168.1.0/24").unwrap();
/// assert_eq!(block.address().to_string(), "192.168.1.0");
/// assert_eq!(block.prefix_length(), 24);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CidrBlock {
    address: IpAddr,
    prefix_length: u8,
}

impl CidrBlock {
    /// Parse `<ip>/<prefix>` notation
    pub fn new(cidr: impl AsRef<str>) -> Result<Self, NetworkError> {
        let cidr = cidr.as_ref();

        let (addr_str, prefix_str) = cidr
            .split_once('/')
            .ok_or_else(|| NetworkError::InvalidCidr(cidr.to_string()))?;

        let address = IpAddr::from_str(addr_str)
            .map_err(|_| NetworkError::InvalidIpAddress(addr_str.to_string()))?;

        // u8::from_str tolerates a leading '+', which is not CIDR notation
        if prefix_str.is_empty() || !prefix_str.bytes().all(|b| b.is_ascii_digit()) {
            return Err(NetworkError::InvalidCidr(cidr.to_string()));
        }

        let prefix_length = prefix_str
            .parse::<u8>()
            .map_err(|_| NetworkError::InvalidCidr(cidr.to_string()))?;

        Self::from_parts(address, prefix_length)
    }

    /// Create from separate address and prefix
    pub fn from_parts(address: IpAddr, prefix_length: u8) -> Result<Self, NetworkError> {
        let max_prefix = match address {
            IpAddr::V4(_) => 32,
            IpAddr::V6(_) => 128,
        };

        if prefix_length > max_prefix {
            return Err(NetworkError::InvalidPrefixLength(prefix_length));
        }

        Ok(Self {
            address,
            prefix_length,
        })
    }

    /// Get the IP address
    pub fn address(&self) -> IpAddr {
        self.address
    }

    /// Get the prefix length
    pub fn prefix_length(&self) -> u8 {
        self.prefix_length
    }

    /// Check if this is an IPv4 block
    pub fn is_ipv4(&self) -> bool {
        matches!(self.address, IpAddr::V4(_))
    }
}

impl fmt::Display for CidrBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.address, self.prefix_length)
    }
}

impl FromStr for CidrBlock {
    type Err = NetworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// MAC Address value object
///
/// Represents a 48-bit MAC address written as `aa:bb:cc:dd:ee:ff`.
/// Invariants:
/// - Exactly six colon-separated groups
/// - Each group is exactly two hex digits (either case)
///
/// Dash-separated and bare forms are rejected.
///
/// # Examples
///
/// ```rust
/// use cim_provisioning::domain::MacAddress;
///
/// let mac = MacAddress::new("00:1A:22:33:44:55").unwrap();
/// assert_eq!(mac.as_str(), "00:1a:22:33:44:55");
/// assert!(MacAddress::new("00-1a-22-33-44-55").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MacAddress([u8; 6]);

impl MacAddress {
    /// Create a new MAC address with validation
    pub fn new(mac: impl AsRef<str>) -> Result<Self, NetworkError> {
        let mac = mac.as_ref();
        let invalid = || NetworkError::InvalidMacAddress(mac.to_string());

        let mut octets = [0u8; 6];
        let mut groups = mac.split(':');

        for octet in octets.iter_mut() {
            let group = groups.next().ok_or_else(invalid)?;
            if group.len() != 2 || !group.bytes().all(|b| b.is_ascii_hexdigit()) {
                return Err(invalid());
            }
            *octet = u8::from_str_radix(group, 16).map_err(|_| invalid())?;
        }

        // Invariant: no seventh group
        if groups.next().is_some() {
            return Err(invalid());
        }

        Ok(Self(octets))
    }

    /// Get the octets
    pub fn octets(&self) -> [u8; 6] {
        self.0
    }

    /// Get as canonical string (lowercase, colon-separated)
    pub fn as_str(&self) -> String {
        format!(
            "{:02x}:{:02x}:{:02x}:{:02x}:{:02x}:{:02x}",
            self.0[0], self.0[1], self.0[2], self.0[3], self.0[4], self.0[5]
        )
    }
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MacAddress {
    type Err = NetworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// VLAN ID value object
///
/// Represents a VLAN ID (IEEE 802.1Q) with validation.
/// Invariants:
/// - Valid VLAN ID range (1-4094)
/// - VLAN 0 and 4095 are reserved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VlanId(u16);

impl VlanId {
    /// Minimum valid VLAN ID
    pub const MIN: u16 = 1;

    /// Maximum valid VLAN ID
    pub const MAX: u16 = 4094;

    /// Create a new VLAN ID with validation
    ///
    /// Accepts any integer so callers holding untrusted input never have to
    /// truncate before asking.
    pub fn new(id: i64) -> Result<Self, NetworkError> {
        match u16::try_from(id) {
            Ok(value) if (Self::MIN..=Self::MAX).contains(&value) => Ok(Self(value)),
            _ => Err(NetworkError::InvalidVlanId(id)),
        }
    }

    /// Get the VLAN ID value
    pub fn value(&self) -> u16 {
        self.0
    }
}

impl fmt::Display for VlanId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for VlanId {
    type Error = NetworkError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
