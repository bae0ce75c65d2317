// Copyright (c) 2025 - Cowboy AI, Inc.
//! Test Fixtures for cim-provisioning
//!
//! Deterministic configuration documents and device fleets shared by the
//! integration tests.
//!
//! # Design Principles
//! - Fixtures are the only place raw configuration JSON is written out
//! - Every fixture document is valid unless its name says otherwise
//! - Faulty devices wrap real ones so identity and kind stay realistic

#![allow(dead_code)]

use async_trait::async_trait;
use serde_json::{json, Value};
use std::time::Duration;

use cim_provisioning::device::{
    DeviceError, DeviceIdentity, DeviceKind, DeviceTarget, Router, Switch,
};
use cim_provisioning::diagnostics::{Diagnostic, DiagnosticSink};
use cim_provisioning::domain::NetworkConfig;

pub const ROUTER_HOSTNAME: &str = "router1";
pub const ROUTER_IP: &str = "192.168.1.1";
pub const SWITCH_HOSTNAME: &str = "switch1";
pub const SWITCH_IP: &str = "192.168.1.2";

/// A complete, valid configuration document
pub fn raw_config_fixture() -> Value {
    json!({
        "dhcp": {
            "reservations": {
                "00:11:22:33:44:55": "192.168.1.10",
                "66:77:88:99:aa:bb": "192.168.1.11"
            },
            "subnet": "192.168.1.0/24",
            "gateway": "192.168.1.1"
        },
        "vlans": [
            {"id": 10, "name": "users", "subnet": "10.10.0.0/24"},
            {"id": 20, "name": "voice", "subnet": "10.20.0.0/24"},
            {"id": 30, "name": "servers", "subnet": "2001:db8:30::/64"}
        ],
        "dns_servers": ["8.8.8.8", "2001:4860:4860::8888"],
        "firewall_rules": [
            {"action": "allow", "protocol": "tcp", "port": 22, "source": "10.10.0.0/24"},
            {"action": "deny", "protocol": "any"}
        ]
    })
}

/// One DHCP block and one VLAN, nothing else
pub fn minimal_raw_config_fixture() -> Value {
    json!({
        "dhcp": {
            "reservations": {"aa:bb:cc:dd:ee:ff": "192.168.1.50"},
            "subnet": "192.168.1.0/24",
            "gateway": "192.168.1.1"
        },
        "vlans": [
            {"id": 100, "name": "management", "subnet": "10.100.0.0/24"}
        ]
    })
}

/// Validated configuration built from [`raw_config_fixture`]
pub fn network_config_fixture() -> NetworkConfig {
    NetworkConfig::from_data(raw_config_fixture(), &cim_provisioning::diagnostics::NullSink)
        .expect("Invalid network config fixture")
}

/// How a [`FaultyDevice`] misbehaves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fault {
    /// Return `DeviceError::Rejected`
    Reject,
    /// Panic inside `apply`
    Panic,
    /// Never finish within any reasonable timeout
    Hang,
}

/// Wraps a real device and fails in a chosen way after announcing itself
pub struct FaultyDevice<D: DeviceTarget> {
    inner: D,
    fault: Fault,
}

impl<D: DeviceTarget> FaultyDevice<D> {
    pub fn new(inner: D, fault: Fault) -> Self {
        Self { inner, fault }
    }
}

#[async_trait]
impl<D: DeviceTarget> DeviceTarget for FaultyDevice<D> {
    fn identity(&self) -> &DeviceIdentity {
        self.inner.identity()
    }

    fn kind(&self) -> DeviceKind {
        self.inner.kind()
    }

    async fn apply(
        &self,
        _config: &NetworkConfig,
        sink: &dyn DiagnosticSink,
    ) -> Result<(), DeviceError> {
        sink.record(
            Diagnostic::info("faulty", format!("Attempting {:?}", self.fault))
                .for_device(self.hostname()),
        );

        match self.fault {
            Fault::Reject => Err(DeviceError::Rejected("commit check failed".to_string())),
            Fault::Panic => panic!("driver crashed on {}", self.hostname()),
            Fault::Hang => {
                tokio::time::sleep(Duration::from_secs(3600)).await;
                Ok(())
            }
        }
    }
}

pub fn router_fixture() -> Router {
    Router::new(ROUTER_HOSTNAME, ROUTER_IP)
}

pub fn switch_fixture() -> Switch {
    Switch::new(SWITCH_HOSTNAME, SWITCH_IP)
}

/// `[Router, Switch]` with the router forced to fail in the given way
pub fn fleet_with_failing_router(fault: Fault) -> Vec<Box<dyn DeviceTarget>> {
    vec![
        Box::new(FaultyDevice::new(router_fixture(), fault)),
        Box::new(switch_fixture()),
    ]
}

/// `[Router, Switch]`, both healthy
pub fn healthy_fleet() -> Vec<Box<dyn DeviceTarget>> {
    vec![Box::new(router_fixture()), Box::new(switch_fixture())]
}
