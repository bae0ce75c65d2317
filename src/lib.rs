//! Zero-touch provisioning for the Composable Information Machine
//!
//! Validates structured network configuration (DHCP, VLAN, DNS, firewall) and
//! distributes it to a fleet of network devices, tracking success or failure
//! per device.

pub mod deployment;
pub mod device;
pub mod diagnostics;
pub mod domain;
pub mod errors;
#[cfg(feature = "fetch")]
pub mod fetch;

// Re-export commonly used types
pub use deployment::{DeploymentOrchestrator, DeploymentReport, DeviceOutcome};
pub use device::{DeviceTarget, Router, Switch};
pub use diagnostics::{CollectingSink, Diagnostic, DiagnosticSink, TracingSink};
pub use domain::{DhcpConfig, NetworkConfig, ValidationError, VlanConfig};
pub use errors::{ProvisioningError, ProvisioningResult};
