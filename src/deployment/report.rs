// Copyright (c) 2025 - Cowboy AI, Inc.
//! Deployment results, per device and fleet-wide

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::device::{DeviceError, DeviceIdentity, DeviceKind};

/// What happened on one device
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "error", rename_all = "snake_case")]
pub enum DeviceOutcome {
    Success,
    Failure(DeviceError),
}

impl DeviceOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, DeviceOutcome::Success)
    }

    /// Failure cause, if any
    pub fn reason(&self) -> Option<String> {
        match self {
            DeviceOutcome::Success => None,
            DeviceOutcome::Failure(e) => Some(e.to_string()),
        }
    }
}

impl From<Result<(), DeviceError>> for DeviceOutcome {
    fn from(result: Result<(), DeviceError>) -> Self {
        match result {
            Ok(()) => DeviceOutcome::Success,
            Err(e) => DeviceOutcome::Failure(e),
        }
    }
}

/// Result of deploying to a single device
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceReport {
    pub hostname: String,
    pub ip: String,
    pub kind: DeviceKind,
    pub outcome: DeviceOutcome,
    pub duration_ms: u64,
}

impl DeviceReport {
    pub fn new(
        identity: &DeviceIdentity,
        kind: DeviceKind,
        outcome: DeviceOutcome,
        duration_ms: u64,
    ) -> Self {
        Self {
            hostname: identity.hostname.clone(),
            ip: identity.ip.clone(),
            kind,
            outcome,
            duration_ms,
        }
    }
}

/// Result of deploying one configuration to a fleet
///
/// `devices` is in the same order as the targets passed to the orchestrator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentReport {
    pub deployment_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    /// True iff every device succeeded (true for an empty fleet)
    pub success: bool,
    pub devices: Vec<DeviceReport>,
}

impl DeploymentReport {
    pub(crate) fn new(
        deployment_id: Uuid,
        started_at: DateTime<Utc>,
        devices: Vec<DeviceReport>,
    ) -> Self {
        let success = devices.iter().all(|d| d.outcome.is_success());
        Self {
            deployment_id,
            started_at,
            finished_at: Utc::now(),
            success,
            devices,
        }
    }

    /// Number of devices that took the configuration
    pub fn succeeded(&self) -> usize {
        self.devices
            .iter()
            .filter(|d| d.outcome.is_success())
            .count()
    }

    /// Number of devices that did not
    pub fn failed(&self) -> usize {
        self.devices.len() - self.succeeded()
    }

    /// Reports of the devices that failed, in fleet order
    pub fn failures(&self) -> impl Iterator<Item = &DeviceReport> {
        self.devices.iter().filter(|d| !d.outcome.is_success())
    }

    /// Look up a device's report by hostname
    pub fn device(&self, hostname: &str) -> Option<&DeviceReport> {
        self.devices.iter().find(|d| d.hostname == hostname)
    }
}
