// Copyright (c) 2025 - Cowboy AI, Inc.
//! Deployment Orchestrator
//!
//! Pushes one validated configuration to every target in a fleet.
//!
//! # Failure Isolation
//!
//! Each target is guarded individually. An `Err` from `apply`, a panic inside
//! `apply`, or an elapsed per-device timeout all become a
//! [`DeviceOutcome::Failure`] for that device only. The loop always runs to
//! the end of the fleet; the fleet-wide result is computed afterwards.

use futures::future::join_all;
use futures::FutureExt;
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::Instrument;
use uuid::Uuid;

use super::report::{DeploymentReport, DeviceOutcome, DeviceReport};
use crate::device::{DeviceError, DeviceTarget};
use crate::diagnostics::{Diagnostic, DiagnosticSink, TracingSink};
use crate::domain::NetworkConfig;

/// How targets are driven
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeployStrategy {
    /// One target at a time, in input order
    #[default]
    Sequential,
    /// All targets at once; results still reported in input order
    Concurrent,
}

/// Orchestrator configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentSettings {
    #[serde(default)]
    pub strategy: DeployStrategy,

    /// Upper bound on a single device push, `None` for unbounded
    #[serde(default = "default_device_timeout")]
    pub device_timeout: Option<Duration>,
}

fn default_device_timeout() -> Option<Duration> {
    Some(Duration::from_secs(30))
}

impl Default for DeploymentSettings {
    fn default() -> Self {
        Self {
            strategy: DeployStrategy::default(),
            device_timeout: default_device_timeout(),
        }
    }
}

/// Drives a configuration across a fleet of [`DeviceTarget`]s
pub struct DeploymentOrchestrator {
    settings: DeploymentSettings,
    sink: Arc<dyn DiagnosticSink>,
}

impl DeploymentOrchestrator {
    /// Create an orchestrator with default settings
    pub fn new(sink: Arc<dyn DiagnosticSink>) -> Self {
        Self::with_settings(DeploymentSettings::default(), sink)
    }

    /// Create an orchestrator with explicit settings
    pub fn with_settings(settings: DeploymentSettings, sink: Arc<dyn DiagnosticSink>) -> Self {
        Self { settings, sink }
    }

    pub fn settings(&self) -> &DeploymentSettings {
        &self.settings
    }

    /// Deploy `config` to every target
    ///
    /// The config must already be validated (every `NetworkConfig` obtained
    /// from `from_data` is). Never short-circuits: every target is attempted.
    pub async fn deploy(
        &self,
        config: &NetworkConfig,
        targets: &[Box<dyn DeviceTarget>],
    ) -> DeploymentReport {
        let deployment_id = Uuid::now_v7();
        let started_at = chrono::Utc::now();
        let span = tracing::info_span!("deployment", %deployment_id);

        async {
            self.sink.record(Diagnostic::info(
                "deployment",
                format!(
                    "Starting {:?} deployment {} to {} devices",
                    self.settings.strategy,
                    deployment_id,
                    targets.len()
                ),
            ));

            let devices = match self.settings.strategy {
                DeployStrategy::Sequential => {
                    let mut devices = Vec::with_capacity(targets.len());
                    for target in targets {
                        devices.push(self.deploy_one(config, target.as_ref()).await);
                    }
                    devices
                }
                DeployStrategy::Concurrent => {
                    join_all(
                        targets
                            .iter()
                            .map(|target| self.deploy_one(config, target.as_ref())),
                    )
                    .await
                }
            };

            let report = DeploymentReport::new(deployment_id, started_at, devices);

            let summary = format!(
                "Deployment {} finished: {} succeeded, {} failed",
                deployment_id,
                report.succeeded(),
                report.failed()
            );
            if report.success {
                self.sink.record(Diagnostic::info("deployment", summary));
            } else {
                self.sink.record(Diagnostic::error("deployment", summary));
            }

            report
        }
        .instrument(span)
        .await
    }

    /// Deploy to a single target, containing every failure mode
    async fn deploy_one(&self, config: &NetworkConfig, target: &dyn DeviceTarget) -> DeviceReport {
        let started = Instant::now();
        let hostname = target.hostname().to_string();

        let push = AssertUnwindSafe(target.apply(config, self.sink.as_ref())).catch_unwind();

        let result = match self.settings.device_timeout {
            Some(limit) => match tokio::time::timeout(limit, push).await {
                Ok(result) => result,
                Err(_) => Ok(Err(DeviceError::Timeout(limit))),
            },
            None => push.await,
        };

        let outcome = match result {
            Ok(applied) => DeviceOutcome::from(applied),
            Err(panic) => DeviceOutcome::Failure(DeviceError::Panicked(panic_message(panic))),
        };

        match &outcome {
            DeviceOutcome::Success => self.sink.record(
                Diagnostic::info(
                    "deployment",
                    format!("Deployed configuration to {}", hostname),
                )
                .for_device(&hostname),
            ),
            DeviceOutcome::Failure(e) => self.sink.record(
                Diagnostic::error(
                    "deployment",
                    format!("Failed to deploy config to {}: {}", hostname, e),
                )
                .for_device(&hostname),
            ),
        }

        let duration_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
        DeviceReport::new(target.identity(), target.kind(), outcome, duration_ms)
    }
}

impl Default for DeploymentOrchestrator {
    fn default() -> Self {
        Self::new(Arc::new(TracingSink))
    }
}

/// Deploy with default settings and report only the fleet-wide result
pub async fn deploy_configuration(
    config: &NetworkConfig,
    targets: &[Box<dyn DeviceTarget>],
    sink: Arc<dyn DiagnosticSink>,
) -> bool {
    DeploymentOrchestrator::new(sink)
        .deploy(config, targets)
        .await
        .success
}

fn panic_message(panic: Box<dyn Any + Send>) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
