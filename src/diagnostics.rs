// Copyright (c) 2025 - Cowboy AI, Inc.
//! Diagnostic Sinks
//!
//! Validation and deployment never write to a process-wide logger directly.
//! They describe what happened as [`Diagnostic`] values and hand them to an
//! injected [`DiagnosticSink`], which decides where they go.
//!
//! ```text
//! validate() / apply() / deploy()        DiagnosticSink
//! ───────────────────────────────        ──────────────
//!            │                                 │
//!            ▼                                 ▼
//!     Diagnostic { level, ... }  ───────>  record()
//!                                              │
//!                      ┌───────────────────────┼─────────────────┐
//!                      ▼                       ▼                 ▼
//!                 TracingSink            CollectingSink       NullSink
//!               (tracing events)        (kept for tests)     (discarded)
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::{Mutex, MutexGuard};

/// Severity of a diagnostic record
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LogLevel {
    /// Debug level
    Debug,
    /// Info level
    Info,
    /// Warning level
    Warn,
    /// Error level
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        };
        f.write_str(label)
    }
}

/// A single observable record emitted by validation or deployment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Severity
    pub level: LogLevel,
    /// Emitting component (`dhcp`, `vlan`, `network_config`, `router`, ...)
    pub component: String,
    /// Hostname of the device involved, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device: Option<String>,
    /// Human-readable message
    pub message: String,
}

impl Diagnostic {
    /// Create a diagnostic not tied to a device
    pub fn new(level: LogLevel, component: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level,
            component: component.into(),
            device: None,
            message: message.into(),
        }
    }

    /// Attach the hostname of the device this record is about
    pub fn for_device(mut self, hostname: impl Into<String>) -> Self {
        self.device = Some(hostname.into());
        self
    }

    /// Shorthand for an info-level record
    pub fn info(component: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(LogLevel::Info, component, message)
    }

    /// Shorthand for an error-level record
    pub fn error(component: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(LogLevel::Error, component, message)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.device {
            Some(device) => write!(
                f,
                "[{}] {} ({}): {}",
                self.level, self.component, device, self.message
            ),
            None => write!(f, "[{}] {}: {}", self.level, self.component, self.message),
        }
    }
}

/// Destination for diagnostic records
///
/// Takes `&self` so one sink can be shared by every device of a concurrent
/// deployment.
pub trait DiagnosticSink: Send + Sync {
    /// Record one diagnostic
    fn record(&self, diagnostic: Diagnostic);
}

/// Forwards diagnostics to `tracing` with structured fields
///
/// This is the sink used outside of tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn record(&self, diagnostic: Diagnostic) {
        let Diagnostic {
            level,
            component,
            device,
            message,
        } = diagnostic;
        // `None` leaves the field out of the event entirely
        let device = device.as_deref();

        match level {
            LogLevel::Debug => tracing::debug!(%component, device, "{}", message),
            LogLevel::Info => tracing::info!(%component, device, "{}", message),
            LogLevel::Warn => tracing::warn!(%component, device, "{}", message),
            LogLevel::Error => tracing::error!(%component, device, "{}", message),
        }
    }
}

/// Discards all diagnostics
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn record(&self, _diagnostic: Diagnostic) {}
}

/// Collects diagnostics in memory for later inspection
#[derive(Debug, Default)]
pub struct CollectingSink {
    collected: Mutex<Vec<Diagnostic>>,
}

impl CollectingSink {
    /// Create an empty collecting sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.lock().clone()
    }

    /// Take all collected diagnostics, leaving the collector empty
    pub fn take(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.lock())
    }

    /// Number of records collected
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Records at the given level
    pub fn at_level(&self, level: LogLevel) -> Vec<Diagnostic> {
        self.lock()
            .iter()
            .filter(|d| d.level == level)
            .cloned()
            .collect()
    }

    /// Records about the given device
    pub fn for_device(&self, hostname: &str) -> Vec<Diagnostic> {
        self.lock()
            .iter()
            .filter(|d| d.device.as_deref() == Some(hostname))
            .cloned()
            .collect()
    }

    // A panic while holding the lock cannot leave a Vec half-written.
    fn lock(&self) -> MutexGuard<'_, Vec<Diagnostic>> {
        self.collected
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl DiagnosticSink for CollectingSink {
    fn record(&self, diagnostic: Diagnostic) {
        self.lock().push(diagnostic);
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for std::sync::Arc<S> {
    fn record(&self, diagnostic: Diagnostic) {
        (**self).record(diagnostic);
    }
}
