// Copyright (c) 2025 - Cowboy AI, Inc.
//! Error types for provisioning operations

use thiserror::Error;

use crate::domain::ValidationError;

/// Errors that can occur while building or distributing a network configuration
#[derive(Debug, Error)]
pub enum ProvisioningError {
    /// Raw input does not match the configuration schema
    /// (missing, unknown or mistyped fields)
    #[error("Schema error: {0}")]
    Schema(String),

    /// Configuration was well-formed but violates a domain invariant
    #[error("Invalid configuration data: {0}")]
    Validation(#[from] ValidationError),

    /// Remote configuration fetch failed
    #[error("Transport error: {0}")]
    Transport(String),

    /// Local configuration (environment, inventory file) is unusable
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl ProvisioningError {
    /// Whether this error came from the fetch collaborator
    pub fn is_transport(&self) -> bool {
        matches!(self, ProvisioningError::Transport(_))
    }
}

/// Result type for provisioning operations
pub type ProvisioningResult<T> = Result<T, ProvisioningError>;

impl From<serde_json::Error> for ProvisioningError {
    fn from(err: serde_json::Error) -> Self {
        ProvisioningError::Schema(err.to_string())
    }
}

impl From<std::io::Error> for ProvisioningError {
    fn from(err: std::io::Error) -> Self {
        ProvisioningError::Configuration(err.to_string())
    }
}
