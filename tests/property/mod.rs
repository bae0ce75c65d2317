// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests Module
//!
//! - `address_validation`: MAC, IP and CIDR predicates against generated input
//! - `config_validation`: `NetworkConfig` construction and validation laws

mod address_validation;
mod config_validation;
