// ABOUTME: Configuration error types for fit intelligence validation
// ABOUTME: Defines error variants for invalid ranges, weights, and env parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitform Intelligence

//! Configuration error types for fit intelligence validation.

use std::env;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Value outside acceptable range (e.g., negative gap, zero slope)
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// Weights don't sum to the required total
    #[error("Invalid weights: {0}")]
    InvalidWeights(&'static str),

    /// Environment variable access error
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] env::VarError),

    /// Failed to parse a configuration value from the environment
    #[error("Parse error: {0}")]
    Parse(String),
}
