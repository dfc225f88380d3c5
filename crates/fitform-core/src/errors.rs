// ABOUTME: Reference-data error types for size chart loading and validation
// ABOUTME: Defines error variants for malformed documents and empty charts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitform Intelligence

//! Reference-data errors.
//!
//! The analysis engines are total functions and never return errors; a
//! missing chart produces a fallback recommendation, not an `Err`. The only
//! fallible surface in this crate is loading size-chart documents at
//! startup, covered by [`ChartError`].

use thiserror::Error;

/// Errors raised while loading size-chart reference data
#[derive(Debug, Error)]
pub enum ChartError {
    /// Chart document could not be parsed as JSON
    #[error("Malformed chart document: {0}")]
    Malformed(#[from] serde_json::Error),

    /// Chart carries no size entries, so it can never produce a match
    #[error("Empty chart for brand '{brand}' category '{category}'")]
    Empty {
        /// Brand label of the offending chart
        brand: String,
        /// Garment category of the offending chart
        category: String,
    },
}
