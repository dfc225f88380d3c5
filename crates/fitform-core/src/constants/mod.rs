// ABOUTME: Constants module for the Fitform foundation crate
// ABOUTME: Re-exports anthropometric ratios and the layering z-index table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitform Intelligence

//! Application-wide constants organized by domain.

/// Anthropometric estimation ratios and fit-matching tuning values
pub mod anthropometric;

/// Compositing z-index table for garment and accessory layers
pub mod layering;
