// ABOUTME: Core types and reference tables for the Fitform fit intelligence engine
// ABOUTME: Foundation crate with domain models, size-chart repository, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitform Intelligence

#![deny(unsafe_code)]

//! # Fitform Core
//!
//! Foundation crate providing shared types and reference tables for the
//! Fitform fit intelligence engine. This crate is designed to change
//! infrequently, enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Reference-data errors (`ChartError`) raised at the chart
//!   loading boundary; the analysis paths themselves never error
//! - **constants**: Anthropometric ratios and the layering z-index table,
//!   organized by domain
//! - **models**: Domain value objects (`PoseProportions`, `BodyMeasurements`,
//!   `ClothingItem`, size charts)

/// Reference-data error types raised when loading size charts
pub mod errors;

/// Anthropometric and layering constants organized by domain
pub mod constants;

/// Core data models (pose proportions, measurements, garments, size charts)
pub mod models;

pub use errors::ChartError;
pub use models::{
    AccessoryKind, BodyMeasurements, ClothingItem, ClothingStyleAnalysis, FitType,
    GarmentCategory, MaterialType, PoseProportions, SizeChart, SizeChartRepository,
    SizeDimensions, SizeEntry,
};
