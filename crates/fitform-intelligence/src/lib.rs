// ABOUTME: Fit analysis engines for the Fitform platform
// ABOUTME: Measurement estimation, size matching, fit zones, and layering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitform Intelligence

#![deny(unsafe_code)]

//! # Fitform Intelligence
//!
//! Pure computational engines turning noisy, sensor-derived body
//! proportions and garment metadata into actionable fit results. Every
//! operation is synchronous, side-effect-free, and total: incomplete
//! inputs degrade to structured best-effort results instead of errors.
//!
//! ## Engines
//!
//! - [`MeasurementEstimator`]: normalized pose proportions + stated height
//!   → estimated body measurements in centimeters
//! - [`SizeChartMatcher`]: measurements + brand chart → labeled size with
//!   confidence and fit notes
//! - [`FitZoneScorer`]: matched size vs. body → per-zone tightness heatmap
//! - [`LayeringEngine`]: selected item set → deterministic paint order
//! - [`FitAnalyzer`]: the estimator → matcher → scorer pipeline in one call
//!
//! Hosts may invoke these from any concurrency context; there is no shared
//! mutable state beyond the read-only configuration and chart tables
//! established at startup.

/// End-to-end analysis pipeline
pub mod analyzer;

/// Engine configuration: thresholds, weights, templates, env overrides
pub mod config;

/// Per-zone tightness scoring and heat colors
pub mod fit_zones;

/// Compositing order, masks, and outfit validation
pub mod layering;

/// Body measurement estimation from pose proportions
pub mod measurement_estimator;

/// Weighted nearest-size matching over sparse charts
pub mod size_matcher;

pub use analyzer::FitAnalyzer;
pub use config::{ConfigError, FitIntelligenceConfig};
pub use fit_zones::{FitZone, FitZoneKind, FitZoneScorer, HeatColor};
pub use layering::{CompositeLayer, LayeredComposition, LayerInteraction, LayeringEngine};
pub use measurement_estimator::MeasurementEstimator;
pub use size_matcher::{SizeChartMatcher, SizeRecommendation};
