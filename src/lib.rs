// ABOUTME: Main library entry point for the Fitform fit intelligence engine
// ABOUTME: Re-exports the foundation and analysis crates under one import surface
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitform Intelligence

#![deny(unsafe_code)]

//! # Fitform
//!
//! A stateless fit intelligence engine for virtual try-on: estimated body
//! measurements from pose proportions, brand-chart size recommendations
//! with confidence, per-zone fit heatmaps, and deterministic garment
//! layering.
//!
//! This crate is a facade over the workspace crates:
//!
//! - `fitform-core`: domain models, the size-chart repository, and the
//!   anthropometric/layering constant tables
//! - `fitform-intelligence`: the analysis engines and their configuration
//!
//! ```
//! use fitform::{FitAnalyzer, GarmentCategory, PoseProportions, SizeChartRepository};
//!
//! let repository = SizeChartRepository::builtin();
//! let analyzer = FitAnalyzer::new();
//! let proportions = PoseProportions {
//!     shoulder_width: 0.5,
//!     hip_width: 0.5,
//!     waist_width: 0.4,
//!     torso_height: 0.5,
//!     leg_length: 0.5,
//!     arm_length: 0.6,
//!     shoulder_slope: 0.1,
//!     overall_ratio: 0.5,
//! };
//! let recommendation = analyzer.analyze(
//!     &repository,
//!     &proportions,
//!     175.0,
//!     "ZARA",
//!     GarmentCategory::Tops,
//!     None,
//! );
//! assert!(!recommendation.fit_notes.is_empty());
//! ```

// Re-export the foundation crate's modules for path-based access.
pub use fitform_core::{constants, errors, models};

// Re-export the analysis modules.
pub use fitform_intelligence::{
    analyzer, config, fit_zones, layering, measurement_estimator, size_matcher,
};

// Flat re-exports of the types most hosts need.
pub use fitform_core::{
    AccessoryKind, BodyMeasurements, ChartError, ClothingItem, ClothingStyleAnalysis, FitType,
    GarmentCategory, MaterialType, PoseProportions, SizeChart, SizeChartRepository,
    SizeDimensions, SizeEntry,
};
pub use fitform_intelligence::{
    CompositeLayer, ConfigError, FitAnalyzer, FitIntelligenceConfig, FitZone, FitZoneKind,
    FitZoneScorer, HeatColor, LayeredComposition, LayerInteraction, LayeringEngine,
    MeasurementEstimator, SizeChartMatcher, SizeRecommendation,
};
