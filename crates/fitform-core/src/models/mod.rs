// ABOUTME: Core data models for the Fitform fit intelligence engine
// ABOUTME: Re-exports pose proportions, measurements, garments, and size charts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitform Intelligence

//! # Data Models
//!
//! Value objects exchanged between the host application and the analysis
//! engines. All of them are plain data: passed in by the caller, returned
//! fresh, never retained by the engine.

/// Normalized pose proportions from the external landmark subsystem
pub mod pose;

/// Estimated real-world body measurements in centimeters
pub mod measurements;

/// Garments, accessories, and the optional style classifier record
pub mod garment;

/// Brand size charts and the read-only chart repository
pub mod size_chart;

pub use garment::{
    AccessoryKind, ClothingItem, ClothingStyleAnalysis, FitType, GarmentCategory, MaterialType,
};
pub use measurements::BodyMeasurements;
pub use pose::PoseProportions;
pub use size_chart::{SizeChart, SizeChartRepository, SizeDimensions, SizeEntry};
