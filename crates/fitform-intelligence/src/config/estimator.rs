// ABOUTME: Measurement estimator configuration for body measurement derivation
// ABOUTME: Calibration ratios and circumference multipliers with heuristic defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitform Intelligence

//! Measurement Estimator Configuration
//!
//! Calibration constants for converting normalized pose proportions into
//! centimeter measurements. Defaults come from the shared anthropometric
//! constant tables; all of them are heuristic tuning knobs, not fitted
//! anthropometric data.

use fitform_core::constants::anthropometric::{circumference, height};
use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Measurement Estimator Configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimatorConfig {
    /// Fraction of total stature covered by the captured landmark span
    pub captured_span_ratio: f64,
    /// Normalized spans below this are treated as a degenerate capture
    pub min_normalized_span: f64,
    /// Chest circumference per centimeter of shoulder width
    pub chest_per_shoulder_width: f64,
    /// Hip circumference per centimeter of hip width
    pub hips_per_hip_width: f64,
    /// Waist circumference per centimeter of hip width, before tapering
    pub waist_per_hip_width: f64,
    /// Waist taper relative to the hip-based elliptical estimate.
    ///
    /// The cross-section ratio is fixed: it does not consult any
    /// body-shape classification the host application may hold.
    pub waist_taper: f64,
    /// Arm length as a fraction of total stature
    pub arm_length_stature_ratio: f64,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            captured_span_ratio: height::CAPTURED_SPAN_RATIO,
            min_normalized_span: height::MIN_NORMALIZED_SPAN,
            chest_per_shoulder_width: circumference::CHEST_PER_SHOULDER_WIDTH,
            hips_per_hip_width: circumference::HIPS_PER_HIP_WIDTH,
            waist_per_hip_width: circumference::WAIST_PER_HIP_WIDTH,
            waist_taper: circumference::WAIST_TAPER,
            arm_length_stature_ratio: height::ARM_LENGTH_STATURE_RATIO,
        }
    }
}

impl EstimatorConfig {
    /// Validate ranges.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidRange`] when a ratio is non-positive
    /// or a span threshold is negative.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.captured_span_ratio <= 0.0 || self.captured_span_ratio > 1.0 {
            return Err(ConfigError::InvalidRange(
                "captured_span_ratio must be in (0, 1]",
            ));
        }
        if self.min_normalized_span < 0.0 {
            return Err(ConfigError::InvalidRange(
                "min_normalized_span must be non-negative",
            ));
        }
        if self.chest_per_shoulder_width <= 0.0
            || self.hips_per_hip_width <= 0.0
            || self.waist_per_hip_width <= 0.0
            || self.waist_taper <= 0.0
            || self.arm_length_stature_ratio <= 0.0
        {
            return Err(ConfigError::InvalidRange(
                "circumference and arm ratios must be positive",
            ));
        }
        Ok(())
    }
}
