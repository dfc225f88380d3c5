// ABOUTME: Measurement estimator converting pose proportions into body measurements
// ABOUTME: Heuristic anthropometric model with defined degenerate-capture behavior
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitform Intelligence

//! Body measurement estimation from normalized pose proportions.
//!
//! The captured landmark span (shoulder midpoint to ankle midpoint) is
//! assumed to cover a fixed fraction of total stature; linear landmarks are
//! scaled by the resulting cm-per-unit factor and circumferences are
//! derived from widths through fixed elliptical multipliers.

use fitform_core::models::{BodyMeasurements, PoseProportions};
use tracing::debug;

use crate::config::{EstimatorConfig, FitIntelligenceConfig};

/// Converts normalized pose proportions and stated height into estimated
/// body measurements in centimeters.
///
/// Pure and deterministic: no I/O, no shared state, total over any
/// non-negative input.
#[derive(Debug, Clone)]
pub struct MeasurementEstimator {
    config: EstimatorConfig,
}

impl Default for MeasurementEstimator {
    fn default() -> Self {
        Self::new()
    }
}

impl MeasurementEstimator {
    /// Create an estimator with the process-wide configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: FitIntelligenceConfig::global().estimator.clone(),
        }
    }

    /// Create an estimator with a custom configuration.
    #[must_use]
    pub const fn with_config(config: EstimatorConfig) -> Self {
        Self { config }
    }

    /// Estimate body measurements from pose proportions and the user's
    /// stated height in centimeters.
    ///
    /// A normalized body span below the configured epsilon is the defined
    /// degenerate-capture case and yields all-zero measurements, never an
    /// error and never NaN or infinity.
    #[must_use]
    pub fn estimate(
        &self,
        proportions: &PoseProportions,
        user_height_cm: f64,
    ) -> BodyMeasurements {
        let normalized_body_height = proportions.normalized_body_height();

        if normalized_body_height < self.config.min_normalized_span {
            debug!(
                normalized_body_height,
                "degenerate capture, returning zeroed measurements"
            );
            return BodyMeasurements::default();
        }

        let effective_height_cm = user_height_cm * self.config.captured_span_ratio;
        let cm_per_unit = effective_height_cm / normalized_body_height;

        let shoulder_width = proportions.shoulder_width * cm_per_unit;
        let hip_width = proportions.hip_width * cm_per_unit;
        let leg_length = proportions.leg_length * cm_per_unit;

        BodyMeasurements {
            shoulder_width,
            chest_circumference: shoulder_width * self.config.chest_per_shoulder_width,
            waist_circumference: hip_width
                * self.config.waist_per_hip_width
                * self.config.waist_taper,
            hip_circumference: hip_width * self.config.hips_per_hip_width,
            arm_length: user_height_cm * self.config.arm_length_stature_ratio,
            leg_length,
        }
    }
}
