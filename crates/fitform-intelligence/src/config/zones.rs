// ABOUTME: Fit zone scorer configuration for tightness scoring and heat colors
// ABOUTME: Ideal gaps, directional score magnitude, clamp, and color thresholds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitform Intelligence

//! Fit Zone Scorer Configuration
//!
//! The ideal garment-over-body gaps per fit type, the clamp applied to
//! every score, and the categorical color thresholds for the heatmap.

use fitform_core::constants::anthropometric::fit_zones;
use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Fit Zone Scorer Configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FitZoneConfig {
    /// Ideal gap (cm) for slim and regular garments
    pub regular_ideal_gap_cm: f64,
    /// Ideal gap (cm) for oversized and relaxed garments
    pub relaxed_ideal_gap_cm: f64,
    /// Magnitude of the sign-based score for directional-only zones
    pub directional_score: f64,
    /// Symmetric clamp applied to every zone score
    pub score_clamp: f64,
    /// Color thresholds over the clamped score
    pub colors: ColorThresholds,
}

/// Thresholds mapping a zone score to a heat color.
///
/// Required ordering: `blue_below < cyan_below <= yellow_above < red_above`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorThresholds {
    /// Scores above this are red (too tight)
    pub red_above: f64,
    /// Scores above this, up to red, are yellow (slightly tight)
    pub yellow_above: f64,
    /// Scores below this, down to blue, are cyan (slightly loose)
    pub cyan_below: f64,
    /// Scores below this are blue (too loose)
    pub blue_below: f64,
}

impl Default for FitZoneConfig {
    fn default() -> Self {
        Self {
            regular_ideal_gap_cm: fit_zones::REGULAR_IDEAL_GAP_CM,
            relaxed_ideal_gap_cm: fit_zones::RELAXED_IDEAL_GAP_CM,
            directional_score: fit_zones::DIRECTIONAL_SCORE,
            score_clamp: fit_zones::SCORE_CLAMP,
            colors: ColorThresholds::default(),
        }
    }
}

impl Default for ColorThresholds {
    fn default() -> Self {
        Self {
            red_above: fit_zones::RED_ABOVE,
            yellow_above: fit_zones::YELLOW_ABOVE,
            cyan_below: fit_zones::CYAN_BELOW,
            blue_below: fit_zones::BLUE_BELOW,
        }
    }
}

impl FitZoneConfig {
    /// Validate gaps, clamp, and threshold ordering.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidRange`] for negative gaps, a
    /// non-positive clamp, or misordered color thresholds.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.regular_ideal_gap_cm < 0.0 || self.relaxed_ideal_gap_cm < 0.0 {
            return Err(ConfigError::InvalidRange(
                "ideal gaps must be non-negative",
            ));
        }
        if self.score_clamp <= 0.0 {
            return Err(ConfigError::InvalidRange("score_clamp must be positive"));
        }
        if self.directional_score < 0.0 || self.directional_score > self.score_clamp {
            return Err(ConfigError::InvalidRange(
                "directional_score must be within the clamp",
            ));
        }
        let c = &self.colors;
        if !(c.blue_below < c.cyan_below
            && c.cyan_below <= c.yellow_above
            && c.yellow_above < c.red_above)
        {
            return Err(ConfigError::InvalidRange(
                "color thresholds must be ordered blue < cyan <= yellow < red",
            ));
        }
        Ok(())
    }
}
