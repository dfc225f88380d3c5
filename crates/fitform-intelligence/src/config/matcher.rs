// ABOUTME: Size matcher configuration for weighted nearest-size search
// ABOUTME: Distance weights, stretch slope, confidence mapping, and note templates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitform Intelligence

//! Size Chart Matcher Configuration
//!
//! Weights for the per-category distance metric, the stretch-buffer slope,
//! the confidence mapping, fit-note trigger thresholds, and the note
//! message templates.

use fitform_core::constants::anthropometric::{fit_notes, matching};
use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Size Chart Matcher Configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatcherConfig {
    /// Distance-metric weights per dimension
    pub weights: MatchingWeights,
    /// Stretch-buffer and confidence tuning
    pub tuning: MatcherTuning,
    /// Fit-note trigger thresholds
    pub thresholds: NoteThresholds,
    /// Fit-note message templates
    pub messages: MatcherMessages,
}

/// Weights for the per-category weighted distance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchingWeights {
    /// Chest weight for tops, outerwear, and dresses
    pub chest: f64,
    /// Shoulder weight for tops, outerwear, and dresses
    pub shoulder: f64,
    /// Hip weight for bottoms
    pub hips: f64,
    /// Waist weight for bottoms
    pub waist: f64,
}

/// Stretch and confidence tuning values
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatcherTuning {
    /// Stretch-buffer slope per point of stretch factor away from neutral
    pub stretch_slope_per_point: f64,
    /// Stretch factor treated as neutral
    pub neutral_stretch_factor: f64,
    /// Confidence lost per centimeter of cumulative weighted mismatch
    pub confidence_slope_per_cm: f64,
    /// Confidence reported when no chart exists for a (brand, category)
    pub fallback_confidence: f64,
    /// Size label reported when no chart exists
    pub fallback_size: String,
}

/// Thresholds that trigger individual fit notes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoteThresholds {
    /// Chart shoulder excess (cm) that reads as a drop-shoulder cut
    pub drop_shoulder_margin_cm: f64,
    /// Chart sleeve shortfall (cm) that reads as a cropped sleeve
    pub sleeve_crop_margin_cm: f64,
    /// Shoulder slope above which the silhouette note triggers
    pub sharp_shoulder_slope: f64,
    /// Stretch factor above which the comfort note triggers
    pub high_stretch_factor: f64,
}

/// Fit-note message templates
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatcherMessages {
    /// Note emitted when no chart exists for the requested brand/category
    pub chart_missing: String,
    /// Body shoulder wider than the chart shoulder
    pub shoulder_snug: String,
    /// Chart shoulder well beyond the body shoulder
    pub drop_shoulder: String,
    /// Shoulder within the comfortable band
    pub shoulder_aligned: String,
    /// Body chest beyond the chart chest
    pub chest_form_fitting: String,
    /// Chart chest beyond the body chest
    pub chest_comfortable: String,
    /// Body hips beyond the chart hips
    pub hips_tight: String,
    /// Chart hips beyond the body hips
    pub hips_comfortable: String,
    /// Emitted when no other note triggered
    pub generic_positive: String,
    /// Sharp shoulder slope silhouette note
    pub shoulder_slope_structure: String,
    /// Chart sleeve noticeably shorter than the measured arm
    pub sleeve_cropped: String,
    /// Slim fit with the waist at or beyond the chart waist
    pub slim_waist_tailored: String,
    /// Very stretchy fabric comfort note
    pub high_stretch_comfort: String,
}

impl Default for MatchingWeights {
    fn default() -> Self {
        Self {
            chest: matching::CHEST_WEIGHT,
            shoulder: matching::SHOULDER_WEIGHT,
            hips: matching::HIPS_WEIGHT,
            waist: matching::WAIST_WEIGHT,
        }
    }
}

impl Default for MatcherTuning {
    fn default() -> Self {
        Self {
            stretch_slope_per_point: matching::STRETCH_SLOPE_PER_POINT,
            neutral_stretch_factor: matching::NEUTRAL_STRETCH_FACTOR,
            confidence_slope_per_cm: matching::CONFIDENCE_SLOPE_PER_CM,
            fallback_confidence: matching::FALLBACK_CONFIDENCE,
            fallback_size: "M".into(),
        }
    }
}

impl Default for NoteThresholds {
    fn default() -> Self {
        Self {
            drop_shoulder_margin_cm: fit_notes::DROP_SHOULDER_MARGIN_CM,
            sleeve_crop_margin_cm: fit_notes::SLEEVE_CROP_MARGIN_CM,
            sharp_shoulder_slope: fit_notes::SHARP_SHOULDER_SLOPE,
            high_stretch_factor: fit_notes::HIGH_STRETCH_FACTOR,
        }
    }
}

impl Default for MatcherMessages {
    fn default() -> Self {
        Self {
            chart_missing: "Size chart for this brand/category not found. Providing default."
                .into(),
            shoulder_snug: "Shoulders might be slightly snug.".into(),
            drop_shoulder: "Relaxed drop-shoulder look.".into(),
            shoulder_aligned: "Perfect shoulder alignment.".into(),
            chest_form_fitting: "Form-fitting around the chest.".into(),
            chest_comfortable: "Comfortable room in the chest.".into(),
            hips_tight: "Tight fit around the hips.".into(),
            hips_comfortable: "Comfortable hip fit.".into(),
            generic_positive: "A great overall match for your proportions.".into(),
            shoulder_slope_structure:
                "Your shoulders have a sharp slope; this structure will complement your silhouette."
                    .into(),
            sleeve_cropped: "Sleeves might be slightly cropped on your arms.".into(),
            slim_waist_tailored: "The waist area is tailored; expect a defined, close-to-body fit."
                .into(),
            high_stretch_comfort: "High stretch fabric ensures comfort despite the precise fit."
                .into(),
        }
    }
}

impl MatcherConfig {
    /// Validate weights and slopes.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidWeights`] when a weight pair does not
    /// sum to 1, and [`ConfigError::InvalidRange`] for non-positive slopes
    /// or an out-of-range fallback confidence.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let tops_sum = self.weights.chest + self.weights.shoulder;
        if (tops_sum - 1.0).abs() > 1e-9 {
            return Err(ConfigError::InvalidWeights(
                "chest + shoulder weights must sum to 1.0",
            ));
        }
        let bottoms_sum = self.weights.hips + self.weights.waist;
        if (bottoms_sum - 1.0).abs() > 1e-9 {
            return Err(ConfigError::InvalidWeights(
                "hips + waist weights must sum to 1.0",
            ));
        }
        if self.tuning.confidence_slope_per_cm <= 0.0 {
            return Err(ConfigError::InvalidRange(
                "confidence_slope_per_cm must be positive",
            ));
        }
        if self.tuning.stretch_slope_per_point < 0.0 {
            return Err(ConfigError::InvalidRange(
                "stretch_slope_per_point must be non-negative",
            ));
        }
        if !(0.0..=100.0).contains(&self.tuning.fallback_confidence) {
            return Err(ConfigError::InvalidRange(
                "fallback_confidence must be within 0-100",
            ));
        }
        Ok(())
    }
}
