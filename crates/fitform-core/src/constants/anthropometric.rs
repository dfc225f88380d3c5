// ABOUTME: Anthropometric estimation ratios and fit-matching tuning constants
// ABOUTME: Heuristic values carried from the reference fit model, not fitted data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitform Intelligence

//! Anthropometric constants used by the measurement estimator and size
//! matcher.
//!
//! These values are tuning knobs carried over from an unvalidated heuristic
//! fit model. They are exposed as named constants (and wired into the
//! overridable config defaults) precisely because they are *not* derived
//! from measured anthropometric data.

/// Height and landmark-span calibration
pub mod height {
    /// Fraction of total stature covered by the captured landmark span
    /// (shoulder midpoint to ankle midpoint)
    pub const CAPTURED_SPAN_RATIO: f64 = 0.82;

    /// Normalized body spans below this are treated as a degenerate capture
    pub const MIN_NORMALIZED_SPAN: f64 = 1e-3;

    /// Arm length (shoulder seam to wrist) as a fraction of total stature.
    /// Standard anthropometric ratio, used instead of the noisier arm
    /// landmarks.
    pub const ARM_LENGTH_STATURE_RATIO: f64 = 0.35;
}

/// Circumference-from-width multipliers.
///
/// The torso cross-section is modeled as an ellipse with a fixed
/// width-to-depth ratio. The ratio does not vary with body-shape
/// classification even where the host application has one.
pub mod circumference {
    /// Chest circumference per centimeter of shoulder width
    pub const CHEST_PER_SHOULDER_WIDTH: f64 = 2.3;

    /// Hip circumference per centimeter of hip width
    pub const HIPS_PER_HIP_WIDTH: f64 = 2.4;

    /// Waist circumference per centimeter of hip width, before tapering
    pub const WAIST_PER_HIP_WIDTH: f64 = 2.0;

    /// Waist taper relative to the hip-based elliptical estimate. No direct
    /// waist landmark exists; the waist is assumed 90% of the hip estimate.
    pub const WAIST_TAPER: f64 = 0.9;
}

/// Weighted-distance coefficients for size matching
pub mod matching {
    /// Chest weight for tops, outerwear, and dresses
    pub const CHEST_WEIGHT: f64 = 0.7;

    /// Shoulder weight for tops, outerwear, and dresses
    pub const SHOULDER_WEIGHT: f64 = 0.3;

    /// Hip weight for bottoms
    pub const HIPS_WEIGHT: f64 = 0.6;

    /// Waist weight for bottoms
    pub const WAIST_WEIGHT: f64 = 0.4;

    /// Confidence lost per centimeter of cumulative weighted mismatch.
    /// 0cm mismatch maps to 100% confidence, 50cm or more to 0%.
    pub const CONFIDENCE_SLOPE_PER_CM: f64 = 2.0;

    /// Confidence reported when no chart exists for a (brand, category)
    pub const FALLBACK_CONFIDENCE: f64 = 50.0;

    /// Stretch-buffer slope per point of stretch factor away from neutral.
    /// Factor 1..=10 yields a buffer of roughly -8%..+10%.
    pub const STRETCH_SLOPE_PER_POINT: f64 = 0.02;

    /// Stretch factor treated as neutral (no target adjustment)
    pub const NEUTRAL_STRETCH_FACTOR: f64 = 5.0;
}

/// Fit-zone scoring gaps and color thresholds
pub mod fit_zones {
    /// Garment-over-body gap (cm) at which a slim/regular garment scores
    /// as perfectly fitted
    pub const REGULAR_IDEAL_GAP_CM: f64 = 4.0;

    /// Garment-over-body gap (cm) at which an oversized/relaxed garment
    /// scores as perfectly fitted
    pub const RELAXED_IDEAL_GAP_CM: f64 = 8.0;

    /// Magnitude of the sign-based score for directional-only zones
    /// (shoulders, sleeves)
    pub const DIRECTIONAL_SCORE: f64 = 5.0;

    /// Symmetric clamp applied to every zone score
    pub const SCORE_CLAMP: f64 = 10.0;

    /// Scores above this are rendered red (too tight)
    pub const RED_ABOVE: f64 = 5.0;

    /// Scores above this (up to the red threshold) are rendered yellow
    pub const YELLOW_ABOVE: f64 = 2.0;

    /// Scores below this (down to the blue threshold) are rendered cyan
    pub const CYAN_BELOW: f64 = -2.0;

    /// Scores below this are rendered blue (too loose)
    pub const BLUE_BELOW: f64 = -5.0;
}

/// Fit-note trigger thresholds
pub mod fit_notes {
    /// Chart shoulder must exceed the body shoulder by at least this many
    /// centimeters before the drop-shoulder note triggers
    pub const DROP_SHOULDER_MARGIN_CM: f64 = 4.0;

    /// Chart sleeve running short of the measured arm by at least this many
    /// centimeters triggers the cropped-sleeve note
    pub const SLEEVE_CROP_MARGIN_CM: f64 = 3.0;

    /// Shoulder slopes steeper than this trigger the silhouette note
    pub const SHARP_SHOULDER_SLOPE: f64 = 0.15;

    /// Stretch factors above this trigger the high-stretch comfort note
    pub const HIGH_STRETCH_FACTOR: f64 = 7.0;
}
