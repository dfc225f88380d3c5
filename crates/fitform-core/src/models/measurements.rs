// ABOUTME: Estimated real-world body measurements derived from pose proportions
// ABOUTME: Centimeter lengths and circumferences, computed fresh per analysis
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitform Intelligence

use serde::{Deserialize, Serialize};

/// Estimated body measurements in centimeters.
///
/// Derived from [`PoseProportions`](super::PoseProportions) and the user's
/// stated height. Ephemeral by contract: computed fresh per analysis and
/// never persisted. All fields are non-negative; an all-zero record is the
/// defined output for a degenerate capture.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BodyMeasurements {
    /// Shoulder width (linear)
    pub shoulder_width: f64,
    /// Chest circumference
    pub chest_circumference: f64,
    /// Waist circumference
    pub waist_circumference: f64,
    /// Hip circumference
    pub hip_circumference: f64,
    /// Shoulder seam to wrist
    pub arm_length: f64,
    /// Hip to ankle
    pub leg_length: f64,
}

impl BodyMeasurements {
    /// True when every measurement is zero, the output produced for a
    /// degenerate capture. Downstream consumers see this as very low
    /// confidence rather than an error.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.shoulder_width == 0.0
            && self.chest_circumference == 0.0
            && self.waist_circumference == 0.0
            && self.hip_circumference == 0.0
            && self.arm_length == 0.0
            && self.leg_length == 0.0
    }
}
