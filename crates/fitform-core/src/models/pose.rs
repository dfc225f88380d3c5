// ABOUTME: Normalized pose proportions supplied by the external landmark subsystem
// ABOUTME: Relative-distance ratios between skeletal landmarks, unitless and non-negative
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitform Intelligence

use serde::{Deserialize, Serialize};

/// Normalized body proportions produced by an external pose-estimation
/// subsystem.
///
/// All fields are unitless relative-distance ratios between skeletal
/// landmarks and are expected to be non-negative. An all-zero record is a
/// legitimate degenerate capture (no usable pose was found in the image)
/// and must flow through the estimator without error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PoseProportions {
    /// Shoulder landmark span
    pub shoulder_width: f64,
    /// Hip landmark span
    pub hip_width: f64,
    /// Waist span, interpolated between shoulder and hip landmarks
    pub waist_width: f64,
    /// Shoulder midpoint to hip midpoint
    pub torso_height: f64,
    /// Hip midpoint to ankle midpoint
    pub leg_length: f64,
    /// Shoulder to wrist
    pub arm_length: f64,
    /// Vertical drop across the shoulder line
    pub shoulder_slope: f64,
    /// Shoulder span over captured body height
    pub overall_ratio: f64,
}

impl PoseProportions {
    /// Span of the captured body: shoulder midpoint to ankle midpoint.
    #[must_use]
    pub fn normalized_body_height(&self) -> f64 {
        self.torso_height + self.leg_length
    }
}
