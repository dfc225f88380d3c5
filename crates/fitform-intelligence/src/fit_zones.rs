// ABOUTME: Fit zone scorer producing per-region tightness scores and heat colors
// ABOUTME: Continuous gap scoring for girth zones, sign-based for directional zones
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitform Intelligence

//! Per-zone fit scoring for the tightness/looseness heatmap.
//!
//! Girth zones (chest, waist, hips) use a continuous score around an ideal
//! garment-over-body gap; shoulders and sleeves lack a symmetric dimension
//! pair and use a fixed sign-based score instead. Zones without usable
//! chart data are omitted, never faked. Output order is a contract:
//! chest, shoulders, arms, waist, hips.

use fitform_core::models::{BodyMeasurements, FitType, GarmentCategory, SizeDimensions};
use serde::{Deserialize, Serialize};

use crate::config::{FitIntelligenceConfig, FitZoneConfig};

/// Body region covered by the heatmap
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum FitZoneKind {
    /// Chest girth
    Chest,
    /// Waist girth
    Waist,
    /// Hip girth
    Hips,
    /// Shoulder line
    Shoulders,
    /// Sleeves
    Arms,
    /// Thigh girth (data-model only; not scored)
    Thighs,
    /// Garment length (data-model only; not scored)
    Length,
}

/// Categorical heatmap color
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum HeatColor {
    /// Too tight
    Red,
    /// Slightly tight
    Yellow,
    /// Within the comfortable band
    Green,
    /// Slightly loose
    Cyan,
    /// Too loose
    Blue,
}

/// One scored body region.
///
/// Positive scores are tight, negative loose, zero ideal; the score is
/// clamped to the configured symmetric range.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FitZone {
    /// Body region
    pub zone: FitZoneKind,
    /// Clamped tightness score; positive = tight
    pub score: f64,
    /// Categorical heat color derived from the score
    pub color: HeatColor,
    /// Short human-readable callout; absent when the fit is ideal
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Scores the matched size's chart dimensions against body measurements,
/// zone by zone.
#[derive(Debug, Clone)]
pub struct FitZoneScorer {
    config: FitZoneConfig,
}

impl Default for FitZoneScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl FitZoneScorer {
    /// Create a scorer with the process-wide configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: FitIntelligenceConfig::global().fit_zones.clone(),
        }
    }

    /// Create a scorer with a custom configuration.
    #[must_use]
    pub const fn with_config(config: FitZoneConfig) -> Self {
        Self { config }
    }

    /// Score every zone the chart carries data for.
    ///
    /// Upper-body zones are produced for tops, outerwear, and dresses;
    /// waist and hips for bottoms. Accessories have no fit zones.
    #[must_use]
    pub fn score_zones(
        &self,
        dimensions: &SizeDimensions,
        body: &BodyMeasurements,
        category: GarmentCategory,
        fit_type: FitType,
    ) -> Vec<FitZone> {
        let ideal_gap = if fit_type.is_loose_cut() {
            self.config.relaxed_ideal_gap_cm
        } else {
            self.config.regular_ideal_gap_cm
        };

        let mut zones = Vec::new();

        match category {
            GarmentCategory::Tops | GarmentCategory::Outerwear | GarmentCategory::Dresses => {
                if let Some(chest) = dimensions.chest {
                    zones.push(self.girth_zone(
                        FitZoneKind::Chest,
                        chest,
                        body.chest_circumference,
                        ideal_gap,
                    ));
                }
                if let Some(shoulder) = dimensions.shoulder {
                    zones.push(self.directional_zone(
                        FitZoneKind::Shoulders,
                        body.shoulder_width,
                        shoulder,
                    ));
                }
                if let Some(sleeve) = dimensions.sleeve_length {
                    zones.push(self.directional_zone(FitZoneKind::Arms, body.arm_length, sleeve));
                }
            }
            GarmentCategory::Bottoms => {
                if let Some(waist) = dimensions.waist {
                    zones.push(self.girth_zone(
                        FitZoneKind::Waist,
                        waist,
                        body.waist_circumference,
                        ideal_gap,
                    ));
                }
                if let Some(hips) = dimensions.hips {
                    zones.push(self.girth_zone(
                        FitZoneKind::Hips,
                        hips,
                        body.hip_circumference,
                        ideal_gap,
                    ));
                }
            }
            GarmentCategory::Accessories => {}
        }

        zones
    }

    /// Continuous zone: the garment is ideally fitted when it exceeds the
    /// body by the ideal gap; every centimeter short of that reads tight,
    /// every centimeter beyond reads loose.
    fn girth_zone(
        &self,
        zone: FitZoneKind,
        garment_dim: f64,
        body_dim: f64,
        ideal_gap: f64,
    ) -> FitZone {
        let clamp = self.config.score_clamp;
        let score = (-((garment_dim - body_dim) - ideal_gap)).clamp(-clamp, clamp);
        self.finish_zone(zone, score)
    }

    /// Directional zone: no symmetric dimension pair exists, so only the
    /// sign of the comparison is trusted.
    fn directional_zone(&self, zone: FitZoneKind, body_dim: f64, garment_dim: f64) -> FitZone {
        let magnitude = self.config.directional_score;
        let score = if body_dim > garment_dim {
            magnitude
        } else if body_dim < garment_dim {
            -magnitude
        } else {
            0.0
        };
        self.finish_zone(zone, score)
    }

    fn finish_zone(&self, zone: FitZoneKind, score: f64) -> FitZone {
        let color = self.color_for(score);
        let message = zone_message(zone, color);
        FitZone {
            zone,
            score,
            color,
            message,
        }
    }

    fn color_for(&self, score: f64) -> HeatColor {
        let c = &self.config.colors;
        if score > c.red_above {
            HeatColor::Red
        } else if score > c.yellow_above {
            HeatColor::Yellow
        } else if score < c.blue_below {
            HeatColor::Blue
        } else if score < c.cyan_below {
            HeatColor::Cyan
        } else {
            HeatColor::Green
        }
    }
}

fn zone_message(zone: FitZoneKind, color: HeatColor) -> Option<String> {
    let region = match zone {
        FitZoneKind::Chest => "the chest",
        FitZoneKind::Waist => "the waist",
        FitZoneKind::Hips => "the hips",
        FitZoneKind::Shoulders => "the shoulders",
        FitZoneKind::Arms => "the sleeves",
        FitZoneKind::Thighs => "the thighs",
        FitZoneKind::Length => "the length",
    };
    let reading = match color {
        HeatColor::Red => "very tight",
        HeatColor::Yellow => "slightly tight",
        HeatColor::Cyan => "slightly loose",
        HeatColor::Blue => "very loose",
        HeatColor::Green => return None,
    };
    Some(format!("Runs {reading} at {region}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body() -> BodyMeasurements {
        BodyMeasurements {
            shoulder_width: 46.0,
            chest_circumference: 100.0,
            waist_circumference: 80.0,
            hip_circumference: 96.0,
            arm_length: 61.0,
            leg_length: 80.0,
        }
    }

    fn scorer() -> FitZoneScorer {
        FitZoneScorer::with_config(FitZoneConfig::default())
    }

    #[test]
    fn perfect_gap_scores_zero_and_green() {
        // garment chest 104 over body 100 is exactly the regular 4cm gap
        let dims = SizeDimensions {
            chest: Some(104.0),
            ..SizeDimensions::default()
        };
        let zones = scorer().score_zones(&dims, &body(), GarmentCategory::Tops, FitType::Regular);
        assert_eq!(zones.len(), 1);
        assert_eq!(zones[0].zone, FitZoneKind::Chest);
        assert!((zones[0].score).abs() < f64::EPSILON);
        assert_eq!(zones[0].color, HeatColor::Green);
        assert!(zones[0].message.is_none());
    }

    #[test]
    fn tight_chest_scores_positive_red() {
        // garment chest 90 on body 100: 14cm short of the ideal -> clamped +10
        let dims = SizeDimensions {
            chest: Some(90.0),
            ..SizeDimensions::default()
        };
        let zones = scorer().score_zones(&dims, &body(), GarmentCategory::Tops, FitType::Regular);
        assert!((zones[0].score - 10.0).abs() < f64::EPSILON);
        assert_eq!(zones[0].color, HeatColor::Red);
        assert!(zones[0].message.as_deref().unwrap().contains("tight"));
    }

    #[test]
    fn oversized_fit_moves_the_ideal_gap() {
        // 108 over 100 is ideal for a relaxed cut (8cm), slightly loose for regular
        let dims = SizeDimensions {
            chest: Some(108.0),
            ..SizeDimensions::default()
        };
        let relaxed =
            scorer().score_zones(&dims, &body(), GarmentCategory::Tops, FitType::Oversized);
        assert!((relaxed[0].score).abs() < f64::EPSILON);

        let regular =
            scorer().score_zones(&dims, &body(), GarmentCategory::Tops, FitType::Regular);
        assert!((regular[0].score + 4.0).abs() < f64::EPSILON);
        assert_eq!(regular[0].color, HeatColor::Cyan);
    }

    #[test]
    fn directional_shoulder_scores_plus_minus_five() {
        let narrow = SizeDimensions {
            shoulder: Some(44.0),
            ..SizeDimensions::default()
        };
        let zones = scorer().score_zones(&narrow, &body(), GarmentCategory::Tops, FitType::Regular);
        assert_eq!(zones[0].zone, FitZoneKind::Shoulders);
        assert!((zones[0].score - 5.0).abs() < f64::EPSILON);
        assert_eq!(zones[0].color, HeatColor::Yellow);

        let wide = SizeDimensions {
            shoulder: Some(50.0),
            ..SizeDimensions::default()
        };
        let zones = scorer().score_zones(&wide, &body(), GarmentCategory::Tops, FitType::Regular);
        assert!((zones[0].score + 5.0).abs() < f64::EPSILON);
        assert_eq!(zones[0].color, HeatColor::Cyan);
    }

    #[test]
    fn zone_order_is_chest_shoulders_arms() {
        let dims = SizeDimensions {
            chest: Some(104.0),
            shoulder: Some(46.0),
            sleeve_length: Some(62.0),
            ..SizeDimensions::default()
        };
        let zones = scorer().score_zones(&dims, &body(), GarmentCategory::Tops, FitType::Regular);
        let kinds: Vec<FitZoneKind> = zones.iter().map(|z| z.zone).collect();
        assert_eq!(
            kinds,
            [FitZoneKind::Chest, FitZoneKind::Shoulders, FitZoneKind::Arms]
        );
    }

    #[test]
    fn bottoms_score_waist_then_hips() {
        let dims = SizeDimensions {
            waist: Some(84.0),
            hips: Some(100.0),
            ..SizeDimensions::default()
        };
        let zones =
            scorer().score_zones(&dims, &body(), GarmentCategory::Bottoms, FitType::Regular);
        let kinds: Vec<FitZoneKind> = zones.iter().map(|z| z.zone).collect();
        assert_eq!(kinds, [FitZoneKind::Waist, FitZoneKind::Hips]);
    }

    #[test]
    fn missing_dimensions_are_omitted_not_faked() {
        let dims = SizeDimensions::default();
        let zones = scorer().score_zones(&dims, &body(), GarmentCategory::Tops, FitType::Regular);
        assert!(zones.is_empty());
    }

    #[test]
    fn accessories_have_no_fit_zones() {
        let dims = SizeDimensions {
            chest: Some(100.0),
            ..SizeDimensions::default()
        };
        let zones =
            scorer().score_zones(&dims, &body(), GarmentCategory::Accessories, FitType::Regular);
        assert!(zones.is_empty());
    }
}
