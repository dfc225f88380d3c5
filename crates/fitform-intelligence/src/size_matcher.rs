// ABOUTME: Size chart matcher performing weighted nearest-size search
// ABOUTME: Stretch-aware target adjustment, clamped confidence, and fit notes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitform Intelligence

//! Weighted nearest-size matching over sparse brand charts.
//!
//! For every labeled size the matcher computes a weighted centimeter
//! distance between chart dimensions and the target body measurements,
//! picks the minimum (ties keep the chart's first, smallest entry), and
//! maps the residual distance to a 0-100 confidence. Elastic garments
//! shrink the *target* chest for lookup rather than inflating the chart.
//! Every path is total: a missing chart degrades to a fallback
//! recommendation, never an error.

use fitform_core::models::{
    BodyMeasurements, ClothingStyleAnalysis, FitType, GarmentCategory, SizeChartRepository,
    SizeDimensions, SizeEntry,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::{FitIntelligenceConfig, MatcherConfig};
use crate::fit_zones::{FitZone, FitZoneScorer};

/// A size recommendation with confidence, fit notes, and the per-zone
/// heatmap for the selected size.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SizeRecommendation {
    /// Chart label of the best-fitting size, or the fallback label
    pub recommended_size: String,
    /// Match confidence, clamped to 0-100
    pub confidence: f64,
    /// Ordered fit observations; never empty
    pub fit_notes: Vec<String>,
    /// Per-zone tightness heatmap for the selected size
    pub heatmap_data: Vec<FitZone>,
    /// The body measurements the recommendation was computed from
    pub estimated_measurements: BodyMeasurements,
}

/// Finds the best-fitting labeled size from a brand/category chart.
#[derive(Debug, Clone)]
pub struct SizeChartMatcher {
    config: MatcherConfig,
    zone_scorer: FitZoneScorer,
}

impl Default for SizeChartMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl SizeChartMatcher {
    /// Create a matcher with the process-wide configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: FitIntelligenceConfig::global().matcher.clone(),
            zone_scorer: FitZoneScorer::new(),
        }
    }

    /// Create a matcher with custom matcher and zone configurations.
    #[must_use]
    pub const fn with_config(config: MatcherConfig, zone_scorer: FitZoneScorer) -> Self {
        Self {
            config,
            zone_scorer,
        }
    }

    /// Recommend a size for the given measurements.
    ///
    /// An unknown (brand, category) pair is an expected case and produces
    /// the configured fallback recommendation with an explanatory note.
    /// Absence of the style analysis is treated as a regular fit with
    /// neutral stretch.
    #[must_use]
    pub fn recommend(
        &self,
        repository: &SizeChartRepository,
        brand: &str,
        category: GarmentCategory,
        measurements: &BodyMeasurements,
        style: Option<&ClothingStyleAnalysis>,
    ) -> SizeRecommendation {
        let Some(chart) = repository.get(brand, category) else {
            warn!(brand, ?category, "no size chart, using fallback recommendation");
            return self.fallback_recommendation(measurements);
        };

        let target_chest = self.effective_target_chest(measurements.chest_circumference, style);

        let mut best: Option<(&SizeEntry, f64)> = None;
        for entry in &chart.entries {
            let distance =
                self.weighted_distance(category, &entry.dimensions, measurements, target_chest);
            // Strict less-than keeps the earliest (smallest) entry on ties.
            if best.is_none_or(|(_, d)| distance < d) {
                best = Some((entry, distance));
            }
        }

        let Some((best_entry, min_distance)) = best else {
            warn!(brand, ?category, "chart has no entries, using fallback");
            return self.fallback_recommendation(measurements);
        };

        let confidence =
            (100.0 - min_distance * self.config.tuning.confidence_slope_per_cm).clamp(0.0, 100.0);

        let fit_notes = self.build_fit_notes(category, &best_entry.dimensions, measurements, style);

        let fit_type = style.map_or(FitType::Regular, |s| s.fit_type);
        let heatmap_data =
            self.zone_scorer
                .score_zones(&best_entry.dimensions, measurements, category, fit_type);

        debug!(
            brand,
            ?category,
            size = %best_entry.label,
            min_distance,
            confidence,
            "size match complete"
        );

        SizeRecommendation {
            recommended_size: best_entry.label.clone(),
            confidence,
            fit_notes,
            heatmap_data,
            estimated_measurements: *measurements,
        }
    }

    /// The chest measurement used for chart lookup after stretch
    /// adjustment.
    ///
    /// An elastic garment can accommodate a larger body at a nominally
    /// smaller size, so a stretch factor above neutral shrinks the target;
    /// below neutral inflates it. Monotone: the target never increases as
    /// the stretch factor rises.
    #[must_use]
    pub fn effective_target_chest(
        &self,
        chest_circumference: f64,
        style: Option<&ClothingStyleAnalysis>,
    ) -> f64 {
        style.map_or(chest_circumference, |analysis| {
            let stretch_buffer = (analysis.stretch_factor
                - self.config.tuning.neutral_stretch_factor)
                * self.config.tuning.stretch_slope_per_point;
            chest_circumference * (1.0 - stretch_buffer)
        })
    }

    fn weighted_distance(
        &self,
        category: GarmentCategory,
        dims: &SizeDimensions,
        measurements: &BodyMeasurements,
        target_chest: f64,
    ) -> f64 {
        let w = &self.config.weights;
        match category {
            GarmentCategory::Tops | GarmentCategory::Outerwear | GarmentCategory::Dresses => {
                let chest_diff = dims.chest.map_or(0.0, |c| (c - target_chest).abs());
                let shoulder_diff = dims
                    .shoulder
                    .map_or(0.0, |s| (s - measurements.shoulder_width).abs());
                chest_diff * w.chest + shoulder_diff * w.shoulder
            }
            GarmentCategory::Bottoms => match (dims.hips, dims.waist) {
                (Some(hips), Some(waist)) => {
                    let hip_diff = (hips - measurements.hip_circumference).abs();
                    let waist_diff = (waist - measurements.waist_circumference).abs();
                    hip_diff * w.hips + waist_diff * w.waist
                }
                (Some(hips), None) => (hips - measurements.hip_circumference).abs(),
                (None, Some(waist)) => (waist - measurements.waist_circumference).abs(),
                // Neither hip nor waist data: fall back to a chest-based
                // comparison so the computation still yields a distance.
                (None, None) => dims.chest.map_or(0.0, |c| (c - target_chest).abs()),
            },
            GarmentCategory::Accessories => 0.0,
        }
    }

    fn build_fit_notes(
        &self,
        category: GarmentCategory,
        dims: &SizeDimensions,
        measurements: &BodyMeasurements,
        style: Option<&ClothingStyleAnalysis>,
    ) -> Vec<String> {
        let msgs = &self.config.messages;
        let thresholds = &self.config.thresholds;
        let mut notes = Vec::new();

        match category {
            GarmentCategory::Tops | GarmentCategory::Outerwear => {
                if let Some(shoulder) = dims.shoulder {
                    if measurements.shoulder_width > shoulder {
                        notes.push(msgs.shoulder_snug.clone());
                    } else if measurements.shoulder_width
                        < shoulder - thresholds.drop_shoulder_margin_cm
                    {
                        notes.push(msgs.drop_shoulder.clone());
                    } else {
                        notes.push(msgs.shoulder_aligned.clone());
                    }
                }

                if let Some(chest) = dims.chest {
                    if measurements.chest_circumference > chest {
                        notes.push(msgs.chest_form_fitting.clone());
                    } else {
                        notes.push(msgs.chest_comfortable.clone());
                    }
                }

                if let Some(sleeve) = dims.sleeve_length {
                    if measurements.arm_length > sleeve + thresholds.sleeve_crop_margin_cm {
                        notes.push(msgs.sleeve_cropped.clone());
                    }
                }
            }
            GarmentCategory::Bottoms => {
                if let Some(hips) = dims.hips {
                    if measurements.hip_circumference > hips {
                        notes.push(msgs.hips_tight.clone());
                    } else {
                        notes.push(msgs.hips_comfortable.clone());
                    }
                }
            }
            GarmentCategory::Dresses | GarmentCategory::Accessories => {}
        }

        if let Some(analysis) = style {
            if analysis.fit_type == FitType::Slim {
                if let Some(waist) = dims.waist {
                    if measurements.waist_circumference > waist {
                        notes.push(msgs.slim_waist_tailored.clone());
                    }
                }
            }
            if analysis.stretch_factor > thresholds.high_stretch_factor {
                notes.push(msgs.high_stretch_comfort.clone());
            }
        }

        if notes.is_empty() {
            notes.push(msgs.generic_positive.clone());
        }
        notes
    }

    fn fallback_recommendation(&self, measurements: &BodyMeasurements) -> SizeRecommendation {
        SizeRecommendation {
            recommended_size: self.config.tuning.fallback_size.clone(),
            confidence: self.config.tuning.fallback_confidence,
            fit_notes: vec![self.config.messages.chart_missing.clone()],
            heatmap_data: Vec::new(),
            estimated_measurements: *measurements,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FitZoneConfig;

    fn matcher() -> SizeChartMatcher {
        SizeChartMatcher::with_config(
            MatcherConfig::default(),
            FitZoneScorer::with_config(FitZoneConfig::default()),
        )
    }

    fn body() -> BodyMeasurements {
        BodyMeasurements {
            shoulder_width: 46.0,
            chest_circumference: 104.0,
            waist_circumference: 80.0,
            hip_circumference: 96.0,
            arm_length: 61.0,
            leg_length: 80.0,
        }
    }

    #[test]
    fn exact_chart_row_matches_with_full_confidence() {
        let repo = SizeChartRepository::builtin();
        // body chest 104 / shoulder 46 is exactly ZARA tops "M"
        let rec = matcher().recommend(&repo, "ZARA", GarmentCategory::Tops, &body(), None);
        assert_eq!(rec.recommended_size, "M");
        assert!((rec.confidence - 100.0).abs() < f64::EPSILON);
        assert!(!rec.fit_notes.is_empty());
        assert!(!rec.heatmap_data.is_empty());
    }

    #[test]
    fn unknown_brand_falls_back_to_default() {
        let repo = SizeChartRepository::builtin();
        let rec = matcher().recommend(&repo, "UnknownBrand", GarmentCategory::Tops, &body(), None);
        assert_eq!(rec.recommended_size, "M");
        assert!((rec.confidence - 50.0).abs() < f64::EPSILON);
        assert!(rec.fit_notes[0].contains("not found"));
        assert!(rec.heatmap_data.is_empty());
    }

    #[test]
    fn recommended_size_is_always_a_chart_label() {
        let repo = SizeChartRepository::builtin();
        let rec = matcher().recommend(&repo, "UNIQLO", GarmentCategory::Tops, &body(), None);
        let chart = repo.get("UNIQLO", GarmentCategory::Tops).unwrap();
        assert!(chart.entries.iter().any(|e| e.label == rec.recommended_size));
    }

    #[test]
    fn ties_resolve_to_the_first_listed_size() {
        let m = matcher();
        let mut repo = SizeChartRepository::empty();
        // Two sizes equidistant from a 100cm chest: 98 and 102.
        let json = r#"[{"brand":"Tie","category":"tops","entries":[
            {"label":"A","dimensions":{"chest":98.0}},
            {"label":"B","dimensions":{"chest":102.0}}]}]"#;
        repo.extend_from_json(json).unwrap();
        let measurements = BodyMeasurements {
            chest_circumference: 100.0,
            ..BodyMeasurements::default()
        };
        let rec = m.recommend(&repo, "Tie", GarmentCategory::Tops, &measurements, None);
        assert_eq!(rec.recommended_size, "A");
    }

    #[test]
    fn higher_stretch_never_raises_the_target_chest() {
        let m = matcher();
        let mut previous = f64::INFINITY;
        for factor in 1..=10 {
            let style = ClothingStyleAnalysis {
                stretch_factor: f64::from(factor),
                ..ClothingStyleAnalysis::default()
            };
            let target = m.effective_target_chest(100.0, Some(&style));
            assert!(target <= previous);
            previous = target;
        }
    }

    #[test]
    fn neutral_stretch_leaves_the_target_unchanged() {
        let m = matcher();
        let style = ClothingStyleAnalysis::default();
        assert!((m.effective_target_chest(100.0, Some(&style)) - 100.0).abs() < 1e-9);
        assert!((m.effective_target_chest(100.0, None) - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn bottoms_fall_back_through_hip_waist_chest() {
        let m = matcher();
        let measurements = BodyMeasurements {
            waist_circumference: 80.0,
            hip_circumference: 98.0,
            chest_circumference: 104.0,
            ..BodyMeasurements::default()
        };

        // Waist-only chart still matches on waist alone.
        let mut repo = SizeChartRepository::empty();
        let json = r#"[{"brand":"W","category":"bottoms","entries":[
            {"label":"S","dimensions":{"waist":76.0}},
            {"label":"M","dimensions":{"waist":80.0}}]}]"#;
        repo.extend_from_json(json).unwrap();
        let rec = m.recommend(&repo, "W", GarmentCategory::Bottoms, &measurements, None);
        assert_eq!(rec.recommended_size, "M");
        assert!((rec.confidence - 100.0).abs() < f64::EPSILON);

        // No hip/waist data at all: chest comparison keeps the function total.
        let mut repo = SizeChartRepository::empty();
        let json = r#"[{"brand":"C","category":"bottoms","entries":[
            {"label":"S","dimensions":{"chest":96.0}},
            {"label":"M","dimensions":{"chest":104.0}}]}]"#;
        repo.extend_from_json(json).unwrap();
        let rec = m.recommend(&repo, "C", GarmentCategory::Bottoms, &measurements, None);
        assert_eq!(rec.recommended_size, "M");
    }

    #[test]
    fn confidence_decreases_with_distance() {
        let m = matcher();
        let repo = SizeChartRepository::builtin();

        let near = m.recommend(&repo, "ZARA", GarmentCategory::Tops, &body(), None);

        let far_body = BodyMeasurements {
            chest_circumference: 140.0,
            shoulder_width: 56.0,
            ..body()
        };
        let far = m.recommend(&repo, "ZARA", GarmentCategory::Tops, &far_body, None);

        assert!(far.confidence < near.confidence);
        assert!((0.0..=100.0).contains(&far.confidence));
    }

    #[test]
    fn degenerate_measurements_still_produce_a_recommendation() {
        let m = matcher();
        let repo = SizeChartRepository::builtin();
        let rec = m.recommend(
            &repo,
            "ZARA",
            GarmentCategory::Tops,
            &BodyMeasurements::default(),
            None,
        );
        // Distance from a zero body is large; confidence bottoms out but
        // the result is still structured and in range.
        assert!((0.0..=100.0).contains(&rec.confidence));
        assert!(!rec.fit_notes.is_empty());
        assert_eq!(rec.recommended_size, "XS");
    }

    #[test]
    fn high_stretch_adds_the_comfort_note() {
        let m = matcher();
        let repo = SizeChartRepository::builtin();
        let style = ClothingStyleAnalysis {
            stretch_factor: 8.0,
            ..ClothingStyleAnalysis::default()
        };
        let rec = m.recommend(&repo, "ZARA", GarmentCategory::Tops, &body(), Some(&style));
        assert!(rec.fit_notes.iter().any(|n| n.contains("stretch")));
    }
}
