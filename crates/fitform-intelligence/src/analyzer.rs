// ABOUTME: End-to-end fit analysis pipeline from pose proportions to recommendation
// ABOUTME: Chains the measurement estimator into the size matcher per candidate garment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitform Intelligence

//! The per-user, per-candidate-garment analysis pipeline:
//! measurement estimation, size matching, and fit zone scoring in one
//! call. The layering engine is independent of this pipeline and operates
//! over the selected item set instead.

use fitform_core::models::{
    ClothingStyleAnalysis, GarmentCategory, PoseProportions, SizeChartRepository,
};
use tracing::debug;

use crate::config::FitIntelligenceConfig;
use crate::fit_zones::FitZoneScorer;
use crate::measurement_estimator::MeasurementEstimator;
use crate::size_matcher::{SizeChartMatcher, SizeRecommendation};

/// Runs the full fit pipeline for one user and one candidate garment.
#[derive(Debug, Clone)]
pub struct FitAnalyzer {
    config: FitIntelligenceConfig,
    estimator: MeasurementEstimator,
    matcher: SizeChartMatcher,
}

impl Default for FitAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl FitAnalyzer {
    /// Create an analyzer with the process-wide configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(FitIntelligenceConfig::global().clone())
    }

    /// Create an analyzer with a custom configuration; the engines it
    /// chains share that configuration.
    #[must_use]
    pub fn with_config(config: FitIntelligenceConfig) -> Self {
        let estimator = MeasurementEstimator::with_config(config.estimator.clone());
        let matcher = SizeChartMatcher::with_config(
            config.matcher.clone(),
            FitZoneScorer::with_config(config.fit_zones.clone()),
        );
        Self {
            config,
            estimator,
            matcher,
        }
    }

    /// Estimate measurements from the pose, then match against the
    /// brand/category chart.
    ///
    /// Degenerate poses and unknown charts degrade to structured fallback
    /// results exactly as the individual engines do.
    #[must_use]
    pub fn analyze(
        &self,
        repository: &SizeChartRepository,
        proportions: &PoseProportions,
        user_height_cm: f64,
        brand: &str,
        category: GarmentCategory,
        style: Option<&ClothingStyleAnalysis>,
    ) -> SizeRecommendation {
        debug!(brand, ?category, user_height_cm, "running fit analysis");

        let measurements = self.estimator.estimate(proportions, user_height_cm);
        let mut recommendation =
            self.matcher
                .recommend(repository, brand, category, &measurements, style);

        // Pose-derived silhouette note; only meaningful when a chart was
        // actually matched (the fallback note must stay first otherwise).
        if repository.get(brand, category).is_some()
            && proportions.shoulder_slope > self.config.matcher.thresholds.sharp_shoulder_slope
        {
            recommendation.fit_notes.insert(
                0,
                self.config.matcher.messages.shoulder_slope_structure.clone(),
            );
        }

        recommendation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn proportions() -> PoseProportions {
        PoseProportions {
            shoulder_width: 0.5,
            hip_width: 0.5,
            waist_width: 0.4,
            torso_height: 0.5,
            leg_length: 0.5,
            arm_length: 0.6,
            shoulder_slope: 0.1,
            overall_ratio: 0.5,
        }
    }

    #[test]
    fn pipeline_produces_a_chart_label_for_known_brand() {
        let analyzer = FitAnalyzer::with_config(FitIntelligenceConfig::default());
        let repo = SizeChartRepository::builtin();
        let rec = analyzer.analyze(
            &repo,
            &proportions(),
            175.0,
            "ZARA",
            GarmentCategory::Tops,
            None,
        );
        assert!(["XS", "S", "M", "L", "XL"].contains(&rec.recommended_size.as_str()));
        assert!(!rec.fit_notes.is_empty());
        assert!((0.0..=100.0).contains(&rec.confidence));
    }

    #[test]
    fn sharp_shoulder_slope_note_leads_when_chart_exists() {
        let analyzer = FitAnalyzer::with_config(FitIntelligenceConfig::default());
        let repo = SizeChartRepository::builtin();
        let sloped = PoseProportions {
            shoulder_slope: 0.2,
            ..proportions()
        };
        let rec = analyzer.analyze(&repo, &sloped, 175.0, "ZARA", GarmentCategory::Tops, None);
        assert!(rec.fit_notes[0].contains("slope"));
    }

    #[test]
    fn fallback_note_stays_first_for_unknown_brand() {
        let analyzer = FitAnalyzer::with_config(FitIntelligenceConfig::default());
        let repo = SizeChartRepository::builtin();
        let sloped = PoseProportions {
            shoulder_slope: 0.2,
            ..proportions()
        };
        let rec = analyzer.analyze(&repo, &sloped, 175.0, "Nobrand", GarmentCategory::Tops, None);
        assert_eq!(rec.recommended_size, "M");
        assert!(rec.fit_notes[0].contains("not found"));
    }
}
