// ABOUTME: End-to-end tests for the pose-to-recommendation fit pipeline
// ABOUTME: Validates the reference scenarios, fallbacks, and degenerate captures
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Fitform Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use fitform::{
    ClothingStyleAnalysis, FitAnalyzer, FitType, GarmentCategory, MeasurementEstimator,
    PoseProportions, SizeChartRepository,
};

fn reference_proportions() -> PoseProportions {
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
fn zara_tops_scenario_returns_a_valid_recommendation() {
    let analyzer = FitAnalyzer::new();
    let repository = SizeChartRepository::builtin();

    let rec = analyzer.analyze(
        &repository,
        &reference_proportions(),
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
fn unknown_brand_scenario_returns_the_documented_fallback() {
    let analyzer = FitAnalyzer::new();
    let repository = SizeChartRepository::builtin();

    let rec = analyzer.analyze(
        &repository,
        &reference_proportions(),
        175.0,
        "UnknownBrand",
        GarmentCategory::Tops,
        None,
    );

    assert_eq!(rec.recommended_size, "M");
    assert!((rec.confidence - 50.0).abs() < f64::EPSILON);
    assert!(rec.fit_notes[0].contains("not found"));
}

#[test]
fn estimator_output_is_non_negative_for_positive_spans() {
    let estimator = MeasurementEstimator::new();
    let m = estimator.estimate(&reference_proportions(), 175.0);

    assert!(m.shoulder_width >= 0.0);
    assert!(m.chest_circumference >= 0.0);
    assert!(m.waist_circumference >= 0.0);
    assert!(m.hip_circumference >= 0.0);
    assert!(m.arm_length >= 0.0);
    assert!(m.leg_length >= 0.0);
}

#[test]
fn degenerate_proportions_yield_zeroes_not_nan() {
    let estimator = MeasurementEstimator::new();
    let m = estimator.estimate(&PoseProportions::default(), 175.0);

    assert!(m.is_degenerate());
    for value in [
        m.shoulder_width,
        m.chest_circumference,
        m.waist_circumference,
        m.hip_circumference,
        m.arm_length,
        m.leg_length,
    ] {
        assert!(value.is_finite());
        assert!(value.abs() < f64::EPSILON);
    }
}

#[test]
fn degenerate_pose_still_flows_through_the_whole_pipeline() {
    let analyzer = FitAnalyzer::new();
    let repository = SizeChartRepository::builtin();

    let rec = analyzer.analyze(
        &repository,
        &PoseProportions::default(),
        175.0,
        "ZARA",
        GarmentCategory::Tops,
        None,
    );

    // Meaningless measurements read as very low confidence, not a crash.
    assert!((0.0..=100.0).contains(&rec.confidence));
    assert!(!rec.fit_notes.is_empty());
    assert!(rec.estimated_measurements.is_degenerate());
}

#[test]
fn style_analysis_changes_the_heatmap_ideal_gap() {
    let analyzer = FitAnalyzer::new();
    let repository = SizeChartRepository::builtin();

    let oversized = ClothingStyleAnalysis {
        fit_type: FitType::Oversized,
        ..ClothingStyleAnalysis::default()
    };

    let regular = analyzer.analyze(
        &repository,
        &reference_proportions(),
        175.0,
        "ZARA",
        GarmentCategory::Tops,
        None,
    );
    let relaxed = analyzer.analyze(
        &repository,
        &reference_proportions(),
        175.0,
        "ZARA",
        GarmentCategory::Tops,
        Some(&oversized),
    );

    let chest_regular = regular.heatmap_data.first().unwrap();
    let chest_relaxed = relaxed.heatmap_data.first().unwrap();
    // A larger ideal gap shifts the same garment toward the tight side.
    assert!(chest_relaxed.score >= chest_regular.score);
}

#[test]
fn bottoms_scenario_scores_waist_and_hips() {
    let analyzer = FitAnalyzer::new();
    let repository = SizeChartRepository::builtin();

    let rec = analyzer.analyze(
        &repository,
        &reference_proportions(),
        175.0,
        "UNIQLO",
        GarmentCategory::Bottoms,
        None,
    );

    let chart = repository.get("UNIQLO", GarmentCategory::Bottoms).unwrap();
    assert!(chart
        .entries
        .iter()
        .any(|e| e.label == rec.recommended_size));
    assert!(!rec.heatmap_data.is_empty());
}
