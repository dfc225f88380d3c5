// ABOUTME: Criterion benchmarks for the fit intelligence hot paths
// ABOUTME: Measures the analysis pipeline and layering resolution throughput
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitform Intelligence

//! Criterion benchmarks for the fit intelligence hot paths.
//!
//! The pipeline benchmark models the per-user, per-candidate-garment call
//! pattern; the layering benchmark models re-resolution on every selection
//! change.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use fitform::{
    AccessoryKind, ClothingItem, FitAnalyzer, GarmentCategory, LayeringEngine, PoseProportions,
    SizeChartRepository,
};

fn sample_proportions(index: usize) -> PoseProportions {
    // Deterministic spread of plausible captures.
    let jitter = (index % 7) as f64 * 0.01;
    PoseProportions {
        shoulder_width: 0.45 + jitter,
        hip_width: 0.48 + jitter,
        waist_width: 0.38 + jitter,
        torso_height: 0.5,
        leg_length: 0.5 + jitter,
        arm_length: 0.6,
        shoulder_slope: 0.1,
        overall_ratio: 0.5,
    }
}

fn sample_wardrobe() -> Vec<ClothingItem> {
    vec![
        ClothingItem::new("b1", "Jeans", GarmentCategory::Bottoms),
        ClothingItem::new("t1", "T-Shirt", GarmentCategory::Tops),
        ClothingItem::new("o1", "Jacket", GarmentCategory::Outerwear),
        ClothingItem::new("a1", "Necklace", GarmentCategory::Accessories)
            .with_sub_category(AccessoryKind::Jewelry),
        ClothingItem::new("a2", "Bag", GarmentCategory::Accessories)
            .with_sub_category(AccessoryKind::Bag),
        ClothingItem::new("a3", "Hat", GarmentCategory::Accessories)
            .with_sub_category(AccessoryKind::Hat),
    ]
}

fn bench_fit_pipeline(c: &mut Criterion) {
    let analyzer = FitAnalyzer::new();
    let repository = SizeChartRepository::builtin();

    let mut group = c.benchmark_group("fit_pipeline");
    group.throughput(Throughput::Elements(1));
    group.bench_function("analyze_zara_tops", |b| {
        let mut index = 0usize;
        b.iter(|| {
            index = index.wrapping_add(1);
            let proportions = sample_proportions(index);
            black_box(analyzer.analyze(
                &repository,
                black_box(&proportions),
                175.0,
                "ZARA",
                GarmentCategory::Tops,
                None,
            ))
        });
    });
    group.bench_function("analyze_unknown_brand_fallback", |b| {
        b.iter(|| {
            let proportions = sample_proportions(3);
            black_box(analyzer.analyze(
                &repository,
                black_box(&proportions),
                175.0,
                "NoSuchBrand",
                GarmentCategory::Tops,
                None,
            ))
        });
    });
    group.finish();
}

fn bench_layering(c: &mut Criterion) {
    let engine = LayeringEngine::new();
    let wardrobe = sample_wardrobe();

    let mut group = c.benchmark_group("layering");
    group.throughput(Throughput::Elements(wardrobe.len() as u64));
    group.bench_function("composite_strategy", |b| {
        b.iter(|| black_box(engine.generate_composite_strategy(black_box(&wardrobe))));
    });
    group.bench_function("validate_outfit", |b| {
        b.iter(|| black_box(engine.validate_outfit(black_box(&wardrobe))));
    });
    group.finish();
}

criterion_group!(benches, bench_fit_pipeline, bench_layering);
criterion_main!(benches);
