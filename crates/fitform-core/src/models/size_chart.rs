// ABOUTME: Brand size charts and the read-only chart repository
// ABOUTME: Sparse per-size dimension records with ordered labels and built-in tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitform Intelligence

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::garment::GarmentCategory;
use crate::errors::ChartError;

/// Expected garment body dimensions for one labeled size, in centimeters.
///
/// Real charts are sparse: every field is optional, and a missing field
/// must be handled at each comparison site through an explicit fallback
/// chain. Source tables that pad absent cells with `0` are normalized to
/// `None` at load time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SizeDimensions {
    /// Chest circumference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chest: Option<f64>,
    /// Shoulder width
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shoulder: Option<f64>,
    /// Waist circumference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub waist: Option<f64>,
    /// Hip circumference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hips: Option<f64>,
    /// Shoulder seam to wrist
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sleeve_length: Option<f64>,
    /// Inner leg seam
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inseam: Option<f64>,
    /// Garment length
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<f64>,
    /// Thigh circumference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thigh: Option<f64>,
    /// Neck circumference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub neck: Option<f64>,
}

/// One labeled size within a chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizeEntry {
    /// Size label as printed by the brand ("M", "IT 42", ...)
    pub label: String,
    /// Expected body dimensions for this size
    pub dimensions: SizeDimensions,
}

/// A brand- and category-specific size chart.
///
/// Entries are ordered smallest to largest, exactly as the brand lists
/// them; the matcher's tie-breaking rule (first listed entry wins) relies
/// on this order being preserved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizeChart {
    /// Brand label; lookup is case-insensitive
    pub brand: String,
    /// Garment category this chart covers
    pub category: GarmentCategory,
    /// Ordered size entries, smallest first
    pub entries: Vec<SizeEntry>,
}

impl SizeChart {
    /// Dimensions for a given size label, if present.
    #[must_use]
    pub fn dimensions_for(&self, label: &str) -> Option<&SizeDimensions> {
        self.entries
            .iter()
            .find(|entry| entry.label == label)
            .map(|entry| &entry.dimensions)
    }
}

/// Read-only repository mapping (brand, category) to a size chart.
///
/// Loaded once at startup and treated as immutable for the process
/// lifetime. A missing (brand, category) pair is an expected, normal case:
/// lookups return `None` and the matcher degrades to its fallback
/// recommendation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SizeChartRepository {
    charts: Vec<SizeChart>,
}

impl Default for SizeChartRepository {
    fn default() -> Self {
        Self::builtin()
    }
}

impl SizeChartRepository {
    /// Empty repository; every lookup falls back.
    #[must_use]
    pub const fn empty() -> Self {
        Self { charts: Vec::new() }
    }

    /// Repository preloaded with the built-in reference tables
    /// (ZARA tops/bottoms, UNIQLO tops/bottoms, Gucci tops).
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            charts: builtin_charts(),
        }
    }

    /// Parse charts from a JSON document and append them to this
    /// repository. Later charts shadow earlier ones for the same
    /// (brand, category) because lookup scans back to front.
    ///
    /// # Errors
    ///
    /// Returns [`ChartError::Malformed`] when the document is not valid
    /// chart JSON and [`ChartError::Empty`] when any chart carries no
    /// size entries.
    pub fn extend_from_json(&mut self, json: &str) -> Result<(), ChartError> {
        let charts: Vec<SizeChart> = serde_json::from_str(json)?;
        for chart in &charts {
            if chart.entries.is_empty() {
                return Err(ChartError::Empty {
                    brand: chart.brand.clone(),
                    category: format!("{:?}", chart.category),
                });
            }
        }
        debug!(count = charts.len(), "loaded size charts from document");
        self.charts.extend(charts);
        Ok(())
    }

    /// Chart for a (brand, category) pair. Brand comparison is
    /// case-insensitive; the most recently loaded matching chart wins.
    #[must_use]
    pub fn get(&self, brand: &str, category: GarmentCategory) -> Option<&SizeChart> {
        self.charts
            .iter()
            .rev()
            .find(|chart| chart.category == category && chart.brand.eq_ignore_ascii_case(brand))
    }

    /// All charts currently loaded, in load order.
    #[must_use]
    pub fn charts(&self) -> &[SizeChart] {
        &self.charts
    }
}

fn entry(label: &str, dimensions: SizeDimensions) -> SizeEntry {
    SizeEntry {
        label: label.into(),
        dimensions,
    }
}

// Reference tables in centimeters. Bottoms rows carry no chest/shoulder
// data; those cells are absent, not zero.
fn builtin_charts() -> Vec<SizeChart> {
    vec![
        SizeChart {
            brand: "ZARA".into(),
            category: GarmentCategory::Tops,
            entries: vec![
                entry("XS", tops_dims(88.0, 42.0, 68.0, 60.0, 37.0, 78.0)),
                entry("S", tops_dims(96.0, 44.0, 70.0, 61.0, 38.0, 82.0)),
                entry("M", tops_dims(104.0, 46.0, 72.0, 62.0, 39.0, 86.0)),
                entry("L", tops_dims(112.0, 48.0, 74.0, 63.0, 40.0, 90.0)),
                entry("XL", tops_dims(120.0, 50.0, 76.0, 64.0, 41.0, 94.0)),
            ],
        },
        SizeChart {
            brand: "ZARA".into(),
            category: GarmentCategory::Bottoms,
            entries: vec![
                entry("XS", bottoms_dims(72.0, 90.0, 100.0, 78.0, 54.0)),
                entry("S", bottoms_dims(76.0, 94.0, 102.0, 79.0, 56.0)),
                entry("M", bottoms_dims(80.0, 98.0, 104.0, 80.0, 58.0)),
                entry("L", bottoms_dims(84.0, 102.0, 106.0, 81.0, 60.0)),
                entry("XL", bottoms_dims(88.0, 106.0, 108.0, 82.0, 62.0)),
            ],
        },
        SizeChart {
            brand: "UNIQLO".into(),
            category: GarmentCategory::Tops,
            entries: vec![
                entry("XS", tops_dims(90.0, 41.0, 66.0, 58.0, 36.0, 80.0)),
                entry("S", tops_dims(98.0, 43.0, 68.0, 59.5, 37.0, 84.0)),
                entry("M", tops_dims(106.0, 45.0, 70.0, 61.0, 38.0, 88.0)),
                entry("L", tops_dims(114.0, 47.0, 72.0, 62.5, 40.0, 94.0)),
                entry("XL", tops_dims(122.0, 49.0, 74.0, 64.0, 42.0, 100.0)),
                entry("XXL", tops_dims(130.0, 51.0, 76.0, 65.0, 44.0, 108.0)),
            ],
        },
        SizeChart {
            brand: "UNIQLO".into(),
            category: GarmentCategory::Bottoms,
            entries: vec![
                entry("XS", bottoms_dims(68.0, 88.0, 98.0, 74.0, 52.0)),
                entry("S", bottoms_dims(72.0, 92.0, 100.0, 75.0, 54.0)),
                entry("M", bottoms_dims(76.0, 96.0, 102.0, 76.0, 56.0)),
                entry("L", bottoms_dims(82.0, 102.0, 104.0, 77.0, 59.0)),
                entry("XL", bottoms_dims(88.0, 108.0, 106.0, 78.0, 62.0)),
            ],
        },
        SizeChart {
            brand: "Gucci".into(),
            category: GarmentCategory::Tops,
            entries: vec![
                entry("IT 38", gucci_dims(84.0, 38.0, 62.0, 58.0, 74.0)),
                entry("IT 40", gucci_dims(88.0, 40.0, 64.0, 59.0, 78.0)),
                entry("IT 42", gucci_dims(92.0, 42.0, 66.0, 60.0, 82.0)),
                entry("IT 44", gucci_dims(96.0, 44.0, 68.0, 61.0, 86.0)),
                entry("IT 46", gucci_dims(100.0, 46.0, 70.0, 62.0, 90.0)),
            ],
        },
    ]
}

fn tops_dims(
    chest: f64,
    shoulder: f64,
    length: f64,
    sleeve_length: f64,
    neck: f64,
    waist: f64,
) -> SizeDimensions {
    SizeDimensions {
        chest: Some(chest),
        shoulder: Some(shoulder),
        length: Some(length),
        sleeve_length: Some(sleeve_length),
        neck: Some(neck),
        waist: Some(waist),
        ..SizeDimensions::default()
    }
}

fn bottoms_dims(waist: f64, hips: f64, length: f64, inseam: f64, thigh: f64) -> SizeDimensions {
    SizeDimensions {
        waist: Some(waist),
        hips: Some(hips),
        length: Some(length),
        inseam: Some(inseam),
        thigh: Some(thigh),
        ..SizeDimensions::default()
    }
}

fn gucci_dims(
    chest: f64,
    shoulder: f64,
    length: f64,
    sleeve_length: f64,
    waist: f64,
) -> SizeDimensions {
    SizeDimensions {
        chest: Some(chest),
        shoulder: Some(shoulder),
        length: Some(length),
        sleeve_length: Some(sleeve_length),
        waist: Some(waist),
        ..SizeDimensions::default()
    }
}
