// ABOUTME: Garment and accessory identity types for the layering domain
// ABOUTME: Includes the optional style classifier record with neutral defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitform Intelligence

use serde::{Deserialize, Serialize};

/// Garment category, shared by the size matcher and the layering engine
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum GarmentCategory {
    /// Shirts, t-shirts, knitwear
    Tops,
    /// Trousers, skirts, shorts
    Bottoms,
    /// Jackets, coats, blazers
    Outerwear,
    /// Dresses, usually replacing a tops/bottoms pair
    Dresses,
    /// Hats, bags, jewelry, scarves, glasses
    Accessories,
}

/// Accessory sub-category, used only for z-index resolution
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AccessoryKind {
    /// Headwear
    Hat,
    /// Shoulder and hand bags
    Bag,
    /// Necklaces, bracelets
    Jewelry,
    /// Scarves
    Scarf,
    /// Glasses and sunglasses
    Glasses,
}

/// A garment or accessory selected for try-on
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClothingItem {
    /// Caller-supplied identifier, opaque to the engine
    pub id: String,
    /// Display name
    pub name: String,
    /// Garment category
    pub category: GarmentCategory,
    /// Accessory sub-category; only meaningful for accessories
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_category: Option<AccessoryKind>,
    /// Explicit z-index override; always wins over the category table
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z_index: Option<i32>,
}

impl ClothingItem {
    /// Build an item with table-derived z-index and no sub-category.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, category: GarmentCategory) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category,
            sub_category: None,
            z_index: None,
        }
    }

    /// Attach an accessory sub-category.
    #[must_use]
    pub fn with_sub_category(mut self, kind: AccessoryKind) -> Self {
        self.sub_category = Some(kind);
        self
    }

    /// Attach an explicit z-index override.
    #[must_use]
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = Some(z_index);
        self
    }
}

/// Garment silhouette classification from the style classifier
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum FitType {
    /// Close to the body
    Slim,
    /// Standard silhouette
    #[default]
    Regular,
    /// Deliberately large, drop-shoulder cut
    Oversized,
    /// Loose but not oversized
    Relaxed,
}

impl FitType {
    /// Oversized and relaxed garments are correctly fitted at a larger
    /// garment-over-body gap than slim ones.
    #[must_use]
    pub fn is_loose_cut(self) -> bool {
        matches!(self, Self::Oversized | Self::Relaxed)
    }
}

/// Fabric classification from the style classifier
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MaterialType {
    /// Woven cotton
    #[default]
    Cotton,
    /// Silk
    Silk,
    /// Denim
    Denim,
    /// Leather
    Leather,
    /// Knitted fabrics
    Knit,
    /// Linen
    Linen,
    /// Polyester and blends
    Polyester,
}

/// Optional garment analysis supplied by an external style/material
/// classifier.
///
/// Absence of the whole record is the normal case and is treated as a
/// regular fit with neutral stretch, never as an error. [`Default`]
/// produces exactly that neutral record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClothingStyleAnalysis {
    /// Fabric classification
    pub material_type: MaterialType,
    /// Silhouette classification
    pub fit_type: FitType,
    /// Fabric elasticity, 1 (rigid) to 10 (very stretchy); 5 is neutral
    pub stretch_factor: f64,
    /// Fabric thickness, 1-10
    pub thickness: f64,
    /// How much the fabric folds and drapes, 1-10
    pub draping_factor: f64,
}

impl Default for ClothingStyleAnalysis {
    fn default() -> Self {
        Self {
            material_type: MaterialType::default(),
            fit_type: FitType::default(),
            stretch_factor: 5.0,
            thickness: 5.0,
            draping_factor: 5.0,
        }
    }
}
