// ABOUTME: Layering engine resolving deterministic paint order for try-on compositing
// ABOUTME: Stable z-index sort, context-aware jewelry demotion, and outfit validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitform Intelligence

//! Compositing order for garments and accessories.
//!
//! Every selected item resolves to a z-index (explicit override first,
//! fixed table otherwise) and is painted in ascending order. The sort is
//! stable: items sharing a z-index keep their relative input order, and
//! sorting an already-sorted list is the identity. Accessories require a
//! separate segmentation/inpainting pass at composite time, flagged per
//! layer.

use fitform_core::constants::layering as z;
use fitform_core::models::{AccessoryKind, ClothingItem, GarmentCategory};
use serde::{Deserialize, Serialize};

use crate::config::{FitIntelligenceConfig, LayeringConfig};

/// One layer of the composite, in paint order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CompositeLayer {
    /// The garment or accessory to paint
    pub item: ClothingItem,
    /// Resolved z-index; lower paints first
    pub z_index: i32,
    /// Whether this layer needs a segmentation/inpainting pass
    pub mask_required: bool,
}

/// Deterministic paint order for a set of selected items
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LayeredComposition {
    /// Layers in ascending z-index order
    pub layers: Vec<CompositeLayer>,
}

/// Physical interactions between layers, surfaced as hints for the
/// rendering/compositing collaborator
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum LayerInteraction {
    /// A bag strap deforms the shoulder of a top or jacket
    BagOnShoulder,
    /// Neck jewelry tucked beneath an open jacket
    NecklaceUnderJacket,
    /// A hat compresses the hair
    HatOnHair,
}

/// Orders selected garments/accessories into a deterministic paint order
/// and validates the combination for visual conflicts.
#[derive(Debug, Clone)]
pub struct LayeringEngine {
    config: LayeringConfig,
}

impl Default for LayeringEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl LayeringEngine {
    /// Create an engine with the process-wide configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: FitIntelligenceConfig::global().layering.clone(),
        }
    }

    /// Create an engine with a custom configuration.
    #[must_use]
    pub const fn with_config(config: LayeringConfig) -> Self {
        Self { config }
    }

    /// Z-index for one item: the explicit override if present, otherwise
    /// the fixed category/sub-category table.
    #[must_use]
    pub fn item_z_index(&self, item: &ClothingItem) -> i32 {
        if let Some(explicit) = item.z_index {
            return explicit;
        }

        match item.category {
            GarmentCategory::Bottoms => z::BOTTOMS,
            GarmentCategory::Tops => z::TOPS,
            GarmentCategory::Dresses => z::DRESSES,
            GarmentCategory::Outerwear => z::OUTERWEAR,
            GarmentCategory::Accessories => item
                .sub_category
                .map_or(self.config.default_accessory_z, accessory_z_index),
        }
    }

    /// Stable ascending sort by z-index.
    ///
    /// Stability is a contract, not an accident of the underlying sort:
    /// items with equal z-indexes keep their relative input order, and the
    /// operation is idempotent.
    #[must_use]
    pub fn sort_items_for_try_on(&self, items: &[ClothingItem]) -> Vec<ClothingItem> {
        let mut sorted = items.to_vec();
        // Vec::sort_by_key is guaranteed stable.
        sorted.sort_by_key(|item| self.item_z_index(item));
        sorted
    }

    /// Context-aware ordering: when the selection contains both outerwear
    /// and neck jewelry, the jewelry is demoted beneath the jacket (over
    /// the top) before the stable sort runs.
    #[must_use]
    pub fn resolve_visibility_order(&self, items: &[ClothingItem]) -> Vec<ClothingItem> {
        let mut processed = items.to_vec();

        if self.config.demote_jewelry_under_outerwear && has_outerwear(items) {
            for item in &mut processed {
                if is_neck_jewelry(item) {
                    item.z_index = Some(z::JEWELRY_NECK_UNDER);
                }
            }
        }

        self.sort_items_for_try_on(&processed)
    }

    /// Resolve the visibility order and emit the composite strategy.
    ///
    /// `mask_required` is exactly `category == accessories`: accessories
    /// need a separate segmentation/inpainting pass, garments do not.
    #[must_use]
    pub fn generate_composite_strategy(&self, items: &[ClothingItem]) -> LayeredComposition {
        let sorted = self.resolve_visibility_order(items);

        let layers = sorted
            .into_iter()
            .map(|item| {
                let z_index = self.item_z_index(&item);
                let mask_required = item.category == GarmentCategory::Accessories;
                CompositeLayer {
                    item,
                    z_index,
                    mask_required,
                }
            })
            .collect();

        LayeredComposition { layers }
    }

    /// All applicable visual-conflict warnings for the selection, not
    /// just the first.
    #[must_use]
    pub fn validate_outfit(&self, items: &[ClothingItem]) -> Vec<String> {
        let mut warnings = Vec::new();

        let has_dress = items
            .iter()
            .any(|i| i.category == GarmentCategory::Dresses);
        let has_separates = items.iter().any(|i| {
            matches!(i.category, GarmentCategory::Tops | GarmentCategory::Bottoms)
        });
        if has_dress && has_separates {
            warnings
                .push("Wearing a Dress with Tops/Bottoms might cause visual overlap.".into());
        }

        let outerwear_count = items
            .iter()
            .filter(|i| i.category == GarmentCategory::Outerwear)
            .count();
        if outerwear_count > 1 {
            warnings.push(
                "Multiple outerwear items selected. Only the outermost will be fully visible."
                    .into(),
            );
        }

        warnings
    }

    /// Physical interaction hints between layers, for the compositor.
    #[must_use]
    pub fn layer_interactions(&self, items: &[ClothingItem]) -> Vec<LayerInteraction> {
        let mut interactions = Vec::new();

        let has_bag = items
            .iter()
            .any(|i| i.sub_category == Some(AccessoryKind::Bag));
        let has_shoulder_garment = items.iter().any(|i| {
            matches!(
                i.category,
                GarmentCategory::Tops | GarmentCategory::Outerwear
            )
        });
        if has_bag && has_shoulder_garment {
            interactions.push(LayerInteraction::BagOnShoulder);
        }

        if self.config.demote_jewelry_under_outerwear
            && has_outerwear(items)
            && items.iter().any(is_neck_jewelry)
        {
            interactions.push(LayerInteraction::NecklaceUnderJacket);
        }

        if items
            .iter()
            .any(|i| i.sub_category == Some(AccessoryKind::Hat))
        {
            interactions.push(LayerInteraction::HatOnHair);
        }

        interactions
    }
}

const fn accessory_z_index(kind: AccessoryKind) -> i32 {
    match kind {
        AccessoryKind::Hat => z::HAT,
        AccessoryKind::Bag => z::BAG,
        AccessoryKind::Jewelry => z::JEWELRY_NECK,
        AccessoryKind::Scarf => z::SCARF,
        AccessoryKind::Glasses => z::GLASSES,
    }
}

fn has_outerwear(items: &[ClothingItem]) -> bool {
    items
        .iter()
        .any(|i| i.category == GarmentCategory::Outerwear)
}

fn is_neck_jewelry(item: &ClothingItem) -> bool {
    item.category == GarmentCategory::Accessories
        && item.sub_category == Some(AccessoryKind::Jewelry)
}
