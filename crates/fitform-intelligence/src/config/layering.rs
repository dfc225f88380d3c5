// ABOUTME: Layering engine configuration for compositing order resolution
// ABOUTME: Fallback z-indexes and the jewelry-under-outerwear context rule
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitform Intelligence

//! Layering Engine Configuration
//!
//! The z-index table itself is a fixed constant table; this config covers
//! the fallback assignments and the one context-aware adjustment rule.

use fitform_core::constants::layering;
use serde::{Deserialize, Serialize};

/// Layering Engine Configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayeringConfig {
    /// Z-index for garments with no category-specific table entry
    pub default_garment_z: i32,
    /// Z-index for accessories with no recognized sub-category
    pub default_accessory_z: i32,
    /// Demote neck jewelry beneath outerwear when both are present
    pub demote_jewelry_under_outerwear: bool,
}

impl Default for LayeringConfig {
    fn default() -> Self {
        Self {
            default_garment_z: layering::DEFAULT_GARMENT,
            default_accessory_z: layering::DEFAULT_ACCESSORY,
            demote_jewelry_under_outerwear: true,
        }
    }
}
