// ABOUTME: Compositing z-index table for garment and accessory layers
// ABOUTME: Lower values paint first; explicit per-item overrides always win
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitform Intelligence

//! Default z-index assignments for compositing garments and accessories
//! onto one body. Lower values are painted first (innermost). Items may
//! carry an explicit override which takes precedence over this table.

/// Bare skin base layer
pub const SKIN: i32 = 0;

/// Tattoo overlays, painted directly on skin
pub const TATTOO: i32 = 5;

/// Underwear layer
pub const UNDERWEAR: i32 = 10;

/// Socks, under trouser hems
pub const SOCKS: i32 = 15;

/// Trousers, skirts, shorts
pub const BOTTOMS: i32 = 20;

/// Shirts, t-shirts, knitwear
pub const TOPS: i32 = 25;

/// Dresses paint over the tops/bottoms band they usually replace
pub const DRESSES: i32 = 27;

/// Neck jewelry demoted beneath outerwear: over the top, under the jacket
pub const JEWELRY_NECK_UNDER: i32 = 28;

/// Jackets, coats, blazers
pub const OUTERWEAR: i32 = 30;

/// Neck jewelry in its default position, over the outermost garment
pub const JEWELRY_NECK: i32 = 35;

/// Wrist jewelry
pub const JEWELRY_WRIST: i32 = 35;

/// Scarves wrap over jackets
pub const SCARF: i32 = 40;

/// Hats
pub const HAT: i32 = 45;

/// Bag body, usually outermost of the worn layers
pub const BAG: i32 = 50;

/// Glasses, painted last
pub const GLASSES: i32 = 55;

/// Fallback for garments with no category-specific entry
pub const DEFAULT_GARMENT: i32 = 20;

/// Fallback for accessories with no recognized sub-category
pub const DEFAULT_ACCESSORY: i32 = 50;
