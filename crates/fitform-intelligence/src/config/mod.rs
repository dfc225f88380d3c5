// ABOUTME: Configuration module for the fitform-intelligence crate
// ABOUTME: Aggregates per-engine configs with validation, env overrides, and a global
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitform Intelligence

//! Fit intelligence configuration.
//!
//! Every heuristic constant in the engines is reachable through this
//! config tree: estimator calibration, matcher weights and templates, fit
//! zone gaps and colors, layering fallbacks. Defaults reproduce the
//! reference fit model; hosts may override per instance, via
//! [`FitIntelligenceConfig::from_environment`], or rely on the process-wide
//! [`FitIntelligenceConfig::global`].

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

/// Configuration error types
pub mod error;
/// Measurement estimator calibration
pub mod estimator;
/// Layering fallbacks and context rules
pub mod layering;
/// Size matcher weights, tuning, and message templates
pub mod matcher;
/// Fit zone gaps, clamp, and color thresholds
pub mod zones;

pub use error::ConfigError;
pub use estimator::EstimatorConfig;
pub use layering::LayeringConfig;
pub use matcher::{MatcherConfig, MatcherMessages, MatcherTuning, MatchingWeights, NoteThresholds};
pub use zones::{ColorThresholds, FitZoneConfig};

static GLOBAL_CONFIG: OnceLock<FitIntelligenceConfig> = OnceLock::new();

/// Top-level configuration for all fit intelligence engines
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FitIntelligenceConfig {
    /// Measurement estimator calibration
    pub estimator: EstimatorConfig,
    /// Size matcher weights, tuning, and messages
    pub matcher: MatcherConfig,
    /// Fit zone scoring and colors
    pub fit_zones: FitZoneConfig,
    /// Layering fallbacks and context rules
    pub layering: LayeringConfig,
}

impl FitIntelligenceConfig {
    /// Process-wide configuration, initialized from the environment on
    /// first access and falling back to defaults when the environment
    /// carries no valid overrides.
    #[must_use]
    pub fn global() -> &'static Self {
        GLOBAL_CONFIG.get_or_init(|| Self::from_environment().unwrap_or_default())
    }

    /// Build a configuration from defaults plus `FIT_INTELLIGENCE_*`
    /// environment overrides.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when an override is present but not
    /// a number, and propagates [`Self::validate`] failures.
    pub fn from_environment() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Ok(val) = std::env::var("FIT_INTELLIGENCE_CAPTURED_SPAN_RATIO") {
            config.estimator.captured_span_ratio = val.parse().map_err(|_| {
                ConfigError::Parse("FIT_INTELLIGENCE_CAPTURED_SPAN_RATIO".into())
            })?;
        }

        if let Ok(val) = std::env::var("FIT_INTELLIGENCE_CONFIDENCE_SLOPE_PER_CM") {
            config.matcher.tuning.confidence_slope_per_cm = val.parse().map_err(|_| {
                ConfigError::Parse("FIT_INTELLIGENCE_CONFIDENCE_SLOPE_PER_CM".into())
            })?;
        }

        if let Ok(val) = std::env::var("FIT_INTELLIGENCE_STRETCH_SLOPE_PER_POINT") {
            config.matcher.tuning.stretch_slope_per_point = val.parse().map_err(|_| {
                ConfigError::Parse("FIT_INTELLIGENCE_STRETCH_SLOPE_PER_POINT".into())
            })?;
        }

        if let Ok(val) = std::env::var("FIT_INTELLIGENCE_REGULAR_GAP_CM") {
            config.fit_zones.regular_ideal_gap_cm = val
                .parse()
                .map_err(|_| ConfigError::Parse("FIT_INTELLIGENCE_REGULAR_GAP_CM".into()))?;
        }

        if let Ok(val) = std::env::var("FIT_INTELLIGENCE_RELAXED_GAP_CM") {
            config.fit_zones.relaxed_ideal_gap_cm = val
                .parse()
                .map_err(|_| ConfigError::Parse("FIT_INTELLIGENCE_RELAXED_GAP_CM".into()))?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate every engine config.
    ///
    /// # Errors
    ///
    /// Propagates the first failing engine validation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.estimator.validate()?;
        self.matcher.validate()?;
        self.fit_zones.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates() {
        assert!(FitIntelligenceConfig::default().validate().is_ok());
    }

    #[test]
    fn unbalanced_tops_weights_are_rejected() {
        let mut config = FitIntelligenceConfig::default();
        config.matcher.weights.chest = 0.8;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidWeights(_))
        ));
    }

    #[test]
    fn misordered_color_thresholds_are_rejected() {
        let mut config = FitIntelligenceConfig::default();
        config.fit_zones.colors.red_above = -1.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidRange(_))
        ));
    }

    #[test]
    fn degenerate_span_threshold_must_be_non_negative() {
        let mut config = FitIntelligenceConfig::default();
        config.estimator.min_normalized_span = -1.0;
        assert!(config.validate().is_err());
    }
}
