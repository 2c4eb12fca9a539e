//! Tunable swipe interaction constants.
//!
//! # Responsibility
//! - Hold every threshold and factor the gesture tracker and deck use.
//! - Load optional JSON overrides and reject values that break the
//!   interaction contract.
//!
//! # Invariants
//! - `SwipeConfig::default()` reproduces the shipped interaction feel.
//! - A config returned by `from_json` has passed `validate()`.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Swipe tuning parameters.
///
/// Missing JSON fields fall back to the default value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwipeConfig {
    /// Horizontal distance (px) at or beyond which release commits.
    pub commit_threshold: f64,
    /// Horizontal distance (px) beyond which an indicator badge shows.
    pub indicator_threshold: f64,
    /// Factor applied to vertical pointer travel.
    pub vertical_damping: f64,
    /// Degrees of rotation per px of horizontal offset.
    pub rotation_factor: f64,
    /// Lowest opacity a dragged card can reach.
    pub opacity_floor: f64,
    /// Horizontal distance over which opacity falls from 1 toward the floor.
    pub opacity_falloff: f64,
    /// Duration of the eased return to neutral after release.
    pub settle_duration_ms: u32,
    /// Delay between a commit decision and the deck mutation.
    pub commit_delay_ms: u32,
    /// Number of cards rendered in the stack.
    pub stack_depth: usize,
    /// z-index of the topmost card; deeper cards count down from it.
    pub base_z_index: i32,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            commit_threshold: 100.0,
            indicator_threshold: 50.0,
            vertical_damping: 0.1,
            rotation_factor: 0.1,
            opacity_floor: 0.8,
            opacity_falloff: 300.0,
            settle_duration_ms: 300,
            commit_delay_ms: 200,
            stack_depth: 3,
            base_z_index: 100,
        }
    }
}

impl SwipeConfig {
    /// Parses a JSON override and validates the result.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(raw).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the relations the tracker relies on.
    ///
    /// # Errors
    /// - Non-finite or non-positive thresholds, falloff.
    /// - Indicator threshold above the commit threshold.
    /// - Opacity floor outside `0.0..=1.0`.
    /// - Zero stack depth.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("commit_threshold", self.commit_threshold)?;
        positive("indicator_threshold", self.indicator_threshold)?;
        positive("opacity_falloff", self.opacity_falloff)?;
        finite("vertical_damping", self.vertical_damping)?;
        finite("rotation_factor", self.rotation_factor)?;

        if self.indicator_threshold > self.commit_threshold {
            return Err(ConfigError::IndicatorAboveCommit {
                indicator: self.indicator_threshold,
                commit: self.commit_threshold,
            });
        }
        if !(0.0..=1.0).contains(&self.opacity_floor) {
            return Err(ConfigError::OpacityFloorOutOfRange(self.opacity_floor));
        }
        if self.stack_depth == 0 {
            return Err(ConfigError::EmptyStack);
        }
        Ok(())
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { field, value })
    }
}

fn finite(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonFinite { field, value })
    }
}

/// Swipe configuration errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    Parse(String),
    NonPositive { field: &'static str, value: f64 },
    NonFinite { field: &'static str, value: f64 },
    IndicatorAboveCommit { indicator: f64, commit: f64 },
    OpacityFloorOutOfRange(f64),
    EmptyStack,
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(message) => write!(f, "invalid swipe config JSON: {message}"),
            Self::NonPositive { field, value } => {
                write!(f, "`{field}` must be a positive number, got {value}")
            }
            Self::NonFinite { field, value } => {
                write!(f, "`{field}` must be finite, got {value}")
            }
            Self::IndicatorAboveCommit { indicator, commit } => write!(
                f,
                "indicator_threshold ({indicator}) must not exceed commit_threshold ({commit})"
            ),
            Self::OpacityFloorOutOfRange(value) => {
                write!(f, "opacity_floor must be within 0..=1, got {value}")
            }
            Self::EmptyStack => write!(f, "stack_depth must be at least 1"),
        }
    }
}

impl Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::{ConfigError, SwipeConfig};

    #[test]
    fn default_config_is_valid() {
        SwipeConfig::default()
            .validate()
            .expect("default config should validate");
    }

    #[test]
    fn partial_json_keeps_defaults_for_missing_fields() {
        let config = SwipeConfig::from_json(r#"{ "commit_threshold": 140.0 }"#)
            .expect("partial override should parse");
        assert_eq!(config.commit_threshold, 140.0);
        assert_eq!(config.indicator_threshold, 50.0);
        assert_eq!(config.stack_depth, 3);
    }

    #[test]
    fn rejects_indicator_beyond_commit_threshold() {
        let err = SwipeConfig::from_json(r#"{ "indicator_threshold": 120.0 }"#)
            .expect_err("indicator above commit must fail");
        assert!(matches!(err, ConfigError::IndicatorAboveCommit { .. }));
    }

    #[test]
    fn rejects_out_of_range_values() {
        let err = SwipeConfig::from_json(r#"{ "opacity_floor": 1.5 }"#).unwrap_err();
        assert_eq!(err, ConfigError::OpacityFloorOutOfRange(1.5));

        let err = SwipeConfig::from_json(r#"{ "stack_depth": 0 }"#).unwrap_err();
        assert_eq!(err, ConfigError::EmptyStack);

        let err = SwipeConfig::from_json(r#"{ "commit_threshold": -1.0 }"#).unwrap_err();
        assert!(err.to_string().contains("commit_threshold"));
    }

    #[test]
    fn rejects_malformed_json() {
        let err = SwipeConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
