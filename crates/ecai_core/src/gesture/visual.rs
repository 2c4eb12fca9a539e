//! Geometry and the per-card rendering contract.

use crate::config::SwipeConfig;
use serde::{Deserialize, Serialize};

/// Pointer position in viewport pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Card displacement from its resting position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
}

impl Offset {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }
}

/// CSS-style transition the presentation layer applies to transform and
/// opacity changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Transition {
    /// Follow the pointer immediately (while dragging).
    None,
    /// Ease out toward the new value.
    EaseOut { duration_ms: u32 },
}

/// Derived, read-only visual state of one card.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardVisual {
    pub translate_x: f64,
    pub translate_y: f64,
    pub rotate_deg: f64,
    pub opacity: f64,
    /// "Interested" badge.
    pub committing_right: bool,
    /// "Pass" badge.
    pub committing_left: bool,
}

impl CardVisual {
    /// Resting card: no translation, no rotation, fully opaque.
    pub const IDENTITY: Self = Self {
        translate_x: 0.0,
        translate_y: 0.0,
        rotate_deg: 0.0,
        opacity: 1.0,
        committing_right: false,
        committing_left: false,
    };

    /// Visual for a card dragged to `offset`.
    pub fn for_drag(offset: Offset, config: &SwipeConfig) -> Self {
        Self {
            committing_right: offset.x > config.indicator_threshold,
            committing_left: offset.x < -config.indicator_threshold,
            ..Self::for_offset(offset, config)
        }
    }

    /// Transform and opacity for `offset` with both indicators hidden.
    pub fn for_offset(offset: Offset, config: &SwipeConfig) -> Self {
        let faded = 1.0 - offset.x.abs() / config.opacity_falloff;
        Self {
            translate_x: offset.x,
            translate_y: offset.y,
            rotate_deg: offset.x * config.rotation_factor,
            opacity: faded.max(config.opacity_floor),
            committing_right: false,
            committing_left: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{CardVisual, Offset};
    use crate::config::SwipeConfig;

    #[test]
    fn zero_offset_matches_identity() {
        let visual = CardVisual::for_drag(Offset::ZERO, &SwipeConfig::default());
        assert_eq!(visual, CardVisual::IDENTITY);
    }

    #[test]
    fn indicators_use_strict_threshold() {
        let config = SwipeConfig::default();
        assert!(!CardVisual::for_drag(Offset::new(50.0, 0.0), &config).committing_right);
        assert!(CardVisual::for_drag(Offset::new(50.5, 0.0), &config).committing_right);
        assert!(!CardVisual::for_drag(Offset::new(-50.0, 0.0), &config).committing_left);
        assert!(CardVisual::for_drag(Offset::new(-51.0, 0.0), &config).committing_left);
    }

    #[test]
    fn rotation_and_opacity_follow_horizontal_offset() {
        let visual = CardVisual::for_drag(Offset::new(-30.0, 4.0), &SwipeConfig::default());
        assert!((visual.rotate_deg + 3.0).abs() < 1e-9);
        assert!((visual.opacity - 0.9).abs() < 1e-9);
        assert_eq!(visual.translate_y, 4.0);
    }
}
