//! Eased return of a released card to its resting position.

use crate::config::SwipeConfig;
use crate::gesture::visual::{CardVisual, Offset, Transition};
use serde::{Deserialize, Serialize};

/// Timed ease-out from the release offset back to zero.
///
/// Hosts that animate with CSS only need `transition()`; hosts that drive
/// their own frames sample `offset_at`/`visual_at` with elapsed time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettleAnimation {
    pub from: Offset,
    pub duration_ms: u32,
}

impl SettleAnimation {
    pub fn new(from: Offset, duration_ms: u32) -> Self {
        Self { from, duration_ms }
    }

    pub fn transition(&self) -> Transition {
        Transition::EaseOut {
            duration_ms: self.duration_ms,
        }
    }

    /// Offset `elapsed_ms` after release.
    pub fn offset_at(&self, elapsed_ms: u64) -> Offset {
        let remaining = 1.0 - ease_out_cubic(self.progress(elapsed_ms));
        Offset::new(self.from.x * remaining, self.from.y * remaining)
    }

    /// Card visual `elapsed_ms` after release. Indicators stay hidden.
    pub fn visual_at(&self, elapsed_ms: u64, config: &SwipeConfig) -> CardVisual {
        CardVisual::for_offset(self.offset_at(elapsed_ms), config)
    }

    pub fn is_finished(&self, elapsed_ms: u64) -> bool {
        elapsed_ms >= u64::from(self.duration_ms)
    }

    fn progress(&self, elapsed_ms: u64) -> f64 {
        if self.duration_ms == 0 {
            return 1.0;
        }
        (elapsed_ms as f64 / f64::from(self.duration_ms)).clamp(0.0, 1.0)
    }
}

fn ease_out_cubic(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(3)
}
