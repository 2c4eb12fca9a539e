//! Commit event emitted by the tracker and consumed by the deck.

use crate::model::card::CardId;
use serde::{Deserialize, Serialize};

/// Direction of a committed swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwipeDirection {
    /// Pass.
    Left,
    /// Save.
    Right,
}

impl SwipeDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }

    /// Direction for a horizontal offset; zero counts as left.
    pub fn from_offset(offset_x: f64) -> Self {
        if offset_x > 0.0 {
            Self::Right
        } else {
            Self::Left
        }
    }
}

/// Finalized left/right decision for one card.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommitEvent {
    pub direction: SwipeDirection,
    pub card_id: CardId,
}

impl CommitEvent {
    pub fn new(direction: SwipeDirection, card_id: CardId) -> Self {
        Self { direction, card_id }
    }
}
