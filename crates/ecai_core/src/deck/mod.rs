//! Ordered card deck and its commit-driven controller.
//!
//! # Responsibility
//! - Keep the working set of cards in stacking order (index 0 on top).
//! - Apply committed swipes through remove-by-id or rotate-to-end-by-id.
//!
//! # Invariants
//! - A deck never contains two cards with the same id.
//! - Operations on an unknown id leave the deck untouched.

pub mod controller;

use crate::model::card::{CardId, DeckItem};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Deck construction and policy errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeckError {
    DuplicateCardId(CardId),
    /// `reset` was called on a controller using the rotation policy.
    ResetUnsupported,
}

impl Display for DeckError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateCardId(id) => write!(f, "duplicate card id in deck: {id}"),
            Self::ResetUnsupported => {
                write!(f, "reset is only available with the removal policy")
            }
        }
    }
}

impl Error for DeckError {}

/// Ordered sequence of unique cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck<T> {
    cards: Vec<T>,
}

impl<T: DeckItem> Deck<T> {
    /// Builds a deck, rejecting duplicate ids.
    pub fn new(cards: Vec<T>) -> Result<Self, DeckError> {
        let mut seen = HashSet::with_capacity(cards.len());
        for card in &cards {
            if !seen.insert(card.card_id()) {
                return Err(DeckError::DuplicateCardId(card.card_id().clone()));
            }
        }
        Ok(Self { cards })
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[T] {
        &self.cards
    }

    pub fn top(&self) -> Option<&T> {
        self.cards.first()
    }

    pub fn get(&self, id: &CardId) -> Option<&T> {
        self.cards.iter().find(|card| card.card_id() == id)
    }

    pub fn position(&self, id: &CardId) -> Option<usize> {
        self.cards.iter().position(|card| card.card_id() == id)
    }

    pub fn contains(&self, id: &CardId) -> bool {
        self.position(id).is_some()
    }

    /// Card ids in stacking order.
    pub fn ids(&self) -> Vec<&CardId> {
        self.cards.iter().map(DeckItem::card_id).collect()
    }

    /// First `n` cards in order (fewer when the deck is shorter).
    pub fn top_slice(&self, n: usize) -> &[T] {
        &self.cards[..n.min(self.cards.len())]
    }

    /// Removes one card, preserving the order of the rest.
    pub fn remove(&mut self, id: &CardId) -> Option<T> {
        let index = self.position(id)?;
        Some(self.cards.remove(index))
    }

    /// Moves one card to the bottom. Returns `false` for an unknown id.
    pub fn rotate_to_end(&mut self, id: &CardId) -> bool {
        match self.position(id) {
            Some(index) => {
                self.cards[index..].rotate_left(1);
                true
            }
            None => false,
        }
    }
}
