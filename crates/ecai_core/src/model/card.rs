//! Swipe card domain model.
//!
//! # Responsibility
//! - Define the stable card identity consumed by the deck.
//! - Define the opportunity record rendered on each card.
//!
//! # Invariants
//! - `CardId` is never empty once constructed through `CardId::new`.
//! - Opportunities are never mutated by deck operations.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Maximum number of tags rendered before the overflow badge.
pub const VISIBLE_TAG_LIMIT: usize = 4;

/// Stable identifier for one card in a deck.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CardId(String);

impl CardId {
    /// Creates an identifier from caller input.
    ///
    /// # Errors
    /// - Returns `CardValidationError::EmptyId` for blank input.
    pub fn new(value: impl Into<String>) -> Result<Self, CardValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(CardValidationError::EmptyId);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl TryFrom<String> for CardId {
    type Error = CardValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CardId> for String {
    fn from(value: CardId) -> Self {
        value.0
    }
}

impl Display for CardId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0.as_str())
    }
}

/// Anything a deck can hold. The deck only looks at the identifier.
pub trait DeckItem {
    fn card_id(&self) -> &CardId;
}

impl DeckItem for CardId {
    fn card_id(&self) -> &CardId {
        self
    }
}

/// Card validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardValidationError {
    EmptyId,
    EmptyTitle,
}

impl Display for CardValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyId => write!(f, "card id must not be empty"),
            Self::EmptyTitle => write!(f, "card title must not be empty"),
        }
    }
}

impl Error for CardValidationError {}

/// Extracurricular opportunity shown on a swipe card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Opportunity {
    pub id: CardId,
    pub title: String,
    pub organization: String,
    pub description: String,
    pub location: String,
    pub time_commitment: String,
    pub category: String,
    pub participants: u32,
    /// Display string such as `Due Feb 15`.
    pub deadline: String,
    pub tags: Vec<String>,
}

impl Opportunity {
    /// Presence check for the fields a card cannot render without.
    pub fn validate(&self) -> Result<(), CardValidationError> {
        if self.id.as_str().trim().is_empty() {
            return Err(CardValidationError::EmptyId);
        }
        if self.title.trim().is_empty() {
            return Err(CardValidationError::EmptyTitle);
        }
        Ok(())
    }

    /// Tags shown as badges on the card face.
    pub fn visible_tags(&self) -> &[String] {
        let end = self.tags.len().min(VISIBLE_TAG_LIMIT);
        &self.tags[..end]
    }

    /// Count rendered in the `+N` overflow badge, `None` when all tags fit.
    pub fn hidden_tag_count(&self) -> Option<usize> {
        self.tags
            .len()
            .checked_sub(VISIBLE_TAG_LIMIT)
            .filter(|count| *count > 0)
    }
}

impl DeckItem for Opportunity {
    fn card_id(&self) -> &CardId {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::{CardId, CardValidationError};
    use crate::fixtures::swipe_opportunities;

    #[test]
    fn card_id_rejects_blank_values() {
        assert_eq!(
            CardId::new("   ").expect_err("blank id must fail"),
            CardValidationError::EmptyId
        );
        assert_eq!(CardId::new("7").expect("id").as_str(), "7");
    }

    #[test]
    fn tag_overflow_only_counts_hidden_tags() {
        let mut opportunity = swipe_opportunities().remove(0);
        assert_eq!(opportunity.visible_tags().len(), 4);
        assert_eq!(opportunity.hidden_tag_count(), None);

        opportunity.tags.push("Outdoors".to_string());
        opportunity.tags.push("Community".to_string());
        assert_eq!(opportunity.visible_tags().len(), 4);
        assert_eq!(opportunity.hidden_tag_count(), Some(2));
    }
}
