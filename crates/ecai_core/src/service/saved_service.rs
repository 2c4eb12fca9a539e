//! Saved opportunities list.
//!
//! # Responsibility
//! - Hold opportunities the student saved, with search and delete.
//! - Accept right-swiped cards from the match deck.
//!
//! # Invariants
//! - Ids are unique within the list; saving an existing id is a no-op.
//! - Search is a case-insensitive substring match over title and type.

use crate::model::card::{CardId, Opportunity};
use crate::service::notice::Notice;
use log::info;
use serde::{Deserialize, Serialize};

/// Canned reasons shown in the "top 3 reasons" dialog.
pub const JOIN_REASONS: [&str; 3] = [
    "Build specialized expertise in your field of interest with hands-on experience",
    "Network with like-minded peers and industry professionals for future opportunities",
    "Strengthen your college applications with demonstrable leadership and achievement",
];

/// One entry in the saved list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedOpportunity {
    pub id: CardId,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub location: String,
    pub duration: String,
    pub description: String,
    pub application_link: String,
}

impl From<&Opportunity> for SavedOpportunity {
    fn from(value: &Opportunity) -> Self {
        Self {
            id: value.id.clone(),
            title: value.title.clone(),
            kind: value.category.clone(),
            location: value.location.clone(),
            duration: value.time_commitment.clone(),
            description: value.description.clone(),
            application_link: String::new(),
        }
    }
}

/// In-memory saved list.
#[derive(Debug, Clone, Default)]
pub struct SavedList {
    entries: Vec<SavedOpportunity>,
}

impl SavedList {
    pub fn new(entries: Vec<SavedOpportunity>) -> Self {
        let mut list = Self::default();
        for entry in entries {
            list.save(entry);
        }
        list
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[SavedOpportunity] {
        &self.entries
    }

    pub fn get(&self, id: &CardId) -> Option<&SavedOpportunity> {
        self.entries.iter().find(|entry| &entry.id == id)
    }

    /// Appends an entry. Returns `false` when the id is already saved.
    pub fn save(&mut self, entry: SavedOpportunity) -> bool {
        if self.get(&entry.id).is_some() {
            return false;
        }
        self.entries.push(entry);
        true
    }

    /// Entries whose title or type contains `term`, ignoring case.
    pub fn search(&self, term: &str) -> Vec<&SavedOpportunity> {
        let needle = term.trim().to_lowercase();
        self.entries
            .iter()
            .filter(|entry| {
                needle.is_empty()
                    || entry.title.to_lowercase().contains(needle.as_str())
                    || entry.kind.to_lowercase().contains(needle.as_str())
            })
            .collect()
    }

    /// Removes one entry. Unknown ids produce no notice.
    pub fn delete(&mut self, id: &CardId) -> Option<Notice> {
        let before = self.entries.len();
        self.entries.retain(|entry| &entry.id != id);
        if self.entries.len() == before {
            return None;
        }
        info!(
            "event=saved_delete module=saved status=ok remaining={}",
            self.entries.len()
        );
        Some(Notice::info(
            "Opportunity Removed",
            "The opportunity has been removed from your saved list.",
        ))
    }

    /// Dialog title and reasons for one entry.
    pub fn join_reasons(&self, id: &CardId) -> Option<(String, [&'static str; 3])> {
        self.get(id)
            .map(|entry| (format!("Top 3 Reasons to Join {}", entry.title), JOIN_REASONS))
    }
}

#[cfg(test)]
mod tests {
    use super::SavedList;
    use crate::fixtures::saved_opportunities;
    use crate::model::card::CardId;

    #[test]
    fn search_matches_title_or_type_ignoring_case() {
        let list = SavedList::new(saved_opportunities());
        let hits = list.search("SCIENCE");
        assert_eq!(hits.len(), 2);

        let hits = list.search("olympiad");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id.as_str(), "saved-1");

        assert_eq!(list.search("").len(), 3);
        assert!(list.search("robotics").is_empty());
    }

    #[test]
    fn delete_returns_notice_only_for_known_ids() {
        let mut list = SavedList::new(saved_opportunities());
        let id = CardId::new("saved-2").unwrap();
        assert!(list.delete(&id).is_some());
        assert!(list.delete(&id).is_none());
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn save_ignores_existing_ids() {
        let mut list = SavedList::new(saved_opportunities());
        let duplicate = list.entries()[0].clone();
        assert!(!list.save(duplicate));
        assert_eq!(list.len(), 3);
    }
}
