//! Card deck controller.
//!
//! # Responsibility
//! - Apply commit events to the deck under one fixed policy.
//! - Expose the top of the deck as a z-ordered stack for rendering.
//! - Defer deck mutations by a short delay so exit animations can play.
//!
//! # Invariants
//! - The policy is chosen at construction and never changes.
//! - Commits for ids not in the deck are ignored.
//! - Deferred mutations go through `on_commit`, so a duplicate commit for one
//!   card is a no-op when it comes due.

use crate::deck::{Deck, DeckError};
use crate::gesture::event::CommitEvent;
use crate::model::card::{CardId, DeckItem};
use log::{debug, info};

/// What a committed swipe does to the deck.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DeckPolicy {
    /// Remove the card for good; `reset` restores the original deck.
    #[default]
    Removal,
    /// Move the card to the bottom; the deck never empties.
    Rotation,
}

impl DeckPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Removal => "removal",
            Self::Rotation => "rotation",
        }
    }
}

/// Effect of one commit on the deck.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitOutcome<T> {
    Removed(T),
    Rotated(CardId),
    /// The id was not in the deck.
    Ignored,
}

/// One rendered layer of the card stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StackEntry<'a, T> {
    pub card: &'a T,
    /// 0 for the top card.
    pub depth: usize,
    pub z_index: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingCommit {
    event: CommitEvent,
    due_at_ms: u64,
}

/// Owns the deck and applies commit events to it.
#[derive(Debug, Clone)]
pub struct DeckController<T> {
    policy: DeckPolicy,
    original: Vec<T>,
    deck: Deck<T>,
    pending: Vec<PendingCommit>,
    base_z_index: i32,
}

impl<T: DeckItem + Clone> DeckController<T> {
    pub const DEFAULT_BASE_Z_INDEX: i32 = 100;

    /// Creates a controller over `cards`, remembering them for `reset`.
    pub fn new(cards: Vec<T>, policy: DeckPolicy) -> Result<Self, DeckError> {
        let deck = Deck::new(cards.clone())?;
        Ok(Self {
            policy,
            original: cards,
            deck,
            pending: Vec::new(),
            base_z_index: Self::DEFAULT_BASE_Z_INDEX,
        })
    }

    /// Overrides the z-index given to the top card.
    pub fn with_base_z_index(mut self, base_z_index: i32) -> Self {
        self.base_z_index = base_z_index;
        self
    }

    pub fn policy(&self) -> DeckPolicy {
        self.policy
    }

    pub fn deck(&self) -> &Deck<T> {
        &self.deck
    }

    /// Number of cards the deck started with.
    pub fn original_len(&self) -> usize {
        self.original.len()
    }

    /// Applies a commit immediately.
    pub fn on_commit(&mut self, event: &CommitEvent) -> CommitOutcome<T> {
        let outcome = match self.policy {
            DeckPolicy::Removal => self
                .deck
                .remove(&event.card_id)
                .map_or(CommitOutcome::Ignored, CommitOutcome::Removed),
            DeckPolicy::Rotation => {
                if self.deck.rotate_to_end(&event.card_id) {
                    CommitOutcome::Rotated(event.card_id.clone())
                } else {
                    CommitOutcome::Ignored
                }
            }
        };

        match &outcome {
            CommitOutcome::Ignored => debug!(
                "event=deck_commit module=deck status=ignored reason=unknown_card direction={}",
                event.direction.as_str()
            ),
            _ => info!(
                "event=deck_commit module=deck status=ok policy={} direction={} remaining={}",
                self.policy.as_str(),
                event.direction.as_str(),
                self.deck.len()
            ),
        }
        outcome
    }

    /// Queues a commit to be applied once `delay_ms` has passed.
    pub fn schedule_commit(&mut self, event: CommitEvent, now_ms: u64, delay_ms: u32) {
        self.pending.push(PendingCommit {
            event,
            due_at_ms: now_ms.saturating_add(u64::from(delay_ms)),
        });
    }

    /// Applies every queued commit due at `now_ms`, oldest first.
    pub fn advance(&mut self, now_ms: u64) -> Vec<CommitOutcome<T>> {
        let (due, waiting): (Vec<_>, Vec<_>) = std::mem::take(&mut self.pending)
            .into_iter()
            .partition(|pending| pending.due_at_ms <= now_ms);
        self.pending = waiting;
        due.iter()
            .map(|pending| self.on_commit(&pending.event))
            .collect()
    }

    /// Applies every queued commit regardless of due time.
    pub fn flush(&mut self) -> Vec<CommitOutcome<T>> {
        self.advance(u64::MAX)
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Whether a commit for `id` is queued but not yet applied.
    pub fn is_pending(&self, id: &CardId) -> bool {
        self.pending.iter().any(|pending| &pending.event.card_id == id)
    }

    /// Restores the original cards in original order.
    ///
    /// # Errors
    /// - `DeckError::ResetUnsupported` under the rotation policy.
    pub fn reset(&mut self) -> Result<(), DeckError> {
        if self.policy != DeckPolicy::Removal {
            return Err(DeckError::ResetUnsupported);
        }
        self.pending.clear();
        self.deck = Deck::new(self.original.clone())?;
        info!(
            "event=deck_reset module=deck status=ok size={}",
            self.deck.len()
        );
        Ok(())
    }

    /// Top `n` cards with their stack depth and z-index.
    pub fn top_slice(&self, n: usize) -> Vec<StackEntry<'_, T>> {
        self.deck
            .top_slice(n)
            .iter()
            .enumerate()
            .map(|(depth, card)| StackEntry {
                card,
                depth,
                z_index: self
                    .base_z_index
                    .saturating_sub(i32::try_from(depth).unwrap_or(i32::MAX)),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{CommitOutcome, DeckController, DeckPolicy};
    use crate::gesture::event::{CommitEvent, SwipeDirection};
    use crate::model::card::CardId;

    fn id(value: &str) -> CardId {
        CardId::new(value).expect("card id")
    }

    fn controller(policy: DeckPolicy) -> DeckController<CardId> {
        DeckController::new(vec![id("a"), id("b"), id("c")], policy).expect("controller")
    }

    #[test]
    fn scheduled_commit_waits_for_delay() {
        let mut controller = controller(DeckPolicy::Removal);
        controller.schedule_commit(CommitEvent::new(SwipeDirection::Right, id("a")), 1_000, 200);

        assert!(controller.advance(1_199).is_empty());
        assert!(controller.is_pending(&id("a")));
        assert_eq!(controller.deck().len(), 3);

        let applied = controller.advance(1_200);
        assert_eq!(applied, vec![CommitOutcome::Removed(id("a"))]);
        assert!(!controller.has_pending());
    }

    #[test]
    fn duplicate_scheduled_commit_is_ignored_when_due() {
        let mut controller = controller(DeckPolicy::Removal);
        let event = CommitEvent::new(SwipeDirection::Left, id("b"));
        controller.schedule_commit(event.clone(), 0, 200);
        controller.schedule_commit(event, 10, 200);

        let applied = controller.flush();
        assert_eq!(
            applied,
            vec![CommitOutcome::Removed(id("b")), CommitOutcome::Ignored]
        );
        assert_eq!(controller.deck().cards(), &[id("a"), id("c")]);
    }

    #[test]
    fn reset_drops_pending_commits() {
        let mut controller = controller(DeckPolicy::Removal);
        controller.on_commit(&CommitEvent::new(SwipeDirection::Left, id("a")));
        controller.schedule_commit(CommitEvent::new(SwipeDirection::Left, id("b")), 0, 200);

        controller.reset().expect("removal policy supports reset");
        assert!(!controller.has_pending());
        assert_eq!(controller.deck().cards(), &[id("a"), id("b"), id("c")]);
    }

    #[test]
    fn z_index_saturates_for_deep_stacks() {
        let controller = controller(DeckPolicy::Removal).with_base_z_index(i32::MIN + 1);
        let z: Vec<i32> = controller
            .top_slice(usize::MAX)
            .iter()
            .map(|entry| entry.z_index)
            .collect();
        assert_eq!(z, vec![i32::MIN + 1, i32::MIN, i32::MIN]);
    }

    #[test]
    fn z_index_counts_down_from_base() {
        let controller = controller(DeckPolicy::Rotation).with_base_z_index(10);
        let stack = controller.top_slice(3);
        let z: Vec<i32> = stack.iter().map(|entry| entry.z_index).collect();
        assert_eq!(z, vec![10, 9, 8]);
        assert_eq!(stack[2].depth, 2);
    }
}
