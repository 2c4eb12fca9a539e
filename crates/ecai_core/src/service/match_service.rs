//! Opportunity match session.
//!
//! # Responsibility
//! - Route pointer input to the single gesture tracker for the top card.
//! - Turn commits into saved-list updates, notices and deferred deck
//!   mutations.
//! - Expose the render contract for the visible card stack.
//!
//! # Invariants
//! - Only the topmost card not awaiting removal can be dragged.
//! - A commit for a card that is absent or already awaiting removal is
//!   ignored: no notice, no saved-list change.
//! - `reset` clears saved ids and any pending mutation.
//! - `unsave` is the only other way an id leaves the saved ids.

use crate::config::{ConfigError, SwipeConfig};
use crate::deck::controller::{CommitOutcome, DeckController, DeckPolicy};
use crate::deck::{Deck, DeckError};
use crate::gesture::capture::PointerHost;
use crate::gesture::event::{CommitEvent, SwipeDirection};
use crate::gesture::settle::SettleAnimation;
use crate::gesture::tracker::{GestureOutcome, GestureTracker};
use crate::gesture::visual::{CardVisual, Point, Transition};
use crate::model::card::{CardId, CardValidationError, Opportunity};
use crate::service::notice::Notice;
use crate::service::report_service::{submit_report, OpportunityReport, ReportError, ReportReason};
use crate::service::saved_service::SavedOpportunity;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Session construction errors.
#[derive(Debug, Clone, PartialEq)]
pub enum MatchError {
    Config(ConfigError),
    Card(CardValidationError),
    Deck(DeckError),
}

impl Display for MatchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(err) => write!(f, "{err}"),
            Self::Card(err) => write!(f, "{err}"),
            Self::Deck(err) => write!(f, "{err}"),
        }
    }
}

impl Error for MatchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::Card(err) => Some(err),
            Self::Deck(err) => Some(err),
        }
    }
}

impl From<ConfigError> for MatchError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<CardValidationError> for MatchError {
    fn from(value: CardValidationError) -> Self {
        Self::Card(value)
    }
}

impl From<DeckError> for MatchError {
    fn from(value: DeckError) -> Self {
        Self::Deck(value)
    }
}

/// Render contract for one card in the stack.
#[derive(Debug, Clone, PartialEq)]
pub struct VisibleCard {
    pub card: Opportunity,
    pub depth: usize,
    pub z_index: i32,
    pub visual: CardVisual,
    pub transition: Transition,
    /// Whether this card currently receives pointer input.
    pub interactive: bool,
}

/// Card easing back to rest after a release.
#[derive(Debug, Clone, PartialEq)]
pub struct SettlingCard {
    pub card_id: CardId,
    pub visual: CardVisual,
}

#[derive(Debug, Clone, PartialEq)]
struct Release {
    card_id: CardId,
    settle: SettleAnimation,
    released_at_ms: u64,
}

/// One swipe-matching session over a fixed opportunity list.
pub struct MatchSession {
    tracker: GestureTracker,
    controller: DeckController<Opportunity>,
    host: Box<dyn PointerHost>,
    saved: Vec<SavedOpportunity>,
    notices: Vec<Notice>,
    last_release: Option<Release>,
}

impl MatchSession {
    /// Creates a session after validating config and cards.
    pub fn new(
        cards: Vec<Opportunity>,
        policy: DeckPolicy,
        config: SwipeConfig,
        host: Box<dyn PointerHost>,
    ) -> Result<Self, MatchError> {
        config.validate()?;
        for card in &cards {
            card.validate()?;
        }
        let controller =
            DeckController::new(cards, policy)?.with_base_z_index(config.base_z_index);
        info!(
            "event=match_session_init module=match status=ok policy={} size={}",
            policy.as_str(),
            controller.deck().len()
        );

        Ok(Self {
            tracker: GestureTracker::new(config),
            controller,
            host,
            saved: Vec::new(),
            notices: Vec::new(),
            last_release: None,
        })
    }

    pub fn config(&self) -> &SwipeConfig {
        self.tracker.config()
    }

    pub fn deck(&self) -> &Deck<Opportunity> {
        self.controller.deck()
    }

    pub fn policy(&self) -> DeckPolicy {
        self.controller.policy()
    }

    pub fn is_empty(&self) -> bool {
        self.controller.deck().is_empty()
    }

    pub fn is_dragging(&self) -> bool {
        self.tracker.is_dragging()
    }

    /// Opportunities saved by right swipes, in save order.
    pub fn saved(&self) -> &[SavedOpportunity] {
        &self.saved
    }

    pub fn saved_count(&self) -> usize {
        self.saved.len()
    }

    /// Forgets a saved card. Returns `false` when it was not saved here.
    pub fn unsave(&mut self, card_id: &CardId) -> bool {
        let before = self.saved.len();
        self.saved.retain(|saved| &saved.id != card_id);
        self.saved.len() != before
    }

    /// Whether the reset control is enabled.
    pub fn can_reset(&self) -> bool {
        self.controller.policy() == DeckPolicy::Removal
            && self.controller.deck().len() != self.controller.original_len()
    }

    /// Top card that still accepts input: the first one not already on its
    /// way out.
    pub fn active_top(&self) -> Option<&Opportunity> {
        self.controller
            .deck()
            .cards()
            .iter()
            .find(|card| !self.controller.is_pending(&card.id))
    }

    /// Pointer pressed on the top card. Returns `false` when no card accepts
    /// input.
    pub fn pointer_down(&mut self, position: Point) -> bool {
        let Some(top) = self.active_top() else {
            return false;
        };
        let card_id = top.id.clone();
        self.tracker.begin(card_id, position, self.host.as_mut());
        true
    }

    pub fn pointer_move(&mut self, position: Point) -> Option<CardVisual> {
        self.tracker.update(position)
    }

    /// Pointer released; applies a commit when the threshold was reached.
    pub fn pointer_up(&mut self, now_ms: u64) -> Option<GestureOutcome> {
        let outcome = self.tracker.end()?;
        self.last_release = Some(Release {
            card_id: outcome.card_id.clone(),
            settle: outcome.settle,
            released_at_ms: now_ms,
        });
        if let Some(event) = &outcome.commit {
            self.apply_commit(event.clone(), now_ms);
        }
        Some(outcome)
    }

    /// Pointer lost or card torn down mid-drag.
    pub fn pointer_cancel(&mut self, now_ms: u64) {
        let Some(active) = self.tracker.active_card().cloned() else {
            return;
        };
        if let Some(settle) = self.tracker.cancel() {
            self.last_release = Some(Release {
                card_id: active,
                settle,
                released_at_ms: now_ms,
            });
        }
    }

    /// "Heart" button: saves the top card.
    pub fn like(&mut self, now_ms: u64) -> Option<CommitEvent> {
        self.commit_top(SwipeDirection::Right, now_ms)
    }

    /// "X" button: passes on the top card.
    pub fn pass(&mut self, now_ms: u64) -> Option<CommitEvent> {
        self.commit_top(SwipeDirection::Left, now_ms)
    }

    /// Applies deck mutations that are due. Returns how many changed the deck.
    pub fn tick(&mut self, now_ms: u64) -> usize {
        self.controller
            .advance(now_ms)
            .iter()
            .filter(|outcome| !matches!(outcome, CommitOutcome::Ignored))
            .count()
    }

    /// Restores every card and clears the saved ids.
    pub fn reset(&mut self) -> Result<(), DeckError> {
        self.controller.reset()?;
        self.tracker.cancel();
        self.last_release = None;
        self.saved.clear();
        self.notices.push(Notice::info(
            "Cards Reset",
            "All opportunities have been restored.",
        ));
        Ok(())
    }

    /// Top of the stack with the visual each card should render.
    pub fn visible_cards(&self) -> Vec<VisibleCard> {
        let dragged = self.tracker.active_card();
        let active = self.active_top().map(|card| &card.id);
        let settle_transition = Transition::EaseOut {
            duration_ms: self.config().settle_duration_ms,
        };
        self.controller
            .top_slice(self.config().stack_depth)
            .into_iter()
            .map(|entry| {
                let is_dragged = dragged == Some(&entry.card.id);
                VisibleCard {
                    card: entry.card.clone(),
                    depth: entry.depth,
                    z_index: entry.z_index,
                    visual: if is_dragged {
                        self.tracker.visual()
                    } else {
                        CardVisual::IDENTITY
                    },
                    transition: if is_dragged {
                        Transition::None
                    } else {
                        settle_transition
                    },
                    interactive: active == Some(&entry.card.id),
                }
            })
            .collect()
    }

    /// Sampled visual of the last released card while it eases back.
    pub fn settling_card(&self, now_ms: u64) -> Option<SettlingCard> {
        let release = self.last_release.as_ref()?;
        let elapsed = now_ms.saturating_sub(release.released_at_ms);
        if self.tracker.is_dragging() || release.settle.is_finished(elapsed) {
            return None;
        }
        Some(SettlingCard {
            card_id: release.card_id.clone(),
            visual: release.settle.visual_at(elapsed, self.config()),
        })
    }

    /// Takes the notices produced since the last call.
    pub fn drain_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    /// Reports a card currently in the deck.
    pub fn report(
        &mut self,
        card_id: &CardId,
        reason: Option<ReportReason>,
        description: &str,
    ) -> Result<OpportunityReport, ReportError> {
        let result = match self.controller.deck().get(card_id) {
            Some(card) => submit_report(card, reason, description),
            None => Err(ReportError::UnknownCard(card_id.clone())),
        };
        match result {
            Ok((report, notice)) => {
                self.notices.push(notice);
                Ok(report)
            }
            Err(err) => {
                warn!("event=report_submit module=report status=rejected error={err}");
                self.notices.push(err.notice());
                Err(err)
            }
        }
    }

    fn commit_top(&mut self, direction: SwipeDirection, now_ms: u64) -> Option<CommitEvent> {
        let top = self.active_top()?.id.clone();
        self.tracker.cancel();
        let event = CommitEvent::new(direction, top);
        self.apply_commit(event.clone(), now_ms).then_some(event)
    }

    fn apply_commit(&mut self, event: CommitEvent, now_ms: u64) -> bool {
        if self.controller.is_pending(&event.card_id) {
            return false;
        }
        let Some(card) = self.controller.deck().get(&event.card_id) else {
            return false;
        };

        let notice = match event.direction {
            SwipeDirection::Right => {
                if !self.saved.iter().any(|saved| saved.id == card.id) {
                    self.saved.push(SavedOpportunity::from(card));
                }
                Notice::info(
                    "Opportunity Saved! 💚",
                    format!("{} has been added to your interests.", card.title),
                )
            }
            SwipeDirection::Left => Notice::destructive(
                "Passed",
                format!("{} has been passed.", card.title),
            ),
        };
        self.notices.push(notice);

        let delay_ms = self.config().commit_delay_ms;
        self.controller.schedule_commit(event, now_ms, delay_ms);
        true
    }
}
