//! Gesture tracker state machine.
//!
//! # Responsibility
//! - Track one drag on the topmost card: `Idle -> Dragging -> Idle`.
//! - Decide on release whether horizontal travel reached the commit threshold.
//!
//! # Invariants
//! - `DragState` exists only between `begin` and `end`/`cancel`.
//! - `update`, `end` and `cancel` outside a drag are ignored.
//! - A second `begin` while dragging restarts the drag in place and keeps the
//!   existing pointer subscription.
//! - Every exit from dragging zeroes the offset and releases the subscription.

use crate::config::SwipeConfig;
use crate::gesture::capture::{CaptureGuard, PointerHost};
use crate::gesture::event::{CommitEvent, SwipeDirection};
use crate::gesture::settle::SettleAnimation;
use crate::gesture::visual::{CardVisual, Offset, Point, Transition};
use crate::model::card::CardId;
use log::debug;

/// Transient per-gesture state.
#[derive(Debug, Clone, PartialEq)]
pub struct DragState {
    pub card_id: CardId,
    pub start: Point,
    pub offset: Offset,
}

/// Result of releasing a drag.
#[derive(Debug, Clone, PartialEq)]
pub struct GestureOutcome {
    pub card_id: CardId,
    /// `Some` only when horizontal travel reached the commit threshold.
    pub commit: Option<CommitEvent>,
    /// Eased return from the release offset to rest.
    pub settle: SettleAnimation,
}

/// Single drag tracker scoped to whichever card is on top.
pub struct GestureTracker {
    config: SwipeConfig,
    drag: Option<DragState>,
    capture: Option<CaptureGuard>,
}

impl GestureTracker {
    pub fn new(config: SwipeConfig) -> Self {
        Self {
            config,
            drag: None,
            capture: None,
        }
    }

    pub fn config(&self) -> &SwipeConfig {
        &self.config
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn drag_state(&self) -> Option<&DragState> {
        self.drag.as_ref()
    }

    /// Card currently being dragged.
    pub fn active_card(&self) -> Option<&CardId> {
        self.drag.as_ref().map(|drag| &drag.card_id)
    }

    /// Starts (or restarts) a drag at `position`.
    ///
    /// The pointer subscription is acquired only on the `Idle -> Dragging`
    /// transition.
    pub fn begin(&mut self, card_id: CardId, position: Point, host: &mut dyn PointerHost) {
        let restarted = self.drag.is_some();
        if self.capture.is_none() {
            self.capture = Some(CaptureGuard::acquire(host));
        }
        self.drag = Some(DragState {
            card_id,
            start: position,
            offset: Offset::ZERO,
        });
        debug!("event=gesture_begin module=gesture status=ok restarted={restarted}");
    }

    /// Moves the dragged card. Returns the new visual, or `None` when idle.
    pub fn update(&mut self, position: Point) -> Option<CardVisual> {
        let drag = self.drag.as_mut()?;
        drag.offset = Offset::new(
            position.x - drag.start.x,
            (position.y - drag.start.y) * self.config.vertical_damping,
        );
        Some(CardVisual::for_drag(drag.offset, &self.config))
    }

    /// Releases the drag. Returns `None` when no drag was active.
    pub fn end(&mut self) -> Option<GestureOutcome> {
        let drag = self.finish()?;
        let commit = if drag.offset.x.abs() >= self.config.commit_threshold {
            Some(CommitEvent::new(
                SwipeDirection::from_offset(drag.offset.x),
                drag.card_id.clone(),
            ))
        } else {
            None
        };
        debug!(
            "event=gesture_end module=gesture status=ok committed={} offset_x={:.1}",
            commit.is_some(),
            drag.offset.x
        );

        Some(GestureOutcome {
            card_id: drag.card_id,
            commit,
            settle: SettleAnimation::new(drag.offset, self.config.settle_duration_ms),
        })
    }

    /// Abandons the drag without committing (pointer lost, card torn down).
    pub fn cancel(&mut self) -> Option<SettleAnimation> {
        let drag = self.finish()?;
        debug!("event=gesture_cancel module=gesture status=ok");
        Some(SettleAnimation::new(
            drag.offset,
            self.config.settle_duration_ms,
        ))
    }

    /// Current visual of the dragged card; identity when idle.
    pub fn visual(&self) -> CardVisual {
        match &self.drag {
            Some(drag) => CardVisual::for_drag(drag.offset, &self.config),
            None => CardVisual::IDENTITY,
        }
    }

    /// Transition to apply to the tracked card.
    pub fn transition(&self) -> Transition {
        if self.is_dragging() {
            Transition::None
        } else {
            Transition::EaseOut {
                duration_ms: self.config.settle_duration_ms,
            }
        }
    }

    fn finish(&mut self) -> Option<DragState> {
        let drag = self.drag.take()?;
        // Dropping the guard detaches the global listeners.
        self.capture = None;
        Some(drag)
    }
}
