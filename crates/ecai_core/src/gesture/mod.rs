//! Drag-to-commit gesture handling for the topmost card.
//!
//! # Responsibility
//! - Turn a press/move/release pointer sequence into a commit decision.
//! - Derive continuous visual feedback while the card is dragged.
//! - Hold the global pointer subscription only while a drag is active.
//!
//! # Invariants
//! - One tracker per deck; it only ever drags the card on top.
//! - Out-of-order pointer events are ignored, never reported as errors.
//! - The pointer subscription is released on every exit from dragging.

pub mod capture;
pub mod event;
pub mod settle;
pub mod tracker;
pub mod visual;
