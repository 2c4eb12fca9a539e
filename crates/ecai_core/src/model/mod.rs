//! Domain model for swipe cards and tracked activities.
//!
//! # Responsibility
//! - Define the records shared by the match deck, saved list and tracker.
//! - Keep presence-only validation next to the data it guards.
//!
//! # Invariants
//! - Every card is identified by a non-empty `CardId`.
//! - The deck only reads identifiers; display fields are opaque to it.

pub mod activity;
pub mod card;
