//! Core domain logic for the EC-AI opportunity matcher.
//! This crate owns swipe, deck and tracking rules; UI layers only render.

pub mod config;
pub mod deck;
pub mod fixtures;
pub mod gesture;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use config::{ConfigError, SwipeConfig};
pub use deck::controller::{CommitOutcome, DeckController, DeckPolicy, StackEntry};
pub use deck::{Deck, DeckError};
pub use gesture::capture::{ListenerFlagHost, PointerHost, PointerSubscription};
pub use gesture::event::{CommitEvent, SwipeDirection};
pub use gesture::settle::SettleAnimation;
pub use gesture::tracker::{DragState, GestureOutcome, GestureTracker};
pub use gesture::visual::{CardVisual, Offset, Point, Transition};
pub use logging::{init_logging, logging_status, LogLevel, LoggingError};
pub use model::activity::{
    Activity, ActivityDraft, ActivityId, ActivityValidationError, HourLog, HourLogDraft,
};
pub use model::card::{CardId, CardValidationError, DeckItem, Opportunity};
pub use repo::activity_repo::{
    ActivityRepository, InMemoryActivityRepository, RepoError, RepoResult,
};
pub use service::activity_service::{ActivitySort, ActivityService};
pub use service::match_service::{MatchError, MatchSession, SettlingCard, VisibleCard};
pub use service::notice::{Notice, NoticeVariant};
pub use service::report_service::{OpportunityReport, ReportError, ReportReason};
pub use service::saved_service::{SavedList, SavedOpportunity};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
