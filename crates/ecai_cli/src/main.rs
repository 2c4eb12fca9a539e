//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `ecai_core` linkage.
//! - Replay a scripted swipe session over the placeholder deck.
//! - Keep output deterministic for quick local sanity checks.

use ecai_core::fixtures::swipe_opportunities;
use ecai_core::{DeckPolicy, ListenerFlagHost, MatchSession, Point, SwipeConfig};

/// Horizontal drag distances replayed against the top card, one per step.
const SCRIPTED_DRAGS: [f64; 4] = [150.0, -120.0, 40.0, 100.0];

fn main() {
    println!("ecai_core ping={}", ecai_core::ping());
    println!("ecai_core version={}", ecai_core::core_version());

    if let Err(err) = replay(DeckPolicy::Removal) {
        eprintln!("ecai_core replay failed: {err}");
        std::process::exit(1);
    }
}

fn replay(policy: DeckPolicy) -> Result<(), ecai_core::MatchError> {
    let host = ListenerFlagHost::new();
    let mut session = MatchSession::new(
        swipe_opportunities(),
        policy,
        SwipeConfig::default(),
        Box::new(host.clone()),
    )?;
    let delay_ms = u64::from(session.config().commit_delay_ms);

    let mut now_ms = 0_u64;
    for dx in SCRIPTED_DRAGS {
        let start = Point { x: 200.0, y: 300.0 };
        session.pointer_down(start);
        session.pointer_move(Point {
            x: start.x + dx,
            y: start.y,
        });
        let outcome = session.pointer_up(now_ms);
        let decision = outcome
            .as_ref()
            .and_then(|outcome| outcome.commit.as_ref())
            .map_or("settle", |event| event.direction.as_str());
        now_ms += delay_ms;
        session.tick(now_ms);
        println!(
            "drag dx={dx} decision={decision} remaining={} listening={}",
            session.deck().len(),
            host.is_listening()
        );
    }

    for notice in session.drain_notices() {
        println!("notice title={:?}", notice.title);
    }
    println!(
        "saved={} can_reset={}",
        session.saved_count(),
        session.can_reset()
    );
    Ok(())
}
