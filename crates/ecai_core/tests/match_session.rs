use ecai_core::fixtures::swipe_opportunities;
use ecai_core::{
    CardId, DeckError, DeckPolicy, ListenerFlagHost, MatchError, MatchSession, NoticeVariant,
    Point, ReportError, ReportReason, SwipeConfig, SwipeDirection, Transition,
};

fn session(policy: DeckPolicy) -> (MatchSession, ListenerFlagHost) {
    let host = ListenerFlagHost::new();
    let session = MatchSession::new(
        swipe_opportunities(),
        policy,
        SwipeConfig::default(),
        Box::new(host.clone()),
    )
    .expect("fixture session");
    (session, host)
}

fn top_id(session: &MatchSession) -> String {
    session.deck().top().unwrap().id.as_str().to_string()
}

fn swipe(session: &mut MatchSession, dx: f64, now_ms: u64) {
    assert!(session.pointer_down(Point::new(200.0, 200.0)));
    session.pointer_move(Point::new(200.0 + dx, 205.0));
    session.pointer_up(now_ms);
}

#[test]
fn right_swipe_saves_and_removes_after_delay() {
    let (mut session, host) = session(DeckPolicy::Removal);
    swipe(&mut session, 150.0, 1_000);
    assert!(!host.is_listening());

    assert_eq!(session.saved_count(), 1);
    assert_eq!(session.saved()[0].id.as_str(), "1");
    let notices = session.drain_notices();
    assert_eq!(notices.len(), 1);
    assert!(notices[0].title.starts_with("Opportunity Saved!"));
    assert!(session.drain_notices().is_empty());

    // still on screen while the exit animation plays
    assert_eq!(session.deck().len(), 5);
    assert_eq!(session.tick(1_100), 0);
    assert_eq!(session.tick(1_200), 1);
    assert_eq!(session.deck().len(), 4);
    assert_eq!(top_id(&session), "2");
}

#[test]
fn left_swipe_passes_with_destructive_notice() {
    let (mut session, _host) = session(DeckPolicy::Removal);
    swipe(&mut session, -180.0, 0);
    let notices = session.drain_notices();
    assert_eq!(notices[0].title, "Passed");
    assert_eq!(notices[0].variant, NoticeVariant::Destructive);
    assert_eq!(session.saved_count(), 0);
}

#[test]
fn short_swipe_keeps_card_and_settles() {
    let (mut session, _host) = session(DeckPolicy::Removal);
    swipe(&mut session, 60.0, 500);

    assert!(session.drain_notices().is_empty());
    session.tick(10_000);
    assert_eq!(session.deck().len(), 5);

    let settling = session.settling_card(550).expect("card is easing back");
    assert_eq!(settling.card_id.as_str(), "1");
    assert!(settling.visual.translate_x > 0.0 && settling.visual.translate_x < 60.0);
    assert!(session.settling_card(800).is_none());
}

#[test]
fn pending_card_cannot_be_committed_twice() {
    let (mut session, _host) = session(DeckPolicy::Removal);
    let first = session.like(0).expect("top card");
    assert_eq!(first.card_id.as_str(), "1");

    // the next press lands on the card underneath
    let second = session.like(50).expect("next card");
    assert_eq!(second.card_id.as_str(), "2");
    assert_eq!(second.direction, SwipeDirection::Right);

    session.tick(1_000);
    assert_eq!(session.deck().len(), 3);
    assert_eq!(session.saved_count(), 2);
    assert_eq!(session.drain_notices().len(), 2);
}

#[test]
fn buttons_do_nothing_on_empty_deck_and_reset_restores() {
    let (mut session, _host) = session(DeckPolicy::Removal);
    assert!(!session.can_reset());
    for step in 0..5 {
        session.pass(step * 1_000);
        session.tick(step * 1_000 + 200);
    }
    assert!(session.is_empty());
    assert!(session.pass(10_000).is_none());
    assert!(session.like(10_000).is_none());
    assert!(!session.pointer_down(Point::default()));
    assert!(session.can_reset());

    session.drain_notices();
    session.reset().expect("removal policy resets");
    assert_eq!(session.deck().len(), 5);
    assert_eq!(top_id(&session), "1");
    assert_eq!(session.saved_count(), 0);
    assert_eq!(session.drain_notices()[0].title, "Cards Reset");
}

#[test]
fn rotation_session_loops_and_refuses_reset() {
    let (mut session, _host) = session(DeckPolicy::Rotation);
    session.pass(0);
    session.tick(200);
    assert_eq!(session.deck().len(), 5);
    assert_eq!(top_id(&session), "2");
    assert_eq!(session.deck().cards()[4].id.as_str(), "1");
    assert!(!session.can_reset());
    assert_eq!(session.reset().unwrap_err(), DeckError::ResetUnsupported);
}

#[test]
fn visible_cards_expose_stack_and_drag_visual() {
    let (mut session, _host) = session(DeckPolicy::Removal);
    let idle = session.visible_cards();
    assert_eq!(idle.len(), 3);
    assert_eq!(
        idle.iter().map(|card| card.z_index).collect::<Vec<_>>(),
        vec![100, 99, 98]
    );
    assert!(idle[0].interactive);
    assert!(!idle[1].interactive);
    assert_eq!(idle[0].transition, Transition::EaseOut { duration_ms: 300 });

    session.pointer_down(Point::new(0.0, 0.0));
    session.pointer_move(Point::new(-70.0, 0.0));
    let dragging = session.visible_cards();
    assert_eq!(dragging[0].transition, Transition::None);
    assert_eq!(dragging[0].visual.translate_x, -70.0);
    assert!(dragging[0].visual.committing_left);
    assert_eq!(dragging[1].visual, ecai_core::CardVisual::IDENTITY);
}

#[test]
fn cancel_releases_pointer_without_commit() {
    let (mut session, host) = session(DeckPolicy::Removal);
    session.pointer_down(Point::new(0.0, 0.0));
    session.pointer_move(Point::new(300.0, 0.0));
    assert!(host.is_listening());

    session.pointer_cancel(0);
    assert!(!host.is_listening());
    assert!(!session.is_dragging());
    assert!(session.drain_notices().is_empty());
    assert!(session.pointer_up(10).is_none());
}

#[test]
fn report_requires_reason() {
    let (mut session, _host) = session(DeckPolicy::Removal);
    let id = CardId::new("3").unwrap();

    let err = session.report(&id, None, "").unwrap_err();
    assert_eq!(err, ReportError::MissingReason);
    assert_eq!(session.drain_notices()[0].title, "Please select a reason");

    let report = session
        .report(&id, Some(ReportReason::Other), "dates are wrong")
        .unwrap();
    assert_eq!(report.description.as_deref(), Some("dates are wrong"));
    assert_eq!(session.drain_notices()[0].title, "Report Submitted");

    let missing = CardId::new("99").unwrap();
    assert!(matches!(
        session.report(&missing, Some(ReportReason::Scam), ""),
        Err(ReportError::UnknownCard(_))
    ));
}

#[test]
fn construction_rejects_bad_input() {
    let mut cards = swipe_opportunities();
    cards.push(cards[0].clone());
    let err = MatchSession::new(
        cards,
        DeckPolicy::Removal,
        SwipeConfig::default(),
        Box::new(ListenerFlagHost::new()),
    )
    .err()
    .expect("duplicate ids must fail");
    assert!(matches!(err, MatchError::Deck(DeckError::DuplicateCardId(_))));

    let config = SwipeConfig {
        stack_depth: 0,
        ..SwipeConfig::default()
    };
    let err = MatchSession::new(
        swipe_opportunities(),
        DeckPolicy::Removal,
        config,
        Box::new(ListenerFlagHost::new()),
    )
    .err()
    .expect("invalid config must fail");
    assert!(matches!(err, MatchError::Config(_)));
}

#[test]
fn unsave_forgets_only_saved_cards() {
    let (mut session, _host) = session(DeckPolicy::Removal);
    session.like(0);
    let saved = CardId::new("1").unwrap();

    assert!(session.unsave(&saved));
    assert!(!session.unsave(&saved));
    assert!(!session.unsave(&CardId::new("2").unwrap()));
    assert_eq!(session.saved_count(), 0);
}
