//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose the match deck, saved list and activity tracker to Dart via FRB.
//! - Flatten core types into plain envelopes the UI can render directly.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - One process-wide app state; every call locks it for its duration.
//! - Pointer responses always carry the current listener flag so the UI can
//!   attach or detach its global move/up handlers.

use ecai_core::fixtures::{saved_opportunities, swipe_opportunities, tracked_activities};
use ecai_core::service::activity_service::error_notice;
use ecai_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    Activity, ActivityDraft, ActivityService, ActivitySort, CardId, CommitEvent, DeckPolicy,
    HourLogDraft, InMemoryActivityRepository, ListenerFlagHost, MatchSession, Notice,
    NoticeVariant, Point, RepoResult, ReportError, ReportReason, SavedList, SavedOpportunity,
    SwipeConfig, Transition, VisibleCard,
};
use log::warn;
use std::sync::{Mutex, MutexGuard};

const SWIPE_CONFIG_ENV: &str = "ECAI_SWIPE_CONFIG";
static APP_STATE: Mutex<Option<AppState>> = Mutex::new(None);

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// Toast payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoticeView {
    pub title: String,
    pub description: String,
    pub destructive: bool,
}

impl From<Notice> for NoticeView {
    fn from(value: Notice) -> Self {
        Self {
            title: value.title,
            description: value.description,
            destructive: value.variant == NoticeVariant::Destructive,
        }
    }
}

/// Generic action response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionResponse {
    /// Whether operation succeeded.
    pub ok: bool,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl ActionResponse {
    fn success(message: impl Into<String>) -> Self {
        Self {
            ok: true,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
        }
    }
}

/// Result of one pointer or button call on the match deck.
#[derive(Debug, Clone, PartialEq)]
pub struct PointerResponse {
    /// Whether the UI should keep global move/up listeners attached.
    pub listening: bool,
    pub dragging: bool,
    /// `left|right` when this call committed a card.
    pub committed_direction: Option<String>,
    pub committed_card_id: Option<String>,
    pub message: String,
}

/// One rendered card in the match stack.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchCardView {
    pub card_id: String,
    pub title: String,
    pub organization: String,
    pub description: String,
    pub location: String,
    pub time_commitment: String,
    pub category: String,
    pub participants: u32,
    pub deadline: String,
    pub visible_tags: Vec<String>,
    /// `+N` overflow badge; `None` when all tags fit.
    pub hidden_tag_count: Option<u32>,
    pub depth: u32,
    pub z_index: i32,
    pub translate_x: f64,
    pub translate_y: f64,
    pub rotate_deg: f64,
    pub opacity: f64,
    pub committing_right: bool,
    pub committing_left: bool,
    /// Ease-out duration; `None` while the card follows the pointer.
    pub transition_ms: Option<u32>,
    pub interactive: bool,
}

impl From<VisibleCard> for MatchCardView {
    fn from(value: VisibleCard) -> Self {
        let VisibleCard {
            card,
            depth,
            z_index,
            visual,
            transition,
            interactive,
        } = value;
        let visible_tags = card.visible_tags().to_vec();
        let hidden_tag_count = card
            .hidden_tag_count()
            .map(|count| u32::try_from(count).unwrap_or(u32::MAX));
        Self {
            card_id: card.id.to_string(),
            title: card.title,
            organization: card.organization,
            description: card.description,
            location: card.location,
            time_commitment: card.time_commitment,
            category: card.category,
            participants: card.participants,
            deadline: card.deadline,
            visible_tags,
            hidden_tag_count,
            depth: u32::try_from(depth).unwrap_or(u32::MAX),
            z_index,
            translate_x: visual.translate_x,
            translate_y: visual.translate_y,
            rotate_deg: visual.rotate_deg,
            opacity: visual.opacity,
            committing_right: visual.committing_right,
            committing_left: visual.committing_left,
            transition_ms: match transition {
                Transition::None => None,
                Transition::EaseOut { duration_ms } => Some(duration_ms),
            },
            interactive,
        }
    }
}

/// Match screen snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchDeckView {
    pub cards: Vec<MatchCardView>,
    pub remaining: u32,
    pub saved_count: u32,
    pub can_reset: bool,
    pub policy: String,
}

/// One saved-list row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedItemView {
    pub id: String,
    pub title: String,
    pub kind: String,
    pub location: String,
    pub duration: String,
    pub description: String,
    pub application_link: String,
}

impl From<&SavedOpportunity> for SavedItemView {
    fn from(value: &SavedOpportunity) -> Self {
        Self {
            id: value.id.to_string(),
            title: value.title.clone(),
            kind: value.kind.clone(),
            location: value.location.clone(),
            duration: value.duration.clone(),
            description: value.description.clone(),
            application_link: value.application_link.clone(),
        }
    }
}

/// One tracked-activity row.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityView {
    pub id: String,
    pub name: String,
    pub kind: String,
    pub grades: Vec<String>,
    pub hours_per_week: f64,
    pub weeks_per_year: u32,
    pub total_hours: f64,
    pub roles: String,
    pub description: String,
}

impl From<Activity> for ActivityView {
    fn from(value: Activity) -> Self {
        let total_hours = value.total_hours();
        Self {
            id: value.id,
            name: value.name,
            kind: value.kind,
            grades: value.grades,
            hours_per_week: value.hours_per_week,
            weeks_per_year: value.weeks_per_year,
            total_hours,
            roles: value.roles,
            description: value.description,
        }
    }
}

/// Activity list envelope.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityListResponse {
    pub items: Vec<ActivityView>,
    pub message: String,
}

/// Form submission envelope; `notice` is the toast to show either way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormResponse {
    pub ok: bool,
    pub notice: NoticeView,
}

/// Process-wide app state behind the exported functions.
struct AppState {
    host: ListenerFlagHost,
    session: MatchSession,
    saved: SavedList,
    activities: ActivityService<InMemoryActivityRepository>,
}

impl AppState {
    fn new(policy: DeckPolicy, config: SwipeConfig) -> Result<Self, String> {
        let host = ListenerFlagHost::new();
        let session = MatchSession::new(
            swipe_opportunities(),
            policy,
            config,
            Box::new(host.clone()),
        )
        .map_err(|err| format!("match session init failed: {err}"))?;
        let repo = InMemoryActivityRepository::with_activities(tracked_activities())
            .map_err(|err| format!("activity repo init failed: {err}"))?;
        Ok(Self {
            host,
            session,
            saved: SavedList::new(saved_opportunities()),
            activities: ActivityService::new(repo),
        })
    }

    fn restart_session(&mut self, policy: DeckPolicy, config: SwipeConfig) -> Result<(), String> {
        let host = ListenerFlagHost::new();
        self.session = MatchSession::new(
            swipe_opportunities(),
            policy,
            config,
            Box::new(host.clone()),
        )
        .map_err(|err| format!("match session init failed: {err}"))?;
        self.host = host;
        Ok(())
    }

    /// Copies right-swiped cards into the saved list.
    fn sync_saved(&mut self) {
        for entry in self.session.saved() {
            self.saved.save(entry.clone());
        }
    }

    /// Deletes from the saved list and from the session's saved ids, which
    /// feed `sync_saved`.
    fn delete_saved(&mut self, id: &CardId) -> Option<Notice> {
        self.session.unsave(id);
        self.saved.delete(id)
    }

    fn pointer_response(&self, message: impl Into<String>) -> PointerResponse {
        PointerResponse {
            listening: self.host.is_listening(),
            dragging: self.session.is_dragging(),
            committed_direction: None,
            committed_card_id: None,
            message: message.into(),
        }
    }

    fn committed_response(
        &mut self,
        event: Option<CommitEvent>,
        idle_message: &str,
    ) -> PointerResponse {
        self.sync_saved();
        match event {
            Some(event) => PointerResponse {
                committed_direction: Some(event.direction.as_str().to_string()),
                committed_card_id: Some(event.card_id.to_string()),
                ..self.pointer_response("Committed.")
            },
            None => self.pointer_response(idle_message),
        }
    }

    fn deck_view(&self) -> MatchDeckView {
        MatchDeckView {
            cards: self
                .session
                .visible_cards()
                .into_iter()
                .map(MatchCardView::from)
                .collect(),
            remaining: u32::try_from(self.session.deck().len()).unwrap_or(u32::MAX),
            saved_count: u32::try_from(self.session.saved_count()).unwrap_or(u32::MAX),
            can_reset: self.session.can_reset(),
            policy: self.session.policy().as_str().to_string(),
        }
    }
}

/// Starts a fresh match session with `policy` (`removal|rotation`).
///
/// # FFI contract
/// - Reads an optional JSON config override from `ECAI_SWIPE_CONFIG`.
/// - Saved list and activities are kept.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn match_start(policy: String) -> ActionResponse {
    let Some(policy) = parse_policy(policy.as_str()) else {
        return ActionResponse::failure(format!(
            "unsupported deck policy `{}`; expected removal|rotation",
            policy.trim()
        ));
    };
    let result = with_app(|app| app.restart_session(policy, resolve_swipe_config()))
        .and_then(|inner| inner);
    match result {
        Ok(()) => ActionResponse::success(format!("Match session started ({}).", policy.as_str())),
        Err(err) => ActionResponse::failure(format!("match_start failed: {err}")),
    }
}

/// Pointer pressed on the top card.
#[flutter_rust_bridge::frb(sync)]
pub fn match_pointer_down(x: f64, y: f64) -> PointerResponse {
    pointer_call("match_pointer_down", |app| {
        let message = if app.session.pointer_down(Point { x, y }) {
            "Dragging."
        } else {
            "No card to drag."
        };
        app.pointer_response(message)
    })
}

/// Pointer moved anywhere on screen while dragging.
#[flutter_rust_bridge::frb(sync)]
pub fn match_pointer_move(x: f64, y: f64) -> PointerResponse {
    pointer_call("match_pointer_move", |app| {
        let message = if app.session.pointer_move(Point { x, y }).is_some() {
            "Dragging."
        } else {
            "Not dragging."
        };
        app.pointer_response(message)
    })
}

/// Pointer released; commits when the drag passed the threshold.
#[flutter_rust_bridge::frb(sync)]
pub fn match_pointer_up(now_ms: i64) -> PointerResponse {
    pointer_call("match_pointer_up", |app| {
        let event = app
            .session
            .pointer_up(to_millis(now_ms))
            .and_then(|outcome| outcome.commit);
        app.committed_response(event, "Settled.")
    })
}

/// Pointer lost or card view torn down mid-drag.
#[flutter_rust_bridge::frb(sync)]
pub fn match_pointer_cancel(now_ms: i64) -> PointerResponse {
    pointer_call("match_pointer_cancel", |app| {
        app.session.pointer_cancel(to_millis(now_ms));
        app.pointer_response("Cancelled.")
    })
}

/// Heart button.
#[flutter_rust_bridge::frb(sync)]
pub fn match_like(now_ms: i64) -> PointerResponse {
    pointer_call("match_like", |app| {
        let event = app.session.like(to_millis(now_ms));
        app.committed_response(event, "No card to save.")
    })
}

/// X button.
#[flutter_rust_bridge::frb(sync)]
pub fn match_pass(now_ms: i64) -> PointerResponse {
    pointer_call("match_pass", |app| {
        let event = app.session.pass(to_millis(now_ms));
        app.committed_response(event, "No card to pass.")
    })
}

/// Applies deck mutations whose exit delay has elapsed.
///
/// # FFI contract
/// - Call from the frame callback or a short timer.
/// - Returns the number of cards that changed position or left the deck.
#[flutter_rust_bridge::frb(sync)]
pub fn match_tick(now_ms: i64) -> u32 {
    with_app(|app| app.session.tick(to_millis(now_ms)))
        .map(|count| u32::try_from(count).unwrap_or(u32::MAX))
        .unwrap_or(0)
}

/// Restores every card under the removal policy.
#[flutter_rust_bridge::frb(sync)]
pub fn match_reset() -> ActionResponse {
    match with_app(|app| app.session.reset()) {
        Ok(Ok(())) => ActionResponse::success("Cards reset."),
        Ok(Err(err)) => ActionResponse::failure(format!("match_reset failed: {err}")),
        Err(err) => ActionResponse::failure(format!("match_reset failed: {err}")),
    }
}

/// Visible stack, top card first.
#[flutter_rust_bridge::frb(sync)]
pub fn match_visible_cards() -> MatchDeckView {
    with_app(|app| app.deck_view()).unwrap_or_else(|err| {
        warn!("event=ffi_call module=ffi status=error call=match_visible_cards error={err}");
        MatchDeckView {
            cards: Vec::new(),
            remaining: 0,
            saved_count: 0,
            can_reset: false,
            policy: String::new(),
        }
    })
}

/// Toasts produced since the previous call.
#[flutter_rust_bridge::frb(sync)]
pub fn match_drain_notices() -> Vec<NoticeView> {
    with_app(|app| {
        app.session
            .drain_notices()
            .into_iter()
            .map(NoticeView::from)
            .collect()
    })
    .unwrap_or_default()
}

/// Reports a card currently in the deck.
///
/// Input semantics:
/// - `reason`: `scam|inaccurate|other`; empty means none selected.
///
/// # FFI contract
/// - The confirmation or rejection toast is queued for `match_drain_notices`.
#[flutter_rust_bridge::frb(sync)]
pub fn match_report(card_id: String, reason: String, description: String) -> ActionResponse {
    let Ok(card_id) = CardId::new(card_id.trim()) else {
        return ActionResponse::failure("match_report failed: empty card id");
    };
    let reason = match ReportReason::parse(reason.as_str()) {
        Ok(reason) => Some(reason),
        Err(ReportError::MissingReason) => None,
        Err(err) => return ActionResponse::failure(format!("match_report failed: {err}")),
    };
    match with_app(|app| app.session.report(&card_id, reason, description.as_str())) {
        Ok(Ok(report)) => ActionResponse::success(format!(
            "Reported {} as {}.",
            report.card_id,
            report.reason.as_str()
        )),
        Ok(Err(err)) => ActionResponse::failure(format!("match_report failed: {err}")),
        Err(err) => ActionResponse::failure(format!("match_report failed: {err}")),
    }
}

/// Saved list filtered by title or type.
#[flutter_rust_bridge::frb(sync)]
pub fn saved_search(term: String) -> Vec<SavedItemView> {
    with_app(|app| {
        app.sync_saved();
        app.saved
            .search(term.as_str())
            .into_iter()
            .map(SavedItemView::from)
            .collect()
    })
    .unwrap_or_default()
}

/// Removes one saved opportunity.
#[flutter_rust_bridge::frb(sync)]
pub fn saved_delete(id: String) -> ActionResponse {
    let Ok(id) = CardId::new(id.trim()) else {
        return ActionResponse::failure("saved_delete failed: empty id");
    };
    match with_app(|app| app.delete_saved(&id)) {
        Ok(Some(notice)) => ActionResponse::success(notice.title),
        Ok(None) => ActionResponse::failure(format!("saved_delete failed: unknown id {id}")),
        Err(err) => ActionResponse::failure(format!("saved_delete failed: {err}")),
    }
}

/// Dialog title and the three canned reasons for one saved entry.
#[flutter_rust_bridge::frb(sync)]
pub fn saved_join_reasons(id: String) -> Vec<String> {
    let Ok(id) = CardId::new(id.trim()) else {
        return Vec::new();
    };
    with_app(|app| {
        app.saved
            .join_reasons(&id)
            .map(|(title, reasons)| {
                std::iter::once(title)
                    .chain(reasons.iter().map(|reason| (*reason).to_string()))
                    .collect()
            })
            .unwrap_or_default()
    })
    .unwrap_or_default()
}

/// Tracked activities filtered by name.
///
/// Input semantics:
/// - `sort`: `alphabetical|career-field|hours`; unknown values fall back to
///   alphabetical.
#[flutter_rust_bridge::frb(sync)]
pub fn activity_list(search: String, sort: String) -> ActivityListResponse {
    let sort = ActivitySort::parse(sort.as_str()).unwrap_or_default();
    match with_app(|app| app.activities.list(search.as_str(), sort)) {
        Ok(Ok(items)) => {
            let message = if items.is_empty() {
                "No activities.".to_string()
            } else {
                format!("Found {} activit(ies).", items.len())
            };
            ActivityListResponse {
                items: items.into_iter().map(ActivityView::from).collect(),
                message,
            }
        }
        Ok(Err(err)) => ActivityListResponse {
            items: Vec::new(),
            message: format!("activity_list failed: {err}"),
        },
        Err(err) => ActivityListResponse {
            items: Vec::new(),
            message: format!("activity_list failed: {err}"),
        },
    }
}

/// Adds an activity from the add-activity form.
#[flutter_rust_bridge::frb(sync)]
pub fn activity_add(
    name: String,
    kind: String,
    hours_per_week: String,
    weeks_per_year: String,
    roles: String,
    grade_levels: Vec<String>,
    description: String,
) -> FormResponse {
    let draft = ActivityDraft {
        name,
        kind,
        hours_per_week,
        weeks_per_year,
        roles,
        grade_levels,
        description,
    };
    form_call(|app| app.activities.add(draft).map(|(_, notice)| notice))
}

/// Deletes one tracked activity.
#[flutter_rust_bridge::frb(sync)]
pub fn activity_delete(id: String) -> FormResponse {
    form_call(|app| app.activities.delete(id.trim()))
}

/// Logs hours against an activity.
#[flutter_rust_bridge::frb(sync)]
pub fn activity_log_hours(
    activity_name: String,
    date: String,
    hours: String,
    milestone: String,
) -> FormResponse {
    let draft = HourLogDraft {
        activity_name,
        date,
        hours,
        milestone,
    };
    form_call(|app| app.activities.log_hours(draft).map(|(_, notice)| notice))
}

fn parse_policy(value: &str) -> Option<DeckPolicy> {
    match value.trim().to_ascii_lowercase().as_str() {
        "" | "removal" => Some(DeckPolicy::Removal),
        "rotation" => Some(DeckPolicy::Rotation),
        _ => None,
    }
}

fn to_millis(now_ms: i64) -> u64 {
    u64::try_from(now_ms).unwrap_or(0)
}

fn resolve_swipe_config() -> SwipeConfig {
    let Ok(raw) = std::env::var(SWIPE_CONFIG_ENV) else {
        return SwipeConfig::default();
    };
    if raw.trim().is_empty() {
        return SwipeConfig::default();
    }
    SwipeConfig::from_json(raw.as_str()).unwrap_or_else(|err| {
        warn!("event=swipe_config_load module=ffi status=fallback error={err}");
        SwipeConfig::default()
    })
}

fn lock_app() -> Result<MutexGuard<'static, Option<AppState>>, String> {
    APP_STATE
        .lock()
        .map_err(|_| "app state lock poisoned".to_string())
}

fn with_app<R>(f: impl FnOnce(&mut AppState) -> R) -> Result<R, String> {
    let mut guard = lock_app()?;
    if guard.is_none() {
        *guard = Some(AppState::new(DeckPolicy::default(), resolve_swipe_config())?);
    }
    match guard.as_mut() {
        Some(app) => Ok(f(app)),
        None => Err("app state unavailable".to_string()),
    }
}

fn pointer_call(call: &str, f: impl FnOnce(&mut AppState) -> PointerResponse) -> PointerResponse {
    with_app(f).unwrap_or_else(|err| {
        warn!("event=ffi_call module=ffi status=error call={call} error={err}");
        PointerResponse {
            listening: false,
            dragging: false,
            committed_direction: None,
            committed_card_id: None,
            message: format!("{call} failed: {err}"),
        }
    })
}

fn form_call(f: impl FnOnce(&mut AppState) -> RepoResult<Notice>) -> FormResponse {
    match with_app(f) {
        Ok(Ok(notice)) => FormResponse {
            ok: true,
            notice: notice.into(),
        },
        Ok(Err(err)) => form_failure(error_notice(&err)),
        Err(err) => form_failure(Notice::destructive("Something went wrong", err)),
    }
}

fn form_failure(notice: Notice) -> FormResponse {
    FormResponse {
        ok: false,
        notice: notice.into(),
    }
}
