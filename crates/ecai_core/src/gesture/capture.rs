//! Scoped pointer subscription.
//!
//! The presentation layer owns the real global pointer-move/pointer-up
//! listeners. The tracker acquires them through a `PointerHost` when a drag
//! starts and holds the returned subscription in a guard whose `Drop`
//! releases it, so release happens once on every exit path.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

/// Live global listener registration.
pub trait PointerSubscription: Send {
    /// Detaches the listeners. Called exactly once per subscription.
    fn release(&mut self);
}

/// Source of global pointer subscriptions.
pub trait PointerHost: Send {
    fn acquire(&mut self) -> Box<dyn PointerSubscription>;
}

/// Owns one subscription and releases it on drop.
pub(crate) struct CaptureGuard {
    subscription: Box<dyn PointerSubscription>,
}

impl CaptureGuard {
    pub(crate) fn acquire(host: &mut dyn PointerHost) -> Self {
        Self {
            subscription: host.acquire(),
        }
    }
}

impl Drop for CaptureGuard {
    fn drop(&mut self) {
        self.subscription.release();
    }
}

/// Host that only records whether listeners should be attached.
///
/// Used where the real listeners live on the other side of an FFI boundary:
/// the UI polls `is_listening()` after each pointer call and attaches or
/// detaches its own handlers to match.
#[derive(Debug, Clone, Default)]
pub struct ListenerFlagHost {
    state: Arc<ListenerFlagState>,
}

#[derive(Debug, Default)]
struct ListenerFlagState {
    listening: AtomicBool,
    acquired: AtomicUsize,
    released: AtomicUsize,
}

impl ListenerFlagHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_listening(&self) -> bool {
        self.state.listening.load(Ordering::SeqCst)
    }

    /// Total subscriptions handed out.
    pub fn acquired_count(&self) -> usize {
        self.state.acquired.load(Ordering::SeqCst)
    }

    /// Total subscriptions released.
    pub fn released_count(&self) -> usize {
        self.state.released.load(Ordering::SeqCst)
    }
}

impl PointerHost for ListenerFlagHost {
    fn acquire(&mut self) -> Box<dyn PointerSubscription> {
        self.state.acquired.fetch_add(1, Ordering::SeqCst);
        self.state.listening.store(true, Ordering::SeqCst);
        Box::new(FlagSubscription {
            state: Arc::clone(&self.state),
        })
    }
}

struct FlagSubscription {
    state: Arc<ListenerFlagState>,
}

impl PointerSubscription for FlagSubscription {
    fn release(&mut self) {
        self.state.released.fetch_add(1, Ordering::SeqCst);
        self.state.listening.store(false, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::{CaptureGuard, ListenerFlagHost};

    #[test]
    fn guard_releases_on_drop() {
        let mut host = ListenerFlagHost::new();
        let guard = CaptureGuard::acquire(&mut host);
        assert!(host.is_listening());
        assert_eq!(host.acquired_count(), 1);

        drop(guard);
        assert!(!host.is_listening());
        assert_eq!(host.released_count(), 1);
    }
}
