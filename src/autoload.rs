//! Autoload pause gate
//!
//! The watchlist reloads itself from disk on a periodic tick. While a dialog
//! overlay is open the reload must not fire, otherwise the list can shift
//! under the user mid-edit. The overlay controller does not own the timer;
//! it only pauses and resumes it through the [`AutoloadControl`] trait.
//!
//! The gate is level-triggered: repeated pauses collapse into one, a single
//! resume re-enables the timer.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Collaborator interface the overlay uses to stop and restart the
/// periodic watchlist reload.
pub trait AutoloadControl {
    /// Stop the periodic reload.
    fn pause(&mut self);
    /// Restart the periodic reload.
    fn resume(&mut self);
}

/// Shared pause flag consulted by the app's tick loop.
///
/// Clones share the same underlying flag: the app keeps one clone to query
/// in `tick()`, the overlay controller holds another behind
/// `Box<dyn AutoloadControl>` to flip it.
#[derive(Debug, Clone, Default)]
pub struct AutoloadGate {
    paused: Arc<AtomicBool>,
}

impl AutoloadGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// True while a dialog holds the reload paused.
    pub fn is_paused(&self) -> bool {
        self.paused.load(Ordering::Relaxed)
    }
}

impl AutoloadControl for AutoloadGate {
    fn pause(&mut self) {
        self.paused.store(true, Ordering::Relaxed);
        tracing::debug!("Autoload paused");
    }

    fn resume(&mut self) {
        self.paused.store(false, Ordering::Relaxed);
        tracing::debug!("Autoload resumed");
    }
}
