//! Application state and logic
//!
//! The `App` struct composes the watchlist state, the dialog overlay and
//! the autoload gate. Keyboard and mouse handling are in the `keyboard`
//! sub-module.

mod keyboard;

use crate::autoload::AutoloadGate;
use crate::config::STATUS_MESSAGE_SECS;
use crate::event::Event;
use crate::overlay::DialogOverlay;
use crate::state::AppState;
use crate::store;
use ratatui::layout::Rect;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Application state and logic
pub struct App {
    pub state: AppState,
    /// Dialog overlay; drives the autoload gate through pause/resume
    pub overlay: DialogOverlay,
    pub should_quit: bool,
    /// Dirty flag: true if UI needs re-render (render-on-change optimization)
    pub needs_render: bool,
    /// Status message to display in footer (message, timestamp)
    pub status_message: Option<(String, Instant)>,
    /// Read side of the gate the overlay pauses
    autoload: AutoloadGate,
    data_file: PathBuf,
    autoload_interval: Duration,
    last_reload: Instant,
}

impl App {
    /// Create the app and perform the initial watchlist load
    pub fn new(data_file: PathBuf, autoload_interval: Duration) -> Self {
        let autoload = AutoloadGate::new();
        let overlay = DialogOverlay::new(Box::new(autoload.clone()));
        let mut app = Self {
            state: AppState::new(),
            overlay,
            should_quit: false,
            needs_render: true,
            status_message: None,
            autoload,
            data_file,
            autoload_interval,
            last_reload: Instant::now(),
        };
        app.reload();
        app
    }

    /// Process one event from the main loop
    ///
    /// `frame` is the current terminal area, needed for mouse hit-testing.
    pub fn handle_event(&mut self, event: Event, frame: Rect) {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse, frame),
        }
    }

    /// Timer update: expire status messages and run the autoload reload
    pub fn tick(&mut self) {
        if let Some((_, shown_at)) = &self.status_message {
            if shown_at.elapsed() >= Duration::from_secs(STATUS_MESSAGE_SECS) {
                self.status_message = None;
                self.needs_render = true;
            }
        }

        // Countdown display changes every tick
        if !self.autoload.is_paused() {
            self.needs_render = true;
            if self.last_reload.elapsed() >= self.autoload_interval {
                self.reload();
            }
        }
    }

    /// Re-read the watchlist file; failures surface through the error dialog
    pub fn reload(&mut self) {
        self.last_reload = Instant::now();
        match store::load(&self.data_file) {
            Ok(mut series) => {
                series.retain(|s| match s.validate() {
                    Ok(()) => true,
                    Err(reason) => {
                        tracing::warn!(imdb_id = %s.imdb_id, reason, "Skipping invalid entry");
                        false
                    }
                });
                tracing::info!(count = series.len(), "Watchlist reloaded");
                self.state.set_series(series);
            }
            Err(e) => {
                tracing::error!(error = %e, "Watchlist reload failed");
                self.overlay.show_error(e);
            }
        }
        self.needs_render = true;
    }

    /// Write the watchlist back to disk
    pub fn save(&mut self) {
        match store::save(&self.data_file, &self.state.series) {
            Ok(()) => self.show_status("Watchlist saved"),
            Err(e) => {
                tracing::error!(error = %e, "Watchlist save failed");
                self.overlay.show_error(e);
            }
        }
        self.needs_render = true;
    }

    /// Mark frame as rendered
    pub fn rendered(&mut self) {
        self.needs_render = false;
    }

    /// Display a status message in the footer
    pub fn show_status(&mut self, message: impl Into<String>) {
        self.status_message = Some((message.into(), Instant::now()));
        self.needs_render = true;
    }

    /// True while a dialog holds the autoload paused
    pub fn autoload_paused(&self) -> bool {
        self.autoload.is_paused()
    }

    /// Seconds until the next autoload reload
    pub fn autoload_secs_remaining(&self) -> u64 {
        self.autoload_interval
            .saturating_sub(self.last_reload.elapsed())
            .as_secs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Series, SeriesStatus};
    use chrono::Utc;

    pub(crate) fn test_app() -> App {
        // Nonexistent file: starts with an empty watchlist
        let dir = tempfile::tempdir().unwrap();
        App::new(dir.path().join("series.json"), Duration::from_secs(300))
    }

    pub(crate) fn sample_series() -> Series {
        Series {
            imdb_id: "tt0903747".to_string(),
            title: "Breaking Bad".to_string(),
            status: SeriesStatus::Watching,
            image_url: "https://example.org/bb.jpg".to_string(),
            modified: Utc::now(),
        }
    }

    #[test]
    fn test_new_app_starts_with_autoload_running() {
        let app = test_app();
        assert!(!app.autoload_paused());
        assert!(!app.overlay.is_open());
        assert!(app.state.series.is_empty());
    }

    #[test]
    fn test_reload_failure_opens_error_dialog_and_pauses() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("series.json");
        std::fs::write(&path, "not json").unwrap();
        let app = App::new(path, Duration::from_secs(300));
        assert!(app.overlay.is_open());
        assert!(app.autoload_paused());
    }

    #[test]
    fn test_tick_reloads_when_interval_elapsed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("series.json");
        let mut app = App::new(path.clone(), Duration::from_secs(0));
        crate::store::save(&path, &[sample_series()]).unwrap();
        app.tick();
        assert_eq!(app.state.series.len(), 1);
    }

    #[test]
    fn test_tick_skips_reload_while_paused() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("series.json");
        let mut app = App::new(path.clone(), Duration::from_secs(0));
        app.overlay.show_login();
        crate::store::save(&path, &[sample_series()]).unwrap();
        app.tick();
        assert!(app.state.series.is_empty());
    }

    #[test]
    fn test_reload_skips_invalid_entries() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("series.json");
        let mut nameless = sample_series();
        nameless.title = String::new();
        crate::store::save(&path, &[sample_series(), nameless]).unwrap();
        let app = App::new(path, Duration::from_secs(300));
        assert_eq!(app.state.series.len(), 1);
        assert_eq!(app.state.series[0].title, "Breaking Bad");
    }

    #[test]
    fn test_save_round_trips_through_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("series.json");
        let mut app = App::new(path, Duration::from_secs(300));
        app.state.set_series(vec![sample_series()]);
        app.save();
        assert!(app.status_message.is_some());
        app.state.set_series(Vec::new());
        app.reload();
        assert_eq!(app.state.series.len(), 1);
    }

    #[test]
    fn test_status_message_expires_on_tick() {
        let mut app = test_app();
        app.status_message = Some((
            "done".to_string(),
            Instant::now() - Duration::from_secs(STATUS_MESSAGE_SECS + 1),
        ));
        app.tick();
        assert!(app.status_message.is_none());
    }
}
