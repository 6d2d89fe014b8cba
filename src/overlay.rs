//! Dialog overlay controller
//!
//! Owns which dialog (if any) sits on top of the board. At most one dialog
//! is visible at a time; showing a new one replaces the previous, there is
//! no stacking. Every show pauses the autoload reload through the injected
//! [`AutoloadControl`] collaborator and close resumes it, so the list never
//! shifts under an open dialog.
//!
//! Rendering lives in [`crate::ui::dialogs`]; this module is pure state and
//! is tested with a fake collaborator.

use crate::autoload::AutoloadControl;
use crate::errors::AppError;
use ratatui::layout::Rect;

/// Content slot of the overlay: empty, or exactly one dialog variant
///
/// The edit fields are carried as the caller handed them in; the edit
/// dialog itself is responsible for making sense of them.
#[derive(Debug)]
pub enum DialogContent {
    /// No dialog shown
    Empty,
    /// Edit form for one series
    Edit {
        id: String,
        title: String,
        status: String,
        image_url: String,
    },
    /// About / key bindings panel
    Info,
    /// Login prompt
    Login,
    /// Error display carrying the error value to show
    Error { error: AppError },
}

impl DialogContent {
    pub fn is_empty(&self) -> bool {
        matches!(self, DialogContent::Empty)
    }
}

/// Overlay state and the operations that drive it
pub struct DialogOverlay {
    content: DialogContent,
    /// Toggle memory for the info dialog: true exactly while Info is shown
    info_shown: bool,
    autoload: Box<dyn AutoloadControl>,
}

impl DialogOverlay {
    /// Create a closed overlay driving the given autoload collaborator
    pub fn new(autoload: Box<dyn AutoloadControl>) -> Self {
        Self {
            content: DialogContent::Empty,
            info_shown: false,
            autoload,
        }
    }

    /// Open the edit dialog for a series
    ///
    /// The parameters are passed through unvalidated; validation belongs to
    /// the edit dialog.
    pub fn show_edit(&mut self, id: String, title: String, status: String, image_url: String) {
        self.open();
        self.info_shown = false;
        tracing::debug!(%id, %title, "Showing edit dialog");
        self.content = DialogContent::Edit {
            id,
            title,
            status,
            image_url,
        };
    }

    /// Toggle the info dialog: close it if it is showing, open it otherwise
    pub fn show_info(&mut self) {
        if self.info_shown {
            self.close();
        } else {
            self.open();
            self.content = DialogContent::Info;
            self.info_shown = true;
            tracing::debug!("Showing info dialog");
        }
    }

    /// Open the login dialog
    pub fn show_login(&mut self) {
        self.open();
        self.info_shown = false;
        self.content = DialogContent::Login;
        tracing::debug!("Showing login dialog");
    }

    /// Open the error dialog carrying `error` for display
    pub fn show_error(&mut self, error: AppError) {
        self.open();
        self.info_shown = false;
        tracing::warn!(%error, "Showing error dialog");
        self.content = DialogContent::Error { error };
    }

    /// Close whatever is showing and resume the autoload reload
    ///
    /// Safe to call when already closed; resume is still invoked.
    pub fn close(&mut self) {
        self.content = DialogContent::Empty;
        self.info_shown = false;
        self.autoload.resume();
        self.restore_scroll();
    }

    pub fn is_open(&self) -> bool {
        !self.content.is_empty()
    }

    pub fn content(&self) -> &DialogContent {
        &self.content
    }

    /// Screen area the active dialog occupies, for backdrop hit-testing.
    /// None while closed.
    pub fn hit_area(&self, frame: Rect) -> Option<Rect> {
        crate::ui::dialogs::dialog_area(&self.content, frame)
    }

    fn open(&mut self) {
        self.autoload.pause();
    }

    /// Extension point: restore the board's scroll position to where it was
    /// before the dialog opened. Intentionally a no-op until the intended
    /// behavior is pinned down.
    fn restore_scroll(&mut self) {}
}
