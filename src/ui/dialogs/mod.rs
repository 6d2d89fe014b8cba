//! Dialog rendering
//!
//! Render functions for the four dialog variants plus the shared backdrop.
//! Which dialog is visible is decided by [`crate::overlay::DialogOverlay`];
//! this module only draws.

mod edit;
mod error;
mod info;
mod login;

pub use edit::render_edit_dialog;
pub use error::render_error_dialog;
pub use info::render_info;
pub use login::render_login;

use crate::config::colors;
use crate::overlay::{DialogContent, DialogOverlay};
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::Block,
    Frame,
};

use super::helpers::centered_rect;

/// Centered size of each variant as (percent_x, percent_y)
const EDIT_SIZE: (u16, u16) = (64, 60);
const INFO_SIZE: (u16, u16) = (50, 70);
const LOGIN_SIZE: (u16, u16) = (44, 35);
const ERROR_SIZE: (u16, u16) = (54, 35);

/// Screen area a dialog variant occupies within `frame`; None for Empty.
/// Used both for rendering and for backdrop click hit-testing.
pub fn dialog_area(content: &DialogContent, frame: Rect) -> Option<Rect> {
    let (px, py) = match content {
        DialogContent::Empty => return None,
        DialogContent::Edit { .. } => EDIT_SIZE,
        DialogContent::Info => INFO_SIZE,
        DialogContent::Login => LOGIN_SIZE,
        DialogContent::Error { .. } => ERROR_SIZE,
    };
    Some(centered_rect(px, py, frame))
}

/// Draw the backdrop and the active dialog on top of the board
///
/// Draws nothing while the overlay is closed.
pub fn render_overlay(f: &mut Frame, overlay: &DialogOverlay) {
    let content = overlay.content();
    let Some(area) = dialog_area(content, f.area()) else {
        return;
    };

    // Backdrop: dim the whole board behind the dialog
    f.render_widget(
        Block::default().style(Style::default().bg(colors::BG_DIM)),
        f.area(),
    );

    match content {
        DialogContent::Empty => {}
        DialogContent::Edit {
            id,
            title,
            status,
            image_url,
        } => render_edit_dialog(f, area, id, title, status, image_url),
        DialogContent::Info => render_info(f, area),
        DialogContent::Login => render_login(f, area),
        DialogContent::Error { error } => render_error_dialog(f, area, error),
    }
}
