//! Error dialog

use crate::config::colors;
use crate::errors::AppError;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Render the error value handed to the overlay
pub fn render_error_dialog(f: &mut Frame, area: Rect, error: &AppError) {
    let lines = vec![
        Line::default(),
        Line::from(format!("  {error}")).style(Style::default().fg(colors::FG)),
    ];

    let dialog = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .title(" Error ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors::ERROR))
            .border_type(ratatui::widgets::BorderType::Double)
            .title_bottom(Line::from(" Esc:close ").centered())
            .style(Style::default().bg(colors::BG)),
    );

    f.render_widget(ratatui::widgets::Clear, area);
    f.render_widget(dialog, area);
}
