//! Login dialog

use crate::config::colors;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the login prompt
///
/// Display only; credential handling lives with the caller that reacts to
/// the dialog.
pub fn render_login(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::default(),
        Line::from("  Sign in to sync your watchlist").style(Style::default().fg(colors::FG)),
        Line::default(),
        Line::from(vec![
            Span::styled("  User  ", Style::default().fg(colors::FINISHED)),
            Span::styled("▏", Style::default().fg(colors::FG)),
        ]),
        Line::default(),
        Line::from(vec![
            Span::styled("  Pass  ", Style::default().fg(colors::FINISHED)),
            Span::styled("▏", Style::default().fg(colors::FG)),
        ]),
    ];

    let login = Paragraph::new(lines).block(
        Block::default()
            .title(" Login ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors::HIGHLIGHT))
            .border_type(ratatui::widgets::BorderType::Double)
            .title_bottom(Line::from(" Esc:close ").centered())
            .style(Style::default().bg(colors::BG)),
    );

    f.render_widget(ratatui::widgets::Clear, area);
    f.render_widget(login, area);
}
