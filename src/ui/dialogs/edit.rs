//! Edit dialog

use crate::config::colors;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the edit form for one series
///
/// The fields arrive exactly as the caller handed them to the overlay; this
/// dialog decides how to present them.
pub fn render_edit_dialog(
    f: &mut Frame,
    area: Rect,
    id: &str,
    title: &str,
    status: &str,
    image_url: &str,
) {
    let label = Style::default().fg(colors::FINISHED);
    let value = Style::default().fg(colors::FG);

    let rows = vec![
        Line::default(),
        Line::from(vec![
            Span::styled("  IMDb ID   ", label),
            Span::styled(id.to_string(), value),
        ]),
        Line::default(),
        Line::from(vec![
            Span::styled("  Title     ", label),
            Span::styled(title.to_string(), value),
        ]),
        Line::default(),
        Line::from(vec![
            Span::styled("  Status    ", label),
            Span::styled(status.to_string(), value),
        ]),
        Line::default(),
        Line::from(vec![
            Span::styled("  Poster    ", label),
            Span::styled(image_url.to_string(), value),
        ]),
    ];

    let form = Paragraph::new(rows).block(
        Block::default()
            .title(format!(" Edit: {title} "))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors::HIGHLIGHT))
            .border_type(ratatui::widgets::BorderType::Double)
            .title_bottom(Line::from(" Esc:close ").centered())
            .style(Style::default().bg(colors::BG)),
    );

    f.render_widget(ratatui::widgets::Clear, area);
    f.render_widget(form, area);
}
