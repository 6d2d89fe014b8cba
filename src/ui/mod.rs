//! UI rendering module for the watchboard TUI
//!
//! Layout: header with autoload countdown, the series list, a footer with
//! key hints, and finally the dialog overlay drawn on top when open.

pub mod dialogs;
pub mod helpers;

use crate::app::App;
use crate::config::colors;
use crate::state::SeriesStatus;
use chrono::Utc;
use helpers::{relative_age, truncate};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    prelude::*,
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Main render function
pub fn render(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(5),    // Series list
            Constraint::Length(1), // Footer
        ])
        .split(f.area());

    render_header(f, chunks[0], app);
    render_series_list(f, chunks[1], app);
    render_footer(f, chunks[2], app);

    // Dialogs sit on top of everything
    dialogs::render_overlay(f, &app.overlay);
}

fn status_color(status: SeriesStatus) -> Color {
    match status {
        SeriesStatus::Watching => colors::WATCHING,
        SeriesStatus::Waiting => colors::WAITING,
        SeriesStatus::Finished => colors::FINISHED,
        SeriesStatus::Dropped => colors::DROPPED,
    }
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let autoload = if app.autoload_paused() {
        Span::styled(" autoload paused ", Style::default().fg(colors::WAITING))
    } else {
        Span::styled(
            format!(" reload in {}s ", app.autoload_secs_remaining()),
            Style::default().fg(colors::FINISHED),
        )
    };

    let line = Line::from(vec![
        Span::styled(
            " watchboard ",
            Style::default()
                .fg(colors::HIGHLIGHT)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("│ {} series ", app.state.series.len()),
            Style::default().fg(colors::FG),
        ),
        Span::styled("│", Style::default().fg(colors::BORDER)),
        autoload,
    ]);

    let header = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors::BORDER)),
    );
    f.render_widget(header, area);
}

fn render_series_list(f: &mut Frame, area: Rect, app: &App) {
    if app.state.series.is_empty() {
        let empty = Paragraph::new("\n  Watchlist is empty.\n\n  Edit the series file and press r.")
            .style(Style::default().fg(colors::FINISHED))
            .alignment(Alignment::Center);
        f.render_widget(empty, area);
        return;
    }

    let now = Utc::now();
    let title_width = (area.width as usize).saturating_sub(30).max(10);

    let items: Vec<ListItem> = app
        .state
        .series
        .iter()
        .enumerate()
        .map(|(i, series)| {
            let selected = i == app.state.selected;
            let marker = if selected { "▶ " } else { "  " };
            let line = Line::from(vec![
                Span::styled(marker, Style::default().fg(colors::HIGHLIGHT)),
                Span::styled(
                    format!("● {:<9}", series.status),
                    Style::default().fg(status_color(series.status)),
                ),
                Span::styled(
                    format!(" {:<width$}", truncate(&series.title, title_width), width = title_width),
                    if selected {
                        Style::default()
                            .fg(colors::FG)
                            .add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(colors::FG)
                    },
                ),
                Span::styled(
                    format!(" {:<11}", series.imdb_id),
                    Style::default().fg(colors::BORDER),
                ),
                Span::styled(
                    format!(" {:>4}", relative_age(series.modified, now)),
                    Style::default().fg(colors::FINISHED),
                ),
            ]);
            let item = ListItem::new(line);
            if selected {
                item.style(Style::default().bg(colors::BG_DIM))
            } else {
                item
            }
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors::BORDER))
            .title(" Series "),
    );
    f.render_widget(list, area);
}

fn render_footer(f: &mut Frame, area: Rect, app: &App) {
    let text = if let Some((message, _)) = &app.status_message {
        Line::from(Span::styled(
            format!(" {message}"),
            Style::default().fg(colors::WAITING),
        ))
    } else {
        Line::from(Span::styled(
            " j/k:move  e:edit  i:info  l:login  r:reload  w:save  q:quit",
            Style::default().fg(colors::FINISHED),
        ))
    };
    f.render_widget(Paragraph::new(text), area);
}
