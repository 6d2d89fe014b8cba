//! Info dialog

use crate::config::colors;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render_info(f: &mut Frame, area: Rect) {
    let info_text = format!(
        r"
  watchboard v{}

  Navigation
  j/k         Move between series
  g/G         Jump to top/bottom

  Dialogs
  e           Edit selected series
  i           This panel (toggles)
  l           Login
  Esc         Close dialog

  Board
  r           Reload watchlist now
  w           Save watchlist
  q           Quit
  Ctrl+C      Force quit

  The board reloads itself periodically;
  the countdown pauses while a dialog is
  open.
",
        env!("CARGO_PKG_VERSION")
    );

    let info = Paragraph::new(info_text)
        .style(Style::default().fg(colors::FG))
        .block(
            Block::default()
                .title(" Info ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors::HIGHLIGHT))
                .border_type(ratatui::widgets::BorderType::Double)
                .title_bottom(Line::from(" i:close ").centered())
                .style(Style::default().bg(colors::BG)),
        );

    f.render_widget(ratatui::widgets::Clear, area);
    f.render_widget(info, area);
}
