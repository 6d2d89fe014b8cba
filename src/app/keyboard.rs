//! Keyboard and mouse input handling

use super::App;
use crossterm::event::{KeyCode, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};

impl App {
    /// Handle keyboard input
    pub fn handle_key(&mut self, key: crossterm::event::KeyEvent) {
        // Handle Ctrl+C always
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        if self.overlay.is_open() {
            self.handle_key_dialog(key);
        } else {
            self.handle_key_board(key);
        }
    }

    /// Keys while a dialog is open
    fn handle_key_dialog(&mut self, key: crossterm::event::KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => {
                self.overlay.close();
                self.needs_render = true;
            }
            // Info keeps its toggle even while another dialog is up
            KeyCode::Char('i') => {
                self.overlay.show_info();
                self.needs_render = true;
            }
            _ => {}
        }
    }

    /// Keys on the board itself
    fn handle_key_board(&mut self, key: crossterm::event::KeyEvent) {
        match key.code {
            // Quit
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            // Row navigation
            KeyCode::Char('j') | KeyCode::Down => {
                self.state.next_row();
                self.needs_render = true;
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.state.previous_row();
                self.needs_render = true;
            }
            KeyCode::Char('g') => {
                self.state.selected = 0;
                self.needs_render = true;
            }
            KeyCode::Char('G') => {
                self.state.selected = self.state.series.len().saturating_sub(1);
                self.needs_render = true;
            }

            // === Dialogs ===
            KeyCode::Char('e') => {
                if let Some(series) = self.state.selected_series() {
                    self.overlay.show_edit(
                        series.imdb_id.clone(),
                        series.title.clone(),
                        series.status.to_string(),
                        series.image_url.clone(),
                    );
                    self.needs_render = true;
                }
            }
            KeyCode::Char('i' | '?') => {
                self.overlay.show_info();
                self.needs_render = true;
            }
            KeyCode::Char('l') => {
                self.overlay.show_login();
                self.needs_render = true;
            }

            // Manual reload / save
            KeyCode::Char('r') => {
                self.reload();
                self.show_status("Watchlist reloaded");
            }
            KeyCode::Char('w') => {
                self.save();
            }
            _ => {}
        }
    }

    /// Handle mouse input: a left click on the backdrop closes the dialog
    pub fn handle_mouse(&mut self, mouse: MouseEvent, frame: Rect) {
        if !matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) {
            return;
        }
        if !self.overlay.is_open() {
            return;
        }
        let click = Position::new(mouse.column, mouse.row);
        let on_dialog = self
            .overlay
            .hit_area(frame)
            .is_some_and(|area| area.contains(click));
        if !on_dialog {
            self.overlay.close();
            self.needs_render = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::{sample_series, test_app};
    use super::*;
    use crate::overlay::DialogContent;
    use crossterm::event::{KeyEvent, KeyModifiers};

    const FRAME: Rect = Rect {
        x: 0,
        y: 0,
        width: 100,
        height: 40,
    };

    fn key(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
    }

    fn left_click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_edit_key_threads_selected_series_into_dialog() {
        let mut app = test_app();
        app.state.set_series(vec![sample_series()]);
        app.handle_key(key('e'));
        assert!(app.autoload_paused());
        match app.overlay.content() {
            DialogContent::Edit {
                id,
                title,
                status,
                image_url,
            } => {
                assert_eq!(id, "tt0903747");
                assert_eq!(title, "Breaking Bad");
                assert_eq!(status, "watching");
                assert_eq!(image_url, "https://example.org/bb.jpg");
            }
            other => panic!("expected edit dialog, got {other:?}"),
        }
    }

    #[test]
    fn test_edit_key_without_selection_does_nothing() {
        let mut app = test_app();
        app.handle_key(key('e'));
        assert!(!app.overlay.is_open());
        assert!(!app.autoload_paused());
    }

    #[test]
    fn test_escape_closes_dialog_before_quitting() {
        let mut app = test_app();
        app.handle_key(key('l'));
        assert!(app.overlay.is_open());
        app.handle_key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));
        assert!(!app.overlay.is_open());
        assert!(!app.should_quit);
        app.handle_key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));
        assert!(app.should_quit);
    }

    #[test]
    fn test_info_key_toggles() {
        let mut app = test_app();
        app.handle_key(key('i'));
        assert!(matches!(app.overlay.content(), DialogContent::Info));
        app.handle_key(key('i'));
        assert!(!app.overlay.is_open());
        assert!(!app.autoload_paused());
    }

    #[test]
    fn test_backdrop_click_closes_login_and_resumes_autoload() {
        let mut app = test_app();
        app.handle_key(key('l'));
        assert!(app.autoload_paused());
        // Top-left corner is well outside the centered login dialog
        app.handle_mouse(left_click(0, 0), FRAME);
        assert!(!app.overlay.is_open());
        assert!(!app.autoload_paused());
    }

    #[test]
    fn test_click_on_dialog_keeps_it_open() {
        let mut app = test_app();
        app.handle_key(key('l'));
        let area = app.overlay.hit_area(FRAME).unwrap();
        app.handle_mouse(left_click(area.x + 1, area.y + 1), FRAME);
        assert!(app.overlay.is_open());
        assert!(app.autoload_paused());
    }

    #[test]
    fn test_click_without_dialog_is_ignored() {
        let mut app = test_app();
        app.handle_mouse(left_click(0, 0), FRAME);
        assert!(!app.overlay.is_open());
        assert!(!app.should_quit);
    }

    #[test]
    fn test_ctrl_c_always_quits() {
        let mut app = test_app();
        app.handle_key(key('l'));
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }
}
