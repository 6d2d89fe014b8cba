//! UI helper functions

use chrono::{DateTime, Utc};
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Truncate a string to max_len with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if max_len == 0 {
        return String::new();
    }
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_len - 1).collect();
        format!("{cut}…")
    }
}

/// Format a modification time as a short relative age ("3d", "2h", "now")
pub fn relative_age(ts: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let secs = (now - ts).num_seconds().max(0);
    match secs {
        0..=59 => "now".to_string(),
        60..=3599 => format!("{}m", secs / 60),
        3600..=86_399 => format!("{}h", secs / 3600),
        _ => format!("{}d", secs / 86_400),
    }
}

/// Create a centered rect with percentage-based dimensions
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_truncate_short_string_untouched() {
        assert_eq!(truncate("Dark", 10), "Dark");
    }

    #[test]
    fn test_truncate_adds_ellipsis() {
        assert_eq!(truncate("Breaking Bad", 9), "Breaking…");
    }

    #[test]
    fn test_truncate_zero_width() {
        assert_eq!(truncate("x", 0), "");
    }

    #[test]
    fn test_relative_age_buckets() {
        let now = Utc::now();
        assert_eq!(relative_age(now, now), "now");
        assert_eq!(relative_age(now - Duration::minutes(5), now), "5m");
        assert_eq!(relative_age(now - Duration::hours(3), now), "3h");
        assert_eq!(relative_age(now - Duration::days(12), now), "12d");
    }

    #[test]
    fn test_centered_rect_is_inside() {
        let outer = Rect::new(0, 0, 100, 40);
        let inner = centered_rect(60, 50, outer);
        assert!(inner.x > 0 && inner.y > 0);
        assert!(inner.right() < outer.right());
        assert!(inner.bottom() < outer.bottom());
    }
}
