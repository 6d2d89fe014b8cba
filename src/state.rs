//! Watchlist state
//!
//! Holds the series list loaded from the store and the current selection.
//! The dialog overlay state lives in [`crate::overlay`], not here.

use crate::errors::AppError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Watch status of a single series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SeriesStatus {
    /// Currently being watched
    #[default]
    Watching,
    /// Waiting for new episodes
    Waiting,
    /// All episodes watched
    Finished,
    /// No longer followed
    Dropped,
}

impl SeriesStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            SeriesStatus::Watching => "watching",
            SeriesStatus::Waiting => "waiting",
            SeriesStatus::Finished => "finished",
            SeriesStatus::Dropped => "dropped",
        }
    }
}

impl std::fmt::Display for SeriesStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SeriesStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "watching" => Ok(SeriesStatus::Watching),
            "waiting" => Ok(SeriesStatus::Waiting),
            "finished" => Ok(SeriesStatus::Finished),
            "dropped" => Ok(SeriesStatus::Dropped),
            other => Err(AppError::InvalidStatus(other.to_string())),
        }
    }
}

/// One tracked series
///
/// # Core Fields
/// - `imdb_id`: IMDb identifier, also the storage key (e.g., "tt0903747")
/// - `title`: Display title
/// - `status`: Watch status
/// - `image_url`: Poster URL shown in the edit dialog
/// - `modified`: Last modification time; the list is sorted by this, newest
///   first
///
/// # Validation
/// Use `validate()` to check that the key fields are present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Series {
    pub imdb_id: String,
    pub title: String,
    #[serde(default)]
    pub status: SeriesStatus,
    #[serde(default)]
    pub image_url: String,
    #[serde(default = "Utc::now")]
    pub modified: DateTime<Utc>,
}

impl Series {
    /// Check that the entry has the fields the board needs
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.imdb_id.is_empty() {
            return Err("imdb_id is required");
        }
        if self.title.is_empty() {
            return Err("title is required");
        }
        Ok(())
    }
}

/// Application state: the series list and selection
#[derive(Debug, Default)]
pub struct AppState {
    /// Series sorted by `modified`, newest first
    pub series: Vec<Series>,
    /// Index of the selected row
    pub selected: usize,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the list, keeping it sorted newest-first and the selection
    /// clamped to the new length
    pub fn set_series(&mut self, mut series: Vec<Series>) {
        series.sort_by(|a, b| b.modified.cmp(&a.modified));
        self.series = series;
        if self.selected >= self.series.len() {
            self.selected = self.series.len().saturating_sub(1);
        }
    }

    pub fn selected_series(&self) -> Option<&Series> {
        self.series.get(self.selected)
    }

    pub fn next_row(&mut self) {
        if !self.series.is_empty() && self.selected + 1 < self.series.len() {
            self.selected += 1;
        }
    }

    pub fn previous_row(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn series(id: &str, title: &str, modified_secs: i64) -> Series {
        Series {
            imdb_id: id.to_string(),
            title: title.to_string(),
            status: SeriesStatus::Watching,
            image_url: String::new(),
            modified: Utc.timestamp_opt(modified_secs, 0).unwrap(),
        }
    }

    #[test]
    fn test_status_round_trip() {
        for s in ["watching", "waiting", "finished", "dropped"] {
            let parsed: SeriesStatus = s.parse().unwrap();
            assert_eq!(parsed.to_string(), s);
        }
    }

    #[test]
    fn test_status_rejects_unknown() {
        let err = "active".parse::<SeriesStatus>().unwrap_err();
        assert!(err.to_string().contains("active"));
    }

    #[test]
    fn test_validate_requires_key_fields() {
        let s = series("", "Breaking Bad", 0);
        assert_eq!(s.validate(), Err("imdb_id is required"));
        let s = series("tt0903747", "", 0);
        assert_eq!(s.validate(), Err("title is required"));
        let s = series("tt0903747", "Breaking Bad", 0);
        assert!(s.validate().is_ok());
    }

    #[test]
    fn test_set_series_sorts_newest_first() {
        let mut state = AppState::new();
        state.set_series(vec![
            series("tt1", "Old", 100),
            series("tt2", "New", 300),
            series("tt3", "Mid", 200),
        ]);
        let titles: Vec<_> = state.series.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, ["New", "Mid", "Old"]);
    }

    #[test]
    fn test_set_series_clamps_selection() {
        let mut state = AppState::new();
        state.set_series(vec![
            series("tt1", "A", 1),
            series("tt2", "B", 2),
            series("tt3", "C", 3),
        ]);
        state.selected = 2;
        state.set_series(vec![series("tt1", "A", 1)]);
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn test_row_navigation_saturates() {
        let mut state = AppState::new();
        state.previous_row();
        assert_eq!(state.selected, 0);
        state.set_series(vec![series("tt1", "A", 1), series("tt2", "B", 2)]);
        state.next_row();
        state.next_row();
        assert_eq!(state.selected, 1);
    }
}
