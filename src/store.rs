//! Watchlist persistence
//!
//! The series list lives in a single JSON file under the platform data
//! directory. The autoload tick re-reads it so edits made by other tools
//! (or another instance) show up without restarting.

use crate::errors::Result;
use crate::state::Series;
use std::fs;
use std::path::{Path, PathBuf};

/// Default watchlist path: `<data dir>/watchboard/series.json`
pub fn default_data_file() -> PathBuf {
    directories::BaseDirs::new().map_or_else(
        || PathBuf::from("/tmp/watchboard/series.json"),
        |dirs| dirs.data_dir().join("watchboard").join("series.json"),
    )
}

/// Load the series list
///
/// A missing file is an empty watchlist, not an error; a present but
/// unparseable file is reported so the UI can surface it.
pub fn load(path: &Path) -> Result<Vec<Series>> {
    if !path.exists() {
        tracing::debug!(?path, "No watchlist file yet, starting empty");
        return Ok(Vec::new());
    }
    let raw = fs::read_to_string(path)?;
    let series: Vec<Series> = serde_json::from_str(&raw)?;
    tracing::debug!(count = series.len(), ?path, "Watchlist loaded");
    Ok(series)
}

/// Write the series list back, creating parent directories as needed
pub fn save(path: &Path, series: &[Series]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let raw = serde_json::to_string_pretty(series)?;
    fs::write(path, raw)?;
    tracing::debug!(count = series.len(), ?path, "Watchlist saved");
    Ok(())
}
