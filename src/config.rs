use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default seconds between autoload reloads
pub const DEFAULT_AUTOLOAD_SECS: u64 = 300;

/// How long footer status messages stay visible (seconds)
pub const STATUS_MESSAGE_SECS: u64 = 4;

/// Application configuration loaded from file
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct WatchboardConfig {
    /// Autoload configuration
    #[serde(default)]
    pub autoload: AutoloadConfig,

    /// Watchlist file path (default: platform data dir)
    #[serde(default)]
    pub data_file: Option<PathBuf>,
}

/// Autoload-specific configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AutoloadConfig {
    /// Seconds between reloads of the watchlist file
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,
}

impl Default for AutoloadConfig {
    fn default() -> Self {
        Self {
            interval_secs: default_interval_secs(),
        }
    }
}

fn default_interval_secs() -> u64 {
    DEFAULT_AUTOLOAD_SECS
}

/// Default config path: `<config dir>/watchboard/config.toml`
pub fn default_config_file() -> PathBuf {
    directories::BaseDirs::new().map_or_else(
        || PathBuf::from("/tmp/watchboard/config.toml"),
        |dirs| dirs.config_dir().join("watchboard").join("config.toml"),
    )
}

/// Load configuration, falling back to defaults when the file is absent
pub fn load(path: &std::path::Path) -> crate::errors::Result<WatchboardConfig> {
    if !path.exists() {
        tracing::debug!(?path, "No config file, using defaults");
        return Ok(WatchboardConfig::default());
    }
    let raw = std::fs::read_to_string(path)?;
    toml::from_str(&raw).map_err(|e| crate::errors::AppError::Config(e.to_string()))
}

pub mod colors {
    use super::Color;

    pub const BG: Color = Color::Rgb(26, 27, 38); // #1a1b26
    pub const BG_DIM: Color = Color::Rgb(20, 21, 30); // backdrop behind dialogs
    pub const FG: Color = Color::Rgb(192, 202, 245); // #c0caf5
    pub const WATCHING: Color = Color::Rgb(122, 162, 247); // #7aa2f7 blue
    pub const WAITING: Color = Color::Rgb(224, 175, 104); // #e0af68 yellow
    pub const FINISHED: Color = Color::Rgb(86, 95, 137); // #565f89 gray
    pub const DROPPED: Color = Color::Rgb(255, 158, 100); // #ff9e64 orange
    pub const ERROR: Color = Color::Rgb(247, 118, 142); // #f7768e red
    pub const BORDER: Color = Color::Rgb(59, 66, 97); // #3b4261
    pub const HIGHLIGHT: Color = Color::Rgb(187, 154, 247); // #bb9af7 purple
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = WatchboardConfig::default();
        assert_eq!(config.autoload.interval_secs, DEFAULT_AUTOLOAD_SECS);
        assert!(config.data_file.is_none());
    }

    #[test]
    fn test_parse_partial_config() {
        let config: WatchboardConfig = toml::from_str(
            r#"
            [autoload]
            interval_secs = 60
            "#,
        )
        .unwrap();
        assert_eq!(config.autoload.interval_secs, 60);
        assert!(config.data_file.is_none());
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config.autoload.interval_secs, DEFAULT_AUTOLOAD_SECS);
    }
}
