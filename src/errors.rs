//! Structured error types for watchboard
//!
//! Uses thiserror for ergonomic error definitions with automatic Display
//! and Error trait implementations.

use thiserror::Error;

/// All possible errors in watchboard
#[allow(dead_code)]
#[derive(Error, Debug)]
pub enum AppError {
    /// Invalid series status value
    #[error("Invalid status '{0}'. Expected: watching, waiting, finished, dropped")]
    InvalidStatus(String),

    /// Watchlist file could not be read or written
    #[error("Store error: {0}")]
    StoreIo(#[from] std::io::Error),

    /// JSON parsing/serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration file could not be parsed
    #[error("Config error: {0}")]
    Config(String),

    /// Terminal setup or restoration error
    #[error("Terminal error: {0}")]
    TerminalError(String),

    /// Series entry validation failed
    #[error("Series validation failed: {0}")]
    ValidationError(&'static str),
}

/// Convenience Result type using AppError
pub type Result<T> = std::result::Result<T, AppError>;
