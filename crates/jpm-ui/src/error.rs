//! Error types for the JPM UI components

use thiserror::Error;

/// Errors raised by theme persistence
#[derive(Error, Debug)]
pub enum UiError {
    /// Preferences file could not be read or written
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Preferences file is not a JSON object of strings
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Text that names no known appearance mode
    #[error("Unknown theme: {0}")]
    UnknownTheme(String),
}

/// Result type alias for UI operations
pub type UiResult<T> = std::result::Result<T, UiError>;
