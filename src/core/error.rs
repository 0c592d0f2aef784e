//! Error types for core module
//!
//! Covers settings persistence and settings validation. Asset failures are not
//! errors at this level: they are logged and handled with fallbacks.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur in the core module
#[derive(Error, Debug)]
pub enum CoreError {
    /// Settings file I/O error
    #[error("Settings I/O error at {path}: {source}")]
    SettingsIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Settings serialization/deserialization error
    #[error("Settings serialization error: {0}")]
    SettingsSerialization(#[from] serde_json::Error),

    /// A settings value is outside its allowed range
    #[error("Invalid setting `{field}`: {message}")]
    InvalidSetting {
        field: &'static str,
        message: String,
    },
}

/// Result type alias for core operations
pub type CoreResult<T> = Result<T, CoreError>;
