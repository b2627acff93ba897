//! Error types for FOLIO_TERM.

use std::io;

/// Errors produced by the FOLIO_TERM engine.
#[derive(Debug, thiserror::Error)]
pub enum FolioError {
    #[error("command error: {0}")]
    Command(String),

    #[error("theme error: {0}")]
    Theme(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("color error: {0}")]
    Color(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, FolioError>;
