//! Error types for Lese.

use thiserror::Error;

/// Library-level error type for Lese operations.
#[derive(Error, Debug)]
pub enum LeseError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Model API error: {0}")]
    Model(String),

    #[error("Agent error: {0}")]
    Agent(String),

    #[error("Web search request failed: {0}")]
    SearchRequest(String),

    #[error("Web search returned status {0}")]
    SearchStatus(u16),

    #[error("Web search returned malformed JSON: {0}")]
    SearchDecode(String),
}

/// Result type alias for Lese operations.
pub type Result<T> = std::result::Result<T, LeseError>;
