//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Glossary not found
    #[error("Glossary \"{0}\" not found")]
    GlossaryNotFound(String),

    /// Word not found
    #[error("Word \"{0}\" not found")]
    WordNotFound(String),

    /// Validation error (missing or malformed fields, bad user input)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// The imported document is not valid JSON
    #[error("Invalid JSON format: {0}")]
    InvalidJson(String),

    /// The file extension is neither JSON nor Markdown
    #[error("Unsupported file format: {0}. Use .json or .md")]
    UnsupportedFormat(String),

    /// The Markdown document contains no word table rows
    #[error("No words found in Markdown file")]
    NoWordsFound,

    /// Storage layer error (never escapes `StorageProvider`)
    #[error("Storage error: {0}")]
    StorageError(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Network error (transport failure or non-success HTTP status)
    #[error("Network error: {0}")]
    NetworkError(String),

    /// The request did not complete within its time budget
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// Local file system error (downloads, config)
    #[error("IO error: {0}")]
    IoError(String),
}

impl CoreError {
    /// Whether it is expected behavior (user input, resource does not exist, etc.), used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::GlossaryNotFound(_)
            | Self::WordNotFound(_)
            | Self::ValidationError(_)
            | Self::InvalidJson(_)
            | Self::UnsupportedFormat(_)
            | Self::NoWordsFound => true,
            Self::StorageError(_)
            | Self::SerializationError(_)
            | Self::NetworkError(_)
            | Self::Timeout(_)
            | Self::IoError(_) => false,
        }
    }
}

impl From<std::io::Error> for CoreError {
    fn from(err: std::io::Error) -> Self {
        Self::IoError(err.to_string())
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
