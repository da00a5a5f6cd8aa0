//! Error types for Databot.
//!
//! Defines the main error enum used throughout the application.
//!
//! User-facing failures of the command interpreter (unknown command,
//! unresolvable column, bad threshold) are *not* errors: they degrade to a
//! textual reply. Only genuinely unexpected conditions use these variants.

use thiserror::Error;

/// Main error type for Databot operations.
#[derive(Error, Debug)]
pub enum DatabotError {
    /// Dataset ingestion errors (unreadable file, malformed CSV, etc.)
    #[error("Ingest error: {0}")]
    Ingest(String),

    /// Dataset construction errors (unequal column lengths, etc.)
    #[error("Dataset error: {0}")]
    Dataset(String),

    /// Chart rendering errors (backend failure, artifact write failure, etc.)
    #[error("Render error: {0}")]
    Render(String),

    /// Configuration errors (invalid config file, bad values, etc.)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal application errors (unexpected states, bugs, etc.)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl DatabotError {
    /// Creates an ingest error with the given message.
    pub fn ingest(msg: impl Into<String>) -> Self {
        Self::Ingest(msg.into())
    }

    /// Creates a dataset error with the given message.
    pub fn dataset(msg: impl Into<String>) -> Self {
        Self::Dataset(msg.into())
    }

    /// Creates a render error with the given message.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Creates a configuration error with the given message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Creates an internal error with the given message.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Returns the error category as a string for display purposes.
    pub fn category(&self) -> &'static str {
        match self {
            Self::Ingest(_) => "Ingest Error",
            Self::Dataset(_) => "Dataset Error",
            Self::Render(_) => "Render Error",
            Self::Config(_) => "Configuration Error",
            Self::Internal(_) => "Internal Error",
        }
    }
}

/// Result type alias using DatabotError.
pub type Result<T> = std::result::Result<T, DatabotError>;
