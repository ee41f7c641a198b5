//! Error types for quotebox-core

use thiserror::Error;

/// Result type alias using quotebox-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in quotebox-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// `SQLite` error
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Clipboard access was denied or is unavailable
    #[error("Clipboard error: {0}")]
    Clipboard(String),
}
