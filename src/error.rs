//! Error types for the revision tracker.

use thiserror::Error;

/// All errors that can occur while scheduling, classifying or storing problems.
#[derive(Debug, Error)]
pub enum RevisionError {
    /// A timestamp could not be parsed or is out of range
    #[error("Invalid instant: {0}")]
    InvalidInstant(String),

    /// A problem snapshot cannot be scheduled
    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Invalid difficulty: {0}")]
    InvalidDifficulty(String),

    #[error("Problem not found: {0}")]
    ProblemNotFound(i64),

    /// The stored revision count moved between read and write
    #[error("Problem {0} was modified concurrently")]
    Conflict(i64),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for revision tracker operations
pub type Result<T> = std::result::Result<T, RevisionError>;
