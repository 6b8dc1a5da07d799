//! Error types for the eventboard ecosystem.

use thiserror::Error;

/// Errors that can occur in eventboard operations.
#[derive(Error, Debug)]
pub enum EventBoardError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Required field '{0}' is empty")]
    Validation(&'static str),

    #[error("Stored event list could not be read: {0}")]
    StorageFormat(String),

    #[error("Event list could not be persisted: {0}")]
    StorageWrite(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for eventboard operations.
pub type EventBoardResult<T> = Result<T, EventBoardError>;
