use std::io;
use thiserror::Error;

/// Application-wide error type, consolidating all possible errors into a single enum.
#[derive(Debug, Error)]
pub enum AppError {
    /// Represents standard input/output errors.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Represents failures turning file contents into text (bad UTF-8, broken PDF).
    #[error("Extraction error: {0}")]
    Extraction(String),

    /// Represents files whose format cannot be analyzed.
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Represents a lookup that found nothing (e.g. no matching PDF, no desktop).
    #[error("Not found: {0}")]
    NotFound(String),

    /// Represents data validation errors (e.g., invalid input format).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Represents configuration-related errors (e.g., invalid environment variables).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Represents report serialization failures.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Config(format!("Validation errors: {}", err))
    }
}

impl From<walkdir::Error> for AppError {
    fn from(err: walkdir::Error) -> Self {
        let message = err.to_string();
        match err.into_io_error() {
            Some(io_err) => AppError::Io(io_err),
            None => AppError::Io(io::Error::other(message)),
        }
    }
}

impl From<globset::Error> for AppError {
    fn from(err: globset::Error) -> Self {
        AppError::Config(format!("Invalid pattern: {}", err))
    }
}
