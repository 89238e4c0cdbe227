//! Error types for the Scene Partner launcher library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for launcher and app-data operations.
#[derive(Debug, Error)]
pub enum OffBookError {
    // File system errors
    #[error("IO error at {path:?}: {message}")]
    Io {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Path is not a directory: {0}")]
    NotADirectory(PathBuf),

    // Serialization errors
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: Option<serde_json::Error>,
    },

    // Launch errors
    #[error("Entry point not found: {0}")]
    EntryPointMissing(PathBuf),

    #[error("No Python interpreter found: no venv interpreter at {venv} and none on PATH")]
    InterpreterNotFound { venv: PathBuf },

    #[error("Process launch failed: {message}")]
    LaunchFailed { message: String },

    // Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Library folder does not exist: {0}")]
    LibraryMissing(PathBuf),

    // Generic errors
    #[error("{0}")]
    Other(String),
}

/// Result type alias for launcher operations.
pub type Result<T> = std::result::Result<T, OffBookError>;

// Conversion implementations for common error types

impl From<std::io::Error> for OffBookError {
    fn from(err: std::io::Error) -> Self {
        OffBookError::Io {
            message: err.to_string(),
            path: None,
            source: Some(err),
        }
    }
}

impl From<serde_json::Error> for OffBookError {
    fn from(err: serde_json::Error) -> Self {
        OffBookError::Json {
            message: err.to_string(),
            source: Some(err),
        }
    }
}

impl OffBookError {
    /// Create an IO error with path context.
    pub fn io_with_path(err: std::io::Error, path: impl Into<PathBuf>) -> Self {
        OffBookError::Io {
            message: err.to_string(),
            path: Some(path.into()),
            source: Some(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = OffBookError::EntryPointMissing(PathBuf::from("/app/main.py"));
        assert_eq!(err.to_string(), "Entry point not found: /app/main.py");
    }

    #[test]
    fn test_io_with_path_keeps_context() {
        let err = OffBookError::io_with_path(
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
            "/app/config.json",
        );
        assert!(err.to_string().contains("config.json"));
    }
}
