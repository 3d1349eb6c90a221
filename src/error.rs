//! Error types for the ingestion pipeline

use std::path::Path;
use thiserror::Error;

/// Pipeline error type
#[derive(Debug, Error)]
pub enum Error {
    /// The input path does not exist or cannot be opened as the expected format
    #[error("File not readable: {path}: {reason}")]
    FileNotReadable { path: String, reason: String },

    /// The underlying text/link extraction library failed during parsing
    #[error("Extraction failed for {path}: {reason}")]
    Extraction { path: String, reason: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a `FileNotReadable` error for a path
    pub fn file_not_readable(path: &Path, reason: impl ToString) -> Self {
        Self::FileNotReadable {
            path: path.display().to_string(),
            reason: reason.to_string(),
        }
    }

    /// Create an `Extraction` error for a path
    pub fn extraction(path: &Path, reason: impl ToString) -> Self {
        Self::Extraction {
            path: path.display().to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Result type alias for pipeline operations
pub type Result<T> = std::result::Result<T, Error>;
