//! Error types and handling infrastructure for revtail.
//!
//! This module provides a centralized error handling system using `thiserror`
//! for custom error types, with `anyhow` reserved for the binary entry point.
//!
//! Every failure is reported to the caller as a structured error, never as a
//! partial silent result: an I/O failure mid-scan aborts the operation and
//! whatever line buffer was in progress is discarded.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for revtail operations.
///
/// This enum covers all failure conditions of path validation, backward
/// scanning, and search delegation.
#[derive(Error, Debug)]
pub enum RevtailError {
    /// The requested path does not exist
    #[error("File not found: {path}")]
    NotFound { path: PathBuf },

    /// Path exists but is not a regular file (directory, socket, ...)
    #[error("Path is not a regular file: {path}")]
    NotAFile { path: PathBuf },

    /// Path failed text classification
    #[error("Not a text file: {path}")]
    NotText { path: PathBuf },

    /// Non-positive page, size, or search limit, or an empty search token
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// Underlying read, seek, or metadata error
    #[error("File operation failed: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// The external search process failed to start or exited abnormally
    #[error("Search unavailable: {message}")]
    SearchUnavailable { message: String },
}

/// Standard Result type for revtail operations.
pub type Result<T> = std::result::Result<T, RevtailError>;

impl RevtailError {
    /// Create an Io error from an io::Error with additional context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create an InvalidArgument error with a descriptive message
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a SearchUnavailable error with a descriptive message
    pub fn search_unavailable(message: impl Into<String>) -> Self {
        Self::SearchUnavailable {
            message: message.into(),
        }
    }
}

// Automatic conversion from io::Error for the common propagation case.
// Path context, when available, is added at the call site via `io()`.
impl From<std::io::Error> for RevtailError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: "IO operation failed".to_string(),
            source: err,
        }
    }
}
