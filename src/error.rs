//! Unified error types for duolog.
//!
//! This module provides a single [`DuologError`] enum covering every failure
//! the library can surface. The split mirrors the processing policy: problems
//! with an individual message are recovered inside the parsers (skip and
//! continue, logged via `tracing`), so only whole-invocation failures ever
//! reach this type.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for duolog operations.
pub type Result<T> = std::result::Result<T, DuologError>;

/// The error type for all duolog operations.
///
/// Each variant carries context about what went wrong and, where applicable,
/// the underlying source error.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DuologError {
    /// An I/O error occurred while reading an export file or writing the
    /// output payload.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Failed to parse an export document.
    ///
    /// Raised for malformed Instagram JSON; an entire invocation fails with
    /// this error and delivers no partial results.
    #[error("Failed to parse {format} export{}: {source}", path.as_ref().map(|p| format!(" (file: {})", p.display())).unwrap_or_default())]
    Parse {
        /// The format being parsed (e.g., "Instagram JSON")
        format: &'static str,
        /// The underlying parse error
        #[source]
        source: serde_json::Error,
        /// The file path, if known
        path: Option<PathBuf>,
    },

    /// JSON serialization error while writing the output payload.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The pipeline worker thread has shut down.
    ///
    /// Returned when submitting to or receiving from a worker whose channel
    /// has disconnected (e.g., the thread panicked or was dropped).
    #[error("pipeline worker is no longer running")]
    WorkerClosed,
}

impl DuologError {
    /// Creates a parse error for Instagram JSON exports.
    pub fn instagram_parse(source: serde_json::Error, path: Option<PathBuf>) -> Self {
        DuologError::Parse {
            format: "Instagram JSON",
            source,
            path,
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, DuologError::Io(_))
    }

    /// Returns `true` if this is an export parse error.
    pub fn is_parse(&self) -> bool {
        matches!(self, DuologError::Parse { .. })
    }
}
