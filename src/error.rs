//! Error types for the Concord library.
//!
//! All fallible operations return [`Result`], whose error type is the
//! [`ConcordError`] enum. Constructor helpers keep call sites short.
//!
//! # Examples
//!
//! ```
//! use concord::error::{ConcordError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(ConcordError::query("invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {e}"),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Concord operations.
#[derive(Error, Debug)]
pub enum ConcordError {
    /// I/O errors (file operations, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The corpus document could not be fetched or decoded.
    ///
    /// Fatal to the session's search capability; never silently retried.
    #[error("corpus unavailable: {0}")]
    DataUnavailable(String),

    /// A search was requested before the corpus and index were built.
    #[error("search is not ready: {0}")]
    NotReady(String),

    /// Corpus-related errors (empty corpus, malformed records, etc.)
    #[error("corpus error: {0}")]
    Corpus(String),

    /// Analysis-related errors (tokenization patterns, etc.)
    #[error("analysis error: {0}")]
    Analysis(String),

    /// Query-related errors
    #[error("query error: {0}")]
    Query(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("{0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with [`ConcordError`].
pub type Result<T> = std::result::Result<T, ConcordError>;

impl ConcordError {
    /// Create a new data-unavailable error.
    pub fn data_unavailable<S: Into<String>>(msg: S) -> Self {
        ConcordError::DataUnavailable(msg.into())
    }

    /// Create a new not-ready error.
    pub fn not_ready<S: Into<String>>(msg: S) -> Self {
        ConcordError::NotReady(msg.into())
    }

    /// Create a new corpus error.
    pub fn corpus<S: Into<String>>(msg: S) -> Self {
        ConcordError::Corpus(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        ConcordError::Analysis(msg.into())
    }

    /// Create a new query error.
    pub fn query<S: Into<String>>(msg: S) -> Self {
        ConcordError::Query(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        ConcordError::Other(msg.into())
    }
}
