//! Unified error types for mediatree
//!
//! The projection core never fails; these errors only arise at the edges
//! (configuration, record stores, CLI arguments, guarded deletions).

use std::path::PathBuf;

/// Unified error type for mediatree operations
#[derive(Debug, thiserror::Error)]
pub enum MediaTreeError {
    /// I/O errors (reading record listings, config files, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Record listing could not be (de)serialized
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration errors
    #[error("Config error: {0}")]
    Config(String),

    /// Failure reported by a record store implementation (e.g. a listing
    /// that cannot be written back)
    #[error("Store error: {0}")]
    Store(String),

    /// Listing file errors
    #[error("Listing error: {path} - {reason}")]
    Listing { path: PathBuf, reason: String },

    /// Invalid caller input (bad cursor, bad date, etc.)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Attempt to delete the whole media root without opting in
    #[error("Refusing to delete the media root: {0}")]
    RootDeletion(String),
}

/// Convenience Result type using MediaTreeError
pub type Result<T> = std::result::Result<T, MediaTreeError>;

impl MediaTreeError {
    /// Create a Config error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a Store error
    pub fn store(msg: impl Into<String>) -> Self {
        Self::Store(msg.into())
    }

    /// Create a Listing error
    pub fn listing(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::Listing {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create an InvalidArgument error
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}
