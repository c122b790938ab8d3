//! Error types for principal-tree
//!
//! Uses `thiserror` for library errors. Only load failures and configuration
//! problems surface as errors; structural and transfer mismatches are local
//! recoveries and never reach this type.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::LoadError;

/// Result type alias for tree operations
pub type TreeResult<T> = Result<T, TreeError>;

#[derive(Error, Debug)]
pub enum TreeError {
    /// Forest loader rejected; the previous view is left intact
    #[error("failed to load principal forest for '{scope}': {source}")]
    LoadFailed {
        scope: String,
        #[source]
        source: LoadError,
    },

    /// Configuration file could not be parsed
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
