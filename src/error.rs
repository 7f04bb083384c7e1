//! Error types for ddj-toolkit
//!
//! Centralized error handling using thiserror.

use thiserror::Error;

/// All error types that can occur while loading and filtering the directory
#[derive(Debug, Error)]
pub enum ToolkitError {
    /// A tool record is missing a required field or has one of the wrong shape
    #[error("Malformed record #{index}: {detail}")]
    MalformedRecord { index: usize, detail: String },

    /// Fetching a data document failed (transport or HTTP status)
    #[error("Fetch error: {0}")]
    Fetch(String),

    /// A data document does not have the expected top-level shape
    #[error("Invalid document '{0}': {1}")]
    InvalidDocument(String, String),

    /// Invalid configuration value
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// YAML parse error
    #[error("YAML error: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ToolkitError {
    /// Shorthand for a malformed record error
    pub fn malformed(index: usize, detail: impl Into<String>) -> Self {
        Self::MalformedRecord {
            index,
            detail: detail.into(),
        }
    }
}

/// Result type alias for ddj-toolkit operations
pub type Result<T> = std::result::Result<T, ToolkitError>;
