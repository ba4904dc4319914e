//! Error types for trust-domain configuration

use thiserror::Error;

/// Errors that can occur while loading a trust domain
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration JSON failed to parse
    #[error("failed to parse domain configuration: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration file could not be read
    #[error("failed to read domain configuration: {0}")]
    Io(#[from] std::io::Error),

    /// Configured policy key is structurally unusable
    #[error("invalid policy key: {0}")]
    PolicyKey(#[from] taotrust_types::Error),
}

/// Result type for trust-domain operations
pub type Result<T> = std::result::Result<T, Error>;
