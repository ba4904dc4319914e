//! Error types for taotrust-sign

use thiserror::Error;

/// Errors that can occur while issuing statements
#[derive(Error, Debug)]
pub enum Error {
    /// Signing failure
    #[error("Signing error: {0}")]
    Crypto(#[from] taotrust_crypto::Error),

    /// Signed-info canonicalization failure
    #[error("Canonicalization error: {0}")]
    Canonicalization(#[from] taotrust_evidence::ParseError),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for statement issuance
pub type Result<T> = std::result::Result<T, Error>;
