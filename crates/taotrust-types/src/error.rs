//! Error types for taotrust-types

use thiserror::Error;

/// Errors that can occur in taotrust-types
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid base64 or other textual encoding
    #[error("Invalid encoding: {0}")]
    InvalidEncoding(String),

    /// Key material that fails structural checks
    #[error("Malformed key: {0}")]
    MalformedKey(String),

    /// Signature or canonicalization identifier outside the recognized set
    #[error("Unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// Timestamp text that does not match the expected form
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    /// Validity period whose end precedes its start
    #[error("Invalid validity period: {0}")]
    InvalidPeriod(String),
}

/// Result type for taotrust-types operations
pub type Result<T> = std::result::Result<T, Error>;
