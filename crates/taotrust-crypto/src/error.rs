//! Error types for taotrust-crypto

use thiserror::Error;

/// Errors that can occur in cryptographic operations
///
/// Signature verification itself never returns these; it reports plain
/// `bool`. The fallible paths are key handling, signing, and sealing.
#[derive(Error, Debug)]
pub enum Error {
    /// Key generation error
    #[error("Key generation error: {0}")]
    KeyGeneration(String),

    /// Signing error
    #[error("Signing error: {0}")]
    Signing(String),

    /// Key material unusable for the requested operation
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// Sealing (public-key encryption) error
    #[error("Seal error: {0}")]
    Seal(String),

    /// Unsealing (private-key decryption) error
    #[error("Unseal error: {0}")]
    Unseal(String),
}

/// Result type for cryptographic operations
pub type Result<T> = std::result::Result<T, Error>;
