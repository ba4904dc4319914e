//! Error types for taotrust-evidence

use thiserror::Error;

/// Errors that can occur while parsing evidence
///
/// This is a closed set: every way an evidence document can be rejected
/// maps onto one of these. Parsing never returns a partial element, and
/// verification reports its own verdict values, never these.
#[derive(Error, Debug)]
pub enum ParseError {
    /// Required structure or sub-field absent, or not valid JSON at all
    #[error("Malformed structure: {0}")]
    MalformedStructure(String),

    /// Signature or canonicalization identifier outside the recognized set
    #[error("Unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// Embedded subject key block present but unusable
    #[error("Malformed key: {0}")]
    MalformedKey(String),

    /// Declared element count differs from the number actually present
    #[error("Count mismatch: declared {declared}, found {found}")]
    CountMismatch { declared: usize, found: usize },

    /// More elements than the configured decode limit allows
    #[error("Too many elements: {found} exceeds limit {limit}")]
    TooManyElements { found: usize, limit: usize },
}

/// Result type for evidence parsing
pub type Result<T> = std::result::Result<T, ParseError>;
