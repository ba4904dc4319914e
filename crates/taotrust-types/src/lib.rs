//! Core types for Tao-style attestation trust chains
//!
//! This crate provides the data structures shared across the taotrust
//! workspace: public key material and its wire form, the recognized
//! signature and canonicalization algorithm identifiers, validity periods
//! in the evidence timestamp format, and encoding wrappers.

pub mod algorithm;
pub mod encoding;
pub mod error;
pub mod key;
pub mod time;

pub use algorithm::{
    Canonicalization, SignatureScheme, JSON_CANONICAL_URI, RSA1024_SHA256_PKCS_URI,
    RSA2048_SHA256_PKCS_URI,
};
pub use encoding::Base64;
pub use error::{Error, Result};
pub use key::{KeyAlgorithm, KeyBlock, KeyMaterial};
pub use time::{format_timestamp, parse_timestamp, ValidityPeriod, TIMESTAMP_FORMAT};
