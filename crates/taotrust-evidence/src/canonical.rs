//! Canonical JSON encoding of signed bodies
//!
//! Signer and verifier must digest identical bytes even when the document
//! in between was reformatted. Both sides therefore derive the signed body
//! from the parsed `signedInfo` value, never from the raw input text.

use crate::error::{ParseError, Result};
use serde_json::Value;

/// Canonical byte encoding of a JSON value
///
/// Compact separators, object keys in sorted order. `serde_json` keeps
/// object keys in a sorted map (the `preserve_order` feature must stay
/// off), so serializing a parsed value yields the canonical form directly.
pub fn canonical_json(value: &Value) -> Result<Vec<u8>> {
    serde_json::to_vec(value)
        .map_err(|e| ParseError::MalformedStructure(format!("canonicalization: {}", e)))
}
