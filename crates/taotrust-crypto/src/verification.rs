//! Signature verification
//!
//! Verification is a plain boolean seam: any malformed length, padding
//! mismatch, or digest mismatch is `false`, never an error or a panic.
//! Untrusted chains routinely carry bad signatures; that is normal input.

use crate::error::{Error, Result};
use crate::hash::sha256;
use crate::padding::emsa_pkcs1_v15_check;
use rsa::BigUint;
use taotrust_types::KeyMaterial;

/// Raw RSA public transform
///
/// Interprets `block` as a big-endian integer, raises it to the public
/// exponent mod the modulus, and returns the result restored to exactly
/// the key's modulus width. Fails on a block of the wrong width or one
/// whose value is not below the modulus.
pub fn public_transform(key: &KeyMaterial, block: &[u8]) -> Result<Vec<u8>> {
    let k = key.algorithm().modulus_size();
    if block.len() != k {
        return Err(Error::InvalidKey(format!(
            "block is {} bytes, key width {}",
            block.len(),
            k
        )));
    }
    let n = BigUint::from_bytes_be(key.modulus());
    let e = BigUint::from_bytes_be(key.exponent());
    let m = BigUint::from_bytes_be(block);
    if m >= n {
        return Err(Error::InvalidKey(
            "block value not below modulus".to_string(),
        ));
    }
    let out = m.modpow(&e, &n).to_bytes_be();
    // to_bytes_be strips leading zeros; the padding check needs fixed width
    let mut restored = vec![0u8; k - out.len()];
    restored.extend_from_slice(&out);
    Ok(restored)
}

/// Verify a signature over canonical body bytes
pub fn verify_signature(key: &KeyMaterial, canonical_body: &[u8], signature: &[u8]) -> bool {
    verify_digest(key, &sha256(canonical_body), signature)
}

/// Verify a signature against an already-computed SHA-256 digest
pub fn verify_digest(key: &KeyMaterial, digest: &[u8; 32], signature: &[u8]) -> bool {
    if signature.len() != key.algorithm().modulus_size() {
        return false;
    }
    match public_transform(key, signature) {
        Ok(block) => emsa_pkcs1_v15_check(digest, &block),
        Err(_) => false,
    }
}
