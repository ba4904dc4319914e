//! Cryptographic primitives for taotrust
//!
//! This crate provides the digest and RSA primitives behind evidence-chain
//! verification: SHA-256 hashing, the raw public transform, byte-exact
//! EMSA-PKCS1-v1_5 block checking, statement signing, and seal/unseal.

pub mod error;
pub mod hash;
mod padding;
pub mod seal;
pub mod signing;
pub mod verification;

pub use error::{Error, Result};
pub use hash::sha256;
pub use seal::{seal, unseal};
pub use signing::SigningKey;
pub use verification::{public_transform, verify_digest, verify_signature};
