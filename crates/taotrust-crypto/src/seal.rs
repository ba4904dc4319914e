//! Sealing data to a principal's key
//!
//! Sealing encrypts a short secret to a subject public key; only the
//! holder of the matching private key can unseal it. Whether a caller may
//! seal or unseal at all is a policy decision made elsewhere, on the back
//! of a chain verdict.

use crate::error::{Error, Result};
use crate::signing::SigningKey;
use rsa::{BigUint, Pkcs1v15Encrypt, RsaPublicKey};
use taotrust_types::KeyMaterial;

// PKCS#1 v1.5 encryption overhead: 00 02, at least eight nonzero pad bytes, 00
const SEAL_OVERHEAD: usize = 11;

fn to_public_key(key: &KeyMaterial) -> Result<RsaPublicKey> {
    RsaPublicKey::new(
        BigUint::from_bytes_be(key.modulus()),
        BigUint::from_bytes_be(key.exponent()),
    )
    .map_err(|e| Error::InvalidKey(e.to_string()))
}

/// Encrypt `plaintext` to `key`
///
/// The plaintext must fit in one block: at most modulus width minus the
/// padding overhead (117 bytes for RSA-1024).
pub fn seal(key: &KeyMaterial, plaintext: &[u8]) -> Result<Vec<u8>> {
    let limit = key.algorithm().modulus_size() - SEAL_OVERHEAD;
    if plaintext.len() > limit {
        return Err(Error::Seal(format!(
            "plaintext is {} bytes, limit {}",
            plaintext.len(),
            limit
        )));
    }
    let public = to_public_key(key)?;
    let mut rng = rand::thread_rng();
    public
        .encrypt(&mut rng, Pkcs1v15Encrypt, plaintext)
        .map_err(|e| Error::Seal(e.to_string()))
}

/// Decrypt a sealed block with the private half of `key`
pub fn unseal(key: &SigningKey, sealed: &[u8]) -> Result<Vec<u8>> {
    key.private()
        .decrypt(Pkcs1v15Encrypt, sealed)
        .map_err(|e| Error::Unseal(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use taotrust_types::KeyAlgorithm;

    #[test]
    fn test_seal_unseal_roundtrip() {
        let key = SigningKey::generate(KeyAlgorithm::Rsa1024).unwrap();
        let secret = b"sealed storage key";
        let sealed = seal(&key.public_key(), secret).unwrap();
        assert_eq!(sealed.len(), 128);
        assert_ne!(&sealed[..], &secret[..]);
        assert_eq!(unseal(&key, &sealed).unwrap(), secret);
    }

    #[test]
    fn test_seal_rejects_oversized_plaintext() {
        let key = SigningKey::generate(KeyAlgorithm::Rsa1024).unwrap();
        let err = seal(&key.public_key(), &[0u8; 118]);
        assert!(matches!(err, Err(Error::Seal(_))));
        assert!(seal(&key.public_key(), &[0u8; 117]).is_ok());
    }

    #[test]
    fn test_unseal_wrong_key_fails() {
        let key = SigningKey::generate(KeyAlgorithm::Rsa1024).unwrap();
        let other = SigningKey::generate(KeyAlgorithm::Rsa1024).unwrap();
        let sealed = seal(&key.public_key(), b"secret").unwrap();
        assert!(unseal(&other, &sealed).is_err());
    }
}
