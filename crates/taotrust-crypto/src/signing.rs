//! Key generation and signing
//!
//! Signing-capable keys live here, outside the chain engine; verification
//! only ever sees the public half as `KeyMaterial`.

use crate::error::{Error, Result};
use rsa::pkcs1v15::SigningKey as RsaSigningKey;
use rsa::signature::{SignatureEncoding, Signer};
use rsa::traits::PublicKeyParts;
use rsa::RsaPrivateKey;
use sha2::Sha256;
use taotrust_types::{KeyAlgorithm, KeyMaterial};

/// An RSA key pair able to issue signed statements
pub struct SigningKey {
    inner: RsaPrivateKey,
    public: KeyMaterial,
}

impl SigningKey {
    /// Generate a fresh key pair
    pub fn generate(algorithm: KeyAlgorithm) -> Result<Self> {
        let mut rng = rand::thread_rng();
        let inner = RsaPrivateKey::new(&mut rng, algorithm.bits())
            .map_err(|e| Error::KeyGeneration(e.to_string()))?;
        let public = KeyMaterial::new(
            algorithm,
            &inner.n().to_bytes_be(),
            &inner.e().to_bytes_be(),
        )
        .map_err(|e| Error::KeyGeneration(e.to_string()))?;
        Ok(SigningKey { inner, public })
    }

    /// Attach a descriptive name to the public half
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.public = self.public.with_name(name);
        self
    }

    /// Key algorithm
    pub fn algorithm(&self) -> KeyAlgorithm {
        self.public.algorithm()
    }

    /// The public half
    pub fn public_key(&self) -> KeyMaterial {
        self.public.clone()
    }

    /// Sign body bytes: SHA-256 digest under EMSA-PKCS1-v1_5
    ///
    /// The output is deterministic and exactly the key's modulus width,
    /// matching what `verify_signature` expects.
    pub fn sign(&self, body: &[u8]) -> Result<Vec<u8>> {
        let signer = RsaSigningKey::<Sha256>::new(self.inner.clone());
        let signature = signer
            .try_sign(body)
            .map_err(|e| Error::Signing(e.to_string()))?;
        Ok(signature.to_vec())
    }

    pub(crate) fn private(&self) -> &RsaPrivateKey {
        &self.inner
    }
}

impl std::fmt::Debug for SigningKey {
    // private material stays out of debug output
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SigningKey")
            .field("public", &self.public)
            .finish_non_exhaustive()
    }
}
