//! Signature and canonicalization algorithm registries
//!
//! Evidence documents name their algorithms with full URIs; older tooling
//! used short names, and quote statements carry their own method aliases.
//! All spellings resolve through these registries; anything else is
//! rejected before verification starts.

use crate::error::{Error, Result};
use crate::key::KeyAlgorithm;

/// Long identifier for SHA-256 + RSA-1024 + PKCS#1 v1.5 padding
pub const RSA1024_SHA256_PKCS_URI: &str =
    "http://www.manferdelli.com/2011/Xml/algorithms/rsa1024-sha256-pkcspad#";

/// Long identifier for SHA-256 + RSA-2048 + PKCS#1 v1.5 padding
pub const RSA2048_SHA256_PKCS_URI: &str =
    "http://www.manferdelli.com/2011/Xml/algorithms/rsa2048-sha256-pkcspad#";

/// Long identifier for the canonical JSON scheme
pub const JSON_CANONICAL_URI: &str =
    "http://www.manferdelli.com/2011/Xml/canonicalization/jsoncanonical#";

/// Recognized signature schemes
///
/// Every scheme hashes with SHA-256 and pads per EMSA-PKCS1-v1_5; the
/// variants differ only in the expected key size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignatureScheme {
    /// SHA-256 over RSA-1024
    Rsa1024Sha256Pkcs,
    /// SHA-256 over RSA-2048
    Rsa2048Sha256Pkcs,
}

impl SignatureScheme {
    /// Resolve an identifier: long URI, short name, or quote-method alias
    pub fn from_identifier(id: &str) -> Result<Self> {
        match id.trim() {
            RSA1024_SHA256_PKCS_URI | "rsa1024-sha256-pkcspad" | "Quote-Sha256FileHash-RSA1024" => {
                Ok(SignatureScheme::Rsa1024Sha256Pkcs)
            }
            RSA2048_SHA256_PKCS_URI | "rsa2048-sha256-pkcspad" | "Quote-Sha256FileHash-RSA2048" => {
                Ok(SignatureScheme::Rsa2048Sha256Pkcs)
            }
            other => Err(Error::UnsupportedAlgorithm(other.to_string())),
        }
    }

    /// Key algorithm this scheme expects
    pub fn key_algorithm(&self) -> KeyAlgorithm {
        match self {
            SignatureScheme::Rsa1024Sha256Pkcs => KeyAlgorithm::Rsa1024,
            SignatureScheme::Rsa2048Sha256Pkcs => KeyAlgorithm::Rsa2048,
        }
    }

    /// Signature length in bytes
    pub fn signature_size(&self) -> usize {
        self.key_algorithm().modulus_size()
    }

    /// Long identifier
    pub fn uri(&self) -> &'static str {
        match self {
            SignatureScheme::Rsa1024Sha256Pkcs => RSA1024_SHA256_PKCS_URI,
            SignatureScheme::Rsa2048Sha256Pkcs => RSA2048_SHA256_PKCS_URI,
        }
    }

    /// Short name
    pub fn short_name(&self) -> &'static str {
        match self {
            SignatureScheme::Rsa1024Sha256Pkcs => "rsa1024-sha256-pkcspad",
            SignatureScheme::Rsa2048Sha256Pkcs => "rsa2048-sha256-pkcspad",
        }
    }

    /// Method alias used by quote statements
    pub fn quote_name(&self) -> &'static str {
        match self {
            SignatureScheme::Rsa1024Sha256Pkcs => "Quote-Sha256FileHash-RSA1024",
            SignatureScheme::Rsa2048Sha256Pkcs => "Quote-Sha256FileHash-RSA2048",
        }
    }

    /// Scheme matching a key algorithm
    pub fn for_key(algorithm: KeyAlgorithm) -> Self {
        match algorithm {
            KeyAlgorithm::Rsa1024 => SignatureScheme::Rsa1024Sha256Pkcs,
            KeyAlgorithm::Rsa2048 => SignatureScheme::Rsa2048Sha256Pkcs,
        }
    }
}

impl std::fmt::Display for SignatureScheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.short_name())
    }
}

/// Recognized canonicalization schemes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Canonicalization {
    /// Compact JSON, object keys sorted
    JsonCanonical,
}

impl Canonicalization {
    /// Resolve an identifier, long or short
    pub fn from_identifier(id: &str) -> Result<Self> {
        match id.trim() {
            JSON_CANONICAL_URI | "jsoncanonical" => Ok(Canonicalization::JsonCanonical),
            other => Err(Error::UnsupportedAlgorithm(other.to_string())),
        }
    }

    /// Long identifier
    pub fn uri(&self) -> &'static str {
        JSON_CANONICAL_URI
    }

    /// Short name
    pub fn short_name(&self) -> &'static str {
        "jsoncanonical"
    }
}

impl std::fmt::Display for Canonicalization {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.short_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scheme_accepts_all_spellings() {
        for id in [
            RSA1024_SHA256_PKCS_URI,
            "rsa1024-sha256-pkcspad",
            "Quote-Sha256FileHash-RSA1024",
        ] {
            assert_eq!(
                SignatureScheme::from_identifier(id).unwrap(),
                SignatureScheme::Rsa1024Sha256Pkcs
            );
        }
        for id in [
            RSA2048_SHA256_PKCS_URI,
            "rsa2048-sha256-pkcspad",
            "Quote-Sha256FileHash-RSA2048",
        ] {
            assert_eq!(
                SignatureScheme::from_identifier(id).unwrap(),
                SignatureScheme::Rsa2048Sha256Pkcs
            );
        }
    }

    #[test]
    fn test_scheme_rejects_unknown() {
        assert!(matches!(
            SignatureScheme::from_identifier("rsa512-md5-pkcspad"),
            Err(Error::UnsupportedAlgorithm(_))
        ));
        assert!(SignatureScheme::from_identifier("").is_err());
    }

    #[test]
    fn test_scheme_key_sizes() {
        assert_eq!(SignatureScheme::Rsa1024Sha256Pkcs.signature_size(), 128);
        assert_eq!(SignatureScheme::Rsa2048Sha256Pkcs.signature_size(), 256);
    }

    #[test]
    fn test_canonicalization_spellings() {
        assert_eq!(
            Canonicalization::from_identifier(JSON_CANONICAL_URI).unwrap(),
            Canonicalization::JsonCanonical
        );
        assert_eq!(
            Canonicalization::from_identifier("jsoncanonical").unwrap(),
            Canonicalization::JsonCanonical
        );
        assert!(Canonicalization::from_identifier("exc-c14n").is_err());
    }
}
