//! Public key material and its wire form
//!
//! Chain verification never touches private keys; everything here is the
//! public half plus metadata.

use crate::encoding::Base64;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Supported public-key algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyAlgorithm {
    /// 1024-bit RSA
    #[serde(rename = "rsa1024")]
    Rsa1024,
    /// 2048-bit RSA
    #[serde(rename = "rsa2048")]
    Rsa2048,
}

impl KeyAlgorithm {
    /// Modulus length in bytes
    pub fn modulus_size(&self) -> usize {
        match self {
            KeyAlgorithm::Rsa1024 => 128,
            KeyAlgorithm::Rsa2048 => 256,
        }
    }

    /// Key size in bits
    pub fn bits(&self) -> usize {
        self.modulus_size() * 8
    }

    /// Wire name of this algorithm
    pub fn as_str(&self) -> &'static str {
        match self {
            KeyAlgorithm::Rsa1024 => "rsa1024",
            KeyAlgorithm::Rsa2048 => "rsa2048",
        }
    }

    /// Look up an algorithm by its wire name
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "rsa1024" => Ok(KeyAlgorithm::Rsa1024),
            "rsa2048" => Ok(KeyAlgorithm::Rsa2048),
            other => Err(Error::UnsupportedAlgorithm(other.to_string())),
        }
    }
}

impl std::fmt::Display for KeyAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An asymmetric public key as used throughout the trust chain
///
/// The modulus and exponent are big-endian with leading zero bytes trimmed
/// at construction, so two encodings of the same key compare equal. The
/// `name` is descriptive only and excluded from equality: chains anchor on
/// what a key *is*, not what somebody labeled it.
#[derive(Debug, Clone)]
pub struct KeyMaterial {
    algorithm: KeyAlgorithm,
    modulus: Vec<u8>,
    exponent: Vec<u8>,
    name: Option<String>,
}

fn trim_leading_zeros(bytes: &[u8]) -> &[u8] {
    let start = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
    &bytes[start..]
}

impl KeyMaterial {
    /// Construct key material, normalizing and validating the components
    ///
    /// The trimmed modulus must be exactly `algorithm.modulus_size()` bytes
    /// (a real RSA modulus has its top bit set, so trimming never shortens
    /// a legitimate one) and the exponent must be non-zero.
    pub fn new(algorithm: KeyAlgorithm, modulus: &[u8], exponent: &[u8]) -> Result<Self> {
        let modulus = trim_leading_zeros(modulus);
        if modulus.len() != algorithm.modulus_size() {
            return Err(Error::MalformedKey(format!(
                "{} modulus must be {} bytes, got {}",
                algorithm,
                algorithm.modulus_size(),
                modulus.len()
            )));
        }
        let exponent = trim_leading_zeros(exponent);
        if exponent.is_empty() {
            return Err(Error::MalformedKey("zero public exponent".to_string()));
        }
        Ok(KeyMaterial {
            algorithm,
            modulus: modulus.to_vec(),
            exponent: exponent.to_vec(),
            name: None,
        })
    }

    /// Attach a descriptive name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Key algorithm
    pub fn algorithm(&self) -> KeyAlgorithm {
        self.algorithm
    }

    /// Big-endian modulus, leading zeros trimmed
    pub fn modulus(&self) -> &[u8] {
        &self.modulus
    }

    /// Big-endian public exponent, leading zeros trimmed
    pub fn exponent(&self) -> &[u8] {
        &self.exponent
    }

    /// Descriptive name, if any
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Parse the wire form
    pub fn from_block(block: &KeyBlock) -> Result<Self> {
        let algorithm = KeyAlgorithm::from_name(&block.key_algorithm).map_err(|_| {
            Error::MalformedKey(format!("unknown key algorithm {:?}", block.key_algorithm))
        })?;
        let modulus = block
            .modulus
            .decode()
            .map_err(|e| Error::MalformedKey(format!("modulus: {}", e)))?;
        let exponent = block
            .exponent
            .decode()
            .map_err(|e| Error::MalformedKey(format!("exponent: {}", e)))?;
        let key = KeyMaterial::new(algorithm, &modulus, &exponent)?;
        Ok(match &block.key_name {
            Some(name) => key.with_name(name.clone()),
            None => key,
        })
    }

    /// Render the wire form
    pub fn to_block(&self) -> KeyBlock {
        KeyBlock {
            key_name: self.name.clone(),
            key_algorithm: self.algorithm.as_str().to_string(),
            modulus: Base64::encode(&self.modulus),
            exponent: Base64::encode(&self.exponent),
        }
    }
}

// name is descriptive, not load-bearing for equality
impl PartialEq for KeyMaterial {
    fn eq(&self, other: &Self) -> bool {
        self.algorithm == other.algorithm
            && self.modulus == other.modulus
            && self.exponent == other.exponent
    }
}

impl Eq for KeyMaterial {}

impl std::fmt::Display for KeyMaterial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{} ({})", name, self.algorithm),
            None => write!(f, "unnamed {}", self.algorithm),
        }
    }
}

impl TryFrom<&KeyBlock> for KeyMaterial {
    type Error = Error;

    fn try_from(block: &KeyBlock) -> Result<Self> {
        KeyMaterial::from_block(block)
    }
}

/// Wire form of a public key as embedded in evidence documents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyBlock {
    /// Descriptive name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_name: Option<String>,
    /// Algorithm wire name (`rsa1024` / `rsa2048`)
    pub key_algorithm: String,
    /// Big-endian modulus, base64
    pub modulus: Base64,
    /// Big-endian public exponent, base64
    pub exponent: Base64,
}
