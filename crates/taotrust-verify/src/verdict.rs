//! Verification verdicts
//!
//! Verdicts are ordinary values, not errors. Invalid chains arrive all the
//! time; a policy decision point needs to know exactly why one failed, so
//! the outcome is a closed set of codes rather than a boolean or an
//! open-ended error string.

/// Outcome of verifying one evidence chain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// Every link checked out and the chain anchors to the expected root
    Valid,
    /// Terminal element is missing or holds a key other than the root
    InvalidRoot,
    /// A link's declared purpose does not match the required purpose
    InvalidPurpose,
    /// The element above a link exposes no key to verify it with
    InvalidParent,
    /// The verification time falls outside a link's validity period
    InvalidPeriod,
    /// A link declares a revocation policy, which nothing here can check
    InvalidRevoked,
    /// A link's signature does not verify under its parent's key
    InvalidSig,
}

impl Verdict {
    /// Whether the chain verified
    pub fn is_valid(&self) -> bool {
        matches!(self, Verdict::Valid)
    }

    /// Stable code for logs and audit records
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Valid => "VALID",
            Verdict::InvalidRoot => "INVALID_ROOT",
            Verdict::InvalidPurpose => "INVALID_PURPOSE",
            Verdict::InvalidParent => "INVALID_PARENT",
            Verdict::InvalidPeriod => "INVALID_PERIOD",
            Verdict::InvalidRevoked => "INVALID_REVOKED",
            Verdict::InvalidSig => "INVALID_SIG",
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of verifying an evidence collection
///
/// A collection is valid only when every member list is. Verification
/// stops at the first failing list and reports its index so the caller can
/// say which proof path broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionVerdict {
    /// Every member list verified
    Valid,
    /// A member list failed; later lists were not checked
    Invalid {
        /// Index of the first failing list
        list_index: usize,
        /// Why that list failed
        verdict: Verdict,
    },
}

impl CollectionVerdict {
    /// Whether every member list verified
    pub fn is_valid(&self) -> bool {
        matches!(self, CollectionVerdict::Valid)
    }
}

impl std::fmt::Display for CollectionVerdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CollectionVerdict::Valid => f.write_str("VALID"),
            CollectionVerdict::Invalid {
                list_index,
                verdict,
            } => write!(f, "{} at list {}", verdict, list_index),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verdict_codes() {
        assert_eq!(Verdict::Valid.to_string(), "VALID");
        assert_eq!(Verdict::InvalidRoot.to_string(), "INVALID_ROOT");
        assert_eq!(Verdict::InvalidPurpose.to_string(), "INVALID_PURPOSE");
        assert_eq!(Verdict::InvalidParent.to_string(), "INVALID_PARENT");
        assert_eq!(Verdict::InvalidPeriod.to_string(), "INVALID_PERIOD");
        assert_eq!(Verdict::InvalidRevoked.to_string(), "INVALID_REVOKED");
        assert_eq!(Verdict::InvalidSig.to_string(), "INVALID_SIG");
    }

    #[test]
    fn test_only_valid_is_valid() {
        assert!(Verdict::Valid.is_valid());
        for verdict in [
            Verdict::InvalidRoot,
            Verdict::InvalidPurpose,
            Verdict::InvalidParent,
            Verdict::InvalidPeriod,
            Verdict::InvalidRevoked,
            Verdict::InvalidSig,
        ] {
            assert!(!verdict.is_valid());
        }
    }

    #[test]
    fn test_collection_verdict_display() {
        assert_eq!(CollectionVerdict::Valid.to_string(), "VALID");
        let invalid = CollectionVerdict::Invalid {
            list_index: 1,
            verdict: Verdict::InvalidSig,
        };
        assert_eq!(invalid.to_string(), "INVALID_SIG at list 1");
        assert!(!invalid.is_valid());
    }
}
