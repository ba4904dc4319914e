//! Evidence-chain verification
//!
//! The verifying half of the evidence pipeline: walk a parsed chain from
//! leaf to root against a trust domain's policy key and report a specific
//! verdict. The walk is stateless and synchronous; callers pass in the
//! evidence, the root key, the purpose they require, and the time to judge
//! validity at.
//!
//! # Example
//!
//! ```
//! use taotrust_crypto::SigningKey;
//! use taotrust_evidence::{DecodeLimits, EvidenceList, PrincipalInfo, StatementList};
//! use taotrust_sign::StatementBuilder;
//! use taotrust_types::{KeyAlgorithm, ValidityPeriod};
//! use taotrust_verify::{verify_list_at, Verdict};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let root = SigningKey::generate(KeyAlgorithm::Rsa1024)?;
//! let app = SigningKey::generate(KeyAlgorithm::Rsa1024)?;
//! let period = ValidityPeriod::parse("2025-01-01Z00:00.00", "2026-01-01Z00:00.00")?;
//!
//! // the root certifies the app key directly
//! let cert = StatementBuilder::new(&root).principal_certificate(PrincipalInfo::new(
//!     "//host/app",
//!     &app.public_key(),
//!     "Read",
//!     period,
//! ))?;
//!
//! let raw = serde_json::to_string(&StatementList::new(vec![cert]))?;
//! let mut list = EvidenceList::parse(&raw, &DecodeLimits::default())?;
//! let verdict = verify_list_at(&mut list, &root.public_key(), "Read", period.not_before());
//! assert_eq!(verdict, Verdict::Valid);
//! # Ok(())
//! # }
//! ```

pub mod chain;
pub mod policy;
pub mod verdict;

pub use chain::{
    verify_chain, verify_collection, verify_collection_at, verify_list, verify_list_at,
};
pub use policy::{AuthorizationRequest, Decision, DenyReason, PolicyGuard};
pub use verdict::{CollectionVerdict, Verdict};
