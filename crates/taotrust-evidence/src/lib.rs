//! Evidence statements, lists, and collections
//!
//! This crate turns untrusted wire JSON into typed evidence. Parsing is
//! strict and pure: counts must match, unknown statement types and
//! algorithms are rejected, limits are enforced up front, and nothing here
//! checks a signature or reads a clock. What comes out is either a fully
//! decoded structure or a [`ParseError`].

pub mod canonical;
pub mod collection;
pub mod element;
pub mod error;
pub mod limits;
pub mod list;
pub mod statement;

pub use canonical::canonical_json;
pub use collection::EvidenceCollection;
pub use element::{
    EvidenceElement, EvidenceKind, PrincipalCertificate, QuoteCertificate, SignedEnvelope,
    SignedGrant,
};
pub use error::{ParseError, Result};
pub use limits::{DecodeLimits, DEFAULT_MAX_COLLECTION_LISTS, DEFAULT_MAX_LIST_ELEMENTS};
pub use list::EvidenceList;
pub use statement::{
    GrantInfo, PrincipalInfo, QuoteInfo, SignedStatement, StatementCollection, StatementList,
};

/// Decode a wire evidence list
pub fn parse_evidence_list(raw: &str, limits: &DecodeLimits) -> Result<EvidenceList> {
    EvidenceList::parse(raw, limits)
}

/// Decode a wire evidence collection
pub fn parse_evidence_collection(
    raw: &str,
    limits: &DecodeLimits,
) -> Result<EvidenceCollection> {
    EvidenceCollection::parse(raw, limits)
}
