//! The chain walk
//!
//! A chain is verified root-first, then link by link from the leaf upward.
//! Each link at index `i` is vouched for by the element at `i + 1`: that
//! element's subject key must verify this link's signature. The walk is a
//! pure function of the list, the root key, the required purpose, and the
//! verification time; it holds no state between calls and any number of
//! walks may run concurrently.

use crate::verdict::{CollectionVerdict, Verdict};
use chrono::{DateTime, Utc};
use taotrust_crypto::verify_signature;
use taotrust_evidence::{EvidenceCollection, EvidenceElement, EvidenceList};
use taotrust_types::KeyMaterial;

/// Verify a complete chain at an explicit time
///
/// The list must already end in a policy-key terminal; [`verify_list_at`]
/// appends one for lists fresh off the wire. The terminal is checked
/// against `root_key` before any link is walked: a perfect chain hanging
/// off the wrong root is worthless, and saying so must not depend on which
/// link happens to break first.
///
/// Per-link checks run in a fixed order (purpose, signer resolution,
/// validity period, revocation, signature) and the walk stops at the first
/// failure. The returned code identifies that first failure.
///
/// # Panics
///
/// Panics if the list holds fewer than two elements. A chain needs at
/// least a leaf and the terminal; anything shorter is a caller bug, not
/// untrusted input.
pub fn verify_chain(
    list: &EvidenceList,
    root_key: &KeyMaterial,
    required_purpose: &str,
    at: DateTime<Utc>,
) -> Verdict {
    let elements = list.elements();
    assert!(
        elements.len() >= 2,
        "chain must hold a leaf and the policy-key terminal"
    );

    let terminal = &elements[elements.len() - 1];
    let anchored = matches!(
        terminal,
        EvidenceElement::EmbeddedPolicyKey(key) if key == root_key
    );
    if !anchored {
        tracing::debug!("chain rejected: terminal does not hold the policy key");
        return Verdict::InvalidRoot;
    }

    for i in 0..elements.len() - 1 {
        let verdict = verify_link(&elements[i], &elements[i + 1], required_purpose, at);
        if !verdict.is_valid() {
            tracing::debug!("chain rejected at element {}: {}", i, verdict);
            return verdict;
        }
    }
    Verdict::Valid
}

fn verify_link(
    element: &EvidenceElement,
    parent: &EvidenceElement,
    required_purpose: &str,
    at: DateTime<Utc>,
) -> Verdict {
    // a synthetic terminal sitting in a walked position declares nothing,
    // so it cannot satisfy any required purpose
    let Some(envelope) = element.envelope() else {
        return Verdict::InvalidPurpose;
    };
    if envelope.purpose() != required_purpose {
        return Verdict::InvalidPurpose;
    }
    let Some(signer_key) = parent.subject_key() else {
        // grants vouch without carrying a key; nothing can sit below one
        return Verdict::InvalidParent;
    };
    if !envelope.validity().contains(at) {
        return Verdict::InvalidPeriod;
    }
    if envelope.revocation_policy().is_some() {
        // no revocation collaborator exists, so a declared policy can
        // never be consulted; fail closed rather than ignore it
        return Verdict::InvalidRevoked;
    }
    if !verify_signature(signer_key, envelope.signed_body(), envelope.signature()) {
        return Verdict::InvalidSig;
    }
    Verdict::Valid
}

/// Append the policy-key terminal to a parsed list, then verify it
///
/// The terminal comes from domain configuration, never from the wire, so
/// a list is completed here before the walk. A list that somehow already
/// ends in a terminal keeps it, and the root check judges whatever key it
/// holds.
pub fn verify_list_at(
    list: &mut EvidenceList,
    root_key: &KeyMaterial,
    required_purpose: &str,
    at: DateTime<Utc>,
) -> Verdict {
    list.ensure_terminal(root_key);
    verify_chain(list, root_key, required_purpose, at)
}

/// Verify a parsed list at the current time
pub fn verify_list(
    list: &mut EvidenceList,
    root_key: &KeyMaterial,
    required_purpose: &str,
) -> Verdict {
    verify_list_at(list, root_key, required_purpose, Utc::now())
}

/// Verify every list in a collection at an explicit time
///
/// Member lists are independent proof paths judged against the same root.
/// Verification stops at the first failing list and reports its index.
///
/// # Panics
///
/// Panics if the collection holds no lists; an empty collection proves
/// nothing and presenting one is a caller bug.
pub fn verify_collection_at(
    collection: &mut EvidenceCollection,
    root_key: &KeyMaterial,
    required_purpose: &str,
    at: DateTime<Utc>,
) -> CollectionVerdict {
    assert!(
        !collection.is_empty(),
        "collection must hold at least one list"
    );
    for (index, list) in collection.lists_mut().iter_mut().enumerate() {
        let verdict = verify_list_at(list, root_key, required_purpose, at);
        if !verdict.is_valid() {
            tracing::debug!("collection failing on list {}: {}", index, verdict);
            return CollectionVerdict::Invalid {
                list_index: index,
                verdict,
            };
        }
    }
    CollectionVerdict::Valid
}

/// Verify every list in a collection at the current time
pub fn verify_collection(
    collection: &mut EvidenceCollection,
    root_key: &KeyMaterial,
    required_purpose: &str,
) -> CollectionVerdict {
    verify_collection_at(collection, root_key, required_purpose, Utc::now())
}
