//! Ordered evidence lists
//!
//! Index 0 is the leaf, the statement about the subject being proven, and
//! each later index vouches for the one before it. The last slot is the
//! verifier's synthetic policy-key terminal, appended after parsing.

use crate::element::{EvidenceElement, EvidenceKind};
use crate::error::{ParseError, Result};
use crate::limits::DecodeLimits;
use crate::statement::StatementList;
use taotrust_types::KeyMaterial;

/// An ordered proof chain, leaf first
#[derive(Debug, Clone)]
pub struct EvidenceList {
    elements: Vec<EvidenceElement>,
}

impl EvidenceList {
    /// Build a list from already-decoded elements
    pub fn from_elements(elements: Vec<EvidenceElement>) -> Self {
        EvidenceList { elements }
    }

    /// Decode a wire evidence list
    ///
    /// Limits are enforced on the declared structure before any statement
    /// is decoded. The cap leaves room for the terminal the verifier will
    /// append, so a list of `max_list_elements` wire statements is already
    /// too long.
    pub fn parse(raw: &str, limits: &DecodeLimits) -> Result<Self> {
        let wire: StatementList = serde_json::from_str(raw)
            .map_err(|e| ParseError::MalformedStructure(format!("evidence list: {}", e)))?;
        Self::from_wire(wire, limits)
    }

    /// Decode an already-deserialized wire list
    pub fn from_wire(wire: StatementList, limits: &DecodeLimits) -> Result<Self> {
        let found = wire.statements.len();
        let limit = limits.wire_statement_limit();
        if found > limit {
            tracing::warn!("evidence list rejected: {} statements exceeds limit {}", found, limit);
            return Err(ParseError::TooManyElements { found, limit });
        }
        if wire.count != found {
            return Err(ParseError::CountMismatch {
                declared: wire.count,
                found,
            });
        }
        if found == 0 {
            return Err(ParseError::MalformedStructure(
                "empty evidence list".to_string(),
            ));
        }
        let elements = wire
            .statements
            .iter()
            .map(EvidenceElement::from_statement)
            .collect::<Result<Vec<_>>>()?;
        tracing::debug!("parsed evidence list with {} elements", elements.len());
        Ok(EvidenceList { elements })
    }

    /// The elements in order, leaf first
    pub fn elements(&self) -> &[EvidenceElement] {
        &self.elements
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the list holds no elements
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// The leaf element, if any
    pub fn leaf(&self) -> Option<&EvidenceElement> {
        self.elements.first()
    }

    /// The key the leaf binds to its subject, if the leaf carries one
    pub fn leaf_subject_key(&self) -> Option<&KeyMaterial> {
        self.leaf().and_then(EvidenceElement::subject_key)
    }

    /// Append the policy-key terminal unless one is already in place
    ///
    /// Idempotent: a list whose last element is already a terminal is left
    /// untouched, whatever key that terminal holds.
    pub fn ensure_terminal(&mut self, root: &KeyMaterial) {
        let have_terminal = matches!(
            self.elements.last(),
            Some(element) if element.kind() == EvidenceKind::EmbeddedPolicyKey
        );
        if !have_terminal {
            self.elements
                .push(EvidenceElement::embedded_policy_key(root.clone()));
        }
    }
}
