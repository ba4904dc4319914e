//! Collections of independent evidence lists

use crate::error::{ParseError, Result};
use crate::limits::DecodeLimits;
use crate::list::EvidenceList;
use crate::statement::StatementCollection;

/// A set of proof chains, each judged on its own against the same root
#[derive(Debug, Clone)]
pub struct EvidenceCollection {
    lists: Vec<EvidenceList>,
}

impl EvidenceCollection {
    /// Build a collection from already-decoded lists
    pub fn from_lists(lists: Vec<EvidenceList>) -> Self {
        EvidenceCollection { lists }
    }

    /// Decode a wire evidence collection
    ///
    /// An empty collection is rejected: with no member lists there is
    /// nothing vouching for anything, and treating that as valid would
    /// wave through a subject with no evidence at all.
    pub fn parse(raw: &str, limits: &DecodeLimits) -> Result<Self> {
        let wire: StatementCollection = serde_json::from_str(raw)
            .map_err(|e| ParseError::MalformedStructure(format!("evidence collection: {}", e)))?;
        let found = wire.evidence_lists.len();
        if found > limits.max_collection_lists {
            tracing::warn!(
                "evidence collection rejected: {} lists exceeds limit {}",
                found,
                limits.max_collection_lists
            );
            return Err(ParseError::TooManyElements {
                found,
                limit: limits.max_collection_lists,
            });
        }
        if wire.count != found {
            return Err(ParseError::CountMismatch {
                declared: wire.count,
                found,
            });
        }
        if found == 0 {
            return Err(ParseError::MalformedStructure(
                "empty evidence collection".to_string(),
            ));
        }
        let lists = wire
            .evidence_lists
            .into_iter()
            .map(|list| EvidenceList::from_wire(list, limits))
            .collect::<Result<Vec<_>>>()?;
        Ok(EvidenceCollection { lists })
    }

    /// Member lists in order
    pub fn lists(&self) -> &[EvidenceList] {
        &self.lists
    }

    /// Mutable member lists, for appending terminals before verification
    pub fn lists_mut(&mut self) -> &mut [EvidenceList] {
        &mut self.lists
    }

    /// Number of member lists
    pub fn len(&self) -> usize {
        self.lists.len()
    }

    /// Whether the collection holds no lists
    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::statement::{PrincipalInfo, SignedStatement, StatementList};
    use taotrust_types::{Base64, KeyAlgorithm, KeyMaterial, ValidityPeriod};

    fn cert_statement(subject: &str) -> SignedStatement {
        let mut m = vec![0u8; 128];
        m[0] = 0xc7;
        let key = KeyMaterial::new(KeyAlgorithm::Rsa1024, &m, &[0x01, 0x00, 0x01]).unwrap();
        let info = PrincipalInfo::new(
            subject,
            &key,
            "Read",
            ValidityPeriod::parse("2025-01-01Z00:00.00", "2026-01-01Z00:00.00").unwrap(),
        );
        SignedStatement {
            statement_type: "principalCertificate".to_string(),
            signed_info: serde_json::to_value(info).unwrap(),
            signature_method: "rsa1024-sha256-pkcspad".to_string(),
            canonicalization_method: "jsoncanonical".to_string(),
            signature_value: Base64::encode(&[0u8; 128]),
        }
    }

    fn wire_collection(lists: usize, per_list: usize) -> String {
        let lists: Vec<StatementList> = (0..lists)
            .map(|_| {
                StatementList::new(
                    (0..per_list)
                        .map(|i| cert_statement(&format!("//host/app{}", i)))
                        .collect(),
                )
            })
            .collect();
        serde_json::to_string(&StatementCollection::new(lists)).unwrap()
    }

    #[test]
    fn test_parse_collection() {
        let coll =
            EvidenceCollection::parse(&wire_collection(2, 2), &DecodeLimits::default()).unwrap();
        assert_eq!(coll.len(), 2);
        assert_eq!(coll.lists()[0].len(), 2);
    }

    #[test]
    fn test_empty_collection_rejected() {
        let err = EvidenceCollection::parse(&wire_collection(0, 0), &DecodeLimits::default());
        assert!(matches!(err, Err(ParseError::MalformedStructure(_))));
    }

    #[test]
    fn test_collection_count_mismatch() {
        let mut wire: serde_json::Value = serde_json::from_str(&wire_collection(2, 1)).unwrap();
        wire["count"] = serde_json::json!(1);
        let err = EvidenceCollection::parse(&wire.to_string(), &DecodeLimits::default());
        assert!(matches!(
            err,
            Err(ParseError::CountMismatch {
                declared: 1,
                found: 2
            })
        ));
    }

    #[test]
    fn test_collection_limit() {
        let limits = DecodeLimits {
            max_list_elements: 16,
            max_collection_lists: 2,
        };
        assert!(EvidenceCollection::parse(&wire_collection(2, 1), &limits).is_ok());
        let err = EvidenceCollection::parse(&wire_collection(3, 1), &limits);
        assert!(matches!(
            err,
            Err(ParseError::TooManyElements { found: 3, limit: 2 })
        ));
    }

    #[test]
    fn test_bad_member_list_fails_collection() {
        let mut wire: serde_json::Value = serde_json::from_str(&wire_collection(2, 2)).unwrap();
        wire["evidenceLists"][1]["count"] = serde_json::json!(7);
        let err = EvidenceCollection::parse(&wire.to_string(), &DecodeLimits::default());
        assert!(matches!(err, Err(ParseError::CountMismatch { .. })));
    }
}
