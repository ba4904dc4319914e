//! Wire form of signed statements and their wrappers
//!
//! A proof bundle is JSON: a collection of evidence lists, each an ordered
//! array of signed statements. These serde types mirror that format
//! one-to-one; the typed model lives in `element`.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use taotrust_types::{Base64, KeyBlock, KeyMaterial, ValidityPeriod};

/// One signed statement as it appears on the wire
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignedStatement {
    /// Statement type tag (`principalCertificate`, `signedGrant`,
    /// `quoteCertificate`)
    pub statement_type: String,
    /// The signed content; kept as a raw value so the canonical bytes
    /// cover exactly what the signer covered
    pub signed_info: Value,
    /// Signature algorithm identifier
    pub signature_method: String,
    /// Canonicalization algorithm identifier
    pub canonicalization_method: String,
    /// Signature, base64
    pub signature_value: Base64,
}

/// Signed content of a principal certificate
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrincipalInfo {
    /// Name of the principal being certified
    pub subject_name: String,
    /// Kind of principal (program, host, user)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject_type: Option<String>,
    /// What the certificate authorizes
    pub purpose: String,
    /// When the certificate is usable
    pub validity_period: ValidityPeriod,
    /// The subject's public key
    pub subject_key: KeyBlock,
    /// Revocation policy identifier, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revocation_policy: Option<String>,
}

impl PrincipalInfo {
    /// Certificate content for `subject_key` with no optional fields set
    pub fn new(
        subject_name: impl Into<String>,
        subject_key: &KeyMaterial,
        purpose: impl Into<String>,
        validity_period: ValidityPeriod,
    ) -> Self {
        PrincipalInfo {
            subject_name: subject_name.into(),
            subject_type: None,
            purpose: purpose.into(),
            validity_period,
            subject_key: subject_key.to_block(),
            revocation_policy: None,
        }
    }
}

/// Signed content of a grant
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrantInfo {
    /// Who receives the grant
    pub grantee: String,
    /// What the grant authorizes
    pub purpose: String,
    /// When the grant is usable
    pub validity_period: ValidityPeriod,
    /// Granted assertions
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub assertions: Vec<String>,
    /// Revocation policy identifier, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revocation_policy: Option<String>,
}

impl GrantInfo {
    /// Grant content with no assertions and no optional fields set
    pub fn new(
        grantee: impl Into<String>,
        purpose: impl Into<String>,
        validity_period: ValidityPeriod,
    ) -> Self {
        GrantInfo {
            grantee: grantee.into(),
            purpose: purpose.into(),
            validity_period,
            assertions: Vec::new(),
            revocation_policy: None,
        }
    }
}

/// Signed content of a quote certificate
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteInfo {
    /// Name of the quoted principal
    pub subject_name: String,
    /// What the quote authorizes
    pub purpose: String,
    /// When the quote is usable
    pub validity_period: ValidityPeriod,
    /// The quoted principal's public key
    pub subject_key: KeyBlock,
    /// Measured hash of the running code, base64
    pub code_digest: Base64,
    /// Revocation policy identifier, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revocation_policy: Option<String>,
}

impl QuoteInfo {
    /// Quote content for `subject_key` attesting `code_digest`
    pub fn new(
        subject_name: impl Into<String>,
        subject_key: &KeyMaterial,
        code_digest: &[u8],
        purpose: impl Into<String>,
        validity_period: ValidityPeriod,
    ) -> Self {
        QuoteInfo {
            subject_name: subject_name.into(),
            purpose: purpose.into(),
            validity_period,
            subject_key: subject_key.to_block(),
            code_digest: Base64::encode(code_digest),
            revocation_policy: None,
        }
    }
}

/// Wire form of one evidence list
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatementList {
    /// Declared number of statements; must match exactly
    pub count: usize,
    /// Statements, leaf first
    pub statements: Vec<SignedStatement>,
}

impl StatementList {
    /// Wrap statements, setting the count from what is present
    pub fn new(statements: Vec<SignedStatement>) -> Self {
        StatementList {
            count: statements.len(),
            statements,
        }
    }

    /// Prepend a freshly issued leaf statement to supporting evidence
    ///
    /// The new statement becomes index 0 and the declared count is
    /// renumbered.
    pub fn with_leaf(leaf: SignedStatement, support: StatementList) -> Self {
        let mut statements = Vec::with_capacity(support.statements.len() + 1);
        statements.push(leaf);
        statements.extend(support.statements);
        StatementList::new(statements)
    }
}

/// Wire form of an evidence collection
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatementCollection {
    /// Declared number of lists; must match exactly
    pub count: usize,
    /// Member evidence lists
    pub evidence_lists: Vec<StatementList>,
}

impl StatementCollection {
    /// Wrap lists, setting the count from what is present
    pub fn new(evidence_lists: Vec<StatementList>) -> Self {
        StatementCollection {
            count: evidence_lists.len(),
            evidence_lists,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taotrust_types::KeyAlgorithm;

    fn test_key() -> KeyMaterial {
        let mut m = vec![0u8; 128];
        m[0] = 0xb7;
        KeyMaterial::new(KeyAlgorithm::Rsa1024, &m, &[0x01, 0x00, 0x01]).unwrap()
    }

    fn test_period() -> ValidityPeriod {
        ValidityPeriod::parse("2025-01-01Z00:00.00", "2026-01-01Z00:00.00").unwrap()
    }

    #[test]
    fn test_principal_info_wire_shape() {
        let info = PrincipalInfo::new("//host/program", &test_key(), "Read", test_period());
        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["subjectName"], "//host/program");
        assert_eq!(json["purpose"], "Read");
        assert_eq!(json["subjectKey"]["keyAlgorithm"], "rsa1024");
        assert!(json.get("subjectType").is_none());
        assert!(json.get("revocationPolicy").is_none());
    }

    #[test]
    fn test_with_leaf_prepends_and_renumbers() {
        let stmt = |name: &str| SignedStatement {
            statement_type: "principalCertificate".to_string(),
            signed_info: serde_json::json!({ "subjectName": name }),
            signature_method: "rsa1024-sha256-pkcspad".to_string(),
            canonicalization_method: "jsoncanonical".to_string(),
            signature_value: Base64::encode(b"sig"),
        };
        let support = StatementList::new(vec![stmt("intermediate"), stmt("top")]);
        let combined = StatementList::with_leaf(stmt("leaf"), support);
        assert_eq!(combined.count, 3);
        assert_eq!(combined.statements[0].signed_info["subjectName"], "leaf");
        assert_eq!(combined.statements[2].signed_info["subjectName"], "top");
    }
}
