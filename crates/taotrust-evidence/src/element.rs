//! Typed evidence elements
//!
//! Each wire statement is decoded once into a closed tagged variant; all
//! later logic pattern-matches over the fixed set instead of re-discovering
//! what a record is. The terminal `EmbeddedPolicyKey` never comes from the
//! wire: the verifier injects it to anchor a chain to the out-of-band root.

use crate::canonical::canonical_json;
use crate::error::{ParseError, Result};
use crate::statement::{GrantInfo, PrincipalInfo, QuoteInfo, SignedStatement};
use taotrust_types::{Canonicalization, KeyMaterial, SignatureScheme, ValidityPeriod};

/// The kinds of evidence element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvidenceKind {
    /// Certificate binding a key to a named principal
    PrincipalCertificate,
    /// Grant of assertions to a named principal, carrying no key
    SignedGrant,
    /// Attestation of a measured code identity
    QuoteCertificate,
    /// Synthetic trust-anchor terminal, never parsed from input
    EmbeddedPolicyKey,
}

impl EvidenceKind {
    /// Wire tag for this kind; the synthetic terminal has none
    pub fn wire_tag(&self) -> Option<&'static str> {
        match self {
            EvidenceKind::PrincipalCertificate => Some("principalCertificate"),
            EvidenceKind::SignedGrant => Some("signedGrant"),
            EvidenceKind::QuoteCertificate => Some("quoteCertificate"),
            EvidenceKind::EmbeddedPolicyKey => None,
        }
    }

    /// Resolve a wire tag
    pub fn from_wire_tag(tag: &str) -> Result<Self> {
        match tag {
            "principalCertificate" => Ok(EvidenceKind::PrincipalCertificate),
            "signedGrant" => Ok(EvidenceKind::SignedGrant),
            "quoteCertificate" => Ok(EvidenceKind::QuoteCertificate),
            "embeddedPolicyKey" => Err(ParseError::MalformedStructure(
                "the policy-key terminal is synthetic and may not appear on the wire".to_string(),
            )),
            other => Err(ParseError::MalformedStructure(format!(
                "unknown statement type {:?}",
                other
            ))),
        }
    }
}

impl std::fmt::Display for EvidenceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            EvidenceKind::PrincipalCertificate => "principalCertificate",
            EvidenceKind::SignedGrant => "signedGrant",
            EvidenceKind::QuoteCertificate => "quoteCertificate",
            EvidenceKind::EmbeddedPolicyKey => "embeddedPolicyKey",
        };
        f.write_str(name)
    }
}

/// The signed-envelope fields every non-terminal element carries
///
/// A parsed element always has all of these; a statement missing any of
/// them fails to parse, so the verifier never needs to re-check presence.
#[derive(Debug, Clone)]
pub struct SignedEnvelope {
    purpose: String,
    validity: ValidityPeriod,
    scheme: SignatureScheme,
    canonicalization: Canonicalization,
    signature: Vec<u8>,
    signed_body: Vec<u8>,
    revocation_policy: Option<String>,
}

impl SignedEnvelope {
    /// Declared purpose
    pub fn purpose(&self) -> &str {
        &self.purpose
    }

    /// Validity interval
    pub fn validity(&self) -> &ValidityPeriod {
        &self.validity
    }

    /// Signature scheme
    pub fn scheme(&self) -> SignatureScheme {
        self.scheme
    }

    /// Canonicalization scheme
    pub fn canonicalization(&self) -> Canonicalization {
        self.canonicalization
    }

    /// Raw signature bytes
    pub fn signature(&self) -> &[u8] {
        &self.signature
    }

    /// The canonical bytes that were signed
    pub fn signed_body(&self) -> &[u8] {
        &self.signed_body
    }

    /// Declared revocation policy, if any
    pub fn revocation_policy(&self) -> Option<&str> {
        self.revocation_policy.as_deref()
    }
}

/// A certificate binding a key to a principal
#[derive(Debug, Clone)]
pub struct PrincipalCertificate {
    envelope: SignedEnvelope,
    subject_name: String,
    subject_type: Option<String>,
    subject_key: KeyMaterial,
}

impl PrincipalCertificate {
    /// Name of the certified principal
    pub fn subject_name(&self) -> &str {
        &self.subject_name
    }

    /// Kind of principal, if declared
    pub fn subject_type(&self) -> Option<&str> {
        self.subject_type.as_deref()
    }

    /// The certified public key
    pub fn subject_key(&self) -> &KeyMaterial {
        &self.subject_key
    }
}

/// A signed grant of assertions; grants carry no subject key
#[derive(Debug, Clone)]
pub struct SignedGrant {
    envelope: SignedEnvelope,
    grantee: String,
    assertions: Vec<String>,
}

impl SignedGrant {
    /// Who receives the grant
    pub fn grantee(&self) -> &str {
        &self.grantee
    }

    /// Granted assertions
    pub fn assertions(&self) -> &[String] {
        &self.assertions
    }
}

/// An attestation of measured code
#[derive(Debug, Clone)]
pub struct QuoteCertificate {
    envelope: SignedEnvelope,
    subject_name: String,
    subject_key: KeyMaterial,
    code_digest: Vec<u8>,
}

impl QuoteCertificate {
    /// Name of the quoted principal
    pub fn subject_name(&self) -> &str {
        &self.subject_name
    }

    /// The quoted principal's public key
    pub fn subject_key(&self) -> &KeyMaterial {
        &self.subject_key
    }

    /// Measured hash of the running code
    pub fn code_digest(&self) -> &[u8] {
        &self.code_digest
    }
}

/// One link in a proof chain
#[derive(Debug, Clone)]
pub enum EvidenceElement {
    /// Certificate binding a key to a principal
    PrincipalCertificate(PrincipalCertificate),
    /// Grant of assertions, no key
    SignedGrant(SignedGrant),
    /// Attestation of measured code
    QuoteCertificate(QuoteCertificate),
    /// Synthetic trust-anchor terminal
    EmbeddedPolicyKey(KeyMaterial),
}

impl EvidenceElement {
    /// The synthetic terminal anchoring a chain to `key`
    pub fn embedded_policy_key(key: KeyMaterial) -> Self {
        EvidenceElement::EmbeddedPolicyKey(key)
    }

    /// Decode one wire statement into its typed form
    ///
    /// Pure: no signature verification, no clock reads. On failure no
    /// partial element is returned.
    pub fn from_statement(stmt: &SignedStatement) -> Result<Self> {
        let kind = EvidenceKind::from_wire_tag(&stmt.statement_type)?;

        let canonicalization = Canonicalization::from_identifier(&stmt.canonicalization_method)
            .map_err(|_| {
                ParseError::UnsupportedAlgorithm(stmt.canonicalization_method.clone())
            })?;
        let scheme = SignatureScheme::from_identifier(&stmt.signature_method)
            .map_err(|_| ParseError::UnsupportedAlgorithm(stmt.signature_method.clone()))?;
        let signature = stmt
            .signature_value
            .decode()
            .map_err(|e| ParseError::MalformedStructure(format!("signatureValue: {}", e)))?;
        let signed_body = canonical_json(&stmt.signed_info)?;

        let envelope = |purpose: String,
                        validity: ValidityPeriod,
                        revocation_policy: Option<String>| SignedEnvelope {
            purpose,
            validity,
            scheme,
            canonicalization,
            signature: signature.clone(),
            signed_body: signed_body.clone(),
            revocation_policy,
        };

        match kind {
            EvidenceKind::PrincipalCertificate => {
                let info: PrincipalInfo = decode_info(&stmt.signed_info)?;
                let subject_key = KeyMaterial::from_block(&info.subject_key)
                    .map_err(|e| ParseError::MalformedKey(e.to_string()))?;
                Ok(EvidenceElement::PrincipalCertificate(PrincipalCertificate {
                    envelope: envelope(info.purpose, info.validity_period, info.revocation_policy),
                    subject_name: info.subject_name,
                    subject_type: info.subject_type,
                    subject_key,
                }))
            }
            EvidenceKind::SignedGrant => {
                let info: GrantInfo = decode_info(&stmt.signed_info)?;
                Ok(EvidenceElement::SignedGrant(SignedGrant {
                    envelope: envelope(info.purpose, info.validity_period, info.revocation_policy),
                    grantee: info.grantee,
                    assertions: info.assertions,
                }))
            }
            EvidenceKind::QuoteCertificate => {
                let info: QuoteInfo = decode_info(&stmt.signed_info)?;
                let subject_key = KeyMaterial::from_block(&info.subject_key)
                    .map_err(|e| ParseError::MalformedKey(e.to_string()))?;
                let code_digest = info
                    .code_digest
                    .decode()
                    .map_err(|e| ParseError::MalformedStructure(format!("codeDigest: {}", e)))?;
                Ok(EvidenceElement::QuoteCertificate(QuoteCertificate {
                    envelope: envelope(info.purpose, info.validity_period, info.revocation_policy),
                    subject_name: info.subject_name,
                    subject_key,
                    code_digest,
                }))
            }
            // from_wire_tag already rejected this
            EvidenceKind::EmbeddedPolicyKey => Err(ParseError::MalformedStructure(
                "the policy-key terminal is synthetic and may not appear on the wire".to_string(),
            )),
        }
    }

    /// Decode a raw statement checked against the type the decoder declared
    pub fn parse(raw: &str, declared: EvidenceKind) -> Result<Self> {
        let stmt: SignedStatement = serde_json::from_str(raw)
            .map_err(|e| ParseError::MalformedStructure(format!("statement: {}", e)))?;
        let kind = EvidenceKind::from_wire_tag(&stmt.statement_type)?;
        if kind != declared {
            return Err(ParseError::MalformedStructure(format!(
                "statement is {}, expected {}",
                kind, declared
            )));
        }
        EvidenceElement::from_statement(&stmt)
    }

    /// Which kind of element this is
    pub fn kind(&self) -> EvidenceKind {
        match self {
            EvidenceElement::PrincipalCertificate(_) => EvidenceKind::PrincipalCertificate,
            EvidenceElement::SignedGrant(_) => EvidenceKind::SignedGrant,
            EvidenceElement::QuoteCertificate(_) => EvidenceKind::QuoteCertificate,
            EvidenceElement::EmbeddedPolicyKey(_) => EvidenceKind::EmbeddedPolicyKey,
        }
    }

    /// The signed envelope; the synthetic terminal has none
    pub fn envelope(&self) -> Option<&SignedEnvelope> {
        match self {
            EvidenceElement::PrincipalCertificate(cert) => Some(&cert.envelope),
            EvidenceElement::SignedGrant(grant) => Some(&grant.envelope),
            EvidenceElement::QuoteCertificate(quote) => Some(&quote.envelope),
            EvidenceElement::EmbeddedPolicyKey(_) => None,
        }
    }

    /// Declared purpose, for elements that carry one
    pub fn purpose(&self) -> Option<&str> {
        self.envelope().map(SignedEnvelope::purpose)
    }

    /// Validity interval, for elements that carry one
    pub fn validity(&self) -> Option<&ValidityPeriod> {
        self.envelope().map(SignedEnvelope::validity)
    }

    /// Declared revocation policy, if any
    pub fn revocation_policy(&self) -> Option<&str> {
        self.envelope().and_then(SignedEnvelope::revocation_policy)
    }

    /// The key this element binds to its subject
    ///
    /// Grants vouch for a principal without carrying its key, so they
    /// yield `None` and cannot act as the signer above another element.
    pub fn subject_key(&self) -> Option<&KeyMaterial> {
        match self {
            EvidenceElement::PrincipalCertificate(cert) => Some(&cert.subject_key),
            EvidenceElement::SignedGrant(_) => None,
            EvidenceElement::QuoteCertificate(quote) => Some(&quote.subject_key),
            EvidenceElement::EmbeddedPolicyKey(key) => Some(key),
        }
    }
}

fn decode_info<T: serde::de::DeserializeOwned>(value: &serde_json::Value) -> Result<T> {
    serde_json::from_value(value.clone())
        .map_err(|e| ParseError::MalformedStructure(format!("signedInfo: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use taotrust_types::{Base64, KeyAlgorithm};

    fn test_key() -> KeyMaterial {
        let mut m = vec![0u8; 128];
        m[0] = 0xd3;
        m[64] = 0x7f;
        KeyMaterial::new(KeyAlgorithm::Rsa1024, &m, &[0x01, 0x00, 0x01]).unwrap()
    }

    fn cert_statement() -> SignedStatement {
        let info = PrincipalInfo::new(
            "//host/app",
            &test_key(),
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

    #[test]
    fn test_decode_principal_certificate() {
        let element = EvidenceElement::from_statement(&cert_statement()).unwrap();
        assert_eq!(element.kind(), EvidenceKind::PrincipalCertificate);
        assert_eq!(element.purpose(), Some("Read"));
        assert_eq!(element.subject_key(), Some(&test_key()));
        assert!(element.revocation_policy().is_none());
        let envelope = element.envelope().unwrap();
        assert_eq!(envelope.scheme(), SignatureScheme::Rsa1024Sha256Pkcs);
        assert!(!envelope.signed_body().is_empty());
    }

    #[test]
    fn test_signed_body_tracks_raw_info() {
        // extra fields the typed view ignores still belong to the signed body
        let mut stmt = cert_statement();
        stmt.signed_info["vendorExtension"] = serde_json::json!("x");
        let element = EvidenceElement::from_statement(&stmt).unwrap();
        let body = element.envelope().unwrap().signed_body().to_vec();
        assert!(String::from_utf8(body).unwrap().contains("vendorExtension"));
    }

    #[test]
    fn test_rejects_unknown_type_tag() {
        let mut stmt = cert_statement();
        stmt.statement_type = "x509Certificate".to_string();
        assert!(matches!(
            EvidenceElement::from_statement(&stmt),
            Err(ParseError::MalformedStructure(_))
        ));
    }

    #[test]
    fn test_rejects_wire_policy_key_terminal() {
        let mut stmt = cert_statement();
        stmt.statement_type = "embeddedPolicyKey".to_string();
        assert!(matches!(
            EvidenceElement::from_statement(&stmt),
            Err(ParseError::MalformedStructure(_))
        ));
    }

    #[test]
    fn test_rejects_unsupported_signature_method() {
        let mut stmt = cert_statement();
        stmt.signature_method = "rsa1024-md5-pkcspad".to_string();
        assert!(matches!(
            EvidenceElement::from_statement(&stmt),
            Err(ParseError::UnsupportedAlgorithm(_))
        ));
    }

    #[test]
    fn test_rejects_unsupported_canonicalization() {
        let mut stmt = cert_statement();
        stmt.canonicalization_method = "exc-c14n".to_string();
        assert!(matches!(
            EvidenceElement::from_statement(&stmt),
            Err(ParseError::UnsupportedAlgorithm(_))
        ));
    }

    #[test]
    fn test_rejects_missing_purpose() {
        let mut stmt = cert_statement();
        stmt.signed_info.as_object_mut().unwrap().remove("purpose");
        assert!(matches!(
            EvidenceElement::from_statement(&stmt),
            Err(ParseError::MalformedStructure(_))
        ));
    }

    #[test]
    fn test_rejects_missing_validity() {
        let mut stmt = cert_statement();
        stmt.signed_info
            .as_object_mut()
            .unwrap()
            .remove("validityPeriod");
        assert!(matches!(
            EvidenceElement::from_statement(&stmt),
            Err(ParseError::MalformedStructure(_))
        ));
    }

    #[test]
    fn test_rejects_bad_subject_key() {
        let mut stmt = cert_statement();
        stmt.signed_info["subjectKey"]["modulus"] = serde_json::json!("AAEC");
        assert!(matches!(
            EvidenceElement::from_statement(&stmt),
            Err(ParseError::MalformedKey(_))
        ));
    }

    #[test]
    fn test_rejects_bad_signature_encoding() {
        let mut stmt = cert_statement();
        stmt.signature_value = Base64::new("%%%".to_string());
        assert!(matches!(
            EvidenceElement::from_statement(&stmt),
            Err(ParseError::MalformedStructure(_))
        ));
    }

    #[test]
    fn test_grant_has_no_subject_key() {
        let info = GrantInfo::new(
            "//host/app",
            "Read",
            ValidityPeriod::parse("2025-01-01Z00:00.00", "2026-01-01Z00:00.00").unwrap(),
        );
        let stmt = SignedStatement {
            statement_type: "signedGrant".to_string(),
            signed_info: serde_json::to_value(info).unwrap(),
            signature_method: "rsa1024-sha256-pkcspad".to_string(),
            canonicalization_method: "jsoncanonical".to_string(),
            signature_value: Base64::encode(&[0u8; 128]),
        };
        let element = EvidenceElement::from_statement(&stmt).unwrap();
        assert_eq!(element.kind(), EvidenceKind::SignedGrant);
        assert!(element.subject_key().is_none());
        assert_eq!(element.purpose(), Some("Read"));
    }

    #[test]
    fn test_quote_carries_code_digest() {
        let info = QuoteInfo::new(
            "//host/app",
            &test_key(),
            &[0xaa; 32],
            "Attest",
            ValidityPeriod::parse("2025-01-01Z00:00.00", "2026-01-01Z00:00.00").unwrap(),
        );
        let stmt = SignedStatement {
            statement_type: "quoteCertificate".to_string(),
            signed_info: serde_json::to_value(info).unwrap(),
            signature_method: "Quote-Sha256FileHash-RSA1024".to_string(),
            canonicalization_method: "jsoncanonical".to_string(),
            signature_value: Base64::encode(&[0u8; 128]),
        };
        let element = EvidenceElement::from_statement(&stmt).unwrap();
        assert_eq!(element.kind(), EvidenceKind::QuoteCertificate);
        match &element {
            EvidenceElement::QuoteCertificate(quote) => {
                assert_eq!(quote.code_digest(), &[0xaa; 32]);
            }
            other => panic!("expected quote, got {}", other.kind()),
        }
        assert_eq!(
            element.envelope().unwrap().scheme(),
            SignatureScheme::Rsa1024Sha256Pkcs
        );
    }

    #[test]
    fn test_parse_checks_declared_type() {
        let raw = serde_json::to_string(&cert_statement()).unwrap();
        assert!(EvidenceElement::parse(&raw, EvidenceKind::PrincipalCertificate).is_ok());
        assert!(matches!(
            EvidenceElement::parse(&raw, EvidenceKind::SignedGrant),
            Err(ParseError::MalformedStructure(_))
        ));
    }

    #[test]
    fn test_terminal_exposes_key_only() {
        let terminal = EvidenceElement::embedded_policy_key(test_key());
        assert_eq!(terminal.kind(), EvidenceKind::EmbeddedPolicyKey);
        assert!(terminal.envelope().is_none());
        assert!(terminal.purpose().is_none());
        assert!(terminal.validity().is_none());
        assert_eq!(terminal.subject_key(), Some(&test_key()));
    }
}
