//! Statement builder for issuing signed evidence
//!
//! Issuance mirrors the verify path exactly: the signed body is the
//! canonical encoding of `signedInfo`, so a statement round-tripped through
//! any JSON layout still verifies against the same bytes.

use crate::error::Result;
use taotrust_crypto::SigningKey;
use taotrust_evidence::canonical_json;
use taotrust_evidence::{GrantInfo, PrincipalInfo, QuoteInfo, SignedStatement};
use taotrust_types::{Base64, Canonicalization, SignatureScheme};

/// Issues wire statements signed by one key
pub struct StatementBuilder<'a> {
    signer: &'a SigningKey,
}

impl<'a> StatementBuilder<'a> {
    /// Build statements signed by `signer`
    pub fn new(signer: &'a SigningKey) -> Self {
        StatementBuilder { signer }
    }

    fn scheme(&self) -> SignatureScheme {
        SignatureScheme::for_key(self.signer.algorithm())
    }

    fn issue(
        &self,
        statement_type: &str,
        signed_info: serde_json::Value,
        signature_method: &str,
    ) -> Result<SignedStatement> {
        let body = canonical_json(&signed_info)?;
        let signature = self.signer.sign(&body)?;
        Ok(SignedStatement {
            statement_type: statement_type.to_string(),
            signed_info,
            signature_method: signature_method.to_string(),
            canonicalization_method: Canonicalization::JsonCanonical.uri().to_string(),
            signature_value: Base64::encode(&signature),
        })
    }

    /// Issue a certificate binding a key to a principal
    pub fn principal_certificate(&self, info: PrincipalInfo) -> Result<SignedStatement> {
        self.issue(
            "principalCertificate",
            serde_json::to_value(info)?,
            self.scheme().uri(),
        )
    }

    /// Issue a grant of assertions
    pub fn signed_grant(&self, info: GrantInfo) -> Result<SignedStatement> {
        self.issue("signedGrant", serde_json::to_value(info)?, self.scheme().uri())
    }

    /// Issue an attestation of measured code
    ///
    /// Quotes are minted under the quote-method alias rather than the long
    /// algorithm URI, matching what attesting hosts emit.
    pub fn quote_certificate(&self, info: QuoteInfo) -> Result<SignedStatement> {
        self.issue(
            "quoteCertificate",
            serde_json::to_value(info)?,
            self.scheme().quote_name(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taotrust_crypto::verify_signature;
    use taotrust_evidence::{EvidenceElement, EvidenceKind};
    use taotrust_types::{KeyAlgorithm, ValidityPeriod};

    fn period() -> ValidityPeriod {
        ValidityPeriod::parse("2025-01-01Z00:00.00", "2026-01-01Z00:00.00").unwrap()
    }

    #[test]
    fn test_issued_certificate_parses_and_verifies() {
        let issuer = SigningKey::generate(KeyAlgorithm::Rsa1024).unwrap();
        let subject = SigningKey::generate(KeyAlgorithm::Rsa1024).unwrap();
        let stmt = StatementBuilder::new(&issuer)
            .principal_certificate(PrincipalInfo::new(
                "//host/app",
                &subject.public_key(),
                "Read",
                period(),
            ))
            .unwrap();
        assert_eq!(stmt.statement_type, "principalCertificate");

        let element = EvidenceElement::from_statement(&stmt).unwrap();
        assert_eq!(element.subject_key(), Some(&subject.public_key()));
        let envelope = element.envelope().unwrap();
        assert!(verify_signature(
            &issuer.public_key(),
            envelope.signed_body(),
            envelope.signature()
        ));
    }

    #[test]
    fn test_issued_grant_round_trips() {
        let issuer = SigningKey::generate(KeyAlgorithm::Rsa1024).unwrap();
        let mut info = GrantInfo::new("//host/app", "Read", period());
        info.assertions.push("mayRead file://store".to_string());
        let stmt = StatementBuilder::new(&issuer).signed_grant(info).unwrap();

        let raw = serde_json::to_string(&stmt).unwrap();
        let element = EvidenceElement::parse(&raw, EvidenceKind::SignedGrant).unwrap();
        match &element {
            EvidenceElement::SignedGrant(grant) => {
                assert_eq!(grant.assertions(), ["mayRead file://store"]);
            }
            other => panic!("expected grant, got {}", other.kind()),
        }
    }

    #[test]
    fn test_quote_uses_alias_method() {
        let host = SigningKey::generate(KeyAlgorithm::Rsa1024).unwrap();
        let app = SigningKey::generate(KeyAlgorithm::Rsa1024).unwrap();
        let stmt = StatementBuilder::new(&host)
            .quote_certificate(QuoteInfo::new(
                "//host/app",
                &app.public_key(),
                &[0x42; 32],
                "Attest",
                period(),
            ))
            .unwrap();
        assert_eq!(stmt.signature_method, "Quote-Sha256FileHash-RSA1024");
        assert!(EvidenceElement::from_statement(&stmt).is_ok());
    }

    #[test]
    fn test_signature_breaks_on_tamper() {
        let issuer = SigningKey::generate(KeyAlgorithm::Rsa1024).unwrap();
        let subject = SigningKey::generate(KeyAlgorithm::Rsa1024).unwrap();
        let mut stmt = StatementBuilder::new(&issuer)
            .principal_certificate(PrincipalInfo::new(
                "//host/app",
                &subject.public_key(),
                "Read",
                period(),
            ))
            .unwrap();
        stmt.signed_info["purpose"] = serde_json::json!("Write");

        let element = EvidenceElement::from_statement(&stmt).unwrap();
        let envelope = element.envelope().unwrap();
        assert!(!verify_signature(
            &issuer.public_key(),
            envelope.signed_body(),
            envelope.signature()
        ));
    }
}
