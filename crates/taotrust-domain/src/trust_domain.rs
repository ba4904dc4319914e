//! Trust-domain configuration types and loading
//!
//! A trust domain is loaded once at startup and read for the life of the
//! process. It carries the policy key every chain must anchor to, the
//! decode limits applied to incoming evidence, and the access list the
//! policy guard consults after verification. There is deliberately no way
//! to serialize a loaded domain back out.

use crate::error::Result;
use serde::Deserialize;
use taotrust_evidence::DecodeLimits;
use taotrust_types::{KeyBlock, KeyMaterial};

/// One access-list entry; `"*"` in any field matches everything
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AclEntry {
    /// Principal the entry applies to
    pub subject: String,
    /// Action the entry permits
    pub action: String,
    /// Resource the entry covers
    pub resource: String,
}

impl AclEntry {
    /// Whether this entry covers the given request tuple
    pub fn matches(&self, subject: &str, action: &str, resource: &str) -> bool {
        field_matches(&self.subject, subject)
            && field_matches(&self.action, action)
            && field_matches(&self.resource, resource)
    }
}

fn field_matches(pattern: &str, value: &str) -> bool {
    pattern == "*" || pattern == value
}

/// On-disk form of a trust domain
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DomainConfig {
    domain_name: String,
    policy_key: KeyBlock,
    #[serde(default)]
    limits: DecodeLimits,
    #[serde(default)]
    acl: Vec<AclEntry>,
}

/// A loaded trust domain
///
/// Immutable after load. Shared freely across threads by reference; every
/// verification call reads it, none mutates it.
#[derive(Debug, Clone)]
pub struct TrustDomain {
    name: String,
    root_key: KeyMaterial,
    limits: DecodeLimits,
    acl: Vec<AclEntry>,
}

impl TrustDomain {
    /// Parse a trust domain from configuration JSON
    ///
    /// The policy key is converted to key material here, so a domain that
    /// loads successfully always carries a structurally sane root.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: DomainConfig = serde_json::from_str(json)?;
        let root_key = KeyMaterial::from_block(&config.policy_key)?;
        Ok(TrustDomain {
            name: config.domain_name,
            root_key,
            limits: config.limits,
            acl: config.acl,
        })
    }

    /// Load a trust domain from a configuration file
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Domain name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The policy key chains must anchor to
    pub fn root_key(&self) -> &KeyMaterial {
        &self.root_key
    }

    /// Decode limits for incoming evidence
    pub fn limits(&self) -> &DecodeLimits {
        &self.limits
    }

    /// Access-list entries
    pub fn acl(&self) -> &[AclEntry] {
        &self.acl
    }

    /// Whether any access-list entry covers the request tuple
    pub fn permits(&self, subject: &str, action: &str, resource: &str) -> bool {
        self.acl
            .iter()
            .any(|entry| entry.matches(subject, action, resource))
    }
}
