//! Policy guard
//!
//! The boundary between chain verification and the caller's authorization
//! question. The guard consumes a verdict plus a subject/action/resource
//! tuple and renders a decision against the domain's access list. It never
//! verifies anything itself; a request backed by an unverified chain is
//! simply denied with the chain's verdict attached.

use crate::verdict::Verdict;
use taotrust_domain::TrustDomain;

/// A subject asking to perform an action on a resource
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorizationRequest {
    /// The proven principal making the request
    pub subject: String,
    /// What the principal wants to do
    pub action: String,
    /// What the action targets
    pub resource: String,
}

impl AuthorizationRequest {
    /// Build a request tuple
    pub fn new(
        subject: impl Into<String>,
        action: impl Into<String>,
        resource: impl Into<String>,
    ) -> Self {
        AuthorizationRequest {
            subject: subject.into(),
            action: action.into(),
            resource: resource.into(),
        }
    }
}

/// Why a request was denied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenyReason {
    /// The evidence chain did not verify; the verdict says why
    ChainNotValid(Verdict),
    /// The chain verified but no access-list entry covers the request
    NotAuthorized,
}

/// An authorization decision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// The request is allowed
    Permit,
    /// The request is refused
    Deny(DenyReason),
}

impl Decision {
    /// Whether the request was allowed
    pub fn is_permit(&self) -> bool {
        matches!(self, Decision::Permit)
    }
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Decision::Permit => f.write_str("PERMIT"),
            Decision::Deny(DenyReason::ChainNotValid(verdict)) => {
                write!(f, "DENY (chain {})", verdict)
            }
            Decision::Deny(DenyReason::NotAuthorized) => f.write_str("DENY (not authorized)"),
        }
    }
}

/// Renders authorization decisions for one trust domain
pub struct PolicyGuard<'a> {
    domain: &'a TrustDomain,
}

impl<'a> PolicyGuard<'a> {
    /// Guard requests against `domain`
    pub fn new(domain: &'a TrustDomain) -> Self {
        PolicyGuard { domain }
    }

    /// Decide a request given the verdict its evidence chain received
    ///
    /// The access list is consulted only for a `Valid` verdict; any other
    /// verdict denies immediately and carries the code through for audit.
    pub fn authorize(&self, request: &AuthorizationRequest, verdict: Verdict) -> Decision {
        if !verdict.is_valid() {
            tracing::debug!(
                "denying {} on {}: chain {}",
                request.subject,
                request.resource,
                verdict
            );
            return Decision::Deny(DenyReason::ChainNotValid(verdict));
        }
        if self
            .domain
            .permits(&request.subject, &request.action, &request.resource)
        {
            Decision::Permit
        } else {
            tracing::debug!(
                "denying {} on {}: no matching access entry",
                request.subject,
                request.resource
            );
            Decision::Deny(DenyReason::NotAuthorized)
        }
    }
}
