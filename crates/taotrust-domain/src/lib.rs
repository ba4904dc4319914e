//! Trust-domain configuration
//!
//! The read-mostly configuration a verifying service loads at startup: the
//! policy key that anchors every chain, decode limits for untrusted
//! evidence, and the access list consulted after verification.
//!
//! # Example
//!
//! ```no_run
//! use taotrust_domain::TrustDomain;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let domain = TrustDomain::from_file("domain.json")?;
//! println!("verifying against {}", domain.root_key());
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod trust_domain;

pub use error::{Error, Result};
pub use trust_domain::{AclEntry, TrustDomain};
