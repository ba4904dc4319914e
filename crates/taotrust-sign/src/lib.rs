//! Statement issuance for taotrust
//!
//! The issuing half of the evidence pipeline: take typed statement content,
//! canonicalize it, sign it, and emit the wire form the parsers in
//! `taotrust-evidence` accept.

pub mod builder;
pub mod error;

pub use builder::StatementBuilder;
pub use error::{Error, Result};
