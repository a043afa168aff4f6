//! File Link Module
//!
//! Derives a short, deterministic token from file metadata and turns it into
//! a link the remote resolver can serve:
//! - Canonical encoding of the metadata tuple
//! - SHA-256 fingerprint truncated to the configured hash length
//! - Path-form link `{base}/{message_id}/{token}`
//!
//! The token is a tamper check, not a credential. The resolver recomputes it
//! from the stored file's metadata and compares.

pub mod canonical;
pub mod fingerprint;
pub mod issuer;
pub mod types;

pub use canonical::canonical_string;
pub use fingerprint::{digest, fingerprint};
pub use issuer::{BaseUrl, LinkIssuer};
pub use types::*;
