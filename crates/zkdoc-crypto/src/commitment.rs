//! # Document Commitment (Placeholder)
//!
//! Binds a document hash field element to a salt:
//!
//! ```text
//! commitment = "0x" || hex( SHA256( decimal(doc_hash) || decimal(salt) ) )
//! ```
//!
//! The two decimal strings are concatenated with no separator. Recorded
//! witness files depend on this exact preimage format.
//!
//! ## Security Warning
//!
//! **NOT A PRODUCTION COMMITMENT.** This is SHA-256 standing in for the
//! Poseidon hash the circuit is meant to use. It is not field-native, and
//! because the preimage has no separator, `("12", "3")` and `("1", "23")`
//! commit to the same value. Use it only for development witnesses.

use serde::{Deserialize, Serialize};
use zkdoc_core::{FieldElement, Sha256Accumulator};

/// Identifier for the commitment construction in this module.
pub const COMMITMENT_SCHEME: &str = "sha256-placeholder";

/// A `0x`-prefixed lowercase hex commitment.
///
/// **Placeholder.** See the module documentation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Commitment(String);

impl Commitment {
    /// The commitment string, including the `0x` prefix.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The 64 hex digits after the prefix.
    pub fn hex_digits(&self) -> &str {
        self.0.strip_prefix("0x").unwrap_or(&self.0)
    }
}

impl std::fmt::Display for Commitment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Derive the placeholder commitment over a document hash and a salt.
pub fn build_commitment(doc_hash: &FieldElement, salt: &FieldElement) -> Commitment {
    let mut acc = Sha256Accumulator::new();
    acc.update(doc_hash.to_decimal().as_bytes());
    acc.update(salt.to_decimal().as_bytes());
    Commitment(format!("0x{}", acc.finalize_hex()))
}
