//! # Document Digest: SHA-256 to Field Element
//!
//! Computes the SHA-256 digest of canonical document bytes and encodes it as
//! a BN254 field element by reading the 32 bytes as a big-endian integer.
//!
//! ## Security Invariant
//!
//! `sha256_digest()` accepts only `&CanonicalBytes`, so it is a compile error
//! to hash a document that did not pass through the normalizer (or its
//! explicit opt-out).
//!
//! ## Overflow
//!
//! The digest space is 2^256 while p is just under 2^254, so roughly 81% of
//! uniformly random digests are `>= p`. Those documents fail with
//! [`FieldError::OutOfRange`]. The digest is never reduced modulo p; the
//! failure is deterministic for a given document and is not retried.

use sha2::{Digest, Sha256};

use crate::canonical::CanonicalBytes;
use crate::error::FieldError;
use crate::field::FieldElement;

/// A raw 32-byte SHA-256 digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Sha256Digest {
    /// The digest bytes, most significant first when read as an integer.
    pub bytes: [u8; 32],
}

impl Sha256Digest {
    /// Wrap raw digest bytes.
    pub fn new(bytes: [u8; 32]) -> Self {
        Self { bytes }
    }

    /// Render the digest as a lowercase hex string.
    pub fn to_hex(&self) -> String {
        self.bytes.iter().map(|b| format!("{b:02x}")).collect()
    }
}

impl std::fmt::Display for Sha256Digest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Compute the SHA-256 digest of canonical document bytes.
pub fn sha256_digest(data: &CanonicalBytes) -> Sha256Digest {
    let mut acc = Sha256Accumulator::new();
    acc.update(data.as_bytes());
    acc.finalize()
}

/// Encode a digest as a field element (big-endian).
///
/// # Errors
///
/// Returns [`FieldError::OutOfRange`] when the digest integer is `>= p`.
pub fn encode_digest(digest: &Sha256Digest) -> Result<FieldElement, FieldError> {
    FieldElement::from_be_bytes(&digest.bytes)
}

/// Hash canonical bytes and encode the digest as a field element.
///
/// # Errors
///
/// Returns [`FieldError::OutOfRange`] when the digest integer is `>= p`.
pub fn digest_to_field(data: &CanonicalBytes) -> Result<FieldElement, FieldError> {
    encode_digest(&sha256_digest(data))
}

/// Incremental SHA-256 over raw byte segments.
///
/// For composite preimages that are not documents, such as the placeholder
/// commitment `decimal(hash) || decimal(salt)`. Document hashing goes through
/// [`sha256_digest()`].
#[derive(Clone, Default)]
pub struct Sha256Accumulator {
    hasher: Sha256,
}

impl std::fmt::Debug for Sha256Accumulator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sha256Accumulator").finish_non_exhaustive()
    }
}

impl Sha256Accumulator {
    /// Start an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a byte segment.
    pub fn update(&mut self, data: &[u8]) {
        self.hasher.update(data);
    }

    /// Finish and return the digest.
    pub fn finalize(self) -> Sha256Digest {
        let hash = self.hasher.finalize();
        let mut bytes = [0u8; 32];
        bytes.copy_from_slice(&hash);
        Sha256Digest::new(bytes)
    }

    /// Finish and return the lowercase hex digest.
    pub fn finalize_hex(self) -> String {
        self.finalize().to_hex()
    }
}
