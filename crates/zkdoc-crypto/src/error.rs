//! # Cryptographic Error Types
//!
//! Structured errors for salt handling in `zkdoc-crypto`.

use thiserror::Error;
use zkdoc_core::FieldError;

/// A caller-supplied salt could not be accepted.
///
/// Raised before the pipeline runs. The inner [`FieldError`] distinguishes a
/// malformed string from a value at or above the field modulus.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SaltError {
    /// The salt is not a non-negative integer below the field modulus.
    #[error("invalid salt: {0}")]
    InvalidFormat(#[from] FieldError),
}
