//! # Pipeline Error Types

use thiserror::Error;
use zkdoc_core::FieldError;

/// A terminal pipeline failure. Nothing is retried.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PipelineError {
    /// The document digest is at or above the field modulus.
    ///
    /// Deterministic for a given document: running again yields the same
    /// failure.
    #[error("document hash does not fit the BN254 field: {0}")]
    DigestOutOfRange(#[from] FieldError),
}
