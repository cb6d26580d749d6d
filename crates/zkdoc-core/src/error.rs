//! # Error Types: Structured Error Hierarchy
//!
//! Defines the error types used throughout zkdoc. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - Range violations fail loudly with the offending value. Nothing is ever
//!   truncated or reduced modulo the field.
//! - Normalization problems are not errors. They surface as
//!   [`NormalizationWarning`] values alongside the passthrough bytes.
//! - Missing inputs are reported before any processing begins.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for zkdoc.
#[derive(Error, Debug)]
pub enum ZkdocError {
    /// A value did not fit in the BN254 scalar field, or was not an integer.
    #[error("field error: {0}")]
    Field(#[from] FieldError),

    /// Document type code outside the accepted range.
    #[error("document type error: {0}")]
    DocumentType(#[from] DocumentTypeError),

    /// The input document does not exist.
    #[error("file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error converting an integer into a BN254 field element.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// The value is greater than or equal to the field modulus.
    #[error("value exceeds BN254 field modulus: value {value}, modulus {modulus}")]
    OutOfRange {
        /// Decimal rendering of the rejected value.
        value: String,
        /// Decimal rendering of the modulus.
        modulus: String,
    },

    /// The input is not a non-negative decimal integer.
    #[error("not a non-negative decimal integer: {0:?}")]
    InvalidFormat(String),
}

/// Error validating a document type code.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DocumentTypeError {
    /// Codes must lie in `1..=99`.
    #[error("document type code {0} is outside 1..=99")]
    OutOfRange(i64),
}

/// A recoverable problem encountered during normalization.
///
/// When one of these is produced the normalizer has fallen back to the raw
/// input bytes, so the resulting digest carries no canonicalization guarantee.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NormalizationWarning {
    /// The text document is not valid UTF-8.
    #[error("text decoding failed, using raw bytes")]
    TextDecodeFailed,

    /// The JSON document could not be decoded or parsed.
    #[error("JSON parsing failed ({0}), using raw bytes")]
    JsonParseFailed(String),

    /// Binary formats are hashed byte-for-byte.
    #[error("binary file {extension} used without normalization")]
    BinaryPassthrough {
        /// The lowercase file suffix, including the leading dot.
        extension: String,
    },

    /// The file suffix is not recognized.
    #[error("{}", unknown_type_message(.extension))]
    UnknownContentType {
        /// The lowercase file suffix, or empty when the file has none.
        extension: String,
    },
}

fn unknown_type_message(extension: &str) -> String {
    if extension.is_empty() {
        "file has no type suffix, using raw bytes".to_string()
    } else {
        format!("unknown file type {extension}, using raw bytes")
    }
}
