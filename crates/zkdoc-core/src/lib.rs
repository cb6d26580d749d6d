//! # zkdoc-core: Foundational Types for zkdoc
//!
//! This crate is the leaf of the zkdoc workspace. It defines the types that
//! turn an off-chain document into a BN254 field element a Noir circuit can
//! take as a witness.
//!
//! ## Key Design Principles
//!
//! 1. **`FieldElement` is range-checked by construction.** The inner integer
//!    is private; every fallible constructor passes through
//!    [`field::is_in_range()`].
//!    Out-of-range values are errors, never reduced.
//!
//! 2. **`CanonicalBytes` newtype.** ALL document digests flow through
//!    [`canonical::normalize()`] or the explicit
//!    [`CanonicalBytes::unnormalized()`] opt-out.
//!
//! 3. **Closed `ContentType` enum.** Suffix dispatch is an exhaustive
//!    `match`, not an open lookup table.
//!
//! 4. **`sha256_digest()` accepts only `&CanonicalBytes`.**
//!
//! ## Crate Policy
//!
//! - No dependencies on other `zkdoc-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod canonical;
pub mod content;
pub mod digest;
pub mod doctype;
pub mod error;
pub mod field;

// Re-export primary types for ergonomic imports.
pub use canonical::{normalize, CanonicalBytes, Normalized};
pub use content::ContentType;
pub use digest::{digest_to_field, encode_digest, sha256_digest, Sha256Accumulator, Sha256Digest};
pub use doctype::{DocumentKind, DocumentTypeCode};
pub use error::{DocumentTypeError, FieldError, NormalizationWarning, ZkdocError};
pub use field::{field_modulus, is_in_range, to_field_element, FieldElement};
