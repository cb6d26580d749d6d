//! # zkdoc-crypto: Salts and Commitments
//!
//! Provides the randomized half of witness preparation:
//!
//! - **Salts**: uniformly random BN254 field elements by rejection sampling
//!   over `OsRng`, plus validation of caller-supplied salts.
//! - **Commitment**: the placeholder `SHA256(decimal(hash) || decimal(salt))`
//!   commitment. Not a production commitment scheme.
//!
//! ## Crate Policy
//!
//! - Depends only on `zkdoc-core` internally.
//! - Every field element is range-checked through `zkdoc_core::field`; this
//!   crate never compares against the modulus itself.
//! - No mocking of randomness in production paths. Tests inject seeded or
//!   scripted RNGs through `generate_salt_with`.

pub mod commitment;
pub mod error;
pub mod salt;

pub use commitment::{build_commitment, Commitment, COMMITMENT_SCHEME};
pub use error::SaltError;
pub use salt::{accept_salt, generate_salt, generate_salt_with};
