//! # zkdoc-cli: Document Witness CLI
//!
//! Provides the `zkdoc` command-line interface.
//!
//! ## Subcommands
//!
//! - `zkdoc hash`: Compute circuit inputs for a document and write `Prover.toml`.
//! - `zkdoc salt`: Generate random field salts.
//! - `zkdoc types`: List document type codes.
//!
//! ## Crate Policy
//!
//! - CLI construction (argument parsing) is separated from business logic.
//! - Handlers only do I/O and formatting; all computation lives in
//!   `zkdoc-witness`.

pub mod hash;
pub mod salt;
pub mod types;
