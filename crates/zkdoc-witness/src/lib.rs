//! # zkdoc-witness: Document Witness Pipeline
//!
//! Orchestrates `zkdoc-core` and `zkdoc-crypto` into the single operation
//! the CLI exposes: given raw document bytes and a content type, produce the
//! six circuit inputs (`doc_commitment`, `doc_type_code`,
//! `enable_type_check`, `doc_hash_raw`, `salt`, `expected_doc_type`).
//!
//! ## Crate Policy
//!
//! - No I/O. Callers read the document and persist the result.
//! - Recoverable normalization problems are logged at WARN and reported in
//!   [`PipelineOutcome::warning`]. Range failures are terminal.

pub mod error;
pub mod inputs;
pub mod pipeline;

pub use error::PipelineError;
pub use inputs::{CircuitInputSet, CIRCUIT_INPUT_KEYS};
pub use pipeline::{process, process_with_rng, PipelineOptions, PipelineOutcome};
