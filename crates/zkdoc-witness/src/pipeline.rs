//! # Witness Pipeline
//!
//! Turns one document into its [`CircuitInputSet`]:
//!
//! ```text
//! raw bytes ──normalize──▶ CanonicalBytes ──sha256──▶ digest ──encode──▶ doc_hash_raw
//!                                                                         │
//!                         salt (supplied | rejection-sampled) ────────────┤
//!                                                                         ▼
//!                                                 doc_commitment = commit(doc_hash_raw, salt)
//! ```
//!
//! Each invocation is independent. The only impure step is salt generation,
//! which draws from the injected CSPRNG (`OsRng` via [`process()`]).

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use zkdoc_core::{
    encode_digest, normalize, sha256_digest, CanonicalBytes, ContentType, DocumentTypeCode,
    FieldElement, NormalizationWarning, Sha256Digest,
};
use zkdoc_crypto::{
    accept_salt, build_commitment, generate_salt_with, SaltError, COMMITMENT_SCHEME,
};

use crate::error::PipelineError;
use crate::inputs::CircuitInputSet;

/// Caller choices for one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineOptions {
    /// Apply content-type normalization before hashing.
    pub normalize: bool,
    /// Document type to enforce in the circuit, if any.
    pub declared_type: Option<DocumentTypeCode>,
    /// Caller-supplied salt. A fresh one is generated when absent.
    pub salt: Option<FieldElement>,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            normalize: true,
            declared_type: None,
            salt: None,
        }
    }
}

impl PipelineOptions {
    /// Validate a decimal salt string and attach it.
    ///
    /// # Errors
    ///
    /// Returns [`SaltError`] if the string is not an integer in `[0, p)`.
    pub fn with_salt_str(mut self, salt: &str) -> Result<Self, SaltError> {
        self.salt = Some(accept_salt(salt)?);
        Ok(self)
    }

    /// Declare the document type.
    pub fn with_declared_type(mut self, code: DocumentTypeCode) -> Self {
        self.declared_type = Some(code);
        self
    }

    /// Hash the raw bytes as-is.
    pub fn without_normalization(mut self) -> Self {
        self.normalize = false;
        self
    }
}

/// Everything a pipeline run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineOutcome {
    /// The circuit witness values.
    pub inputs: CircuitInputSet,
    /// Content type used for normalization.
    pub content_type: ContentType,
    /// Whether normalization was requested.
    pub normalized: bool,
    /// Size of the input in bytes.
    pub raw_len: usize,
    /// Size of the hashed bytes.
    pub canonical_len: usize,
    /// SHA-256 of the hashed bytes.
    pub sha256: Sha256Digest,
    /// Set when normalization fell back to raw bytes.
    pub warning: Option<NormalizationWarning>,
    /// True if the salt was generated rather than supplied.
    pub salt_generated: bool,
}

/// Run the pipeline with salts drawn from `OsRng`.
///
/// # Errors
///
/// Returns [`PipelineError::DigestOutOfRange`] if the document digest does not
/// fit the field.
pub fn process(
    raw: &[u8],
    content_type: &ContentType,
    options: &PipelineOptions,
) -> Result<PipelineOutcome, PipelineError> {
    process_with_rng(raw, content_type, options, &mut OsRng)
}

/// Run the pipeline with salts drawn from `rng`.
///
/// # Errors
///
/// Returns [`PipelineError::DigestOutOfRange`] if the document digest does not
/// fit the field.
pub fn process_with_rng<R: RngCore + CryptoRng + ?Sized>(
    raw: &[u8],
    content_type: &ContentType,
    options: &PipelineOptions,
    rng: &mut R,
) -> Result<PipelineOutcome, PipelineError> {
    let (canonical, warning) = if options.normalize {
        let normalized = normalize(raw, content_type);
        if let Some(w) = &normalized.warning {
            tracing::warn!(content_type = %content_type, "{w}");
        }
        (normalized.bytes, normalized.warning)
    } else {
        (CanonicalBytes::unnormalized(raw), None)
    };

    tracing::debug!(
        content_type = %content_type,
        raw_len = raw.len(),
        canonical_len = canonical.len(),
        normalize = options.normalize,
        "document bytes prepared"
    );

    let sha256 = sha256_digest(&canonical);
    let doc_hash_raw = encode_digest(&sha256).map_err(|e| {
        tracing::debug!(sha256 = %sha256, "digest exceeds field modulus");
        PipelineError::from(e)
    })?;

    let (salt, salt_generated) = match &options.salt {
        Some(s) => (s.clone(), false),
        None => (generate_salt_with(rng), true),
    };

    let doc_commitment = build_commitment(&doc_hash_raw, &salt);
    tracing::warn!(
        scheme = COMMITMENT_SCHEME,
        "doc_commitment uses SHA-256 as a Poseidon placeholder; not for production"
    );

    let doc_type_code = options.declared_type.unwrap_or(DocumentTypeCode::OTHER);
    let inputs = CircuitInputSet {
        doc_commitment,
        doc_type_code,
        enable_type_check: options.declared_type.is_some(),
        doc_hash_raw,
        salt,
        expected_doc_type: doc_type_code,
    };

    Ok(PipelineOutcome {
        inputs,
        content_type: content_type.clone(),
        normalized: options.normalize,
        raw_len: raw.len(),
        canonical_len: canonical.len(),
        sha256,
        warning,
        salt_generated,
    })
}
