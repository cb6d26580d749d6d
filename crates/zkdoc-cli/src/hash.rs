//! # Hash Subcommand
//!
//! Computes the circuit inputs for one document and writes them as a
//! `Prover.toml`.
//!
//! ```bash
//! zkdoc hash document.pdf
//! zkdoc hash contract.json --type 7
//! zkdoc hash cert.pdf --no-normalize --salt 12345
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use zkdoc_core::{ContentType, DocumentTypeCode, ZkdocError};
use zkdoc_crypto::COMMITMENT_SCHEME;
use zkdoc_witness::{process, PipelineOptions, PipelineOutcome};

/// Arguments for the hash subcommand.
#[derive(Args, Debug)]
pub struct HashArgs {
    /// Path to the document file.
    pub file: PathBuf,

    /// Skip document normalization and hash the raw bytes.
    #[arg(long)]
    pub no_normalize: bool,

    /// Document type code (1-99). Enables the circuit's type check.
    #[arg(long = "type", value_parser = clap::value_parser!(u8).range(1..=99))]
    pub doc_type: Option<u8>,

    /// Use a specific salt (field element as a decimal string).
    #[arg(long)]
    pub salt: Option<String>,

    /// Output path for the Prover.toml. Defaults to `<stem>_prover.toml`
    /// in the current directory.
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Do not write a Prover.toml file.
    #[arg(long, conflicts_with = "out")]
    pub no_write: bool,

    /// Print the circuit inputs as JSON instead of the text report.
    #[arg(long)]
    pub json: bool,
}

/// Execute the hash subcommand.
///
/// The salt is validated before the document is read, and a missing
/// document is reported before any processing.
pub fn run_hash(args: &HashArgs, work_dir: &Path) -> Result<u8> {
    let mut options = PipelineOptions {
        normalize: !args.no_normalize,
        ..PipelineOptions::default()
    };
    if let Some(salt) = &args.salt {
        options = options.with_salt_str(salt).context("invalid --salt")?;
    }
    if let Some(code) = args.doc_type {
        let code = DocumentTypeCode::new(i64::from(code)).map_err(ZkdocError::from)?;
        options = options.with_declared_type(code);
    }

    if !args.file.is_file() {
        return Err(ZkdocError::InputNotFound(args.file.clone()).into());
    }
    let raw = std::fs::read(&args.file)
        .map_err(ZkdocError::from)
        .with_context(|| format!("failed to read {}", args.file.display()))?;

    let content_type = ContentType::from_path(&args.file);
    tracing::info!(file = %args.file.display(), "processing file");
    tracing::info!(size = raw.len(), "file size");
    let file_type = match content_type.extension() {
        "" => "unknown",
        ext => ext,
    };
    tracing::info!(file_type, "file type");
    if options.normalize && content_type.is_normalizable() {
        tracing::info!("applying document normalization");
    }

    let outcome = process(&raw, &content_type, &options)
        .with_context(|| format!("failed to compute circuit inputs for {}", args.file.display()))?;

    let source = args.file.display().to_string();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome.inputs)?);
    } else {
        print!("{}", render_report(&outcome, &source));
    }

    if !args.no_write {
        let out_path = args
            .out
            .clone()
            .unwrap_or_else(|| work_dir.join(default_output_name(&args.file)));
        std::fs::write(&out_path, outcome.inputs.to_prover_toml(&source))
            .with_context(|| format!("failed to write {}", out_path.display()))?;
        if !args.json {
            println!();
            println!("Prover inputs saved to: {}", out_path.display());
        }
    }

    Ok(0)
}

/// `<stem>_prover.toml` for the given document path.
pub fn default_output_name(file: &Path) -> String {
    let stem = file
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "document".to_string());
    format!("{stem}_prover.toml")
}

/// Human-readable report: circuit inputs, summary, and Prover.toml preview.
pub fn render_report(outcome: &PipelineOutcome, source: &str) -> String {
    let inputs = &outcome.inputs;

    let mut size = format!("{} bytes", outcome.raw_len);
    if outcome.canonical_len != outcome.raw_len {
        size.push_str(&format!(" ({} normalized)", outcome.canonical_len));
    }

    let doc_type = if inputs.enable_type_check {
        format!("{} ({})", inputs.doc_type_code, inputs.doc_type_code.display_name())
    } else {
        format!("{} (Not specified)", inputs.doc_type_code)
    };

    let mut out = String::new();
    out.push_str("\n--- Circuit Inputs ---\n");
    out.push_str(&inputs.to_assignments());
    out.push_str("\n--- Summary ---\n");
    out.push_str(&format!("File: {source}\n"));
    out.push_str(&format!("Size: {size}\n"));
    out.push_str(&format!("SHA-256: {}\n", outcome.sha256));
    out.push_str(&format!("Field Element: {}\n", inputs.doc_hash_raw));
    out.push_str(&format!("Salt: {}\n", inputs.salt));
    out.push_str(&format!(
        "Commitment: {} ({COMMITMENT_SCHEME})\n",
        inputs.doc_commitment
    ));
    out.push_str(&format!("Document Type: {doc_type}\n"));
    out.push_str("\n--- Prover.toml Format ---\n");
    out.push_str(&inputs.to_prover_toml(source));
    out
}
