//! # zkdoc CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use zkdoc_cli::hash::{run_hash, HashArgs};
use zkdoc_cli::salt::{run_salt, SaltArgs};
use zkdoc_cli::types::run_types;

/// zkdoc: document witness preparation for zero-knowledge circuits.
///
/// Canonicalizes a document, encodes its SHA-256 digest as a BN254 field
/// element, and derives a salted commitment for use as Noir circuit inputs.
#[derive(Parser, Debug)]
#[command(name = "zkdoc", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compute circuit inputs for a document and write a Prover.toml.
    Hash(HashArgs),

    /// Generate random field salts.
    Salt(SaltArgs),

    /// List document type codes.
    Types,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("zkdoc CLI starting");

    let work_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    let result = match cli.command {
        Commands::Hash(args) => run_hash(&args, &work_dir),
        Commands::Salt(args) => run_salt(&args),
        Commands::Types => run_types(),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
