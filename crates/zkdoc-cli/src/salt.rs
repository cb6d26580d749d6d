//! # Salt Subcommand
//!
//! Prints freshly generated BN254 field salts, one per line.

use anyhow::Result;
use clap::Args;

use zkdoc_crypto::generate_salt;

/// Arguments for the salt subcommand.
#[derive(Args, Debug)]
pub struct SaltArgs {
    /// Number of salts to generate.
    #[arg(long, short = 'n', default_value_t = 1)]
    pub count: usize,
}

/// Execute the salt subcommand.
pub fn run_salt(args: &SaltArgs) -> Result<u8> {
    for _ in 0..args.count {
        println!("{}", generate_salt());
    }
    Ok(0)
}
