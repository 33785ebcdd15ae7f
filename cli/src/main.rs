//! SipHash CLI
//!
//! Keyed fingerprints for files and standard input.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{check_mode, hash_files, parse_key, Width};
use std::path::PathBuf;

// =============================================================================
// CLI DEFINITION
// =============================================================================

#[derive(Parser)]
#[command(name = "siphash")]
#[command(about = "Streaming SipHash-2-4 fingerprints (64 or 128 bit)", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Files to hash ("-" or none for stdin)
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Digest width in bits
    #[arg(short, long, value_enum, default_value_t = Width::Bits128)]
    bits: Width,

    /// 16-byte key as 32 hex digits (default: all-zero key)
    #[arg(short, long, global = true, value_parser = parse_key)]
    key: Option<[u8; siphash::KEY_SIZE]>,
}

#[derive(Subcommand)]
enum Commands {
    /// Verify checksums from file (like sha256sum -c)
    Check {
        #[arg(value_name = "FILE")]
        checksum_file: PathBuf,
    },
}

// =============================================================================
// ENTRY POINT
// =============================================================================

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let key = cli.key.unwrap_or([0u8; siphash::KEY_SIZE]);

    match &cli.command {
        Some(Commands::Check { checksum_file }) => check_mode(checksum_file, &key)?,
        None => {
            let files = if cli.files.is_empty() {
                vec![PathBuf::from("-")]
            } else {
                cli.files
            };
            hash_files(&files, cli.bits, &key)?;
        }
    }

    Ok(())
}
