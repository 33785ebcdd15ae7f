//! Check Command
//!
//! Verify checksums from file (like sha256sum -c).

use super::hash::{digest_reader, open_input, Width};
use anyhow::{Context, Result};
use siphash::KEY_SIZE;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

// =============================================================================
// CHECK
// =============================================================================

/// Outcome of verifying one checksum list.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct CheckSummary {
    pub total: usize,
    pub failed: usize,
}

/// Verify every `"<hex>  <path>"` line from `reader`, printing one status line each.
///
/// Relative paths are resolved against `base`.
pub fn check_lines<R: BufRead>(reader: R, base: &Path, key: &[u8; KEY_SIZE]) -> Result<CheckSummary> {
    let mut summary = CheckSummary::default();

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        // Format: "hash  filename" (two spaces)
        let Some((expected_hash, file_path)) = line.split_once("  ") else {
            log::warn!("Invalid format: {line}");
            continue;
        };
        let expected_hash = expected_hash.trim().to_ascii_lowercase();
        let file_path = file_path.trim();

        let Some(width) = Width::from_hex_len(expected_hash.len()) else {
            log::warn!("Unrecognized digest length {} for {file_path}", expected_hash.len());
            continue;
        };
        summary.total += 1;

        let path = if file_path == "-" {
            PathBuf::from(file_path)
        } else {
            base.join(file_path)
        };
        let actual = open_input(&path).and_then(|reader| digest_reader(reader, width, key));

        match actual {
            Ok(actual_hash) if actual_hash == expected_hash => println!("{file_path}: OK"),
            Ok(_) => {
                println!("{file_path}: FAILED");
                summary.failed += 1;
            }
            Err(e) => {
                println!("{file_path}: FAILED ({e})");
                summary.failed += 1;
            }
        }
    }

    Ok(summary)
}

/// Verify checksums from a checksum file.
pub fn check_mode(checksum_file: &Path, key: &[u8; KEY_SIZE]) -> Result<()> {
    let file = File::open(checksum_file)
        .with_context(|| format!("Failed to open: {}", checksum_file.display()))?;

    // Paths are taken relative to the working directory, as sha256sum does.
    let summary = check_lines(BufReader::new(file), Path::new("."), key)?;

    println!();
    if summary.failed == 0 {
        println!("All {} checksums verified", summary.total);
    } else {
        anyhow::bail!(
            "WARNING: {} of {} checksums did NOT match",
            summary.failed,
            summary.total
        );
    }

    Ok(())
}
