//! Hash Command
//!
//! File hashing with automatic parallelization via Rayon.

use anyhow::{Context, Result};
use clap::ValueEnum;
use rayon::prelude::*;
use siphash::{Hasher, KEY_SIZE};
use std::io::Read;
use std::path::{Path, PathBuf};

/// Read size for feeding the streaming hasher.
const BUFFER_SIZE: usize = 128 * 1024;

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
pub enum Width {
    /// 64-bit digest, printed as 16 hex digits (big-endian integer)
    #[value(name = "64")]
    Bits64,
    /// 128-bit digest, printed as its 16 bytes (low word first)
    #[value(name = "128")]
    Bits128,
}

impl Width {
    /// Infer the width from the length of a hex digest.
    pub const fn from_hex_len(len: usize) -> Option<Self> {
        match len {
            16 => Some(Self::Bits64),
            32 => Some(Self::Bits128),
            _ => None,
        }
    }

    fn render(self, hasher: Hasher) -> String {
        match self {
            Self::Bits64 => format!("{:016x}", hasher.digest64()),
            Self::Bits128 => hex::encode(hasher.digest128_bytes()),
        }
    }
}

/// Parse a 16-byte key given as 32 hex digits.
pub fn parse_key(s: &str) -> Result<[u8; KEY_SIZE], String> {
    let bytes = hex::decode(s).map_err(|e| format!("invalid hex key: {e}"))?;
    Hasher::from_key_slice(&bytes).map_err(|e| e.to_string())?;
    let mut key = [0u8; KEY_SIZE];
    key.copy_from_slice(&bytes);
    Ok(key)
}

/// Open a path for reading; `-` is standard input.
pub fn open_input(path: &Path) -> Result<Box<dyn Read>> {
    if path.as_os_str() == "-" {
        return Ok(Box::new(std::io::stdin().lock()));
    }
    Ok(Box::new(std::fs::File::open(path)?))
}

/// Stream a reader through the hasher and render its digest.
pub fn digest_reader<R: Read>(mut reader: R, width: Width, key: &[u8; KEY_SIZE]) -> Result<String> {
    let mut hasher = Hasher::with_key(key);
    let mut buffer = vec![0u8; BUFFER_SIZE];
    let mut total: u64 = 0;

    loop {
        let n = reader.read(&mut buffer)?;
        if n == 0 {
            break;
        }
        hasher.update(&buffer[..n]);
        total += n as u64;
    }

    log::debug!("hashed {total} bytes ({width:?})");
    Ok(width.render(hasher))
}

/// Hash files (Rayon parallelizes automatically when beneficial).
pub fn hash_files(files: &[PathBuf], width: Width, key: &[u8; KEY_SIZE]) -> Result<()> {
    let results: Vec<(&PathBuf, Result<String>)> = files
        .par_iter()
        .map(|file_path| {
            let digest = open_input(file_path)
                .and_then(|reader| digest_reader(reader, width, key))
                .with_context(|| format!("Failed to hash: {}", file_path.display()));
            (file_path, digest)
        })
        .collect();

    let mut failed = 0usize;
    for (file_path, result) in results {
        match result {
            Ok(hex_hash) => println!("{}  {}", hex_hash, file_path.display()),
            Err(e) => {
                eprintln!("Error: {e:#}");
                failed += 1;
            }
        }
    }

    if failed > 0 {
        anyhow::bail!("Failed to hash {failed} file(s)");
    }

    Ok(())
}
