//! # `PractRand` Stream Generator
//!
//! Generates a continuous stream of binary data by hashing an incrementing
//! 64-bit counter with SipHash, for piping into `RNG_test stdin64`.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::io::{self, ErrorKind, Write};

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum, Debug)]
enum Bits {
    #[value(name = "64")]
    Bits64,
    #[value(name = "128")]
    Bits128,
}

#[derive(Parser)]
#[command(name = "siphash_stream")]
#[command(about = "Endless SipHash output stream for statistical testing", long_about = None)]
struct Args {
    /// Input length in bytes, or "cyclic" to rotate through 1, 7, 8, 9, 16 and 64
    #[arg(short, long, default_value = "8")]
    size: String,

    /// Digest width written per counter value
    #[arg(short, long, value_enum, default_value_t = Bits::Bits128)]
    bits: Bits,

    /// First key word
    #[arg(long, default_value_t = 0)]
    seed0: u64,

    /// Second key word
    #[arg(long, default_value_t = 0)]
    seed1: u64,
}

const CYCLIC_SIZES: [usize; 6] = [1, 7, 8, 9, 16, 64];

/// Entry point for the `PractRand` stream generator.
fn main() -> Result<()> {
    let args = Args::parse();

    let fixed_size = match args.size.as_str() {
        "cyclic" => None,
        s => Some(
            s.parse::<usize>()
                .with_context(|| format!("invalid --size: {s}"))?,
        ),
    };

    let mut counter: u64 = 0;
    let stdout = io::stdout();
    let mut handle = io::BufWriter::new(stdout.lock());
    let mut input = Vec::new();

    loop {
        #[allow(clippy::cast_possible_truncation)]
        let size = fixed_size.unwrap_or(CYCLIC_SIZES[(counter % CYCLIC_SIZES.len() as u64) as usize]);

        // Fill input with the counter (repeatedly if needed)
        let counter_bytes = counter.to_le_bytes();
        input.clear();
        input.extend((0..size).map(|i| counter_bytes[i % 8]));

        let mut hasher = siphash::Hasher::with_seeds(args.seed0, args.seed1);
        hasher.update(&input);

        let written = match args.bits {
            Bits::Bits64 => handle.write_all(&hasher.digest64().to_le_bytes()),
            Bits::Bits128 => handle.write_all(&hasher.digest128_bytes()),
        };

        match written {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::BrokenPipe => return Ok(()),
            Err(e) => return Err(e).context("write to stdout"),
        }

        counter = counter.wrapping_add(1);
    }
}
