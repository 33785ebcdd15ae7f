//! Short-Key Comparison Benchmark
//!
//! SipHash against xxh3 and the standard library's `DefaultHasher` on the
//! key sizes hash tables actually see.

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]
use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use std::hash::{DefaultHasher, Hasher as _};
use std::hint::black_box;

// =============================================================================
// BENCHMARKS
// =============================================================================

fn bench_short_keys(c: &mut Criterion) {
    let mut group = c.benchmark_group("Short Keys");

    // Scenarios:
    // - 8B: one word, padding word only
    // - 24B: typical identifier
    // - 100B: URL / search phrase
    let sizes = [8, 24, 100];

    for size in sizes {
        let input: Vec<u8> = (0..size).map(|i| i as u8).collect();
        group.throughput(Throughput::Bytes(size as u64));

        // 1. This crate, 64-bit
        group.bench_function(format!("siphash64 - {size} bytes"), |b| {
            b.iter(|| siphash::hash64(black_box(&input)));
        });

        // 2. This crate, 128-bit
        group.bench_function(format!("siphash128 - {size} bytes"), |b| {
            b.iter(|| siphash::hash128(black_box(&input)));
        });

        // 3. std SipHash-1-3 via DefaultHasher
        group.bench_function(format!("std DefaultHasher - {size} bytes"), |b| {
            b.iter(|| {
                let mut h = DefaultHasher::new();
                h.write(black_box(&input));
                h.finish()
            });
        });

        // 4. xxh3 (unkeyed baseline)
        group.bench_function(format!("xxh3_64 - {size} bytes"), |b| {
            b.iter(|| xxhash_rust::xxh3::xxh3_64(black_box(&input)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_short_keys);
criterion_main!(benches);
