//! SipHash Criterion Benchmark
//!
//! Latency for short keys, streaming overhead, and the keyed API.

#![allow(clippy::pedantic, clippy::nursery)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use rand::prelude::*;
use std::hint::black_box;

const KB: usize = 1024;

// =============================================================================
// BENCHMARK 1: LATENCY
// =============================================================================

/// Hot path latency for short inputs (URLs, search phrases, IDs).
fn bench_latency(c: &mut Criterion) {
    let mut group = c.benchmark_group("1-Latency");

    let sizes = [0, 1, 7, 8, 15, 16, 32, 64, 128];

    for size in sizes {
        let mut input = vec![0u8; size];
        rand::rng().fill(&mut input[..]);
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(
            criterion::BenchmarkId::new("hash64", size),
            &input,
            |b, data| b.iter(|| siphash::hash64(black_box(data))),
        );
        group.bench_with_input(
            criterion::BenchmarkId::new("hash128", size),
            &input,
            |b, data| b.iter(|| siphash::hash128(black_box(data))),
        );
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 2: BULK
// =============================================================================

/// Throughput once word processing dominates.
fn bench_bulk(c: &mut Criterion) {
    let mut group = c.benchmark_group("2-Bulk");

    let sizes = [(KB, "1KB"), (16 * KB, "16KB"), (256 * KB, "256KB")];

    for (size, name) in sizes {
        let mut input = vec![0u8; size];
        rand::rng().fill(&mut input[..]);
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(
            criterion::BenchmarkId::from_parameter(name),
            &input,
            |b, data| b.iter(|| siphash::hash64(black_box(data))),
        );
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 3: STREAMING
// =============================================================================

/// Cost of the carry buffer: same input fed in aligned and unaligned chunks.
fn bench_streaming(c: &mut Criterion) {
    let mut group = c.benchmark_group("3-Streaming");

    let total_size = 16 * KB;
    let mut input = vec![0u8; total_size];
    rand::rng().fill(&mut input[..]);
    group.throughput(Throughput::Bytes(total_size as u64));

    let chunk_sizes = [
        (1, "1B-chunks"),
        (3, "3B-chunks"),
        (8, "8B-chunks"),
        (13, "13B-chunks"),
        (64, "64B-chunks"),
        (4 * KB, "4KB-chunks"),
    ];

    for (chunk_size, name) in chunk_sizes {
        group.bench_with_input(
            criterion::BenchmarkId::from_parameter(name),
            &(&input, chunk_size),
            |b, (data, chunk_sz)| {
                b.iter(|| {
                    let mut hasher = siphash::Hasher::new();
                    for chunk in data.chunks(*chunk_sz) {
                        hasher.update(black_box(chunk));
                    }
                    hasher.digest64()
                })
            },
        );
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 4: SPECIAL OPERATIONS
// =============================================================================

/// Keyed hashing and constant-time verification.
fn bench_special_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("4-Special-Operations");

    let size = 64;
    let mut input = vec![0u8; size];
    rand::rng().fill(&mut input[..]);
    let key = [42u8; 16];
    group.throughput(Throughput::Bytes(size as u64));

    group.bench_function("regular-hash", |b| {
        b.iter(|| siphash::hash128(black_box(&input)))
    });

    group.bench_function("keyed-hash", |b| {
        b.iter(|| siphash::hash_keyed(black_box(&input), black_box(&key)))
    });

    let tag = siphash::hash_keyed(&input, &key);
    group.bench_function("verify-keyed", |b| {
        b.iter(|| siphash::verify_keyed(black_box(&input), black_box(&key), black_box(&tag)))
    });

    group.finish();
}

// =============================================================================
// MAIN
// =============================================================================

criterion_group!(
    benches,
    bench_latency,
    bench_bulk,
    bench_streaming,
    bench_special_operations,
);

criterion_main!(benches);
