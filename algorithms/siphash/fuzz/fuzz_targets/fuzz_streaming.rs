#![no_main]

use libfuzzer_sys::fuzz_target;
use siphash::Hasher;

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    // Seed from the first byte, chunk size (1 to 16) from the second
    let seed = u64::from(data[0]);
    let chunk_size = (data[1] as usize % 16) + 1;
    let message = &data[2..];

    let reference_64 = siphash::hash64_seeded(message, seed, !seed);
    let reference_128 = siphash::hash128_seeded(message, seed, !seed);

    let mut hasher = Hasher::with_seeds(seed, !seed);
    for chunk in message.chunks(chunk_size) {
        hasher.update(chunk);
    }
    let fin = hasher.finalize();

    // They must be identical
    assert_eq!(
        fin.digest64(),
        reference_64,
        "Streaming and One-Shot 64-bit digests differ!"
    );
    assert_eq!(
        fin.digest128().to_bytes(),
        reference_128,
        "Streaming and One-Shot 128-bit digests differ!"
    );
});
