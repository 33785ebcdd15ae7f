use bolero::check;
use siphash::{hash128, hash64, Hasher};

#[test]
fn fuzz_streaming_consistency() {
    check!().with_type::<Vec<u8>>().for_each(|data| {
        // =============================================================================
        // BASELINE (ONE-SHOT)
        // =============================================================================
        let expected64 = hash64(data);
        let expected128 = hash128(data);

        // =============================================================================
        // STREAMING VARIATIONS
        // =============================================================================

        // 1. Single Update
        let mut hasher = Hasher::new();
        hasher.update(data);
        let fin = hasher.finalize();
        assert_eq!(fin.digest64(), expected64, "Streaming single update mismatch");
        assert_eq!(fin.digest128().to_bytes(), expected128);

        // 2. Byte-by-Byte (Small Inputs Only)
        if data.len() <= 256 {
            let mut hasher = Hasher::new();
            for b in data {
                hasher.update(&[*b]);
            }
            assert_eq!(hasher.digest64(), expected64, "Byte-by-byte streaming mismatch");
        }

        // 3. Arbitrary Split Points
        if data.len() > 1 {
            for split_idx in [1, data.len() / 2, data.len() - 1] {
                let mut hasher = Hasher::new();
                let (first, second) = data.split_at(split_idx);
                hasher.update(first);
                hasher.update(second);
                assert_eq!(hasher.digest64(), expected64, "Split at {split_idx} mismatch");
            }
        }
    });
}

#[test]
fn fuzz_chunk_plan() {
    // First byte picks the chunk size, the rest is the message.
    check!().with_type::<(u8, Vec<u8>)>().for_each(|(size, data)| {
        let chunk_size = usize::from(*size % 17) + 1;
        let mut hasher = Hasher::with_seeds(u64::from(*size), !u64::from(*size));
        for chunk in data.chunks(chunk_size) {
            hasher.update(chunk);
        }
        assert_eq!(
            hasher.digest128_bytes(),
            siphash::hash128_seeded(data, u64::from(*size), !u64::from(*size)),
            "chunk size {chunk_size}"
        );
    });
}
