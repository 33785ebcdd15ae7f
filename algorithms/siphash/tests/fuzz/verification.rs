use bolero::check;
use siphash::{hash_keyed, verify_keyed};

#[test]
fn fuzz_verification_logic() {
    check!().with_type::<([u8; 16], Vec<u8>)>().for_each(|(key, data)| {
        // =============================================================================
        // POSITIVE TEST
        // =============================================================================

        let tag = hash_keyed(data, key);
        assert!(verify_keyed(data, key, &tag), "verify_keyed() failed on correct data");

        // =============================================================================
        // NEGATIVE TESTS (CORRUPTION)
        // =============================================================================

        // 1. Data Corruption
        if !data.is_empty() {
            let mut corrupted_data = data.clone();
            corrupted_data[0] ^= 0x01;
            assert!(
                !verify_keyed(&corrupted_data, key, &tag),
                "verify_keyed() succeeded on corrupted data"
            );
        }

        // 2. Tag Corruption
        let mut bad_tag = tag;
        bad_tag[0] ^= 0xFF;
        assert!(
            !verify_keyed(data, key, &bad_tag),
            "verify_keyed() succeeded on corrupted tag"
        );
    });
}
