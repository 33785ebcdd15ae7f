//! Generator for SipHash test vectors
//!
//! Generates the canonical JSON test vectors used by `tests/test_vectors.json`.
//! Covers the reference key over sequential messages, the zero key over
//! empty/short inputs, and word-boundary lengths.
#![allow(clippy::unwrap_used)]
use serde_json::json;

const REFERENCE_KEY: &str = "000102030405060708090a0b0c0d0e0f";

fn expand(input: &str) -> Vec<u8> {
    if let Some(n) = input.strip_prefix("SEQ_") {
        let n: usize = n.parse().unwrap();
        return (0..n).map(|i| i as u8).collect();
    }
    match input {
        "EMPTY" => Vec::new(),
        "ZERO_8" => vec![0u8; 8],
        "ZERO_16" => vec![0u8; 16],
        "ONE_64" => vec![1u8; 64],
        "TWO_63" => vec![2u8; 63],
        "A_256" => vec![b'A'; 256],
        val => val.as_bytes().to_vec(),
    }
}

fn vector(name: &str, input: &str, keyed: bool) -> serde_json::Value {
    let key: [u8; 16] = if keyed {
        hex::decode(REFERENCE_KEY).unwrap().try_into().unwrap()
    } else {
        [0u8; 16]
    };

    let mut hasher = siphash::Hasher::with_key(&key);
    hasher.update(&expand(input));
    let fin = hasher.finalize();

    json!({
        "name": name,
        "input": input,
        "key": if keyed { Some(REFERENCE_KEY) } else { None },
        "hash64": format!("{:016x}", fin.digest64()),
        "hash128": hex::encode(fin.digest128().to_bytes()),
    })
}

fn main() {
    let mut vectors = Vec::new();

    // =========================================================================
    // 1. REFERENCE KEY, SEQUENTIAL MESSAGES
    // =========================================================================

    for n in [0, 1, 7, 8, 9, 15, 16, 17, 63] {
        vectors.push(vector(&format!("ref_key_seq_{n}"), &format!("SEQ_{n}"), true));
    }

    // =========================================================================
    // 2. ZERO KEY
    // =========================================================================

    let zero_key = [
        ("empty", "EMPTY"),
        ("basic", "abc"),
        ("word_minus_one", "SipHash"),
        ("hello", "Hello, World!"),
        ("zero_word", "ZERO_8"),
        ("zero_two_words", "ZERO_16"),
        ("exact_64_one", "ONE_64"),
        ("unaligned_63_two", "TWO_63"),
        ("medium_256_a", "A_256"),
    ];
    for (name, input) in zero_key {
        vectors.push(vector(name, input, false));
    }

    let output = json!({ "vectors": vectors });
    println!("{}", serde_json::to_string_pretty(&output).unwrap());
}
