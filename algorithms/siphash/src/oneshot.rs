//! Public API Layer
//!
//! One-shot wrappers: each builds a fresh hasher, absorbs the whole input in
//! a single call and finalizes once.

use crate::kernels::constants::{DIGEST128_SIZE, KEY_SIZE};
use crate::streaming::SipHasher;
use subtle::ConstantTimeEq;

// =============================================================================
// ZERO-KEY HASHING
// =============================================================================

/// Compute the 64-bit SipHash-2-4 digest under the zero key.
///
/// # Example
/// ```rust
/// let h = siphash::hash64(b"https://example.com/");
/// assert_eq!(h, siphash::hash64(b"https://example.com/"));
/// ```
#[must_use]
#[inline]
pub fn hash64(input: &[u8]) -> u64 {
    hash64_seeded(input, 0, 0)
}

/// Compute the 128-bit digest under the zero key.
///
/// Returns the low word then the high word, each little-endian.
#[must_use]
#[inline]
pub fn hash128(input: &[u8]) -> [u8; DIGEST128_SIZE] {
    hash128_seeded(input, 0, 0)
}

/// Compute the 128-bit digest under the zero key as `(low, high)`.
#[must_use]
#[inline]
pub fn hash128_words(input: &[u8]) -> (u64, u64) {
    let mut hasher = SipHasher::new();
    hasher.update(input);
    hasher.digest128()
}

// =============================================================================
// SEEDED HASHING
// =============================================================================

/// Compute the 64-bit digest with explicit seed words.
///
/// Use random seeds when the inputs may be attacker-chosen (hash flooding).
#[must_use]
#[inline]
pub fn hash64_seeded(input: &[u8], k0: u64, k1: u64) -> u64 {
    let mut hasher = SipHasher::with_seeds(k0, k1);
    hasher.update(input);
    hasher.digest64()
}

/// Compute the 128-bit digest with explicit seed words.
#[must_use]
#[inline]
pub fn hash128_seeded(input: &[u8], k0: u64, k1: u64) -> [u8; DIGEST128_SIZE] {
    let mut hasher = SipHasher::with_seeds(k0, k1);
    hasher.update(input);
    hasher.digest128_bytes()
}

// =============================================================================
// KEYED HASHING
// =============================================================================

/// Compute the 128-bit digest under a 16-byte key.
///
/// # Example
/// ```rust
/// use siphash::{hash_keyed, verify_keyed};
///
/// let key = [42u8; 16];
/// let tag = hash_keyed(b"message", &key);
/// assert!(verify_keyed(b"message", &key, &tag));
/// ```
#[must_use]
pub fn hash_keyed(input: &[u8], key: &[u8; KEY_SIZE]) -> [u8; DIGEST128_SIZE] {
    let mut hasher = SipHasher::with_key(key);
    hasher.update(input);
    hasher.digest128_bytes()
}

/// Check a keyed 128-bit digest in constant time.
#[must_use]
pub fn verify_keyed(
    input: &[u8],
    key: &[u8; KEY_SIZE],
    expected: &[u8; DIGEST128_SIZE],
) -> bool {
    let computed = hash_keyed(input, key);
    computed.ct_eq(expected).into()
}
