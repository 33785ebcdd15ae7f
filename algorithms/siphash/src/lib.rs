#![cfg_attr(not(feature = "std"), no_std)]

//! # SipHash
//!
//! Streaming SipHash-2-4 for short keys: URLs, identifiers, dedup keys.
//! Produces a 64-bit or a 128-bit digest from a 128-bit seed.
//!
//! Input may arrive in chunks of any size; the digest is the same as if the
//! whole input had been hashed in one call. The hasher never allocates.
//!
//! Not collision resistant against an adversary who knows the seed. Pass a
//! random seed when inputs may be attacker-controlled.

//! # Usage
//! ```rust
//! // 1. One-shot
//! let h64 = siphash::hash64(b"search phrase");
//! let h128 = siphash::hash128(b"search phrase");
//! assert_eq!(h128.len(), 16);
//!
//! // 2. Streaming
//! use siphash::Hasher;
//!
//! let mut hasher = Hasher::new();
//! hasher.update(b"search ");
//! hasher.update(b"phrase");
//! assert_eq!(hasher.digest64(), h64);
//!
//! // 3. Both widths from one stream
//! let mut hasher = Hasher::with_seeds(0x0123, 0x4567);
//! hasher.update(b"key");
//! let fin = hasher.finalize();
//! let (low, high) = fin.digest128().words();
//! # let _ = (fin.digest64(), low, high);
//! ```

// =============================================================================
// MODULES
// =============================================================================

#[cfg(feature = "std")]
mod ffi;
mod kernels;
mod oneshot;
mod streaming;
pub(crate) mod types;

// =============================================================================
// EXPORTS
// =============================================================================

#[cfg(feature = "digest-trait")]
pub use digest;
pub use kernels::constants::{DIGEST128_SIZE, DIGEST64_SIZE, KEY_SIZE};
pub use oneshot::{
    hash128, hash128_seeded, hash128_words, hash64, hash64_seeded, hash_keyed, verify_keyed,
};
pub use streaming::SipHasher as Hasher;
pub use types::{Digest128, Finalized, InvalidKeyLength};
