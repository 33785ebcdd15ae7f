//! Streaming Hasher
//!
//! Absorbs input in chunks of any size and alignment. Complete 8-byte words
//! are mixed into the lanes immediately; a trailing partial word waits in the
//! carry buffer until the next call or until finalization.

use crate::kernels::constants::{DIGEST128_SIZE, KEY_SIZE, WORD_MASK, WORD_SIZE};
use crate::kernels::round::Lanes;
use crate::types::{Finalized, InvalidKeyLength};

#[cfg(feature = "digest-trait")]
use crypto_common::{Key, KeySizeUser};
#[cfg(feature = "digest-trait")]
use digest::typenum::U16;
#[cfg(feature = "digest-trait")]
use digest::Output;
#[cfg(feature = "digest-trait")]
use digest::{FixedOutput, HashMarker, KeyInit, OutputSizeUser, Update};

// =============================================================================
// STREAMING HASHER
// =============================================================================

/// Streaming SipHash-2-4 state.
///
/// Finalizing consumes the hasher, so a stream can be finalized only once and
/// cannot be fed after finalization. Cloning a hasher forks the stream.
#[derive(Clone)]
pub struct SipHasher {
    /// Mixing state over all complete words seen so far
    lanes: Lanes,
    /// Total bytes absorbed (wrapping)
    cnt: u64,
    /// Partial word; bytes `cnt & 7 ..` are always zero
    tail: [u8; WORD_SIZE],
}

impl SipHasher {
    // =========================================================================
    // INITIALIZATION
    // =========================================================================

    /// Create a hasher with the all-zero key.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_seeds(0, 0)
    }

    /// Create a hasher keyed by two 64-bit words.
    #[must_use]
    pub const fn with_seeds(k0: u64, k1: u64) -> Self {
        Self {
            lanes: Lanes::new(k0, k1),
            cnt: 0,
            tail: [0u8; WORD_SIZE],
        }
    }

    /// Create a hasher from a 16-byte key.
    ///
    /// Bytes `0..8` and `8..16` are read as little-endian `k0` and `k1`,
    /// matching the reference SipHash key layout.
    #[must_use]
    pub const fn with_key(key: &[u8; KEY_SIZE]) -> Self {
        let mut k0 = [0u8; 8];
        let mut k1 = [0u8; 8];
        let mut i = 0;
        while i < 8 {
            k0[i] = key[i];
            k1[i] = key[i + 8];
            i += 1;
        }
        Self::with_seeds(u64::from_le_bytes(k0), u64::from_le_bytes(k1))
    }

    /// Create a hasher from a key slice.
    ///
    /// # Errors
    /// Returns `InvalidKeyLength` unless `key` is exactly 16 bytes.
    pub fn from_key_slice(key: &[u8]) -> Result<Self, InvalidKeyLength> {
        let key: &[u8; KEY_SIZE] = key
            .try_into()
            .map_err(|_| InvalidKeyLength::new(key.len()))?;
        Ok(Self::with_key(key))
    }

    // =========================================================================
    // STATE MODIFICATION
    // =========================================================================

    /// Add data to the hasher.
    ///
    /// Equivalent to a single call over the concatenation of every chunk
    /// passed so far. Empty slices are accepted and change nothing.
    #[allow(clippy::cast_possible_truncation)]
    pub fn update(&mut self, data: &[u8]) {
        let mut data = data;

        // Top up a pending partial word first
        let offset = (self.cnt & WORD_MASK) as usize;
        if offset != 0 {
            let take = (WORD_SIZE - offset).min(data.len());
            let (head, rest) = data.split_at(take);
            self.tail[offset..offset + take].copy_from_slice(head);
            self.cnt = self.cnt.wrapping_add(take as u64);
            data = rest;

            if offset + take < WORD_SIZE {
                return;
            }
            self.lanes.compress(u64::from_le_bytes(self.tail));
        }

        self.cnt = self.cnt.wrapping_add(data.len() as u64);

        let (words, remainder) = data.as_chunks::<WORD_SIZE>();
        for word in words {
            self.lanes.compress(u64::from_le_bytes(*word));
        }

        self.tail = [0u8; WORD_SIZE];
        self.tail[..remainder.len()].copy_from_slice(remainder);
    }

    /// Total bytes absorbed so far, modulo 2^64.
    #[must_use]
    pub const fn total_len(&self) -> u64 {
        self.cnt
    }

    // =========================================================================
    // FINALIZATION
    // =========================================================================

    /// Finalize the stream.
    ///
    /// The top byte of the last word carries the low 8 bits of the length;
    /// the remaining pending bytes are already zero-padded.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn finalize(mut self) -> Finalized {
        self.tail[WORD_SIZE - 1] = self.cnt as u8;
        self.lanes.finish(u64::from_le_bytes(self.tail));
        Finalized::new(self.lanes)
    }

    /// Finalize and return the 64-bit digest.
    #[must_use]
    pub fn digest64(self) -> u64 {
        self.finalize().digest64()
    }

    /// Finalize and return the 128-bit digest as `(low, high)`.
    #[must_use]
    pub fn digest128(self) -> (u64, u64) {
        self.finalize().digest128().words()
    }

    /// Finalize and return the 128-bit digest as 16 bytes, low word first.
    #[must_use]
    pub fn digest128_bytes(self) -> [u8; DIGEST128_SIZE] {
        self.finalize().digest128().to_bytes()
    }

    /// Finalize and write the 128-bit digest into `out`, low word first.
    pub fn digest128_into(self, out: &mut [u8; DIGEST128_SIZE]) {
        *out = self.digest128_bytes();
    }
}

// =============================================================================
// TRAIT IMPL
// =============================================================================

impl Default for SipHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for SipHasher {
    // Lanes are key-derived; only the stream position is shown.
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SipHasher")
            .field("total_len", &self.cnt)
            .finish_non_exhaustive()
    }
}

#[cfg(feature = "digest-trait")]
impl OutputSizeUser for SipHasher {
    type OutputSize = U16;
}

#[cfg(feature = "digest-trait")]
impl KeySizeUser for SipHasher {
    type KeySize = U16;
}

#[cfg(feature = "digest-trait")]
impl Update for SipHasher {
    fn update(&mut self, data: &[u8]) {
        self.update(data);
    }
}

#[cfg(feature = "digest-trait")]
impl FixedOutput for SipHasher {
    fn finalize_into(self, out: &mut Output<Self>) {
        out.copy_from_slice(&self.digest128_bytes());
    }
}

#[cfg(feature = "digest-trait")]
impl HashMarker for SipHasher {}

#[cfg(feature = "digest-trait")]
impl KeyInit for SipHasher {
    fn new(key: &Key<Self>) -> Self {
        let mut k = [0u8; KEY_SIZE];
        k.copy_from_slice(key.as_slice());
        Self::with_key(&k)
    }
}
