//! Shared types used across the SipHash library.

use crate::kernels::constants::DIGEST128_SIZE;
use crate::kernels::round::Lanes;
use core::fmt;
#[cfg(feature = "std")]
use std::error;

// =============================================================================
// FINALIZED STATE
// =============================================================================

/// Terminal state of a hash computation.
///
/// Produced by [`Hasher::finalize`](crate::Hasher::finalize), which consumes
/// the hasher. Finalization has already run exactly once; this value only
/// reads the lanes, so both digest widths may be taken from it.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Finalized {
    lanes: Lanes,
}

impl Finalized {
    pub(crate) const fn new(lanes: Lanes) -> Self {
        Self { lanes }
    }

    /// 64-bit digest: `v0 ^ v1 ^ v2 ^ v3`.
    #[must_use]
    pub const fn digest64(&self) -> u64 {
        self.lanes.fold64()
    }

    /// 128-bit digest: `low = v0 ^ v1`, `high = v2 ^ v3`.
    #[must_use]
    pub const fn digest128(&self) -> Digest128 {
        let (low, high) = self.lanes.fold128();
        Digest128 { low, high }
    }
}

impl fmt::Debug for Finalized {
    // Finalized lanes can be run backwards to the key; none are shown.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Finalized").finish_non_exhaustive()
    }
}

// =============================================================================
// 128-BIT DIGEST
// =============================================================================

/// A 128-bit digest as two 64-bit words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest128 {
    /// `v0 ^ v1`
    pub low: u64,
    /// `v2 ^ v3`
    pub high: u64,
}

impl Digest128 {
    /// `(low, high)`
    #[must_use]
    pub const fn words(self) -> (u64, u64) {
        (self.low, self.high)
    }

    /// Byte form: the low word then the high word, each little-endian.
    #[must_use]
    pub const fn to_bytes(self) -> [u8; DIGEST128_SIZE] {
        let lo = self.low.to_le_bytes();
        let hi = self.high.to_le_bytes();
        let mut out = [0u8; DIGEST128_SIZE];
        let mut i = 0;
        while i < 8 {
            out[i] = lo[i];
            out[i + 8] = hi[i];
            i += 1;
        }
        out
    }

    /// Inverse of [`to_bytes`](Self::to_bytes).
    #[must_use]
    pub const fn from_bytes(bytes: &[u8; DIGEST128_SIZE]) -> Self {
        let mut lo = [0u8; 8];
        let mut hi = [0u8; 8];
        let mut i = 0;
        while i < 8 {
            lo[i] = bytes[i];
            hi[i] = bytes[i + 8];
            i += 1;
        }
        Self {
            low: u64::from_le_bytes(lo),
            high: u64::from_le_bytes(hi),
        }
    }
}

impl From<Digest128> for [u8; DIGEST128_SIZE] {
    fn from(d: Digest128) -> Self {
        d.to_bytes()
    }
}

impl From<Digest128> for u128 {
    fn from(d: Digest128) -> Self {
        (Self::from(d.high) << 64) | Self::from(d.low)
    }
}

impl fmt::LowerHex for Digest128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in self.to_bytes() {
            write!(f, "{b:02x}")?;
        }
        Ok(())
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Error for a key slice that is not exactly 16 bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidKeyLength {
    len: usize,
}

impl InvalidKeyLength {
    /// Create a new `InvalidKeyLength` for a key of `len` bytes.
    pub const fn new(len: usize) -> Self {
        Self { len }
    }

    /// Length of the rejected key.
    pub const fn key_len(&self) -> usize {
        self.len
    }
}

impl fmt::Display for InvalidKeyLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SipHash key must be exactly {} bytes, got {}",
            crate::kernels::constants::KEY_SIZE,
            self.len
        )
    }
}

#[cfg(feature = "std")]
impl error::Error for InvalidKeyLength {}
