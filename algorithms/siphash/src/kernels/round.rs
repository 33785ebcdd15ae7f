//! Lane State & SipRound
//!
//! The four 64-bit lanes and the add-rotate-xor permutation that mixes them.
//! Byte handling (carry buffer, counter) lives in `streaming`; this module
//! only ever sees complete little-endian words.

use super::constants::{
    COMPRESSION_ROUNDS, FINALIZATION_ROUNDS, FINAL_XOR, INIT_V0, INIT_V1, INIT_V2, INIT_V3,
    ROT_V0, ROT_V1_A, ROT_V1_B, ROT_V2, ROT_V3_A, ROT_V3_B,
};

// =============================================================================
// LANES
// =============================================================================

/// The four accumulator words `v0..v3`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Lanes {
    /// Lane 0
    pub v0: u64,
    /// Lane 1
    pub v1: u64,
    /// Lane 2
    pub v2: u64,
    /// Lane 3
    pub v3: u64,
}

impl Lanes {
    /// Key schedule: XOR the fixed constants with the key halves.
    #[must_use]
    pub const fn new(k0: u64, k1: u64) -> Self {
        Self {
            v0: INIT_V0 ^ k0,
            v1: INIT_V1 ^ k1,
            v2: INIT_V2 ^ k0,
            v3: INIT_V3 ^ k1,
        }
    }

    /// Absorb one complete message word.
    ///
    /// The word enters lane 3 before the rounds and lane 0 after them.
    #[inline]
    pub fn compress(&mut self, word: u64) {
        self.v3 ^= word;
        for _ in 0..COMPRESSION_ROUNDS {
            sip_round(self);
        }
        self.v0 ^= word;
    }

    /// Absorb the length-padded last word and run the finalization rounds.
    #[inline]
    pub fn finish(&mut self, last_word: u64) {
        self.compress(last_word);
        self.v2 ^= FINAL_XOR;
        for _ in 0..FINALIZATION_ROUNDS {
            sip_round(self);
        }
    }

    /// `v0 ^ v1 ^ v2 ^ v3`
    #[inline]
    #[must_use]
    pub const fn fold64(&self) -> u64 {
        self.v0 ^ self.v1 ^ self.v2 ^ self.v3
    }

    /// `(v0 ^ v1, v2 ^ v3)`
    #[inline]
    #[must_use]
    pub const fn fold128(&self) -> (u64, u64) {
        (self.v0 ^ self.v1, self.v2 ^ self.v3)
    }
}

impl core::fmt::Debug for Lanes {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Lanes {{ {:016x} {:016x} {:016x} {:016x} }}",
            self.v0, self.v1, self.v2, self.v3
        )
    }
}

// =============================================================================
// SIPROUND
// =============================================================================

/// One SipRound over all four lanes.
///
/// Addition precedes rotation, XOR follows it; all addition wraps mod 2^64.
#[allow(clippy::inline_always)]
#[inline(always)]
pub fn sip_round(s: &mut Lanes) {
    s.v0 = s.v0.wrapping_add(s.v1);
    s.v1 = s.v1.rotate_left(ROT_V1_A);
    s.v1 ^= s.v0;
    s.v0 = s.v0.rotate_left(ROT_V0);

    s.v2 = s.v2.wrapping_add(s.v3);
    s.v3 = s.v3.rotate_left(ROT_V3_A);
    s.v3 ^= s.v2;

    s.v0 = s.v0.wrapping_add(s.v3);
    s.v3 = s.v3.rotate_left(ROT_V3_B);
    s.v3 ^= s.v0;

    s.v2 = s.v2.wrapping_add(s.v1);
    s.v1 = s.v1.rotate_left(ROT_V1_B);
    s.v1 ^= s.v2;
    s.v2 = s.v2.rotate_left(ROT_V2);
}
