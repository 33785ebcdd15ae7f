//! SipHash Kernel Constants
//!
//! The four initialization constants are the ASCII string
//! `"somepseudorandomlygeneratedbytes"` read as four big-endian 64-bit words:
//!
//! ```text
//! "somepseu" "dorandom" "lygenera" "tedbytes"
//! ```
//!
//! Changing any value here (or the round counts) yields a different,
//! incompatible hash.

// =============================================================================
// INITIALIZATION CONSTANTS
// =============================================================================

/// `"somepseu"`, XORed with `k0` into lane 0.
pub const INIT_V0: u64 = 0x736F_6D65_7073_6575;
/// `"dorandom"`, XORed with `k1` into lane 1.
pub const INIT_V1: u64 = 0x646F_7261_6E64_6F6D;
/// `"lygenera"`, XORed with `k0` into lane 2.
pub const INIT_V2: u64 = 0x6C79_6765_6E65_7261;
/// `"tedbytes"`, XORed with `k1` into lane 3.
pub const INIT_V3: u64 = 0x7465_6462_7974_6573;

/// XORed into lane 2 before the finalization rounds.
pub const FINAL_XOR: u64 = 0xFF;

// =============================================================================
// ROUNDS
// =============================================================================

/// SipRounds per absorbed word (the "2" in SipHash-2-4).
pub const COMPRESSION_ROUNDS: usize = 2;

/// SipRounds after the length word (the "4" in SipHash-2-4).
pub const FINALIZATION_ROUNDS: usize = 4;

// Rotation amounts, in the order they appear in one SipRound.
pub(crate) const ROT_V1_A: u32 = 13;
pub(crate) const ROT_V0: u32 = 32;
pub(crate) const ROT_V3_A: u32 = 16;
pub(crate) const ROT_V3_B: u32 = 21;
pub(crate) const ROT_V1_B: u32 = 17;
pub(crate) const ROT_V2: u32 = 32;

// =============================================================================
// STRUCTURAL CONSTANTS
// =============================================================================

/// Size of one absorbed message word (in bytes).
pub const WORD_SIZE: usize = 8;

/// Size of the secret key (in bytes).
pub const KEY_SIZE: usize = 16;

/// Size of the 64-bit digest (in bytes).
pub const DIGEST64_SIZE: usize = 8;

/// Size of the 128-bit digest (in bytes).
pub const DIGEST128_SIZE: usize = 16;

/// Mask selecting the in-word offset from the byte counter.
pub(crate) const WORD_MASK: u64 = (WORD_SIZE as u64) - 1;
