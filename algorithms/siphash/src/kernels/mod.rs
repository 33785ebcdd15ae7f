//! SipHash Kernel
//!
//! Lane state, the SipRound permutation, and the constants they share.

pub mod constants;
pub mod round;
