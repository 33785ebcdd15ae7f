//! C-API Bindings
//!
//! Exposes SipHash to C/C++ via FFI with pointer checks and panic boundaries.
//! Input is always passed as `(pointer, length)`; no null terminator is read.

#![allow(unsafe_code)]

use crate::kernels::constants::DIGEST128_SIZE;
use crate::oneshot;
use crate::streaming::SipHasher;

use std::ptr;
use std::slice;

// =============================================================================
// HELPERS
// =============================================================================

/// View `(ptr, len)` as a slice. A null pointer is accepted only for `len == 0`.
///
/// # Safety
/// A non-null `ptr` must be valid for `len` bytes for the returned lifetime.
unsafe fn input<'a>(ptr: *const u8, len: usize) -> Option<&'a [u8]> {
    if ptr.is_null() {
        return (len == 0).then_some(&[][..]);
    }
    Some(slice::from_raw_parts(ptr, len))
}

// =============================================================================
// ONE-SHOT API
// =============================================================================

/// Compute the 64-bit digest under the zero key.
///
/// # Safety
/// - `input_ptr` must be valid for `input_len` bytes (may be null if `input_len == 0`)
/// - `output_ptr` must be valid for one writable `u64`
///
/// # Returns
/// - `0`: Success
/// - `-1`: Null pointer
/// - `-2`: Panic
#[no_mangle]
pub unsafe extern "C" fn siphash_hash64(
    input_ptr: *const u8,
    input_len: usize,
    output_ptr: *mut u64,
) -> i32 {
    let Some(data) = input(input_ptr, input_len) else {
        return -1;
    };
    if output_ptr.is_null() {
        return -1;
    }

    let result = std::panic::catch_unwind(|| oneshot::hash64(data));

    match result {
        Ok(h) => {
            output_ptr.write_unaligned(h);
            0
        }
        Err(_) => -2,
    }
}

/// Compute the 128-bit digest under the zero key.
///
/// # Safety
/// - `input_ptr` must be valid for `input_len` bytes (may be null if `input_len == 0`)
/// - `output_ptr` must be valid for 16 writable bytes
///
/// # Returns
/// - `0`: Success
/// - `-1`: Null pointer
/// - `-2`: Panic
#[no_mangle]
pub unsafe extern "C" fn siphash_hash128(
    input_ptr: *const u8,
    input_len: usize,
    output_ptr: *mut u8,
) -> i32 {
    siphash_hash128_seeded(input_ptr, input_len, 0, 0, output_ptr)
}

/// Compute the 128-bit digest with explicit seed words.
///
/// # Safety
/// - `input_ptr` must be valid for `input_len` bytes (may be null if `input_len == 0`)
/// - `output_ptr` must be valid for 16 writable bytes
///
/// # Returns
/// - `0`: Success
/// - `-1`: Null pointer
/// - `-2`: Panic
#[no_mangle]
pub unsafe extern "C" fn siphash_hash128_seeded(
    input_ptr: *const u8,
    input_len: usize,
    k0: u64,
    k1: u64,
    output_ptr: *mut u8,
) -> i32 {
    let Some(data) = input(input_ptr, input_len) else {
        return -1;
    };
    if output_ptr.is_null() {
        return -1;
    }

    let result = std::panic::catch_unwind(|| oneshot::hash128_seeded(data, k0, k1));

    match result {
        Ok(hash) => {
            ptr::copy_nonoverlapping(hash.as_ptr(), output_ptr, DIGEST128_SIZE);
            0
        }
        Err(_) => -2,
    }
}

// =============================================================================
// STREAMING API
// =============================================================================

/// Opaque hasher handle for C.
pub struct SipHasherPtr(SipHasher);

/// Create new hasher keyed by two 64-bit words.
/// Caller must release it with `siphash_hasher_digest64`,
/// `siphash_hasher_digest128` or `siphash_hasher_free`.
#[no_mangle]
pub extern "C" fn siphash_hasher_new(k0: u64, k1: u64) -> *mut SipHasherPtr {
    Box::into_raw(Box::new(SipHasherPtr(SipHasher::with_seeds(k0, k1))))
}

/// Feed data into the hasher.
///
/// # Safety
/// - `state_ptr` must be a live pointer obtained from `siphash_hasher_new`
/// - `data_ptr` must be valid for `len` bytes (may be null if `len == 0`)
#[no_mangle]
pub unsafe extern "C" fn siphash_hasher_update(
    state_ptr: *mut SipHasherPtr,
    data_ptr: *const u8,
    len: usize,
) {
    if state_ptr.is_null() {
        return;
    }
    let Some(data) = input(data_ptr, len) else {
        return;
    };
    (*state_ptr).0.update(data);
}

/// Finalize and return the 64-bit digest. Frees the hasher; do not use
/// `state_ptr` again. Returns `0` for a null handle.
///
/// # Safety
/// - `state_ptr` must be a live pointer obtained from `siphash_hasher_new`, or null
#[no_mangle]
pub unsafe extern "C" fn siphash_hasher_digest64(state_ptr: *mut SipHasherPtr) -> u64 {
    if state_ptr.is_null() {
        return 0;
    }
    let ptr = Box::from_raw(state_ptr);
    ptr.0.digest64()
}

/// Finalize and write the 128-bit digest. Frees the hasher; do not use
/// `state_ptr` again. A null `out_ptr` still frees the hasher.
///
/// # Safety
/// - `state_ptr` must be a live pointer obtained from `siphash_hasher_new`, or null
/// - `out_ptr` must be valid for 16 writable bytes
#[no_mangle]
pub unsafe extern "C" fn siphash_hasher_digest128(state_ptr: *mut SipHasherPtr, out_ptr: *mut u8) {
    if state_ptr.is_null() {
        return;
    }
    let ptr = Box::from_raw(state_ptr);
    if out_ptr.is_null() {
        return;
    }
    let hash = ptr.0.digest128_bytes();
    ptr::copy_nonoverlapping(hash.as_ptr(), out_ptr, DIGEST128_SIZE);
}

/// Free hasher without finalizing.
///
/// # Safety
/// - `state_ptr` must be a live pointer obtained from `siphash_hasher_new`, or null
#[no_mangle]
pub unsafe extern "C" fn siphash_hasher_free(state_ptr: *mut SipHasherPtr) {
    if !state_ptr.is_null() {
        drop(Box::from_raw(state_ptr));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oneshot_matches_rust_api() {
        let data = b"ffi input";
        let mut h64 = 0u64;
        let mut h128 = [0u8; DIGEST128_SIZE];
        unsafe {
            assert_eq!(siphash_hash64(data.as_ptr(), data.len(), &mut h64), 0);
            assert_eq!(siphash_hash128(data.as_ptr(), data.len(), h128.as_mut_ptr()), 0);
        }
        assert_eq!(h64, oneshot::hash64(data));
        assert_eq!(h128, oneshot::hash128(data));
    }

    #[test]
    fn null_input_is_empty_only_when_len_is_zero() {
        let mut h64 = 0u64;
        unsafe {
            assert_eq!(siphash_hash64(ptr::null(), 0, &mut h64), 0);
            assert_eq!(h64, oneshot::hash64(b""));
            assert_eq!(siphash_hash64(ptr::null(), 4, &mut h64), -1);
            assert_eq!(siphash_hash64(b"x".as_ptr(), 1, ptr::null_mut()), -1);
            assert_eq!(siphash_hash128(b"x".as_ptr(), 1, ptr::null_mut()), -1);
        }
    }

    #[test]
    fn streaming_handle_matches_rust_api() {
        let data = b"streamed through the C ABI";
        unsafe {
            let h = siphash_hasher_new(3, 4);
            siphash_hasher_update(h, data.as_ptr(), 5);
            siphash_hasher_update(h, ptr::null(), 0);
            siphash_hasher_update(h, data[5..].as_ptr(), data.len() - 5);
            let mut out = [0u8; DIGEST128_SIZE];
            siphash_hasher_digest128(h, out.as_mut_ptr());
            assert_eq!(out, oneshot::hash128_seeded(data, 3, 4));

            let h = siphash_hasher_new(3, 4);
            siphash_hasher_update(h, data.as_ptr(), data.len());
            assert_eq!(siphash_hasher_digest64(h), oneshot::hash64_seeded(data, 3, 4));

            siphash_hasher_free(siphash_hasher_new(0, 0));
            siphash_hasher_free(ptr::null_mut());
        }
    }
}
