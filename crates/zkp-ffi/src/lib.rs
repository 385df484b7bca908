// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! zkp-ffi: C ABI over the Groth16 verifier and the Pedersen Merkle
//! accumulator.
//!
//! | Export | Returns |
//! |---|---|
//! | `zkp_{bls12,bn256}_groth16_verify` | `1` valid, `0` anything else |
//! | `zkp_{bls12,bn256}_merkle_add_item` | status, 32-byte root in `out` |
//! | `zkp_{bls12,bn256}_merkle_append` | status, `root ‖ path` in `out` |
//!
//! Status codes live in [`status`]. A null pointer is accepted only with a
//! zero length. Panics never cross the boundary.

pub mod status;

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::slice;

use tracing::debug;
use zkp_merkle::AccumulatorFamily;
use zkp_types::{Bls12, Bn256, CurveFamily};

use crate::status::FfiError;
pub use crate::status::{
    status_code, ZKP_ERR_BUFFER_TOO_SMALL, ZKP_ERR_INDEX_OUT_OF_RANGE, ZKP_ERR_INVALID_POINT,
    ZKP_ERR_MALFORMED, ZKP_ERR_MALFORMED_PATH, ZKP_ERR_NULL_POINTER, ZKP_ERR_OTHER,
    ZKP_ERR_ROOT_MISMATCH, ZKP_OK,
};

/// # Safety
/// `ptr` must be null with `len == 0`, or valid for `len` reads.
unsafe fn input<'a>(ptr: *const u8, len: usize) -> Result<&'a [u8], FfiError> {
    if ptr.is_null() {
        return if len == 0 { Ok(&[]) } else { Err(FfiError::NullPointer) };
    }
    Ok(slice::from_raw_parts(ptr, len))
}

/// # Safety
/// `ptr` must be valid for `len` writes and not alias any input.
unsafe fn write_output(ptr: *mut u8, len: usize, data: &[u8]) -> Result<(), FfiError> {
    if ptr.is_null() {
        return Err(FfiError::NullPointer);
    }
    if len < data.len() {
        return Err(FfiError::BufferTooSmall {
            needed: data.len(),
            available: len,
        });
    }
    slice::from_raw_parts_mut(ptr, data.len()).copy_from_slice(data);
    Ok(())
}

fn guarded<F: FnOnce() -> Result<(), FfiError>>(op: &'static str, f: F) -> i32 {
    let result = catch_unwind(AssertUnwindSafe(f)).unwrap_or(Err(FfiError::Panicked));
    match result {
        Ok(()) => ZKP_OK,
        Err(err) => {
            debug!(op, ?err, "ffi call failed");
            err.code()
        }
    }
}

/// # Safety
/// See [`input`].
unsafe fn groth16_verify<F: CurveFamily>(
    vk_ptr: *const u8,
    vk_len: usize,
    proof_ptr: *const u8,
    proof_len: usize,
    inputs_ptr: *const u8,
    inputs_len: usize,
) -> u8 {
    let run = || -> Result<bool, FfiError> {
        let vk = input(vk_ptr, vk_len)?;
        let proof = input(proof_ptr, proof_len)?;
        let inputs = input(inputs_ptr, inputs_len)?;
        Ok(zkp_groth16::verify::<F>(vk, proof, inputs))
    };
    match catch_unwind(AssertUnwindSafe(run)) {
        Ok(Ok(true)) => 1,
        _ => 0,
    }
}

/// # Safety
/// See [`input`] and [`write_output`].
#[allow(clippy::too_many_arguments)]
unsafe fn merkle_add_item<F: AccumulatorFamily>(
    root_ptr: *const u8,
    root_len: usize,
    siblings_ptr: *const u8,
    siblings_len: usize,
    index: u64,
    leaf_ptr: *const u8,
    leaf_len: usize,
    out_ptr: *mut u8,
    out_len: usize,
) -> i32 {
    guarded("merkle_add_item", || {
        let root = input(root_ptr, root_len)?;
        let siblings = input(siblings_ptr, siblings_len)?;
        let leaf = input(leaf_ptr, leaf_len)?;
        let new_root = F::default_accumulator()?.add_item_bytes(root, siblings, index, leaf)?;
        write_output(out_ptr, out_len, &new_root)
    })
}

/// # Safety
/// See [`input`] and [`write_output`].
#[allow(clippy::too_many_arguments)]
unsafe fn merkle_append<F: AccumulatorFamily>(
    root_ptr: *const u8,
    root_len: usize,
    siblings_ptr: *const u8,
    siblings_len: usize,
    index: u64,
    leaves_ptr: *const u8,
    leaves_len: usize,
    out_ptr: *mut u8,
    out_len: usize,
) -> i32 {
    guarded("merkle_append", || {
        let root = input(root_ptr, root_len)?;
        let siblings = input(siblings_ptr, siblings_len)?;
        let leaves = input(leaves_ptr, leaves_len)?;
        let root_and_path = F::default_accumulator()?.append_bytes(root, siblings, index, leaves)?;
        write_output(out_ptr, out_len, &root_and_path)
    })
}

/// Verify a BLS12-381 Groth16 proof. Returns 1 when valid, 0 otherwise.
///
/// # Safety
/// Each pointer must be valid for reads of its length, or null with length 0.
#[no_mangle]
pub unsafe extern "C" fn zkp_bls12_groth16_verify(
    vk_ptr: *const u8,
    vk_len: usize,
    proof_ptr: *const u8,
    proof_len: usize,
    inputs_ptr: *const u8,
    inputs_len: usize,
) -> u8 {
    groth16_verify::<Bls12>(vk_ptr, vk_len, proof_ptr, proof_len, inputs_ptr, inputs_len)
}

/// Verify a BN254 Groth16 proof. Returns 1 when valid, 0 otherwise.
///
/// # Safety
/// Each pointer must be valid for reads of its length, or null with length 0.
#[no_mangle]
pub unsafe extern "C" fn zkp_bn256_groth16_verify(
    vk_ptr: *const u8,
    vk_len: usize,
    proof_ptr: *const u8,
    proof_len: usize,
    inputs_ptr: *const u8,
    inputs_len: usize,
) -> u8 {
    groth16_verify::<Bn256>(vk_ptr, vk_len, proof_ptr, proof_len, inputs_ptr, inputs_len)
}

/// Write the 32-byte root after adding `leaf` at `index` (depth 48).
///
/// # Safety
/// Input pointers must be valid for reads of their lengths; `out_ptr` must be
/// valid for `out_len` writes.
#[no_mangle]
#[allow(clippy::too_many_arguments)]
pub unsafe extern "C" fn zkp_bls12_merkle_add_item(
    root_ptr: *const u8,
    root_len: usize,
    siblings_ptr: *const u8,
    siblings_len: usize,
    index: u64,
    leaf_ptr: *const u8,
    leaf_len: usize,
    out_ptr: *mut u8,
    out_len: usize,
) -> i32 {
    merkle_add_item::<Bls12>(
        root_ptr, root_len, siblings_ptr, siblings_len, index, leaf_ptr, leaf_len, out_ptr, out_len,
    )
}

/// BN254 counterpart of [`zkp_bls12_merkle_add_item`].
///
/// # Safety
/// As for [`zkp_bls12_merkle_add_item`].
#[no_mangle]
#[allow(clippy::too_many_arguments)]
pub unsafe extern "C" fn zkp_bn256_merkle_add_item(
    root_ptr: *const u8,
    root_len: usize,
    siblings_ptr: *const u8,
    siblings_len: usize,
    index: u64,
    leaf_ptr: *const u8,
    leaf_len: usize,
    out_ptr: *mut u8,
    out_len: usize,
) -> i32 {
    merkle_add_item::<Bn256>(
        root_ptr, root_len, siblings_ptr, siblings_len, index, leaf_ptr, leaf_len, out_ptr, out_len,
    )
}

/// Append `leaves` starting at `index` and write `root ‖ path` (49 nodes at
/// depth 48). The root must match the path with an empty slot at `index`.
///
/// # Safety
/// Input pointers must be valid for reads of their lengths; `out_ptr` must be
/// valid for `out_len` writes.
#[no_mangle]
#[allow(clippy::too_many_arguments)]
pub unsafe extern "C" fn zkp_bls12_merkle_append(
    root_ptr: *const u8,
    root_len: usize,
    siblings_ptr: *const u8,
    siblings_len: usize,
    index: u64,
    leaves_ptr: *const u8,
    leaves_len: usize,
    out_ptr: *mut u8,
    out_len: usize,
) -> i32 {
    merkle_append::<Bls12>(
        root_ptr, root_len, siblings_ptr, siblings_len, index, leaves_ptr, leaves_len, out_ptr, out_len,
    )
}

/// BN254 counterpart of [`zkp_bls12_merkle_append`].
///
/// # Safety
/// As for [`zkp_bls12_merkle_append`].
#[no_mangle]
#[allow(clippy::too_many_arguments)]
pub unsafe extern "C" fn zkp_bn256_merkle_append(
    root_ptr: *const u8,
    root_len: usize,
    siblings_ptr: *const u8,
    siblings_len: usize,
    index: u64,
    leaves_ptr: *const u8,
    leaves_len: usize,
    out_ptr: *mut u8,
    out_len: usize,
) -> i32 {
    merkle_append::<Bn256>(
        root_ptr, root_len, siblings_ptr, siblings_len, index, leaves_ptr, leaves_len, out_ptr, out_len,
    )
}
