// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Fixed-width big-endian codecs for prime and extension field elements.
//!
//! Arithmetic comes from `ark-ff`; this module only pins the byte layout.
//! Every decoder rejects non-canonical values (`v >= p`) with
//! [`ZkpError::MalformedEncoding`], so two encodings of one element never
//! both decode.
//!
//! Extension elements are written highest-degree coefficient first, e.g. an
//! `Fq2` element `c0 + c1·u` is `c1 ‖ c0`.

use ark_ff::{BigInteger, Field, PrimeField};

use crate::error::{ZkpError, ZkpResult};

/// Width in bytes of a canonical encoding of `F`.
pub fn field_byte_len<F: PrimeField>() -> usize {
    (F::MODULUS_BIT_SIZE as usize + 7) / 8
}

/// Width in bytes of an encoded coordinate in `F`, extension fields included.
pub fn coordinate_byte_len<F: Field>() -> usize {
    F::extension_degree() as usize * field_byte_len::<F::BasePrimeField>()
}

pub fn read_field_be<F: PrimeField>(bytes: &[u8]) -> ZkpResult<F> {
    if bytes.len() != field_byte_len::<F>() {
        return Err(ZkpError::MalformedEncoding("field element has wrong length"));
    }
    let bits: Vec<bool> = bytes
        .iter()
        .flat_map(|byte| (0..8).rev().map(move |i| (byte >> i) & 1 == 1))
        .collect();
    F::from_bigint(F::BigInt::from_bits_be(&bits))
        .ok_or(ZkpError::MalformedEncoding("field element is not below the modulus"))
}

pub fn write_field_be<F: PrimeField>(value: &F, out: &mut Vec<u8>) {
    let bytes = value.into_bigint().to_bytes_be();
    let width = field_byte_len::<F>();
    out.extend_from_slice(&bytes[bytes.len() - width..]);
}

pub fn read_coordinate_be<F: Field>(bytes: &[u8]) -> ZkpResult<F> {
    if bytes.len() != coordinate_byte_len::<F>() {
        return Err(ZkpError::MalformedEncoding("coordinate has wrong length"));
    }
    let width = field_byte_len::<F::BasePrimeField>();
    let mut coeffs = bytes
        .chunks(width)
        .map(read_field_be::<F::BasePrimeField>)
        .collect::<ZkpResult<Vec<_>>>()?;
    coeffs.reverse();
    F::from_base_prime_field_elems(coeffs)
        .ok_or(ZkpError::MalformedEncoding("coordinate has wrong degree"))
}

pub fn write_coordinate_be<F: Field>(value: &F, out: &mut Vec<u8>) {
    let coeffs: Vec<F::BasePrimeField> = value.to_base_prime_field_elements().collect();
    for coeff in coeffs.iter().rev() {
        write_field_be(coeff, out);
    }
}

/// Decode a concatenation of fixed-width scalars.
pub fn read_scalars_be<F: PrimeField>(bytes: &[u8]) -> ZkpResult<Vec<F>> {
    let width = field_byte_len::<F>();
    if bytes.len() % width != 0 {
        return Err(ZkpError::MalformedEncoding(
            "scalar buffer is not a whole number of elements",
        ));
    }
    bytes.chunks(width).map(read_field_be).collect()
}

pub fn write_scalars_be<F: PrimeField>(values: &[F]) -> Vec<u8> {
    let mut out = Vec::with_capacity(values.len() * field_byte_len::<F>());
    for value in values {
        write_field_be(value, &mut out);
    }
    out
}

/// Inverse that reports zero instead of returning `None`.
pub fn checked_inverse<F: Field>(value: &F) -> ZkpResult<F> {
    value
        .inverse()
        .ok_or(ZkpError::InvalidFieldElement("zero has no inverse"))
}

/// Little-endian bits of the canonical representative, `MODULUS_BIT_SIZE` long.
pub fn to_bits_le<F: PrimeField>(value: &F) -> Vec<bool> {
    let mut bits = value.into_bigint().to_bits_le();
    bits.truncate(F::MODULUS_BIT_SIZE as usize);
    bits
}
