// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Hash-to-curve for deriving Pedersen generators.
//!
//! A BLAKE2s-256 digest is read as a compressed Edwards point: the low 255
//! bits are `y` little-endian, the top bit is the sign (parity) of `x`. The
//! point is cleared of its cofactor; digests that miss the curve or land on
//! the identity yield `None` and the caller bumps a counter byte.

use ark_ec::twisted_edwards::{Affine, TECurveConfig};
use ark_ec::{AffineRepr, CurveGroup};
use ark_ff::{BigInteger, Field, PrimeField, Zero};
use tracing::trace;
use zkp_types::{checked_inverse, ZkpError, ZkpResult};

/// BLAKE2s personalization for generator derivation.
pub const GENERATOR_PERSONALIZATION: &[u8; 8] = b"Zcash_PH";

/// Absorbed ahead of every tag.
pub const FIRST_BLOCK: &[u8; 64] =
    b"096b36a5804bfacef1691e173c366a47ff5ba84a44f26ddd7e8d9f79d5b42df0";

pub fn group_hash<P>(tag: &[u8], personalization: &[u8; 8]) -> Option<Affine<P>>
where
    P: TECurveConfig,
    P::BaseField: PrimeField,
{
    let digest = blake2s_simd::Params::new()
        .hash_length(32)
        .personal(personalization)
        .to_state()
        .update(FIRST_BLOCK)
        .update(tag)
        .finalize();

    let point = decompress::<P>(digest.as_bytes())?.mul_by_cofactor_to_group();
    if point.is_zero() {
        None
    } else {
        Some(point.into_affine())
    }
}

/// First `group_hash(prefix ‖ [i])` that succeeds, for `i = 0, 1, …`.
pub fn find_group_hash<P>(prefix: &[u8], personalization: &[u8; 8]) -> ZkpResult<Affine<P>>
where
    P: TECurveConfig,
    P::BaseField: PrimeField,
{
    let mut tag = Vec::with_capacity(prefix.len() + 1);
    tag.extend_from_slice(prefix);
    tag.push(0);
    let last = prefix.len();

    for counter in 0..u8::MAX {
        tag[last] = counter;
        if let Some(point) = group_hash::<P>(&tag, personalization) {
            trace!(?prefix, counter, "group hash hit");
            return Ok(point);
        }
    }
    Err(ZkpError::GroupHashExhausted)
}

/// Recover `x` from `a·x² + y² = 1 + d·x²·y²`. Not cofactor-cleared.
fn decompress<P>(bytes: &[u8]) -> Option<Affine<P>>
where
    P: TECurveConfig,
    P::BaseField: PrimeField,
{
    let mut bits: Vec<bool> = bytes
        .iter()
        .flat_map(|byte| (0..8).map(move |i| (byte >> i) & 1 == 1))
        .collect();
    let sign = bits.pop()?;

    let y = P::BaseField::from_bigint(<P::BaseField as PrimeField>::BigInt::from_bits_le(&bits))?;
    let y2 = y.square();
    let denominator = checked_inverse(&(P::COEFF_A - P::COEFF_D * y2)).ok()?;
    let mut x = ((P::BaseField::ONE - y2) * denominator).sqrt()?;
    if x.into_bigint().is_odd() != sign {
        x = -x;
    }
    Some(Affine::new_unchecked(x, y))
}
