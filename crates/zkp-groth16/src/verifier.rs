// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Groth16 verifier generic over the curve family

use ark_ec::pairing::Pairing;
use ark_ec::{AffineRepr, CurveGroup};
use ark_ff::PrimeField;
use tracing::debug;
use zkp_types::{Bls12, Bn256, Curve, CurveFamily, G1Affine, ScalarField, ZkpError, ZkpResult};

use crate::pairing::pairing_product_is_identity;
use crate::types::{decode_inputs, PreparedVerificationKey, Proof, VerificationKey};

/// Verify a Groth16 proof from its wire encodings.
///
/// Never fails: malformed bytes, invalid points, out-of-range scalars and
/// input-count mismatches all yield `false`. The reason is logged at debug
/// level; use [`try_verify`] to get it back.
pub fn verify<F: CurveFamily>(vk: &[u8], proof: &[u8], inputs: &[u8]) -> bool {
    match try_verify::<F>(vk, proof, inputs) {
        Ok(true) => true,
        Ok(false) => {
            debug!(curve = %F::CURVE, "groth16 pairing check failed");
            false
        }
        Err(err) => {
            debug!(curve = %F::CURVE, %err, "rejected groth16 input");
            false
        }
    }
}

/// [`verify`] with the decoding error surfaced.
pub fn try_verify<F: CurveFamily>(vk: &[u8], proof: &[u8], inputs: &[u8]) -> ZkpResult<bool> {
    let inputs = decode_inputs::<F>(inputs)?;
    let vk = VerificationKey::<F>::decode_for_inputs(vk, inputs.len())?;
    let proof = Proof::<F>::decode(proof)?;
    verify_proof(&vk, &proof, &inputs)
}

/// Runtime-selected family.
pub fn verify_for_curve(curve: Curve, vk: &[u8], proof: &[u8], inputs: &[u8]) -> bool {
    match curve {
        Curve::Bls12381 => verify::<Bls12>(vk, proof, inputs),
        Curve::Bn254 => verify::<Bn256>(vk, proof, inputs),
    }
}

/// Verify a decoded Groth16 proof
///
/// Algorithm:
/// 1. Compute L = IC[0] + Σ inputs[i]·IC[i+1]
/// 2. Check: e(-A,B) * e(alpha,beta) * e(L,gamma) * e(C,delta) == 1
///    with one multi-Miller loop and one final exponentiation
pub fn verify_proof<F: CurveFamily>(
    vk: &VerificationKey<F>,
    proof: &Proof<F>,
    inputs: &[ScalarField<F>],
) -> ZkpResult<bool> {
    let l = accumulate_inputs::<F>(&vk.ic, inputs)?;
    Ok(pairing_product_is_identity::<F::Engine>(
        &[-proof.a, vk.alpha_g1, l, proof.c],
        &[proof.b, vk.beta_g2, vk.gamma_g2, vk.delta_g2],
    ))
}

pub fn prepare_verifying_key<F: CurveFamily>(
    vk: &VerificationKey<F>,
) -> ZkpResult<PreparedVerificationKey<F>> {
    vk.prepare()
}

/// Verify against a prepared key
///
/// Algorithm:
/// 1. Compute L as in [`verify_proof`]
/// 2. Check: e(A,B) * e(L,-gamma) * e(C,-delta) == e(alpha,beta)
pub fn verify_prepared<F: CurveFamily>(
    pvk: &PreparedVerificationKey<F>,
    proof: &Proof<F>,
    inputs: &[ScalarField<F>],
) -> ZkpResult<bool> {
    let l = accumulate_inputs::<F>(&pvk.ic, inputs)?;
    let miller = <F::Engine as Pairing>::multi_miller_loop(
        [
            <F::Engine as Pairing>::G1Prepared::from(proof.a),
            <F::Engine as Pairing>::G1Prepared::from(l),
            <F::Engine as Pairing>::G1Prepared::from(proof.c),
        ],
        [
            <F::Engine as Pairing>::G2Prepared::from(proof.b),
            pvk.gamma_g2_neg.clone(),
            pvk.delta_g2_neg.clone(),
        ],
    );
    Ok(<F::Engine as Pairing>::final_exponentiation(miller)
        .is_some_and(|out| out == pvk.alpha_g1_beta_g2))
}

fn accumulate_inputs<F: CurveFamily>(
    ic: &[G1Affine<F>],
    inputs: &[ScalarField<F>],
) -> ZkpResult<G1Affine<F>> {
    let (first, rest) = ic
        .split_first()
        .ok_or(ZkpError::MalformedEncoding("verifying key has no IC terms"))?;
    if rest.len() != inputs.len() {
        return Err(ZkpError::MalformedEncoding(
            "input count does not match verifying key",
        ));
    }
    let mut acc = first.into_group();
    for (base, scalar) in rest.iter().zip(inputs) {
        acc += base.mul_bigint(scalar.into_bigint());
    }
    Ok(acc.into_affine())
}
