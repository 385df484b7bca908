// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Type definitions and byte codecs for Groth16 verification

use ark_ec::pairing::{Pairing, PairingOutput};
use zkp_types::{
    encode_point, point_byte_len, read_point, read_scalars_be, write_point, write_scalars_be,
    CurveFamily, G1Affine, G2Affine, ScalarField, ZkpError, ZkpResult,
};

use crate::pairing::multi_pairing_product;

/// Groth16 verification key
///
/// IC is a unified vector: ic[0] is the constant term, ic[1..] are
/// coefficients for public inputs.
///
/// Wire layout: `alpha_g1 ‖ beta_g2 ‖ gamma_g2 ‖ delta_g2 ‖ ic[0] ‖ … ‖ ic[n]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerificationKey<F: CurveFamily> {
    pub alpha_g1: G1Affine<F>,
    pub beta_g2: G2Affine<F>,
    pub gamma_g2: G2Affine<F>,
    pub delta_g2: G2Affine<F>,
    /// IC[0..n] in G1, never empty once decoded
    pub ic: Vec<G1Affine<F>>,
}

/// Groth16 proof, wire layout `A ‖ B ‖ C`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Proof<F: CurveFamily> {
    pub a: G1Affine<F>,
    pub b: G2Affine<F>,
    pub c: G1Affine<F>,
}

/// Key with `e(alpha, beta)` precomputed and `-gamma`, `-delta` prepared for
/// the Miller loop.
#[derive(Clone, Debug)]
pub struct PreparedVerificationKey<F: CurveFamily> {
    pub alpha_g1_beta_g2: PairingOutput<F::Engine>,
    pub gamma_g2_neg: <F::Engine as Pairing>::G2Prepared,
    pub delta_g2_neg: <F::Engine as Pairing>::G2Prepared,
    pub ic: Vec<G1Affine<F>>,
}

fn g1_len<F: CurveFamily>() -> usize {
    point_byte_len::<F::G1Config>()
}

fn g2_len<F: CurveFamily>() -> usize {
    point_byte_len::<F::G2Config>()
}

impl<F: CurveFamily> VerificationKey<F> {
    /// Encoded size of a key for `num_inputs` public inputs.
    pub fn byte_len(num_inputs: usize) -> usize {
        g1_len::<F>() * (num_inputs + 2) + 3 * g2_len::<F>()
    }

    pub fn num_inputs(&self) -> usize {
        self.ic.len().saturating_sub(1)
    }

    /// Decode a key, inferring the input count from the length.
    pub fn decode(bytes: &[u8]) -> ZkpResult<Self> {
        let fixed = Self::byte_len(0);
        if bytes.len() < fixed || (bytes.len() - fixed) % g1_len::<F>() != 0 {
            return Err(ZkpError::MalformedEncoding("verifying key has wrong length"));
        }
        let (g1, g2) = (g1_len::<F>(), g2_len::<F>());

        let (alpha, rest) = bytes.split_at(g1);
        let (beta, rest) = rest.split_at(g2);
        let (gamma, rest) = rest.split_at(g2);
        let (delta, rest) = rest.split_at(g2);

        let ic = rest
            .chunks(g1)
            .map(|chunk| read_point::<F::G1Config>(chunk, F::FLAGS))
            .collect::<ZkpResult<Vec<_>>>()?;

        Ok(Self {
            alpha_g1: read_point(alpha, F::FLAGS)?,
            beta_g2: read_point(beta, F::FLAGS)?,
            gamma_g2: read_point(gamma, F::FLAGS)?,
            delta_g2: read_point(delta, F::FLAGS)?,
            ic,
        })
    }

    /// Decode a key that must carry exactly `num_inputs` input coefficients.
    pub fn decode_for_inputs(bytes: &[u8], num_inputs: usize) -> ZkpResult<Self> {
        if bytes.len() != Self::byte_len(num_inputs) {
            return Err(ZkpError::MalformedEncoding(
                "verifying key length does not match input count",
            ));
        }
        Self::decode(bytes)
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(Self::byte_len(self.num_inputs()));
        write_point(&self.alpha_g1, F::FLAGS, &mut out);
        write_point(&self.beta_g2, F::FLAGS, &mut out);
        write_point(&self.gamma_g2, F::FLAGS, &mut out);
        write_point(&self.delta_g2, F::FLAGS, &mut out);
        for point in &self.ic {
            write_point(point, F::FLAGS, &mut out);
        }
        out
    }

    pub fn prepare(&self) -> ZkpResult<PreparedVerificationKey<F>> {
        let alpha_g1_beta_g2 = multi_pairing_product::<F::Engine>(&[self.alpha_g1], &[self.beta_g2])
            .ok_or(ZkpError::MalformedEncoding("degenerate alpha/beta pairing"))?;
        Ok(PreparedVerificationKey {
            alpha_g1_beta_g2,
            gamma_g2_neg: (-self.gamma_g2).into(),
            delta_g2_neg: (-self.delta_g2).into(),
            ic: self.ic.clone(),
        })
    }
}

impl<F: CurveFamily> Proof<F> {
    pub fn byte_len() -> usize {
        2 * g1_len::<F>() + g2_len::<F>()
    }

    pub fn decode(bytes: &[u8]) -> ZkpResult<Self> {
        if bytes.len() != Self::byte_len() {
            return Err(ZkpError::MalformedEncoding("proof has wrong length"));
        }
        let (a, rest) = bytes.split_at(g1_len::<F>());
        let (b, c) = rest.split_at(g2_len::<F>());
        Ok(Self {
            a: read_point(a, F::FLAGS)?,
            b: read_point(b, F::FLAGS)?,
            c: read_point(c, F::FLAGS)?,
        })
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut out = encode_point(&self.a, F::FLAGS);
        write_point(&self.b, F::FLAGS, &mut out);
        write_point(&self.c, F::FLAGS, &mut out);
        out
    }
}

/// Public inputs: concatenated 32-byte big-endian scalars.
pub fn decode_inputs<F: CurveFamily>(bytes: &[u8]) -> ZkpResult<Vec<ScalarField<F>>> {
    read_scalars_be(bytes)
}

pub fn encode_inputs<F: CurveFamily>(inputs: &[ScalarField<F>]) -> Vec<u8> {
    write_scalars_be(inputs)
}

impl<F: CurveFamily> From<&ark_groth16::VerifyingKey<F::Engine>> for VerificationKey<F> {
    fn from(vk: &ark_groth16::VerifyingKey<F::Engine>) -> Self {
        Self {
            alpha_g1: vk.alpha_g1,
            beta_g2: vk.beta_g2,
            gamma_g2: vk.gamma_g2,
            delta_g2: vk.delta_g2,
            ic: vk.gamma_abc_g1.clone(),
        }
    }
}

impl<F: CurveFamily> From<&ark_groth16::Proof<F::Engine>> for Proof<F> {
    fn from(proof: &ark_groth16::Proof<F::Engine>) -> Self {
        Self {
            a: proof.a,
            b: proof.b,
            c: proof.c,
        }
    }
}
