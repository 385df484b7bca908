// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Windowed Pedersen hash.
//!
//! Input bits are consumed in 3-bit chunks `(a, b, c)`. The `k`-th chunk of
//! a segment contributes `(1 + a + 2b)·(−1)^c·16^k` to that segment's scalar,
//! a segment holds [`PedersenFamily::CHUNKS_PER_GENERATOR`] chunks, and
//! segment `j` multiplies generator `j`:
//!
//! ```text
//! H(bits) = Σ_j [Σ_k enc(chunk_jk)·16^k]·G_j
//! ```
//!
//! The encoding is injective only while every segment scalar stays below
//! half the embedded group order. Jubjub fits 63 chunks; Baby Jubjub's
//! smaller order fits 62.

use std::sync::OnceLock;

use ark_ec::twisted_edwards::Projective;
use ark_ec::{AffineRepr, CurveConfig, CurveGroup};
use ark_ff::{AdditiveGroup, BigInteger, Field, PrimeField, Zero};
use tracing::debug;
use zkp_types::{to_bits_le, Bls12, Bn256, CurveFamily, EdwardsAffine, ScalarField, ZkpError, ZkpResult};

use crate::group_hash::{find_group_hash, GENERATOR_PERSONALIZATION};
use crate::personalization::Personalization;

pub const GENERATOR_COUNT: usize = 6;
const CHUNK_BITS: usize = 3;

type EmbeddedScalar<F> = <<F as CurveFamily>::EmbeddedConfig as CurveConfig>::ScalarField;
type EmbeddedBigInt<F> = <EmbeddedScalar<F> as PrimeField>::BigInt;

/// Whether `chunks` chunks per segment keep `2·max|segment scalar|` below
/// the order of `F`'s embedded group.
pub fn window_is_injective<F: CurveFamily>(chunks: usize) -> bool {
    let capacity = 64 * <EmbeddedBigInt<F> as BigInteger>::NUM_LIMBS as u32;
    let eight = EmbeddedBigInt::<F>::from(8u64);

    // 2·Σ_k 4·16^k = Σ_k 8·16^k, top digit first.
    let mut doubled = EmbeddedBigInt::<F>::from(0u64);
    for _ in 0..chunks {
        if doubled.num_bits() + 4 > capacity {
            return false;
        }
        doubled <<= 4;
        if doubled.add_with_carry(&eight) {
            return false;
        }
    }
    doubled < EmbeddedScalar::<F>::MODULUS
}

#[derive(Clone, Debug)]
pub struct PedersenHasher<F: PedersenFamily> {
    generators: Vec<EdwardsAffine<F>>,
    chunks_per_generator: usize,
}

impl<F: PedersenFamily> PedersenHasher<F> {
    /// Derive the generator table. Prefer [`PedersenFamily::shared_hasher`],
    /// which does this once per process.
    pub fn new() -> ZkpResult<Self> {
        Self::with_window(F::CHUNKS_PER_GENERATOR)
    }

    fn with_window(chunks: usize) -> ZkpResult<Self> {
        if !window_is_injective::<F>(chunks) {
            return Err(ZkpError::WindowTooWide { chunks });
        }
        Self::derive(chunks)
    }

    fn derive(chunks_per_generator: usize) -> ZkpResult<Self> {
        let generators = (0..GENERATOR_COUNT as u32)
            .map(|m| find_group_hash::<F::EmbeddedConfig>(&m.to_le_bytes(), GENERATOR_PERSONALIZATION))
            .collect::<ZkpResult<Vec<_>>>()?;
        debug!(
            curve = %F::CURVE,
            count = generators.len(),
            chunks = chunks_per_generator,
            "derived pedersen generators"
        );
        Ok(Self {
            generators,
            chunks_per_generator,
        })
    }

    pub fn generators(&self) -> &[EdwardsAffine<F>] {
        &self.generators
    }

    /// Input capacity after the personalization prefix.
    pub fn max_input_bits(&self) -> usize {
        self.generators.len() * self.chunks_per_generator * CHUNK_BITS - Personalization::BITS
    }

    pub fn hash_to_point<I>(&self, personalization: Personalization, input: I) -> ZkpResult<EdwardsAffine<F>>
    where
        I: IntoIterator<Item = bool>,
    {
        let mut bits = personalization.bits().into_iter().chain(input).peekable();
        let mut generators = self.generators.iter();
        let mut result = Projective::<F::EmbeddedConfig>::zero();

        while bits.peek().is_some() {
            let mut acc = EmbeddedScalar::<F>::ZERO;
            let mut cur = EmbeddedScalar::<F>::ONE;

            for _ in 0..self.chunks_per_generator {
                let Some(a) = bits.next() else { break };
                let b = bits.next().unwrap_or(false);
                let c = bits.next().unwrap_or(false);

                let mut chunk = cur;
                if a {
                    chunk += cur;
                }
                cur.double_in_place();
                if b {
                    chunk += cur;
                }
                if c {
                    chunk = -chunk;
                }
                acc += chunk;

                cur.double_in_place().double_in_place().double_in_place();
            }

            let generator = generators.next().ok_or(ZkpError::InputTooLong {
                max_bits: self.max_input_bits(),
            })?;
            result += generator.mul_bigint(acc.into_bigint());
        }

        Ok(result.into_affine())
    }

    /// x-coordinate of [`Self::hash_to_point`].
    pub fn hash_bits<I>(&self, personalization: Personalization, input: I) -> ZkpResult<ScalarField<F>>
    where
        I: IntoIterator<Item = bool>,
    {
        Ok(self.hash_to_point(personalization, input)?.x)
    }

    /// Note commitment of a single scalar.
    pub fn hash(&self, value: &ScalarField<F>) -> ZkpResult<ScalarField<F>> {
        self.hash_bits(Personalization::NoteCommitment, to_bits_le(value))
    }

    /// Merkle node combiner: `x(H(MerkleTree(level) ‖ left ‖ right))`.
    pub fn compress(
        &self,
        left: &ScalarField<F>,
        right: &ScalarField<F>,
        level: usize,
    ) -> ZkpResult<ScalarField<F>> {
        let bits = to_bits_le(left).into_iter().chain(to_bits_le(right));
        self.hash_bits(Personalization::MerkleTree(level), bits)
    }
}

/// Families with a process-wide generator table.
pub trait PedersenFamily: CurveFamily {
    /// Chunks per segment, the widest window [`window_is_injective`] allows.
    const CHUNKS_PER_GENERATOR: usize;

    fn shared_hasher() -> ZkpResult<&'static PedersenHasher<Self>>;
}

macro_rules! impl_pedersen_family {
    ($family:ty, $chunks:expr) => {
        impl PedersenFamily for $family {
            const CHUNKS_PER_GENERATOR: usize = $chunks;

            fn shared_hasher() -> ZkpResult<&'static PedersenHasher<Self>> {
                static HASHER: OnceLock<PedersenHasher<$family>> = OnceLock::new();
                if let Some(hasher) = HASHER.get() {
                    return Ok(hasher);
                }
                let hasher = PedersenHasher::new()?;
                Ok(HASHER.get_or_init(|| hasher))
            }
        }
    };
}

impl_pedersen_family!(Bls12, 63);
impl_pedersen_family!(Bn256, 62);

#[cfg(test)]
mod tests {
    use super::*;
    use ark_ff::UniformRand;
    use ark_std::test_rng;

    type Fr = ark_bls12_381::Fr;

    fn hasher() -> &'static PedersenHasher<Bls12> {
        Bls12::shared_hasher().unwrap()
    }

    #[test]
    fn test_generators_are_distinct_subgroup_points() {
        let gens = hasher().generators();
        assert_eq!(gens.len(), GENERATOR_COUNT);
        for (i, g) in gens.iter().enumerate() {
            assert!(!g.is_zero());
            assert!(g.is_in_correct_subgroup_assuming_on_curve());
            for h in &gens[i + 1..] {
                assert_ne!(g, h);
            }
        }
    }

    #[test]
    fn test_shared_hasher_is_cached() {
        let a = Bls12::shared_hasher().unwrap() as *const _;
        let b = Bls12::shared_hasher().unwrap() as *const _;
        assert_eq!(a, b);
    }

    #[test]
    fn test_compress_deterministic() {
        let mut rng = test_rng();
        let a = Fr::rand(&mut rng);
        let b = Fr::rand(&mut rng);
        assert_eq!(hasher().compress(&a, &b, 3).unwrap(), hasher().compress(&a, &b, 3).unwrap());
    }

    #[test]
    fn test_compress_order_matters() {
        let mut rng = test_rng();
        let a = Fr::rand(&mut rng);
        let b = Fr::rand(&mut rng);
        assert_ne!(hasher().compress(&a, &b, 0).unwrap(), hasher().compress(&b, &a, 0).unwrap());
    }

    #[test]
    fn test_level_separates_domains() {
        let a = Fr::from(1u64);
        let b = Fr::from(2u64);
        assert_ne!(hasher().compress(&a, &b, 0).unwrap(), hasher().compress(&a, &b, 1).unwrap());
        assert_ne!(hasher().hash(&a).unwrap(), hasher().compress(&a, &Fr::zero(), 0).unwrap());
    }

    #[test]
    fn test_empty_input_hashes_personalization_only() {
        // 000000: one chunk of value 1 twice, so 1·G0 + 1·16·G0.
        let point = hasher()
            .hash_to_point(Personalization::MerkleTree(0), core::iter::empty())
            .unwrap();
        let g0 = hasher().generators()[0];
        let expected = (g0.into_group() * EmbeddedScalar::<Bls12>::from(17u64)).into_affine();
        assert_eq!(point, expected);
    }

    #[test]
    fn test_input_too_long() {
        let h = hasher();
        let max = h.max_input_bits();
        assert!(h.hash_bits(Personalization::NoteCommitment, vec![true; max]).is_ok());
        assert_eq!(
            h.hash_bits(Personalization::NoteCommitment, vec![true; max + 1]),
            Err(ZkpError::InputTooLong { max_bits: max })
        );
    }

    #[test]
    fn test_window_fits_each_embedded_order() {
        assert!(window_is_injective::<Bls12>(Bls12::CHUNKS_PER_GENERATOR));
        assert!(!window_is_injective::<Bls12>(Bls12::CHUNKS_PER_GENERATOR + 1));
        assert!(window_is_injective::<Bn256>(Bn256::CHUNKS_PER_GENERATOR));
        assert!(!window_is_injective::<Bn256>(Bn256::CHUNKS_PER_GENERATOR + 1));
        assert!(!window_is_injective::<Bn256>(1000));
        assert_eq!(
            PedersenHasher::<Bn256>::with_window(63).unwrap_err(),
            ZkpError::WindowTooWide { chunks: 63 }
        );
    }

    fn bn_node(hex_str: &str) -> ark_bn254::Fr {
        zkp_types::read_field_be(&hex::decode(hex_str).unwrap()).unwrap()
    }

    // Under a 63-chunk window the second segments of these two inputs differ
    // by exactly the Baby Jubjub subgroup order.
    const BABY_JUBJUB_WIDE_PAIR: [(&str, &str); 2] = [
        (
            "2d0d8b36ce621ce35a7510340ed4d50f7322b48e3e7a2090df39a01f73926f99",
            "2e3af78eac1da9f9a70dc58b1a025c6a434cff4eb224171af3e76ce6d9f0d746",
        ),
        (
            "0784055da3e95669f6f510340ed4d50f7322b48e3e7a2090df39a01f73926f99",
            "2e3af78eac1da9f9a70dc58b1a025c6a437d891b80f319f1351c2ff1640eb23f",
        ),
    ];

    #[test]
    fn test_baby_jubjub_window_separates_order_shifted_inputs() {
        let [(la, ra), (lb, rb)] = BABY_JUBJUB_WIDE_PAIR.map(|(l, r)| (bn_node(l), bn_node(r)));
        assert!(la != lb && ra != rb);

        let wide = PedersenHasher::<Bn256>::derive(63).unwrap();
        assert_eq!(wide.compress(&la, &ra, 0).unwrap(), wide.compress(&lb, &rb, 0).unwrap());

        let h = Bn256::shared_hasher().unwrap();
        assert_ne!(h.compress(&la, &ra, 0).unwrap(), h.compress(&lb, &rb, 0).unwrap());
    }

    #[test]
    fn test_bn256_compress_is_defined() {
        let h = Bn256::shared_hasher().unwrap();
        let a = ark_bn254::Fr::from(7u64);
        let b = ark_bn254::Fr::from(11u64);
        assert_ne!(h.compress(&a, &b, 0).unwrap(), h.compress(&b, &a, 0).unwrap());
    }
}
