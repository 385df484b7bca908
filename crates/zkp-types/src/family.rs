// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Curve families: one pairing-friendly curve plus the twisted-Edwards curve
//! built over its scalar field.
//!
//! | Family | Pairing | G1 / G2 bytes | Embedded curve |
//! |---|---|---|---|
//! | [`Bls12`] | BLS12-381 | 48 / 96 | Jubjub |
//! | [`Bn256`] | BN254 | 32 / 64 | Baby Jubjub |
//!
//! Everything above this crate is generic over [`CurveFamily`]; [`Curve`] is
//! the runtime tag front ends parse from user input.

use core::fmt::{self, Debug};
use core::str::FromStr;

use ark_ec::pairing::Pairing;
use ark_ec::short_weierstrass::{Affine, SWCurveConfig};
use ark_ec::twisted_edwards::{self, TECurveConfig};
use ark_ec::AffineRepr;
use ark_ff::PrimeField;
use serde::{Deserialize, Serialize};

use crate::error::ZkpError;
use crate::point::PointFlags;

pub trait CurveFamily:
    Copy + Clone + Debug + Default + PartialEq + Eq + Send + Sync + 'static
{
    const CURVE: Curve;
    const FLAGS: PointFlags;

    /// Scalar field of G1, G2 and the pairing; base field of the embedded curve.
    type Fr: PrimeField;
    type G1Config: SWCurveConfig<ScalarField = Self::Fr>;
    type G2Config: SWCurveConfig<ScalarField = Self::Fr>;
    type Engine: Pairing<
        ScalarField = Self::Fr,
        G1Affine = Affine<Self::G1Config>,
        G2Affine = Affine<Self::G2Config>,
    >;
    type EmbeddedConfig: TECurveConfig<BaseField = Self::Fr>;
}

pub type G1Affine<F> = Affine<<F as CurveFamily>::G1Config>;
pub type G2Affine<F> = Affine<<F as CurveFamily>::G2Config>;
pub type ScalarField<F> = <F as CurveFamily>::Fr;
pub type EdwardsAffine<F> = twisted_edwards::Affine<<F as CurveFamily>::EmbeddedConfig>;

/// Family A: BLS12-381 with zcash-style point flags, Jubjub.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Bls12;

impl CurveFamily for Bls12 {
    const CURVE: Curve = Curve::Bls12381;
    const FLAGS: PointFlags = PointFlags {
        compressed: Some(0x80),
        infinity: 0x40,
        largest_y: 0x20,
    };

    type Fr = ark_bls12_381::Fr;
    type G1Config = ark_bls12_381::g1::Config;
    type G2Config = ark_bls12_381::g2::Config;
    type Engine = ark_bls12_381::Bls12_381;
    type EmbeddedConfig = <ark_ed_on_bls12_381::EdwardsAffine as AffineRepr>::Config;
}

/// Family B: BN254 with two flag bits and no compression marker, Baby Jubjub.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Bn256;

impl CurveFamily for Bn256 {
    const CURVE: Curve = Curve::Bn254;
    const FLAGS: PointFlags = PointFlags {
        compressed: None,
        infinity: 0x40,
        largest_y: 0x80,
    };

    type Fr = ark_bn254::Fr;
    type G1Config = ark_bn254::g1::Config;
    type G2Config = ark_bn254::g2::Config;
    type Engine = ark_bn254::Bn254;
    type EmbeddedConfig = <ark_ed_on_bn254::EdwardsAffine as AffineRepr>::Config;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Curve {
    #[serde(rename = "bls12-381")]
    Bls12381,
    #[serde(rename = "bn254")]
    Bn254,
}

impl Curve {
    pub const ALL: [Curve; 2] = [Curve::Bls12381, Curve::Bn254];

    pub fn name(&self) -> &'static str {
        match self {
            Curve::Bls12381 => "bls12-381",
            Curve::Bn254 => "bn254",
        }
    }
}

impl fmt::Display for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Curve {
    type Err = ZkpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bls12-381" | "bls12_381" | "bls12" | "a" => Ok(Curve::Bls12381),
            "bn254" | "bn256" | "bn128" | "b" => Ok(Curve::Bn254),
            _ => Err(ZkpError::UnknownCurve(s.to_string())),
        }
    }
}
