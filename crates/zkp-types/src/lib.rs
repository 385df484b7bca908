// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! zkp-types: field and point codecs, curve families and the shared error
//! type for the Groth16 verifier and the Pedersen Merkle accumulator.

pub mod error;
pub mod family;
pub mod field;
pub mod point;

pub use error::{ZkpError, ZkpResult};
pub use family::{Bls12, Bn256, Curve, CurveFamily, EdwardsAffine, G1Affine, G2Affine, ScalarField};
pub use field::{
    checked_inverse, field_byte_len, read_field_be, read_scalars_be, to_bits_le, write_field_be,
    write_scalars_be,
};
pub use point::{encode_point, point_byte_len, read_point, write_point, PointFlags};

/// Width of an encoded scalar (public input or Merkle node) for both families.
pub const SCALAR_BYTES: usize = 32;
