// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Compressed big-endian encoding of short-Weierstrass points.
//!
//! A point is written as its x-coordinate (see [`crate::field`]) with flag
//! bits packed into the unused top bits of the first byte. Which bit means
//! what differs per curve family and is described by [`PointFlags`].
//!
//! Decoding enforces, in order: exact length, compression marker, canonical
//! infinity, canonical x, curve membership, subgroup membership.

use ark_ec::short_weierstrass::{Affine, SWCurveConfig};
use ark_ec::AffineRepr;

use crate::error::{ZkpError, ZkpResult};
use crate::field::{coordinate_byte_len, read_coordinate_be, write_coordinate_be};

/// Flag bits carried in the first byte of an encoded point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PointFlags {
    /// Bit that must be set on every encoding, if the format has one.
    pub compressed: Option<u8>,
    pub infinity: u8,
    /// Set when y is the larger of `{y, -y}`.
    pub largest_y: u8,
}

impl PointFlags {
    fn mask(&self) -> u8 {
        self.compressed.unwrap_or(0) | self.infinity | self.largest_y
    }
}

pub fn point_byte_len<P: SWCurveConfig>() -> usize {
    coordinate_byte_len::<P::BaseField>()
}

pub fn read_point<P: SWCurveConfig>(bytes: &[u8], flags: PointFlags) -> ZkpResult<Affine<P>> {
    if bytes.len() != point_byte_len::<P>() {
        return Err(ZkpError::MalformedEncoding("point has wrong length"));
    }
    let tag = bytes[0];
    if let Some(bit) = flags.compressed {
        if tag & bit == 0 {
            return Err(ZkpError::MalformedEncoding("point is not marked compressed"));
        }
    }

    let mut x_bytes = bytes.to_vec();
    x_bytes[0] &= !flags.mask();

    if tag & flags.infinity != 0 {
        if tag & flags.largest_y != 0 || x_bytes.iter().any(|b| *b != 0) {
            return Err(ZkpError::MalformedEncoding("non-canonical point at infinity"));
        }
        return Ok(Affine::<P>::zero());
    }

    let x = read_coordinate_be::<P::BaseField>(&x_bytes)?;
    let point = Affine::<P>::get_point_from_x_unchecked(x, tag & flags.largest_y != 0)
        .ok_or(ZkpError::PointNotOnCurve)?;
    if !point.is_in_correct_subgroup_assuming_on_curve() {
        return Err(ZkpError::PointNotInSubgroup);
    }
    Ok(point)
}

pub fn write_point<P: SWCurveConfig>(point: &Affine<P>, flags: PointFlags, out: &mut Vec<u8>) {
    let start = out.len();
    match point.xy() {
        None => {
            out.resize(start + point_byte_len::<P>(), 0);
            out[start] |= flags.infinity;
        }
        Some((x, y)) => {
            write_coordinate_be(&x, out);
            if y > -y {
                out[start] |= flags.largest_y;
            }
        }
    }
    if let Some(bit) = flags.compressed {
        out[start] |= bit;
    }
}

pub fn encode_point<P: SWCurveConfig>(point: &Affine<P>, flags: PointFlags) -> Vec<u8> {
    let mut out = Vec::with_capacity(point_byte_len::<P>());
    write_point(point, flags, &mut out);
    out
}
