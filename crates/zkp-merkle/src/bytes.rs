// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Byte-level entry points: 32-byte big-endian nodes, siblings leaf level
//! first. Both families, compile-time or runtime selected.

use zkp_pedersen::PedersenFamily;
use zkp_types::{read_field_be, read_scalars_be, write_field_be, Bls12, Bn256, Curve, ZkpResult};

use crate::accumulator::{AccumulatorFamily, PedersenAccumulator};
use crate::config::AccumulatorConfig;
use crate::path::MerklePath;

impl<F: PedersenFamily> PedersenAccumulator<F> {
    /// `add_item` over encoded nodes. The root is decoded, so it must be a
    /// canonical node, but its value is not used.
    pub fn add_item_bytes(&self, root: &[u8], siblings: &[u8], index: u64, leaf: &[u8]) -> ZkpResult<Vec<u8>> {
        let root = read_field_be(root)?;
        let path = MerklePath::<F>::decode(siblings, index)?;
        let leaf = read_field_be(leaf)?;
        let new_root = self.add_item(&root, &path, &leaf)?;

        let mut out = Vec::with_capacity(leaf_len());
        write_field_be(&new_root, &mut out);
        Ok(out)
    }

    /// `append` over encoded nodes, returning `root ‖ siblings`.
    pub fn append_bytes(&self, root: &[u8], siblings: &[u8], index: u64, leaves: &[u8]) -> ZkpResult<Vec<u8>> {
        let root = read_field_be(root)?;
        let path = MerklePath::<F>::decode(siblings, index)?;
        let leaves = read_scalars_be(leaves)?;
        let (new_root, next) = self.append(&root, &path, &leaves)?;

        let mut out = Vec::with_capacity((next.depth() + 1) * leaf_len());
        write_field_be(&new_root, &mut out);
        out.extend_from_slice(&next.encode_siblings());
        Ok(out)
    }

    pub fn empty_root_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(leaf_len());
        write_field_be(&self.empty_root(), &mut out);
        out
    }
}

fn leaf_len() -> usize {
    zkp_types::SCALAR_BYTES
}

/// New root after writing `leaf`, at the default depth.
pub fn add_item_bytes<F: AccumulatorFamily>(root: &[u8], siblings: &[u8], index: u64, leaf: &[u8]) -> ZkpResult<Vec<u8>> {
    F::default_accumulator()?.add_item_bytes(root, siblings, index, leaf)
}

/// `root ‖ path` after appending `leaves`, at the default depth.
pub fn append_bytes<F: AccumulatorFamily>(root: &[u8], siblings: &[u8], index: u64, leaves: &[u8]) -> ZkpResult<Vec<u8>> {
    F::default_accumulator()?.append_bytes(root, siblings, index, leaves)
}

/// One accumulator per family, picked at runtime.
pub enum AnyAccumulator {
    Bls12(PedersenAccumulator<Bls12>),
    Bn256(PedersenAccumulator<Bn256>),
}

impl AnyAccumulator {
    pub fn new(curve: Curve, config: AccumulatorConfig) -> ZkpResult<Self> {
        Ok(match curve {
            Curve::Bls12381 => AnyAccumulator::Bls12(PedersenAccumulator::new(config)?),
            Curve::Bn254 => AnyAccumulator::Bn256(PedersenAccumulator::new(config)?),
        })
    }

    pub fn curve(&self) -> Curve {
        match self {
            AnyAccumulator::Bls12(_) => Curve::Bls12381,
            AnyAccumulator::Bn256(_) => Curve::Bn254,
        }
    }

    pub fn add_item(&self, root: &[u8], siblings: &[u8], index: u64, leaf: &[u8]) -> ZkpResult<Vec<u8>> {
        match self {
            AnyAccumulator::Bls12(acc) => acc.add_item_bytes(root, siblings, index, leaf),
            AnyAccumulator::Bn256(acc) => acc.add_item_bytes(root, siblings, index, leaf),
        }
    }

    pub fn append(&self, root: &[u8], siblings: &[u8], index: u64, leaves: &[u8]) -> ZkpResult<Vec<u8>> {
        match self {
            AnyAccumulator::Bls12(acc) => acc.append_bytes(root, siblings, index, leaves),
            AnyAccumulator::Bn256(acc) => acc.append_bytes(root, siblings, index, leaves),
        }
    }

    pub fn empty_root(&self) -> Vec<u8> {
        match self {
            AnyAccumulator::Bls12(acc) => acc.empty_root_bytes(),
            AnyAccumulator::Bn256(acc) => acc.empty_root_bytes(),
        }
    }

    /// Encoded `compress(left, right, level)`.
    pub fn compress(&self, left: &[u8], right: &[u8], level: usize) -> ZkpResult<Vec<u8>> {
        fn run<F: PedersenFamily>(
            acc: &PedersenAccumulator<F>,
            left: &[u8],
            right: &[u8],
            level: usize,
        ) -> ZkpResult<Vec<u8>> {
            let node = acc.compress(&read_field_be(left)?, &read_field_be(right)?, level)?;
            let mut out = Vec::with_capacity(leaf_len());
            write_field_be(&node, &mut out);
            Ok(out)
        }
        match self {
            AnyAccumulator::Bls12(acc) => run(acc, left, right, level),
            AnyAccumulator::Bn256(acc) => run(acc, left, right, level),
        }
    }
}
