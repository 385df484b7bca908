// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! In-memory tree holding every leaf. Builds fixtures and cross-checks the
//! path-only accumulator; nothing is persisted.

use zkp_pedersen::PedersenFamily;
use zkp_types::{ScalarField, ZkpError, ZkpResult};

use crate::accumulator::PedersenAccumulator;
use crate::config::AccumulatorConfig;
use crate::path::MerklePath;

pub struct SparseMerkleTree<F: PedersenFamily> {
    acc: PedersenAccumulator<F>,
    leaves: Vec<ScalarField<F>>,
}

impl<F: PedersenFamily> SparseMerkleTree<F> {
    pub fn new(config: AccumulatorConfig) -> ZkpResult<Self> {
        Ok(Self {
            acc: PedersenAccumulator::new(config)?,
            leaves: Vec::new(),
        })
    }

    pub fn accumulator(&self) -> &PedersenAccumulator<F> {
        &self.acc
    }

    pub fn insert(&mut self, leaf: ScalarField<F>) -> ZkpResult<u64> {
        let idx = self.next_index();
        if idx >= self.acc.config().capacity() {
            return Err(ZkpError::IndexOutOfRange {
                index: idx,
                depth: self.acc.depth(),
            });
        }
        self.leaves.push(leaf);
        Ok(idx)
    }

    pub fn next_index(&self) -> u64 {
        self.leaves.len() as u64
    }

    pub fn leaves(&self) -> &[ScalarField<F>] {
        &self.leaves
    }

    pub fn root(&self) -> ZkpResult<ScalarField<F>> {
        if self.leaves.is_empty() {
            return Ok(self.acc.empty_root());
        }
        let mut layer = self.leaves.clone();
        for level in 0..self.acc.depth() {
            layer = self.next_layer(&layer, level)?;
        }
        Ok(layer[0])
    }

    /// Path of any slot, occupied or not.
    pub fn path(&self, index: u64) -> ZkpResult<MerklePath<F>> {
        if index >= self.acc.config().capacity() {
            return Err(ZkpError::IndexOutOfRange {
                index,
                depth: self.acc.depth(),
            });
        }
        let mut siblings = Vec::with_capacity(self.acc.depth());
        let mut layer = self.leaves.clone();
        let mut idx = index;

        for level in 0..self.acc.depth() {
            let sibling_idx = idx ^ 1;
            let sibling = usize::try_from(sibling_idx)
                .ok()
                .and_then(|i| layer.get(i).copied())
                .unwrap_or(self.acc.defaults()[level]);
            siblings.push(sibling);

            layer = self.next_layer(&layer, level)?;
            idx /= 2;
        }

        Ok(MerklePath::new(siblings, index))
    }

    /// Path of the first empty slot, the starting point for `append`.
    pub fn next_path(&self) -> ZkpResult<MerklePath<F>> {
        self.path(self.next_index())
    }

    fn next_layer(&self, layer: &[ScalarField<F>], level: usize) -> ZkpResult<Vec<ScalarField<F>>> {
        let zero = self.acc.defaults()[level];
        let mut next = Vec::with_capacity((layer.len() + 1) / 2);
        let mut i = 0;
        while i < layer.len() {
            let left = layer[i];
            let right = if i + 1 < layer.len() { layer[i + 1] } else { zero };
            next.push(self.acc.compress(&left, &right, level)?);
            i += 2;
        }
        Ok(next)
    }
}
