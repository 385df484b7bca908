// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Append-only Merkle accumulator keyed by the Pedersen hash.
//!
//! Nodes are combined with `compress(left, right, level)`, so every level
//! hashes under its own personalization. Empty slots hold zero and empty
//! subtrees hold the matching entry of [`PedersenAccumulator::defaults`].
//!
//! | Operation | Checks root | Result |
//! |---|---|---|
//! | [`add_item`](PedersenAccumulator::add_item) | no | new root |
//! | [`append`](PedersenAccumulator::append) | yes | new root and path of the next free slot |

use std::sync::OnceLock;

use ark_ff::AdditiveGroup;
use tracing::trace;
use zkp_pedersen::{PedersenFamily, PedersenHasher};
use zkp_types::{Bls12, Bn256, ScalarField, ZkpError, ZkpResult};

use crate::config::AccumulatorConfig;
use crate::path::MerklePath;

pub struct PedersenAccumulator<F: PedersenFamily> {
    config: AccumulatorConfig,
    hasher: &'static PedersenHasher<F>,
    defaults: Vec<ScalarField<F>>,
}

impl<F: PedersenFamily> PedersenAccumulator<F> {
    pub fn new(config: AccumulatorConfig) -> ZkpResult<Self> {
        config.validate()?;
        let hasher = F::shared_hasher()?;

        let mut defaults = Vec::with_capacity(config.depth + 1);
        defaults.push(ScalarField::<F>::ZERO);
        for level in 0..config.depth {
            let below = defaults[level];
            defaults.push(hasher.compress(&below, &below, level)?);
        }

        Ok(Self {
            config,
            hasher,
            defaults,
        })
    }

    pub fn config(&self) -> &AccumulatorConfig {
        &self.config
    }

    pub fn depth(&self) -> usize {
        self.config.depth
    }

    /// Root of an empty subtree per height: `defaults[0]` is the empty leaf,
    /// `defaults[depth]` the empty tree.
    pub fn defaults(&self) -> &[ScalarField<F>] {
        &self.defaults
    }

    pub fn empty_root(&self) -> ScalarField<F> {
        self.defaults[self.config.depth]
    }

    pub fn compress(
        &self,
        left: &ScalarField<F>,
        right: &ScalarField<F>,
        level: usize,
    ) -> ZkpResult<ScalarField<F>> {
        self.hasher.compress(left, right, level)
    }

    /// Hash `leaf` up along `path`.
    pub fn merkle_root(&self, path: &MerklePath<F>, leaf: &ScalarField<F>) -> ZkpResult<ScalarField<F>> {
        self.check_path(path)?;
        let mut node = *leaf;
        for (level, sibling) in path.siblings.iter().enumerate() {
            node = if path.is_right(level) {
                self.compress(sibling, &node, level)?
            } else {
                self.compress(&node, sibling, level)?
            };
        }
        Ok(node)
    }

    /// Root after writing `leaf` at `path.index`.
    ///
    /// The current root is not consulted and the path is trusted as given;
    /// use [`Self::append`] to have both checked.
    pub fn add_item(
        &self,
        _root: &ScalarField<F>,
        path: &MerklePath<F>,
        leaf: &ScalarField<F>,
    ) -> ZkpResult<ScalarField<F>> {
        trace!(curve = %F::CURVE, index = path.index, "add item");
        self.merkle_root(path, leaf)
    }

    /// Write `leaves` into consecutive slots starting at `path.index`.
    ///
    /// `path` must authenticate an empty slot under `root`. Returns the new
    /// root and the path of the slot right after the last written leaf.
    pub fn append(
        &self,
        root: &ScalarField<F>,
        path: &MerklePath<F>,
        leaves: &[ScalarField<F>],
    ) -> ZkpResult<(ScalarField<F>, MerklePath<F>)> {
        let empty = ScalarField::<F>::ZERO;
        if self.merkle_root(path, &empty)? != *root {
            return Err(ZkpError::RootMismatch);
        }

        let end = path.index + leaves.len() as u64;
        if end >= self.config.capacity() {
            return Err(ZkpError::IndexOutOfRange {
                index: end,
                depth: self.config.depth,
            });
        }
        if leaves.is_empty() {
            return Ok((*root, path.clone()));
        }

        let mut siblings = Vec::with_capacity(self.config.depth);
        let mut layer = leaves.to_vec();
        let mut start = path.index;

        for level in 0..self.config.depth {
            // Left edge: pull in the untouched left neighbour.
            if start & 1 == 1 {
                layer.insert(0, path.siblings[level]);
                start -= 1;
            }

            let sibling_pos = (((end >> level) ^ 1) - start) as usize;
            siblings.push(layer.get(sibling_pos).copied().unwrap_or(self.defaults[level]));

            if layer.len() % 2 == 1 {
                layer.push(self.defaults[level]);
            }
            layer = layer
                .chunks(2)
                .map(|pair| self.compress(&pair[0], &pair[1], level))
                .collect::<ZkpResult<Vec<_>>>()?;
            start >>= 1;
        }

        let next = MerklePath::new(siblings, end);
        let new_root = self.merkle_root(&next, &empty)?;
        trace!(curve = %F::CURVE, from = path.index, to = end, "appended leaves");
        Ok((new_root, next))
    }

    fn check_path(&self, path: &MerklePath<F>) -> ZkpResult<()> {
        if path.index >= self.config.capacity() {
            return Err(ZkpError::IndexOutOfRange {
                index: path.index,
                depth: self.config.depth,
            });
        }
        if path.depth() != self.config.depth {
            return Err(ZkpError::MalformedPath {
                expected: self.config.depth,
                actual: path.depth(),
            });
        }
        Ok(())
    }
}

/// Families with a process-wide accumulator at the default depth.
pub trait AccumulatorFamily: PedersenFamily {
    fn default_accumulator() -> ZkpResult<&'static PedersenAccumulator<Self>>;
}

macro_rules! impl_accumulator_family {
    ($family:ty) => {
        impl AccumulatorFamily for $family {
            fn default_accumulator() -> ZkpResult<&'static PedersenAccumulator<Self>> {
                static ACCUMULATOR: OnceLock<PedersenAccumulator<$family>> = OnceLock::new();
                if let Some(acc) = ACCUMULATOR.get() {
                    return Ok(acc);
                }
                let acc = PedersenAccumulator::new(AccumulatorConfig::default())?;
                Ok(ACCUMULATOR.get_or_init(|| acc))
            }
        }
    };
}

impl_accumulator_family!(Bls12);
impl_accumulator_family!(Bn256);
