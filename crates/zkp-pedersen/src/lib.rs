// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Sapling-style Pedersen hash over Jubjub (BLS12-381) and Baby Jubjub
//! (BN254), used as the node combiner of the Merkle accumulator.

pub mod group_hash;
pub mod hasher;
pub mod personalization;

pub use group_hash::{find_group_hash, group_hash, GENERATOR_PERSONALIZATION};
pub use hasher::{window_is_injective, PedersenFamily, PedersenHasher, GENERATOR_COUNT};
pub use personalization::Personalization;

use zkp_types::{ScalarField, ZkpResult};

/// `compress` through the family's shared generator table.
pub fn compress<F: PedersenFamily>(
    left: &ScalarField<F>,
    right: &ScalarField<F>,
    level: usize,
) -> ZkpResult<ScalarField<F>> {
    F::shared_hasher()?.compress(left, right, level)
}
