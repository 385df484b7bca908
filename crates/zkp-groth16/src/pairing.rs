// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Multi-pairing products with a single final exponentiation.

use ark_ec::pairing::{Pairing, PairingOutput};
use ark_ff::Zero;

/// `∏ e(g1s[i], g2s[i])`, or `None` when the slices differ in length or the
/// Miller loop degenerates.
pub fn multi_pairing_product<E: Pairing>(
    g1s: &[E::G1Affine],
    g2s: &[E::G2Affine],
) -> Option<PairingOutput<E>> {
    if g1s.len() != g2s.len() {
        return None;
    }
    let miller = E::multi_miller_loop(g1s.iter().copied(), g2s.iter().copied());
    E::final_exponentiation(miller)
}

/// True iff the product equals the identity of the target group.
pub fn pairing_product_is_identity<E: Pairing>(g1s: &[E::G1Affine], g2s: &[E::G2Affine]) -> bool {
    multi_pairing_product::<E>(g1s, g2s).is_some_and(|out| out.is_zero())
}
