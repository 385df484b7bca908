// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

use zkp_types::{read_scalars_be, write_scalars_be, CurveFamily, ScalarField, ZkpResult};

/// Authentication path for one leaf slot.
///
/// `siblings[i]` is the neighbour at level `i`, leaf level first. Bit `i` of
/// `index` set means the running node is the right child at level `i`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MerklePath<F: CurveFamily> {
    pub siblings: Vec<ScalarField<F>>,
    pub index: u64,
}

impl<F: CurveFamily> MerklePath<F> {
    pub fn new(siblings: Vec<ScalarField<F>>, index: u64) -> Self {
        Self { siblings, index }
    }

    /// Siblings as concatenated 32-byte big-endian nodes.
    pub fn decode(siblings: &[u8], index: u64) -> ZkpResult<Self> {
        Ok(Self::new(read_scalars_be(siblings)?, index))
    }

    pub fn encode_siblings(&self) -> Vec<u8> {
        write_scalars_be(&self.siblings)
    }

    pub fn depth(&self) -> usize {
        self.siblings.len()
    }

    /// True when the running node is the right child at `level`.
    pub fn is_right(&self, level: usize) -> bool {
        (self.index >> level) & 1 == 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use zkp_types::Bn256;

    #[test]
    fn index_bits_pick_sides() {
        let path = MerklePath::<Bn256>::new(vec![ark_bn254::Fr::from(0u64); 4], 0b0101);
        assert!(path.is_right(0));
        assert!(!path.is_right(1));
        assert!(path.is_right(2));
        assert!(!path.is_right(3));
    }

    #[test]
    fn siblings_decode_in_order() {
        let siblings = vec![ark_bn254::Fr::from(1u64), ark_bn254::Fr::from(2u64)];
        let path = MerklePath::<Bn256>::new(siblings.clone(), 3);
        let bytes = path.encode_siblings();
        assert_eq!(bytes.len(), 64);
        assert_eq!(bytes[31], 1);
        assert_eq!(MerklePath::<Bn256>::decode(&bytes, 3).unwrap().siblings, siblings);
        assert!(MerklePath::<Bn256>::decode(&bytes[1..], 3).is_err());
    }
}
