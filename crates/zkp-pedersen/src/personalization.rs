// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

/// Domain tag prepended to every Pedersen hash input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Personalization {
    NoteCommitment,
    /// Interior node at the given level, leaf level is 0.
    MerkleTree(usize),
}

impl Personalization {
    pub const BITS: usize = 6;

    /// Six prefix bits. Tree levels use their low six bits little-endian, so
    /// level 63 would collide with the note-commitment tag.
    pub fn bits(&self) -> [bool; Self::BITS] {
        match *self {
            Personalization::NoteCommitment => [true; Self::BITS],
            Personalization::MerkleTree(level) => core::array::from_fn(|i| (level >> i) & 1 == 1),
        }
    }
}
