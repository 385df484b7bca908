// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Pedersen Merkle accumulator for BLS12-381 (Jubjub) and BN254
//! (Baby Jubjub) scalar fields.
//!
//! The accumulator never stores the tree: callers hold the authentication
//! path of the next free slot and get back the new root (and, for
//! [`PedersenAccumulator::append`], the next path).

pub mod accumulator;
pub mod bytes;
pub mod config;
pub mod path;
pub mod tree;

pub use accumulator::{AccumulatorFamily, PedersenAccumulator};
pub use bytes::{add_item_bytes, append_bytes, AnyAccumulator};
pub use config::{AccumulatorConfig, DEFAULT_DEPTH, MAX_DEPTH};
pub use path::MerklePath;
pub use tree::SparseMerkleTree;
