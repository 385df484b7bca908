// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Typed errors for decoding, hashing and accumulator operations.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ZkpError {
    #[error("malformed encoding: {0}")]
    MalformedEncoding(&'static str),

    #[error("invalid field element: {0}")]
    InvalidFieldElement(&'static str),

    #[error("point is not on the curve")]
    PointNotOnCurve,

    #[error("point is not in the prime-order subgroup")]
    PointNotInSubgroup,

    #[error("index {index} does not fit a tree of depth {depth}")]
    IndexOutOfRange { index: u64, depth: usize },

    #[error("authentication path has {actual} nodes, tree depth is {expected}")]
    MalformedPath { expected: usize, actual: usize },

    #[error("unsupported tree depth {0}")]
    UnsupportedDepth(usize),

    #[error("root does not match the authentication path")]
    RootMismatch,

    #[error("pedersen input exceeds {max_bits} bits")]
    InputTooLong { max_bits: usize },

    #[error("group hash found no valid point for tag")]
    GroupHashExhausted,

    #[error("{chunks} chunks per segment reach half the embedded group order")]
    WindowTooWide { chunks: usize },

    #[error("unknown curve family {0:?}")]
    UnknownCurve(String),
}

pub type ZkpResult<T> = Result<T, ZkpError>;
