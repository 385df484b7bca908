// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Status codes returned across the C boundary.

use zkp_types::ZkpError;

pub const ZKP_OK: i32 = 0;
pub const ZKP_ERR_MALFORMED: i32 = -1;
pub const ZKP_ERR_INVALID_POINT: i32 = -2;
pub const ZKP_ERR_INDEX_OUT_OF_RANGE: i32 = -3;
pub const ZKP_ERR_MALFORMED_PATH: i32 = -4;
pub const ZKP_ERR_ROOT_MISMATCH: i32 = -5;
pub const ZKP_ERR_BUFFER_TOO_SMALL: i32 = -6;
pub const ZKP_ERR_NULL_POINTER: i32 = -7;
pub const ZKP_ERR_OTHER: i32 = -8;

/// Failures that originate in the shim rather than the library.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum FfiError {
    Zkp(ZkpError),
    BufferTooSmall { needed: usize, available: usize },
    NullPointer,
    Panicked,
}

impl From<ZkpError> for FfiError {
    fn from(err: ZkpError) -> Self {
        FfiError::Zkp(err)
    }
}

pub fn status_code(err: &ZkpError) -> i32 {
    match err {
        ZkpError::MalformedEncoding(_) | ZkpError::InvalidFieldElement(_) => ZKP_ERR_MALFORMED,
        ZkpError::PointNotOnCurve | ZkpError::PointNotInSubgroup => ZKP_ERR_INVALID_POINT,
        ZkpError::IndexOutOfRange { .. } => ZKP_ERR_INDEX_OUT_OF_RANGE,
        ZkpError::MalformedPath { .. } => ZKP_ERR_MALFORMED_PATH,
        ZkpError::RootMismatch => ZKP_ERR_ROOT_MISMATCH,
        ZkpError::UnsupportedDepth(_)
        | ZkpError::InputTooLong { .. }
        | ZkpError::GroupHashExhausted
        | ZkpError::WindowTooWide { .. }
        | ZkpError::UnknownCurve(_) => ZKP_ERR_OTHER,
    }
}

impl FfiError {
    pub(crate) fn code(&self) -> i32 {
        match self {
            FfiError::Zkp(err) => status_code(err),
            FfiError::BufferTooSmall { .. } => ZKP_ERR_BUFFER_TOO_SMALL,
            FfiError::NullPointer => ZKP_ERR_NULL_POINTER,
            FfiError::Panicked => ZKP_ERR_OTHER,
        }
    }
}
