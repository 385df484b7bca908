// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

use serde::{Deserialize, Serialize};
use zkp_types::{ZkpError, ZkpResult};

pub const DEFAULT_DEPTH: usize = 48;

/// Level tags are six bits and level 63 shares its tag with note commitments.
pub const MAX_DEPTH: usize = 63;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccumulatorConfig {
    pub depth: usize,
}

impl Default for AccumulatorConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
        }
    }
}

impl AccumulatorConfig {
    pub fn with_depth(depth: usize) -> ZkpResult<Self> {
        let config = Self { depth };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ZkpResult<()> {
        if self.depth == 0 || self.depth > MAX_DEPTH {
            return Err(ZkpError::UnsupportedDepth(self.depth));
        }
        Ok(())
    }

    /// Number of leaf slots, `2^depth`.
    pub fn capacity(&self) -> u64 {
        1u64 << self.depth
    }
}
