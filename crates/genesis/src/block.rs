//! This module contains the [BlockID] type.

use alloy_primitives::B256;

/// The identity of a block: its hash and height.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, derive_more::Display)]
#[display("{hash}:{number}")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlockID {
    /// Block hash.
    pub hash: B256,
    /// Block number.
    pub number: u64,
}

impl BlockID {
    /// Creates a new [BlockID].
    pub const fn new(hash: B256, number: u64) -> Self {
        Self { hash, number }
    }
}
