//! This module contains the [SystemConfig] type.

use alloy_primitives::{Address, B256};

/// The L1 system parameters the rollup starts from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SystemConfig {
    /// Batcher address.
    #[cfg_attr(feature = "serde", serde(rename = "batcherAddr"))]
    pub batcher_address: Address,
    /// Fee overhead value, pre-Ecotone.
    pub overhead: B256,
    /// Fee scalar value.
    pub scalar: B256,
    /// Gas limit value.
    #[cfg_attr(feature = "serde", serde(rename = "gasLimit"))]
    pub gas_limit: u64,
}
