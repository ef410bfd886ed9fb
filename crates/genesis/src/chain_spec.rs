//! This module contains the [ChainSpec] type, a read-only view of the protocol parameters in
//! effect at a given L2 timestamp.

use crate::{Hardfork, RollupConfig};
use kona_timeint::Seconds;

/// The max channel bank size before Fjord.
pub const MAX_CHANNEL_BANK_SIZE_BEDROCK: u64 = 100_000_000;

/// The max channel bank size from Fjord on.
pub const MAX_CHANNEL_BANK_SIZE_FJORD: u64 = 1_000_000_000;

/// The max rlp bytes per channel before Fjord.
pub const MAX_RLP_BYTES_PER_CHANNEL_BEDROCK: u64 = 10_000_000;

/// The max rlp bytes per channel from Fjord on.
pub const MAX_RLP_BYTES_PER_CHANNEL_FJORD: u64 = 100_000_000;

/// The max sequencer drift when the Fjord hardfork is active.
pub const MAX_SEQUENCER_DRIFT_FJORD: Seconds = Seconds(1800);

/// Protocol parameters derived from a validated [RollupConfig].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ChainSpec {
    config: RollupConfig,
}

impl ChainSpec {
    /// Creates a new [ChainSpec] over `config`.
    pub const fn new(config: RollupConfig) -> Self {
        Self { config }
    }

    /// Returns the underlying rollup configuration.
    pub const fn config(&self) -> &RollupConfig {
        &self.config
    }

    /// Returns `true` if `fork` is active at `timestamp`.
    pub fn is_active(&self, fork: Hardfork, timestamp: Seconds) -> bool {
        self.config.is_active(fork, timestamp)
    }

    /// Returns the max channel bank size at `timestamp`.
    pub fn max_channel_bank_size(&self, timestamp: Seconds) -> u64 {
        if self.config.is_fjord_active(timestamp) {
            MAX_CHANNEL_BANK_SIZE_FJORD
        } else {
            MAX_CHANNEL_BANK_SIZE_BEDROCK
        }
    }

    /// Returns the max rlp bytes per channel at `timestamp`.
    pub fn max_rlp_bytes_per_channel(&self, timestamp: Seconds) -> u64 {
        if self.config.is_fjord_active(timestamp) {
            MAX_RLP_BYTES_PER_CHANNEL_FJORD
        } else {
            MAX_RLP_BYTES_PER_CHANNEL_BEDROCK
        }
    }

    /// Returns the max sequencer drift at `timestamp`.
    pub fn max_sequencer_drift(&self, timestamp: Seconds) -> Seconds {
        if self.config.is_fjord_active(timestamp) {
            MAX_SEQUENCER_DRIFT_FJORD
        } else {
            self.config.max_sequencer_drift
        }
    }

    /// Returns the channel timeout, in L1 blocks.
    pub const fn channel_timeout(&self) -> u64 {
        self.config.channel_timeout
    }
}

impl From<RollupConfig> for ChainSpec {
    fn from(config: RollupConfig) -> Self {
        Self::new(config)
    }
}
