//! This module contains the [RollupConfig] type.

use crate::{
    ActivationTimeline, BlockID, Hardfork, PlasmaConfig, RollupConfigError, RollupConfigResult,
    SystemConfig,
};
use alloy_primitives::Address;
use kona_timeint::Seconds;

/// The anchor points of the rollup: the L1 and L2 genesis blocks, the L2 genesis time and the
/// system config the rollup starts from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChainGenesis {
    /// L1 anchor block.
    pub l1: BlockID,
    /// L2 genesis block.
    pub l2: BlockID,
    /// Timestamp of the L2 genesis block.
    pub l2_time: Seconds,
    /// Initial system config.
    pub system_config: SystemConfig,
}

/// The rollup protocol configuration a node boots from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RollupConfig {
    /// The genesis anchors of the rollup.
    pub genesis: ChainGenesis,
    /// The block time of the L2.
    pub block_time: Seconds,
    /// Sequencer batches may not be more than `max_sequencer_drift` after the L1 timestamp of
    /// the end of the sequencing window.
    pub max_sequencer_drift: Seconds,
    /// The sequencer window size, in L1 blocks.
    pub seq_window_size: u64,
    /// Number of L1 blocks between when a channel can be opened and when it must be closed.
    pub channel_timeout: u64,
    /// The L1 chain ID.
    pub l1_chain_id: u64,
    /// The L2 chain ID.
    pub l2_chain_id: u64,
    /// Upgrade activation timestamps.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub hardforks: ActivationTimeline,
    /// The L1 address batches are sent to.
    pub batch_inbox_address: Address,
    /// The L1 address deposits are sent to.
    pub deposit_contract_address: Address,
    /// The L1 address of the system config contract.
    pub l1_system_config_address: Address,
    /// The plasma DA configuration. `None` when plasma is disabled.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub plasma_config: Option<PlasmaConfig>,
}

impl RollupConfig {
    /// Returns `true` if `fork` is active at `timestamp`.
    pub fn is_active(&self, fork: Hardfork, timestamp: Seconds) -> bool {
        self.hardforks.is_active(fork, timestamp)
    }

    /// Returns true if Regolith is active at the given timestamp.
    pub fn is_regolith_active(&self, timestamp: Seconds) -> bool {
        self.is_active(Hardfork::Regolith, timestamp)
    }

    /// Returns true if Canyon is active at the given timestamp.
    pub fn is_canyon_active(&self, timestamp: Seconds) -> bool {
        self.is_active(Hardfork::Canyon, timestamp)
    }

    /// Returns true if Delta is active at the given timestamp.
    pub fn is_delta_active(&self, timestamp: Seconds) -> bool {
        self.is_active(Hardfork::Delta, timestamp)
    }

    /// Returns true if Ecotone is active at the given timestamp.
    pub fn is_ecotone_active(&self, timestamp: Seconds) -> bool {
        self.is_active(Hardfork::Ecotone, timestamp)
    }

    /// Returns true if Fjord is active at the given timestamp.
    pub fn is_fjord_active(&self, timestamp: Seconds) -> bool {
        self.is_active(Hardfork::Fjord, timestamp)
    }

    /// Returns true if Interop is active at the given timestamp.
    pub fn is_interop_active(&self, timestamp: Seconds) -> bool {
        self.is_active(Hardfork::Interop, timestamp)
    }

    /// Checks the configuration for internal consistency, returning the first violation found.
    pub fn check(&self) -> RollupConfigResult<()> {
        if self.block_time == Seconds::ZERO {
            return Err(RollupConfigError::ZeroBlockTime);
        }
        if self.channel_timeout == 0 {
            return Err(RollupConfigError::ZeroChannelTimeout);
        }
        if self.seq_window_size < 2 {
            return Err(RollupConfigError::SeqWindowTooSmall(self.seq_window_size));
        }
        if self.max_sequencer_drift == Seconds::ZERO {
            return Err(RollupConfigError::ZeroMaxSequencerDrift);
        }
        if self.genesis.l1.hash.is_zero() {
            return Err(RollupConfigError::MissingGenesisL1Hash);
        }
        if self.genesis.l2.hash.is_zero() {
            return Err(RollupConfigError::MissingGenesisL2Hash);
        }
        if self.genesis.system_config.gas_limit == 0 {
            return Err(RollupConfigError::ZeroGenesisGasLimit);
        }
        if self.l1_chain_id == 0 {
            return Err(RollupConfigError::ZeroL1ChainId);
        }
        if self.l2_chain_id == 0 {
            return Err(RollupConfigError::ZeroL2ChainId);
        }
        if self.l1_chain_id == self.l2_chain_id {
            return Err(RollupConfigError::SameChainIds(self.l1_chain_id));
        }
        if self.batch_inbox_address.is_zero() {
            return Err(RollupConfigError::MissingBatchInboxAddress);
        }
        if self.deposit_contract_address.is_zero() {
            return Err(RollupConfigError::MissingDepositContractAddress);
        }
        if self.l1_system_config_address.is_zero() {
            return Err(RollupConfigError::MissingSystemConfigAddress);
        }

        self.hardforks.check()?;

        if let Some(plasma) = &self.plasma_config {
            plasma.check()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{test_utils::test_rollup_config, ForkOrderError, PlasmaConfigError};
    use alloy_primitives::B256;

    #[test]
    fn test_valid_config_passes() {
        assert_eq!(test_rollup_config().check(), Ok(()));
    }

    #[test]
    fn test_check_timing() {
        let cfg = RollupConfig { block_time: Seconds::ZERO, ..test_rollup_config() };
        assert_eq!(cfg.check(), Err(RollupConfigError::ZeroBlockTime));
        let cfg = RollupConfig { seq_window_size: 1, ..test_rollup_config() };
        assert_eq!(cfg.check(), Err(RollupConfigError::SeqWindowTooSmall(1)));
        let cfg = RollupConfig { channel_timeout: 0, ..test_rollup_config() };
        assert_eq!(cfg.check(), Err(RollupConfigError::ZeroChannelTimeout));
        let cfg = RollupConfig { max_sequencer_drift: Seconds::ZERO, ..test_rollup_config() };
        assert_eq!(cfg.check(), Err(RollupConfigError::ZeroMaxSequencerDrift));
    }

    #[test]
    fn test_check_genesis() {
        let mut cfg = test_rollup_config();
        cfg.genesis.l2.hash = B256::ZERO;
        assert_eq!(cfg.check(), Err(RollupConfigError::MissingGenesisL2Hash));
        cfg.genesis.l1.hash = B256::ZERO;
        assert_eq!(cfg.check(), Err(RollupConfigError::MissingGenesisL1Hash));
    }

    #[test]
    fn test_check_chain_ids() {
        let cfg = RollupConfig { l2_chain_id: 900, l1_chain_id: 900, ..test_rollup_config() };
        assert_eq!(cfg.check(), Err(RollupConfigError::SameChainIds(900)));
    }

    #[test]
    fn test_check_addresses() {
        let cfg =
            RollupConfig { deposit_contract_address: Address::ZERO, ..test_rollup_config() };
        assert_eq!(cfg.check(), Err(RollupConfigError::MissingDepositContractAddress));
    }

    #[test]
    fn test_check_fork_order() {
        let hardforks = test_rollup_config()
            .hardforks
            .with(Hardfork::Delta, Some(Seconds(10)))
            .with(Hardfork::Ecotone, Some(Seconds(5)));
        let cfg = RollupConfig { hardforks, ..test_rollup_config() };
        assert_eq!(
            cfg.check(),
            Err(RollupConfigError::ForkOrder(ForkOrderError::OutOfOrder {
                fork: Hardfork::Ecotone,
                time: Seconds(5),
                predecessor: Hardfork::Delta,
                predecessor_time: Seconds(10),
            }))
        );
    }

    #[test]
    fn test_check_plasma() {
        let plasma = PlasmaConfig::default();
        let cfg = RollupConfig { plasma_config: Some(plasma), ..test_rollup_config() };
        assert_eq!(
            cfg.check(),
            Err(RollupConfigError::Plasma(PlasmaConfigError::MissingChallengeAddress))
        );
    }

    #[test]
    fn test_fork_activation() {
        let hardforks = ActivationTimeline::default()
            .with(Hardfork::Regolith, Some(Seconds::ZERO))
            .with(Hardfork::Canyon, Some(Seconds::ZERO))
            .with(Hardfork::Delta, Some(Seconds(10)));
        let cfg = RollupConfig { hardforks, ..test_rollup_config() };
        assert!(cfg.is_regolith_active(Seconds::ZERO));
        assert!(cfg.is_canyon_active(Seconds(1)));
        assert!(!cfg.is_delta_active(Seconds(9)));
        assert!(cfg.is_delta_active(Seconds(10)));
        assert!(!cfg.is_ecotone_active(Seconds(u64::MAX)));
        assert!(!cfg.is_fjord_active(Seconds(u64::MAX)));
        assert!(!cfg.is_interop_active(Seconds(u64::MAX)));
    }

    #[test]
    #[cfg(feature = "serde")]
    fn test_serde_omits_absent_fields() {
        let json = serde_json::to_value(test_rollup_config()).unwrap();
        assert!(json.get("plasma_config").is_none());
        assert!(json.get("ecotone_time").is_none());
        assert_eq!(json["regolith_time"], 0);
        let back: RollupConfig = serde_json::from_value(json).unwrap();
        assert_eq!(back, test_rollup_config());
    }
}
