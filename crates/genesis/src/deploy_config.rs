//! This module contains the [DeployConfig] type, the deployment parameter template of a test
//! network.

use crate::{
    ActivationTimeline, CommitmentType, DeployConfigError, DeployConfigResult, Hardfork,
    L1Deployments, SystemConfig,
};
use alloy_primitives::{Address, B256, U256};
use kona_timeint::{Seconds, TimeResult};
use tracing::warn;

/// The version byte of an Ecotone-encoded fee scalar.
pub const L1_SCALAR_ECOTONE: u8 = 1;

/// Deployment parameters of an L1/L2 pair.
///
/// Values are never mutated in place. Transforms take `self` and return a new value, so a shared
/// template is only ever cloned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct DeployConfig {
    /// L1 chain ID.
    #[cfg_attr(feature = "serde", serde(rename = "l1ChainID"))]
    pub l1_chain_id: u64,
    /// L2 chain ID.
    #[cfg_attr(feature = "serde", serde(rename = "l2ChainID"))]
    pub l2_chain_id: u64,
    /// Time between L1 blocks.
    pub l1_block_time: Seconds,
    /// Time between L2 blocks.
    pub l2_block_time: Seconds,
    /// How far the L2 timestamp may run ahead of its L1 origin.
    pub max_sequencer_drift: Seconds,
    /// Number of L1 blocks a batch may be submitted within.
    pub sequencer_window_size: u64,
    /// Number of L1 blocks a channel may stay open.
    pub channel_timeout: u64,
    /// Address whose signature the sequencer's P2P blocks carry.
    pub p2p_sequencer_address: Address,
    /// L1 address that batches are sent to.
    pub batch_inbox_address: Address,
    /// Address allowed to submit batches.
    pub batch_sender_address: Address,
    /// Number of L2 blocks between output proposals.
    pub l2_output_oracle_submission_interval: u64,
    /// Address allowed to propose outputs.
    pub l2_output_oracle_proposer: Address,
    /// Address allowed to challenge outputs.
    pub l2_output_oracle_challenger: Address,
    /// Withdrawal finalization delay.
    pub finalization_period_seconds: Seconds,
    /// Owner of the system contracts after deployment.
    pub final_system_owner: Address,
    /// Owner of the proxy admin.
    pub proxy_admin_owner: Address,
    /// Timestamp of the L1 genesis block.
    pub l1_genesis_block_timestamp: Seconds,
    /// Gas limit of the L1 genesis block.
    pub l1_genesis_block_gas_limit: u64,
    /// Base fee of the L1 genesis block.
    pub l1_genesis_block_base_fee_per_gas: u64,
    /// Gas limit of the L2 genesis block.
    pub l2_genesis_block_gas_limit: u64,
    /// Base fee of the L2 genesis block.
    pub l2_genesis_block_base_fee_per_gas: u64,
    /// Upgrade activations as offsets from the L2 genesis timestamp.
    pub l2_genesis_fork_offsets: ActivationTimeline,
    /// Pre-Ecotone fee overhead.
    pub gas_price_oracle_overhead: u64,
    /// Pre-Ecotone fee scalar. When non-zero it takes precedence over the Ecotone scalars.
    pub gas_price_oracle_scalar: u64,
    /// Ecotone base fee scalar.
    pub gas_price_oracle_base_fee_scalar: u32,
    /// Ecotone blob base fee scalar.
    pub gas_price_oracle_blob_base_fee_scalar: u32,
    /// EIP-1559 elasticity multiplier.
    pub eip1559_elasticity: u64,
    /// EIP-1559 base fee change denominator.
    pub eip1559_denominator: u64,
    /// EIP-1559 base fee change denominator from Canyon on.
    pub eip1559_denominator_canyon: u64,
    /// Whether outputs are settled by fault proofs rather than the L2 output oracle.
    pub use_fault_proofs: bool,
    /// Whether the plasma data availability layer is enabled.
    pub use_plasma: bool,
    /// Plasma commitment scheme.
    pub da_commitment_type: CommitmentType,
    /// Plasma challenge window, in L1 blocks.
    pub da_challenge_window: u64,
    /// Plasma resolve window, in L1 blocks.
    pub da_resolve_window: u64,
    /// Plasma challenge bond, in wei.
    pub da_bond_size: u64,
    /// Share of the bond refunded to a resolver, in percent.
    pub da_resolver_refund_percentage: u64,
    /// L1 standard bridge proxy.
    pub l1_standard_bridge_proxy: Address,
    /// L1 cross domain messenger proxy.
    pub l1_cross_domain_messenger_proxy: Address,
    /// Optimism portal proxy, the deposit contract.
    pub optimism_portal_proxy: Address,
    /// System config proxy.
    pub system_config_proxy: Address,
    /// L2 output oracle proxy, output-oracle mode only.
    pub l2_output_oracle_proxy: Address,
    /// Dispute game factory proxy, fault-proof mode only.
    pub dispute_game_factory_proxy: Address,
    /// Data availability challenge proxy, plasma only.
    pub da_challenge_proxy: Address,
}

impl DeployConfig {
    /// Checks the configuration, returning the first field or cross-field violation found.
    pub fn check(&self) -> DeployConfigResult<()> {
        if self.l1_chain_id == 0 {
            return Err(DeployConfigError::ZeroL1ChainId);
        }
        if self.l2_chain_id == 0 {
            return Err(DeployConfigError::ZeroL2ChainId);
        }
        if self.l1_chain_id == self.l2_chain_id {
            return Err(DeployConfigError::SameChainIds(self.l1_chain_id));
        }
        if self.l2_block_time == Seconds::ZERO {
            return Err(DeployConfigError::ZeroL2BlockTime);
        }
        if self.l1_block_time < self.l2_block_time {
            return Err(DeployConfigError::L1BlockTimeTooShort {
                l1: self.l1_block_time,
                l2: self.l2_block_time,
            });
        }
        if self.max_sequencer_drift == Seconds::ZERO {
            return Err(DeployConfigError::ZeroMaxSequencerDrift);
        }
        if self.sequencer_window_size == 0 {
            return Err(DeployConfigError::ZeroSequencerWindowSize);
        }
        if self.channel_timeout == 0 {
            return Err(DeployConfigError::ZeroChannelTimeout);
        }

        for (name, address) in [
            ("p2pSequencerAddress", self.p2p_sequencer_address),
            ("batchInboxAddress", self.batch_inbox_address),
            ("batchSenderAddress", self.batch_sender_address),
            ("l2OutputOracleProposer", self.l2_output_oracle_proposer),
            ("l2OutputOracleChallenger", self.l2_output_oracle_challenger),
            ("finalSystemOwner", self.final_system_owner),
            ("proxyAdminOwner", self.proxy_admin_owner),
        ] {
            if address.is_zero() {
                return Err(DeployConfigError::ZeroAddress(name));
            }
        }

        if self.l2_output_oracle_submission_interval == 0 {
            return Err(DeployConfigError::ZeroSubmissionInterval);
        }
        if self.finalization_period_seconds == Seconds::ZERO {
            return Err(DeployConfigError::ZeroFinalizationPeriod);
        }
        if self.l1_genesis_block_gas_limit == 0 {
            return Err(DeployConfigError::ZeroL1GasLimit);
        }
        if self.l2_genesis_block_gas_limit == 0 {
            return Err(DeployConfigError::ZeroL2GasLimit);
        }
        for (name, value) in [
            ("eip1559Elasticity", self.eip1559_elasticity),
            ("eip1559Denominator", self.eip1559_denominator),
            ("eip1559DenominatorCanyon", self.eip1559_denominator_canyon),
        ] {
            if value == 0 {
                return Err(DeployConfigError::ZeroEip1559Param(name));
            }
        }

        self.l2_genesis_fork_offsets.check()?;

        if self.use_plasma {
            if self.da_challenge_window == 0 {
                return Err(DeployConfigError::ZeroDaChallengeWindow);
            }
            if self.da_resolve_window == 0 {
                return Err(DeployConfigError::ZeroDaResolveWindow);
            }
            if self.da_resolver_refund_percentage > 100 {
                return Err(DeployConfigError::InvalidDaRefundPercentage(
                    self.da_resolver_refund_percentage,
                ));
            }
        }

        self.sequencing_window_duration()?;
        self.l1_block_time.checked_mul(self.channel_timeout)?;

        if self.gas_price_oracle_scalar == 0 &&
            self.gas_price_oracle_base_fee_scalar == 0 &&
            self.gas_price_oracle_blob_base_fee_scalar == 0
        {
            warn!(target: "deploy_config", "All gas price oracle scalars are zero, L1 data fees will be zero");
        }

        Ok(())
    }

    /// Returns the configuration with the L1 genesis timestamp set to `timestamp`.
    pub const fn with_l1_genesis_timestamp(mut self, timestamp: Seconds) -> Self {
        self.l1_genesis_block_timestamp = timestamp;
        self
    }

    /// Returns the configuration with the fork offsets replaced by `offsets`.
    pub const fn with_fork_offsets(mut self, offsets: ActivationTimeline) -> Self {
        self.l2_genesis_fork_offsets = offsets;
        self
    }

    /// Returns the configuration pointing at the contracts recorded in `deployments`.
    pub const fn with_deployments(mut self, deployments: &L1Deployments) -> Self {
        self.l1_standard_bridge_proxy = deployments.l1_standard_bridge_proxy;
        self.l1_cross_domain_messenger_proxy = deployments.l1_cross_domain_messenger_proxy;
        self.optimism_portal_proxy = deployments.optimism_portal_proxy;
        self.system_config_proxy = deployments.system_config_proxy;
        self.l2_output_oracle_proxy = deployments.l2_output_oracle_proxy;
        self.dispute_game_factory_proxy = deployments.dispute_game_factory_proxy;
        self.da_challenge_proxy = deployments.data_availability_challenge_proxy;
        self
    }

    /// Returns the activation time of `fork` for an L2 chain starting at `genesis`.
    ///
    /// `None` if the fork is not scheduled. A zero offset activates at timestamp zero, i.e. the
    /// fork is active for the whole chain.
    pub fn fork_time(&self, fork: Hardfork, genesis: Seconds) -> TimeResult<Option<Seconds>> {
        self.l2_genesis_fork_offsets
            .get(fork)
            .map(|offset| match offset {
                Seconds::ZERO => Ok(Seconds::ZERO),
                offset => genesis.checked_add(offset),
            })
            .transpose()
    }

    /// Returns the Ecotone activation time for an L2 chain starting at `genesis`.
    pub fn ecotone_time(&self, genesis: Seconds) -> TimeResult<Option<Seconds>> {
        self.fork_time(Hardfork::Ecotone, genesis)
    }

    /// Returns the activation times of every fork for an L2 chain starting at `genesis`.
    pub fn activation_times(&self, genesis: Seconds) -> TimeResult<ActivationTimeline> {
        self.l2_genesis_fork_offsets.at_genesis(genesis)
    }

    /// Returns the span of L1 time covered by one sequencing window.
    pub const fn sequencing_window_duration(&self) -> TimeResult<Seconds> {
        self.l1_block_time.checked_mul(self.sequencer_window_size)
    }

    /// Returns the fee scalar committed to in the system config.
    ///
    /// A non-zero legacy scalar is used as is. Otherwise the Ecotone scalars are packed as
    /// `version(1) ++ zeros ++ blob_base_fee_scalar(4) ++ base_fee_scalar(4)`.
    pub fn fee_scalar(&self) -> B256 {
        if self.gas_price_oracle_scalar != 0 {
            return B256::from(U256::from(self.gas_price_oracle_scalar).to_be_bytes::<32>());
        }
        let mut scalar = B256::ZERO;
        scalar[0] = L1_SCALAR_ECOTONE;
        scalar[24..28].copy_from_slice(&self.gas_price_oracle_blob_base_fee_scalar.to_be_bytes());
        scalar[28..32].copy_from_slice(&self.gas_price_oracle_base_fee_scalar.to_be_bytes());
        scalar
    }

    /// Returns the fee overhead committed to in the system config.
    pub fn fee_overhead(&self) -> B256 {
        B256::from(U256::from(self.gas_price_oracle_overhead).to_be_bytes::<32>())
    }

    /// Returns the system config the L2 chain starts with.
    pub fn genesis_system_config(&self) -> SystemConfig {
        SystemConfig {
            batcher_address: self.batch_sender_address,
            overhead: self.fee_overhead(),
            scalar: self.fee_scalar(),
            gas_limit: self.l2_genesis_block_gas_limit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{test_utils::test_deploy_config, ForkOrderError};
    use alloy_primitives::b256;
    use kona_timeint::TimeError;

    #[test]
    fn test_valid_config_passes() {
        assert_eq!(test_deploy_config().check(), Ok(()));
    }

    #[test]
    fn test_check_chain_ids() {
        let cfg = DeployConfig { l1_chain_id: 0, ..test_deploy_config() };
        assert_eq!(cfg.check(), Err(DeployConfigError::ZeroL1ChainId));
        let cfg = DeployConfig { l2_chain_id: 0, ..test_deploy_config() };
        assert_eq!(cfg.check(), Err(DeployConfigError::ZeroL2ChainId));
        let cfg = DeployConfig { l2_chain_id: 900, l1_chain_id: 900, ..test_deploy_config() };
        assert_eq!(cfg.check(), Err(DeployConfigError::SameChainIds(900)));
    }

    #[test]
    fn test_check_block_times() {
        let cfg = DeployConfig { l2_block_time: Seconds::ZERO, ..test_deploy_config() };
        assert_eq!(cfg.check(), Err(DeployConfigError::ZeroL2BlockTime));
        let cfg = DeployConfig { l1_block_time: Seconds(1), ..test_deploy_config() };
        assert_eq!(
            cfg.check(),
            Err(DeployConfigError::L1BlockTimeTooShort { l1: Seconds(1), l2: Seconds(2) })
        );
    }

    #[test]
    fn test_check_zero_address() {
        let cfg = DeployConfig { batch_sender_address: Address::ZERO, ..test_deploy_config() };
        assert_eq!(cfg.check(), Err(DeployConfigError::ZeroAddress("batchSenderAddress")));
    }

    #[test]
    fn test_check_fork_order() {
        let offsets = ActivationTimeline::default().with(Hardfork::Ecotone, Some(Seconds::ZERO));
        let cfg = test_deploy_config().with_fork_offsets(offsets);
        assert_eq!(
            cfg.check(),
            Err(DeployConfigError::ForkOrder(ForkOrderError::MissingPredecessor {
                fork: Hardfork::Ecotone,
                predecessor: Hardfork::Delta,
            }))
        );
    }

    #[test]
    fn test_check_plasma_only_when_enabled() {
        let cfg = DeployConfig { da_challenge_window: 0, ..test_deploy_config() };
        assert_eq!(cfg.check(), Ok(()));
        let cfg = DeployConfig { use_plasma: true, ..cfg };
        assert_eq!(cfg.check(), Err(DeployConfigError::ZeroDaChallengeWindow));
        let cfg = DeployConfig {
            use_plasma: true,
            da_resolver_refund_percentage: 101,
            ..test_deploy_config()
        };
        assert_eq!(cfg.check(), Err(DeployConfigError::InvalidDaRefundPercentage(101)));
    }

    #[test]
    fn test_check_window_overflow() {
        let cfg = DeployConfig { sequencer_window_size: u64::MAX, ..test_deploy_config() };
        assert!(matches!(
            cfg.check(),
            Err(DeployConfigError::Overflow(TimeError::Overflow { op: '*', .. }))
        ));
    }

    #[test]
    fn test_fork_time() {
        let offsets = ActivationTimeline::default()
            .with(Hardfork::Regolith, Some(Seconds::ZERO))
            .with(Hardfork::Canyon, Some(Seconds(4)));
        let cfg = test_deploy_config().with_fork_offsets(offsets);
        assert_eq!(cfg.fork_time(Hardfork::Regolith, Seconds(100)), Ok(Some(Seconds::ZERO)));
        assert_eq!(cfg.fork_time(Hardfork::Canyon, Seconds(100)), Ok(Some(Seconds(104))));
        assert_eq!(cfg.ecotone_time(Seconds(100)), Ok(None));
        assert!(cfg.fork_time(Hardfork::Canyon, Seconds(u64::MAX)).is_err());
    }

    #[test]
    fn test_fee_scalar_ecotone_encoding() {
        let cfg = DeployConfig {
            gas_price_oracle_scalar: 0,
            gas_price_oracle_base_fee_scalar: 1368,
            gas_price_oracle_blob_base_fee_scalar: 810949,
            ..test_deploy_config()
        };
        assert_eq!(
            cfg.fee_scalar(),
            b256!("010000000000000000000000000000000000000000000000000c5fc500000558")
        );
    }

    #[test]
    fn test_fee_scalar_legacy() {
        let cfg = DeployConfig { gas_price_oracle_scalar: 1_000_000, ..test_deploy_config() };
        assert_eq!(
            cfg.fee_scalar(),
            b256!("00000000000000000000000000000000000000000000000000000000000f4240")
        );
    }

    #[test]
    fn test_genesis_system_config() {
        let cfg = test_deploy_config();
        let sys = cfg.genesis_system_config();
        assert_eq!(sys.batcher_address, cfg.batch_sender_address);
        assert_eq!(sys.gas_limit, cfg.l2_genesis_block_gas_limit);
        assert_eq!(sys.scalar, cfg.fee_scalar());
        assert_eq!(U256::from_be_bytes(sys.overhead.0), U256::from(cfg.gas_price_oracle_overhead));
    }

    #[test]
    fn test_transforms_do_not_touch_the_template() {
        let template = test_deploy_config();
        let stamped = template.clone().with_l1_genesis_timestamp(Seconds(42));
        assert_eq!(stamped.l1_genesis_block_timestamp, Seconds(42));
        assert_ne!(template.l1_genesis_block_timestamp, Seconds(42));
    }
}
