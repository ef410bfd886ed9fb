//! Builders for the L1 developer genesis and the L2 genesis anchored on it.

use crate::{
    predeploys::{l1_block_slots, BEACON_ROOTS, L1_BLOCK, REQUIRED_PREDEPLOYS},
    BlockID, ChainConfig, DeployConfig, Genesis, GenesisAlloc, GenesisBuildError,
    GenesisBuildResult, Hardfork, L1Deployments, OptimismParams, SystemConfig,
};
use alloy_consensus::Header;
use alloy_primitives::{Address, Bytes, B256, U256};
use kona_timeint::{Seconds, TimeResult};
use tracing::{debug, info};

/// Extra data of the L2 genesis block.
pub const BEDROCK_EXTRA_DATA: &[u8] = b"BEDROCK";

/// The L2 allocation presets. Predeploy bytecode differs across upgrades, so the preset must
/// match the upgrades active at L2 genesis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum L2AllocsMode {
    /// Predeploys as of Delta.
    #[display("delta")]
    Delta,
    /// Predeploys as of Ecotone.
    #[display("ecotone")]
    Ecotone,
}

impl L2AllocsMode {
    /// Selects the preset for `config` with an L2 genesis at `genesis`.
    ///
    /// Only an Ecotone activation of exactly zero selects [L2AllocsMode::Ecotone]. A later
    /// activation starts the chain on the Delta preset.
    pub fn for_config(config: &DeployConfig, genesis: Seconds) -> TimeResult<Self> {
        Ok(match config.ecotone_time(genesis)? {
            Some(Seconds::ZERO) => Self::Ecotone,
            _ => Self::Delta,
        })
    }
}

/// Builds the L1 developer genesis from `config` and the allocation table `allocs`.
///
/// Every contract recorded in `deployments` must have code in `allocs`.
pub fn build_l1_developer_genesis(
    config: &DeployConfig,
    allocs: &GenesisAlloc,
    deployments: &L1Deployments,
) -> GenesisBuildResult<Genesis> {
    for (name, address) in deployments.deployed() {
        if !allocs.get(&address).is_some_and(|account| account.has_code()) {
            return Err(GenesisBuildError::MissingDeployedCode { name, address });
        }
    }

    let genesis = Genesis {
        config: ChainConfig { chain_id: config.l1_chain_id, ..Default::default() },
        timestamp: config.l1_genesis_block_timestamp,
        gas_limit: config.l1_genesis_block_gas_limit,
        base_fee_per_gas: Some(config.l1_genesis_block_base_fee_per_gas),
        alloc: allocs.clone(),
        ..Default::default()
    };
    debug!(
        target: "genesis_builder",
        "Built L1 developer genesis | Chain ID: {} | Timestamp: {} | Accounts: {}",
        config.l1_chain_id,
        genesis.timestamp,
        genesis.alloc.len()
    );
    Ok(genesis)
}

/// Builds the L2 genesis from `config` and the allocation `preset`, anchored on `l1_anchor`.
///
/// The L2 genesis shares the anchor's timestamp, and its upgrade activations are resolved
/// against that timestamp. The L1 attributes predeploy is seeded with the anchor and the
/// initial system config.
pub fn build_l2_genesis(
    config: &DeployConfig,
    preset: &GenesisAlloc,
    l1_anchor: &Header,
) -> GenesisBuildResult<Genesis> {
    let timestamp = Seconds(l1_anchor.timestamp);
    let hardforks = config.activation_times(timestamp)?;

    let beacon_roots =
        hardforks.is_active(Hardfork::Ecotone, timestamp).then_some(("BeaconRoots", BEACON_ROOTS));
    for (name, address) in REQUIRED_PREDEPLOYS.into_iter().chain(beacon_roots) {
        if !preset.contains_key(&address) {
            return Err(GenesisBuildError::MissingPredeploy { name, address });
        }
    }

    let mut alloc = preset.clone();
    let l1_block = alloc.entry(L1_BLOCK).or_default();
    let number_timestamp: U256 =
        U256::from(l1_anchor.number) | (U256::from(l1_anchor.timestamp) << 64usize);
    let basefee = U256::from(l1_anchor.base_fee_per_gas.unwrap_or_default());
    for (slot, value) in [
        (l1_block_slots::NUMBER_TIMESTAMP, B256::from(number_timestamp.to_be_bytes::<32>())),
        (l1_block_slots::BASEFEE, B256::from(basefee.to_be_bytes::<32>())),
        (l1_block_slots::HASH, l1_anchor.hash_slow()),
        (l1_block_slots::SEQUENCE_NUMBER, B256::ZERO),
        (l1_block_slots::BATCHER_HASH, config.batch_sender_address.into_word()),
        (l1_block_slots::L1_FEE_OVERHEAD, config.fee_overhead()),
        (l1_block_slots::L1_FEE_SCALAR, config.fee_scalar()),
    ] {
        l1_block.storage.insert(slot, value);
    }

    let genesis = Genesis {
        config: ChainConfig {
            chain_id: config.l2_chain_id,
            hardforks,
            optimism: Some(OptimismParams {
                eip1559_elasticity: config.eip1559_elasticity,
                eip1559_denominator: config.eip1559_denominator,
                eip1559_denominator_canyon: config.eip1559_denominator_canyon,
            }),
        },
        timestamp,
        extra_data: Bytes::from_static(BEDROCK_EXTRA_DATA),
        gas_limit: config.l2_genesis_block_gas_limit,
        base_fee_per_gas: Some(config.l2_genesis_block_base_fee_per_gas),
        alloc,
        ..Default::default()
    };
    info!(
        target: "genesis_builder",
        "Built L2 genesis | Chain ID: {} | Timestamp: {} | L1 anchor: {}",
        config.l2_chain_id,
        timestamp,
        l1_anchor.number
    );
    Ok(genesis)
}

impl Genesis {
    /// Reads the system config back out of the L1 attributes predeploy.
    ///
    /// Returns `None` if the predeploy is absent.
    pub fn system_config_at_l1_block(&self) -> Option<SystemConfig> {
        let account = self.alloc.get(&L1_BLOCK)?;
        let slot = |key| account.storage.get(&key).copied().unwrap_or_default();
        Some(SystemConfig {
            batcher_address: Address::from_word(slot(l1_block_slots::BATCHER_HASH)),
            overhead: slot(l1_block_slots::L1_FEE_OVERHEAD),
            scalar: slot(l1_block_slots::L1_FEE_SCALAR),
            gas_limit: self.gas_limit,
        })
    }

    /// Reads the L1 origin recorded in the L1 attributes predeploy.
    pub fn l1_origin_at_l1_block(&self) -> Option<BlockID> {
        let account = self.alloc.get(&L1_BLOCK)?;
        let number_timestamp = account.storage.get(&l1_block_slots::NUMBER_TIMESTAMP)?;
        let hash = account.storage.get(&l1_block_slots::HASH)?;
        let mut number = [0u8; 8];
        number.copy_from_slice(&number_timestamp[24..]);
        Some(BlockID::new(*hash, u64::from_be_bytes(number)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        predeploys::GAS_PRICE_ORACLE,
        test_utils::{test_deploy_config, test_l1_allocs, test_l1_deployments, test_l2_allocs},
        ActivationTimeline, ForkFlags,
    };

    fn l1_genesis(config: &DeployConfig) -> Genesis {
        let deployments = test_l1_deployments();
        build_l1_developer_genesis(config, &test_l1_allocs(&deployments), &deployments).unwrap()
    }

    #[test]
    fn test_l1_genesis_fields() {
        let config = test_deploy_config();
        let genesis = l1_genesis(&config);
        assert_eq!(genesis.config.chain_id, config.l1_chain_id);
        assert_eq!(genesis.timestamp, config.l1_genesis_block_timestamp);
        assert_eq!(genesis.gas_limit, config.l1_genesis_block_gas_limit);
        assert!(genesis.config.optimism.is_none());
    }

    #[test]
    fn test_l1_genesis_requires_deployed_code() {
        let config = test_deploy_config();
        let deployments = test_l1_deployments();
        let mut allocs = test_l1_allocs(&deployments);
        allocs.remove(&deployments.system_config_proxy);
        assert_eq!(
            build_l1_developer_genesis(&config, &allocs, &deployments),
            Err(GenesisBuildError::MissingDeployedCode {
                name: "SystemConfigProxy",
                address: deployments.system_config_proxy,
            })
        );
    }

    #[test]
    fn test_l2_genesis_is_anchored_on_l1() {
        let config = test_deploy_config();
        let anchor = l1_genesis(&config).to_header();
        let genesis =
            build_l2_genesis(&config, &test_l2_allocs(L2AllocsMode::Delta), &anchor).unwrap();

        assert_eq!(genesis.timestamp, Seconds(anchor.timestamp));
        assert_eq!(genesis.config.chain_id, config.l2_chain_id);
        assert_eq!(genesis.extra_data.as_ref(), BEDROCK_EXTRA_DATA);
        assert_eq!(
            genesis.l1_origin_at_l1_block(),
            Some(BlockID::new(anchor.hash_slow(), anchor.number))
        );
        assert_eq!(genesis.system_config_at_l1_block(), Some(config.genesis_system_config()));
    }

    #[test]
    fn test_l1_block_packs_number_and_timestamp() {
        let config = test_deploy_config();
        let mut anchor = l1_genesis(&config).to_header();
        anchor.number = 7;
        let genesis =
            build_l2_genesis(&config, &test_l2_allocs(L2AllocsMode::Delta), &anchor).unwrap();

        let packed = genesis.storage_at(L1_BLOCK, l1_block_slots::NUMBER_TIMESTAMP).unwrap();
        assert_eq!(packed[..16], [0u8; 16]);
        assert_eq!(packed[16..24], anchor.timestamp.to_be_bytes());
        assert_eq!(packed[24..], 7u64.to_be_bytes());
    }

    #[test]
    fn test_l2_genesis_fork_times_follow_anchor() {
        let offsets = ForkFlags::new().resolve().with(Hardfork::Delta, Some(Seconds(6)));
        let config = test_deploy_config()
            .with_l1_genesis_timestamp(Seconds(1_000))
            .with_fork_offsets(offsets);
        let anchor = l1_genesis(&config).to_header();
        let genesis =
            build_l2_genesis(&config, &test_l2_allocs(L2AllocsMode::Delta), &anchor).unwrap();
        let expected = ActivationTimeline::default()
            .with(Hardfork::Regolith, Some(Seconds::ZERO))
            .with(Hardfork::Canyon, Some(Seconds::ZERO))
            .with(Hardfork::Delta, Some(Seconds(1_006)));
        assert_eq!(genesis.config.hardforks, expected);
    }

    #[test]
    fn test_l2_genesis_requires_predeploys() {
        let config = test_deploy_config();
        let anchor = l1_genesis(&config).to_header();
        let mut preset = test_l2_allocs(L2AllocsMode::Delta);
        preset.remove(&GAS_PRICE_ORACLE);
        assert_eq!(
            build_l2_genesis(&config, &preset, &anchor),
            Err(GenesisBuildError::MissingPredeploy {
                name: "GasPriceOracle",
                address: GAS_PRICE_ORACLE,
            })
        );
    }

    #[test]
    fn test_ecotone_genesis_requires_beacon_roots() {
        let offsets = ForkFlags::new().with(Hardfork::Ecotone).resolve();
        let config = test_deploy_config().with_fork_offsets(offsets);
        let anchor = l1_genesis(&config).to_header();
        assert_eq!(
            build_l2_genesis(&config, &test_l2_allocs(L2AllocsMode::Delta), &anchor),
            Err(GenesisBuildError::MissingPredeploy { name: "BeaconRoots", address: BEACON_ROOTS })
        );
        let genesis =
            build_l2_genesis(&config, &test_l2_allocs(L2AllocsMode::Ecotone), &anchor).unwrap();
        assert!(genesis.to_header().parent_beacon_block_root.is_some());
    }

    #[test]
    fn test_allocs_mode_selection() {
        let genesis = Seconds(500);
        let config = test_deploy_config();
        assert_eq!(L2AllocsMode::for_config(&config, genesis), Ok(L2AllocsMode::Delta));

        let config = config.with_fork_offsets(ForkFlags::new().with(Hardfork::Ecotone).resolve());
        assert_eq!(L2AllocsMode::for_config(&config, genesis), Ok(L2AllocsMode::Ecotone));

        let offsets = config.l2_genesis_fork_offsets.with(Hardfork::Ecotone, Some(Seconds(4)));
        let config = config.with_fork_offsets(offsets);
        assert_eq!(L2AllocsMode::for_config(&config, genesis), Ok(L2AllocsMode::Delta));
    }
}
