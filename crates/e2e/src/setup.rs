//! Synthesis of a test network from validated deploy parameters.

use crate::{params::check_role_addresses, DeployParams, Fixtures, SetupError, SetupResult};
use alloy_primitives::U256;
use kona_genesis::{
    build_l1_developer_genesis, build_l2_genesis, BlockID, ChainGenesis, ChainSpec, Genesis,
    GenesisAccount, GenesisAlloc, L1Deployments, L2AllocsMode, PlasmaConfig, RollupConfig,
};
use kona_timeint::{Clock, SystemClock};
use serde::Serialize;
use tracing::{debug, info};

/// Balance credited to every test account when prefunding, in ether.
const PREFUND_ETHER: u64 = 1_000_000_000_000;

/// Converts whole ether to wei.
pub fn ether(amount: u64) -> U256 {
    U256::from(amount) * U256::from(10).pow(U256::from(18))
}

/// Allocation overrides applied on top of the fixture allocation tables.
///
/// Overrides replace whole accounts. They are applied after prefunding, so an override for a
/// test account wins over its prefunded balance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllocParams {
    /// Accounts to set in the L1 genesis.
    pub l1_alloc: GenesisAlloc,
    /// Accounts to set in the L2 genesis.
    pub l2_alloc: GenesisAlloc,
    /// Credit every test account with a large balance on both chains.
    pub prefund_test_users: bool,
}

/// A synthesized test network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SetupData {
    /// The L1 developer genesis.
    pub l1_genesis: Genesis,
    /// The L2 genesis, anchored on the L1 genesis block.
    pub l2_genesis: Genesis,
    /// The rollup config a node boots from.
    pub rollup_config: RollupConfig,
    /// The protocol parameters derived from the rollup config.
    pub chain_spec: ChainSpec,
    /// The L1 contracts the network was deployed with.
    pub deployments_l1: L1Deployments,
    /// The L2 allocation preset the L2 genesis was built from.
    pub l2_allocs_mode: L2AllocsMode,
}

/// Synthesizes a test network from the devnet fixtures, stamped with the current time.
pub fn setup(params: &DeployParams, alloc: &AllocParams) -> SetupResult<SetupData> {
    setup_with(params, alloc, Fixtures::devnet(), &SystemClock)
}

/// Synthesizes a test network from `fixtures`, taking the L1 genesis time from `clock`.
///
/// Returns the first inconsistency found. No partial network is returned.
pub fn setup_with(
    params: &DeployParams,
    alloc: &AllocParams,
    fixtures: &Fixtures,
    clock: &impl Clock,
) -> SetupResult<SetupData> {
    let deploy_config =
        params.deploy_config.clone().with_l1_genesis_timestamp(clock.now_seconds());
    deploy_config.check()?;

    let deployments_l1 = fixtures.l1_deployments;
    deployments_l1.check(&deploy_config)?;

    let prefund = |accounts: &mut GenesisAlloc| {
        if alloc.prefund_test_users {
            for address in params.addresses.all() {
                accounts.insert(address, GenesisAccount::with_balance(ether(PREFUND_ETHER)));
            }
        }
    };

    let mut l1_genesis =
        build_l1_developer_genesis(&deploy_config, &fixtures.l1_allocs, &deployments_l1)?;
    prefund(&mut l1_genesis.alloc);
    l1_genesis.alloc.extend(alloc.l1_alloc.clone());
    let l1_header = l1_genesis.to_header();
    let l1_block = BlockID::new(l1_header.hash_slow(), l1_header.number);
    debug!(target: "e2e_setup", "L1 genesis block: {l1_block}");

    let l1_genesis_time = deploy_config.l1_genesis_block_timestamp;
    let l2_allocs_mode = L2AllocsMode::for_config(&deploy_config, l1_genesis_time)?;
    let preset =
        fixtures.l2_allocs(l2_allocs_mode).ok_or(SetupError::MissingAllocsPreset(l2_allocs_mode))?;

    let mut l2_genesis = build_l2_genesis(&deploy_config, preset, &l1_header)?;
    prefund(&mut l2_genesis.alloc);
    l2_genesis.alloc.extend(alloc.l2_alloc.clone());
    let l2_block = l2_genesis.to_block_id();

    let system_config = deploy_config.genesis_system_config();
    let found = l2_genesis.system_config_at_l1_block();
    if found != Some(system_config) {
        return Err(SetupError::GenesisSystemConfigMismatch { expected: system_config, found });
    }

    let plasma_config = deploy_config.use_plasma.then(|| PlasmaConfig {
        da_challenge_address: deployments_l1.data_availability_challenge_proxy,
        da_challenge_window: deploy_config.da_challenge_window,
        da_resolve_window: deploy_config.da_resolve_window,
        commitment_type: deploy_config.da_commitment_type,
    });

    let rollup_config = RollupConfig {
        genesis: ChainGenesis {
            l1: l1_block,
            l2: l2_block,
            l2_time: l2_genesis.timestamp,
            system_config,
        },
        block_time: deploy_config.l2_block_time,
        max_sequencer_drift: deploy_config.max_sequencer_drift,
        seq_window_size: deploy_config.sequencer_window_size,
        channel_timeout: deploy_config.channel_timeout,
        l1_chain_id: deploy_config.l1_chain_id,
        l2_chain_id: deploy_config.l2_chain_id,
        hardforks: deploy_config.activation_times(l1_genesis_time)?,
        batch_inbox_address: deploy_config.batch_inbox_address,
        deposit_contract_address: deploy_config.optimism_portal_proxy,
        l1_system_config_address: deploy_config.system_config_proxy,
        plasma_config,
    };
    rollup_config.check()?;
    let chain_spec = ChainSpec::from(rollup_config.clone());

    let addresses = params.mnemonic_config.secrets()?.addresses();
    check_role_addresses(&deploy_config, &addresses)?;

    info!(
        target: "e2e_setup",
        "Synthesized test network | L1: {} | L2: {} | Preset: {} | Plasma: {}",
        l1_block,
        l2_block,
        l2_allocs_mode,
        rollup_config.plasma_config.is_some()
    );

    Ok(SetupData {
        l1_genesis,
        l2_genesis,
        rollup_config,
        chain_spec,
        deployments_l1,
        l2_allocs_mode,
    })
}
