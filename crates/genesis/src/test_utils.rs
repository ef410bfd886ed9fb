//! Test utilities for the `kona-genesis` crate.

use crate::{
    predeploys::{BEACON_ROOTS, REQUIRED_PREDEPLOYS},
    ActivationTimeline, BlockID, ChainGenesis, CommitmentType, DeployConfig, ForkFlags,
    GenesisAccount, GenesisAlloc, Hardfork, L1Deployments, L2AllocsMode, RollupConfig,
};
use alloy_primitives::{address, b256, Address, Bytes};
use kona_timeint::Seconds;

/// Returns a deploy config that passes [DeployConfig::check], with the baseline upgrades
/// active from genesis.
pub fn test_deploy_config() -> DeployConfig {
    DeployConfig {
        l1_chain_id: 900,
        l2_chain_id: 901,
        l1_block_time: Seconds(12),
        l2_block_time: Seconds(2),
        max_sequencer_drift: Seconds(600),
        sequencer_window_size: 3600,
        channel_timeout: 300,
        p2p_sequencer_address: address!("9965507d1a55bcc2695c58ba16fb37d819b0a4dc"),
        batch_inbox_address: address!("ff00000000000000000000000000000000000901"),
        batch_sender_address: address!("15d34aaf54267db7d7c367839aaf71a00a2c6a65"),
        l2_output_oracle_submission_interval: 6,
        l2_output_oracle_proposer: address!("90f79bf6eb2c4f870365e785982e1f101e93b906"),
        l2_output_oracle_challenger: address!("14dc79964da2c08b23698b3d3cc7ca32193d9955"),
        finalization_period_seconds: Seconds(12),
        final_system_owner: address!("a0ee7a142d267c1f36714e4a8f75612f20a79720"),
        proxy_admin_owner: address!("a0ee7a142d267c1f36714e4a8f75612f20a79720"),
        l1_genesis_block_timestamp: Seconds(1_700_000_000),
        l1_genesis_block_gas_limit: 30_000_000,
        l1_genesis_block_base_fee_per_gas: 1_000_000_000,
        l2_genesis_block_gas_limit: 30_000_000,
        l2_genesis_block_base_fee_per_gas: 1_000_000_000,
        l2_genesis_fork_offsets: ForkFlags::new().resolve(),
        gas_price_oracle_overhead: 2100,
        gas_price_oracle_scalar: 1_000_000,
        gas_price_oracle_base_fee_scalar: 1368,
        gas_price_oracle_blob_base_fee_scalar: 810_949,
        eip1559_elasticity: 6,
        eip1559_denominator: 50,
        eip1559_denominator_canyon: 250,
        use_fault_proofs: false,
        use_plasma: false,
        da_commitment_type: CommitmentType::Keccak,
        da_challenge_window: 16,
        da_resolve_window: 16,
        da_bond_size: 1_000_000,
        da_resolver_refund_percentage: 0,
        ..Default::default()
    }
    .with_deployments(&test_l1_deployments())
}

/// Returns an address book with every contract deployed.
pub fn test_l1_deployments() -> L1Deployments {
    L1Deployments {
        address_manager: Address::with_last_byte(0x01),
        proxy_admin: Address::with_last_byte(0x02),
        l1_cross_domain_messenger_proxy: Address::with_last_byte(0x03),
        l1_erc721_bridge_proxy: Address::with_last_byte(0x04),
        l1_standard_bridge_proxy: Address::with_last_byte(0x05),
        l2_output_oracle_proxy: Address::with_last_byte(0x06),
        optimism_portal_proxy: Address::with_last_byte(0x07),
        system_config_proxy: Address::with_last_byte(0x08),
        dispute_game_factory_proxy: Address::with_last_byte(0x09),
        data_availability_challenge_proxy: Address::with_last_byte(0x0a),
        protocol_versions_proxy: Address::with_last_byte(0x0b),
        superchain_config_proxy: Address::with_last_byte(0x0c),
    }
}

/// Returns an L1 allocation table with stand-in code at every deployed contract.
pub fn test_l1_allocs(deployments: &L1Deployments) -> GenesisAlloc {
    deployments
        .deployed()
        .map(|(_, address)| (address, GenesisAccount::with_code(Bytes::from_static(&[0x00]))))
        .collect()
}

/// Returns an L2 allocation preset with stand-in code at every predeploy.
pub fn test_l2_allocs(mode: L2AllocsMode) -> GenesisAlloc {
    let mut allocs: GenesisAlloc = REQUIRED_PREDEPLOYS
        .into_iter()
        .map(|(_, address)| (address, GenesisAccount::with_code(Bytes::from_static(&[0x00]))))
        .collect();
    if mode == L2AllocsMode::Ecotone {
        allocs.insert(BEACON_ROOTS, GenesisAccount::with_code(Bytes::from_static(&[0x00])));
    }
    allocs
}

/// Returns a rollup config that passes [RollupConfig::check].
pub fn test_rollup_config() -> RollupConfig {
    let deploy = test_deploy_config();
    RollupConfig {
        genesis: ChainGenesis {
            l1: BlockID::new(
                b256!("438335a20d98863a4c0c97999eb2481921ccd28553eac6f913af7c12aec04108"),
                0,
            ),
            l2: BlockID::new(
                b256!("dbf6a80fef073de06add9b0d14026d6e5a86c85f6d102c36d3d8e9cf89c2afd3"),
                0,
            ),
            l2_time: deploy.l1_genesis_block_timestamp,
            system_config: deploy.genesis_system_config(),
        },
        block_time: deploy.l2_block_time,
        max_sequencer_drift: deploy.max_sequencer_drift,
        seq_window_size: deploy.sequencer_window_size,
        channel_timeout: deploy.channel_timeout,
        l1_chain_id: deploy.l1_chain_id,
        l2_chain_id: deploy.l2_chain_id,
        hardforks: ActivationTimeline::default()
            .with(Hardfork::Regolith, Some(Seconds::ZERO))
            .with(Hardfork::Canyon, Some(Seconds::ZERO)),
        batch_inbox_address: deploy.batch_inbox_address,
        deposit_contract_address: deploy.optimism_portal_proxy,
        l1_system_config_address: deploy.system_config_proxy,
        plasma_config: None,
    }
}
