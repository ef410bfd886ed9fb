//! The devnet chain fixtures: the deploy config template, the L1 address book and the
//! allocation tables the genesis states are built from.

use alloy_primitives::{address, Bytes, U256};
use kona_genesis::{
    predeploys::{BEACON_ROOTS, REQUIRED_PREDEPLOYS},
    CommitmentType, DeployConfig, ForkFlags, GenesisAccount, GenesisAlloc, L1Deployments,
    L2AllocsMode,
};
use kona_timeint::Seconds;
use std::{collections::BTreeMap, sync::LazyLock};

static DEVNET: LazyLock<Fixtures> = LazyLock::new(Fixtures::build_devnet);

/// The inputs a test network is synthesized from.
///
/// Fixtures are only read. Every transform of the template works on a clone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fixtures {
    /// The deploy config template.
    pub deploy_config: DeployConfig,
    /// The L1 contracts the template was deployed with.
    pub l1_deployments: L1Deployments,
    /// The L1 allocation table holding the deployed contracts.
    pub l1_allocs: GenesisAlloc,
    /// The L2 allocation presets.
    pub l2_allocs: BTreeMap<L2AllocsMode, GenesisAlloc>,
}

impl Fixtures {
    /// Returns the shared devnet fixtures.
    pub fn devnet() -> &'static Self {
        &DEVNET
    }

    /// Returns the L2 allocation preset for `mode`.
    pub fn l2_allocs(&self, mode: L2AllocsMode) -> Option<&GenesisAlloc> {
        self.l2_allocs.get(&mode)
    }

    fn build_devnet() -> Self {
        let l1_deployments = L1Deployments {
            address_manager: address!("8a791620dd6260079bf849dc5567adc3f2fdc318"),
            proxy_admin: address!("610178da211fef7d417bc0e6fed39f05609ad788"),
            l1_cross_domain_messenger_proxy: address!("b7f8bc63bbcad18155201308c8f3540b07f84f5e"),
            l1_erc721_bridge_proxy: address!("a51c1fc2f0d1a1b8494ed1fe312d7c3a78ed91c0"),
            l1_standard_bridge_proxy: address!("0dcd1bf9a1b36ce34237eeafef220932846bcd82"),
            l2_output_oracle_proxy: address!("9a676e781a523b5d0c0e43731313a708cb607508"),
            optimism_portal_proxy: address!("959922be3caee4b8cd9a407cc3ac1c251c2007b1"),
            system_config_proxy: address!("68b1d87f95878fe05b998f19b66f4baba5de1aed"),
            dispute_game_factory_proxy: address!("3aa5ebb10dc797cac828524e59a333d0a371443c"),
            data_availability_challenge_proxy: address!("c6e7df5e7b4f2a278906862b61205850344d4e7d"),
            protocol_versions_proxy: address!("59b670e9fa9d0a427751af201d676719a970857b"),
            superchain_config_proxy: address!("4ed7c70f96b99c776995fb64377f0d4ab3b0e1c1"),
        };

        let deploy_config = DeployConfig {
            l1_chain_id: 900,
            l2_chain_id: 901,
            l1_block_time: Seconds(6),
            l2_block_time: Seconds(2),
            max_sequencer_drift: Seconds(300),
            sequencer_window_size: 200,
            channel_timeout: 120,
            p2p_sequencer_address: address!("9965507d1a55bcc2695c58ba16fb37d819b0a4dc"),
            batch_inbox_address: address!("ff00000000000000000000000000000000000901"),
            batch_sender_address: address!("15d34aaf54267db7d7c367839aaf71a00a2c6a65"),
            l2_output_oracle_submission_interval: 10,
            l2_output_oracle_proposer: address!("90f79bf6eb2c4f870365e785982e1f101e93b906"),
            l2_output_oracle_challenger: address!("14dc79964da2c08b23698b3d3cc7ca32193d9955"),
            finalization_period_seconds: Seconds(2),
            final_system_owner: address!("a0ee7a142d267c1f36714e4a8f75612f20a79720"),
            proxy_admin_owner: address!("a0ee7a142d267c1f36714e4a8f75612f20a79720"),
            l1_genesis_block_timestamp: Seconds::ZERO,
            l1_genesis_block_gas_limit: 30_000_000,
            l1_genesis_block_base_fee_per_gas: 1_000_000_000,
            l2_genesis_block_gas_limit: 30_000_000,
            l2_genesis_block_base_fee_per_gas: 1_000_000_000,
            l2_genesis_fork_offsets: ForkFlags::new().resolve(),
            gas_price_oracle_overhead: 2100,
            gas_price_oracle_scalar: 0,
            gas_price_oracle_base_fee_scalar: 1368,
            gas_price_oracle_blob_base_fee_scalar: 810_949,
            eip1559_elasticity: 6,
            eip1559_denominator: 50,
            eip1559_denominator_canyon: 250,
            use_fault_proofs: true,
            use_plasma: false,
            da_commitment_type: CommitmentType::Keccak,
            da_challenge_window: 16,
            da_resolve_window: 16,
            da_bond_size: 1_000_000,
            da_resolver_refund_percentage: 0,
            ..Default::default()
        }
        .with_deployments(&l1_deployments);

        let mut l1_allocs: GenesisAlloc = l1_deployments
            .deployed()
            .map(|(_, address)| (address, GenesisAccount::with_code(stand_in_code(0x01))))
            .collect();
        l1_allocs.insert(
            address!("f39fd6e51aad88f6f4ce6ab8827279cfffb92266"),
            GenesisAccount::with_balance(U256::from(10).pow(U256::from(24))),
        );

        let l2_allocs = [L2AllocsMode::Delta, L2AllocsMode::Ecotone]
            .into_iter()
            .map(|mode| (mode, l2_preset(mode)))
            .collect();

        Self { deploy_config, l1_deployments, l1_allocs, l2_allocs }
    }
}

/// Builds the predeploy table of `mode`.
fn l2_preset(mode: L2AllocsMode) -> GenesisAlloc {
    let tag = match mode {
        L2AllocsMode::Delta => 0x02,
        L2AllocsMode::Ecotone => 0x03,
    };
    let mut alloc: GenesisAlloc = REQUIRED_PREDEPLOYS
        .into_iter()
        .map(|(_, address)| (address, GenesisAccount::with_code(stand_in_code(tag))))
        .collect();
    if mode == L2AllocsMode::Ecotone {
        alloc.insert(BEACON_ROOTS, GenesisAccount::with_code(stand_in_code(tag)));
    }
    alloc
}

/// Stand-in contract code: `PUSH1 tag PUSH1 0 MSTORE8 PUSH1 1 PUSH1 0 RETURN`.
fn stand_in_code(tag: u8) -> Bytes {
    Bytes::from(vec![0x60, tag, 0x60, 0x00, 0x53, 0x60, 0x01, 0x60, 0x00, 0xf3])
}
