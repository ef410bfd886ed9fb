//! Main entrypoint for the testnet binary.

use anyhow::Result;
use clap::Parser;
use kona_e2e::{make_deploy_params_with, setup, Fixtures, MnemonicConfig, SetupData};
use kona_engine::{EngineMethods, EngineVersion, EngineVersionProvider};
use serde::Serialize;
use tracing::info;

mod cli;
use cli::{init_tracing_subscriber, TestnetCli};

/// The Engine API methods in effect at L2 genesis.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenesisEngineMethods {
    new_payload: &'static str,
    get_payload: &'static str,
}

/// The printed report.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Report {
    #[serde(flatten)]
    setup: SetupData,
    genesis_engine_methods: GenesisEngineMethods,
    #[serde(skip_serializing_if = "Option::is_none")]
    pinned_engine_methods: Option<EngineMethods>,
}

fn main() -> Result<()> {
    let cli = TestnetCli::parse();
    init_tracing_subscriber(cli.v)?;

    let pinned_engine_methods =
        cli.engine_version.map(EngineVersion::try_from).transpose()?.map(EngineVersion::methods);

    let flags = cli.flags();
    let params = make_deploy_params_with(
        &Fixtures::devnet().deploy_config,
        MnemonicConfig::default(),
        &cli.test_params(&flags),
        flags,
    )?;
    let network = setup(&params, &cli.alloc_params())?;

    let l2_time = network.rollup_config.genesis.l2_time.to_millis()?;
    let genesis_engine_methods = GenesisEngineMethods {
        new_payload: network.chain_spec.new_payload_version(l2_time).as_str(),
        get_payload: network.chain_spec.get_payload_version(l2_time).as_str(),
    };
    info!(
        target: "testnet",
        "Synthesized network | L1 chain ID: {} | L2 chain ID: {} | New payload: {}",
        network.rollup_config.l1_chain_id,
        network.rollup_config.l2_chain_id,
        genesis_engine_methods.new_payload
    );

    let report = Report { setup: network, genesis_engine_methods, pinned_engine_methods };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
