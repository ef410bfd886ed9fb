//! Deployment parameters: the devnet template with the test tunables, the upgrade flags and the
//! derived key material applied and cross-checked.

use crate::{Addresses, E2eFlags, Fixtures, MnemonicConfig, Secrets, SetupError, SetupResult};
use alloy_primitives::Address;
use kona_genesis::DeployConfig;
use kona_timeint::Seconds;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// The protocol tunables a test overrides on the deploy config template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestParams {
    /// How far the L2 timestamp may run ahead of its L1 origin.
    pub max_sequencer_drift: Seconds,
    /// Number of L1 blocks a batch may be submitted within.
    pub sequencer_window_size: u64,
    /// Number of L1 blocks a channel may stay open.
    pub channel_timeout: u64,
    /// Time between L1 blocks.
    pub l1_block_time: Seconds,
    /// Whether the plasma DA layer is enabled.
    pub use_plasma: bool,
}

impl Default for TestParams {
    fn default() -> Self {
        Self {
            max_sequencer_drift: Seconds(40),
            sequencer_window_size: 120,
            channel_timeout: 120,
            l1_block_time: Seconds(15),
            use_plasma: false,
        }
    }
}

impl TestParams {
    /// Returns `config` with the tunables overwritten.
    pub fn apply(&self, config: DeployConfig) -> DeployConfig {
        DeployConfig {
            max_sequencer_drift: self.max_sequencer_drift,
            sequencer_window_size: self.sequencer_window_size,
            channel_timeout: self.channel_timeout,
            l1_block_time: self.l1_block_time,
            use_plasma: self.use_plasma,
            ..config
        }
    }
}

/// A validated deploy config together with the key material it was checked against.
#[derive(Debug, Clone)]
pub struct DeployParams {
    /// The deploy config.
    pub deploy_config: DeployConfig,
    /// The mnemonic and derivation paths the key material came from.
    pub mnemonic_config: MnemonicConfig,
    /// The signing key of every role.
    pub secrets: Secrets,
    /// The address of every role.
    pub addresses: Addresses,
}

/// Builds the deploy parameters from the devnet template, the default mnemonic and the upgrade
/// flags of the process environment.
pub fn make_deploy_params(test_params: &TestParams) -> SetupResult<DeployParams> {
    make_deploy_params_with(
        &Fixtures::devnet().deploy_config,
        MnemonicConfig::default(),
        test_params,
        E2eFlags::from_env(),
    )
}

/// Builds the deploy parameters from `template`.
///
/// The template is cloned, overwritten with `test_params`, given the fork offsets resolved from
/// `flags` and checked. The batcher, proposer and sequencer P2P addresses of the result must
/// match the key material derived from `mnemonic_config`.
pub fn make_deploy_params_with(
    template: &DeployConfig,
    mnemonic_config: MnemonicConfig,
    test_params: &TestParams,
    flags: E2eFlags,
) -> SetupResult<DeployParams> {
    let secrets = mnemonic_config.secrets()?;
    let addresses = secrets.addresses();

    let deploy_config = DeployConfig {
        use_fault_proofs: flags.use_fault_proofs(),
        ..test_params.apply(template.clone())
    }
    .with_fork_offsets(flags.forks.resolve());
    deploy_config.check()?;
    check_role_addresses(&deploy_config, &addresses)?;

    debug!(
        target: "e2e_setup",
        "Deploy params ready | Fault proofs: {} | Plasma: {} | Offsets: {:?}",
        deploy_config.use_fault_proofs,
        deploy_config.use_plasma,
        deploy_config.l2_genesis_fork_offsets
    );

    Ok(DeployParams { deploy_config, mnemonic_config, secrets, addresses })
}

/// Checks that the role addresses configured in `config` are the derived `addresses`.
pub(crate) fn check_role_addresses(config: &DeployConfig, addresses: &Addresses) -> SetupResult<()> {
    let roles: [(&'static str, Address, Address); 3] = [
        ("batcher", addresses.batcher, config.batch_sender_address),
        ("proposer", addresses.proposer, config.l2_output_oracle_proposer),
        ("sequencer P2P", addresses.sequencer_p2p, config.p2p_sequencer_address),
    ];
    for (role, expected, got) in roles {
        if expected != got {
            return Err(SetupError::AddressMismatch { role, expected, got });
        }
    }
    Ok(())
}
