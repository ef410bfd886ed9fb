//! Command line arguments of the testnet binary.

use anyhow::{anyhow, Result};
use clap::{ArgAction, Parser};
use kona_e2e::{AllocParams, E2eFlags, TestParams};
use kona_genesis::{ForkFlags, Hardfork};
use kona_timeint::Seconds;
use tracing::Level;

/// Synthesizes an OP Stack test network and prints it as JSON.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
pub(crate) struct TestnetCli {
    /// Verbosity level (0-4)
    #[arg(long, short, help = "Verbosity level (0 [error] - 4 [trace])", action = ArgAction::Count)]
    pub(crate) v: u8,
    /// Activate Delta from genesis. Also enabled by `OP_E2E_USE_DELTA=true`.
    #[arg(long)]
    pub(crate) use_delta: bool,
    /// Activate Ecotone, and every earlier upgrade, from genesis. Also enabled by
    /// `OP_E2E_USE_ECOTONE=true`.
    #[arg(long)]
    pub(crate) use_ecotone: bool,
    /// Activate Fjord, and every earlier upgrade, from genesis. Also enabled by
    /// `OP_E2E_USE_FJORD=true`.
    #[arg(long)]
    pub(crate) use_fjord: bool,
    /// Settle outputs through the L2 output oracle instead of fault proofs. Also enabled by
    /// `OP_E2E_USE_L2OO=true`.
    #[arg(long)]
    pub(crate) use_l2oo: bool,
    /// Enable the plasma DA layer. Also enabled by `OP_E2E_USE_PLASMA=true`.
    #[arg(long)]
    pub(crate) use_plasma: bool,
    /// Maximum drift of an L2 timestamp past its L1 origin, in seconds.
    #[arg(long, default_value_t = 600)]
    pub(crate) max_sequencer_drift: u64,
    /// Sequencing window size, in L1 blocks.
    #[arg(long, default_value_t = 3600)]
    pub(crate) sequencer_window_size: u64,
    /// Channel timeout, in L1 blocks.
    #[arg(long, default_value_t = 300)]
    pub(crate) channel_timeout: u64,
    /// L1 block time, in seconds.
    #[arg(long, default_value_t = 12)]
    pub(crate) l1_block_time: u64,
    /// Credit every test account with a large balance on both chains.
    #[arg(long)]
    pub(crate) prefund: bool,
    /// Also print the methods of a pinned Engine API version (1-3).
    #[arg(long)]
    pub(crate) engine_version: Option<i64>,
}

impl TestnetCli {
    /// Returns the switches merged with the flags of the process environment.
    pub(crate) fn flags(&self) -> E2eFlags {
        self.flags_with(E2eFlags::from_env())
    }

    /// Returns the switches merged with `env`. A flag is set if either source sets it.
    pub(crate) fn flags_with(&self, env: E2eFlags) -> E2eFlags {
        let fork = |fork: Hardfork, switch: bool| switch || env.forks.is_enabled(fork);
        E2eFlags {
            forks: ForkFlags::new()
                .with_flag(Hardfork::Delta, fork(Hardfork::Delta, self.use_delta))
                .with_flag(Hardfork::Ecotone, fork(Hardfork::Ecotone, self.use_ecotone))
                .with_flag(Hardfork::Fjord, fork(Hardfork::Fjord, self.use_fjord)),
            use_l2oo: self.use_l2oo || env.use_l2oo,
            use_plasma: self.use_plasma || env.use_plasma,
        }
    }

    /// Returns the protocol tunables, with plasma taken from the merged `flags`.
    pub(crate) const fn test_params(&self, flags: &E2eFlags) -> TestParams {
        TestParams {
            max_sequencer_drift: Seconds(self.max_sequencer_drift),
            sequencer_window_size: self.sequencer_window_size,
            channel_timeout: self.channel_timeout,
            l1_block_time: Seconds(self.l1_block_time),
            use_plasma: flags.use_plasma,
        }
    }

    /// Returns the allocation overrides.
    pub(crate) fn alloc_params(&self) -> AllocParams {
        AllocParams { prefund_test_users: self.prefund, ..Default::default() }
    }
}

/// Initializes the tracing subscriber
///
/// # Arguments
/// * `verbosity_level` - The verbosity level (0-4)
///
/// # Returns
/// * `Result<()>` - Ok if successful, Err otherwise.
pub(crate) fn init_tracing_subscriber(verbosity_level: u8) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(match verbosity_level {
            0 => Level::ERROR,
            1 => Level::WARN,
            2 => Level::INFO,
            3 => Level::DEBUG,
            _ => Level::TRACE,
        })
        .finish();
    tracing::subscriber::set_global_default(subscriber).map_err(|e| anyhow!(e))
}
