//! Error types for the `kona-genesis` crate.

use crate::Hardfork;
use alloy_primitives::Address;
use kona_timeint::{Seconds, TimeError};
use thiserror::Error;

/// A violation of the cumulative hardfork ordering.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForkOrderError {
    /// A fork is scheduled while the fork before it is not.
    #[error("Fork {fork} is scheduled but prior fork {predecessor} is not")]
    MissingPredecessor {
        /// The scheduled fork.
        fork: Hardfork,
        /// The unscheduled prior fork.
        predecessor: Hardfork,
    },
    /// A fork activates before the fork preceding it.
    #[error("Fork {fork} at {time} activates before prior fork {predecessor} at {predecessor_time}")]
    OutOfOrder {
        /// The fork that activates too early.
        fork: Hardfork,
        /// Its activation.
        time: Seconds,
        /// The prior fork.
        predecessor: Hardfork,
        /// The prior fork's activation.
        predecessor_time: Seconds,
    },
}

/// An error returned by [DeployConfig::check].
///
/// [DeployConfig::check]: crate::DeployConfig::check
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeployConfigError {
    /// The L1 chain ID is zero.
    #[error("L1 chain ID must not be zero")]
    ZeroL1ChainId,
    /// The L2 chain ID is zero.
    #[error("L2 chain ID must not be zero")]
    ZeroL2ChainId,
    /// Both layers share a chain ID.
    #[error("L1 and L2 chain IDs must differ, both are {0}")]
    SameChainIds(u64),
    /// The L2 block time is zero.
    #[error("L2 block time must not be zero")]
    ZeroL2BlockTime,
    /// L1 blocks are produced faster than L2 blocks.
    #[error("L2 block time ({l2}) must be less than or equal to L1 block time ({l1})")]
    L1BlockTimeTooShort {
        /// L1 block time.
        l1: Seconds,
        /// L2 block time.
        l2: Seconds,
    },
    /// The maximum sequencer drift is zero.
    #[error("Max sequencer drift must not be zero")]
    ZeroMaxSequencerDrift,
    /// The sequencing window is empty.
    #[error("Sequencer window size must not be zero")]
    ZeroSequencerWindowSize,
    /// The channel timeout is zero.
    #[error("Channel timeout must not be zero")]
    ZeroChannelTimeout,
    /// A required address is unset.
    #[error("{0} must not be the zero address")]
    ZeroAddress(&'static str),
    /// The output oracle submission interval is zero.
    #[error("L2 output oracle submission interval must not be zero")]
    ZeroSubmissionInterval,
    /// The withdrawal finalization period is zero.
    #[error("Finalization period must not be zero")]
    ZeroFinalizationPeriod,
    /// The L1 genesis block gas limit is zero.
    #[error("L1 genesis block gas limit must not be zero")]
    ZeroL1GasLimit,
    /// The L2 genesis block gas limit is zero.
    #[error("L2 genesis block gas limit must not be zero")]
    ZeroL2GasLimit,
    /// An EIP-1559 parameter is zero.
    #[error("{0} must not be zero")]
    ZeroEip1559Param(&'static str),
    /// The plasma challenge window is zero.
    #[error("DA challenge window must not be zero when plasma is enabled")]
    ZeroDaChallengeWindow,
    /// The plasma resolve window is zero.
    #[error("DA resolve window must not be zero when plasma is enabled")]
    ZeroDaResolveWindow,
    /// The plasma resolver refund exceeds the bond.
    #[error("DA resolver refund percentage must be at most 100, got {0}")]
    InvalidDaRefundPercentage(u64),
    /// The fork offsets are not cumulative.
    #[error("Invalid fork offsets: {0}")]
    ForkOrder(#[from] ForkOrderError),
    /// A derived duration is not representable.
    #[error("Invalid time parameter: {0}")]
    Overflow(#[from] TimeError),
}

/// A [Result] alias for the [DeployConfigError] type.
pub type DeployConfigResult<T> = core::result::Result<T, DeployConfigError>;

/// An error returned by [PlasmaConfig::check].
///
/// [PlasmaConfig::check]: crate::PlasmaConfig::check
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlasmaConfigError {
    /// The challenge contract address is zero.
    #[error("Missing DA challenge contract address")]
    MissingChallengeAddress,
    /// The challenge window is zero.
    #[error("DA challenge window must not be zero")]
    ZeroChallengeWindow,
    /// The resolve window is zero.
    #[error("DA resolve window must not be zero")]
    ZeroResolveWindow,
}

/// An error returned by [RollupConfig::check].
///
/// [RollupConfig::check]: crate::RollupConfig::check
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RollupConfigError {
    /// The L2 block time is zero.
    #[error("Block time must not be zero")]
    ZeroBlockTime,
    /// The channel timeout is zero.
    #[error("Channel timeout must not be zero")]
    ZeroChannelTimeout,
    /// The sequencing window cannot hold a batch.
    #[error("Sequencing window size must be at least 2, got {0}")]
    SeqWindowTooSmall(u64),
    /// The maximum sequencer drift is zero.
    #[error("Max sequencer drift must not be zero")]
    ZeroMaxSequencerDrift,
    /// The L1 genesis hash is unset.
    #[error("Missing L1 genesis hash")]
    MissingGenesisL1Hash,
    /// The L2 genesis hash is unset.
    #[error("Missing L2 genesis hash")]
    MissingGenesisL2Hash,
    /// The genesis system config has no gas limit.
    #[error("Genesis system config gas limit must not be zero")]
    ZeroGenesisGasLimit,
    /// The L1 chain ID is zero.
    #[error("L1 chain ID must not be zero")]
    ZeroL1ChainId,
    /// The L2 chain ID is zero.
    #[error("L2 chain ID must not be zero")]
    ZeroL2ChainId,
    /// Both layers share a chain ID.
    #[error("L1 and L2 chain IDs must differ, both are {0}")]
    SameChainIds(u64),
    /// The batch inbox address is zero.
    #[error("Missing batch inbox address")]
    MissingBatchInboxAddress,
    /// The deposit contract address is zero.
    #[error("Missing deposit contract address")]
    MissingDepositContractAddress,
    /// The L1 system config address is zero.
    #[error("Missing L1 system config address")]
    MissingSystemConfigAddress,
    /// The activation times are not ordered.
    #[error("Invalid activation times: {0}")]
    ForkOrder(#[from] ForkOrderError),
    /// The plasma sub-configuration is invalid.
    #[error("Invalid plasma config: {0}")]
    Plasma(#[from] PlasmaConfigError),
}

/// A [Result] alias for the [RollupConfigError] type.
pub type RollupConfigResult<T> = core::result::Result<T, RollupConfigError>;

/// An error returned by [L1Deployments::check].
///
/// [L1Deployments::check]: crate::L1Deployments::check
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeploymentError {
    /// A contract required by the deploy config is not in the address book.
    #[error("Missing L1 deployment: {0}")]
    MissingDeployment(&'static str),
    /// The deploy config names a different address than the address book.
    #[error("L1 deployment {name} mismatch. Address book has {book}, deploy config has {config}")]
    Mismatch {
        /// The contract name.
        name: &'static str,
        /// Address recorded in the address book.
        book: Address,
        /// Address named by the deploy config.
        config: Address,
    },
}

/// A [Result] alias for the [DeploymentError] type.
pub type DeploymentResult<T> = core::result::Result<T, DeploymentError>;

/// An error returned while constructing a genesis state.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenesisBuildError {
    /// A deployed L1 contract has no code in the allocation table.
    #[error("L1 deployment {name} at {address} has no code in the allocation table")]
    MissingDeployedCode {
        /// The contract name.
        name: &'static str,
        /// The contract address.
        address: Address,
    },
    /// A predeploy is absent from the L2 allocation preset.
    #[error("Predeploy {name} at {address} is missing from the allocation preset")]
    MissingPredeploy {
        /// The predeploy name.
        name: &'static str,
        /// The predeploy address.
        address: Address,
    },
    /// A fork activation time is not representable.
    #[error("Invalid activation time: {0}")]
    Time(#[from] TimeError),
}

/// A [Result] alias for the [GenesisBuildError] type.
pub type GenesisBuildResult<T> = core::result::Result<T, GenesisBuildError>;
