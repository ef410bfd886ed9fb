//! Error types for the `kona-e2e` crate.

use alloy_primitives::Address;
use alloy_signer_local::LocalSignerError;
use kona_genesis::{
    DeployConfigError, DeploymentError, GenesisBuildError, L2AllocsMode, RollupConfigError,
    SystemConfig,
};
use kona_timeint::TimeError;
use thiserror::Error;

/// An error deriving the test key material.
#[derive(Error, Debug)]
pub enum SecretsError {
    /// A key could not be derived from the mnemonic.
    #[error("Failed to derive the {role} key at {path}: {source}")]
    Derivation {
        /// The role whose key failed.
        role: &'static str,
        /// The derivation path.
        path: String,
        /// The underlying signer error.
        #[source]
        source: LocalSignerError,
    },
}

/// A [Result] alias for the [SecretsError] type.
pub type SecretsResult<T> = core::result::Result<T, SecretsError>;

/// An error synthesizing a test network.
#[derive(Error, Debug)]
pub enum SetupError {
    /// The deploy config failed its check.
    #[error("Invalid deploy config: {0}")]
    InvalidDeployConfig(#[from] DeployConfigError),
    /// The synthesized rollup config failed its check.
    #[error("Invalid rollup config: {0}")]
    InvalidRollupConfig(#[from] RollupConfigError),
    /// A role address in the deploy config differs from the derived key material.
    #[error("{role} address mismatch. Derived {expected}, configured {got}")]
    AddressMismatch {
        /// The role.
        role: &'static str,
        /// The address derived from the key material.
        expected: Address,
        /// The address in the deploy config.
        got: Address,
    },
    /// The L1 deployments address book disagrees with the deploy config.
    #[error("L1 deployments mismatch: {0}")]
    DeploymentMismatch(#[from] DeploymentError),
    /// A derived time is not representable.
    #[error("Time overflow: {0}")]
    Overflow(#[from] TimeError),
    /// The key material could not be derived.
    #[error(transparent)]
    Secrets(#[from] SecretsError),
    /// A genesis state could not be built.
    #[error("Failed to build genesis: {0}")]
    Genesis(#[from] GenesisBuildError),
    /// The fixtures carry no L2 allocation preset for the selected mode.
    #[error("No L2 allocation preset for {0}")]
    MissingAllocsPreset(L2AllocsMode),
    /// The system config seeded into the L2 genesis differs from the deploy config.
    #[error("L2 genesis system config {found:?} does not match the deploy config {expected:?}")]
    GenesisSystemConfigMismatch {
        /// The system config derived from the deploy config.
        expected: SystemConfig,
        /// The system config read back from the L2 genesis, if any.
        found: Option<SystemConfig>,
    },
}

/// A [Result] alias for the [SetupError] type.
pub type SetupResult<T> = core::result::Result<T, SetupError>;
