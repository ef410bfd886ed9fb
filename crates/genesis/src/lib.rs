#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(not(any(test, feature = "std")), no_std)]

extern crate alloc;

mod errors;
pub use errors::{
    DeployConfigError, DeployConfigResult, DeploymentError, DeploymentResult, ForkOrderError,
    GenesisBuildError, GenesisBuildResult, PlasmaConfigError, RollupConfigError,
    RollupConfigResult,
};

mod block;
pub use block::BlockID;

mod hardfork;
pub use hardfork::{ActivationTimeline, ForkFlags, Hardfork};

mod system_config;
pub use system_config::SystemConfig;

mod plasma;
pub use plasma::{CommitmentType, PlasmaConfig};

mod deploy_config;
pub use deploy_config::{DeployConfig, L1_SCALAR_ECOTONE};

mod deployments;
pub use deployments::L1Deployments;

mod rollup;
pub use rollup::{ChainGenesis, RollupConfig};

mod chain_spec;
pub use chain_spec::{
    ChainSpec, MAX_CHANNEL_BANK_SIZE_BEDROCK, MAX_CHANNEL_BANK_SIZE_FJORD,
    MAX_RLP_BYTES_PER_CHANNEL_BEDROCK, MAX_RLP_BYTES_PER_CHANNEL_FJORD, MAX_SEQUENCER_DRIFT_FJORD,
};

pub mod predeploys;

mod state;
pub use state::{ChainConfig, Genesis, GenesisAccount, GenesisAlloc, OptimismParams};

mod builder;
pub use builder::{build_l1_developer_genesis, build_l2_genesis, L2AllocsMode, BEDROCK_EXTRA_DATA};

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
