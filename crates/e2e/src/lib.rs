#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod errors;
pub use errors::{SecretsError, SecretsResult, SetupError, SetupResult};

mod secrets;
pub use secrets::{Addresses, MnemonicConfig, Secrets, TEST_MNEMONIC};

mod flags;
pub use flags::{
    E2eFlags, USE_DELTA_ENV, USE_ECOTONE_ENV, USE_FJORD_ENV, USE_L2OO_ENV, USE_PLASMA_ENV,
};

mod fixtures;
pub use fixtures::Fixtures;

mod params;
pub use params::{make_deploy_params, make_deploy_params_with, DeployParams, TestParams};

mod setup;
pub use setup::{ether, setup, setup_with, AllocParams, SetupData};
