#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(not(any(test, feature = "std")), no_std)]

mod errors;
pub use errors::EngineVersionError;

mod method;
pub use method::{resolve_engine_methods, EngineApiMethod, EngineMethods, EngineVersion};

mod provider;
pub use provider::{EngineVersionProvider, StaticVersionProvider};
