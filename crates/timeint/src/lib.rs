#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(not(any(test, feature = "std")), no_std)]

mod units;
pub use units::{Milliseconds, Seconds, MILLIS_PER_SECOND};

mod errors;
pub use errors::{TimeError, TimeResult};

mod clock;
#[cfg(feature = "std")]
pub use clock::SystemClock;
pub use clock::{Clock, SimpleClock};
