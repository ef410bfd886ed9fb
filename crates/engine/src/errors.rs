//! Error types for the `kona-engine` crate.

use thiserror::Error;

/// An Engine API version outside of the supported range.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineVersionError {
    /// The version is not 1, 2 or 3.
    #[error("Invalid Engine API version: {0}")]
    Invalid(i64),
}
