//! Error types for the `kona-timeint` crate.

use thiserror::Error;

/// An error produced by time unit arithmetic.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeError {
    /// The product or sum does not fit in the unit's representation.
    #[error("Time arithmetic overflow: {lhs} {op} {rhs}")]
    Overflow {
        /// Left hand operand.
        lhs: u64,
        /// The operator that overflowed.
        op: char,
        /// Right hand operand.
        rhs: u64,
    },
}

/// A [Result] alias for the [TimeError] type.
pub type TimeResult<T> = core::result::Result<T, TimeError>;
