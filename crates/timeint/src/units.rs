//! Coarse and fine time units.
//!
//! Values in different units never mix implicitly. [Seconds::to_millis] is exact and can only
//! fail on overflow, [Milliseconds::to_seconds] floors.

use crate::{TimeError, TimeResult};

/// The number of [Milliseconds] in one [Seconds].
pub const MILLIS_PER_SECOND: u64 = 1_000;

/// Whole seconds since the Unix epoch, or a duration in seconds.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    derive_more::Display,
    derive_more::From,
    derive_more::Into,
)]
#[display("{_0}s")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(transparent))]
pub struct Seconds(pub u64);

/// Whole milliseconds since the Unix epoch, or a duration in milliseconds.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    derive_more::Display,
    derive_more::From,
    derive_more::Into,
)]
#[display("{_0}ms")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(transparent))]
pub struct Milliseconds(pub u64);

impl Seconds {
    /// Zero seconds. As an activation time this means "active since genesis".
    pub const ZERO: Self = Self(0);

    /// Returns the raw number of seconds.
    pub const fn as_u64(self) -> u64 {
        self.0
    }

    /// Converts to [Milliseconds]. Exact, fails only when the result is not representable.
    pub const fn to_millis(self) -> TimeResult<Milliseconds> {
        match self.0.checked_mul(MILLIS_PER_SECOND) {
            Some(ms) => Ok(Milliseconds(ms)),
            None => Err(TimeError::Overflow { lhs: self.0, op: '*', rhs: MILLIS_PER_SECOND }),
        }
    }

    /// Multiplies by a scalar, keeping the unit.
    pub const fn checked_mul(self, n: u64) -> TimeResult<Self> {
        match self.0.checked_mul(n) {
            Some(v) => Ok(Self(v)),
            None => Err(TimeError::Overflow { lhs: self.0, op: '*', rhs: n }),
        }
    }

    /// Adds another span of seconds.
    pub const fn checked_add(self, rhs: Self) -> TimeResult<Self> {
        match self.0.checked_add(rhs.0) {
            Some(v) => Ok(Self(v)),
            None => Err(TimeError::Overflow { lhs: self.0, op: '+', rhs: rhs.0 }),
        }
    }
}

impl Milliseconds {
    /// Zero milliseconds, the Unix epoch.
    pub const ZERO: Self = Self(0);

    /// Returns the raw number of milliseconds.
    pub const fn as_u64(self) -> u64 {
        self.0
    }

    /// Converts to [Seconds], discarding any sub-second remainder.
    pub const fn to_seconds(self) -> Seconds {
        Seconds(self.0 / MILLIS_PER_SECOND)
    }

    /// Returns `true` if the value converts to [Seconds] without loss.
    pub const fn is_whole_seconds(self) -> bool {
        self.0 % MILLIS_PER_SECOND == 0
    }

    /// Multiplies by a scalar, keeping the unit.
    pub const fn checked_mul(self, n: u64) -> TimeResult<Self> {
        match self.0.checked_mul(n) {
            Some(v) => Ok(Self(v)),
            None => Err(TimeError::Overflow { lhs: self.0, op: '*', rhs: n }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::{prelude::any, proptest};

    #[test]
    fn test_seconds_to_millis_exact() {
        assert_eq!(Seconds(0).to_millis(), Ok(Milliseconds(0)));
        assert_eq!(Seconds(12).to_millis(), Ok(Milliseconds(12_000)));
    }

    #[test]
    fn test_seconds_to_millis_overflow() {
        let err = Seconds(u64::MAX / 1_000 + 1).to_millis().unwrap_err();
        assert!(matches!(err, TimeError::Overflow { op: '*', rhs: 1_000, .. }));
    }

    #[test]
    fn test_millis_to_seconds_floors() {
        assert_eq!(Milliseconds(1_999).to_seconds(), Seconds(1));
        assert_eq!(Milliseconds(999).to_seconds(), Seconds::ZERO);
        assert!(!Milliseconds(1_999).is_whole_seconds());
        assert!(Milliseconds(2_000).is_whole_seconds());
    }

    #[test]
    fn test_checked_mul() {
        assert_eq!(Seconds(12).checked_mul(3_600), Ok(Seconds(43_200)));
        assert_eq!(
            Seconds(u64::MAX).checked_mul(2),
            Err(TimeError::Overflow { lhs: u64::MAX, op: '*', rhs: 2 })
        );
        assert!(Milliseconds(u64::MAX).checked_mul(2).is_err());
        assert_eq!(Seconds(u64::MAX).checked_mul(0), Ok(Seconds::ZERO));
    }

    #[test]
    fn test_checked_add() {
        assert_eq!(Seconds(1).checked_add(Seconds(2)), Ok(Seconds(3)));
        assert!(Seconds(u64::MAX).checked_add(Seconds(1)).is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Seconds(12).to_string(), "12s");
        assert_eq!(Milliseconds(12).to_string(), "12ms");
    }

    #[test]
    #[cfg(feature = "serde")]
    fn test_serde_transparent() {
        assert_eq!(serde_json::to_string(&Seconds(600)).unwrap(), "600");
        assert_eq!(serde_json::from_str::<Option<Seconds>>("0").unwrap(), Some(Seconds::ZERO));
        assert_eq!(serde_json::from_str::<Option<Seconds>>("null").unwrap(), None);
    }

    proptest! {
        #[test]
        fn test_millis_roundtrip_never_gains(ms in any::<u64>()) {
            let back = Milliseconds(ms).to_seconds().to_millis().unwrap();
            if ms % 1_000 == 0 {
                assert_eq!(back, Milliseconds(ms));
            } else {
                assert!(back < Milliseconds(ms));
            }
        }

        #[test]
        fn test_seconds_roundtrip_exact(s in 0u64..=u64::MAX / 1_000) {
            assert_eq!(Seconds(s).to_millis().unwrap().to_seconds(), Seconds(s));
        }
    }
}
