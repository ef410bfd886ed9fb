//! Sources of "now".

use crate::{Milliseconds, Seconds, TimeResult};
use core::sync::atomic::{AtomicU64, Ordering};
#[cfg(feature = "std")]
use tracing::warn;

/// A source of the current time.
pub trait Clock {
    /// Returns the current time.
    fn now(&self) -> Milliseconds;

    /// Returns the current time floored to whole seconds.
    fn now_seconds(&self) -> Seconds {
        self.now().to_seconds()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Milliseconds {
        (**self).now()
    }
}

/// A [Clock] backed by the host's wall-clock time.
#[cfg(feature = "std")]
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

#[cfg(feature = "std")]
impl Clock for SystemClock {
    fn now(&self) -> Milliseconds {
        millis_since_epoch(std::time::SystemTime::now())
    }
}

/// Converts `time` to milliseconds since the Unix epoch. Times before the epoch read as the
/// epoch.
#[cfg(feature = "std")]
fn millis_since_epoch(time: std::time::SystemTime) -> Milliseconds {
    match time.duration_since(std::time::UNIX_EPOCH) {
        Ok(since_epoch) => Milliseconds(u64::try_from(since_epoch.as_millis()).unwrap_or(u64::MAX)),
        Err(err) => {
            warn!(
                target: "clock",
                "Host clock is {:?} before the Unix epoch, reading as the epoch",
                err.duration()
            );
            Milliseconds::ZERO
        }
    }
}

/// A settable [Clock] holding a single value.
///
/// The value lives in one atomic slot, so readers never observe a torn write. A clock that was
/// never set reads as the Unix epoch. `u64::MAX` marks the unset slot, so the latest instant the
/// clock can hold is one millisecond earlier and later values saturate to it.
#[derive(Debug)]
pub struct SimpleClock {
    millis: AtomicU64,
}

impl SimpleClock {
    /// Slot value marking a clock that has not been set.
    const UNSET: u64 = u64::MAX;

    /// The latest instant the clock can hold.
    pub const MAX: Milliseconds = Milliseconds(Self::UNSET - 1);

    const fn slot(t: Milliseconds) -> u64 {
        if t.0 == Self::UNSET {
            Self::MAX.0
        } else {
            t.0
        }
    }

    /// Creates a new, unset [SimpleClock].
    pub const fn new() -> Self {
        Self { millis: AtomicU64::new(Self::UNSET) }
    }

    /// Creates a [SimpleClock] already set to `t`.
    pub const fn at(t: Milliseconds) -> Self {
        Self { millis: AtomicU64::new(Self::slot(t)) }
    }

    /// Sets the clock to `t`.
    pub fn set(&self, t: Milliseconds) {
        self.millis.store(Self::slot(t), Ordering::Release);
    }

    /// Sets the clock to the whole second `t`.
    pub fn set_time(&self, t: Seconds) -> TimeResult<()> {
        self.set(t.to_millis()?);
        Ok(())
    }

    /// Returns `true` if the clock has been set.
    pub fn is_set(&self) -> bool {
        self.millis.load(Ordering::Acquire) != Self::UNSET
    }
}

impl Default for SimpleClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SimpleClock {
    fn now(&self) -> Milliseconds {
        match self.millis.load(Ordering::Acquire) {
            Self::UNSET => Milliseconds::ZERO,
            v => Milliseconds(v),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{sync::Arc, thread};

    #[test]
    fn test_unset_clock_reads_epoch() {
        let clock = SimpleClock::new();
        assert!(!clock.is_set());
        assert_eq!(clock.now(), Milliseconds::ZERO);
        assert_eq!(clock.now_seconds(), Seconds::ZERO);
    }

    #[test]
    fn test_set_time() {
        let clock = SimpleClock::default();
        clock.set_time(Seconds(1_700_000_000)).unwrap();
        assert!(clock.is_set());
        assert_eq!(clock.now(), Milliseconds(1_700_000_000_000));
        assert_eq!(clock.now_seconds(), Seconds(1_700_000_000));
    }

    #[test]
    fn test_set_time_overflow_leaves_clock_untouched() {
        let clock = SimpleClock::at(Milliseconds(5));
        assert!(clock.set_time(Seconds(u64::MAX)).is_err());
        assert_eq!(clock.now(), Milliseconds(5));
    }

    #[test]
    fn test_max_instant_saturates_and_stays_set() {
        let clock = SimpleClock::new();
        clock.set(Milliseconds(u64::MAX));
        assert!(clock.is_set());
        assert_eq!(clock.now(), SimpleClock::MAX);

        let clock = SimpleClock::at(Milliseconds(u64::MAX));
        assert!(clock.is_set());
        assert_eq!(clock.now(), SimpleClock::MAX);
    }

    #[test]
    #[cfg(feature = "std")]
    fn test_pre_epoch_reads_as_epoch() {
        use std::time::{Duration, UNIX_EPOCH};
        assert_eq!(millis_since_epoch(UNIX_EPOCH - Duration::from_secs(1)), Milliseconds::ZERO);
        assert_eq!(
            millis_since_epoch(UNIX_EPOCH + Duration::from_millis(1_500)),
            Milliseconds(1_500)
        );
    }

    #[test]
    fn test_sub_second_floors() {
        let clock = SimpleClock::at(Milliseconds(1_500));
        assert_eq!(clock.now_seconds(), Seconds(1));
    }

    #[test]
    fn test_concurrent_readers_see_whole_values() {
        let clock = Arc::new(SimpleClock::new());
        let writer = {
            let clock = Arc::clone(&clock);
            thread::spawn(move || {
                for i in 1..=1_000u64 {
                    clock.set(Milliseconds(i * 1_000));
                }
            })
        };
        for _ in 0..1_000 {
            let now = clock.now();
            assert!(now.is_whole_seconds());
        }
        writer.join().unwrap();
        assert_eq!(clock.now(), Milliseconds(1_000_000));
    }

    #[test]
    #[cfg(feature = "std")]
    fn test_system_clock_is_after_2020() {
        assert!(SystemClock.now_seconds() > Seconds(1_577_836_800));
    }
}
