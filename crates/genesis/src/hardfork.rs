//! Network upgrades, the flags that enable them, and their activation timeline.

use crate::ForkOrderError;
use kona_timeint::{Seconds, TimeResult};

/// A named network upgrade. Upgrades are totally ordered and cumulative: a later upgrade
/// requires every earlier one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Hardfork {
    /// Regolith, the first post-Bedrock upgrade.
    #[display("regolith")]
    Regolith,
    /// Canyon.
    #[display("canyon")]
    Canyon,
    /// Delta, introduces span batches.
    #[display("delta")]
    Delta,
    /// Ecotone, introduces blob data availability.
    #[display("ecotone")]
    Ecotone,
    /// Fjord.
    #[display("fjord")]
    Fjord,
    /// Interop.
    #[display("interop")]
    Interop,
}

impl Hardfork {
    /// The number of known upgrades.
    pub const COUNT: usize = 6;

    /// Every upgrade, oldest first.
    pub const ALL: [Self; Self::COUNT] =
        [Self::Regolith, Self::Canyon, Self::Delta, Self::Ecotone, Self::Fjord, Self::Interop];

    /// Returns the upgrade directly before this one, if any.
    pub const fn predecessor(self) -> Option<Self> {
        match self {
            Self::Regolith => None,
            Self::Canyon => Some(Self::Regolith),
            Self::Delta => Some(Self::Canyon),
            Self::Ecotone => Some(Self::Delta),
            Self::Fjord => Some(Self::Ecotone),
            Self::Interop => Some(Self::Fjord),
        }
    }

    /// Returns `true` for the baseline upgrades that are always active from genesis.
    pub const fn is_baseline(self) -> bool {
        matches!(self, Self::Regolith | Self::Canyon)
    }

    const fn index(self) -> usize {
        self as usize
    }
}

/// A set of "activate from genesis" flags, one per [Hardfork].
///
/// The set is taken as given; [ForkFlags::resolve] applies the cumulative rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ForkFlags {
    enabled: [bool; Hardfork::COUNT],
}

impl ForkFlags {
    /// Creates an empty flag set.
    pub const fn new() -> Self {
        Self { enabled: [false; Hardfork::COUNT] }
    }

    /// Returns the flag set with `fork` enabled.
    pub fn with(mut self, fork: Hardfork) -> Self {
        self.enabled[fork.index()] = true;
        self
    }

    /// Returns the flag set with `fork` set to `enabled`.
    pub fn with_flag(mut self, fork: Hardfork, enabled: bool) -> Self {
        self.enabled[fork.index()] = enabled;
        self
    }

    /// Returns `true` if `fork` was explicitly enabled.
    pub const fn is_enabled(&self, fork: Hardfork) -> bool {
        self.enabled[fork.index()]
    }

    /// Resolves the flags into genesis-relative activation offsets.
    ///
    /// Walking from the newest upgrade to the oldest, once any upgrade is enabled every older
    /// upgrade is enabled too. The baseline upgrades are always enabled. Enabled upgrades activate
    /// at offset zero, the rest never activate.
    pub fn resolve(&self) -> ActivationTimeline {
        let mut timeline = ActivationTimeline::default();
        let mut floor = false;
        for fork in Hardfork::ALL.into_iter().rev() {
            floor |= self.is_enabled(fork) || fork.is_baseline();
            if floor {
                timeline = timeline.with(fork, Some(Seconds::ZERO));
            }
        }
        timeline
    }
}

/// An optional activation per [Hardfork]. `None` means the upgrade never activates.
///
/// Depending on context the values are offsets from genesis (deploy configuration) or
/// activation timestamps (rollup configuration).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActivationTimeline {
    /// Regolith activation.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub regolith_time: Option<Seconds>,
    /// Canyon activation.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub canyon_time: Option<Seconds>,
    /// Delta activation.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub delta_time: Option<Seconds>,
    /// Ecotone activation.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub ecotone_time: Option<Seconds>,
    /// Fjord activation.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub fjord_time: Option<Seconds>,
    /// Interop activation.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub interop_time: Option<Seconds>,
}

impl ActivationTimeline {
    /// Returns the activation of `fork`.
    pub const fn get(&self, fork: Hardfork) -> Option<Seconds> {
        match fork {
            Hardfork::Regolith => self.regolith_time,
            Hardfork::Canyon => self.canyon_time,
            Hardfork::Delta => self.delta_time,
            Hardfork::Ecotone => self.ecotone_time,
            Hardfork::Fjord => self.fjord_time,
            Hardfork::Interop => self.interop_time,
        }
    }

    /// Returns the timeline with the activation of `fork` replaced.
    pub const fn with(mut self, fork: Hardfork, time: Option<Seconds>) -> Self {
        match fork {
            Hardfork::Regolith => self.regolith_time = time,
            Hardfork::Canyon => self.canyon_time = time,
            Hardfork::Delta => self.delta_time = time,
            Hardfork::Ecotone => self.ecotone_time = time,
            Hardfork::Fjord => self.fjord_time = time,
            Hardfork::Interop => self.interop_time = time,
        }
        self
    }

    /// Iterates over every upgrade and its activation, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = (Hardfork, Option<Seconds>)> + '_ {
        Hardfork::ALL.into_iter().map(|fork| (fork, self.get(fork)))
    }

    /// Returns `true` if `fork` is active at `timestamp`.
    pub fn is_active(&self, fork: Hardfork, timestamp: Seconds) -> bool {
        self.get(fork).is_some_and(|t| timestamp >= t)
    }

    /// Checks that the timeline is cumulative: a scheduled upgrade has a scheduled predecessor
    /// that activates no later than it does.
    pub fn check(&self) -> Result<(), ForkOrderError> {
        for fork in Hardfork::ALL {
            let Some(predecessor) = fork.predecessor() else { continue };
            match (self.get(predecessor), self.get(fork)) {
                (None, Some(_)) => {
                    return Err(ForkOrderError::MissingPredecessor { fork, predecessor });
                }
                (Some(predecessor_time), Some(time)) if predecessor_time > time => {
                    return Err(ForkOrderError::OutOfOrder {
                        fork,
                        time,
                        predecessor,
                        predecessor_time,
                    });
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Converts genesis-relative offsets into activation timestamps.
    ///
    /// An offset of zero maps to timestamp zero (active since genesis), any other offset to
    /// `genesis + offset`.
    pub fn at_genesis(&self, genesis: Seconds) -> TimeResult<Self> {
        let mut timeline = Self::default();
        for (fork, offset) in self.iter() {
            let time = match offset {
                None => None,
                Some(Seconds::ZERO) => Some(Seconds::ZERO),
                Some(offset) => Some(genesis.checked_add(offset)?),
            };
            timeline = timeline.with(fork, time);
        }
        Ok(timeline)
    }
}
