//! Environment-style feature flags of a test network.

use kona_genesis::{ForkFlags, Hardfork};

/// Activates Delta from genesis.
pub const USE_DELTA_ENV: &str = "OP_E2E_USE_DELTA";

/// Activates Ecotone from genesis.
pub const USE_ECOTONE_ENV: &str = "OP_E2E_USE_ECOTONE";

/// Activates Fjord from genesis.
pub const USE_FJORD_ENV: &str = "OP_E2E_USE_FJORD";

/// Settles outputs through the L2 output oracle instead of fault proofs.
pub const USE_L2OO_ENV: &str = "OP_E2E_USE_L2OO";

/// Enables the plasma DA layer.
pub const USE_PLASMA_ENV: &str = "OP_E2E_USE_PLASMA";

/// The feature flags of a test network. A flag is set when its variable equals `"true"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct E2eFlags {
    /// Upgrades to activate from genesis. Resolved cumulatively.
    pub forks: ForkFlags,
    /// Use the L2 output oracle rather than fault proofs.
    pub use_l2oo: bool,
    /// Enable the plasma DA layer.
    pub use_plasma: bool,
}

impl E2eFlags {
    /// Reads the flags through `lookup`, which maps a variable name to its value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let enabled = |key: &str| lookup(key).as_deref() == Some("true");
        Self {
            forks: ForkFlags::new()
                .with_flag(Hardfork::Delta, enabled(USE_DELTA_ENV))
                .with_flag(Hardfork::Ecotone, enabled(USE_ECOTONE_ENV))
                .with_flag(Hardfork::Fjord, enabled(USE_FJORD_ENV)),
            use_l2oo: enabled(USE_L2OO_ENV),
            use_plasma: enabled(USE_PLASMA_ENV),
        }
    }

    /// Reads the flags from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Returns `true` if outputs are settled by fault proofs.
    pub const fn use_fault_proofs(&self) -> bool {
        !self.use_l2oo
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kona_timeint::Seconds;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> =
            vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_no_flags() {
        let flags = E2eFlags::from_lookup(lookup(&[]));
        assert_eq!(flags, E2eFlags::default());
        assert!(flags.use_fault_proofs());
        let timeline = flags.forks.resolve();
        assert_eq!(timeline.regolith_time, Some(Seconds::ZERO));
        assert_eq!(timeline.canyon_time, Some(Seconds::ZERO));
        assert_eq!(timeline.delta_time, None);
    }

    #[test]
    fn test_only_exact_true_enables() {
        let flags = E2eFlags::from_lookup(lookup(&[
            (USE_DELTA_ENV, "1"),
            (USE_ECOTONE_ENV, "TRUE"),
            (USE_L2OO_ENV, "true"),
            (USE_PLASMA_ENV, "yes"),
        ]));
        assert!(!flags.forks.is_enabled(Hardfork::Delta));
        assert!(!flags.forks.is_enabled(Hardfork::Ecotone));
        assert!(flags.use_l2oo);
        assert!(!flags.use_fault_proofs());
        assert!(!flags.use_plasma);
    }

    #[test]
    fn test_fjord_is_cumulative() {
        let flags = E2eFlags::from_lookup(lookup(&[(USE_FJORD_ENV, "true")]));
        let timeline = flags.forks.resolve();
        for fork in [Hardfork::Delta, Hardfork::Ecotone, Hardfork::Fjord] {
            assert_eq!(timeline.get(fork), Some(Seconds::ZERO));
        }
        assert_eq!(timeline.get(Hardfork::Interop), None);
    }
}
