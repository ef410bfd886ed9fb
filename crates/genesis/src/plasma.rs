//! Configuration of the optional plasma data availability layer.

use crate::PlasmaConfigError;
use alloy_primitives::Address;

/// The commitment scheme used to reference off-chain data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, derive_more::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CommitmentType {
    /// Keccak256 commitments, verified on L1 by the challenge contract.
    #[default]
    #[display("KeccakCommitment")]
    #[cfg_attr(feature = "serde", serde(rename = "KeccakCommitment"))]
    Keccak,
    /// Opaque commitments understood only by the DA server.
    #[display("GenericCommitment")]
    #[cfg_attr(feature = "serde", serde(rename = "GenericCommitment"))]
    Generic,
}

/// The plasma sub-configuration of a rollup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlasmaConfig {
    /// L1 address of the data availability challenge contract.
    pub da_challenge_address: Address,
    /// Number of L1 blocks after a commitment during which it can be challenged.
    pub da_challenge_window: u64,
    /// Number of L1 blocks after a challenge during which it can be resolved.
    pub da_resolve_window: u64,
    /// The commitment scheme.
    pub commitment_type: CommitmentType,
}

impl PlasmaConfig {
    /// Checks the sub-configuration for unset fields.
    pub fn check(&self) -> Result<(), PlasmaConfigError> {
        if self.da_challenge_address.is_zero() {
            return Err(PlasmaConfigError::MissingChallengeAddress);
        }
        if self.da_challenge_window == 0 {
            return Err(PlasmaConfigError::ZeroChallengeWindow);
        }
        if self.da_resolve_window == 0 {
            return Err(PlasmaConfigError::ZeroResolveWindow);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;

    fn valid() -> PlasmaConfig {
        PlasmaConfig {
            da_challenge_address: address!("00000000000000000000000000000000000000da"),
            da_challenge_window: 16,
            da_resolve_window: 16,
            commitment_type: CommitmentType::Keccak,
        }
    }

    #[test]
    fn test_plasma_config_check() {
        assert_eq!(valid().check(), Ok(()));
        assert_eq!(
            PlasmaConfig { da_challenge_address: Address::ZERO, ..valid() }.check(),
            Err(PlasmaConfigError::MissingChallengeAddress)
        );
        assert_eq!(
            PlasmaConfig { da_challenge_window: 0, ..valid() }.check(),
            Err(PlasmaConfigError::ZeroChallengeWindow)
        );
        assert_eq!(
            PlasmaConfig { da_resolve_window: 0, ..valid() }.check(),
            Err(PlasmaConfigError::ZeroResolveWindow)
        );
    }

    #[test]
    fn test_commitment_type_display() {
        assert_eq!(CommitmentType::Keccak.to_string(), "KeccakCommitment");
        assert_eq!(CommitmentType::Generic.to_string(), "GenericCommitment");
    }

    #[test]
    #[cfg(feature = "serde")]
    fn test_commitment_type_serde_names() {
        assert_eq!(
            serde_json::to_string(&CommitmentType::Generic).unwrap(),
            "\"GenericCommitment\""
        );
    }
}
