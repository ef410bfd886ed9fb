//! This module contains the [L1Deployments] address book.

use crate::{DeployConfig, DeploymentError, DeploymentResult};
use alloy_primitives::Address;

/// Addresses of the contracts already deployed on L1.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "PascalCase"))]
pub struct L1Deployments {
    /// Legacy address manager.
    pub address_manager: Address,
    /// Proxy admin.
    pub proxy_admin: Address,
    /// L1 cross domain messenger proxy.
    #[cfg_attr(feature = "serde", serde(rename = "L1CrossDomainMessengerProxy"))]
    pub l1_cross_domain_messenger_proxy: Address,
    /// L1 ERC721 bridge proxy.
    #[cfg_attr(feature = "serde", serde(rename = "L1ERC721BridgeProxy"))]
    pub l1_erc721_bridge_proxy: Address,
    /// L1 standard bridge proxy.
    #[cfg_attr(feature = "serde", serde(rename = "L1StandardBridgeProxy"))]
    pub l1_standard_bridge_proxy: Address,
    /// L2 output oracle proxy.
    #[cfg_attr(feature = "serde", serde(rename = "L2OutputOracleProxy"))]
    pub l2_output_oracle_proxy: Address,
    /// Optimism portal proxy.
    pub optimism_portal_proxy: Address,
    /// System config proxy.
    pub system_config_proxy: Address,
    /// Dispute game factory proxy.
    pub dispute_game_factory_proxy: Address,
    /// Data availability challenge proxy.
    pub data_availability_challenge_proxy: Address,
    /// Protocol versions proxy.
    pub protocol_versions_proxy: Address,
    /// Superchain config proxy.
    pub superchain_config_proxy: Address,
}

impl L1Deployments {
    /// Returns every entry of the address book with its name.
    pub const fn entries(&self) -> [(&'static str, Address); 12] {
        [
            ("AddressManager", self.address_manager),
            ("ProxyAdmin", self.proxy_admin),
            ("L1CrossDomainMessengerProxy", self.l1_cross_domain_messenger_proxy),
            ("L1ERC721BridgeProxy", self.l1_erc721_bridge_proxy),
            ("L1StandardBridgeProxy", self.l1_standard_bridge_proxy),
            ("L2OutputOracleProxy", self.l2_output_oracle_proxy),
            ("OptimismPortalProxy", self.optimism_portal_proxy),
            ("SystemConfigProxy", self.system_config_proxy),
            ("DisputeGameFactoryProxy", self.dispute_game_factory_proxy),
            ("DataAvailabilityChallengeProxy", self.data_availability_challenge_proxy),
            ("ProtocolVersionsProxy", self.protocol_versions_proxy),
            ("SuperchainConfigProxy", self.superchain_config_proxy),
        ]
    }

    /// Returns the named entries that hold an address.
    pub fn deployed(&self) -> impl Iterator<Item = (&'static str, Address)> {
        self.entries().into_iter().filter(|(_, address)| !address.is_zero())
    }

    /// Checks the address book against `config`.
    ///
    /// Every contract the configuration depends on must be present, and every contract address
    /// the configuration names must equal the address book's.
    pub fn check(&self, config: &DeployConfig) -> DeploymentResult<()> {
        for (name, address) in self.entries() {
            let required = match name {
                "L2OutputOracleProxy" => !config.use_fault_proofs,
                "DisputeGameFactoryProxy" => config.use_fault_proofs,
                "DataAvailabilityChallengeProxy" => config.use_plasma,
                _ => true,
            };
            if required && address.is_zero() {
                return Err(DeploymentError::MissingDeployment(name));
            }
        }

        let proof_system = if config.use_fault_proofs {
            (
                "DisputeGameFactoryProxy",
                self.dispute_game_factory_proxy,
                config.dispute_game_factory_proxy,
            )
        } else {
            ("L2OutputOracleProxy", self.l2_output_oracle_proxy, config.l2_output_oracle_proxy)
        };
        let plasma = config.use_plasma.then_some((
            "DataAvailabilityChallengeProxy",
            self.data_availability_challenge_proxy,
            config.da_challenge_proxy,
        ));
        let named = [
            ("L1StandardBridgeProxy", self.l1_standard_bridge_proxy, config.l1_standard_bridge_proxy),
            (
                "L1CrossDomainMessengerProxy",
                self.l1_cross_domain_messenger_proxy,
                config.l1_cross_domain_messenger_proxy,
            ),
            ("OptimismPortalProxy", self.optimism_portal_proxy, config.optimism_portal_proxy),
            ("SystemConfigProxy", self.system_config_proxy, config.system_config_proxy),
            proof_system,
        ];

        for (name, book, config) in named.into_iter().chain(plasma) {
            if book != config {
                return Err(DeploymentError::Mismatch { name, book, config });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{test_deploy_config, test_l1_deployments};
    use alloy_primitives::address;

    #[test]
    fn test_check_passes_for_matching_config() {
        let deployments = test_l1_deployments();
        let cfg = test_deploy_config().with_deployments(&deployments);
        assert_eq!(deployments.check(&cfg), Ok(()));
    }

    #[test]
    fn test_check_missing_required() {
        let deployments =
            L1Deployments { optimism_portal_proxy: Address::ZERO, ..test_l1_deployments() };
        let cfg = test_deploy_config().with_deployments(&test_l1_deployments());
        assert_eq!(
            deployments.check(&cfg),
            Err(DeploymentError::MissingDeployment("OptimismPortalProxy"))
        );
    }

    #[test]
    fn test_check_proof_system_requirements() {
        let deployments =
            L1Deployments { dispute_game_factory_proxy: Address::ZERO, ..test_l1_deployments() };
        let cfg = DeployConfig { use_fault_proofs: false, ..test_deploy_config() }
            .with_deployments(&deployments);
        assert_eq!(deployments.check(&cfg), Ok(()));

        let cfg = DeployConfig { use_fault_proofs: true, ..cfg };
        assert_eq!(
            deployments.check(&cfg),
            Err(DeploymentError::MissingDeployment("DisputeGameFactoryProxy"))
        );
    }

    #[test]
    fn test_check_plasma_requires_challenge_contract() {
        let deployments = L1Deployments {
            data_availability_challenge_proxy: Address::ZERO,
            ..test_l1_deployments()
        };
        let cfg = test_deploy_config().with_deployments(&deployments);
        assert_eq!(deployments.check(&cfg), Ok(()));
        let cfg = DeployConfig { use_plasma: true, ..cfg };
        assert_eq!(
            deployments.check(&cfg),
            Err(DeploymentError::MissingDeployment("DataAvailabilityChallengeProxy"))
        );
    }

    #[test]
    fn test_check_mismatch() {
        let deployments = test_l1_deployments();
        let other = address!("00000000000000000000000000000000000000ff");
        let cfg = DeployConfig {
            system_config_proxy: other,
            ..test_deploy_config().with_deployments(&deployments)
        };
        assert_eq!(
            deployments.check(&cfg),
            Err(DeploymentError::Mismatch {
                name: "SystemConfigProxy",
                book: deployments.system_config_proxy,
                config: other,
            })
        );
    }

    #[test]
    fn test_deployed_skips_empty_entries() {
        let deployments =
            L1Deployments { l2_output_oracle_proxy: Address::ZERO, ..test_l1_deployments() };
        assert!(deployments.deployed().all(|(name, _)| name != "L2OutputOracleProxy"));
        assert_eq!(deployments.deployed().count(), 11);
    }
}
