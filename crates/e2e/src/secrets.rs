//! Test key material derived from a mnemonic.

use crate::{SecretsError, SecretsResult};
use alloy_primitives::Address;
use alloy_signer_local::{coins_bip39::English, MnemonicBuilder, PrivateKeySigner};
use serde::Serialize;

/// The standard test mnemonic.
pub const TEST_MNEMONIC: &str = "test test test test test test test test test test test junk";

/// A mnemonic and the BIP-44 derivation path of each test role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MnemonicConfig {
    /// The mnemonic phrase.
    pub mnemonic: String,
    /// Deployer of the L1 contracts.
    pub deployer: String,
    /// Block signer of the L1 developer chain.
    pub clique_signer: String,
    /// Output proposer.
    pub proposer: String,
    /// Batch submitter.
    pub batcher: String,
    /// Sequencer P2P identity.
    pub sequencer_p2p: String,
    /// Funded test user.
    pub alice: String,
    /// Funded test user.
    pub bob: String,
    /// Funded test user.
    pub mallory: String,
    /// Owner of the system config contract.
    pub sys_cfg_owner: String,
}

impl Default for MnemonicConfig {
    fn default() -> Self {
        let path = |index: u32| format!("m/44'/60'/0'/0/{index}");
        Self {
            mnemonic: TEST_MNEMONIC.to_string(),
            deployer: path(1),
            clique_signer: path(2),
            proposer: path(3),
            batcher: path(4),
            sequencer_p2p: path(5),
            alice: path(6),
            bob: path(7),
            mallory: path(8),
            sys_cfg_owner: path(9),
        }
    }
}

impl MnemonicConfig {
    /// Derives the signing key of every role.
    pub fn secrets(&self) -> SecretsResult<Secrets> {
        Ok(Secrets {
            deployer: self.derive("deployer", &self.deployer)?,
            clique_signer: self.derive("clique signer", &self.clique_signer)?,
            proposer: self.derive("proposer", &self.proposer)?,
            batcher: self.derive("batcher", &self.batcher)?,
            sequencer_p2p: self.derive("sequencer P2P", &self.sequencer_p2p)?,
            alice: self.derive("alice", &self.alice)?,
            bob: self.derive("bob", &self.bob)?,
            mallory: self.derive("mallory", &self.mallory)?,
            sys_cfg_owner: self.derive("system config owner", &self.sys_cfg_owner)?,
        })
    }

    fn derive(&self, role: &'static str, path: &str) -> SecretsResult<PrivateKeySigner> {
        let err = |source| SecretsError::Derivation { role, path: path.to_string(), source };
        MnemonicBuilder::<English>::default()
            .phrase(self.mnemonic.as_str())
            .derivation_path(path)
            .map_err(err)?
            .build()
            .map_err(err)
    }
}

/// The signing key of every test role.
#[derive(Debug, Clone)]
pub struct Secrets {
    /// Deployer of the L1 contracts.
    pub deployer: PrivateKeySigner,
    /// Block signer of the L1 developer chain.
    pub clique_signer: PrivateKeySigner,
    /// Output proposer.
    pub proposer: PrivateKeySigner,
    /// Batch submitter.
    pub batcher: PrivateKeySigner,
    /// Sequencer P2P identity.
    pub sequencer_p2p: PrivateKeySigner,
    /// Funded test user.
    pub alice: PrivateKeySigner,
    /// Funded test user.
    pub bob: PrivateKeySigner,
    /// Funded test user.
    pub mallory: PrivateKeySigner,
    /// Owner of the system config contract.
    pub sys_cfg_owner: PrivateKeySigner,
}

impl Secrets {
    /// Returns the address of every role.
    pub fn addresses(&self) -> Addresses {
        Addresses {
            deployer: self.deployer.address(),
            clique_signer: self.clique_signer.address(),
            proposer: self.proposer.address(),
            batcher: self.batcher.address(),
            sequencer_p2p: self.sequencer_p2p.address(),
            alice: self.alice.address(),
            bob: self.bob.address(),
            mallory: self.mallory.address(),
            sys_cfg_owner: self.sys_cfg_owner.address(),
        }
    }
}

/// The address of every test role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Addresses {
    /// Deployer of the L1 contracts.
    pub deployer: Address,
    /// Block signer of the L1 developer chain.
    pub clique_signer: Address,
    /// Output proposer.
    pub proposer: Address,
    /// Batch submitter.
    pub batcher: Address,
    /// Sequencer P2P identity.
    pub sequencer_p2p: Address,
    /// Funded test user.
    pub alice: Address,
    /// Funded test user.
    pub bob: Address,
    /// Funded test user.
    pub mallory: Address,
    /// Owner of the system config contract.
    pub sys_cfg_owner: Address,
}

impl Addresses {
    /// Returns every role address.
    pub const fn all(&self) -> [Address; 9] {
        [
            self.batcher,
            self.deployer,
            self.clique_signer,
            self.proposer,
            self.alice,
            self.bob,
            self.mallory,
            self.sequencer_p2p,
            self.sys_cfg_owner,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;

    #[test]
    fn test_default_mnemonic_addresses() {
        let addresses = MnemonicConfig::default().secrets().unwrap().addresses();
        assert_eq!(addresses.deployer, address!("70997970c51812dc3a010c7d01b50e0d17dc79c8"));
        assert_eq!(addresses.clique_signer, address!("3c44cdddb6a900fa2b585dd299e03d12fa4293bc"));
        assert_eq!(addresses.proposer, address!("90f79bf6eb2c4f870365e785982e1f101e93b906"));
        assert_eq!(addresses.batcher, address!("15d34aaf54267db7d7c367839aaf71a00a2c6a65"));
        assert_eq!(addresses.sequencer_p2p, address!("9965507d1a55bcc2695c58ba16fb37d819b0a4dc"));
        assert_eq!(addresses.alice, address!("976ea74026e726554db657fa54763abd0c3a0aa9"));
        assert_eq!(addresses.bob, address!("14dc79964da2c08b23698b3d3cc7ca32193d9955"));
        assert_eq!(addresses.mallory, address!("23618e81e3f5cdf7f54c3d65f7fbc0abf5b21e8f"));
        assert_eq!(addresses.sys_cfg_owner, address!("a0ee7a142d267c1f36714e4a8f75612f20a79720"));
    }

    #[test]
    fn test_all_addresses_are_distinct() {
        let all = MnemonicConfig::default().secrets().unwrap().addresses().all();
        for (i, a) in all.iter().enumerate() {
            assert!(all[i + 1..].iter().all(|b| a != b));
        }
    }

    #[test]
    fn test_invalid_path_is_reported() {
        let config = MnemonicConfig { batcher: "not a path".to_string(), ..Default::default() };
        let err = config.secrets().unwrap_err();
        assert!(matches!(err, SecretsError::Derivation { role: "batcher", .. }));
    }
}
