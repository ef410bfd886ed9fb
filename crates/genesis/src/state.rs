//! This module contains the [Genesis] state and the computation of its block identity.

use crate::{ActivationTimeline, BlockID, Hardfork};
use alloc::{collections::BTreeMap, vec::Vec};
use alloy_consensus::{constants::KECCAK_EMPTY, Header, EMPTY_OMMER_ROOT_HASH, EMPTY_ROOT_HASH};
use alloy_primitives::{keccak256, Address, Bytes, B256, B64, U256};
use alloy_rlp::{Encodable, RlpEncodable};
use alloy_trie::{HashBuilder, Nibbles};
use kona_timeint::Seconds;

/// The account table of a genesis state.
pub type GenesisAlloc = BTreeMap<Address, GenesisAccount>;

/// An account in a genesis state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenesisAccount {
    /// Account nonce.
    #[cfg_attr(feature = "serde", serde(default))]
    pub nonce: u64,
    /// Account balance, in wei.
    pub balance: U256,
    /// Account bytecode.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub code: Option<Bytes>,
    /// Account storage.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "BTreeMap::is_empty"))]
    pub storage: BTreeMap<B256, B256>,
}

impl GenesisAccount {
    /// Creates an account holding `balance` and nothing else.
    pub fn with_balance(balance: U256) -> Self {
        Self { balance, ..Default::default() }
    }

    /// Creates a contract account with `code`.
    pub fn with_code(code: Bytes) -> Self {
        Self { code: Some(code), ..Default::default() }
    }

    /// Returns `true` if the account carries non-empty bytecode.
    pub fn has_code(&self) -> bool {
        self.code.as_ref().is_some_and(|code| !code.is_empty())
    }

    /// Returns the hash of the account's bytecode.
    pub fn code_hash(&self) -> B256 {
        self.code.as_ref().filter(|code| !code.is_empty()).map_or(KECCAK_EMPTY, keccak256)
    }

    /// Computes the root of the account's storage trie. Zero-valued slots are not stored.
    pub fn storage_root(&self) -> B256 {
        let leaves = self
            .storage
            .iter()
            .filter(|(_, value)| !value.is_zero())
            .map(|(slot, value)| {
                let mut buf = Vec::new();
                U256::from_be_bytes(value.0).encode(&mut buf);
                (keccak256(slot), buf)
            })
            .collect();
        secure_trie_root(leaves)
    }
}

/// An account as committed to in the state trie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, RlpEncodable)]
struct TrieAccount {
    nonce: u64,
    balance: U256,
    storage_root: B256,
    code_hash: B256,
}

impl From<&GenesisAccount> for TrieAccount {
    fn from(account: &GenesisAccount) -> Self {
        Self {
            nonce: account.nonce,
            balance: account.balance,
            storage_root: account.storage_root(),
            code_hash: account.code_hash(),
        }
    }
}

/// Computes the root of a trie keyed by pre-hashed keys.
fn secure_trie_root(mut leaves: Vec<(B256, Vec<u8>)>) -> B256 {
    leaves.sort_unstable_by(|(a, _), (b, _)| a.cmp(b));
    let mut hb = HashBuilder::default();
    for (key, value) in leaves {
        hb.add_leaf(Nibbles::unpack(key), &value);
    }
    hb.root()
}

/// EIP-1559 parameters of an OP Stack chain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct OptimismParams {
    /// Elasticity multiplier.
    pub eip1559_elasticity: u64,
    /// Base fee change denominator.
    pub eip1559_denominator: u64,
    /// Base fee change denominator from Canyon on.
    pub eip1559_denominator_canyon: u64,
}

/// The chain configuration embedded in a genesis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ChainConfig {
    /// Chain ID.
    pub chain_id: u64,
    /// Upgrade activation timestamps. Empty on L1.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub hardforks: ActivationTimeline,
    /// OP Stack fee parameters. `None` on L1.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub optimism: Option<OptimismParams>,
}

/// A genesis state: the chain configuration, the header fields of block zero and the initial
/// account table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Genesis {
    /// Chain configuration.
    pub config: ChainConfig,
    /// Header nonce.
    pub nonce: u64,
    /// Block timestamp.
    pub timestamp: Seconds,
    /// Header extra data.
    pub extra_data: Bytes,
    /// Block gas limit.
    pub gas_limit: u64,
    /// Block difficulty.
    pub difficulty: U256,
    /// Header mix hash.
    pub mix_hash: B256,
    /// Block beneficiary.
    pub coinbase: Address,
    /// Block base fee.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub base_fee_per_gas: Option<u64>,
    /// Initial accounts.
    pub alloc: GenesisAlloc,
}

impl Genesis {
    /// Returns `true` if `fork` is active in the genesis block.
    pub fn is_active(&self, fork: Hardfork) -> bool {
        self.config.hardforks.is_active(fork, self.timestamp)
    }

    /// Returns the value of `slot` in the storage of `address`.
    pub fn storage_at(&self, address: Address, slot: B256) -> Option<B256> {
        self.alloc.get(&address).and_then(|account| account.storage.get(&slot)).copied()
    }

    /// Computes the state root of the account table.
    pub fn state_root(&self) -> B256 {
        let leaves = self
            .alloc
            .iter()
            .map(|(address, account)| {
                let mut buf = Vec::new();
                TrieAccount::from(account).encode(&mut buf);
                (keccak256(address), buf)
            })
            .collect();
        secure_trie_root(leaves)
    }

    /// Builds the header of block zero.
    pub fn to_header(&self) -> Header {
        let withdrawals_root = self.is_active(Hardfork::Canyon).then_some(EMPTY_ROOT_HASH);
        let cancun = self.is_active(Hardfork::Ecotone);

        Header {
            parent_hash: B256::ZERO,
            ommers_hash: EMPTY_OMMER_ROOT_HASH,
            beneficiary: self.coinbase,
            state_root: self.state_root(),
            transactions_root: EMPTY_ROOT_HASH,
            receipts_root: EMPTY_ROOT_HASH,
            withdrawals_root,
            difficulty: self.difficulty,
            number: 0,
            gas_limit: self.gas_limit.into(),
            timestamp: self.timestamp.as_u64(),
            extra_data: self.extra_data.clone(),
            mix_hash: self.mix_hash,
            nonce: B64::new(self.nonce.to_be_bytes()),
            base_fee_per_gas: self.base_fee_per_gas.map(Into::into),
            blob_gas_used: cancun.then_some(0),
            excess_blob_gas: cancun.then_some(0),
            parent_beacon_block_root: cancun.then_some(B256::ZERO),
            ..Default::default()
        }
    }

    /// Returns the identity of block zero.
    pub fn to_block_id(&self) -> BlockID {
        BlockID::new(self.to_header().hash_slow(), 0)
    }
}
