//! Addresses of the L2 predeploys and L1 system contracts the genesis builders touch.

use alloy_primitives::{address, Address};

/// The L1 attributes predeploy, holding the L1 origin and fee parameters.
pub const L1_BLOCK: Address = address!("4200000000000000000000000000000000000015");

/// The L2 cross domain messenger predeploy.
pub const L2_CROSS_DOMAIN_MESSENGER: Address = address!("4200000000000000000000000000000000000007");

/// The gas price oracle predeploy.
pub const GAS_PRICE_ORACLE: Address = address!("420000000000000000000000000000000000000F");

/// The L2 standard bridge predeploy.
pub const L2_STANDARD_BRIDGE: Address = address!("4200000000000000000000000000000000000010");

/// The sequencer fee vault predeploy.
pub const SEQUENCER_FEE_VAULT: Address = address!("4200000000000000000000000000000000000011");

/// The L2 to L1 message passer predeploy.
pub const L2_TO_L1_MESSAGE_PASSER: Address = address!("4200000000000000000000000000000000000016");

/// The EIP-4788 beacon block roots contract, deployed from Ecotone on.
pub const BEACON_ROOTS: Address = address!("000F3df6D732807Ef1319fB7B8bB8522d0Beac02");

/// The predeploys every L2 allocation preset must carry, with their names.
pub const REQUIRED_PREDEPLOYS: [(&str, Address); 6] = [
    ("L1Block", L1_BLOCK),
    ("L2CrossDomainMessenger", L2_CROSS_DOMAIN_MESSENGER),
    ("GasPriceOracle", GAS_PRICE_ORACLE),
    ("L2StandardBridge", L2_STANDARD_BRIDGE),
    ("SequencerFeeVault", SEQUENCER_FEE_VAULT),
    ("L2ToL1MessagePasser", L2_TO_L1_MESSAGE_PASSER),
];

/// Storage layout of the [L1_BLOCK] predeploy.
pub mod l1_block_slots {
    use alloy_primitives::B256;

    /// `number` (low 8 bytes) and `timestamp` (next 8 bytes), packed.
    pub const NUMBER_TIMESTAMP: B256 = B256::with_last_byte(0);
    /// `basefee`.
    pub const BASEFEE: B256 = B256::with_last_byte(1);
    /// `hash`.
    pub const HASH: B256 = B256::with_last_byte(2);
    /// `sequenceNumber`.
    pub const SEQUENCE_NUMBER: B256 = B256::with_last_byte(3);
    /// `batcherHash`.
    pub const BATCHER_HASH: B256 = B256::with_last_byte(4);
    /// `l1FeeOverhead`.
    pub const L1_FEE_OVERHEAD: B256 = B256::with_last_byte(5);
    /// `l1FeeScalar`.
    pub const L1_FEE_SCALAR: B256 = B256::with_last_byte(6);
}
