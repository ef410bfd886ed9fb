//! Per-call Engine API method selection.

use crate::{resolve_engine_methods, EngineApiMethod};
use alloy_rpc_types_engine::PayloadAttributes;
use kona_genesis::{ChainSpec, RollupConfig};
use kona_timeint::{Milliseconds, Seconds};

/// Selects the Engine API method to use for each block-production call.
pub trait EngineVersionProvider {
    /// Returns the `engine_forkchoiceUpdated` method for a call carrying `attributes`.
    fn forkchoice_updated_version(&self, attributes: Option<&PayloadAttributes>)
        -> EngineApiMethod;

    /// Returns the `engine_newPayload` method for a block at `timestamp`.
    fn new_payload_version(&self, timestamp: Milliseconds) -> EngineApiMethod;

    /// Returns the `engine_getPayload` method for a block at `timestamp`.
    fn get_payload_version(&self, timestamp: Milliseconds) -> EngineApiMethod;
}

/// An [EngineVersionProvider] pinned to one Engine API version.
///
/// Every call panics if the version is not 1, 2 or 3, see [resolve_engine_methods].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::From)]
pub struct StaticVersionProvider(pub i64);

impl EngineVersionProvider for StaticVersionProvider {
    fn forkchoice_updated_version(&self, _: Option<&PayloadAttributes>) -> EngineApiMethod {
        resolve_engine_methods(self.0).forkchoice_updated
    }

    fn new_payload_version(&self, _: Milliseconds) -> EngineApiMethod {
        resolve_engine_methods(self.0).new_payload
    }

    fn get_payload_version(&self, _: Milliseconds) -> EngineApiMethod {
        resolve_engine_methods(self.0).get_payload
    }
}

impl EngineVersionProvider for RollupConfig {
    fn forkchoice_updated_version(
        &self,
        attributes: Option<&PayloadAttributes>,
    ) -> EngineApiMethod {
        // A forkchoice update without attributes does not start a build.
        let Some(attributes) = attributes else {
            return EngineApiMethod::ForkchoiceUpdatedV3;
        };
        let timestamp = Seconds(attributes.timestamp);
        if self.is_ecotone_active(timestamp) {
            EngineApiMethod::ForkchoiceUpdatedV3
        } else if self.is_canyon_active(timestamp) {
            EngineApiMethod::ForkchoiceUpdatedV2
        } else {
            EngineApiMethod::ForkchoiceUpdatedV1
        }
    }

    fn new_payload_version(&self, timestamp: Milliseconds) -> EngineApiMethod {
        if self.is_ecotone_active(timestamp.to_seconds()) {
            EngineApiMethod::NewPayloadV3
        } else {
            EngineApiMethod::NewPayloadV2
        }
    }

    fn get_payload_version(&self, timestamp: Milliseconds) -> EngineApiMethod {
        if self.is_ecotone_active(timestamp.to_seconds()) {
            EngineApiMethod::GetPayloadV3
        } else {
            EngineApiMethod::GetPayloadV2
        }
    }
}

impl EngineVersionProvider for ChainSpec {
    fn forkchoice_updated_version(
        &self,
        attributes: Option<&PayloadAttributes>,
    ) -> EngineApiMethod {
        self.config().forkchoice_updated_version(attributes)
    }

    fn new_payload_version(&self, timestamp: Milliseconds) -> EngineApiMethod {
        self.config().new_payload_version(timestamp)
    }

    fn get_payload_version(&self, timestamp: Milliseconds) -> EngineApiMethod {
        self.config().get_payload_version(timestamp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{Address, B256};
    use kona_genesis::{test_utils::test_rollup_config, Hardfork};

    fn attributes(timestamp: u64) -> PayloadAttributes {
        PayloadAttributes {
            timestamp,
            prev_randao: B256::ZERO,
            suggested_fee_recipient: Address::ZERO,
            withdrawals: None,
            parent_beacon_block_root: None,
        }
    }

    /// Canyon from 100, Delta from 200, Ecotone from 300.
    fn scheduled() -> RollupConfig {
        let hardforks = test_rollup_config()
            .hardforks
            .with(Hardfork::Canyon, Some(Seconds(100)))
            .with(Hardfork::Delta, Some(Seconds(200)))
            .with(Hardfork::Ecotone, Some(Seconds(300)));
        RollupConfig { hardforks, ..test_rollup_config() }
    }

    #[test]
    fn test_static_provider() {
        let provider = StaticVersionProvider(2);
        assert_eq!(
            provider.forkchoice_updated_version(None),
            EngineApiMethod::ForkchoiceUpdatedV2
        );
        assert_eq!(provider.new_payload_version(Milliseconds(0)), EngineApiMethod::NewPayloadV2);
        assert_eq!(provider.get_payload_version(Milliseconds(0)), EngineApiMethod::GetPayloadV2);
        assert_eq!(
            StaticVersionProvider::from(3).get_payload_version(Milliseconds(0)),
            EngineApiMethod::GetPayloadV3
        );
    }

    #[test]
    #[should_panic(expected = "Invalid Engine API version: 7")]
    fn test_static_provider_invalid_version_panics() {
        StaticVersionProvider(7).new_payload_version(Milliseconds(0));
    }

    #[test]
    fn test_rollup_forkchoice_version() {
        let cfg = scheduled();
        assert_eq!(cfg.forkchoice_updated_version(None), EngineApiMethod::ForkchoiceUpdatedV3);
        assert_eq!(
            cfg.forkchoice_updated_version(Some(&attributes(99))),
            EngineApiMethod::ForkchoiceUpdatedV1
        );
        assert_eq!(
            cfg.forkchoice_updated_version(Some(&attributes(100))),
            EngineApiMethod::ForkchoiceUpdatedV2
        );
        assert_eq!(
            cfg.forkchoice_updated_version(Some(&attributes(300))),
            EngineApiMethod::ForkchoiceUpdatedV3
        );
    }

    #[test]
    fn test_rollup_payload_versions_floor_millis() {
        let cfg = scheduled();
        assert_eq!(cfg.new_payload_version(Milliseconds(299_999)), EngineApiMethod::NewPayloadV2);
        assert_eq!(cfg.new_payload_version(Milliseconds(300_000)), EngineApiMethod::NewPayloadV3);
        assert_eq!(cfg.get_payload_version(Milliseconds(299_999)), EngineApiMethod::GetPayloadV2);
        assert_eq!(cfg.get_payload_version(Milliseconds(300_001)), EngineApiMethod::GetPayloadV3);
    }

    #[test]
    fn test_chain_spec_delegates() {
        let spec = ChainSpec::new(scheduled());
        assert_eq!(
            spec.forkchoice_updated_version(Some(&attributes(150))),
            EngineApiMethod::ForkchoiceUpdatedV2
        );
        assert_eq!(spec.new_payload_version(Milliseconds(300_000)), EngineApiMethod::NewPayloadV3);
    }
}
