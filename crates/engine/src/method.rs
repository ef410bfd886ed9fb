//! Engine API methods and the static version table.

use crate::EngineVersionError;

/// A versioned Engine API method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EngineApiMethod {
    /// `engine_forkchoiceUpdatedV1`
    #[display("engine_forkchoiceUpdatedV1")]
    #[cfg_attr(feature = "serde", serde(rename = "engine_forkchoiceUpdatedV1"))]
    ForkchoiceUpdatedV1,
    /// `engine_forkchoiceUpdatedV2`
    #[display("engine_forkchoiceUpdatedV2")]
    #[cfg_attr(feature = "serde", serde(rename = "engine_forkchoiceUpdatedV2"))]
    ForkchoiceUpdatedV2,
    /// `engine_forkchoiceUpdatedV3`
    #[display("engine_forkchoiceUpdatedV3")]
    #[cfg_attr(feature = "serde", serde(rename = "engine_forkchoiceUpdatedV3"))]
    ForkchoiceUpdatedV3,
    /// `engine_newPayloadV2`
    #[display("engine_newPayloadV2")]
    #[cfg_attr(feature = "serde", serde(rename = "engine_newPayloadV2"))]
    NewPayloadV2,
    /// `engine_newPayloadV3`
    #[display("engine_newPayloadV3")]
    #[cfg_attr(feature = "serde", serde(rename = "engine_newPayloadV3"))]
    NewPayloadV3,
    /// `engine_getPayloadV2`
    #[display("engine_getPayloadV2")]
    #[cfg_attr(feature = "serde", serde(rename = "engine_getPayloadV2"))]
    GetPayloadV2,
    /// `engine_getPayloadV3`
    #[display("engine_getPayloadV3")]
    #[cfg_attr(feature = "serde", serde(rename = "engine_getPayloadV3"))]
    GetPayloadV3,
}

impl EngineApiMethod {
    /// Returns the JSON-RPC method name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ForkchoiceUpdatedV1 => "engine_forkchoiceUpdatedV1",
            Self::ForkchoiceUpdatedV2 => "engine_forkchoiceUpdatedV2",
            Self::ForkchoiceUpdatedV3 => "engine_forkchoiceUpdatedV3",
            Self::NewPayloadV2 => "engine_newPayloadV2",
            Self::NewPayloadV3 => "engine_newPayloadV3",
            Self::GetPayloadV2 => "engine_getPayloadV2",
            Self::GetPayloadV3 => "engine_getPayloadV3",
        }
    }
}

/// The three block-production methods of one Engine API version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineMethods {
    /// Starts block production.
    pub forkchoice_updated: EngineApiMethod,
    /// Submits a new block.
    pub new_payload: EngineApiMethod,
    /// Fetches the produced block.
    pub get_payload: EngineApiMethod,
}

/// A supported Engine API version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EngineVersion {
    /// Version 1. Shares the payload methods of version 2.
    V1 = 1,
    /// Version 2.
    V2 = 2,
    /// Version 3, from Ecotone on.
    V3 = 3,
}

impl EngineVersion {
    /// Returns the methods of this version.
    pub const fn methods(self) -> EngineMethods {
        match self {
            Self::V1 => EngineMethods {
                forkchoice_updated: EngineApiMethod::ForkchoiceUpdatedV1,
                new_payload: EngineApiMethod::NewPayloadV2,
                get_payload: EngineApiMethod::GetPayloadV2,
            },
            Self::V2 => EngineMethods {
                forkchoice_updated: EngineApiMethod::ForkchoiceUpdatedV2,
                new_payload: EngineApiMethod::NewPayloadV2,
                get_payload: EngineApiMethod::GetPayloadV2,
            },
            Self::V3 => EngineMethods {
                forkchoice_updated: EngineApiMethod::ForkchoiceUpdatedV3,
                new_payload: EngineApiMethod::NewPayloadV3,
                get_payload: EngineApiMethod::GetPayloadV3,
            },
        }
    }
}

impl TryFrom<i64> for EngineVersion {
    type Error = EngineVersionError;

    fn try_from(version: i64) -> Result<Self, Self::Error> {
        match version {
            1 => Ok(Self::V1),
            2 => Ok(Self::V2),
            3 => Ok(Self::V3),
            _ => Err(EngineVersionError::Invalid(version)),
        }
    }
}

/// Resolves the block-production methods of Engine API `version`.
///
/// # Panics
///
/// Panics if `version` is not 1, 2 or 3. A wrong method would corrupt block production, so an
/// unsupported version is treated as a caller bug rather than bad input. Use
/// [EngineVersion::try_from] for untrusted values.
pub fn resolve_engine_methods(version: i64) -> EngineMethods {
    match EngineVersion::try_from(version) {
        Ok(version) => version.methods(),
        Err(err) => panic!("{err}"),
    }
}
