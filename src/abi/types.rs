//! ABI type vocabulary and typed values

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::crypto::{Address, Hash};

/// Type of a method parameter or return value
///
/// The serialized form matches [`AbiType::name`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AbiType {
    Address,
    /// Amount of the native token in base units
    TokenAmount,
    /// Arbitrary precision signed integer
    Integer,
    #[serde(rename = "uint64")]
    UInt64,
    BlockHeight,
    Bytes,
    String,
    Boolean,
    Hash,
    PeerId,
    UintArray,
}

impl AbiType {
    pub fn name(&self) -> &'static str {
        match self {
            AbiType::Address => "address",
            AbiType::TokenAmount => "token_amount",
            AbiType::Integer => "integer",
            AbiType::UInt64 => "uint64",
            AbiType::BlockHeight => "block_height",
            AbiType::Bytes => "bytes",
            AbiType::String => "string",
            AbiType::Boolean => "boolean",
            AbiType::Hash => "hash",
            AbiType::PeerId => "peer_id",
            AbiType::UintArray => "uint_array",
        }
    }
}

impl fmt::Display for AbiType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A typed argument value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AbiValue {
    Address(Address),
    TokenAmount(u64),
    /// Big-endian two's complement
    Integer(Vec<u8>),
    #[serde(rename = "uint64")]
    UInt64(u64),
    BlockHeight(u64),
    Bytes(Vec<u8>),
    String(String),
    Boolean(bool),
    Hash(Hash),
    PeerId(String),
    UintArray(Vec<u64>),
}

impl AbiValue {
    /// The type this value inhabits
    pub fn abi_type(&self) -> AbiType {
        match self {
            AbiValue::Address(_) => AbiType::Address,
            AbiValue::TokenAmount(_) => AbiType::TokenAmount,
            AbiValue::Integer(_) => AbiType::Integer,
            AbiValue::UInt64(_) => AbiType::UInt64,
            AbiValue::BlockHeight(_) => AbiType::BlockHeight,
            AbiValue::Bytes(_) => AbiType::Bytes,
            AbiValue::String(_) => AbiType::String,
            AbiValue::Boolean(_) => AbiType::Boolean,
            AbiValue::Hash(_) => AbiType::Hash,
            AbiValue::PeerId(_) => AbiType::PeerId,
            AbiValue::UintArray(_) => AbiType::UintArray,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_types() {
        assert_eq!(AbiValue::Address(Address::derive(b"a")).abi_type(), AbiType::Address);
        assert_eq!(AbiValue::TokenAmount(1).abi_type(), AbiType::TokenAmount);
        assert_eq!(AbiValue::UintArray(vec![1, 2]).abi_type(), AbiType::UintArray);
        assert_eq!(AbiValue::Boolean(true).abi_type(), AbiType::Boolean);
    }

    #[test]
    fn test_display_matches_serialized_name() {
        let all = [
            AbiType::Address,
            AbiType::TokenAmount,
            AbiType::Integer,
            AbiType::UInt64,
            AbiType::BlockHeight,
            AbiType::Bytes,
            AbiType::String,
            AbiType::Boolean,
            AbiType::Hash,
            AbiType::PeerId,
            AbiType::UintArray,
        ];
        for ty in all {
            let json = serde_json::to_value(ty).unwrap();
            assert_eq!(json, ty.to_string(), "{ty:?}");
            assert_eq!(serde_json::from_value::<AbiType>(json).unwrap(), ty);
        }
        assert_eq!(AbiType::BlockHeight.to_string(), "block_height");
    }

    #[test]
    fn test_value_tags_use_type_names() {
        let json = serde_json::to_value(AbiValue::UInt64(7)).unwrap();
        assert_eq!(json["uint64"], 7);
    }
}
