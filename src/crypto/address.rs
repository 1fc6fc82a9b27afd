//! Account addresses
//!
//! An address is an opaque 32-byte identifier. Its text form is base58.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::hash::Hash;

/// Size of an address in bytes
pub const ADDRESS_SIZE: usize = 32;

/// Account address
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Address(pub [u8; ADDRESS_SIZE]);

impl Address {
    pub const fn new(bytes: [u8; ADDRESS_SIZE]) -> Self {
        Address(bytes)
    }

    /// Derive an address from a seed, e.g. a label in a genesis file
    pub fn derive(seed: &[u8]) -> Self {
        Address(*Hash::digest_parts(&[b"METHODSIG_ADDRESS_V1", seed]).as_bytes())
    }

    pub fn as_bytes(&self) -> &[u8; ADDRESS_SIZE] {
        &self.0
    }

    pub fn to_base58(&self) -> String {
        bs58::encode(&self.0).into_string()
    }

    pub fn from_base58(s: &str) -> Result<Self, AddressParseError> {
        let bytes = bs58::decode(s)
            .into_vec()
            .map_err(|e| AddressParseError::Base58(e.to_string()))?;
        if bytes.len() != ADDRESS_SIZE {
            return Err(AddressParseError::InvalidLength(bytes.len()));
        }
        let mut arr = [0u8; ADDRESS_SIZE];
        arr.copy_from_slice(&bytes);
        Ok(Address(arr))
    }
}

/// Address parsing error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AddressParseError {
    #[error("base58 error: {0}")]
    Base58(String),

    #[error("invalid address length: {0} (expected 32)")]
    InvalidLength(usize),
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self.to_base58();
        write!(f, "Address({}...)", &text[..text.len().min(8)])
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_base58())
    }
}

impl FromStr for Address {
    type Err = AddressParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_base58(s)
    }
}
