//! Account records stored in the state tree

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::crypto::Hash;

/// Identity of the program that governs an account
///
/// Code ids are content derived: built-in programs use the hash of their
/// canonical name. [`CodeId::UNDEFINED`] marks an account with no program.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub struct CodeId(pub Hash);

impl CodeId {
    /// No program bound
    pub const UNDEFINED: CodeId = CodeId(Hash::ZERO);

    /// Code id for a named program
    pub fn of(name: &str) -> Self {
        CodeId(Hash::digest_parts(&[b"METHODSIG_CODE_V1", name.as_bytes()]))
    }

    pub fn is_undefined(&self) -> bool {
        self.0.is_zero()
    }

    pub fn as_hash(&self) -> &Hash {
        &self.0
    }
}

impl From<Hash> for CodeId {
    fn from(hash: Hash) -> Self {
        CodeId(hash)
    }
}

impl fmt::Debug for CodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_undefined() {
            write!(f, "CodeId(undefined)")
        } else {
            write!(f, "CodeId({}...)", &self.0.to_hex()[..8])
        }
    }
}

impl fmt::Display for CodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Account state stored on-chain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Program bound to this account
    pub code: CodeId,

    /// Balance in base units
    pub balance: u64,

    /// Number of messages sent from this account
    pub nonce: u64,

    /// Root of the program's own storage
    pub head: Hash,

    /// Opaque program data
    #[serde(default)]
    pub data: Vec<u8>,
}

impl Account {
    /// Plain value-holding account with no program
    pub fn new(balance: u64) -> Self {
        Account {
            code: CodeId::UNDEFINED,
            balance,
            nonce: 0,
            head: Hash::ZERO,
            data: Vec::new(),
        }
    }

    /// Account governed by the program with the given code id
    pub fn new_program(code: CodeId, balance: u64) -> Self {
        Account {
            code,
            ..Account::new(balance)
        }
    }

    pub fn has_code(&self) -> bool {
        !self.code.is_undefined()
    }
}

impl Default for Account {
    fn default() -> Self {
        Account::new(0)
    }
}
