//! Token Program - fungible token methods
//!
//! Exports the token methods callers build messages for:
//! - Mint initialization and minting
//! - Transfers and delegated transfers
//! - Burning
//! - Freezing/thawing accounts
//! - Balance and supply queries

use crate::abi::{AbiType, ExportTable, FunctionSignature};

/// Token program
#[derive(Debug, Clone)]
pub struct TokenProgram {
    exports: ExportTable,
}

impl TokenProgram {
    /// Canonical program name, hashed into its code id
    pub const NAME: &'static str = "token";

    pub fn new() -> Self {
        use AbiType::*;

        let exports = [
            // decimals, mint authority, freeze authority
            ("initializeMint", FunctionSignature::new(vec![UInt64, Address, Address], vec![])),
            ("mintTo", FunctionSignature::new(vec![Address, TokenAmount], vec![])),
            ("transfer", FunctionSignature::new(vec![Address, TokenAmount], vec![Boolean])),
            ("transferFrom", FunctionSignature::new(vec![Address, Address, TokenAmount], vec![Boolean])),
            ("approve", FunctionSignature::new(vec![Address, TokenAmount], vec![])),
            ("revoke", FunctionSignature::new(vec![Address], vec![])),
            ("burn", FunctionSignature::new(vec![TokenAmount], vec![])),
            ("freezeAccount", FunctionSignature::new(vec![Address], vec![])),
            ("thawAccount", FunctionSignature::new(vec![Address], vec![])),
            ("balanceOf", FunctionSignature::new(vec![Address], vec![TokenAmount])),
            ("totalSupply", FunctionSignature::new(vec![], vec![TokenAmount])),
        ]
        .into_iter()
        .collect();

        Self { exports }
    }

    pub fn exports(&self) -> &ExportTable {
        &self.exports
    }
}

impl Default for TokenProgram {
    fn default() -> Self {
        Self::new()
    }
}
