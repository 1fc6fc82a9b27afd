//! Staking Program - stake delegation methods
//!
//! Mirrors the stake account lifecycle: initialize, delegate, deactivate,
//! withdraw after cooldown, split and merge.

use crate::abi::{AbiType, ExportTable, FunctionSignature};

/// Staking program
#[derive(Debug, Clone)]
pub struct StakingProgram {
    exports: ExportTable,
}

impl StakingProgram {
    /// Canonical program name, hashed into its code id
    pub const NAME: &'static str = "staking";

    pub fn new() -> Self {
        use AbiType::*;

        let exports = [
            // staker, withdrawer
            ("initialize", FunctionSignature::new(vec![Address, Address], vec![])),
            // validator vote account, amount
            ("delegate", FunctionSignature::new(vec![Address, TokenAmount], vec![])),
            ("deactivate", FunctionSignature::new(vec![], vec![BlockHeight])),
            ("withdraw", FunctionSignature::new(vec![Address, TokenAmount], vec![])),
            ("split", FunctionSignature::new(vec![Address, TokenAmount], vec![])),
            ("merge", FunctionSignature::new(vec![Address], vec![])),
            ("setAuthority", FunctionSignature::new(vec![Address, UInt64], vec![])),
            ("getStake", FunctionSignature::new(vec![], vec![TokenAmount, BlockHeight])),
        ]
        .into_iter()
        .collect();

        Self { exports }
    }

    pub fn exports(&self) -> &ExportTable {
        &self.exports
    }
}

impl Default for StakingProgram {
    fn default() -> Self {
        Self::new()
    }
}
