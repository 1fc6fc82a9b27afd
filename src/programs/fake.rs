//! Fake Program - a test double with a fixed, varied export table
//!
//! Not registered by default. Tests and tooling install it into their own
//! registry under whatever code id they need.

use crate::abi::{AbiType, ExportTable, FunctionSignature};

/// Fake program
#[derive(Debug, Clone)]
pub struct FakeProgram {
    exports: ExportTable,
}

impl FakeProgram {
    /// Canonical program name, hashed into its code id
    pub const NAME: &'static str = "fake";

    pub fn new() -> Self {
        use AbiType::*;

        let exports = [
            ("hasReturnValue", FunctionSignature::new(vec![], vec![Address])),
            ("goodCall", FunctionSignature::new(vec![], vec![])),
            ("returnRevertError", FunctionSignature::new(vec![], vec![])),
            ("nestedBalance", FunctionSignature::new(vec![Address], vec![])),
            ("sendTokens", FunctionSignature::new(vec![Address], vec![])),
            ("callSendTokens", FunctionSignature::new(vec![Address, Address], vec![])),
            ("attemptMultiSpend", FunctionSignature::new(vec![Address, Address], vec![])),
            ("runsAnotherMessage", FunctionSignature::new(vec![Address], vec![])),
            ("echoBytes", FunctionSignature::new(vec![Bytes], vec![Bytes])),
        ]
        .into_iter()
        .collect();

        Self { exports }
    }

    pub fn exports(&self) -> &ExportTable {
        &self.exports
    }
}

impl Default for FakeProgram {
    fn default() -> Self {
        Self::new()
    }
}
