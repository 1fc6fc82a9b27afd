//! Account Program - plain value-holding accounts
//!
//! Accounts bound to this program only hold a balance. The program exports
//! no methods; value transfers are handled by the message layer.

use crate::abi::ExportTable;

/// Account program
#[derive(Debug, Clone, Default)]
pub struct AccountProgram {
    exports: ExportTable,
}

impl AccountProgram {
    /// Canonical program name, hashed into its code id
    pub const NAME: &'static str = "account";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn exports(&self) -> &ExportTable {
        &self.exports
    }
}
