//! Built-in programs
//!
//! Every account is governed by at most one program, identified by its
//! code id. The set of programs is closed and known at build time; each
//! exposes a fixed table of exported methods.

pub mod account;
pub mod fake;
pub mod staking;
pub mod token;

pub use account::AccountProgram;
pub use fake::FakeProgram;
pub use staking::StakingProgram;
pub use token::TokenProgram;

use crate::abi::ExportTable;
use crate::core::CodeId;

/// A built-in program
#[derive(Debug, Clone)]
pub enum Program {
    Account(AccountProgram),
    Token(TokenProgram),
    Staking(StakingProgram),
    Fake(FakeProgram),
}

impl Program {
    /// Canonical name of the program
    pub fn name(&self) -> &'static str {
        match self {
            Program::Account(_) => AccountProgram::NAME,
            Program::Token(_) => TokenProgram::NAME,
            Program::Staking(_) => StakingProgram::NAME,
            Program::Fake(_) => FakeProgram::NAME,
        }
    }

    /// Code id accounts use to bind to this program
    pub fn code_id(&self) -> CodeId {
        CodeId::of(self.name())
    }

    /// Exported methods, fixed for the life of the program value
    pub fn exports(&self) -> &ExportTable {
        match self {
            Program::Account(p) => p.exports(),
            Program::Token(p) => p.exports(),
            Program::Staking(p) => p.exports(),
            Program::Fake(p) => p.exports(),
        }
    }

    /// Programs installed on every chain
    pub fn builtins() -> Vec<Program> {
        vec![
            Program::Account(AccountProgram::new()),
            Program::Token(TokenProgram::new()),
            Program::Staking(StakingProgram::new()),
        ]
    }
}

impl From<AccountProgram> for Program {
    fn from(p: AccountProgram) -> Self {
        Program::Account(p)
    }
}

impl From<TokenProgram> for Program {
    fn from(p: TokenProgram) -> Self {
        Program::Token(p)
    }
}

impl From<StakingProgram> for Program {
    fn from(p: StakingProgram) -> Self {
        Program::Staking(p)
    }
}

impl From<FakeProgram> for Program {
    fn from(p: FakeProgram) -> Self {
        Program::Fake(p)
    }
}
