//! Core ledger types

pub mod account;

pub use account::{Account, CodeId};
