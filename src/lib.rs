//! # methodsig
//!
//! Method signature resolution for on-chain program accounts.
//!
//! Given an account address and a method name, look up the parameter and
//! return types the account's program exports, so a message can be checked
//! before it is built, signed and submitted. Nothing is executed and no
//! state is written.
//!
//! ## Layout
//! - `storage`: content-addressed blocks and immutable state snapshots
//! - `runtime`: chain head tracking and the program registry
//! - `programs`: built-in programs and their export tables
//! - `abi`: type vocabulary and function signatures
//! - `resolver`: the address + method -> signature pipeline

pub mod abi;
pub mod core;
pub mod crypto;
pub mod programs;
pub mod resolver;
pub mod runtime;
pub mod storage;

// Re-exports
pub use abi::{AbiError, AbiType, AbiValue, ExportTable, FunctionSignature, MethodNameError};
pub use crate::core::{Account, CodeId};
pub use crypto::{Address, Hash};
pub use programs::Program;
pub use resolver::{ErrorClass, InvocationError, ResolveError, SignatureResolver};
pub use runtime::{ChainError, ChainStore, ProgramLookup, ProgramRegistry, SnapshotSource};
pub use storage::{BlockStore, MemoryBlockStore, SledBlockStore, StateError, StateTree, StateTreeBuilder};

/// methodsig version
pub const METHODSIG_VERSION: &str = env!("CARGO_PKG_VERSION");
