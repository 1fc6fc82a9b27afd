//! Runtime - programs and chain state as seen by callers
//!
//! - `ProgramRegistry` maps code ids to built-in programs
//! - `ChainStore` tracks the head state snapshot

mod chain;
mod registry;

pub use chain::{ChainError, ChainStore, SnapshotSource};
pub use registry::{ProgramLookup, ProgramRegistry};
