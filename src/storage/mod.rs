//! Storage Layer
//!
//! Content-addressed blocks and the account state snapshots built on them.
//!
//! ## Backends
//! - `MemoryBlockStore`: tests and throwaway chains
//! - `SledBlockStore`: persistent, also records the chain head

mod blockstore;
mod state_tree;

pub use blockstore::{BlockStore, MemoryBlockStore, SledBlockStore};
pub use state_tree::{StateError, StateTree, StateTreeBuilder};
