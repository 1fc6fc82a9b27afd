//! Chain head tracking and the latest-state source

use std::future::Future;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::info;

use crate::crypto::Hash;
use crate::storage::{BlockStore, StateError, StateTree};

/// Chain read errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChainError {
    #[error("chain has no head")]
    NoHead,

    #[error("state error: {0}")]
    State(#[from] StateError),
}

/// Source of the latest state snapshot
pub trait SnapshotSource: Send + Sync {
    /// The most recent snapshot
    fn latest_state(&self) -> impl Future<Output = Result<Arc<StateTree>, ChainError>> + Send;
}

impl<S: SnapshotSource> SnapshotSource for Arc<S> {
    fn latest_state(&self) -> impl Future<Output = Result<Arc<StateTree>, ChainError>> + Send {
        (**self).latest_state()
    }
}

/// Tracks the chain head snapshot
pub struct ChainStore {
    /// Block store snapshots are loaded from
    store: Arc<dyn BlockStore>,
    /// Current head (None before genesis)
    head: RwLock<Option<Arc<StateTree>>>,
}

impl ChainStore {
    /// Create a chain store with no head
    pub fn new(store: Arc<dyn BlockStore>) -> Self {
        Self {
            store,
            head: RwLock::new(None),
        }
    }

    /// Create a chain store whose head is the state at `root`
    pub fn with_head(store: Arc<dyn BlockStore>, root: Hash) -> Result<Self, ChainError> {
        let chain = Self::new(store);
        chain.set_head(root)?;
        Ok(chain)
    }

    /// Move the head to the state at `root`
    pub fn set_head(&self, root: Hash) -> Result<(), ChainError> {
        let tree = StateTree::load(Arc::clone(&self.store), root)?;
        info!("Chain head set to {} ({} accounts)", root, tree.len());
        *self.head.write() = Some(Arc::new(tree));
        Ok(())
    }

    /// Move the head to an already loaded snapshot
    pub fn set_head_tree(&self, tree: StateTree) {
        *self.head.write() = Some(Arc::new(tree));
    }

    /// Root of the current head
    pub fn head_root(&self) -> Option<Hash> {
        self.head.read().as_ref().map(|tree| tree.root())
    }

    pub fn store(&self) -> &Arc<dyn BlockStore> {
        &self.store
    }
}

impl SnapshotSource for ChainStore {
    async fn latest_state(&self) -> Result<Arc<StateTree>, ChainError> {
        self.head.read().clone().ok_or(ChainError::NoHead)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Account;
    use crate::crypto::Address;
    use crate::storage::{MemoryBlockStore, StateTreeBuilder};

    #[tokio::test]
    async fn test_no_head() {
        let chain = ChainStore::new(Arc::new(MemoryBlockStore::new()));
        assert_eq!(chain.head_root(), None);
        assert_eq!(chain.latest_state().await.unwrap_err(), ChainError::NoHead);
    }

    #[tokio::test]
    async fn test_head_advances() {
        let store: Arc<dyn BlockStore> = Arc::new(MemoryBlockStore::new());
        let alice = Address::derive(b"alice");

        let first = StateTreeBuilder::new(Arc::clone(&store))
            .set_account(alice, Account::new(1))
            .commit()
            .unwrap();
        let chain = ChainStore::with_head(Arc::clone(&store), first.root()).unwrap();
        let seen = chain.latest_state().await.unwrap();
        assert_eq!(seen.root(), first.root());

        let second = StateTreeBuilder::from_tree(&first)
            .unwrap()
            .set_account(alice, Account::new(2))
            .commit()
            .unwrap();
        chain.set_head(second.root()).unwrap();

        // Earlier snapshots stay valid after the head moves
        assert_eq!(seen.get_account(&alice).unwrap().balance, 1);
        let latest = chain.latest_state().await.unwrap();
        assert_eq!(latest.get_account(&alice).unwrap().balance, 2);
    }

    #[tokio::test]
    async fn test_unknown_root_rejected() {
        let chain = ChainStore::new(Arc::new(MemoryBlockStore::new()));
        let root = Hash::digest(b"missing");
        assert_eq!(
            chain.set_head(root),
            Err(ChainError::State(StateError::MissingBlock(root)))
        );
        assert_eq!(chain.head_root(), None);
    }
}
