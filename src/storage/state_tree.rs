//! Versioned account state
//!
//! A [`StateTree`] is an immutable snapshot of every account, identified by
//! its root hash. Each account record is stored as its own block; the root
//! block is the sorted `(address, account block hash)` index. Identical
//! account sets therefore always produce the same root.
//!
//! New versions are produced with [`StateTreeBuilder`], which never touches
//! the snapshot it started from.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::core::Account;
use crate::crypto::{Address, Hash};

use super::blockstore::BlockStore;

/// State access errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StateError {
    #[error("account {0} not found")]
    AccountNotFound(Address),

    #[error("block {0} missing from store")]
    MissingBlock(Hash),

    #[error("failed to decode block: {0}")]
    Decode(String),

    #[error("failed to encode block: {0}")]
    Encode(String),

    #[error("storage error: {0}")]
    Storage(String),
}

impl From<sled::Error> for StateError {
    fn from(e: sled::Error) -> Self {
        StateError::Storage(e.to_string())
    }
}

/// Immutable account state snapshot
#[derive(Clone)]
pub struct StateTree {
    root: Hash,
    index: Arc<BTreeMap<Address, Hash>>,
    store: Arc<dyn BlockStore>,
}

impl StateTree {
    /// Load the snapshot whose root block is `root`
    pub fn load(store: Arc<dyn BlockStore>, root: Hash) -> Result<Self, StateError> {
        let bytes = store.get(&root)?.ok_or(StateError::MissingBlock(root))?;
        let entries: Vec<(Address, Hash)> =
            bincode::deserialize(&bytes).map_err(|e| StateError::Decode(e.to_string()))?;

        Ok(Self {
            root,
            index: Arc::new(entries.into_iter().collect()),
            store,
        })
    }

    /// Root hash identifying this snapshot
    pub fn root(&self) -> Hash {
        self.root
    }

    /// Block store backing this snapshot
    pub fn store(&self) -> &Arc<dyn BlockStore> {
        &self.store
    }

    /// Load the account at `address`
    ///
    /// Absence is reported as [`StateError::AccountNotFound`]; every other
    /// variant means the snapshot itself could not be read.
    pub fn get_account(&self, address: &Address) -> Result<Account, StateError> {
        let key = self
            .index
            .get(address)
            .ok_or(StateError::AccountNotFound(*address))?;
        let bytes = self.store.get(key)?.ok_or(StateError::MissingBlock(*key))?;
        bincode::deserialize(&bytes).map_err(|e| StateError::Decode(e.to_string()))
    }

    pub fn contains(&self, address: &Address) -> bool {
        self.index.contains_key(address)
    }

    /// Number of accounts
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Addresses in sorted order
    pub fn addresses(&self) -> impl Iterator<Item = &Address> {
        self.index.keys()
    }
}

impl std::fmt::Debug for StateTree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateTree")
            .field("root", &self.root)
            .field("accounts", &self.index.len())
            .finish()
    }
}

/// Builds a new state version
pub struct StateTreeBuilder {
    store: Arc<dyn BlockStore>,
    accounts: BTreeMap<Address, Account>,
}

impl StateTreeBuilder {
    /// Start from an empty state
    pub fn new(store: Arc<dyn BlockStore>) -> Self {
        Self {
            store,
            accounts: BTreeMap::new(),
        }
    }

    /// Start from the accounts of an existing snapshot
    pub fn from_tree(tree: &StateTree) -> Result<Self, StateError> {
        let mut accounts = BTreeMap::new();
        for address in tree.addresses() {
            accounts.insert(*address, tree.get_account(address)?);
        }

        Ok(Self {
            store: Arc::clone(&tree.store),
            accounts,
        })
    }

    /// Insert or replace an account
    pub fn set_account(&mut self, address: Address, account: Account) -> &mut Self {
        self.accounts.insert(address, account);
        self
    }

    /// Remove an account, returning it if present
    pub fn remove_account(&mut self, address: &Address) -> Option<Account> {
        self.accounts.remove(address)
    }

    /// Write all blocks and return the resulting snapshot
    pub fn commit(&self) -> Result<StateTree, StateError> {
        let mut index = BTreeMap::new();
        for (address, account) in &self.accounts {
            let bytes = bincode::serialize(account).map_err(|e| StateError::Encode(e.to_string()))?;
            index.insert(*address, self.store.put(&bytes)?);
        }

        let entries: Vec<(Address, Hash)> = index.iter().map(|(a, h)| (*a, *h)).collect();
        let bytes = bincode::serialize(&entries).map_err(|e| StateError::Encode(e.to_string()))?;
        let root = self.store.put(&bytes)?;

        Ok(StateTree {
            root,
            index: Arc::new(index),
            store: Arc::clone(&self.store),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CodeId;
    use crate::storage::MemoryBlockStore;

    fn memory_store() -> Arc<dyn BlockStore> {
        Arc::new(MemoryBlockStore::new())
    }

    #[test]
    fn test_commit_and_read_back() {
        let store = memory_store();
        let alice = Address::derive(b"alice");
        let token = Address::derive(b"token");

        let tree = StateTreeBuilder::new(store)
            .set_account(alice, Account::new(100))
            .set_account(token, Account::new_program(CodeId::of("token"), 0))
            .commit()
            .unwrap();

        assert_eq!(tree.len(), 2);
        assert_eq!(tree.get_account(&alice).unwrap().balance, 100);
        assert_eq!(tree.get_account(&token).unwrap().code, CodeId::of("token"));
    }

    #[test]
    fn test_absent_account_is_distinct() {
        let tree = StateTreeBuilder::new(memory_store()).commit().unwrap();
        let nobody = Address::derive(b"nobody");
        assert!(tree.is_empty());
        assert_eq!(tree.get_account(&nobody), Err(StateError::AccountNotFound(nobody)));
    }

    #[test]
    fn test_root_is_content_derived() {
        let alice = Address::derive(b"alice");
        let a = StateTreeBuilder::new(memory_store())
            .set_account(alice, Account::new(1))
            .commit()
            .unwrap();
        let b = StateTreeBuilder::new(memory_store())
            .set_account(alice, Account::new(1))
            .commit()
            .unwrap();
        let c = StateTreeBuilder::new(memory_store())
            .set_account(alice, Account::new(2))
            .commit()
            .unwrap();

        assert_eq!(a.root(), b.root());
        assert_ne!(a.root(), c.root());
    }

    #[test]
    fn test_load_from_root() {
        let store = memory_store();
        let alice = Address::derive(b"alice");
        let committed = StateTreeBuilder::new(Arc::clone(&store))
            .set_account(alice, Account::new(7))
            .commit()
            .unwrap();

        let loaded = StateTree::load(store, committed.root()).unwrap();
        assert_eq!(loaded.root(), committed.root());
        assert_eq!(loaded.get_account(&alice).unwrap(), Account::new(7));

        let missing = Hash::digest(b"no such root");
        assert_eq!(
            StateTree::load(memory_store(), missing).unwrap_err(),
            StateError::MissingBlock(missing)
        );
    }

    #[test]
    fn test_builder_leaves_base_snapshot_untouched() {
        let alice = Address::derive(b"alice");
        let bob = Address::derive(b"bob");
        let base = StateTreeBuilder::new(memory_store())
            .set_account(alice, Account::new(1))
            .commit()
            .unwrap();

        let mut builder = StateTreeBuilder::from_tree(&base).unwrap();
        builder.set_account(bob, Account::new(2));
        assert!(builder.remove_account(&alice).is_some());
        let next = builder.commit().unwrap();

        assert!(base.contains(&alice));
        assert!(!base.contains(&bob));
        assert!(!next.contains(&alice));
        assert!(next.contains(&bob));
    }

    #[test]
    fn test_missing_account_block() {
        let store = Arc::new(MemoryBlockStore::new());
        let alice = Address::derive(b"alice");
        let tree = StateTreeBuilder::new(store.clone())
            .set_account(alice, Account::new(3))
            .commit()
            .unwrap();

        let account_block = Hash::digest(&bincode::serialize(&Account::new(3)).unwrap());
        store.remove(&account_block);

        assert_eq!(
            tree.get_account(&alice),
            Err(StateError::MissingBlock(account_block))
        );
    }
}
