//! Content-addressed block storage

use std::collections::HashMap;
use std::path::Path;

use parking_lot::RwLock;

use crate::crypto::Hash;

use super::StateError;

/// Key under which the sled store records the chain head
const HEAD_KEY: &[u8] = b"head";

/// Content-addressed block store
///
/// Blocks are keyed by the SHA-256 of their bytes, so a `put` of the same
/// bytes is idempotent.
pub trait BlockStore: Send + Sync {
    /// Store a block, returning its content hash
    fn put(&self, data: &[u8]) -> Result<Hash, StateError>;

    /// Fetch a block by content hash
    fn get(&self, key: &Hash) -> Result<Option<Vec<u8>>, StateError>;

    /// Check if a block exists
    fn has(&self, key: &Hash) -> Result<bool, StateError> {
        Ok(self.get(key)?.is_some())
    }
}

/// In-memory block store
#[derive(Debug, Default)]
pub struct MemoryBlockStore {
    blocks: RwLock<HashMap<Hash, Vec<u8>>>,
}

impl MemoryBlockStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored blocks
    pub fn len(&self) -> usize {
        self.blocks.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.read().is_empty()
    }

    /// Drop a block, leaving dangling references behind
    pub fn remove(&self, key: &Hash) -> Option<Vec<u8>> {
        self.blocks.write().remove(key)
    }
}

impl BlockStore for MemoryBlockStore {
    fn put(&self, data: &[u8]) -> Result<Hash, StateError> {
        let key = Hash::digest(data);
        self.blocks.write().entry(key).or_insert_with(|| data.to_vec());
        Ok(key)
    }

    fn get(&self, key: &Hash) -> Result<Option<Vec<u8>>, StateError> {
        Ok(self.blocks.read().get(key).cloned())
    }

    fn has(&self, key: &Hash) -> Result<bool, StateError> {
        Ok(self.blocks.read().contains_key(key))
    }
}

/// Block store persisted in sled
pub struct SledBlockStore {
    db: sled::Db,
    blocks: sled::Tree,
}

impl SledBlockStore {
    /// Open or create a store at `path`
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StateError> {
        let db = sled::open(path)?;
        let blocks = db.open_tree("blocks")?;
        Ok(Self { db, blocks })
    }

    /// Root of the recorded chain head, if any
    pub fn head(&self) -> Result<Option<Hash>, StateError> {
        match self.db.get(HEAD_KEY)? {
            Some(bytes) => {
                let arr: [u8; 32] = bytes[..]
                    .try_into()
                    .map_err(|_| StateError::Decode(format!("head record of {} bytes", bytes.len())))?;
                Ok(Some(Hash::new(arr)))
            }
            None => Ok(None),
        }
    }

    /// Record the chain head
    pub fn set_head(&self, root: &Hash) -> Result<(), StateError> {
        self.db.insert(HEAD_KEY, root.as_bytes().to_vec())?;
        Ok(())
    }

    /// Flush to disk
    pub fn flush(&self) -> Result<(), StateError> {
        self.db.flush()?;
        Ok(())
    }
}

impl BlockStore for SledBlockStore {
    fn put(&self, data: &[u8]) -> Result<Hash, StateError> {
        let key = Hash::digest(data);
        self.blocks.insert(key.as_bytes(), data)?;
        Ok(key)
    }

    fn get(&self, key: &Hash) -> Result<Option<Vec<u8>>, StateError> {
        Ok(self.blocks.get(key.as_bytes())?.map(|v| v.to_vec()))
    }

    fn has(&self, key: &Hash) -> Result<bool, StateError> {
        Ok(self.blocks.contains_key(key.as_bytes())?)
    }
}
