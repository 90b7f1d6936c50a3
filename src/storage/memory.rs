use super::kv::{KvStore, StoreError};

use async_trait::async_trait;
use dashmap::DashMap;

/// In-process store backed by a concurrent hash map.
///
/// Used as the default backend of a single node and as the backing map of a
/// store node serving the `/kv` protocol.
#[derive(Debug, Default)]
pub struct MemoryKvStore {
    entries: DashMap<String, String>,
}

impl MemoryKvStore {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }
}

#[async_trait]
impl KvStore for MemoryKvStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).map(|entry| entry.value().clone()))
    }

    async fn put(&self, key: &str, value: String) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), StoreError> {
        self.entries.remove(key);
        Ok(())
    }

    // Atomic: the shard lock guarantees a single winner.
    async fn take(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.remove(key).map(|(_, value)| value))
    }
}
