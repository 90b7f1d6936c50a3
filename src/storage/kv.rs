//! Key-Value Store Contract
//!
//! The single collaborator the note lifecycle is built on: a flat string-to-string
//! map with get / put / delete. No transactions, no listing, no TTL support.
//! Expiry is enforced by the caller, never by the store.

use async_trait::async_trait;
use thiserror::Error;

/// Failure of an underlying store operation.
///
/// Every variant is a server-side condition; callers propagate it without
/// attempting local recovery.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("store responded with status {0}")]
    Status(reqwest::StatusCode),

    #[error("invalid store url: {0}")]
    InvalidUrl(String),
}

#[async_trait]
pub trait KvStore: Send + Sync {
    /// Returns the value stored under `key`, or `None` if absent.
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Unconditional upsert; last writer wins.
    async fn put(&self, key: &str, value: String) -> Result<(), StoreError>;

    /// Removes `key`. Deleting an absent key is not an error.
    async fn delete(&self, key: &str) -> Result<(), StoreError>;

    /// Removes `key` and returns the value it held.
    ///
    /// The default is a plain get followed by a delete, so two concurrent
    /// callers may both observe the value. Stores that can remove atomically
    /// override this so that at most one caller ever receives `Some`.
    async fn take(&self, key: &str) -> Result<Option<String>, StoreError> {
        let value = self.get(key).await?;
        if value.is_some() {
            self.delete(key).await?;
        }
        Ok(value)
    }
}
