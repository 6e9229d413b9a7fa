//! Client storage port
//!
//! Durable key-value storage that survives restarts, the counterpart of the
//! browser's local storage. Values are opaque strings; typed access lives in
//! the application layer.

use async_trait::async_trait;

use crate::ports::errors::StorageError;
use crate::storage_key::StorageKey;

#[async_trait]
pub trait ClientStoragePort: Send + Sync {
    /// Read a value. Absent keys are `Ok(None)`.
    async fn get(&self, key: StorageKey) -> Result<Option<String>, StorageError>;

    /// Write a value, replacing any previous one.
    async fn set(&self, key: StorageKey, value: &str) -> Result<(), StorageError>;

    /// Remove a value. Removing an absent key is not an error.
    async fn remove(&self, key: StorageKey) -> Result<(), StorageError>;

    async fn contains(&self, key: StorageKey) -> Result<bool, StorageError> {
        Ok(self.get(key).await?.is_some())
    }
}
