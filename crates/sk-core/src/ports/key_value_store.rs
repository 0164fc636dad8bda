//! Key-value store port
//!
//! An asynchronous, string-keyed, string-valued persistent map. Values are
//! opaque to the store; repositories put JSON in them.

use async_trait::async_trait;

use crate::ports::errors::StoreError;

#[async_trait]
pub trait KeyValueStorePort: Send + Sync {
    /// Returns `None` when the key was never written or has been removed.
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Replaces the value wholesale. Readers see either the old or the new value.
    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Removing a missing key is not an error.
    async fn remove(&self, key: &str) -> Result<(), StoreError>;

    async fn multi_remove(&self, keys: &[&str]) -> Result<(), StoreError> {
        for key in keys {
            self.remove(key).await?;
        }
        Ok(())
    }
}
