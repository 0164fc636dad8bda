use serde::Serialize;
use serde_json::Value;
use std::marker::PhantomData;
use std::sync::Arc;
use tokio::sync::{Mutex, MutexGuard};
use tracing::{debug, error, warn};

use sk_core::persistence::quarantine_key;
use sk_core::ports::{KeyValueStorePort, RepositoryError};

use super::mappers::MappingError;

/// A record type that can live in a [`JsonCollection`].
pub(crate) trait StoredRecord: Serialize + Send + Sync + Sized {
    fn decode(value: Value) -> Result<Self, MappingError>;
}

/// Whole-array JSON collection stored under a single key.
///
/// The collection owns a write lock; repositories hold it across their
/// read-modify-write cycle so concurrent saves serialise instead of losing
/// each other's changes.
pub(crate) struct JsonCollection<R> {
    store: Arc<dyn KeyValueStorePort>,
    key: &'static str,
    write_lock: Mutex<()>,
    _record: PhantomData<fn() -> R>,
}

impl<R: StoredRecord> JsonCollection<R> {
    pub(crate) fn new(store: Arc<dyn KeyValueStorePort>, key: &'static str) -> Self {
        Self {
            store,
            key,
            write_lock: Mutex::new(()),
            _record: PhantomData,
        }
    }

    pub(crate) fn key(&self) -> &'static str {
        self.key
    }

    /// Acquire the single-writer lock for a read-modify-write cycle.
    pub(crate) async fn lock(&self) -> MutexGuard<'_, ()> {
        self.write_lock.lock().await
    }

    /// Loads every record in storage order.
    ///
    /// An absent or blank payload is an empty collection. Anything that does
    /// not decode is quarantined and reported as [`RepositoryError::Corrupt`].
    pub(crate) async fn load(&self) -> Result<Vec<R>, RepositoryError> {
        let Some(raw) = self.store.get(self.key).await? else {
            return Ok(Vec::new());
        };
        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }

        match decode_array::<R>(&raw) {
            Ok(records) => {
                debug!(key = self.key, count = records.len(), "collection loaded");
                Ok(records)
            }
            Err(reason) => Err(quarantine(self.store.as_ref(), self.key, &raw, reason).await),
        }
    }

    /// Overwrites the whole collection.
    pub(crate) async fn write(&self, records: &[R]) -> Result<(), RepositoryError> {
        let payload =
            serde_json::to_string(records).map_err(|e| RepositoryError::Serialize {
                key: self.key.to_string(),
                reason: e.to_string(),
            })?;
        self.store.set(self.key, &payload).await?;
        debug!(key = self.key, count = records.len(), "collection written");
        Ok(())
    }
}

fn decode_array<R: StoredRecord>(raw: &str) -> Result<Vec<R>, String> {
    let value: Value = serde_json::from_str(raw).map_err(|e| format!("invalid JSON: {e}"))?;
    let Value::Array(items) = value else {
        return Err("payload is not a JSON array".to_string());
    };
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| R::decode(item).map_err(|e| format!("record {index}: {e}")))
        .collect()
}

/// Decodes a single JSON document stored under `key`, quarantining it on failure.
pub(crate) async fn decode_document<T>(
    store: &dyn KeyValueStorePort,
    key: &str,
    raw: &str,
) -> Result<T, RepositoryError>
where
    T: serde::de::DeserializeOwned,
{
    match serde_json::from_str(raw) {
        Ok(value) => Ok(value),
        Err(e) => Err(quarantine(store, key, raw, e.to_string()).await),
    }
}

/// Parks the unreadable payload beside the original and builds the error.
///
/// The original key is left untouched; mutations refuse to run on top of it
/// until someone resets or repairs the data.
async fn quarantine(
    store: &dyn KeyValueStorePort,
    key: &str,
    raw: &str,
    reason: String,
) -> RepositoryError {
    let parked_at = quarantine_key(key);
    match store.set(&parked_at, raw).await {
        Ok(()) => warn!(key, quarantine = %parked_at, %reason, "corrupt payload quarantined"),
        Err(e) => error!(key, error = %e, %reason, "corrupt payload could not be quarantined"),
    }
    RepositoryError::Corrupt {
        key: key.to_string(),
        reason,
    }
}
