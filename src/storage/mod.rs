//! The key-value storage capability and its adapters.
//!
//! The stores persist through an async, string-keyed, string-valued
//! capability supplied by the host platform. This module defines that
//! capability as the [`KeyValueStore`] trait, provides the JSON helpers the
//! stores share for reading and writing whole records, and ships two
//! adapters: [`MemoryStore`] (in-memory, used by tests and as a throwaway
//! default) and [`fs::FileStore`] (one JSON file per key on disk).

pub mod fs;

use crate::errors::StorageResult;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::Mutex;

pub use fs::FileStore;

/// Async, string-keyed, string-valued storage supplied by the host.
///
/// The core only ever reads and writes whole serialized records under a
/// handful of well-known keys; see the `constants` module for the key names.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Returns the stored value for `key`, or `None` when the key is absent.
    async fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Removes `key` and its value; absent keys are not an error.
    async fn remove(&self, key: &str) -> StorageResult<()>;
}

/// Reads and deserializes the JSON record stored under `key`.
///
/// Returns `Ok(None)` when the key is absent. A read or parse failure is
/// returned to the caller, which decides how to fall back.
pub async fn load_json<T: DeserializeOwned>(
    storage: &dyn KeyValueStore,
    key: &str,
) -> StorageResult<Option<T>> {
    match storage.get(key).await? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

/// Serializes `value` to JSON and stores it under `key`.
pub async fn save_json<T: Serialize>(
    storage: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> StorageResult<()> {
    let raw = serde_json::to_string(value)?;
    storage.set(key, &raw).await
}

/// In-memory [`KeyValueStore`] backed by a hash map.
///
/// Used by the test suites and handy as a throwaway backend for hosts that
/// do not need durability. Writes and reads can be made to fail on demand so
/// tests can exercise the stores' error containment.
#[derive(Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with the given key-value pairs.
    pub fn with_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        MemoryStore {
            values: Mutex::new(values.into_iter().collect()),
            ..Default::default()
        }
    }

    /// Makes every subsequent `get` fail until reset.
    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    /// Makes every subsequent `set`/`remove` fail until reset.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Returns the raw stored value for `key`, for test assertions.
    pub async fn raw(&self, key: &str) -> Option<String> {
        self.values.lock().await.get(key).cloned()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> StorageResult<Option<String>> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(crate::errors::StorageError::Backend(
                "injected read failure".to_string(),
            ));
        }
        Ok(self.values.lock().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(crate::errors::StorageError::Backend(
                "injected write failure".to_string(),
            ));
        }
        self.values
            .lock()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> StorageResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(crate::errors::StorageError::Backend(
                "injected write failure".to_string(),
            ));
        }
        self.values.lock().await.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_store_set_get_remove() {
        let store = MemoryStore::new();
        assert_eq!(store.get("missing").await.unwrap(), None);

        store.set("k", "v").await.unwrap();
        assert_eq!(store.get("k").await.unwrap().as_deref(), Some("v"));

        store.remove("k").await.unwrap();
        assert_eq!(store.get("k").await.unwrap(), None);

        // Removing an absent key is not an error.
        store.remove("k").await.unwrap();
    }

    #[tokio::test]
    async fn test_load_json_absent_key() {
        let store = MemoryStore::new();
        let loaded: Option<Vec<String>> = load_json(&store, "nothing").await.unwrap();
        assert_eq!(loaded, None);
    }

    #[tokio::test]
    async fn test_load_json_malformed_value() {
        let store = MemoryStore::with_values([("bad".to_string(), "{not json".to_string())]);
        let result: StorageResult<Option<Vec<String>>> = load_json(&store, "bad").await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_save_then_load_round_trip() {
        let store = MemoryStore::new();
        let names = vec!["Personal".to_string(), "Travel".to_string()];
        save_json(&store, "cats", &names).await.unwrap();

        let loaded: Option<Vec<String>> = load_json(&store, "cats").await.unwrap();
        assert_eq!(loaded, Some(names));
    }

    #[tokio::test]
    async fn test_injected_failures() {
        let store = MemoryStore::new();
        store.set_fail_writes(true);
        assert!(store.set("k", "v").await.is_err());
        assert!(store.remove("k").await.is_err());

        store.set_fail_writes(false);
        store.set("k", "v").await.unwrap();
        store.set_fail_reads(true);
        assert!(store.get("k").await.is_err());
    }
}
