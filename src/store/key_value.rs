//! Opaque key-value storage.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::error::{EngineError, EngineResult};

/// A string key-value store the entry ledger persists through.
///
/// Implementations must be shareable across request handlers.
pub trait KeyValueStore: Send + Sync + 'static {
    /// Returns the value stored under `key`, if any.
    fn get(&self, key: &str) -> EngineResult<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: String) -> EngineResult<()>;

    /// Removes `key`. Removing a missing key is not an error.
    fn delete(&self, key: &str) -> EngineResult<()>;
}

/// A process-local [`KeyValueStore`] backed by a `HashMap`.
///
/// # Example
///
/// ```
/// use overtime_engine::store::{InMemoryStore, KeyValueStore};
///
/// let store = InMemoryStore::default();
/// store.set("greeting", "hello".to_string()).unwrap();
/// assert_eq!(store.get("greeting").unwrap().as_deref(), Some("hello"));
/// ```
#[derive(Debug, Default)]
pub struct InMemoryStore {
    values: Mutex<HashMap<String, String>>,
}

impl InMemoryStore {
    fn lock(&self) -> EngineResult<std::sync::MutexGuard<'_, HashMap<String, String>>> {
        self.values.lock().map_err(|_| EngineError::StorageError {
            message: "in-memory store lock poisoned".to_string(),
        })
    }
}

impl KeyValueStore for InMemoryStore {
    fn get(&self, key: &str) -> EngineResult<Option<String>> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: String) -> EngineResult<()> {
        self.lock()?.insert(key.to_string(), value);
        Ok(())
    }

    fn delete(&self, key: &str) -> EngineResult<()> {
        self.lock()?.remove(key);
        Ok(())
    }
}
