use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use thiserror::Error;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("not found")]
    NotFound,

    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// String-keyed session-state sink, scoped to one app session.
///
/// The diagnostic writes exactly three keys once per completed run and reads
/// them back once at startup. Backends decide the actual lifetime: the
/// in-memory and `sqlite::memory:` stores vanish with the process, a
/// file-backed SQLite store survives restarts.
#[async_trait]
pub trait SessionStateRepository: Send + Sync {
    /// Fetch a single value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be queried. A missing key
    /// is `Ok(None)`, not an error.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Insert or overwrite a single value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the value cannot be stored.
    async fn put(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Drop all session state.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be cleared.
    async fn clear(&self) -> Result<(), StorageError>;
}

/// Simple in-memory store for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemorySessionStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl InMemorySessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Arc::new(Mutex::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl SessionStateRepository for InMemorySessionStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let guard = self
            .entries
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.get(key).cloned())
    }

    async fn put(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut guard = self
            .entries
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn clear(&self) -> Result<(), StorageError> {
        let mut guard = self
            .entries
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.clear();
        Ok(())
    }
}

/// Aggregates the session store behind a trait object for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub sessions: Arc<dyn SessionStateRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            sessions: Arc::new(InMemorySessionStore::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use diagnostic_core::model::{COMPLETED_SENTINEL, KEY_COMPLETED, KEY_RESULT, KEY_TITLE};

    #[tokio::test]
    async fn round_trips_session_fields() {
        let store = InMemorySessionStore::new();
        store.put(KEY_COMPLETED, COMPLETED_SENTINEL).await.unwrap();
        store.put(KEY_TITLE, "Manager’s Bottleneck Diagnostic").await.unwrap();
        store.put(KEY_RESULT, "Process Bottleneck").await.unwrap();

        assert_eq!(
            store.get(KEY_COMPLETED).await.unwrap().as_deref(),
            Some(COMPLETED_SENTINEL)
        );
        assert_eq!(
            store.get(KEY_RESULT).await.unwrap().as_deref(),
            Some("Process Bottleneck")
        );
    }

    #[tokio::test]
    async fn missing_key_is_none() {
        let store = InMemorySessionStore::new();
        assert_eq!(store.get(KEY_RESULT).await.unwrap(), None);
    }

    #[tokio::test]
    async fn overwrite_replaces_value() {
        let store = InMemorySessionStore::new();
        store.put(KEY_RESULT, "Process Bottleneck").await.unwrap();
        store.put(KEY_RESULT, "Role & Ownership Bottleneck").await.unwrap();
        assert_eq!(
            store.get(KEY_RESULT).await.unwrap().as_deref(),
            Some("Role & Ownership Bottleneck")
        );
    }

    #[tokio::test]
    async fn clear_empties_the_store() {
        let store = InMemorySessionStore::new();
        store.put(KEY_COMPLETED, COMPLETED_SENTINEL).await.unwrap();
        store.clear().await.unwrap();
        assert_eq!(store.get(KEY_COMPLETED).await.unwrap(), None);
    }
}
