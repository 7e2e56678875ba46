use std::sync::Arc;

use quiz_core::model::GameStats;

use crate::repository::{KeyValueStore, StorageError};

/// Typed wrapper over the key-value store for the persisted statistics
/// record: one JSON blob under one key.
///
/// Decoding failures surface as `StorageError::Serialization`; deciding to
/// fall back to defaults (and logging that) is the caller's concern.
#[derive(Clone)]
pub struct StatsStore {
    store: Arc<dyn KeyValueStore>,
    key: String,
}

impl StatsStore {
    /// Store key for the statistics record. Existing saves live under this
    /// name, so changing it orphans them.
    pub const DEFAULT_KEY: &'static str = "umamusume-game-stats";

    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self::with_key(store, Self::DEFAULT_KEY)
    }

    #[must_use]
    pub fn with_key(store: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Load the persisted record, `None` when nothing was stored yet.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Serialization` for a malformed blob, or other
    /// storage errors from the underlying store.
    pub async fn load(&self) -> Result<Option<GameStats>, StorageError> {
        let Some(raw) = self.store.get(&self.key).await? else {
            return Ok(None);
        };
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|err| StorageError::Serialization(err.to_string()))
    }

    /// Persist the record, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if encoding or the write fails.
    pub async fn save(&self, stats: &GameStats) -> Result<(), StorageError> {
        let raw = serde_json::to_string(stats)
            .map_err(|err| StorageError::Serialization(err.to_string()))?;
        self.store.put(&self.key, &raw).await
    }

    /// Remove the persisted record entirely.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the removal fails.
    pub async fn clear(&self) -> Result<(), StorageError> {
        self.store.remove(&self.key).await
    }
}
