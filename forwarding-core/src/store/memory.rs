//! In-memory store implementation.

use super::KeyValueStore;
use crate::error::AppError;
use async_trait::async_trait;
use dashmap::DashMap;
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::instrument;

/// Thread-safe in-memory store.
///
/// Collections are keyed maps ordered by key, so `list` output is
/// deterministic across calls.
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: DashMap<String, BTreeMap<String, Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    #[instrument(skip(self))]
    async fn get(&self, collection: &str, key: &str) -> Result<Option<Value>, AppError> {
        Ok(self
            .collections
            .get(collection)
            .and_then(|documents| documents.get(key).cloned()))
    }

    #[instrument(skip(self, value))]
    async fn put(&self, collection: &str, key: &str, value: Value) -> Result<(), AppError> {
        self.collections
            .entry(collection.to_string())
            .or_default()
            .insert(key.to_string(), value);
        Ok(())
    }

    #[instrument(skip(self))]
    async fn remove(&self, collection: &str, key: &str) -> Result<bool, AppError> {
        Ok(self
            .collections
            .get_mut(collection)
            .map(|mut documents| documents.remove(key).is_some())
            .unwrap_or(false))
    }

    #[instrument(skip(self))]
    async fn list(&self, collection: &str) -> Result<Vec<Value>, AppError> {
        Ok(self
            .collections
            .get(collection)
            .map(|documents| documents.values().cloned().collect())
            .unwrap_or_default())
    }

    #[instrument(skip(self))]
    async fn list_keys(&self, collection: &str) -> Result<Vec<String>, AppError> {
        Ok(self
            .collections
            .get(collection)
            .map(|documents| documents.keys().cloned().collect())
            .unwrap_or_default())
    }
}
