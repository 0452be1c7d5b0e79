//! Key-value store abstraction.
//!
//! All persistence in the workspace goes through [`KeyValueStore`], injected
//! into whatever component needs it. Records live as JSON documents under a
//! `(collection, key)` address.

mod memory;

pub use memory::MemoryStore;

use crate::error::AppError;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Fetch a single document, `None` when absent.
    async fn get(&self, collection: &str, key: &str) -> Result<Option<Value>, AppError>;

    /// Insert or overwrite a document.
    async fn put(&self, collection: &str, key: &str, value: Value) -> Result<(), AppError>;

    /// Delete a document. Returns `false` when the key was absent.
    async fn remove(&self, collection: &str, key: &str) -> Result<bool, AppError>;

    /// All documents in a collection, in key order.
    async fn list(&self, collection: &str) -> Result<Vec<Value>, AppError>;

    /// All keys in a collection, in key order.
    async fn list_keys(&self, collection: &str) -> Result<Vec<String>, AppError>;
}

/// Fetch and deserialize a single document.
pub async fn get_typed<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    collection: &str,
    key: &str,
) -> Result<Option<T>, AppError> {
    match store.get(collection, key).await? {
        Some(value) => Ok(Some(serde_json::from_value(value)?)),
        None => Ok(None),
    }
}

/// Serialize and store a single document.
pub async fn put_typed<T: Serialize>(
    store: &dyn KeyValueStore,
    collection: &str,
    key: &str,
    value: &T,
) -> Result<(), AppError> {
    store
        .put(collection, key, serde_json::to_value(value)?)
        .await
}

/// Fetch and deserialize every document in a collection.
pub async fn list_typed<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    collection: &str,
) -> Result<Vec<T>, AppError> {
    store
        .list(collection)
        .await?
        .into_iter()
        .map(|value| serde_json::from_value(value).map_err(AppError::from))
        .collect()
}
