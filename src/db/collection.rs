// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Typed collections stored as JSON arrays in a [`KeyValueStore`].
//!
//! Every mutation is a whole-collection read-modify-write. Mutations on the
//! same key are serialized through a per-key lock so concurrent writers
//! cannot lose each other's updates.

use crate::db::KeyValueStore;
use crate::error::Result;
use dashmap::DashMap;
use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Shared per-key write locks.
pub type KeyLocks = Arc<DashMap<String, Arc<Mutex<()>>>>;

/// Collection access over a shared key-value store.
///
/// Construct once per process and clone it into each service; clones share
/// the key locks.
#[derive(Clone)]
pub struct CollectionStore {
    store: Arc<dyn KeyValueStore>,
    locks: KeyLocks,
}

impl CollectionStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            locks: Arc::new(DashMap::new()),
        }
    }

    /// Read the collection under `key`, or `None` if the key was never written.
    pub async fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<Vec<T>>> {
        match self.store.get(key).await? {
            Some(bytes) => {
                let items = serde_json::from_slice(&bytes).inspect_err(|e| {
                    tracing::warn!(key, error = %e, "Stored collection is not decodable");
                })?;
                Ok(Some(items))
            }
            None => Ok(None),
        }
    }

    /// Replace the collection under `key`.
    pub async fn save<T: Serialize>(&self, key: &str, items: &[T]) -> Result<()> {
        let bytes = serde_json::to_vec(items)?;
        self.store.set(key, bytes).await
    }

    /// Read the collection, writing `seed()` first if the key was never written.
    pub async fn load_or_seed<T, F>(&self, key: &str, seed: F) -> Result<Vec<T>>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Vec<T>,
    {
        let lock = self.lock_for(key);
        let _guard = lock.lock().await;

        if let Some(items) = self.load(key).await? {
            return Ok(items);
        }

        let items = seed();
        self.save(key, &items).await?;
        tracing::info!(key, count = items.len(), "Seeded collection");
        Ok(items)
    }

    /// Apply `mutate` to the collection under the key lock and persist it.
    ///
    /// A missing key starts from an empty collection. If `mutate` returns an
    /// error nothing is written.
    pub async fn update<T, R, F>(&self, key: &str, mutate: F) -> Result<R>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce(&mut Vec<T>) -> Result<R>,
    {
        let lock = self.lock_for(key);
        let _guard = lock.lock().await;

        let mut items = self.load(key).await?.unwrap_or_default();
        let result = mutate(&mut items)?;
        self.save(key, &items).await?;
        Ok(result)
    }

    fn lock_for(&self, key: &str) -> Arc<Mutex<()>> {
        self.locks
            .entry(key.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }
}
