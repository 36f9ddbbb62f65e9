// ABOUTME: In-memory key-value store for tests and ephemeral runs
// ABOUTME: DashMap-backed implementation of the KeyValueStore trait
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthTrack Contributors

use super::KeyValueStore;
use crate::errors::AppResult;
use async_trait::async_trait;
use dashmap::DashMap;

/// Process-local key-value store
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: DashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store holds no keys
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.entries.get(key).map(|value| value.clone()))
    }

    async fn set(&self, key: &str, value: &str) -> AppResult<()> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    async fn remove(&self, key: &str) -> AppResult<()> {
        self.entries.remove(key);
        Ok(())
    }
}
