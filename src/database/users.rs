// ABOUTME: Repository for the single stored user record
// ABOUTME: Serializes the user as JSON text under the current-user key
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthTrack Contributors

use super::KeyValueStore;
use crate::constants::storage::CURRENT_USER_KEY;
use crate::errors::{AppError, AppResult};
use healthtrack_core::models::User;
use std::sync::Arc;

/// Reads and writes the one persisted user
///
/// Saving always overwrites; there is never more than one user.
#[derive(Clone)]
pub struct UserRepository {
    store: Arc<dyn KeyValueStore>,
}

impl UserRepository {
    /// Create a repository over a key-value store
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Load the stored user, if any
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails or the stored text is not a valid
    /// user record
    pub async fn load(&self) -> AppResult<Option<User>> {
        let Some(raw) = self.store.get(CURRENT_USER_KEY).await? else {
            return Ok(None);
        };

        serde_json::from_str(&raw).map(Some).map_err(|e| {
            AppError::serialization(format!("Stored user record is corrupt: {e}")).with_source(e)
        })
    }

    /// Store the user, replacing any previous record
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the store fails
    pub async fn save(&self, user: &User) -> AppResult<()> {
        let raw = serde_json::to_string(user)?;
        self.store.set(CURRENT_USER_KEY, &raw).await
    }

    /// Remove the stored user
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails
    pub async fn clear(&self) -> AppResult<()> {
        self.store.remove(CURRENT_USER_KEY).await
    }
}
