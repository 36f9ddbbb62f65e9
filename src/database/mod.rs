// ABOUTME: Key-value persistence for the single stored user record
// ABOUTME: SQLite-backed Database, the KeyValueStore trait and its in-memory implementation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthTrack Contributors

//! # Database Management
//!
//! The only persisted state is a handful of text values addressed by key.
//! [`Database`] stores them in a `SQLite` table; [`MemoryStore`] keeps them in
//! a map for tests and throwaway runs. Both implement [`KeyValueStore`].

mod memory;
mod users;

pub use memory::MemoryStore;
pub use users::UserRepository;

use crate::config::DatabaseUrl;
use crate::errors::{AppError, AppResult};
use crate::logging::AppLogger;
use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::Utc;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{Pool, Row, Sqlite};
use std::time::Instant;
use tracing::debug;

/// Storage of text values addressed by string keys
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`
    async fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// Insert or replace the value stored under `key`
    async fn set(&self, key: &str, value: &str) -> AppResult<()>;

    /// Delete `key`; deleting an absent key succeeds
    async fn remove(&self, key: &str) -> AppResult<()>;
}

/// `SQLite` key-value store
#[derive(Clone)]
pub struct Database {
    pool: Pool<Sqlite>,
}

impl Database {
    /// Open the database and run migrations
    ///
    /// File databases are created on first use, along with their parent
    /// directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created, the connection
    /// fails or a migration fails
    pub async fn new(url: &DatabaseUrl) -> Result<Self> {
        let pool = match url {
            DatabaseUrl::SQLite { path } => {
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    tokio::fs::create_dir_all(parent).await.with_context(|| {
                        format!("Failed to create database directory {}", parent.display())
                    })?;
                }
                SqlitePoolOptions::new()
                    .connect(&format!("{}?mode=rwc", url.to_connection_string()))
                    .await?
            }
            // Every in-memory connection is a separate database
            DatabaseUrl::Memory => {
                SqlitePoolOptions::new()
                    .max_connections(1)
                    .idle_timeout(None)
                    .max_lifetime(None)
                    .connect(&url.to_connection_string())
                    .await?
            }
        };

        let db = Self { pool };
        db.migrate().await?;
        Ok(db)
    }

    /// Get a reference to the database pool
    #[must_use]
    pub const fn pool(&self) -> &Pool<Sqlite> {
        &self.pool
    }

    /// Run database migrations
    ///
    /// # Errors
    ///
    /// Returns an error if table creation fails
    pub async fn migrate(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS key_value_store (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await
        .context("Failed to create key_value_store table")?;

        debug!("Database migrations complete");
        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for Database {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        let started = Instant::now();
        let row = sqlx::query(
            r"
            SELECT value
            FROM key_value_store
            WHERE key = ?1
            ",
        )
        .bind(key)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to read key {key}: {e}")))?;

        AppLogger::log_storage_operation("get", key, true, elapsed_ms(started));
        Ok(row.map(|row| row.get("value")))
    }

    async fn set(&self, key: &str, value: &str) -> AppResult<()> {
        let started = Instant::now();
        let now = Utc::now().to_rfc3339();

        sqlx::query(
            r"
            INSERT INTO key_value_store (key, value, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?3)
            ON CONFLICT(key) DO UPDATE SET
                value = ?2,
                updated_at = ?3
            ",
        )
        .bind(key)
        .bind(value)
        .bind(&now)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to write key {key}: {e}")))?;

        AppLogger::log_storage_operation("set", key, true, elapsed_ms(started));
        Ok(())
    }

    async fn remove(&self, key: &str) -> AppResult<()> {
        let started = Instant::now();
        sqlx::query("DELETE FROM key_value_store WHERE key = ?1")
            .bind(key)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to remove key {key}: {e}")))?;

        AppLogger::log_storage_operation("remove", key, true, elapsed_ms(started));
        Ok(())
    }
}

fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}
