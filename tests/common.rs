// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides logging, store, resource and sample-form helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthTrack Contributors
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `healthtrack_server`

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use healthtrack_server::{
    config::{
        AppBehaviorConfig, AuthConfig, DatabaseConfig, DatabaseUrl, Environment, LogLevel,
        ServerConfig,
    },
    database::{KeyValueStore, MemoryStore},
    models::Gender,
    resources::ServerResources,
    server::HealthTrackServer,
    services::auth::RegisterRequest,
};
use std::sync::{Arc, Once};

static INIT_LOGGER: Once = Once::new();

/// Lowest cost bcrypt accepts, keeps hashing fast in tests
pub const TEST_BCRYPT_COST: u32 = 4;

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Configuration suitable for tests
pub fn test_config(allow_any_login: bool, seed_demo_data: bool) -> ServerConfig {
    ServerConfig {
        http_port: 8081,
        log_level: LogLevel::Warn,
        environment: Environment::Testing,
        database: DatabaseConfig {
            url: DatabaseUrl::Memory,
        },
        auth: AuthConfig {
            allow_any_login,
            bcrypt_cost: TEST_BCRYPT_COST,
        },
        app_behavior: AppBehaviorConfig {
            seed_demo_data,
            cors_origins: vec!["*".to_owned()],
        },
    }
}

/// Resources over a fresh in-memory store
pub fn create_test_resources(allow_any_login: bool, seed_demo_data: bool) -> Arc<ServerResources> {
    init_test_logging();
    let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
    Arc::new(ServerResources::new(
        store,
        Arc::new(test_config(allow_any_login, seed_demo_data)),
    ))
}

/// Server with placeholder login on and no demo data
pub fn create_test_server() -> HealthTrackServer {
    HealthTrackServer::new(create_test_resources(true, false))
}

/// Registration form for a 70 kg, 175 cm user
pub fn sample_registration() -> RegisterRequest {
    RegisterRequest {
        username: "somchai".to_owned(),
        password: "correct-horse".to_owned(),
        confirm_password: "correct-horse".to_owned(),
        first_name: "Somchai".to_owned(),
        last_name: "Jaidee".to_owned(),
        email: "somchai@example.com".to_owned(),
        phone: "081-234-5678".to_owned(),
        gender: Some(Gender::Male),
        date_of_birth: NaiveDate::from_ymd_opt(1990, 5, 15),
        weight_kg: 70.0,
        height_cm: 175.0,
    }
}

/// Fixed instant for deterministic tests
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 15, 9, 30, 0).unwrap()
}
