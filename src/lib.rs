// ABOUTME: Main library entry point for the HealthTrack fitness tracking server
// ABOUTME: Exposes the HTTP API over profile, activity, nutrition, goal and dashboard pages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthTrack Contributors

// deny(unsafe_code): zero-tolerance unsafe policy
#![deny(unsafe_code)]

//! # HealthTrack Server
//!
//! A personal fitness tracking service. One registered user is persisted in a
//! key-value store; activity, meal, water and goal data live in the login
//! session and are rebuilt (optionally from demo data) for every new session.
//!
//! ## Features
//!
//! - **Profile**: registration, edit mode with save/cancel, BMI with category
//! - **Activity log**: distance-based calorie estimates and running totals
//! - **Nutrition**: meals by slot, daily calorie budget, water toward a fixed goal
//! - **Goals**: progress percentage, days to deadline, completion tiers
//! - **Dashboard**: read-only aggregation of everything above
//!
//! ## Architecture
//!
//! - **Models and algorithms** live in the `healthtrack-core` and
//!   `healthtrack-intelligence` workspace crates
//! - **Services**: page controllers that replace their snapshot on each change
//! - **Routes**: axum routers, one per page
//! - **Database**: `SQLite` key-value table behind the [`database::KeyValueStore`] trait
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use healthtrack_server::config::ServerConfig;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("HealthTrack configured on port {}", config.http_port);
//!     Ok(())
//! }
//! ```

/// Environment configuration
pub mod config;

/// Domain constants re-exported from the core crate
pub mod constants;

/// Key-value persistence for the registered user
pub mod database;

/// Sample data used to seed new sessions
pub mod demo;

/// Unified error handling
pub mod errors;

/// Structured logging setup
pub mod logging;

/// HTTP middleware for tracing and CORS
pub mod middleware;

/// Shared resources handed to every router
pub mod resources;

/// HTTP route handlers
pub mod routes;

/// Server assembly and lifecycle
pub mod server;

/// Page controllers and business services
pub mod services;

/// Login sessions and per-session page state
pub mod session;

pub use healthtrack_core::models;
