// ABOUTME: Configuration management module for centralized server settings
// ABOUTME: Re-exports environment-driven server, database, auth and behavior configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthTrack Contributors

//! Configuration module for the HealthTrack server
//!
//! All settings are read from environment variables once at startup by
//! [`ServerConfig::from_env`].

/// Environment and server configuration
pub mod environment;

pub use environment::{
    AppBehaviorConfig, AuthConfig, DatabaseConfig, DatabaseUrl, Environment, LogLevel,
    ServerConfig,
};
