// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Parses ports, database location, login policy and demo seeding from the environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthTrack Contributors

//! Environment-based configuration management

use crate::constants::{defaults, ports};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::path::PathBuf;
use tracing::{info, warn};

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational messages
    #[default]
    Info,
    /// Debug output
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Convert to `tracing::Level`
    #[must_use]
    pub const fn to_tracing_level(self) -> tracing::Level {
        match self {
            Self::Error => tracing::Level::ERROR,
            Self::Warn => tracing::Level::WARN,
            Self::Info => tracing::Level::INFO,
            Self::Debug => tracing::Level::DEBUG,
            Self::Trace => tracing::Level::TRACE,
        }
    }

    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }

    /// Check if this is a testing environment
    #[must_use]
    pub const fn is_testing(self) -> bool {
        matches!(self, Self::Testing)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Type-safe database location
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum DatabaseUrl {
    /// `SQLite` database with file path
    SQLite {
        /// Path to the database file
        path: PathBuf,
    },
    /// In-memory `SQLite`
    Memory,
}

impl DatabaseUrl {
    /// Parse a `DATABASE_URL` value
    ///
    /// Anything without a `sqlite:` prefix is treated as a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is empty
    pub fn parse_url(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(anyhow::anyhow!("DATABASE_URL cannot be empty"));
        }

        let path_str = trimmed.strip_prefix("sqlite:").unwrap_or(trimmed);
        if path_str == ":memory:" {
            Ok(Self::Memory)
        } else {
            Ok(Self::SQLite {
                path: PathBuf::from(path_str),
            })
        }
    }

    /// Convert to a sqlx connection string
    #[must_use]
    pub fn to_connection_string(&self) -> String {
        match self {
            Self::SQLite { path } => format!("sqlite:{}", path.display()),
            Self::Memory => "sqlite::memory:".to_owned(),
        }
    }

    /// Check if this is an in-memory database
    #[must_use]
    pub const fn is_memory(&self) -> bool {
        matches!(self, Self::Memory)
    }
}

impl Default for DatabaseUrl {
    fn default() -> Self {
        Self::SQLite {
            path: PathBuf::from(
                defaults::DEFAULT_DATABASE_URL
                    .strip_prefix("sqlite:")
                    .unwrap_or(defaults::DEFAULT_DATABASE_URL),
            ),
        }
    }
}

impl fmt::Display for DatabaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_connection_string())
    }
}

/// Server configuration loaded from the environment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP API port
    pub http_port: u16,
    /// Log level
    pub log_level: LogLevel,
    /// Deployment environment
    pub environment: Environment,
    /// Database configuration
    pub database: DatabaseConfig,
    /// Authentication configuration
    pub auth: AuthConfig,
    /// Application behavior
    pub app_behavior: AppBehaviorConfig,
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Database location
    pub url: DatabaseUrl,
}

/// Authentication configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Accept login even when credentials do not match the stored user
    pub allow_any_login: bool,
    /// bcrypt work factor for password hashing
    pub bcrypt_cost: u32,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            allow_any_login: true,
            bcrypt_cost: bcrypt::DEFAULT_COST,
        }
    }
}

/// Application behavior configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppBehaviorConfig {
    /// Start new sessions with sample activities, meals, water and goals
    pub seed_demo_data: bool,
    /// Allowed CORS origins, `*` for any
    pub cors_origins: Vec<String>,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to an unparseable value or the
    /// resulting configuration fails validation
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let config = Self {
            http_port: env_var_or("HTTP_PORT", &ports::DEFAULT_HTTP_PORT.to_string())
                .parse()
                .context("Invalid HTTP_PORT value")?,
            log_level: LogLevel::from_str_or_default(&env_var_or("RUST_LOG", "info")),
            environment: Environment::from_str_or_default(&env_var_or(
                "ENVIRONMENT",
                "development",
            )),
            database: DatabaseConfig {
                url: DatabaseUrl::parse_url(&env_var_or(
                    "DATABASE_URL",
                    defaults::DEFAULT_DATABASE_URL,
                ))
                .context("Invalid DATABASE_URL value")?,
            },
            auth: AuthConfig {
                allow_any_login: env_var_or("HEALTHTRACK_ALLOW_ANY_LOGIN", "true")
                    .parse()
                    .context("Invalid HEALTHTRACK_ALLOW_ANY_LOGIN value")?,
                bcrypt_cost: env_var_or(
                    "HEALTHTRACK_BCRYPT_COST",
                    &bcrypt::DEFAULT_COST.to_string(),
                )
                .parse()
                .context("Invalid HEALTHTRACK_BCRYPT_COST value")?,
            },
            app_behavior: AppBehaviorConfig {
                seed_demo_data: env_var_or("HEALTHTRACK_SEED_DEMO_DATA", "false")
                    .parse()
                    .context("Invalid HEALTHTRACK_SEED_DEMO_DATA value")?,
                cors_origins: parse_origins(&env_var_or("CORS_ORIGINS", "*")),
            },
        };

        config.validate()?;
        info!("Configuration loaded successfully");
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error if the port is zero or the bcrypt cost is outside
    /// the range bcrypt accepts
    pub fn validate(&self) -> Result<()> {
        if self.http_port == 0 {
            return Err(anyhow::anyhow!("HTTP_PORT cannot be 0"));
        }

        if !(4..=31).contains(&self.auth.bcrypt_cost) {
            return Err(anyhow::anyhow!(
                "HEALTHTRACK_BCRYPT_COST must be between 4 and 31, got {}",
                self.auth.bcrypt_cost
            ));
        }

        if self.environment.is_production() && self.auth.allow_any_login {
            warn!("Placeholder login is enabled in production: any credentials are accepted");
        }

        if self.environment.is_production() && self.database.url.is_memory() {
            warn!("In-memory database in production: the stored user is lost on restart");
        }

        Ok(())
    }

    /// Get a summary of the configuration for logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "HealthTrack Server Configuration:\n\
             - HTTP Port: {}\n\
             - Log Level: {}\n\
             - Environment: {}\n\
             - Database: {}\n\
             - Placeholder Login: {}\n\
             - Demo Data: {}\n\
             - CORS Origins: {}",
            self.http_port,
            self.log_level,
            self.environment,
            if self.database.url.is_memory() {
                "SQLite (memory)"
            } else {
                "SQLite"
            },
            if self.auth.allow_any_login {
                "Enabled"
            } else {
                "Disabled"
            },
            if self.app_behavior.seed_demo_data {
                "Enabled"
            } else {
                "Disabled"
            },
            self.app_behavior.cors_origins.join(", ")
        )
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Parse comma-separated CORS origins
fn parse_origins(origins_str: &str) -> Vec<String> {
    if origins_str.trim() == "*" {
        vec!["*".to_owned()]
    } else {
        origins_str
            .split(',')
            .map(|s| s.trim().to_owned())
            .filter(|s| !s.is_empty())
            .collect()
    }
}
