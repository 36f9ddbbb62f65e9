// ABOUTME: Centralized resource container shared by every route handler
// ABOUTME: Holds configuration, the key-value store, auth service and session registry
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthTrack Contributors

//! # Server Resources
//!
//! Built once at startup and handed to each router as `Arc<ServerResources>`.

use crate::config::ServerConfig;
use crate::database::{KeyValueStore, UserRepository};
use crate::errors::{AppError, AppResult};
use crate::logging::AppLogger;
use crate::services::auth::AuthService;
use crate::session::{SessionId, SessionManager, SharedSession};
use axum::http::HeaderMap;
use std::sync::Arc;

/// Shared server resources
#[derive(Clone)]
pub struct ServerResources {
    /// Loaded configuration
    pub config: Arc<ServerConfig>,
    /// Backing store for the user record
    pub store: Arc<dyn KeyValueStore>,
    /// Registration and login
    pub auth: Arc<AuthService>,
    /// Live sessions
    pub sessions: Arc<SessionManager>,
}

impl ServerResources {
    /// Wire resources over a store
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>, config: Arc<ServerConfig>) -> Self {
        let users = UserRepository::new(Arc::clone(&store));
        let auth = Arc::new(AuthService::new(users, config.auth.clone()));
        let sessions = Arc::new(SessionManager::new(config.app_behavior.seed_demo_data));

        Self {
            config,
            store,
            auth,
            sessions,
        }
    }

    /// Resolve the session named by the `Authorization: Bearer` header
    ///
    /// # Errors
    ///
    /// Returns `AppError::AuthRequired` when the header is absent and
    /// `AppError::AuthInvalid` when it is malformed or names no live session
    pub fn authenticate(&self, headers: &HeaderMap) -> AppResult<(SessionId, SharedSession)> {
        let session_id = session_id_from_headers(headers)?;
        let session = self.sessions.get(&session_id).ok_or_else(|| {
            AppLogger::log_security_event("unknown_session", "session id not found", None);
            AppError::auth_invalid("Session not found or expired")
        })?;
        Ok((session_id, session))
    }
}

/// Parse the session id from an `Authorization: Bearer <id>` header
///
/// # Errors
///
/// Returns `AppError::AuthRequired` when the header is absent and
/// `AppError::AuthInvalid` when it is not a bearer session id
pub fn session_id_from_headers(headers: &HeaderMap) -> AppResult<SessionId> {
    let header = headers
        .get("authorization")
        .ok_or_else(AppError::auth_required)?
        .to_str()
        .map_err(|_| AppError::auth_invalid("Authorization header is not valid text"))?;

    let token = header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::auth_invalid("Authorization header must use the Bearer scheme"))?;

    token
        .trim()
        .parse()
        .map_err(|_| AppError::auth_invalid("Malformed session id"))
}
