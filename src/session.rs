// ABOUTME: Server-side sessions holding each logged-in user's page state
// ABOUTME: SessionManager maps bearer ids to per-session async mutexes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthTrack Contributors

//! Session management
//!
//! Each session owns its page controllers. Requests for the same session
//! lock its mutex, so one action completes before the next starts.

use crate::demo;
use crate::errors::{AppError, AppResult};
use crate::logging::AppLogger;
use crate::services::activities::ActivityPage;
use crate::services::goals::GoalsPage;
use crate::services::nutrition::NutritionPage;
use crate::services::profile::ProfileEditor;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use healthtrack_core::models::User;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;
use uuid::Uuid;

/// Opaque session handle returned by register and login
pub type SessionId = Uuid;

/// Shared handle to a session
pub type SharedSession = Arc<Mutex<Session>>;

/// Page state for one logged-in user
#[derive(Debug)]
pub struct Session {
    /// Session handle
    pub id: SessionId,
    /// Name the session logged in with
    pub username: String,
    /// Profile page, absent when no user is registered
    pub profile: Option<ProfileEditor>,
    /// Activity page
    pub activities: ActivityPage,
    /// Nutrition page
    pub nutrition: NutritionPage,
    /// Goals page
    pub goals: GoalsPage,
    /// When the session started
    pub created_at: DateTime<Utc>,
}

impl Session {
    /// Fresh session with empty pages
    #[must_use]
    pub fn new(username: impl Into<String>, user: Option<User>, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            username: username.into(),
            profile: user.map(ProfileEditor::new),
            activities: ActivityPage::default(),
            nutrition: NutritionPage::default(),
            goals: GoalsPage::default(),
            created_at: now,
        }
    }

    /// Fresh session whose pages start with the sample data
    #[must_use]
    pub fn with_demo_data(
        username: impl Into<String>,
        user: Option<User>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            activities: ActivityPage::new(demo::demo_activities()),
            nutrition: NutritionPage::new(demo::demo_nutrition()),
            goals: GoalsPage::new(demo::demo_goals()),
            ..Self::new(username, user, now)
        }
    }

    /// Profile editor, or not-found when no user is registered
    ///
    /// # Errors
    ///
    /// Returns `AppError::ResourceNotFound` when the session has no profile
    pub fn profile_mut(&mut self) -> AppResult<&mut ProfileEditor> {
        self.profile
            .as_mut()
            .ok_or_else(|| AppError::not_found("Registered user"))
    }

    /// Log a mutation of one of this session's pages
    pub fn record_mutation(&self, page: &str, action: &str, entry_id: &str) {
        AppLogger::log_entry_mutation(&self.id.to_string(), page, action, entry_id);
    }
}

/// Registry of live sessions
#[derive(Debug)]
pub struct SessionManager {
    sessions: DashMap<SessionId, SharedSession>,
    seed_demo_data: bool,
}

impl SessionManager {
    /// Create an empty registry
    #[must_use]
    pub fn new(seed_demo_data: bool) -> Self {
        Self {
            sessions: DashMap::new(),
            seed_demo_data,
        }
    }

    /// Start a session and return its id
    pub fn create(&self, username: &str, user: Option<User>, now: DateTime<Utc>) -> SessionId {
        let session = if self.seed_demo_data {
            Session::with_demo_data(username, user, now)
        } else {
            Session::new(username, user, now)
        };
        let id = session.id;
        self.sessions.insert(id, Arc::new(Mutex::new(session)));
        debug!(session.id = %id, "Session created");
        id
    }

    /// Look up a session
    #[must_use]
    pub fn get(&self, id: &SessionId) -> Option<SharedSession> {
        self.sessions.get(id).map(|entry| Arc::clone(entry.value()))
    }

    /// End a session, returning whether it existed
    pub fn remove(&self, id: &SessionId) -> bool {
        let removed = self.sessions.remove(id).is_some();
        if removed {
            debug!(session.id = %id, "Session removed");
        }
        removed
    }

    /// Number of live sessions
    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Whether no sessions are live
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
