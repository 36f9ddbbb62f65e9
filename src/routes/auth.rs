// ABOUTME: Authentication route handlers for registration, login and logout
// ABOUTME: Successful register/login opens a session and returns its bearer id
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthTrack Contributors

use super::json_body;
use crate::errors::AppError;
use crate::resources::ServerResources;
use crate::services::auth::{LoginRequest, RegisterRequest};
use crate::services::profile::{ProfileEditor, ProfileView};
use crate::session::SessionId;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Response to a successful register or login
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionResponse {
    /// Bearer token for subsequent requests
    pub session_id: SessionId,
    /// Whether the submitted credentials matched the stored user
    pub credentials_matched: bool,
    /// Profile of the stored user, if any
    pub profile: Option<ProfileView>,
}

/// Authentication routes
pub struct AuthRoutes;

impl AuthRoutes {
    /// Create all authentication routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/auth/register", post(Self::handle_register))
            .route("/api/auth/login", post(Self::handle_login))
            .route("/api/auth/logout", post(Self::handle_logout))
            .with_state(resources)
    }

    /// Handle user registration
    async fn handle_register(
        State(resources): State<Arc<ServerResources>>,
        payload: Result<Json<RegisterRequest>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let request = json_body(payload)?;
        let now = Utc::now();

        let user = resources.auth.register(request, now).await?;
        let profile = ProfileEditor::new(user.clone()).view(now.date_naive());
        let username = user.username.clone();
        let session_id = resources.sessions.create(&username, Some(user), now);

        let response = SessionResponse {
            session_id,
            credentials_matched: true,
            profile: Some(profile),
        };
        Ok((StatusCode::CREATED, Json(response)).into_response())
    }

    /// Handle user login
    async fn handle_login(
        State(resources): State<Arc<ServerResources>>,
        payload: Result<Json<LoginRequest>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let request = json_body(payload)?;
        let now = Utc::now();

        let outcome = resources.auth.login(&request).await?;
        let profile = outcome
            .user
            .clone()
            .map(|user| ProfileEditor::new(user).view(now.date_naive()));
        let session_id = resources
            .sessions
            .create(&request.username, outcome.user, now);

        let response = SessionResponse {
            session_id,
            credentials_matched: outcome.credentials_matched,
            profile,
        };
        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// Handle logout: end the session and forget the stored user
    async fn handle_logout(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
    ) -> Result<Response, AppError> {
        let (session_id, session) = resources.authenticate(&headers)?;
        let username = session.lock().await.username.clone();

        resources.sessions.remove(&session_id);
        resources.auth.logout(&username).await?;

        Ok((
            StatusCode::OK,
            Json(serde_json::json!({ "logged_out": true })),
        )
            .into_response())
    }
}
