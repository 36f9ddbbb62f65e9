// ABOUTME: Profile route handlers for viewing and editing the registered user
// ABOUTME: Edits are accepted only in edit mode; save persists, cancel reverts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthTrack Contributors

use super::json_body;
use crate::errors::AppError;
use crate::resources::ServerResources;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use healthtrack_core::models::ProfileUpdate;
use std::sync::Arc;

/// Profile routes
pub struct ProfileRoutes;

impl ProfileRoutes {
    /// Create all profile routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/api/profile",
                get(Self::handle_get).patch(Self::handle_update),
            )
            .route("/api/profile/edit", post(Self::handle_begin_edit))
            .route("/api/profile/save", post(Self::handle_save))
            .route("/api/profile/cancel", post(Self::handle_cancel))
            .with_state(resources)
    }

    /// Current profile with BMI
    async fn handle_get(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
    ) -> Result<Response, AppError> {
        let (_, session) = resources.authenticate(&headers)?;
        let mut session = session.lock().await;

        let view = session.profile_mut()?.view(Utc::now().date_naive());
        Ok((StatusCode::OK, Json(view)).into_response())
    }

    /// Enter edit mode
    async fn handle_begin_edit(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
    ) -> Result<Response, AppError> {
        let (_, session) = resources.authenticate(&headers)?;
        let mut session = session.lock().await;

        let profile = session.profile_mut()?;
        profile.begin_edit();
        let view = profile.view(Utc::now().date_naive());
        Ok((StatusCode::OK, Json(view)).into_response())
    }

    /// Apply pending field changes
    async fn handle_update(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        payload: Result<Json<ProfileUpdate>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let (_, session) = resources.authenticate(&headers)?;
        let update = json_body(payload)?;
        let mut session = session.lock().await;

        let profile = session.profile_mut()?;
        profile.update(&update)?;
        let view = profile.view(Utc::now().date_naive());
        Ok((StatusCode::OK, Json(view)).into_response())
    }

    /// Leave edit mode and persist the record
    async fn handle_save(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
    ) -> Result<Response, AppError> {
        let (_, session) = resources.authenticate(&headers)?;
        let mut session = session.lock().await;

        let profile = session.profile_mut()?;
        let user = profile.pending()?.clone();
        // Edit mode is left only once the record is stored
        resources.auth.save_profile(&user).await?;
        profile.save()?;
        let view = profile.view(Utc::now().date_naive());

        session.record_mutation("profile", "save", &user.id.to_string());
        Ok((StatusCode::OK, Json(view)).into_response())
    }

    /// Leave edit mode discarding changes
    async fn handle_cancel(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
    ) -> Result<Response, AppError> {
        let (_, session) = resources.authenticate(&headers)?;
        let mut session = session.lock().await;

        let profile = session.profile_mut()?;
        profile.cancel();
        let view = profile.view(Utc::now().date_naive());
        Ok((StatusCode::OK, Json(view)).into_response())
    }
}
