// ABOUTME: Goal tracker route handlers for listing and creating goals
// ABOUTME: Each goal is returned with progress, days left and tier computed at request time
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthTrack Contributors

use super::json_body;
use crate::errors::AppError;
use crate::resources::ServerResources;
use crate::services::goals::NewGoal;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use chrono::Utc;
use std::sync::Arc;

/// Goal routes
pub struct GoalRoutes;

impl GoalRoutes {
    /// Create all goal routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/goals", get(Self::handle_list).post(Self::handle_create))
            .with_state(resources)
    }

    /// List goals with status
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
    ) -> Result<Response, AppError> {
        let (_, session) = resources.authenticate(&headers)?;
        let session = session.lock().await;
        let list = session.goals.list();

        let response = serde_json::json!({
            "goals": list.views(Utc::now()),
            "summary": list.summary(),
        });
        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// Create a goal
    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        payload: Result<Json<NewGoal>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let (_, session) = resources.authenticate(&headers)?;
        let goal = json_body(payload)?;
        let mut session = session.lock().await;

        let view = session.goals.create_goal(goal, Utc::now())?;
        session.record_mutation("goals", "create", &view.goal.id.to_string());

        let response = serde_json::json!({
            "goal": view,
            "summary": session.goals.list().summary(),
        });
        Ok((StatusCode::CREATED, Json(response)).into_response())
    }
}
