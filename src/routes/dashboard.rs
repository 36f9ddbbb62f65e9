// ABOUTME: Dashboard route handler returning the session overview
// ABOUTME: Read-only aggregation of activity, nutrition, goal and BMI figures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthTrack Contributors

use crate::errors::AppError;
use crate::resources::ServerResources;
use crate::services::dashboard::DashboardOverview;
use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use chrono::Utc;
use std::sync::Arc;

/// Dashboard routes
pub struct DashboardRoutes;

impl DashboardRoutes {
    /// Create all dashboard routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/dashboard", get(Self::handle_overview))
            .with_state(resources)
    }

    /// Handle dashboard overview request
    async fn handle_overview(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
    ) -> Result<Response, AppError> {
        let (_, session) = resources.authenticate(&headers)?;
        let session = session.lock().await;

        let overview = DashboardOverview::build(&session, Utc::now());
        Ok((StatusCode::OK, Json(overview)).into_response())
    }
}
