// ABOUTME: Activity log route handlers for listing, adding and deleting entries
// ABOUTME: Also serves the activity type catalog and standalone calorie estimates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthTrack Contributors

use super::{json_body, query_params};
use crate::errors::AppError;
use crate::resources::ServerResources;
use crate::services::activities::{activity_catalog, ActivityLog, NewActivity};
use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{delete, get},
    Json, Router,
};
use chrono::Utc;
use healthtrack_core::models::{ActivityEntry, ActivityType};
use healthtrack_intelligence::{estimate_calories, ActivitySummary};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

/// Activity list with its totals
#[derive(Debug, Serialize, Deserialize)]
pub struct ActivityListResponse {
    /// Entries, newest first
    pub activities: Vec<ActivityEntry>,
    /// Totals over the list
    pub summary: ActivitySummary,
}

impl From<&ActivityLog> for ActivityListResponse {
    fn from(log: &ActivityLog) -> Self {
        Self {
            activities: log.entries().to_vec(),
            summary: log.summary(),
        }
    }
}

/// Query for a calorie estimate
#[derive(Debug, Deserialize)]
struct EstimateQuery {
    activity_type: ActivityType,
    distance_km: f64,
}

/// Activity routes
pub struct ActivityRoutes;

impl ActivityRoutes {
    /// Create all activity routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/api/activities",
                get(Self::handle_list).post(Self::handle_add),
            )
            .route("/api/activities/types", get(Self::handle_types))
            .route("/api/activities/estimate", get(Self::handle_estimate))
            .route("/api/activities/:id", delete(Self::handle_delete))
            .with_state(resources)
    }

    /// List activities
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
    ) -> Result<Response, AppError> {
        let (_, session) = resources.authenticate(&headers)?;
        let session = session.lock().await;

        let response = ActivityListResponse::from(session.activities.log());
        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// Add an activity
    async fn handle_add(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        payload: Result<Json<NewActivity>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let (_, session) = resources.authenticate(&headers)?;
        let activity = json_body(payload)?;
        let mut session = session.lock().await;

        let entry = session.activities.add_activity(activity, Utc::now())?;
        session.record_mutation("activities", "add", &entry.id.to_string());

        let response = serde_json::json!({
            "activity": entry,
            "summary": session.activities.log().summary(),
        });
        Ok((StatusCode::CREATED, Json(response)).into_response())
    }

    /// Delete an activity; unknown ids leave the list unchanged
    async fn handle_delete(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Path(id): Path<String>,
    ) -> Result<Response, AppError> {
        let (_, session) = resources.authenticate(&headers)?;
        let mut session = session.lock().await;

        // An id that is not a UUID cannot match any entry
        let removed = id
            .parse::<Uuid>()
            .is_ok_and(|id| session.activities.delete_activity(id));
        if removed {
            session.record_mutation("activities", "delete", &id);
        }

        let list = ActivityListResponse::from(session.activities.log());
        let response = serde_json::json!({
            "removed": removed,
            "activities": list.activities,
            "summary": list.summary,
        });
        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// List activity types with their burn rates
    async fn handle_types() -> Json<serde_json::Value> {
        Json(serde_json::json!({ "types": activity_catalog() }))
    }

    /// Estimate calories for a type and distance
    async fn handle_estimate(
        params: Result<Query<EstimateQuery>, QueryRejection>,
    ) -> Result<Response, AppError> {
        let query = query_params(params)?;
        let calories = estimate_calories(query.activity_type, query.distance_km)?;

        let response = serde_json::json!({
            "activity_type": query.activity_type,
            "distance_km": query.distance_km,
            "calories": calories,
        });
        Ok((StatusCode::OK, Json(response)).into_response())
    }
}
