// ABOUTME: Nutrition route handlers for meals and water intake
// ABOUTME: Returns the meal list with the calorie and water summary on every call
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthTrack Contributors

use super::json_body;
use crate::errors::AppError;
use crate::resources::ServerResources;
use crate::services::nutrition::NewMeal;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use serde::Deserialize;
use std::sync::Arc;

/// Water form
#[derive(Debug, Deserialize)]
struct WaterRequest {
    amount_ml: u32,
}

/// Nutrition routes
pub struct NutritionRoutes;

impl NutritionRoutes {
    /// Create all nutrition routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/nutrition", get(Self::handle_overview))
            .route("/api/nutrition/meals", post(Self::handle_add_meal))
            .route("/api/nutrition/water", post(Self::handle_add_water))
            .with_state(resources)
    }

    /// Meals, water and summary
    async fn handle_overview(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
    ) -> Result<Response, AppError> {
        let (_, session) = resources.authenticate(&headers)?;
        let session = session.lock().await;
        let log = session.nutrition.log();

        let response = serde_json::json!({
            "meals": log.meals(),
            "water": log.water(),
            "summary": log.summary(),
        });
        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// Log a meal
    async fn handle_add_meal(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        payload: Result<Json<NewMeal>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let (_, session) = resources.authenticate(&headers)?;
        let meal = json_body(payload)?;
        let mut session = session.lock().await;

        let entry = session.nutrition.add_meal(meal, Utc::now())?;
        session.record_mutation("nutrition", "add_meal", &entry.id.to_string());

        let response = serde_json::json!({
            "meal": entry,
            "summary": session.nutrition.log().summary(),
        });
        Ok((StatusCode::CREATED, Json(response)).into_response())
    }

    /// Record water intake
    async fn handle_add_water(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        payload: Result<Json<WaterRequest>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let (_, session) = resources.authenticate(&headers)?;
        let request = json_body(payload)?;
        let mut session = session.lock().await;

        let water = session.nutrition.add_water(request.amount_ml)?;
        session.record_mutation("nutrition", "add_water", &request.amount_ml.to_string());

        let response = serde_json::json!({
            "water": water,
            "summary": session.nutrition.log().summary(),
        });
        Ok((StatusCode::OK, Json(response)).into_response())
    }
}
