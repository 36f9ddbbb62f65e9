// ABOUTME: Route module organization for HealthTrack HTTP endpoints
// ABOUTME: One router per page plus health checks, with shared request-body helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthTrack Contributors

//! Route module for the HealthTrack server
//!
//! Each domain module contains route definitions and thin handlers that
//! delegate to the page controllers in [`crate::services`].

/// Activity log routes
pub mod activities;
/// Registration, login and logout routes
pub mod auth;
/// Dashboard overview route
pub mod dashboard;
/// Goal tracker routes
pub mod goals;
/// Health check and readiness routes
pub mod health;
/// Meal and water routes
pub mod nutrition;
/// Profile and edit-mode routes
pub mod profile;

pub use activities::ActivityRoutes;
pub use auth::AuthRoutes;
pub use dashboard::DashboardRoutes;
pub use goals::GoalRoutes;
pub use health::HealthRoutes;
pub use nutrition::NutritionRoutes;
pub use profile::ProfileRoutes;

use crate::errors::{AppError, AppResult};
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::Query;
use axum::Json;

/// Unwrap a JSON body, turning extractor rejections into `InvalidInput`
///
/// # Errors
///
/// Returns `AppError::InvalidInput` describing why the body was rejected
pub fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> AppResult<T> {
    payload
        .map(|Json(value)| value)
        .map_err(|rejection| AppError::invalid_input(rejection.body_text()))
}

/// Unwrap query parameters, turning extractor rejections into `InvalidInput`
///
/// # Errors
///
/// Returns `AppError::InvalidInput` describing why the query was rejected
pub fn query_params<T>(params: Result<Query<T>, QueryRejection>) -> AppResult<T> {
    params
        .map(|Query(value)| value)
        .map_err(|rejection| AppError::invalid_input(rejection.body_text()))
}
