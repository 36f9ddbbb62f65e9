// ABOUTME: End-to-end HTTP tests for every HealthTrack route through the full router
// ABOUTME: Drives register, login, page mutations, profile editing and logout in-process
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthTrack Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;
mod helpers;

use async_trait::async_trait;
use axum::http::StatusCode;
use axum::Router;
use helpers::axum_test::AxumTestRequest;
use healthtrack_server::database::{KeyValueStore, MemoryStore};
use healthtrack_server::errors::{AppError, AppResult};
use healthtrack_server::resources::ServerResources;
use healthtrack_server::server::HealthTrackServer;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Memory store whose writes can be switched off
#[derive(Default)]
struct SwitchableStore {
    inner: MemoryStore,
    fail_writes: AtomicBool,
}

#[async_trait]
impl KeyValueStore for SwitchableStore {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> AppResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(AppError::database("store is offline"));
        }
        self.inner.set(key, value).await
    }

    async fn remove(&self, key: &str) -> AppResult<()> {
        self.inner.remove(key).await
    }
}

fn registration_body() -> Value {
    json!({
        "username": "somchai",
        "password": "correct-horse",
        "confirm_password": "correct-horse",
        "first_name": "Somchai",
        "last_name": "Jaidee",
        "email": "somchai@example.com",
        "phone": "081-234-5678",
        "gender": "male",
        "date_of_birth": "1990-05-15",
        "weight_kg": 70.0,
        "height_cm": 175.0
    })
}

/// Register through the API and return the router with the session id
async fn registered_app(server: &HealthTrackServer) -> (Router, String) {
    let app = server.router();
    let body: Value = AxumTestRequest::post("/api/auth/register")
        .json(&registration_body())
        .send(app.clone())
        .await
        .assert_status(StatusCode::CREATED)
        .json();

    let session_id = body["session_id"].as_str().unwrap().to_owned();
    (app, session_id)
}

#[tokio::test]
async fn test_health_and_ready() {
    let app = common::create_test_server().router();

    let health: Value = AxumTestRequest::get("/health")
        .send(app.clone())
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert_eq!(health["status"], "healthy");

    AxumTestRequest::get("/ready")
        .send(app)
        .await
        .assert_status(StatusCode::OK);
}

#[tokio::test]
async fn test_request_id_is_returned() {
    let app = common::create_test_server().router();
    let response = AxumTestRequest::get("/health").send(app.clone()).await;
    assert!(response.header("x-request-id").is_some());

    let response = AxumTestRequest::get("/health")
        .header("x-request-id", "req-123")
        .send(app)
        .await;
    assert_eq!(response.header("x-request-id"), Some("req-123"));
}

#[tokio::test]
async fn test_register_returns_session_and_profile() {
    let server = common::create_test_server();
    let app = server.router();

    let body: Value = AxumTestRequest::post("/api/auth/register")
        .json(&registration_body())
        .send(app)
        .await
        .assert_status(StatusCode::CREATED)
        .json();

    assert!(body["session_id"].is_string());
    assert_eq!(body["profile"]["full_name"], "Somchai Jaidee");
    assert_eq!(body["profile"]["bmi"]["category"], "normal");
    assert!(body["profile"].get("password_hash").is_none());
    assert_eq!(server.resources().sessions.len(), 1);
}

#[tokio::test]
async fn test_register_password_mismatch() {
    let app = common::create_test_server().router();
    let mut form = registration_body();
    form["confirm_password"] = json!("nope");

    let body: Value = AxumTestRequest::post("/api/auth/register")
        .json(&form)
        .send(app)
        .await
        .assert_status(StatusCode::BAD_REQUEST)
        .json();
    assert_eq!(body["error"]["code"], "INVALID_INPUT");
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let app = common::create_test_server().router();
    let body: Value = AxumTestRequest::post("/api/auth/login")
        .raw_json("{\"username\": ")
        .send(app)
        .await
        .assert_status(StatusCode::BAD_REQUEST)
        .json();
    assert_eq!(body["error"]["code"], "INVALID_INPUT");
}

#[tokio::test]
async fn test_placeholder_login_opens_session() {
    let server = common::create_test_server();
    let (app, _) = registered_app(&server).await;

    let body: Value = AxumTestRequest::post("/api/auth/login")
        .json(&json!({ "username": "whoever", "password": "whatever" }))
        .send(app)
        .await
        .assert_status(StatusCode::OK)
        .json();

    assert_eq!(body["credentials_matched"], false);
    assert_eq!(body["profile"]["username"], "somchai");
}

#[tokio::test]
async fn test_strict_login_rejects_mismatch() {
    let server = HealthTrackServer::new(common::create_test_resources(false, false));
    let (app, _) = registered_app(&server).await;

    AxumTestRequest::post("/api/auth/login")
        .json(&json!({ "username": "somchai", "password": "wrong" }))
        .send(app.clone())
        .await
        .assert_status(StatusCode::UNAUTHORIZED);

    let body: Value = AxumTestRequest::post("/api/auth/login")
        .json(&json!({ "username": "somchai", "password": "correct-horse" }))
        .send(app)
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert_eq!(body["credentials_matched"], true);
}

#[tokio::test]
async fn test_pages_require_session() {
    let app = common::create_test_server().router();

    let body: Value = AxumTestRequest::get("/api/dashboard")
        .send(app.clone())
        .await
        .assert_status(StatusCode::UNAUTHORIZED)
        .json();
    assert_eq!(body["error"]["code"], "AUTH_REQUIRED");

    let body: Value = AxumTestRequest::get("/api/activities")
        .bearer("not-a-uuid")
        .send(app.clone())
        .await
        .assert_status(StatusCode::UNAUTHORIZED)
        .json();
    assert_eq!(body["error"]["code"], "AUTH_INVALID");

    AxumTestRequest::get("/api/goals")
        .bearer(&uuid::Uuid::new_v4().to_string())
        .send(app)
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_activity_routes() {
    let server = common::create_test_server();
    let (app, sid) = registered_app(&server).await;

    let created: Value = AxumTestRequest::post("/api/activities")
        .bearer(&sid)
        .json(&json!({
            "activity_type": "running",
            "distance_km": 5.0,
            "duration_minutes": 27
        }))
        .send(app.clone())
        .await
        .assert_status(StatusCode::CREATED)
        .json();
    assert_eq!(created["activity"]["calories"], 300);
    assert_eq!(created["summary"]["count"], 1);
    let id = created["activity"]["id"].as_str().unwrap().to_owned();

    let list: Value = AxumTestRequest::get("/api/activities")
        .bearer(&sid)
        .send(app.clone())
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert_eq!(list["activities"].as_array().unwrap().len(), 1);
    assert_eq!(list["summary"]["total_calories"], 300);

    let unknown: Value = AxumTestRequest::delete(&format!(
        "/api/activities/{}",
        uuid::Uuid::new_v4()
    ))
    .bearer(&sid)
    .send(app.clone())
    .await
    .assert_status(StatusCode::OK)
    .json();
    assert_eq!(unknown["removed"], false);
    assert_eq!(unknown["activities"].as_array().unwrap().len(), 1);

    let malformed: Value = AxumTestRequest::delete("/api/activities/12345")
        .bearer(&sid)
        .send(app.clone())
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert_eq!(malformed["removed"], false);
    assert_eq!(malformed["activities"].as_array().unwrap().len(), 1);
    assert_eq!(malformed["summary"]["count"], 1);

    let deleted: Value = AxumTestRequest::delete(&format!("/api/activities/{id}"))
        .bearer(&sid)
        .send(app)
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert_eq!(deleted["removed"], true);
    assert_eq!(deleted["summary"]["count"], 0);
}

#[tokio::test]
async fn test_activity_rejects_negative_distance() {
    let server = common::create_test_server();
    let (app, sid) = registered_app(&server).await;

    AxumTestRequest::post("/api/activities")
        .bearer(&sid)
        .json(&json!({
            "activity_type": "walking",
            "distance_km": -2.0,
            "duration_minutes": 10
        }))
        .send(app)
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_activity_catalog_and_estimate() {
    let app = common::create_test_server().router();

    let types: Value = AxumTestRequest::get("/api/activities/types")
        .send(app.clone())
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert_eq!(types["types"].as_array().unwrap().len(), 4);

    let estimate: Value =
        AxumTestRequest::get("/api/activities/estimate?activity_type=swimming&distance_km=2")
            .send(app.clone())
            .await
            .assert_status(StatusCode::OK)
            .json();
    assert_eq!(estimate["calories"], 160);

    AxumTestRequest::get("/api/activities/estimate?activity_type=rowing&distance_km=2")
        .send(app)
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_nutrition_routes() {
    let server = common::create_test_server();
    let (app, sid) = registered_app(&server).await;

    let meal: Value = AxumTestRequest::post("/api/nutrition/meals")
        .bearer(&sid)
        .json(&json!({ "slot": "noon", "food": "Khao man gai", "calories": 600 }))
        .send(app.clone())
        .await
        .assert_status(StatusCode::CREATED)
        .json();
    assert_eq!(meal["summary"]["calories_remaining"], 1400);

    let water: Value = AxumTestRequest::post("/api/nutrition/water")
        .bearer(&sid)
        .json(&json!({ "amount_ml": 2500 }))
        .send(app.clone())
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert_eq!(water["water"]["total_ml"], 2000);
    assert_eq!(water["summary"]["water_goal_reached"], true);

    AxumTestRequest::post("/api/nutrition/water")
        .bearer(&sid)
        .json(&json!({ "amount_ml": 0 }))
        .send(app.clone())
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    let overview: Value = AxumTestRequest::get("/api/nutrition")
        .bearer(&sid)
        .send(app)
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert_eq!(overview["meals"].as_array().unwrap().len(), 1);
    assert_eq!(overview["water"]["total_ml"], 2000);
}

#[tokio::test]
async fn test_goal_routes() {
    let server = common::create_test_server();
    let (app, sid) = registered_app(&server).await;

    let created: Value = AxumTestRequest::post("/api/goals")
        .bearer(&sid)
        .json(&json!({
            "goal_type": "exercise",
            "title": "Weekly workouts",
            "current_value": 4,
            "target_value": 5,
            "unit": "sessions",
            "deadline": "2099-12-31"
        }))
        .send(app.clone())
        .await
        .assert_status(StatusCode::CREATED)
        .json();
    assert_eq!(created["goal"]["title"], "Weekly workouts");
    assert_eq!(created["goal"]["status"]["tier"], "near_completion");
    assert_eq!(created["goal"]["status"]["overdue"], false);

    AxumTestRequest::post("/api/goals")
        .bearer(&sid)
        .json(&json!({
            "goal_type": "weight",
            "title": "Zero",
            "current_value": 1,
            "target_value": 0,
            "unit": "kg",
            "deadline": "2099-12-31"
        }))
        .send(app.clone())
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    let list: Value = AxumTestRequest::get("/api/goals")
        .bearer(&sid)
        .send(app)
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert_eq!(list["goals"].as_array().unwrap().len(), 1);
    assert_eq!(list["summary"]["average_progress"], 80);
}

#[tokio::test]
async fn test_profile_edit_flow() {
    let server = common::create_test_server();
    let (app, sid) = registered_app(&server).await;

    // Updates outside edit mode are refused
    let locked: Value = AxumTestRequest::patch("/api/profile")
        .bearer(&sid)
        .json(&json!({ "weight_kg": 95.0 }))
        .send(app.clone())
        .await
        .assert_status(StatusCode::CONFLICT)
        .json();
    assert_eq!(locked["error"]["code"], "RESOURCE_LOCKED");

    AxumTestRequest::post("/api/profile/edit")
        .bearer(&sid)
        .send(app.clone())
        .await
        .assert_status(StatusCode::OK);

    let pending: Value = AxumTestRequest::patch("/api/profile")
        .bearer(&sid)
        .json(&json!({ "weight_kg": 95.0 }))
        .send(app.clone())
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert_eq!(pending["editing"], true);
    assert_eq!(pending["bmi"]["category"], "obese");

    let saved: Value = AxumTestRequest::post("/api/profile/save")
        .bearer(&sid)
        .send(app.clone())
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert_eq!(saved["editing"], false);

    // Saved changes reach the store
    let stored = server
        .resources()
        .auth
        .users()
        .load()
        .await
        .unwrap()
        .unwrap();
    assert!((stored.weight_kg - 95.0).abs() < f64::EPSILON);

    AxumTestRequest::post("/api/profile/edit")
        .bearer(&sid)
        .send(app.clone())
        .await
        .assert_status(StatusCode::OK);
    AxumTestRequest::patch("/api/profile")
        .bearer(&sid)
        .json(&json!({ "first_name": "Changed" }))
        .send(app.clone())
        .await
        .assert_status(StatusCode::OK);

    let cancelled: Value = AxumTestRequest::post("/api/profile/cancel")
        .bearer(&sid)
        .send(app)
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert_eq!(cancelled["first_name"], "Somchai");
}

#[tokio::test]
async fn test_profile_missing_without_registration() {
    let app = common::create_test_server().router();

    let login: Value = AxumTestRequest::post("/api/auth/login")
        .json(&json!({ "username": "guest", "password": "guest" }))
        .send(app.clone())
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert!(login["profile"].is_null());
    let sid = login["session_id"].as_str().unwrap().to_owned();

    AxumTestRequest::get("/api/profile")
        .bearer(&sid)
        .send(app.clone())
        .await
        .assert_status(StatusCode::NOT_FOUND);

    let dashboard: Value = AxumTestRequest::get("/api/dashboard")
        .bearer(&sid)
        .send(app)
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert_eq!(dashboard["display_name"], "guest");
    assert!(dashboard["bmi"].is_null());
}

#[tokio::test]
async fn test_demo_data_dashboard() {
    let server = HealthTrackServer::new(common::create_test_resources(true, true));
    let (app, sid) = registered_app(&server).await;

    let dashboard: Value = AxumTestRequest::get("/api/dashboard")
        .bearer(&sid)
        .send(app)
        .await
        .assert_status(StatusCode::OK)
        .json();

    assert_eq!(dashboard["display_name"], "Somchai Jaidee");
    assert_eq!(dashboard["activity"]["count"], 3);
    assert_eq!(dashboard["recent_activities"].as_array().unwrap().len(), 3);
    assert_eq!(dashboard["nutrition"]["total_calories"], 1350);
    assert_eq!(dashboard["goals"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_logout_ends_session_and_clears_user() {
    let server = common::create_test_server();
    let (app, sid) = registered_app(&server).await;

    let body: Value = AxumTestRequest::post("/api/auth/logout")
        .bearer(&sid)
        .send(app.clone())
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert_eq!(body["logged_out"], true);

    assert!(server.resources().sessions.is_empty());
    assert!(server
        .resources()
        .auth
        .users()
        .load()
        .await
        .unwrap()
        .is_none());

    AxumTestRequest::get("/api/dashboard")
        .bearer(&sid)
        .send(app)
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_failed_profile_save_stays_in_edit_mode() {
    common::init_test_logging();
    let store = Arc::new(SwitchableStore::default());
    let shared: Arc<dyn KeyValueStore> = store.clone();
    let resources = ServerResources::new(shared, Arc::new(common::test_config(true, false)));
    let server = HealthTrackServer::new(Arc::new(resources));
    let (app, sid) = registered_app(&server).await;

    AxumTestRequest::post("/api/profile/edit")
        .bearer(&sid)
        .send(app.clone())
        .await
        .assert_status(StatusCode::OK);
    AxumTestRequest::patch("/api/profile")
        .bearer(&sid)
        .json(&json!({ "weight_kg": 90.0 }))
        .send(app.clone())
        .await
        .assert_status(StatusCode::OK);

    store.fail_writes.store(true, Ordering::SeqCst);
    let failed: Value = AxumTestRequest::post("/api/profile/save")
        .bearer(&sid)
        .send(app.clone())
        .await
        .assert_status(StatusCode::INTERNAL_SERVER_ERROR)
        .json();
    assert_eq!(failed["error"]["code"], "DATABASE_ERROR");

    let profile: Value = AxumTestRequest::get("/api/profile")
        .bearer(&sid)
        .send(app.clone())
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert_eq!(profile["editing"], true);
    assert_eq!(profile["weight_kg"], 90.0);

    let cancelled: Value = AxumTestRequest::post("/api/profile/cancel")
        .bearer(&sid)
        .send(app)
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert_eq!(cancelled["editing"], false);
    assert_eq!(cancelled["weight_kg"], 70.0);

    let stored = server
        .resources()
        .auth
        .users()
        .load()
        .await
        .unwrap()
        .unwrap();
    assert!((stored.weight_kg - 70.0).abs() < f64::EPSILON);
}

#[tokio::test]
async fn test_profile_save_does_not_restore_logged_out_user() {
    let server = common::create_test_server();
    let (app, alice) = registered_app(&server).await;

    let mut bob_form = registration_body();
    bob_form["username"] = json!("bob");
    let bob: Value = AxumTestRequest::post("/api/auth/register")
        .json(&bob_form)
        .send(app.clone())
        .await
        .assert_status(StatusCode::CREATED)
        .json();
    let bob = bob["session_id"].as_str().unwrap().to_owned();

    AxumTestRequest::post("/api/auth/logout")
        .bearer(&bob)
        .send(app.clone())
        .await
        .assert_status(StatusCode::OK);

    AxumTestRequest::post("/api/profile/edit")
        .bearer(&alice)
        .send(app.clone())
        .await
        .assert_status(StatusCode::OK);
    let refused: Value = AxumTestRequest::post("/api/profile/save")
        .bearer(&alice)
        .send(app)
        .await
        .assert_status(StatusCode::NOT_FOUND)
        .json();
    assert_eq!(refused["error"]["code"], "RESOURCE_NOT_FOUND");

    assert!(server
        .resources()
        .auth
        .users()
        .load()
        .await
        .unwrap()
        .is_none());
}
