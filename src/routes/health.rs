// ABOUTME: Health check route handlers for service monitoring
// ABOUTME: Liveness reports the process is up; readiness probes the key-value store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthTrack Contributors

//! Health check routes for service monitoring

use crate::constants::storage::CURRENT_USER_KEY;
use crate::resources::ServerResources;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use std::sync::Arc;

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create all health check routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        async fn health_handler() -> Json<serde_json::Value> {
            Json(serde_json::json!({
                "status": "healthy",
                "service": crate::constants::service_names::HEALTHTRACK_SERVER,
                "version": env!("CARGO_PKG_VERSION"),
                "timestamp": chrono::Utc::now().to_rfc3339()
            }))
        }

        async fn ready_handler(
            State(resources): State<Arc<ServerResources>>,
        ) -> (StatusCode, Json<serde_json::Value>) {
            let storage_ok = resources.store.get(CURRENT_USER_KEY).await.is_ok();
            let status = if storage_ok {
                StatusCode::OK
            } else {
                StatusCode::SERVICE_UNAVAILABLE
            };

            (
                status,
                Json(serde_json::json!({
                    "status": if storage_ok { "ready" } else { "unavailable" },
                    "storage": storage_ok,
                    "sessions": resources.sessions.len(),
                    "timestamp": chrono::Utc::now().to_rfc3339()
                })),
            )
        }

        Router::new()
            .route("/health", get(health_handler))
            .route("/ready", get(ready_handler))
            .with_state(resources)
    }
}
