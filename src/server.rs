// ABOUTME: HTTP server assembly and lifecycle for the HealthTrack API
// ABOUTME: Merges every page router, applies request-id, tracing and CORS layers, and serves
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthTrack Contributors

//! # HealthTrack Server
//!
//! Owns the shared [`ServerResources`] and turns them into a single axum
//! router. [`HealthTrackServer::router`] is what integration tests drive;
//! [`HealthTrackServer::run`] binds a port and serves until Ctrl-C.

use crate::middleware::{create_request_span, setup_cors};
use crate::resources::ServerResources;
use crate::routes::{
    ActivityRoutes, AuthRoutes, DashboardRoutes, GoalRoutes, HealthRoutes, NutritionRoutes,
    ProfileRoutes,
};
use anyhow::{Context, Result};
use axum::{body::Body, Router};
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

/// HealthTrack HTTP server
pub struct HealthTrackServer {
    resources: Arc<ServerResources>,
}

impl HealthTrackServer {
    /// Create a server over shared resources
    #[must_use]
    pub const fn new(resources: Arc<ServerResources>) -> Self {
        Self { resources }
    }

    /// Shared resources backing this server
    #[must_use]
    pub const fn resources(&self) -> &Arc<ServerResources> {
        &self.resources
    }

    /// Build the full application router with middleware applied
    #[must_use]
    pub fn router(&self) -> Router {
        let resources = &self.resources;

        // Layers wrap outward: the request id is set before the trace span reads it
        Router::new()
            .merge(HealthRoutes::routes(Arc::clone(resources)))
            .merge(AuthRoutes::routes(Arc::clone(resources)))
            .merge(ProfileRoutes::routes(Arc::clone(resources)))
            .merge(ActivityRoutes::routes(Arc::clone(resources)))
            .merge(NutritionRoutes::routes(Arc::clone(resources)))
            .merge(GoalRoutes::routes(Arc::clone(resources)))
            .merge(DashboardRoutes::routes(Arc::clone(resources)))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http().make_span_with(create_request_span::<Body>))
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
            .layer(setup_cors(&resources.config))
    }

    /// Bind the HTTP port and serve until a shutdown signal arrives
    ///
    /// # Errors
    ///
    /// Returns an error if the port cannot be bound or the server fails
    pub async fn run(self, port: u16) -> Result<()> {
        let addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, port));
        let listener = TcpListener::bind(addr)
            .await
            .with_context(|| format!("Failed to bind HTTP port {port}"))?;

        info!("HTTP server listening on {}", addr);

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("HTTP server error")?;

        info!("HTTP server stopped");
        Ok(())
    }
}

/// Resolve when the process receives Ctrl-C
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received, draining connections");
}
