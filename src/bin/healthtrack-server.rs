// ABOUTME: HealthTrack server binary entry point
// ABOUTME: Loads configuration, opens the user store and serves the HTTP API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthTrack Contributors

//! # HealthTrack Server Binary
//!
//! Starts the HealthTrack HTTP API backed by a `SQLite` user store.

use anyhow::Result;
use clap::Parser;
use healthtrack_server::{
    config::ServerConfig, database::Database, logging, resources::ServerResources,
    server::HealthTrackServer,
};
use std::sync::Arc;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "healthtrack-server")]
#[command(about = "HealthTrack - personal fitness tracking API")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Seed new sessions with demo activities, meals and goals
    #[arg(long)]
    demo_data: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    logging::init_from_env()?;

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if args.demo_data {
        config.app_behavior.seed_demo_data = true;
    }

    info!("Starting HealthTrack server");
    info!("{}", config.summary());

    let database = Database::new(&config.database.url).await?;
    info!("Database initialized: {}", config.database.url);

    let port = config.http_port;
    let resources = Arc::new(ServerResources::new(Arc::new(database), Arc::new(config)));
    let server = HealthTrackServer::new(resources);

    display_available_endpoints(port);

    if let Err(e) = server.run(port).await {
        error!("Server error: {}", e);
        return Err(e);
    }

    Ok(())
}

/// Log every available API endpoint
#[allow(clippy::cognitive_complexity)]
fn display_available_endpoints(port: u16) {
    let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_owned());

    info!("=== Available API Endpoints ===");
    info!("Health:");
    info!("   Liveness:          GET    http://{host}:{port}/health");
    info!("   Readiness:         GET    http://{host}:{port}/ready");
    info!("Authentication:");
    info!("   Register:          POST   http://{host}:{port}/api/auth/register");
    info!("   Login:             POST   http://{host}:{port}/api/auth/login");
    info!("   Logout:            POST   http://{host}:{port}/api/auth/logout");
    info!("Profile:");
    info!("   View:              GET    http://{host}:{port}/api/profile");
    info!("   Update:            PATCH  http://{host}:{port}/api/profile");
    info!("   Edit/Save/Cancel:  POST   http://{host}:{port}/api/profile/{{edit,save,cancel}}");
    info!("Activities:");
    info!("   List/Add:          GET/POST http://{host}:{port}/api/activities");
    info!("   Delete:            DELETE http://{host}:{port}/api/activities/{{id}}");
    info!("   Types:             GET    http://{host}:{port}/api/activities/types");
    info!("   Estimate:          GET    http://{host}:{port}/api/activities/estimate");
    info!("Nutrition:");
    info!("   Overview:          GET    http://{host}:{port}/api/nutrition");
    info!("   Add Meal:          POST   http://{host}:{port}/api/nutrition/meals");
    info!("   Add Water:         POST   http://{host}:{port}/api/nutrition/water");
    info!("Goals:");
    info!("   List/Create:       GET/POST http://{host}:{port}/api/goals");
    info!("Dashboard:");
    info!("   Overview:          GET    http://{host}:{port}/api/dashboard");
    info!("=== End of Endpoint List ===");
}
