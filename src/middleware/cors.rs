// ABOUTME: CORS middleware configuration for the HealthTrack HTTP API
// ABOUTME: Builds a tower-http CorsLayer from the configured origin list
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthTrack Contributors

use crate::config::ServerConfig;
use http::{header::HeaderName, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Configure CORS for browser clients
///
/// Origins come from `CORS_ORIGINS`. A lone `*` or an empty list allows any
/// origin; otherwise only the listed origins are accepted and entries that are
/// not valid header values are skipped.
///
/// ```bash
/// export CORS_ORIGINS="http://localhost:5173,https://healthtrack.example.com"
/// ```
pub fn setup_cors(config: &ServerConfig) -> CorsLayer {
    let origins = &config.app_behavior.cors_origins;
    let allow_origin = if origins.is_empty() || origins.iter().any(|o| o == "*") {
        AllowOrigin::any()
    } else {
        let parsed: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|origin| HeaderValue::from_str(origin).ok())
            .collect();
        AllowOrigin::list(parsed)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_headers([
            HeaderName::from_static("content-type"),
            HeaderName::from_static("authorization"),
            HeaderName::from_static("accept"),
            HeaderName::from_static("origin"),
            HeaderName::from_static("x-request-id"),
        ])
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
}
