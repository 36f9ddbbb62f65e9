// ABOUTME: HTTP middleware for request tracing and cross-origin access
// ABOUTME: Provides span creation per request and the CORS layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthTrack Contributors

pub mod cors;
pub mod tracing;

// CORS configuration
pub use cors::setup_cors;

// Request tracing
pub use tracing::{create_request_span, REQUEST_ID_HEADER};
