// ABOUTME: Request tracing helpers for correlation and structured logging
// ABOUTME: Creates one span per HTTP request carrying method, path and request id
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthTrack Contributors

use axum::http::Request;
use tracing::Span;

/// Header carrying the per-request correlation id
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Create the span for an incoming HTTP request
///
/// Used as the `make_span_with` hook of the HTTP trace layer. The request id
/// is read from [`REQUEST_ID_HEADER`], which the request-id layer sets before
/// this runs.
pub fn create_request_span<B>(request: &Request<B>) -> Span {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("unknown");

    tracing::info_span!(
        "http_request",
        method = %request.method(),
        path = %request.uri().path(),
        request_id = %request_id,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_created_without_request_id() {
        let request = Request::builder()
            .uri("/api/activities")
            .body(())
            .unwrap();
        let _span = create_request_span(&request);
    }
}
