// ABOUTME: HTTP integration tests for liveness and readiness routes
// ABOUTME: Exercises the full router, including request id and CORS layers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 OceanSafe

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;
mod helpers;

use helpers::axum_test::AxumTestRequest;
use oceansafe_server::server::build_router;
use serde_json::Value;

// ============================================================================
// GET /health
// ============================================================================

#[tokio::test]
async fn test_health_endpoint_success() {
    let app = build_router(common::create_test_resources().await);

    let response = AxumTestRequest::get("/health").send(app).await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_health_sets_request_id() {
    let app = build_router(common::create_test_resources().await);

    let response = AxumTestRequest::get("/health").send(app).await;

    let request_id = response.header("x-request-id").expect("request id header");
    assert!(uuid::Uuid::parse_str(&request_id).is_ok());
}

#[tokio::test]
async fn test_health_propagates_caller_request_id() {
    let app = build_router(common::create_test_resources().await);

    let response = AxumTestRequest::get("/health")
        .header("x-request-id", "trace-me-123")
        .send(app)
        .await;

    assert_eq!(response.header("x-request-id").as_deref(), Some("trace-me-123"));
}

// ============================================================================
// GET /ready
// ============================================================================

#[tokio::test]
async fn test_ready_with_live_database() {
    let app = build_router(common::create_test_resources().await);

    let response = AxumTestRequest::get("/ready").send(app).await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(body["status"], "ready");
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let app = build_router(common::create_test_resources().await);

    let response = AxumTestRequest::get("/api/nowhere").send(app).await;

    assert_eq!(response.status(), 404);
}
