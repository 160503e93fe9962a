// ABOUTME: HTTP integration tests for the keyword-matched ocean assistant
// ABOUTME: Topic detection, fallback replies and empty-message validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 OceanSafe

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;
mod helpers;

use helpers::axum_test::AxumTestRequest;
use oceansafe_server::server::build_router;
use serde_json::{json, Value};

#[tokio::test]
async fn test_assistant_matches_topic() {
    let app = build_router(common::create_test_resources().await);

    let response = AxumTestRequest::post("/api/assistant")
        .json(&json!({"message": "How is the SURF looking today?"}))
        .send(app)
        .await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(body["topic"], "waves");
    assert!(!body["response"].as_str().unwrap().is_empty());
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_assistant_accepts_context() {
    let app = build_router(common::create_test_resources().await);

    let response = AxumTestRequest::post("/api/assistant")
        .json(&json!({
            "message": "Is it safe to go out?",
            "context": {"activity": "kayaking", "location": "Monterey"}
        }))
        .send(app)
        .await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(body["topic"], "safety");
}

#[tokio::test]
async fn test_assistant_rejects_blank_message() {
    let app = build_router(common::create_test_resources().await);

    let response = AxumTestRequest::post("/api/assistant")
        .json(&json!({"message": "   "}))
        .send(app)
        .await;

    assert_eq!(response.status(), 400);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "MISSING_REQUIRED_FIELD");
    assert_eq!(body["error"]["details"]["field"], "message");
}
