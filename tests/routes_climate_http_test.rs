// ABOUTME: HTTP integration tests for hot and cold day probabilities
// ABOUTME: Uses a stub climate source; covers defaults, bad ranges and source outages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 OceanSafe

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;
mod helpers;

use common::{StubClimate, TestCollaborators};
use helpers::axum_test::AxumTestRequest;
use oceansafe_server::server::build_router;
use serde_json::Value;

#[tokio::test]
async fn test_probabilities_from_series() {
    let resources = common::create_test_resources_with(TestCollaborators {
        climate: StubClimate {
            temperatures: Some(vec![33.0, 34.5, 40.0, 20.0, 21.0, 22.0, 4.0, 25.0, 32.0, 18.0]),
        },
        ..TestCollaborators::default()
    })
    .await;

    let response = AxumTestRequest::get(
        "/api/climate/probabilities?latitude=25.76&longitude=-80.19&start=20240101&end=20240110",
    )
    .send(build_router(resources))
    .await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(body["start"], "2024-01-01");
    assert_eq!(body["end"], "2024-01-10");
    assert_eq!(body["summary"]["status"], "ok");
    assert_eq!(body["summary"]["hot"], 30);
    assert_eq!(body["summary"]["cold"], 10);
    assert_eq!(body["summary"]["days"], 10);
}

#[tokio::test]
async fn test_source_outage_reports_insufficient_data() {
    let app = build_router(common::create_test_resources().await);

    let response = AxumTestRequest::get(
        "/api/climate/probabilities?latitude=25.76&longitude=-80.19&start=20240101&end=20240131",
    )
    .send(app)
    .await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(body["summary"]["status"], "insufficient_data");
}

#[tokio::test]
async fn test_probabilities_require_coordinates() {
    let app = build_router(common::create_test_resources().await);

    let response = AxumTestRequest::get("/api/climate/probabilities").send(app).await;

    assert_eq!(response.status(), 400);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "MISSING_REQUIRED_FIELD");
}

#[tokio::test]
async fn test_probabilities_reject_reversed_range() {
    let app = build_router(common::create_test_resources().await);

    let response = AxumTestRequest::get(
        "/api/climate/probabilities?latitude=1&longitude=1&start=20240201&end=20240101",
    )
    .send(app)
    .await;

    assert_eq!(response.status(), 400);
}

#[tokio::test]
async fn test_probabilities_reject_malformed_date() {
    let app = build_router(common::create_test_resources().await);

    let response = AxumTestRequest::get(
        "/api/climate/probabilities?latitude=1&longitude=1&start=2024-01-01",
    )
    .send(app)
    .await;

    assert_eq!(response.status(), 400);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "INVALID_FORMAT");
}
