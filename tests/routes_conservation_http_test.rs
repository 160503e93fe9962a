// ABOUTME: HTTP integration tests for the species catalogue and breeding-season alerts
// ABOUTME: Checks alert generation per month, deduplication, read and dismiss
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 OceanSafe

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;
mod helpers;

use helpers::axum_test::AxumTestRequest;
use oceansafe_server::database::SEED_SPECIES;
use oceansafe_server::server::build_router;
use serde_json::Value;

#[tokio::test]
async fn test_species_catalogue_is_seeded() {
    let app = build_router(common::create_test_resources().await);

    let response = AxumTestRequest::get("/api/conservation/species").send(app).await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    let species = body["species"].as_array().unwrap();
    assert_eq!(species.len(), SEED_SPECIES.len());
    let names: Vec<&str> = species.iter().map(|s| s["name"].as_str().unwrap()).collect();
    let mut sorted = names.clone();
    sorted.sort_unstable();
    assert_eq!(names, sorted);
}

#[tokio::test]
async fn test_alerts_require_auth() {
    let app = build_router(common::create_test_resources().await);

    let response = AxumTestRequest::get("/api/conservation/alerts").send(app).await;

    assert_eq!(response.status(), 401);
}

#[tokio::test]
async fn test_check_creates_alerts_once_per_species() {
    let resources = common::create_test_resources().await;
    let auth = common::register_user(&resources, "reef@example.com").await;

    let first: Value = AxumTestRequest::post("/api/conservation/alerts/check?month=1")
        .bearer(&auth.token)
        .send(build_router(resources.clone()))
        .await
        .json();
    assert_eq!(first["month"], 1);
    // Nassau Grouper and Atlantic Cod breed in January
    assert_eq!(first["created"], 2);

    let second: Value = AxumTestRequest::post("/api/conservation/alerts/check?month=1")
        .bearer(&auth.token)
        .send(build_router(resources.clone()))
        .await
        .json();
    assert_eq!(second["created"], 0);

    let listed: Value = AxumTestRequest::get("/api/conservation/alerts")
        .bearer(&auth.token)
        .send(build_router(resources))
        .await
        .json();
    let alerts = listed["alerts"].as_array().unwrap();
    assert_eq!(alerts.len(), 2);
    assert!(alerts
        .iter()
        .all(|a| a["alert_type"] == "breeding_season" && a["is_read"] == false));
}

#[tokio::test]
async fn test_check_rejects_bad_month() {
    let resources = common::create_test_resources().await;
    let auth = common::register_user(&resources, "month@example.com").await;

    let response = AxumTestRequest::post("/api/conservation/alerts/check?month=13")
        .bearer(&auth.token)
        .send(build_router(resources))
        .await;

    assert_eq!(response.status(), 400);
}

#[tokio::test]
async fn test_mark_read_and_dismiss() {
    let resources = common::create_test_resources().await;
    let auth = common::register_user(&resources, "read@example.com").await;
    AxumTestRequest::post("/api/conservation/alerts/check?month=7")
        .bearer(&auth.token)
        .send(build_router(resources.clone()))
        .await;

    let alerts = resources
        .database
        .list_unread_alerts(auth.user.id)
        .await
        .unwrap();
    assert_eq!(alerts.len(), 5);

    let read = AxumTestRequest::put(&format!("/api/conservation/alerts/{}/read", alerts[0].id))
        .bearer(&auth.token)
        .send(build_router(resources.clone()))
        .await;
    assert_eq!(read.status(), 204);

    let dismissed = AxumTestRequest::delete(&format!("/api/conservation/alerts/{}", alerts[1].id))
        .bearer(&auth.token)
        .send(build_router(resources.clone()))
        .await;
    assert_eq!(dismissed.status(), 204);

    let unread = resources
        .database
        .list_unread_alerts(auth.user.id)
        .await
        .unwrap();
    assert_eq!(unread.len(), 3);

    let missing = AxumTestRequest::delete(&format!("/api/conservation/alerts/{}", alerts[1].id))
        .bearer(&auth.token)
        .send(build_router(resources))
        .await;
    assert_eq!(missing.status(), 404);
}
