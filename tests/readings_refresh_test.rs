// ABOUTME: Integration tests for the periodic readings refresher
// ABOUTME: Publication through the watch channel and clean shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 OceanSafe

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::sync::Arc;
use std::time::Duration;

use oceansafe_core::models::{Coordinates, MeasurementId};
use oceansafe_intelligence::SinusoidalTide;
use oceansafe_server::external::CurrentWeather;
use oceansafe_server::services::{ConditionsService, ReadingsRefresher};
use tokio::time::timeout;

fn service(weather: Option<CurrentWeather>) -> Arc<ConditionsService> {
    Arc::new(ConditionsService::new(
        Arc::new(common::StubWeather { weather }),
        Arc::new(SinusoidalTide),
    ))
}

#[tokio::test]
async fn test_first_refresh_is_immediate() {
    common::init_test_logging();
    let refresher = ReadingsRefresher::spawn(service(None), None, Duration::from_secs(3600));
    let mut updates = refresher.subscribe();

    timeout(Duration::from_secs(5), updates.changed())
        .await
        .expect("first refresh in time")
        .unwrap();

    assert_eq!(refresher.latest().len(), 6);
    refresher.stop().await;
}

#[tokio::test]
async fn test_refreshes_repeat_and_use_weather() {
    common::init_test_logging();
    let coordinates = Coordinates::new(21.27, -157.82).unwrap();
    let refresher = ReadingsRefresher::spawn(
        service(Some(common::warm_weather())),
        Some(coordinates),
        Duration::from_millis(20),
    );
    let mut updates = refresher.subscribe();

    for _ in 0..3 {
        timeout(Duration::from_secs(5), updates.changed())
            .await
            .expect("refresh in time")
            .unwrap();
    }

    let readings = refresher.latest();
    let temperature = readings
        .iter()
        .find(|m| m.id == MeasurementId::Temperature)
        .unwrap();
    assert!((temperature.value - 30.4).abs() < 1e-9);
    refresher.stop().await;
}

#[tokio::test]
async fn test_stop_ends_task() {
    common::init_test_logging();
    let refresher = ReadingsRefresher::spawn(service(None), None, Duration::from_millis(10));
    assert!(!refresher.is_finished());

    timeout(Duration::from_secs(5), refresher.stop())
        .await
        .expect("stop completes");
}
