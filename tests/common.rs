// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: In-memory database, stub collaborators, quiet logging and user helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 OceanSafe
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `oceansafe_server`

use std::collections::BTreeMap;
use std::env;
use std::sync::{Arc, Once};

use async_trait::async_trait;
use oceansafe_core::errors::{AppError, AppResult};
use oceansafe_core::models::{Coordinates, ExternalReadings, WeatherSnapshot};
use oceansafe_intelligence::SinusoidalTide;
use oceansafe_server::auth::{AuthManager, AuthResponse, RegisterRequest};
use oceansafe_server::config::{DatabaseUrl, ServerConfig};
use oceansafe_server::database::Database;
use oceansafe_server::external::{
    ClimateDataSource, ClimateRange, ClimateSeries, CurrentWeather, GeoCandidate, Geocoder,
    WeatherSource,
};
use oceansafe_server::server::ServerResources;
use serde_json::Value;
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Weather source returning a fixed answer, or failing when `None`
pub struct StubWeather {
    pub weather: Option<CurrentWeather>,
}

#[async_trait]
impl WeatherSource for StubWeather {
    async fn current(&self, _coordinates: Coordinates) -> AppResult<CurrentWeather> {
        self.weather
            .clone()
            .ok_or_else(|| AppError::external_unavailable("stub weather"))
    }
}

/// Weather reporting 30.4 °C with no wind and 12 km visibility
pub fn warm_weather() -> CurrentWeather {
    CurrentWeather {
        readings: ExternalReadings {
            temperature: Some(30.4),
            wind_speed: None,
            visibility: Some(12.0),
        },
        snapshot: Some(WeatherSnapshot {
            temp: 30.4,
            description: "clear sky".to_owned(),
            wind_speed: 0.0,
            wind_direction: 0.0,
            humidity: 40.0,
            pressure: 1015.0,
            clouds: 0.0,
            visibility: 12.0,
        }),
    }
}

/// Geocoder with canned answers
#[derive(Default)]
pub struct StubGeocoder {
    pub candidates: Vec<GeoCandidate>,
    pub reverse_name: Option<String>,
}

#[async_trait]
impl Geocoder for StubGeocoder {
    async fn search(&self, query: &str) -> Vec<GeoCandidate> {
        if query.trim().chars().count() < 2 {
            return Vec::new();
        }
        self.candidates.clone()
    }

    async fn geocode(&self, query: &str) -> Option<GeoCandidate> {
        self.search(query).await.into_iter().next()
    }

    async fn reverse(&self, _coordinates: Coordinates) -> Option<String> {
        self.reverse_name.clone()
    }
}

/// Climate source returning a fixed series, or failing when `None`
#[derive(Default)]
pub struct StubClimate {
    pub temperatures: Option<Vec<f64>>,
}

#[async_trait]
impl ClimateDataSource for StubClimate {
    async fn daily_series(
        &self,
        _coordinates: Coordinates,
        range: ClimateRange,
    ) -> AppResult<ClimateSeries> {
        let temperatures = self
            .temperatures
            .clone()
            .ok_or_else(|| AppError::external_unavailable("stub climate"))?;
        let days: BTreeMap<String, Value> = range
            .start()
            .iter_days()
            .zip(temperatures)
            .map(|(day, t)| (day.format("%Y%m%d").to_string(), Value::from(t)))
            .collect();
        let mut parameters = BTreeMap::new();
        parameters.insert("T2M".to_owned(), days);
        Ok(ClimateSeries::new(parameters))
    }
}

/// Collaborators used to build test resources
#[derive(Default)]
pub struct TestCollaborators {
    pub weather: Option<CurrentWeather>,
    pub geocoder: StubGeocoder,
    pub climate: StubClimate,
}

/// Standard in-memory database
pub async fn create_test_database() -> Database {
    init_test_logging();
    Database::new(&DatabaseUrl::Memory)
        .await
        .expect("in-memory database")
}

/// Server resources over an in-memory database and the given stubs
pub async fn create_test_resources_with(collaborators: TestCollaborators) -> Arc<ServerResources> {
    let config = ServerConfig::for_testing();
    let database = create_test_database().await;
    let auth = AuthManager::new(b"oceansafe-integration-secret", 24, 4);

    Arc::new(ServerResources::new(
        Arc::new(config),
        database,
        auth,
        Arc::new(StubWeather {
            weather: collaborators.weather,
        }),
        Arc::new(SinusoidalTide),
        Arc::new(collaborators.geocoder),
        Arc::new(collaborators.climate),
    ))
}

/// Server resources whose external calls all fail
pub async fn create_test_resources() -> Arc<ServerResources> {
    create_test_resources_with(TestCollaborators::default()).await
}

/// Register a user and return the auth response
pub async fn register_user(resources: &ServerResources, email: &str) -> AuthResponse {
    resources
        .auth
        .register(
            &resources.database,
            &RegisterRequest {
                email: email.to_owned(),
                password: "tide-pool-42".to_owned(),
                full_name: "Test Surfer".to_owned(),
            },
        )
        .await
        .expect("registration")
}
