// ABOUTME: OpenWeather current-conditions client behind the WeatherSource trait
// ABOUTME: Extracts temperature, wind and visibility per field plus a display snapshot
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 OceanSafe

//! Weather adapter
//!
//! One call per conditions check, no retries and no caching. Each numeric
//! field is extracted independently: a missing or malformed field becomes
//! `None` while the others are still used.
//!
//! API reference: <https://openweathermap.org/current>

use async_trait::async_trait;
use oceansafe_core::errors::{AppError, AppResult};
use oceansafe_core::models::{Coordinates, ExternalReadings, WeatherSnapshot};
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use crate::config::WeatherServiceConfig;
use crate::constants::defaults::DEFAULT_HTTP_CONNECT_TIMEOUT_SECS;
use crate::constants::services::OPENWEATHER;
use crate::utils::http_client::create_client_with_timeout;

/// m/s to km/h
const MS_TO_KMH: f64 = 3.6;
/// metres to kilometres
const M_TO_KM: f64 = 1000.0;

/// What one weather lookup produced
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CurrentWeather {
    /// Values fed to the reading generator
    pub readings: ExternalReadings,
    /// Display snapshot, present only when temperature and description were both returned
    pub snapshot: Option<WeatherSnapshot>,
}

/// Source of current weather at a coordinate
#[async_trait]
pub trait WeatherSource: Send + Sync {
    /// Fetch current weather
    ///
    /// # Errors
    ///
    /// Returns an error when the source is unconfigured, unreachable or answers non-2xx
    async fn current(&self, coordinates: Coordinates) -> AppResult<CurrentWeather>;
}

/// OpenWeather `/weather` client
pub struct OpenWeatherClient {
    config: WeatherServiceConfig,
    http_client: Client,
}

impl OpenWeatherClient {
    /// Create a client with the given request timeout
    #[must_use]
    pub fn new(config: WeatherServiceConfig, timeout_secs: u64) -> Self {
        Self {
            config,
            http_client: create_client_with_timeout(
                timeout_secs,
                DEFAULT_HTTP_CONNECT_TIMEOUT_SECS,
            ),
        }
    }
}

#[async_trait]
impl WeatherSource for OpenWeatherClient {
    async fn current(&self, coordinates: Coordinates) -> AppResult<CurrentWeather> {
        if !self.config.enabled {
            return Err(AppError::config_missing("Weather service is disabled"));
        }
        let Some(api_key) = self.config.api_key.as_deref() else {
            return Err(AppError::config_missing("OPENWEATHER_API_KEY is not set"));
        };

        let url = format!("{}/weather", self.config.base_url);
        let response = self
            .http_client
            .get(&url)
            .query(&[
                ("lat", coordinates.latitude.to_string()),
                ("lon", coordinates.longitude.to_string()),
                ("appid", api_key.to_owned()),
                ("units", "metric".to_owned()),
            ])
            .send()
            .await
            .map_err(|e| AppError::external_service(OPENWEATHER, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::external_service(
                OPENWEATHER,
                format!("HTTP {status}"),
            ));
        }

        let body: Value = response.json().await.map_err(|e| {
            AppError::external_service(OPENWEATHER, format!("JSON parse error: {e}"))
        })?;
        debug!(
            latitude = coordinates.latitude,
            longitude = coordinates.longitude,
            "Weather fetched"
        );

        Ok(parse_current_weather(&body))
    }
}

/// Finite number at a JSON pointer
fn number_at(body: &Value, pointer: &str) -> Option<f64> {
    body.pointer(pointer)
        .and_then(Value::as_f64)
        .filter(|v| v.is_finite())
}

/// Extract readings and snapshot from an OpenWeather response body
#[must_use]
pub fn parse_current_weather(body: &Value) -> CurrentWeather {
    let temperature = number_at(body, "/main/temp");
    let wind_speed = number_at(body, "/wind/speed").map(|ms| ms * MS_TO_KMH);
    let visibility = number_at(body, "/visibility").map(|m| m / M_TO_KM);

    let description = body
        .pointer("/weather/0/description")
        .and_then(Value::as_str)
        .map(str::to_owned);

    let snapshot = match (temperature, description) {
        (Some(temp), Some(description)) => Some(WeatherSnapshot {
            temp,
            description,
            wind_speed: wind_speed.unwrap_or(0.0),
            wind_direction: number_at(body, "/wind/deg").unwrap_or(0.0),
            humidity: number_at(body, "/main/humidity").unwrap_or(0.0),
            pressure: number_at(body, "/main/pressure").unwrap_or(0.0),
            clouds: number_at(body, "/clouds/all").unwrap_or(0.0),
            visibility: visibility.unwrap_or(0.0),
        }),
        _ => None,
    };

    CurrentWeather {
        readings: ExternalReadings {
            temperature,
            wind_speed,
            visibility,
        },
        snapshot,
    }
}
