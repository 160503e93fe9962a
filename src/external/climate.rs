// ABOUTME: NASA POWER daily climate client behind the ClimateDataSource trait
// ABOUTME: Date-range parsing and per-parameter series with fill values removed
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 OceanSafe

//! Climate-data adapter
//!
//! API reference: <https://power.larc.nasa.gov/docs/services/api/temporal/daily/>

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::{Datelike, NaiveDate};
use oceansafe_core::errors::{AppError, AppResult, ErrorCode};
use oceansafe_core::models::Coordinates;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::config::ClimateServiceConfig;
use crate::constants::defaults::DEFAULT_HTTP_CONNECT_TIMEOUT_SECS;
use crate::constants::services::NASA_POWER;
use crate::constants::thresholds::CLIMATE_FILL_VALUE;
use crate::utils::http_client::create_client_with_timeout;

/// Daily mean air temperature at 2 m
pub const PARAM_TEMPERATURE: &str = "T2M";
/// Daily mean wind speed at 2 m
pub const PARAM_WIND: &str = "WS2M";
/// Daily precipitation
pub const PARAM_PRECIPITATION: &str = "PRECTOT";

const DATE_FORMAT: &str = "%Y%m%d";

/// Inclusive range of days
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClimateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl ClimateRange {
    /// Build a range
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when `start` is after `end`
    pub fn new(start: NaiveDate, end: NaiveDate) -> AppResult<Self> {
        if start > end {
            return Err(AppError::invalid_input(
                "Start date must not be after end date",
            ));
        }
        Ok(Self { start, end })
    }

    /// The whole calendar year before `today`
    #[must_use]
    pub fn previous_year(today: NaiveDate) -> Self {
        let year = today.year() - 1;
        Self {
            start: NaiveDate::from_ymd_opt(year, 1, 1).unwrap_or(today),
            end: NaiveDate::from_ymd_opt(year, 12, 31).unwrap_or(today),
        }
    }

    /// Parse optional `YYYYMMDD` bounds, each defaulting to the previous calendar year
    ///
    /// # Errors
    ///
    /// Returns `InvalidFormat` for a malformed date and `InvalidInput` for a reversed range
    pub fn parse(start: Option<&str>, end: Option<&str>, today: NaiveDate) -> AppResult<Self> {
        let fallback = Self::previous_year(today);
        let start = start.map_or(Ok(fallback.start), parse_compact_date)?;
        let end = end.map_or(Ok(fallback.end), parse_compact_date)?;
        Self::new(start, end)
    }

    /// First day
    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last day
    #[must_use]
    pub const fn end(&self) -> NaiveDate {
        self.end
    }
}

/// Parse a `YYYYMMDD` date
///
/// # Errors
///
/// Returns `InvalidFormat` when the text is not a valid date in that layout
pub fn parse_compact_date(raw: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).map_err(|_| {
        AppError::new(
            ErrorCode::InvalidFormat,
            format!("Date must be YYYYMMDD, got {raw}"),
        )
    })
}

/// Daily values keyed by parameter code, then by `YYYYMMDD` date
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClimateSeries {
    parameters: BTreeMap<String, BTreeMap<String, Value>>,
}

impl ClimateSeries {
    /// Build from parsed parameter maps
    #[must_use]
    pub const fn new(parameters: BTreeMap<String, BTreeMap<String, Value>>) -> Self {
        Self { parameters }
    }

    /// Values for one parameter in date order, without fill values or non-numbers
    #[must_use]
    pub fn daily_values(&self, parameter: &str) -> Vec<f64> {
        self.parameters
            .get(parameter)
            .map(|days| {
                days.values()
                    .filter_map(Value::as_f64)
                    .filter(|v| v.is_finite() && (*v - CLIMATE_FILL_VALUE).abs() > f64::EPSILON)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Parameter codes present
    pub fn parameter_codes(&self) -> impl Iterator<Item = &str> {
        self.parameters.keys().map(String::as_str)
    }
}

#[derive(Debug, Deserialize)]
struct PowerResponse {
    properties: PowerProperties,
}

#[derive(Debug, Deserialize)]
struct PowerProperties {
    #[serde(default)]
    parameter: BTreeMap<String, BTreeMap<String, Value>>,
}

/// Parse a NASA POWER daily point response body
///
/// # Errors
///
/// Returns an external-service error when `properties` is missing
pub fn parse_power_response(body: Value) -> AppResult<ClimateSeries> {
    let parsed: PowerResponse = serde_json::from_value(body).map_err(|e| {
        AppError::external_service(NASA_POWER, format!("Unexpected response shape: {e}"))
    })?;
    Ok(ClimateSeries::new(parsed.properties.parameter))
}

/// Historical daily climate data
#[async_trait]
pub trait ClimateDataSource: Send + Sync {
    /// Daily series for a coordinate over a range
    ///
    /// # Errors
    ///
    /// Returns an error when the source is disabled, unreachable or answers non-2xx
    async fn daily_series(
        &self,
        coordinates: Coordinates,
        range: ClimateRange,
    ) -> AppResult<ClimateSeries>;
}

/// NASA POWER client
pub struct NasaPowerClient {
    config: ClimateServiceConfig,
    http_client: Client,
}

impl NasaPowerClient {
    /// Create a client with the given request timeout
    #[must_use]
    pub fn new(config: ClimateServiceConfig, timeout_secs: u64) -> Self {
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
impl ClimateDataSource for NasaPowerClient {
    async fn daily_series(
        &self,
        coordinates: Coordinates,
        range: ClimateRange,
    ) -> AppResult<ClimateSeries> {
        if !self.config.enabled {
            return Err(AppError::external_unavailable(NASA_POWER));
        }

        let url = format!("{}/api/temporal/daily/point", self.config.base_url);
        let parameters = [PARAM_TEMPERATURE, PARAM_WIND, PARAM_PRECIPITATION].join(",");
        let response = self
            .http_client
            .get(&url)
            .query(&[
                ("parameters", parameters),
                ("community", "RE".to_owned()),
                ("longitude", coordinates.longitude.to_string()),
                ("latitude", coordinates.latitude.to_string()),
                ("start", range.start.format(DATE_FORMAT).to_string()),
                ("end", range.end.format(DATE_FORMAT).to_string()),
                ("format", "JSON".to_owned()),
            ])
            .send()
            .await
            .map_err(|e| AppError::external_service(NASA_POWER, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::external_service(
                NASA_POWER,
                format!("HTTP {status}"),
            ));
        }

        let body: Value = response.json().await.map_err(|e| {
            AppError::external_service(NASA_POWER, format!("JSON parse error: {e}"))
        })?;
        let series = parse_power_response(body)?;
        debug!(
            start = %range.start,
            end = %range.end,
            days = series.daily_values(PARAM_TEMPERATURE).len(),
            "Climate series fetched"
        );
        Ok(series)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_default_range_is_previous_calendar_year() {
        let range = ClimateRange::parse(None, None, ymd(2025, 3, 14)).unwrap();
        assert_eq!(range.start(), ymd(2024, 1, 1));
        assert_eq!(range.end(), ymd(2024, 12, 31));
    }

    #[test]
    fn test_reversed_range_rejected() {
        let err = ClimateRange::parse(Some("20240601"), Some("20240101"), ymd(2025, 1, 1))
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);
    }

    #[test]
    fn test_malformed_date_rejected() {
        assert!(parse_compact_date("2024-06-01").is_err());
        assert!(parse_compact_date("20241301").is_err());
        assert_eq!(parse_compact_date("20240229").unwrap(), ymd(2024, 2, 29));
    }

    #[test]
    fn test_fill_values_are_dropped() {
        let series = parse_power_response(json!({
            "properties": {
                "parameter": {
                    "T2M": {
                        "20240101": 12.5,
                        "20240102": -999.0,
                        "20240103": 33.1,
                        "20240104": "n/a"
                    },
                    "WS2M": { "20240101": 3.2 }
                }
            }
        }))
        .unwrap();

        assert_eq!(series.daily_values(PARAM_TEMPERATURE), vec![12.5, 33.1]);
        assert_eq!(series.daily_values(PARAM_PRECIPITATION), Vec::<f64>::new());
        assert_eq!(series.parameter_codes().count(), 2);
    }

    #[test]
    fn test_missing_properties_is_external_error() {
        assert!(parse_power_response(json!({ "messages": [] })).is_err());
    }
}
