// ABOUTME: Nominatim forward and reverse geocoding behind the Geocoder trait
// ABOUTME: Failures degrade to empty results so location entry never blocks a check
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 OceanSafe

//! Geocoding adapter
//!
//! API reference: <https://nominatim.org/release-docs/develop/api/Overview/>

use async_trait::async_trait;
use oceansafe_core::errors::{AppError, AppResult};
use oceansafe_core::models::Coordinates;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::GeocodingServiceConfig;
use crate::constants::defaults::{GEOCODE_MIN_QUERY_CHARS, GEOCODE_SEARCH_LIMIT};
use crate::constants::services::NOMINATIM;
use crate::logging::AppLogger;
use crate::utils::http_client::geocoding_client;

/// A place matching a search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoCandidate {
    /// Full place name
    pub display_name: String,
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
}

impl GeoCandidate {
    /// Coordinate of this candidate
    #[must_use]
    pub const fn coordinates(&self) -> Coordinates {
        Coordinates {
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}

/// Place-name lookups; every method degrades instead of failing
#[async_trait]
pub trait Geocoder: Send + Sync {
    /// Up to five candidates for a free-text query
    async fn search(&self, query: &str) -> Vec<GeoCandidate>;

    /// Best single match for a query
    async fn geocode(&self, query: &str) -> Option<GeoCandidate>;

    /// Place name for a coordinate
    async fn reverse(&self, coordinates: Coordinates) -> Option<String>;
}

#[derive(Debug, Deserialize)]
struct NominatimPlace {
    display_name: String,
    lat: String,
    lon: String,
}

#[derive(Debug, Deserialize)]
struct NominatimReverse {
    display_name: Option<String>,
}

/// True when a query is long enough to send
fn is_searchable(query: &str) -> bool {
    query.trim().chars().count() >= GEOCODE_MIN_QUERY_CHARS
}

/// Convert raw places, skipping any whose coordinates do not parse or are out of range
fn candidates_from(places: Vec<NominatimPlace>) -> Vec<GeoCandidate> {
    places
        .into_iter()
        .filter_map(|place| {
            let latitude = place.lat.trim().parse::<f64>().ok()?;
            let longitude = place.lon.trim().parse::<f64>().ok()?;
            let coordinates = Coordinates::new(latitude, longitude).ok()?;
            Some(GeoCandidate {
                display_name: place.display_name,
                latitude: coordinates.latitude,
                longitude: coordinates.longitude,
            })
        })
        .collect()
}

/// Nominatim client
pub struct NominatimClient {
    config: GeocodingServiceConfig,
    http_client: Client,
}

impl NominatimClient {
    /// Create a client sending the configured User-Agent
    #[must_use]
    pub fn new(config: GeocodingServiceConfig, timeout_secs: u64) -> Self {
        let http_client = geocoding_client(&config.user_agent, timeout_secs);
        Self {
            config,
            http_client,
        }
    }

    async fn lookup(&self, query: &str, limit: usize) -> AppResult<Vec<GeoCandidate>> {
        let url = format!("{}/search", self.config.base_url);
        let response = self
            .http_client
            .get(&url)
            .query(&[
                ("q", query.trim().to_owned()),
                ("format", "json".to_owned()),
                ("limit", limit.to_string()),
            ])
            .send()
            .await
            .map_err(|e| AppError::external_service(NOMINATIM, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::external_service(NOMINATIM, format!("HTTP {status}")));
        }

        let places: Vec<NominatimPlace> = response.json().await.map_err(|e| {
            AppError::external_service(NOMINATIM, format!("JSON parse error: {e}"))
        })?;
        Ok(candidates_from(places))
    }

    async fn lookup_reverse(&self, coordinates: Coordinates) -> AppResult<Option<String>> {
        let url = format!("{}/reverse", self.config.base_url);
        let response = self
            .http_client
            .get(&url)
            .query(&[
                ("lat", coordinates.latitude.to_string()),
                ("lon", coordinates.longitude.to_string()),
                ("format", "json".to_owned()),
            ])
            .send()
            .await
            .map_err(|e| AppError::external_service(NOMINATIM, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::external_service(NOMINATIM, format!("HTTP {status}")));
        }

        let place: NominatimReverse = response.json().await.map_err(|e| {
            AppError::external_service(NOMINATIM, format!("JSON parse error: {e}"))
        })?;
        Ok(place.display_name)
    }
}

#[async_trait]
impl Geocoder for NominatimClient {
    async fn search(&self, query: &str) -> Vec<GeoCandidate> {
        if !self.config.enabled || !is_searchable(query) {
            return Vec::new();
        }
        match self.lookup(query, GEOCODE_SEARCH_LIMIT).await {
            Ok(candidates) => {
                debug!(count = candidates.len(), "Location search completed");
                candidates
            }
            Err(e) => {
                AppLogger::log_external_fallback(NOMINATIM, "search", &e.to_string());
                Vec::new()
            }
        }
    }

    async fn geocode(&self, query: &str) -> Option<GeoCandidate> {
        if !self.config.enabled || !is_searchable(query) {
            return None;
        }
        match self.lookup(query, 1).await {
            Ok(candidates) => candidates.into_iter().next(),
            Err(e) => {
                AppLogger::log_external_fallback(NOMINATIM, "geocode", &e.to_string());
                None
            }
        }
    }

    async fn reverse(&self, coordinates: Coordinates) -> Option<String> {
        if !self.config.enabled {
            return None;
        }
        match self.lookup_reverse(coordinates).await {
            Ok(name) => name,
            Err(e) => {
                AppLogger::log_external_fallback(NOMINATIM, "reverse", &e.to_string());
                None
            }
        }
    }
}
