// ABOUTME: Location route handlers for place search and reverse geocoding
// ABOUTME: Geocoder failures degrade to empty results rather than errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 OceanSafe

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use oceansafe_core::errors::{AppError, AppResult};
use oceansafe_core::models::Coordinates;
use serde::{Deserialize, Serialize};

use crate::external::GeoCandidate;
use crate::server::ServerResources;

/// `?q=` for place search
#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    /// Free-text query
    #[serde(default)]
    pub q: String,
}

/// `?latitude&longitude` for reverse lookups
#[derive(Debug, Default, Deserialize)]
pub struct ReverseQuery {
    /// Latitude in degrees
    pub latitude: Option<f64>,
    /// Longitude in degrees
    pub longitude: Option<f64>,
}

impl ReverseQuery {
    fn coordinates(&self) -> AppResult<Coordinates> {
        Coordinates::from_optional(self.latitude, self.longitude)?
            .ok_or_else(|| AppError::missing_field("Latitude and longitude are required"))
    }
}

/// Search results
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    /// Matching places, best first
    pub results: Vec<GeoCandidate>,
}

/// Reverse lookup result
#[derive(Debug, Serialize)]
pub struct ReverseResponse {
    /// Place name, `null` when unknown
    pub display_name: Option<String>,
    /// Queried latitude
    pub latitude: f64,
    /// Queried longitude
    pub longitude: f64,
}

/// Location routes implementation
pub struct LocationRoutes;

impl LocationRoutes {
    /// Create all location routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/locations/search", get(Self::handle_search))
            .route("/api/locations/reverse", get(Self::handle_reverse))
            .with_state(resources)
    }

    async fn handle_search(
        State(resources): State<Arc<ServerResources>>,
        Query(query): Query<SearchQuery>,
    ) -> Response {
        let results = resources.geocoder.search(&query.q).await;
        (StatusCode::OK, Json(SearchResponse { results })).into_response()
    }

    async fn handle_reverse(
        State(resources): State<Arc<ServerResources>>,
        Query(query): Query<ReverseQuery>,
    ) -> Result<Response, AppError> {
        let coordinates = query.coordinates()?;
        let display_name = resources.geocoder.reverse(coordinates).await;
        Ok((
            StatusCode::OK,
            Json(ReverseResponse {
                display_name,
                latitude: coordinates.latitude,
                longitude: coordinates.longitude,
            }),
        )
            .into_response())
    }
}
