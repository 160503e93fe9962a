// ABOUTME: Climate route handler computing hot and cold day probabilities
// ABOUTME: A failed climate-data fetch is logged and reported as insufficient data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 OceanSafe

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use chrono::{NaiveDate, Utc};
use oceansafe_core::errors::AppError;
use oceansafe_core::models::Coordinates;
use oceansafe_intelligence::{summarize_temperatures, ClimateSummary};
use serde::{Deserialize, Serialize};

use crate::constants::services::NASA_POWER;
use crate::external::climate::PARAM_TEMPERATURE;
use crate::external::ClimateRange;
use crate::logging::AppLogger;
use crate::server::ServerResources;

/// `?latitude&longitude&start&end`
#[derive(Debug, Default, Deserialize)]
pub struct ClimateQuery {
    /// Latitude in degrees
    pub latitude: Option<f64>,
    /// Longitude in degrees
    pub longitude: Option<f64>,
    /// First day, `YYYYMMDD`
    pub start: Option<String>,
    /// Last day, `YYYYMMDD`
    pub end: Option<String>,
}

/// Climate probabilities for a point and range
#[derive(Debug, Serialize)]
pub struct ClimateResponse {
    /// Queried point
    pub coordinates: Coordinates,
    /// First day used
    pub start: NaiveDate,
    /// Last day used
    pub end: NaiveDate,
    /// Hot/cold percentages or an insufficient-data marker
    pub summary: ClimateSummary,
}

/// Climate routes implementation
pub struct ClimateRoutes;

impl ClimateRoutes {
    /// Create the climate route
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/climate/probabilities", get(Self::handle_probabilities))
            .with_state(resources)
    }

    async fn handle_probabilities(
        State(resources): State<Arc<ServerResources>>,
        Query(query): Query<ClimateQuery>,
    ) -> Result<Response, AppError> {
        let coordinates = Coordinates::from_optional(query.latitude, query.longitude)?
            .ok_or_else(|| AppError::missing_field("Latitude and longitude are required"))?;
        let range = ClimateRange::parse(
            query.start.as_deref(),
            query.end.as_deref(),
            Utc::now().date_naive(),
        )?;

        let summary = match resources.climate.daily_series(coordinates, range).await {
            Ok(series) => summarize_temperatures(&series.daily_values(PARAM_TEMPERATURE)),
            Err(e) => {
                AppLogger::log_external_fallback(NASA_POWER, "daily_series", &e.to_string());
                ClimateSummary::InsufficientData
            }
        };

        Ok((
            StatusCode::OK,
            Json(ClimateResponse {
                coordinates,
                start: range.start(),
                end: range.end(),
                summary,
            }),
        )
            .into_response())
    }
}
