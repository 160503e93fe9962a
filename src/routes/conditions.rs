// ABOUTME: Conditions route handlers for readings, safety checks and CSV export
// ABOUTME: Authenticated checks are appended to the caller's activity history
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 OceanSafe

//! Conditions routes
//!
//! `POST /api/conditions/check` works anonymously. When a valid token is sent
//! the result is also stored; a storage failure is logged and the result is
//! returned without a `history_id`.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::{DateTime, NaiveDate, Utc};
use oceansafe_core::errors::{AppError, AppResult};
use oceansafe_core::models::{ActivityResult, ActivityType, Coordinates, Measurement};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{info, warn};
use uuid::Uuid;

use crate::constants::http_headers::CSV_CONTENT_TYPE;
use crate::export::{export_filename, render_csv};
use crate::logging::AppLogger;
use crate::middleware::optional_user;
use crate::server::ServerResources;
use crate::services::CheckRequest;

/// Optional coordinate query
#[derive(Debug, Default, Deserialize)]
pub struct CoordinateQuery {
    /// Latitude in degrees
    pub latitude: Option<f64>,
    /// Longitude in degrees
    pub longitude: Option<f64>,
}

/// Body of a conditions check
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CheckConditionsRequest {
    /// Activity name, e.g. `surfing`
    pub activity: Option<String>,
    /// Location label
    pub location: Option<String>,
    /// Planned date, `YYYY-MM-DD`
    pub date: Option<String>,
    /// Latitude in degrees
    pub latitude: Option<f64>,
    /// Longitude in degrees
    pub longitude: Option<f64>,
}

impl CheckConditionsRequest {
    /// Validate the body into a service request
    ///
    /// # Errors
    ///
    /// Returns `MissingRequiredField` for a missing activity or date,
    /// `InvalidInput` for unknown activities or malformed dates, and
    /// `ValueOutOfRange` for impossible coordinates
    pub fn into_check(self) -> AppResult<CheckRequest> {
        let activity: ActivityType = self
            .activity
            .filter(|a| !a.trim().is_empty())
            .ok_or_else(|| {
                AppError::missing_field("Activity is required")
                    .with_details(json!({ "field": "activity" }))
            })?
            .parse()?;
        let raw_date = self
            .date
            .filter(|d| !d.trim().is_empty())
            .ok_or_else(|| {
                AppError::missing_field("Date is required")
                    .with_details(json!({ "field": "date" }))
            })?;
        let date = NaiveDate::parse_from_str(raw_date.trim(), "%Y-%m-%d").map_err(|_| {
            AppError::invalid_input(format!("Invalid date {raw_date}, expected YYYY-MM-DD"))
        })?;
        let coordinates = Coordinates::from_optional(self.latitude, self.longitude)?;

        Ok(CheckRequest {
            activity,
            location: self.location.unwrap_or_default().trim().to_owned(),
            date,
            coordinates,
        })
    }
}

/// Check result plus the stored history id, if any
#[derive(Debug, Serialize)]
pub struct CheckConditionsResponse {
    /// The scored result
    #[serde(flatten)]
    pub result: ActivityResult,
    /// Id of the stored history record
    #[serde(skip_serializing_if = "Option::is_none")]
    pub history_id: Option<Uuid>,
}

/// Readings for the dashboard
#[derive(Debug, Serialize)]
pub struct ReadingsResponse {
    /// One measurement per variable
    pub readings: Vec<Measurement>,
    /// When they were generated
    pub generated_at: DateTime<Utc>,
}

/// Conditions routes implementation
pub struct ConditionsRoutes;

impl ConditionsRoutes {
    /// Create all conditions routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/readings", get(Self::handle_readings))
            .route("/api/conditions/check", post(Self::handle_check))
            .route("/api/conditions/export", post(Self::handle_export))
            .with_state(resources)
    }

    async fn handle_readings(
        State(resources): State<Arc<ServerResources>>,
        Query(query): Query<CoordinateQuery>,
    ) -> Result<Response, AppError> {
        let coordinates = Coordinates::from_optional(query.latitude, query.longitude)?;
        let readings = resources.conditions.current_readings(coordinates).await;
        Ok((
            StatusCode::OK,
            Json(ReadingsResponse {
                readings,
                generated_at: Utc::now(),
            }),
        )
            .into_response())
    }

    async fn handle_check(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Json(body): Json<CheckConditionsRequest>,
    ) -> Result<Response, AppError> {
        let user = optional_user(&headers, &resources.auth)?;
        let request = body.into_check()?;
        let has_coordinates = request.coordinates.is_some();

        let result = resources.conditions.check(request).await;
        let user_id = user.as_ref().map(|u| u.user_id.to_string());
        AppLogger::log_conditions_check(
            result.activity.as_str(),
            result.score,
            has_coordinates,
            user_id.as_deref(),
        );

        let history_id = match user {
            Some(user) => match resources
                .database
                .append_history(user.user_id, &result)
                .await
            {
                Ok(record) => Some(record.id),
                Err(e) => {
                    warn!(user_id = %user.user_id, "Failed to store check in history: {e}");
                    None
                }
            },
            None => None,
        };

        Ok((
            StatusCode::OK,
            Json(CheckConditionsResponse { result, history_id }),
        )
            .into_response())
    }

    async fn handle_export(Json(result): Json<ActivityResult>) -> Result<Response, AppError> {
        let body = render_csv(&result)?;
        let filename = export_filename(result.activity, Utc::now());
        info!("Exporting {} conditions as {filename}", result.activity);

        Ok((
            StatusCode::OK,
            [
                (CONTENT_TYPE, CSV_CONTENT_TYPE.to_owned()),
                (
                    CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{filename}\""),
                ),
            ],
            body,
        )
            .into_response())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oceansafe_core::errors::ErrorCode;

    fn body(activity: Option<&str>, date: Option<&str>) -> CheckConditionsRequest {
        CheckConditionsRequest {
            activity: activity.map(str::to_owned),
            location: Some("  Malibu ".to_owned()),
            date: date.map(str::to_owned),
            latitude: None,
            longitude: None,
        }
    }

    #[test]
    fn test_missing_activity_and_date() {
        let err = body(None, Some("2025-06-01")).into_check().unwrap_err();
        assert_eq!(err.code, ErrorCode::MissingRequiredField);
        let err = body(Some("diving"), None).into_check().unwrap_err();
        assert_eq!(err.code, ErrorCode::MissingRequiredField);
    }

    #[test]
    fn test_bad_date_and_activity() {
        let err = body(Some("diving"), Some("06/01/2025"))
            .into_check()
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);
        let err = body(Some("parasailing"), Some("2025-06-01"))
            .into_check()
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);
    }

    #[test]
    fn test_valid_body() {
        let check = body(Some("Sailing"), Some("2025-06-01")).into_check().unwrap();
        assert_eq!(check.activity, ActivityType::Sailing);
        assert_eq!(check.location, "Malibu");
        assert!(check.coordinates.is_none());
    }

    #[test]
    fn test_out_of_range_coordinates() {
        let mut request = body(Some("diving"), Some("2025-06-01"));
        request.latitude = Some(95.0);
        request.longitude = Some(0.0);
        let err = request.into_check().unwrap_err();
        assert_eq!(err.code, ErrorCode::ValueOutOfRange);
    }
}
