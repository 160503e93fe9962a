// ABOUTME: Conservation route handlers for the species catalogue and breeding alerts
// ABOUTME: Alert operations are scoped to the authenticated owner
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 OceanSafe

//! Conservation routes
//!
//! `POST /api/conservation/alerts/check` drafts breeding-season alerts for the
//! current month (or `?month=`) and inserts the ones the caller does not
//! already have.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use chrono::{Datelike, Utc};
use oceansafe_core::errors::{AppError, AppResult};
use oceansafe_core::models::{ConservationAlert, FishSpecies};
use oceansafe_intelligence::conservation::plan_breeding_alerts;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::middleware::require_user;
use crate::server::ServerResources;

/// `?month=` override for the alert check
#[derive(Debug, Default, Deserialize)]
pub struct AlertCheckQuery {
    /// Month number, 1-12
    pub month: Option<u32>,
}

impl AlertCheckQuery {
    fn month_or_current(&self) -> AppResult<u32> {
        match self.month {
            Some(month) if (1..=12).contains(&month) => Ok(month),
            Some(month) => Err(AppError::out_of_range(format!(
                "Month must be between 1 and 12, got {month}"
            ))),
            None => Ok(Utc::now().month()),
        }
    }
}

/// Species catalogue
#[derive(Debug, Serialize)]
pub struct SpeciesResponse {
    /// All species, by name
    pub species: Vec<FishSpecies>,
}

/// Unread alerts
#[derive(Debug, Serialize)]
pub struct AlertsResponse {
    /// Alerts, newest first
    pub alerts: Vec<ConservationAlert>,
}

/// Outcome of an alert check
#[derive(Debug, Serialize)]
pub struct AlertCheckResponse {
    /// Month checked
    pub month: u32,
    /// Alerts newly created by this call
    pub created: u64,
    /// All unread alerts after the check
    pub alerts: Vec<ConservationAlert>,
}

/// Conservation routes implementation
pub struct ConservationRoutes;

impl ConservationRoutes {
    /// Create all conservation routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/conservation/species", get(Self::handle_species))
            .route("/api/conservation/alerts", get(Self::handle_alerts))
            .route("/api/conservation/alerts/check", post(Self::handle_check))
            .route("/api/conservation/alerts/:id/read", put(Self::handle_mark_read))
            .route("/api/conservation/alerts/:id", delete(Self::handle_dismiss))
            .with_state(resources)
    }

    async fn handle_species(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let species = resources.database.list_species().await?;
        Ok((StatusCode::OK, Json(SpeciesResponse { species })).into_response())
    }

    async fn handle_alerts(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
    ) -> Result<Response, AppError> {
        let user = require_user(&headers, &resources.auth)?;
        let alerts = resources.database.list_unread_alerts(user.user_id).await?;
        Ok((StatusCode::OK, Json(AlertsResponse { alerts })).into_response())
    }

    async fn handle_check(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Query(query): Query<AlertCheckQuery>,
    ) -> Result<Response, AppError> {
        let user = require_user(&headers, &resources.auth)?;
        let month = query.month_or_current()?;

        let species = resources.database.list_species().await?;
        let drafts = plan_breeding_alerts(&species, month);
        let created = resources
            .database
            .create_alerts(user.user_id, &drafts)
            .await?;
        info!(
            user_id = %user.user_id,
            month,
            breeding = drafts.len(),
            created,
            "Breeding alerts checked"
        );

        let alerts = resources.database.list_unread_alerts(user.user_id).await?;
        Ok((
            StatusCode::OK,
            Json(AlertCheckResponse {
                month,
                created,
                alerts,
            }),
        )
            .into_response())
    }

    async fn handle_mark_read(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Path(id): Path<Uuid>,
    ) -> Result<Response, AppError> {
        let user = require_user(&headers, &resources.auth)?;
        if resources.database.mark_alert_read(user.user_id, id).await? {
            Ok(StatusCode::NO_CONTENT.into_response())
        } else {
            Err(AppError::not_found(format!("Alert {id}")))
        }
    }

    async fn handle_dismiss(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Path(id): Path<Uuid>,
    ) -> Result<Response, AppError> {
        let user = require_user(&headers, &resources.auth)?;
        if resources.database.dismiss_alert(user.user_id, id).await? {
            Ok(StatusCode::NO_CONTENT.into_response())
        } else {
            Err(AppError::not_found(format!("Alert {id}")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oceansafe_core::errors::ErrorCode;

    #[test]
    fn test_month_override() {
        assert_eq!(AlertCheckQuery { month: Some(6) }.month_or_current().unwrap(), 6);
        let err = AlertCheckQuery { month: Some(13) }
            .month_or_current()
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValueOutOfRange);
        let current = AlertCheckQuery { month: None }.month_or_current().unwrap();
        assert!((1..=12).contains(&current));
    }
}
