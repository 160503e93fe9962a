// ABOUTME: Activity history route handlers for listing and deleting past checks
// ABOUTME: Every operation is scoped to the authenticated owner
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 OceanSafe

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get};
use axum::{Json, Router};
use oceansafe_core::errors::AppError;
use oceansafe_core::models::HistoryRecord;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::AppBehaviorConfig;
use crate::middleware::require_user;
use crate::server::ServerResources;

/// `?limit=` for history listing
#[derive(Debug, Default, Deserialize)]
pub struct HistoryQuery {
    /// Requested page size
    pub limit: Option<u32>,
}

/// Recent history page
#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    /// Records, newest first
    pub history: Vec<HistoryRecord>,
    /// Page size actually applied
    pub limit: u32,
}

/// Page size for a request: the configured default when absent, clamped to `1..=max`
#[must_use]
pub fn effective_limit(requested: Option<u32>, behavior: &AppBehaviorConfig) -> u32 {
    requested
        .unwrap_or(behavior.history_default_limit)
        .clamp(1, behavior.history_max_limit)
}

/// History routes implementation
pub struct HistoryRoutes;

impl HistoryRoutes {
    /// Create all history routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/history", get(Self::handle_list))
            .route("/api/history/:id", delete(Self::handle_delete))
            .with_state(resources)
    }

    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Query(query): Query<HistoryQuery>,
    ) -> Result<Response, AppError> {
        let user = require_user(&headers, &resources.auth)?;
        let limit = effective_limit(query.limit, &resources.config.app_behavior);
        let history = resources
            .database
            .list_recent_history(user.user_id, limit)
            .await?;
        Ok((StatusCode::OK, Json(HistoryResponse { history, limit })).into_response())
    }

    async fn handle_delete(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Path(id): Path<Uuid>,
    ) -> Result<Response, AppError> {
        let user = require_user(&headers, &resources.auth)?;
        if resources.database.delete_history(user.user_id, id).await? {
            Ok(StatusCode::NO_CONTENT.into_response())
        } else {
            Err(AppError::not_found(format!("History record {id}")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn behavior() -> AppBehaviorConfig {
        AppBehaviorConfig {
            readings_refresh_secs: 30,
            history_default_limit: 10,
            history_max_limit: 100,
        }
    }

    #[test]
    fn test_effective_limit() {
        let behavior = behavior();
        assert_eq!(effective_limit(None, &behavior), 10);
        assert_eq!(effective_limit(Some(25), &behavior), 25);
        assert_eq!(effective_limit(Some(500), &behavior), 100);
        assert_eq!(effective_limit(Some(0), &behavior), 1);
    }
}
