// ABOUTME: Assistant route handler returning canned ocean-safety replies
// ABOUTME: Keyword topic matching lives in oceansafe_intelligence::assistant
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 OceanSafe

use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use oceansafe_core::constants::messages::MESSAGE_REQUIRED;
use oceansafe_core::errors::AppError;
use oceansafe_intelligence::assistant::{match_topic, respond, AssistantContext, Topic};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;

use crate::server::ServerResources;

/// Question for the assistant
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AssistantRequest {
    /// The question
    pub message: String,
    /// What the client currently shows
    pub context: Option<AssistantContext>,
}

/// Assistant answer
#[derive(Debug, Serialize)]
pub struct AssistantResponse {
    /// Reply text
    pub response: String,
    /// Matched topic, `null` for a generic reply
    pub topic: Option<Topic>,
    /// When the reply was produced
    pub timestamp: DateTime<Utc>,
}

/// Assistant routes implementation
pub struct AssistantRoutes;

impl AssistantRoutes {
    /// Create the assistant route
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/assistant", post(Self::handle_message))
            .with_state(resources)
    }

    async fn handle_message(Json(request): Json<AssistantRequest>) -> Result<Response, AppError> {
        let message = request.message.trim();
        if message.is_empty() {
            let error = AppError::missing_field(MESSAGE_REQUIRED);
            return Err(error.with_details(json!({ "field": "message" })));
        }

        if let Some(context) = &request.context {
            debug!(
                activity = ?context.activity,
                location = context.location.as_deref().unwrap_or_default(),
                readings = context.ocean_data.as_ref().map_or(0, Vec::len),
                "Assistant context received"
            );
        }

        let mut rng = StdRng::from_entropy();
        let response = AssistantResponse {
            response: respond(message, &mut rng).to_owned(),
            topic: match_topic(message),
            timestamp: Utc::now(),
        };
        Ok((StatusCode::OK, Json(response)).into_response())
    }
}
