// ABOUTME: Shared server resources, router assembly and the HTTP serve loop
// ABOUTME: Wires config, database, auth and external collaborators into axum routes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 OceanSafe

//! # Server
//!
//! [`ServerResources`] is created once at startup and shared by every route
//! through axum state. Collaborators are trait objects so tests can swap the
//! real HTTP clients for stubs.

use std::future;
use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use http::header::HeaderName;
use oceansafe_core::errors::AppResult;
use oceansafe_intelligence::{SinusoidalTide, TideSource};
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::auth::AuthManager;
use crate::config::ServerConfig;
use crate::database::Database;
use crate::external::{
    ClimateDataSource, Geocoder, NasaPowerClient, NominatimClient, OpenWeatherClient,
    WeatherSource,
};
use crate::constants::http_headers;
use crate::middleware::{create_request_span, setup_cors};
use crate::routes::{
    AssistantRoutes, AuthRoutes, ClimateRoutes, ConditionsRoutes, ConservationRoutes,
    HealthRoutes, HistoryRoutes, LocationRoutes,
};
use crate::services::ConditionsService;

/// Everything a request handler may need
#[derive(Clone)]
pub struct ServerResources {
    /// Loaded configuration
    pub config: Arc<ServerConfig>,
    /// Persistence
    pub database: Database,
    /// Token and password handling
    pub auth: AuthManager,
    /// Conditions checks and readings
    pub conditions: Arc<ConditionsService>,
    /// Place-name lookups
    pub geocoder: Arc<dyn Geocoder>,
    /// Historical climate series
    pub climate: Arc<dyn ClimateDataSource>,
}

impl ServerResources {
    /// Assemble resources from already-built collaborators
    #[must_use]
    pub fn new(
        config: Arc<ServerConfig>,
        database: Database,
        auth: AuthManager,
        weather: Arc<dyn WeatherSource>,
        tide: Arc<dyn TideSource>,
        geocoder: Arc<dyn Geocoder>,
        climate: Arc<dyn ClimateDataSource>,
    ) -> Self {
        Self {
            config,
            database,
            auth,
            conditions: Arc::new(ConditionsService::new(weather, tide)),
            geocoder,
            climate,
        }
    }

    /// Build the real collaborators described by `config`
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or migrated
    pub async fn from_config(config: ServerConfig) -> AppResult<Self> {
        let database = Database::new(&config.database.url).await?;
        let auth = AuthManager::from_config(&config.auth);

        let services = &config.external_services;
        let timeout = services.http_timeout_secs;
        if !services.weather.is_usable() {
            warn!("Weather lookups unavailable; readings will be synthesized");
        }
        let weather: Arc<dyn WeatherSource> =
            Arc::new(OpenWeatherClient::new(services.weather.clone(), timeout));
        let geocoder: Arc<dyn Geocoder> =
            Arc::new(NominatimClient::new(services.geocoding.clone(), timeout));
        let climate: Arc<dyn ClimateDataSource> =
            Arc::new(NasaPowerClient::new(services.climate.clone(), timeout));

        Ok(Self::new(
            Arc::new(config),
            database,
            auth,
            weather,
            Arc::new(SinusoidalTide),
            geocoder,
            climate,
        ))
    }
}

/// Build the full application router
pub fn build_router(resources: Arc<ServerResources>) -> Router {
    let request_id = HeaderName::from_static(http_headers::REQUEST_ID);
    let cors = setup_cors(&resources.config);

    Router::new()
        .merge(HealthRoutes::routes(Arc::clone(&resources)))
        .merge(AuthRoutes::routes(Arc::clone(&resources)))
        .merge(ConditionsRoutes::routes(Arc::clone(&resources)))
        .merge(LocationRoutes::routes(Arc::clone(&resources)))
        .merge(HistoryRoutes::routes(Arc::clone(&resources)))
        .merge(AssistantRoutes::routes(Arc::clone(&resources)))
        .merge(ClimateRoutes::routes(Arc::clone(&resources)))
        .merge(ConservationRoutes::routes(resources))
        .layer(PropagateRequestIdLayer::new(request_id.clone()))
        .layer(TraceLayer::new_for_http().make_span_with(create_request_span))
        .layer(SetRequestIdLayer::new(request_id, MakeRequestUuid))
        .layer(cors)
}

/// Bind and serve until Ctrl-C
///
/// # Errors
///
/// Returns an error if the address is invalid, the port cannot be bound, or
/// the server stops abnormally
pub async fn run(resources: Arc<ServerResources>) -> Result<()> {
    let addr: SocketAddr = format!("{}:{}", resources.config.host, resources.config.http_port)
        .parse()
        .with_context(|| {
            format!(
                "Invalid bind address {}:{}",
                resources.config.host, resources.config.http_port
            )
        })?;

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("OceanSafe API listening on http://{addr}");

    axum::serve(listener, build_router(resources))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    info!("OceanSafe API stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl-C: {e}");
        // without a signal handler, never resolve and keep serving
        future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
