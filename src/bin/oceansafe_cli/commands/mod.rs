// ABOUTME: Command modules for oceansafe-cli and the shared collaborator context
// ABOUTME: The context builds real external clients from environment configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 OceanSafe

pub mod assistant;
pub mod climate;
pub mod conditions;
pub mod locations;

use std::sync::Arc;

use anyhow::Result;
use chrono::Utc;
use oceansafe_intelligence::planner::PlannerState;
use oceansafe_intelligence::SinusoidalTide;
use oceansafe_server::config::ServerConfig;
use oceansafe_server::external::{
    ClimateDataSource, Geocoder, NasaPowerClient, NominatimClient, OpenWeatherClient,
};
use oceansafe_server::services::ConditionsService;

/// Collaborators shared by every command
pub struct CliContext {
    pub config: ServerConfig,
    pub conditions: Arc<ConditionsService>,
    pub geocoder: Arc<dyn Geocoder>,
    pub climate: Arc<dyn ClimateDataSource>,
}

impl CliContext {
    /// Build clients from `ServerConfig::from_env`
    pub fn from_env() -> Result<Self> {
        let config = ServerConfig::from_env()?;
        let services = &config.external_services;
        let timeout = services.http_timeout_secs;

        let conditions = Arc::new(ConditionsService::new(
            Arc::new(OpenWeatherClient::new(services.weather.clone(), timeout)),
            Arc::new(SinusoidalTide),
        ));
        let geocoder: Arc<dyn Geocoder> =
            Arc::new(NominatimClient::new(services.geocoding.clone(), timeout));
        let climate: Arc<dyn ClimateDataSource> =
            Arc::new(NasaPowerClient::new(services.climate.clone(), timeout));

        Ok(Self {
            config,
            conditions,
            geocoder,
            climate,
        })
    }

    /// Fresh planner state for today
    pub fn initial_state() -> PlannerState {
        let now = Utc::now();
        PlannerState::new(now.date_naive(), now)
    }
}
