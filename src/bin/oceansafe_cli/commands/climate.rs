// ABOUTME: `climate` command printing hot and cold day probabilities
// ABOUTME: Fetch failures are reported as insufficient data, matching the API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 OceanSafe

use anyhow::Result;
use chrono::Utc;
use oceansafe_core::constants::services::NASA_POWER;
use oceansafe_core::models::Coordinates;
use oceansafe_intelligence::planner::{reduce, PlannerAction};
use oceansafe_intelligence::{summarize_temperatures, ClimateSummary};
use oceansafe_server::external::climate::PARAM_TEMPERATURE;
use oceansafe_server::external::ClimateRange;
use oceansafe_server::logging::AppLogger;

use super::CliContext;
use crate::helpers::display::print_climate;

/// Fetch a daily series and summarize it
pub async fn probabilities(
    context: &CliContext,
    latitude: f64,
    longitude: f64,
    start: Option<String>,
    end: Option<String>,
) -> Result<()> {
    let coordinates = Coordinates::new(latitude, longitude)?;
    let range = ClimateRange::parse(start.as_deref(), end.as_deref(), Utc::now().date_naive())?;

    let summary = match context.climate.daily_series(coordinates, range).await {
        Ok(series) => summarize_temperatures(&series.daily_values(PARAM_TEMPERATURE)),
        Err(e) => {
            AppLogger::log_external_fallback(NASA_POWER, "daily_series", &e.to_string());
            ClimateSummary::InsufficientData
        }
    };

    let state = reduce(
        CliContext::initial_state(),
        PlannerAction::SetLocation {
            label: format!("{latitude:.4}, {longitude:.4}"),
            coordinates: Some(coordinates),
        },
    );
    let state = reduce(state, PlannerAction::ClimateReady(summary));
    print_climate(&state, range);
    Ok(())
}
