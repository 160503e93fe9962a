// ABOUTME: Conditions service orchestrating weather, tide, reading generation and scoring
// ABOUTME: External failures fall back to synthesized readings and never fail a check
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 OceanSafe

//! Conditions service
//!
//! One check performs at most one weather fetch. Everything after the fetch
//! is pure and lives in `oceansafe_intelligence`.

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use oceansafe_core::models::{
    ActivityResult, ActivityType, Coordinates, Measurement, TideSnapshot,
};
use oceansafe_intelligence::{generate_readings, score_activity, ScoringInput, TideSource};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::constants::services::OPENWEATHER;
use crate::external::{CurrentWeather, WeatherSource};
use crate::logging::AppLogger;

/// Inputs for one conditions check
#[derive(Debug, Clone, PartialEq)]
pub struct CheckRequest {
    /// Planned activity
    pub activity: ActivityType,
    /// Free-text location label
    pub location: String,
    /// Planned date
    pub date: NaiveDate,
    /// Resolved coordinate, if any
    pub coordinates: Option<Coordinates>,
}

/// Weather and tide gathered for a coordinate
#[derive(Debug, Clone, Default)]
pub struct ConditionsContext {
    /// Weather lookup result, empty on failure
    pub weather: CurrentWeather,
    /// Tide, if the source knows it
    pub tide: Option<TideSnapshot>,
}

/// Runs conditions checks against injected collaborators
#[derive(Clone)]
pub struct ConditionsService {
    weather: Arc<dyn WeatherSource>,
    tide: Arc<dyn TideSource>,
}

impl ConditionsService {
    /// Create a service
    #[must_use]
    pub fn new(weather: Arc<dyn WeatherSource>, tide: Arc<dyn TideSource>) -> Self {
        Self { weather, tide }
    }

    /// Gather weather and tide; a failed weather call yields empty readings
    pub async fn gather_context(
        &self,
        coordinates: Option<Coordinates>,
        at: DateTime<Utc>,
    ) -> ConditionsContext {
        let Some(coordinates) = coordinates else {
            return ConditionsContext::default();
        };

        let weather = match self.weather.current(coordinates).await {
            Ok(weather) => weather,
            Err(e) => {
                AppLogger::log_external_fallback(OPENWEATHER, "current_weather", &e.to_string());
                CurrentWeather::default()
            }
        };

        ConditionsContext {
            weather,
            tide: self.tide.tide_at(coordinates, at),
        }
    }

    /// Run a full check with fresh entropy
    pub async fn check(&self, request: CheckRequest) -> ActivityResult {
        let context = self.gather_context(request.coordinates, Utc::now()).await;
        let mut rng = StdRng::from_entropy();
        Self::assemble(request, context, &mut rng)
    }

    /// Generate readings and score them; pure given its inputs
    pub fn assemble<R: Rng + ?Sized>(
        request: CheckRequest,
        context: ConditionsContext,
        rng: &mut R,
    ) -> ActivityResult {
        let variables = generate_readings(&context.weather.readings, rng);
        // without a coordinate nothing external is attached
        let (weather, tide) = if request.coordinates.is_some() {
            (context.weather.snapshot, context.tide)
        } else {
            (None, None)
        };

        score_activity(ScoringInput {
            activity: request.activity,
            location: request.location,
            date: request.date,
            coordinates: request.coordinates,
            variables,
            weather,
            tide,
        })
    }

    /// Current readings alone, used by the dashboard and refresh loop
    pub async fn current_readings(&self, coordinates: Option<Coordinates>) -> Vec<Measurement> {
        let context = self.gather_context(coordinates, Utc::now()).await;
        let mut rng = StdRng::from_entropy();
        generate_readings(&context.weather.readings, &mut rng)
    }
}
