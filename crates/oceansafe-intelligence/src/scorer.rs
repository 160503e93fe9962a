// ABOUTME: Activity scorer folding a measurement set into an immutable ActivityResult
// ABOUTME: Safety score, overall sentence, activity details and safety tips
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 OceanSafe

use chrono::NaiveDate;
use oceansafe_core::constants::{messages, thresholds};
use oceansafe_core::models::{
    ActivityResult, ActivityType, Coordinates, Measurement, TideSnapshot, WeatherSnapshot,
};

/// Inputs to a single scoring pass
#[derive(Debug, Clone)]
pub struct ScoringInput {
    /// Chosen activity
    pub activity: ActivityType,
    /// Location label
    pub location: String,
    /// Planned date
    pub date: NaiveDate,
    /// Coordinate, when one was resolved
    pub coordinates: Option<Coordinates>,
    /// Generator output
    pub variables: Vec<Measurement>,
    /// Weather at the coordinate
    pub weather: Option<WeatherSnapshot>,
    /// Tide at the coordinate
    pub tide: Option<TideSnapshot>,
}

/// Percentage of safe readings, rounded half up
///
/// An empty set scores 0. The generator never produces one.
#[must_use]
pub fn safety_score(measurements: &[Measurement]) -> u32 {
    let total = u32::try_from(measurements.len()).unwrap_or(u32::MAX);
    if total == 0 {
        return 0;
    }
    let safe = u32::try_from(measurements.iter().filter(|m| m.is_safe()).count()).unwrap_or(total);
    // round(100 * safe / total) in integers
    (200 * safe + total) / (2 * total)
}

/// Overall sentence for a score; both thresholds are strict
#[must_use]
pub fn overall_status(score: u32, activity: ActivityType) -> String {
    if score > thresholds::SCORE_EXCELLENT_ABOVE {
        format!("{} {activity}", messages::OVERALL_EXCELLENT_PREFIX)
    } else if score > thresholds::SCORE_GOOD_ABOVE {
        messages::OVERALL_GOOD.to_owned()
    } else {
        messages::OVERALL_CHALLENGING.to_owned()
    }
}

/// Generic safety tips, identical for every check
#[must_use]
pub fn safety_tips() -> Vec<String> {
    messages::SAFETY_TIPS.iter().map(|&tip| tip.to_owned()).collect()
}

/// Score a measurement set
#[must_use]
pub fn score_activity(input: ScoringInput) -> ActivityResult {
    let score = safety_score(&input.variables);
    ActivityResult {
        activity: input.activity,
        location: input.location,
        date: input.date,
        coordinates: input.coordinates,
        score,
        overall: overall_status(score, input.activity),
        details: input.activity.details().to_owned(),
        safety_tips: safety_tips(),
        variables: input.variables,
        weather: input.weather,
        tide: input.tide,
    }
}
