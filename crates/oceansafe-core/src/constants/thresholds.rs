// ABOUTME: Static thresholds used to classify ocean readings and scores
// ABOUTME: Also holds the ranges synthesized readings are drawn from
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 OceanSafe

use std::ops::Range;

/// Temperature below this (°C) is cold
pub const TEMPERATURE_COLD_BELOW: f64 = 18.0;
/// Temperature above this (°C) is warm
pub const TEMPERATURE_WARM_ABOVE: f64 = 28.0;

/// Wind at or above this (km/h) is moderate
pub const WIND_MODERATE_FROM: f64 = 20.0;
/// Wind at or above this (km/h) is strong
pub const WIND_STRONG_FROM: f64 = 30.0;

/// Visibility above this is excellent
pub const VISIBILITY_EXCELLENT_ABOVE: f64 = 20.0;
/// Visibility above this (and not excellent) is good
pub const VISIBILITY_GOOD_ABOVE: f64 = 10.0;

/// Currents at or above this (m/s) are moderate
pub const CURRENTS_MODERATE_FROM: f64 = 1.0;
/// Currents at or above this (m/s) are strong
pub const CURRENTS_STRONG_FROM: f64 = 2.0;

/// Waves at or above this (m) are moderate
pub const WAVES_MODERATE_FROM: f64 = 1.5;
/// Waves at or above this (m) are large
pub const WAVES_LARGE_FROM: f64 = 3.0;

/// Safety index above this is safe
pub const SAFETY_SAFE_ABOVE: f64 = 70.0;
/// Safety index above this (and not safe) is moderate
pub const SAFETY_MODERATE_ABOVE: f64 = 40.0;

/// Score above this is "excellent"
pub const SCORE_EXCELLENT_ABOVE: u32 = 70;
/// Score above this is "good"
pub const SCORE_GOOD_ABOVE: u32 = 50;

/// Daily mean temperature above this (°C) counts as a hot day
pub const HOT_DAY_ABOVE_C: f64 = 32.0;
/// Daily mean temperature below this (°C) counts as a cold day
pub const COLD_DAY_BELOW_C: f64 = 5.0;

/// Synthesized temperature range (°C)
pub const SYNTH_TEMPERATURE: Range<f64> = 15.0..30.0;
/// Synthesized wind range (km/h)
pub const SYNTH_WIND: Range<f64> = 0.0..40.0;
/// Synthesized visibility range
pub const SYNTH_VISIBILITY: Range<f64> = 5.0..35.0;
/// Synthesized currents range (m/s)
pub const SYNTH_CURRENTS: Range<f64> = 0.0..3.0;
/// Synthesized wave height range (m)
pub const SYNTH_WAVES: Range<f64> = 0.0..4.0;
/// Synthesized safety index range (%)
pub const SYNTH_SAFETY: Range<f64> = 0.0..100.0;

/// NASA POWER fill value for missing data
pub const CLIMATE_FILL_VALUE: f64 = -999.0;
