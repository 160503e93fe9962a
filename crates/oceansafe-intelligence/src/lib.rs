// ABOUTME: Ocean conditions intelligence crate: generation, scoring and summaries
// ABOUTME: Pure functions over injected randomness and time, no I/O
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 OceanSafe

#![deny(unsafe_code)]

//! # OceanSafe Intelligence
//!
//! Everything in this crate is deterministic given its inputs. Randomness
//! arrives as a `rand::Rng` argument and wall-clock time as a `DateTime`, so
//! tests can seed and pin both.

/// Variable reading generator and threshold classification
pub mod readings;

/// Activity scorer
pub mod scorer;

/// Hot/cold day fractions over a daily temperature series
pub mod climate_stats;

/// Tide approximation behind a replaceable source trait
pub mod tide;

/// Keyword-matched canned assistant replies
pub mod assistant;

/// Breeding-season alert planning
pub mod conservation;

/// Explicit planner state and reducer
pub mod planner;

pub use climate_stats::{summarize_temperatures, ClimateProbabilities, ClimateSummary};
pub use readings::{classify, generate_readings, measurement_from_value};
pub use scorer::{overall_status, safety_score, score_activity, ScoringInput};
pub use tide::{SinusoidalTide, TideSource};
