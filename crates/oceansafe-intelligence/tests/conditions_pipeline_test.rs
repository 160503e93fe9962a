// ABOUTME: Integration tests for the generator and scorer working together
// ABOUTME: Seeded randomness makes every generated set reproducible
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 OceanSafe

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::collections::HashSet;

use chrono::{NaiveDate, TimeZone, Utc};
use oceansafe_core::models::{
    ActivityType, Coordinates, ExternalReadings, MeasurementId, StatusTier,
};
use oceansafe_intelligence::{
    classify, generate_readings, safety_score, score_activity, ScoringInput, SinusoidalTide,
    TideSource,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const ALL_IDS: [MeasurementId; 6] = [
    MeasurementId::Temperature,
    MeasurementId::Wind,
    MeasurementId::Visibility,
    MeasurementId::Currents,
    MeasurementId::Waves,
    MeasurementId::Safety,
];

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 7, 12).unwrap()
}

#[test]
fn test_without_coordinates_all_six_are_synthesized() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let variables = generate_readings(&ExternalReadings::default(), &mut rng);

    let ids: Vec<MeasurementId> = variables.iter().map(|m| m.id).collect();
    assert_eq!(ids, ALL_IDS.to_vec());

    let result = score_activity(ScoringInput {
        activity: ActivityType::Swimming,
        location: "Santa Monica, CA".to_owned(),
        date: date(),
        coordinates: None,
        variables,
        weather: None,
        tide: None,
    });
    assert!(result.weather.is_none());
    assert!(result.tide.is_none());
    assert_eq!(result.variables.len(), 6);
}

#[test]
fn test_same_seed_same_readings() {
    let first = generate_readings(
        &ExternalReadings::default(),
        &mut ChaCha8Rng::seed_from_u64(9),
    );
    let second = generate_readings(
        &ExternalReadings::default(),
        &mut ChaCha8Rng::seed_from_u64(9),
    );
    assert_eq!(first, second);
}

#[test]
fn test_synthesized_values_stay_in_range_and_match_tiers() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    for _ in 0..500 {
        for m in generate_readings(&ExternalReadings::default(), &mut rng) {
            // The tier comes from the unrounded value, which lies within
            // half a display step of m.value
            let half_step = 0.5 / 10_f64.powi(m.id.decimals());
            let matches_nearby = [m.value - half_step, m.value, m.value + half_step]
                .into_iter()
                .map(|v| classify(m.id, v))
                .any(|(status, label, recommendation)| {
                    m.status == status
                        && m.status_text == label
                        && m.recommendation == recommendation
                });
            assert!(matches_nearby, "{m:?}");
            assert_ne!(m.status, StatusTier::Danger);

            if m.id == MeasurementId::Temperature {
                assert!((15.0..=30.0).contains(&m.value));
                if m.value < 17.95 || m.value > 28.05 {
                    assert_eq!(m.status, StatusTier::Warning);
                } else if (18.05..=27.95).contains(&m.value) {
                    assert_eq!(m.status, StatusTier::Safe);
                }
            }
        }
    }
}

#[test]
fn test_external_temperature_overrides_synthesis() {
    let external = ExternalReadings {
        temperature: Some(30.4),
        wind_speed: None,
        visibility: None,
    };
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let variables = generate_readings(&external, &mut rng);

    let temperatures: Vec<_> = variables
        .iter()
        .filter(|m| m.id == MeasurementId::Temperature)
        .collect();
    assert_eq!(temperatures.len(), 1);
    let temperature = temperatures[0];
    assert!((temperature.value - 30.4).abs() < 1e-9);
    assert_eq!(temperature.status, StatusTier::Warning);
    assert_eq!(temperature.status_text, "Warm");

    // sourced first, then the synthesized wind
    assert_eq!(variables[0].id, MeasurementId::Temperature);
    assert_eq!(variables[1].id, MeasurementId::Wind);
    assert_eq!(variables[1].unit, "km/h");

    let unique: HashSet<MeasurementId> = variables.iter().map(|m| m.id).collect();
    assert_eq!(unique.len(), 6);
}

#[test]
fn test_external_visibility_reports_kilometres() {
    let external = ExternalReadings {
        temperature: None,
        wind_speed: None,
        visibility: Some(10.0),
    };
    let variables = generate_readings(&external, &mut ChaCha8Rng::seed_from_u64(5));
    assert_eq!(variables[0].id, MeasurementId::Visibility);
    assert_eq!(variables[0].unit, "km");
    assert_eq!(variables[0].status_text, "Poor");
}

#[test]
fn test_score_matches_safe_fraction_with_tide_attached() {
    let coords = Coordinates::new(33.99, -118.48).unwrap();
    let at = Utc.with_ymd_and_hms(2025, 7, 12, 6, 0, 0).unwrap();
    let tide = SinusoidalTide.tide_at(coords, at);

    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let variables = generate_readings(&ExternalReadings::default(), &mut rng);
    let expected = safety_score(&variables);

    let result = score_activity(ScoringInput {
        activity: ActivityType::Surfing,
        location: "Santa Monica, CA".to_owned(),
        date: date(),
        coordinates: Some(coords),
        variables,
        weather: None,
        tide,
    });

    let safe = result.variables.iter().filter(|m| m.is_safe()).count();
    let rounded = (100.0 * safe as f64 / 6.0).round() as u32;
    assert_eq!(result.score, expected);
    assert_eq!(result.score, rounded);
    assert!(result.tide.is_some());
}
