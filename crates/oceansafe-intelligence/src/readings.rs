// ABOUTME: Variable reading generator producing one classified measurement per identifier
// ABOUTME: External readings override synthesis; classification is shared by both paths
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 OceanSafe

//! Variable reading generator
//!
//! [`generate_readings`] always returns six measurements, one per
//! [`MeasurementId`]. Temperature, wind and visibility come from the weather
//! provider when it supplied a finite value and are synthesized otherwise;
//! currents, waves and the safety index are always synthesized.
//!
//! Values are rounded to their reporting precision before they are
//! classified, so a reported value and its tier never disagree.

use oceansafe_core::constants::{messages, thresholds};
use oceansafe_core::models::{ExternalReadings, Measurement, MeasurementId, StatusTier};
use rand::Rng;
use std::ops::Range;

/// Unit reported for visibility taken from the weather provider
const EXTERNAL_VISIBILITY_UNIT: &str = "km";

/// Classify a value into its tier, label and recommendation
#[must_use]
pub fn classify(id: MeasurementId, value: f64) -> (StatusTier, &'static str, &'static str) {
    let (status, (label, recommendation)) = match id {
        MeasurementId::Temperature => {
            if value < thresholds::TEMPERATURE_COLD_BELOW {
                (StatusTier::Warning, messages::TEMPERATURE_COLD)
            } else if value > thresholds::TEMPERATURE_WARM_ABOVE {
                (StatusTier::Warning, messages::TEMPERATURE_WARM)
            } else {
                (StatusTier::Safe, messages::TEMPERATURE_COMFORTABLE)
            }
        }
        MeasurementId::Wind => {
            if value < thresholds::WIND_MODERATE_FROM {
                (StatusTier::Safe, messages::WIND_LIGHT)
            } else if value < thresholds::WIND_STRONG_FROM {
                (StatusTier::Moderate, messages::WIND_MODERATE)
            } else {
                (StatusTier::Warning, messages::WIND_STRONG)
            }
        }
        MeasurementId::Visibility => {
            if value > thresholds::VISIBILITY_EXCELLENT_ABOVE {
                (StatusTier::Safe, messages::VISIBILITY_EXCELLENT)
            } else if value > thresholds::VISIBILITY_GOOD_ABOVE {
                (StatusTier::Moderate, messages::VISIBILITY_GOOD)
            } else {
                (StatusTier::Warning, messages::VISIBILITY_POOR)
            }
        }
        MeasurementId::Currents => {
            if value < thresholds::CURRENTS_MODERATE_FROM {
                (StatusTier::Safe, messages::CURRENTS_CALM)
            } else if value < thresholds::CURRENTS_STRONG_FROM {
                (StatusTier::Moderate, messages::CURRENTS_MODERATE)
            } else {
                (StatusTier::Warning, messages::CURRENTS_STRONG)
            }
        }
        MeasurementId::Waves => {
            if value < thresholds::WAVES_MODERATE_FROM {
                (StatusTier::Safe, messages::WAVES_SMALL)
            } else if value < thresholds::WAVES_LARGE_FROM {
                (StatusTier::Moderate, messages::WAVES_MODERATE)
            } else {
                (StatusTier::Warning, messages::WAVES_LARGE)
            }
        }
        MeasurementId::Safety => {
            if value > thresholds::SAFETY_SAFE_ABOVE {
                (StatusTier::Safe, messages::SAFETY_SAFE)
            } else if value > thresholds::SAFETY_MODERATE_ABOVE {
                (StatusTier::Moderate, messages::SAFETY_MODERATE)
            } else {
                (StatusTier::Warning, messages::SAFETY_CAUTION)
            }
        }
    };
    (status, label, recommendation)
}

/// Round to the reporting precision of `id`
#[must_use]
pub fn round_for(id: MeasurementId, value: f64) -> f64 {
    let factor = 10_f64.powi(id.decimals());
    (value * factor).round() / factor
}

/// Build a classified measurement from a raw value
///
/// The tier comes from the raw value; only the stored number is rounded.
#[must_use]
pub fn measurement_from_value(id: MeasurementId, raw: f64, unit: &str) -> Measurement {
    let (status, label, recommendation) = classify(id, raw);
    Measurement {
        id,
        name: id.display_name().to_owned(),
        value: round_for(id, raw),
        unit: unit.to_owned(),
        status,
        status_text: label.to_owned(),
        recommendation: recommendation.to_owned(),
        icon: id.icon().to_owned(),
    }
}

fn synthesize<R: Rng + ?Sized>(id: MeasurementId, range: Range<f64>, rng: &mut R) -> Measurement {
    measurement_from_value(id, rng.gen_range(range), id.unit())
}

fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

/// Generate the full measurement set
///
/// Externally sourced readings come first, in temperature, wind, visibility
/// order, followed by synthesized replacements for any that were missing and
/// then currents, waves and the safety index.
pub fn generate_readings<R: Rng + ?Sized>(
    external: &ExternalReadings,
    rng: &mut R,
) -> Vec<Measurement> {
    let currents = synthesize(MeasurementId::Currents, thresholds::SYNTH_CURRENTS, rng);
    let waves = synthesize(MeasurementId::Waves, thresholds::SYNTH_WAVES, rng);
    let safety = synthesize(MeasurementId::Safety, thresholds::SYNTH_SAFETY, rng);

    let sourced = [
        (
            MeasurementId::Temperature,
            finite(external.temperature),
            MeasurementId::Temperature.unit(),
            thresholds::SYNTH_TEMPERATURE,
        ),
        (
            MeasurementId::Wind,
            finite(external.wind_speed),
            MeasurementId::Wind.unit(),
            thresholds::SYNTH_WIND,
        ),
        (
            MeasurementId::Visibility,
            finite(external.visibility),
            EXTERNAL_VISIBILITY_UNIT,
            thresholds::SYNTH_VISIBILITY,
        ),
    ];

    let mut readings = Vec::with_capacity(6);
    for (id, value, unit, _) in &sourced {
        if let Some(value) = value {
            readings.push(measurement_from_value(*id, *value, unit));
        }
    }
    for (id, value, _, range) in sourced {
        if value.is_none() {
            readings.push(synthesize(id, range, rng));
        }
    }

    readings.push(currents);
    readings.push(waves);
    readings.push(safety);
    readings
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;

    #[test]
    fn test_temperature_tiers() {
        assert_eq!(classify(MeasurementId::Temperature, 17.9).0, StatusTier::Warning);
        assert_eq!(classify(MeasurementId::Temperature, 18.0).0, StatusTier::Safe);
        assert_eq!(classify(MeasurementId::Temperature, 28.0).0, StatusTier::Safe);
        assert_eq!(classify(MeasurementId::Temperature, 28.1).1, "Warm");
        assert_eq!(classify(MeasurementId::Temperature, 10.0).1, "Cold");
    }

    #[test]
    fn test_wind_tiers() {
        assert_eq!(classify(MeasurementId::Wind, 19.9).0, StatusTier::Safe);
        assert_eq!(classify(MeasurementId::Wind, 20.0).0, StatusTier::Moderate);
        assert_eq!(classify(MeasurementId::Wind, 30.0).0, StatusTier::Warning);
        assert_eq!(classify(MeasurementId::Wind, 30.0).1, "Strong");
    }

    #[test]
    fn test_visibility_tiers() {
        assert_eq!(classify(MeasurementId::Visibility, 20.1).0, StatusTier::Safe);
        assert_eq!(classify(MeasurementId::Visibility, 20.0).0, StatusTier::Moderate);
        assert_eq!(classify(MeasurementId::Visibility, 10.0).0, StatusTier::Warning);
    }

    #[test]
    fn test_currents_waves_and_safety_tiers() {
        assert_eq!(classify(MeasurementId::Currents, 0.99).1, "Calm");
        assert_eq!(classify(MeasurementId::Currents, 1.0).1, "Moderate");
        assert_eq!(classify(MeasurementId::Currents, 2.0).1, "Strong");
        assert_eq!(classify(MeasurementId::Waves, 1.4).0, StatusTier::Safe);
        assert_eq!(classify(MeasurementId::Waves, 1.5).0, StatusTier::Moderate);
        assert_eq!(classify(MeasurementId::Waves, 3.0).1, "Large");
        assert_eq!(classify(MeasurementId::Safety, 70.0).0, StatusTier::Moderate);
        assert_eq!(classify(MeasurementId::Safety, 71.0).0, StatusTier::Safe);
        assert_eq!(classify(MeasurementId::Safety, 40.0).1, "Caution");
    }

    #[test]
    fn test_rounding_precision() {
        assert!((round_for(MeasurementId::Currents, 1.236) - 1.24).abs() < f64::EPSILON);
        assert!((round_for(MeasurementId::Safety, 70.5) - 71.0).abs() < f64::EPSILON);
        assert!((round_for(MeasurementId::Wind, 19.96) - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_classification_uses_unrounded_value() {
        // 28.04 °C displays as 28.0 but is above the warm threshold
        let temperature = measurement_from_value(MeasurementId::Temperature, 28.04, "°C");
        assert!((temperature.value - 28.0).abs() < 1e-9);
        assert_eq!(temperature.status, StatusTier::Warning);
        assert_eq!(temperature.status_text, "Warm");

        // 29.96 km/h displays as 30.0 but is still below strong
        let wind = measurement_from_value(MeasurementId::Wind, 29.96, "km/h");
        assert!((wind.value - 30.0).abs() < 1e-9);
        assert_eq!(wind.status, StatusTier::Moderate);

        let safety = measurement_from_value(MeasurementId::Safety, 70.4, "%");
        assert!((safety.value - 70.0).abs() < 1e-9);
        assert_eq!(safety.status, StatusTier::Safe);
    }

    #[test]
    fn test_external_value_near_threshold_keeps_raw_tier() {
        let external = ExternalReadings {
            temperature: Some(28.04),
            wind_speed: Some(29.96),
            visibility: None,
        };
        let readings = generate_readings(&external, &mut StepRng::new(0, 1));
        assert_eq!(readings[0].id, MeasurementId::Temperature);
        assert_eq!(readings[0].status_text, "Warm");
        assert_eq!(readings[1].id, MeasurementId::Wind);
        assert_eq!(readings[1].status, StatusTier::Moderate);
    }

    #[test]
    fn test_zero_external_values_are_kept() {
        let external = ExternalReadings {
            temperature: None,
            wind_speed: Some(0.0),
            visibility: None,
        };
        let readings = generate_readings(&external, &mut StepRng::new(0, 1));
        assert_eq!(readings[0].id, MeasurementId::Wind);
        assert!(readings[0].value.abs() < f64::EPSILON);
    }

    #[test]
    fn test_non_finite_external_value_is_synthesized() {
        let external = ExternalReadings {
            temperature: Some(f64::NAN),
            wind_speed: None,
            visibility: None,
        };
        let readings = generate_readings(&external, &mut StepRng::new(0, 1));
        let temperature = readings
            .iter()
            .find(|m| m.id == MeasurementId::Temperature)
            .unwrap();
        assert!(temperature.value.is_finite());
        assert_eq!(temperature.unit, "°C");
    }
}
