// ABOUTME: Conditions-check models including ActivityResult and context snapshots
// ABOUTME: Coordinates validation, weather and tide snapshots, external readings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 OceanSafe

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{ActivityType, Measurement};
use crate::errors::{AppError, AppResult};

/// A geographic coordinate in decimal degrees
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Coordinates {
    /// Latitude in degrees, -90..=90
    pub latitude: f64,
    /// Longitude in degrees, -180..=180
    pub longitude: f64,
}

impl Coordinates {
    /// Build a coordinate, rejecting values outside the valid range
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` when either component is not finite or out of range
    pub fn new(latitude: f64, longitude: f64) -> AppResult<Self> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(AppError::out_of_range(format!(
                "Latitude must be between -90 and 90, got {latitude}"
            )));
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(AppError::out_of_range(format!(
                "Longitude must be between -180 and 180, got {longitude}"
            )));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Build a coordinate from an optional pair; both or neither must be set
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when only one component is given, or the range
    /// error from [`Self::new`]
    pub fn from_optional(latitude: Option<f64>, longitude: Option<f64>) -> AppResult<Option<Self>> {
        match (latitude, longitude) {
            (Some(lat), Some(lon)) => Self::new(lat, lon).map(Some),
            (None, None) => Ok(None),
            _ => Err(AppError::invalid_input(
                "Latitude and longitude must be provided together",
            )),
        }
    }
}

/// Readings taken from the weather provider; `None` means absent or malformed
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct ExternalReadings {
    /// Air temperature in °C
    pub temperature: Option<f64>,
    /// Wind speed in km/h
    pub wind_speed: Option<f64>,
    /// Visibility in km
    pub visibility: Option<f64>,
}

impl ExternalReadings {
    /// True when no field is available
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.temperature.is_none() && self.wind_speed.is_none() && self.visibility.is_none()
    }
}

/// Current weather at a coordinate
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeatherSnapshot {
    /// Temperature in °C
    pub temp: f64,
    /// Short description, e.g. "scattered clouds"
    pub description: String,
    /// Wind speed in km/h
    pub wind_speed: f64,
    /// Wind direction in degrees
    pub wind_direction: f64,
    /// Relative humidity in percent
    pub humidity: f64,
    /// Pressure in hPa
    pub pressure: f64,
    /// Cloud cover in percent
    pub clouds: f64,
    /// Visibility in km
    pub visibility: f64,
}

/// High or low water
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TideKind {
    /// High tide
    High,
    /// Low tide
    Low,
}

/// Tide height at one instant
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TideReading {
    /// Height in metres, two decimals
    pub height: f64,
    /// High or low
    #[serde(rename = "type")]
    pub kind: TideKind,
    /// Time of day, `HH:MM:SS`
    pub time: String,
}

/// Current tide plus the next change
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TideSnapshot {
    /// Tide now
    #[serde(flatten)]
    pub current: TideReading,
    /// Tide at the next change
    pub next: TideReading,
}

/// Immutable outcome of one conditions check
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActivityResult {
    /// Chosen activity
    pub activity: ActivityType,
    /// Location label as entered or resolved
    pub location: String,
    /// Planned date
    pub date: NaiveDate,
    /// Coordinate used for external lookups, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
    /// Percentage of readings in the safe tier
    pub score: u32,
    /// Overall status sentence
    pub overall: String,
    /// Activity-specific details sentence
    pub details: String,
    /// Safety tips in display order
    pub safety_tips: Vec<String>,
    /// Readings the score was computed from
    pub variables: Vec<Measurement>,
    /// Weather at the coordinate
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weather: Option<WeatherSnapshot>,
    /// Tide at the coordinate
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tide: Option<TideSnapshot>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinates_range() {
        assert!(Coordinates::new(90.0, -180.0).is_ok());
        assert!(Coordinates::new(90.1, 0.0).is_err());
        assert!(Coordinates::new(0.0, 180.5).is_err());
        assert!(Coordinates::new(f64::NAN, 0.0).is_err());
    }

    #[test]
    fn test_coordinates_must_be_paired() {
        assert!(Coordinates::from_optional(Some(1.0), None).is_err());
        assert_eq!(Coordinates::from_optional(None, None).unwrap(), None);
        assert!(Coordinates::from_optional(Some(1.0), Some(2.0))
            .unwrap()
            .is_some());
    }

    #[test]
    fn test_tide_snapshot_shape() {
        let tide = TideSnapshot {
            current: TideReading {
                height: 1.6,
                kind: TideKind::High,
                time: "06:00:00".to_owned(),
            },
            next: TideReading {
                height: 0.8,
                kind: TideKind::Low,
                time: "12:00:00".to_owned(),
            },
        };
        let value = serde_json::to_value(&tide).unwrap();
        assert_eq!(value["type"], "high");
        assert_eq!(value["next"]["type"], "low");
        assert_eq!(value["height"], 1.6);
    }
}
