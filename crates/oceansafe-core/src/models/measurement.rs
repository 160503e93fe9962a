// ABOUTME: Measurement model for classified ocean readings
// ABOUTME: Defines MeasurementId, StatusTier and the Measurement record
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 OceanSafe

use serde::{Deserialize, Serialize};

/// Identifier of a reading; exactly one of each per generated set
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MeasurementId {
    /// Sea surface temperature
    Temperature,
    /// Wind speed
    Wind,
    /// Visibility
    Visibility,
    /// Ocean currents
    Currents,
    /// Wave height
    Waves,
    /// Aggregate safety index
    Safety,
}

impl MeasurementId {
    /// Human-readable name
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Temperature => "Sea Surface Temperature",
            Self::Wind => "Wind Speed",
            Self::Visibility => "Visibility",
            Self::Currents => "Ocean Currents",
            Self::Waves => "Wave Height",
            Self::Safety => "Overall Safety Index",
        }
    }

    /// Unit of a synthesized reading
    #[must_use]
    pub const fn unit(self) -> &'static str {
        match self {
            Self::Temperature => "°C",
            Self::Wind => "km/h",
            Self::Visibility | Self::Waves => "m",
            Self::Currents => "m/s",
            Self::Safety => "%",
        }
    }

    /// Icon hint for clients
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Temperature => "thermometer",
            Self::Wind => "wind",
            Self::Visibility => "eye",
            Self::Currents => "waves",
            Self::Waves => "activity",
            Self::Safety => "shield",
        }
    }

    /// Decimal places the reported value is rounded to
    #[must_use]
    pub const fn decimals(self) -> i32 {
        match self {
            Self::Currents => 2,
            Self::Safety => 0,
            Self::Temperature | Self::Wind | Self::Visibility | Self::Waves => 1,
        }
    }
}

/// Ordinal status tier assigned by static thresholds
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum StatusTier {
    /// Favourable
    Safe,
    /// Acceptable with care
    Moderate,
    /// Unfavourable
    Warning,
    /// Dangerous (reserved, no current table produces it)
    Danger,
}

/// One observed or synthesized environmental reading
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Measurement {
    /// Which reading this is
    pub id: MeasurementId,
    /// Display name
    pub name: String,
    /// Numeric value, already rounded
    pub value: f64,
    /// Unit string
    pub unit: String,
    /// Classification tier
    pub status: StatusTier,
    /// Tier label such as "Calm" or "Warm"
    pub status_text: String,
    /// Recommendation tied to the tier
    pub recommendation: String,
    /// Icon hint
    pub icon: String,
}

impl Measurement {
    /// Whether this reading counts towards the safety score
    #[must_use]
    pub fn is_safe(&self) -> bool {
        self.status == StatusTier::Safe
    }
}
