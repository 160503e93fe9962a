// ABOUTME: Tide source trait and the sinusoidal time-of-day approximation
// ABOUTME: A real tide provider can implement TideSource without touching the scorer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 OceanSafe

use chrono::{DateTime, Duration, Timelike, Utc};
use oceansafe_core::constants::defaults::TIDE_NEXT_CHANGE_HOURS;
use oceansafe_core::models::{Coordinates, TideKind, TideReading, TideSnapshot};
use std::f64::consts::PI;

/// Anything that can report the tide at a place and time
pub trait TideSource: Send + Sync {
    /// Tide at `coordinates` at instant `at`, if known
    fn tide_at(&self, coordinates: Coordinates, at: DateTime<Utc>) -> Option<TideSnapshot>;
}

/// Placeholder tide model: a 24-hour sine wave around 1.2 m
///
/// This is not tidal data. It ignores location entirely.
#[derive(Debug, Clone, Copy, Default)]
pub struct SinusoidalTide;

const MEAN_HEIGHT_M: f64 = 1.2;
const AMPLITUDE_M: f64 = 0.8;
const HIGH_ABOVE_M: f64 = 1.5;

impl SinusoidalTide {
    /// Height for an hour of day
    #[must_use]
    pub fn height_at_hour(hour: u32) -> f64 {
        MEAN_HEIGHT_M + (f64::from(hour) / 24.0 * PI * 2.0).sin() * AMPLITUDE_M
    }

    fn reading(at: DateTime<Utc>) -> TideReading {
        let height = Self::height_at_hour(at.hour());
        TideReading {
            height: (height * 100.0).round() / 100.0,
            kind: if height > HIGH_ABOVE_M {
                TideKind::High
            } else {
                TideKind::Low
            },
            time: at.format("%H:%M:%S").to_string(),
        }
    }
}

impl TideSource for SinusoidalTide {
    fn tide_at(&self, _coordinates: Coordinates, at: DateTime<Utc>) -> Option<TideSnapshot> {
        let next = at + Duration::hours(TIDE_NEXT_CHANGE_HOURS);
        Some(TideSnapshot {
            current: Self::reading(at),
            next: Self::reading(next),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn coords() -> Coordinates {
        Coordinates::new(34.0, -118.5).unwrap()
    }

    #[test]
    fn test_six_am_is_high_tide() {
        let at = Utc.with_ymd_and_hms(2025, 6, 1, 6, 15, 0).unwrap();
        let tide = SinusoidalTide.tide_at(coords(), at).unwrap();

        assert!((tide.current.height - 2.0).abs() < 1e-9);
        assert_eq!(tide.current.kind, TideKind::High);
        assert_eq!(tide.current.time, "06:15:00");

        // noon: sin(pi) is zero
        assert!((tide.next.height - 1.2).abs() < 1e-9);
        assert_eq!(tide.next.kind, TideKind::Low);
        assert_eq!(tide.next.time, "12:15:00");
    }

    #[test]
    fn test_next_change_wraps_past_midnight() {
        let at = Utc.with_ymd_and_hms(2025, 6, 1, 20, 0, 0).unwrap();
        let tide = SinusoidalTide.tide_at(coords(), at).unwrap();
        assert_eq!(tide.next.time, "02:00:00");
    }
}
