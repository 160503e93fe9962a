// ABOUTME: Climate statistics summarizer over daily mean temperatures
// ABOUTME: Reports hot and cold day percentages, or an explicit insufficient-data marker
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 OceanSafe

use oceansafe_core::constants::thresholds;
use serde::{Deserialize, Serialize};

/// Percentages of hot and cold days in a series
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClimateProbabilities {
    /// Percent of days above 32 °C
    pub hot: u32,
    /// Percent of days below 5 °C
    pub cold: u32,
    /// Days the percentages are based on
    pub days: u32,
}

/// Outcome of summarizing a series
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ClimateSummary {
    /// At least one usable day
    Ok(ClimateProbabilities),
    /// Nothing to summarize
    InsufficientData,
}

fn percent(count: u32, total: u32) -> u32 {
    (200 * count + total) / (2 * total)
}

/// Summarize daily temperatures; non-finite entries are ignored
#[must_use]
pub fn summarize_temperatures(temperatures: &[f64]) -> ClimateSummary {
    let usable: Vec<f64> = temperatures
        .iter()
        .copied()
        .filter(|t| t.is_finite())
        .collect();
    let Ok(days) = u32::try_from(usable.len()) else {
        return ClimateSummary::InsufficientData;
    };
    if days == 0 {
        return ClimateSummary::InsufficientData;
    }

    let count = |pred: fn(f64) -> bool| {
        u32::try_from(usable.iter().filter(|&&t| pred(t)).count()).unwrap_or(days)
    };
    let hot = count(|t| t > thresholds::HOT_DAY_ABOVE_C);
    let cold = count(|t| t < thresholds::COLD_DAY_BELOW_C);

    ClimateSummary::Ok(ClimateProbabilities {
        hot: percent(hot, days),
        cold: percent(cold, days),
        days,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_series_is_insufficient() {
        assert_eq!(summarize_temperatures(&[]), ClimateSummary::InsufficientData);
        assert_eq!(
            summarize_temperatures(&[f64::NAN]),
            ClimateSummary::InsufficientData
        );
    }

    #[test]
    fn test_ten_days_three_hot() {
        let series = [33.0, 34.5, 40.0, 20.0, 21.0, 22.0, 4.0, 25.0, 32.0, 18.0];
        let ClimateSummary::Ok(p) = summarize_temperatures(&series) else {
            panic!("expected probabilities");
        };
        assert_eq!(p.hot, 30);
        assert_eq!(p.cold, 10);
        assert_eq!(p.days, 10);
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(summarize_temperatures(&[])).unwrap();
        assert_eq!(json["status"], "insufficient_data");

        let json = serde_json::to_value(summarize_temperatures(&[40.0])).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["hot"], 100);
    }
}
