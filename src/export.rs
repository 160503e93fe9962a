// ABOUTME: CSV rendering of a conditions result for download or saving to disk
// ABOUTME: Output depends only on the result, so repeated exports are byte-identical
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 OceanSafe

//! # CSV export
//!
//! Layout, one record per line:
//!
//! ```text
//! Metric,Value,Status,Recommendation
//! "Activity","surfing","",""
//! "Location","Malibu","",""
//! "Date","2025-06-01","",""
//! "Overall Score","86","Excellent conditions for surfing",""
//! "","","",""
//! "Ocean Variables","","",""
//! "Sea Surface Temperature","21.5 °C","Comfortable","Ideal temperature for water activities"
//! ...
//! "","","",""
//! "Safety Tips","","",""
//! "","Always check local weather updates before heading out","",""
//! ```

use chrono::{DateTime, Utc};
use csv::{QuoteStyle, Terminator, WriterBuilder};
use oceansafe_core::errors::{AppError, AppResult};
use oceansafe_core::models::{ActivityResult, ActivityType};

const HEADER: &str = "Metric,Value,Status,Recommendation\n";

/// Render a result as CSV
///
/// The header line is bare; every following cell is quoted.
///
/// # Errors
///
/// Returns a serialization error if the in-memory writer fails
pub fn render_csv(result: &ActivityResult) -> AppResult<String> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(HEADER.as_bytes().to_vec());

    let score = result.score.to_string();
    let date = result.date.format("%Y-%m-%d").to_string();
    let mut rows: Vec<[String; 4]> = vec![
        row("Activity", result.activity.as_str(), ""),
        row("Location", &result.location, ""),
        row("Date", &date, ""),
        row("Overall Score", &score, &result.overall),
        row("", "", ""),
        row("Ocean Variables", "", ""),
    ];
    rows.extend(result.variables.iter().map(|m| {
        [
            m.name.clone(),
            format!("{} {}", m.value, m.unit),
            m.status_text.clone(),
            m.recommendation.clone(),
        ]
    }));
    rows.push(row("", "", ""));
    rows.push(row("Safety Tips", "", ""));
    rows.extend(result.safety_tips.iter().map(|tip| row("", tip, "")));

    for record in &rows {
        writer
            .write_record(record)
            .map_err(|e| AppError::serialization(format!("CSV write failed: {e}")))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| AppError::serialization(format!("CSV flush failed: {e}")))?;
    String::from_utf8(bytes)
        .map_err(|e| AppError::serialization(format!("CSV is not valid UTF-8: {e}")))
}

fn row(metric: &str, value: &str, status: &str) -> [String; 4] {
    [
        metric.to_owned(),
        value.to_owned(),
        status.to_owned(),
        String::new(),
    ]
}

/// Download name, `ocean-conditions-{activity}-{millis}.csv`
#[must_use]
pub fn export_filename(activity: ActivityType, at: DateTime<Utc>) -> String {
    format!(
        "ocean-conditions-{}-{}.csv",
        activity.as_str(),
        at.timestamp_millis()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone};
    use oceansafe_core::constants::messages::SAFETY_TIPS;
    use oceansafe_core::models::{Measurement, MeasurementId, StatusTier};
    use oceansafe_intelligence::{measurement_from_value, overall_status};

    fn sample() -> ActivityResult {
        ActivityResult {
            activity: ActivityType::Surfing,
            location: "Malibu, \"Surfrider\"".to_owned(),
            date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            coordinates: None,
            score: 67,
            overall: "Good conditions with minor concerns".to_owned(),
            details: "Large waves recommended, moderate currents acceptable".to_owned(),
            safety_tips: vec!["Never swim alone".to_owned()],
            variables: vec![Measurement {
                id: MeasurementId::Wind,
                name: "Wind Speed".to_owned(),
                value: 20.0,
                unit: "km/h".to_owned(),
                status: StatusTier::Moderate,
                status_text: "Moderate".to_owned(),
                recommendation: "Manageable with proper equipment".to_owned(),
                icon: "wind".to_owned(),
            }],
            weather: None,
            tide: None,
        }
    }

    #[test]
    fn test_render_layout() {
        let csv = render_csv(&sample()).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "Metric,Value,Status,Recommendation");
        assert_eq!(lines[1], r#""Activity","surfing","","""#);
        assert_eq!(lines[2], r#""Location","Malibu, ""Surfrider""","","""#);
        assert_eq!(lines[3], r#""Date","2025-06-01","","""#);
        assert_eq!(
            lines[4],
            r#""Overall Score","67","Good conditions with minor concerns","""#
        );
        assert_eq!(lines[5], r#""","","","""#);
        assert_eq!(lines[6], r#""Ocean Variables","","","""#);
        assert_eq!(
            lines[7],
            r#""Wind Speed","20 km/h","Moderate","Manageable with proper equipment""#
        );
        assert_eq!(lines[9], r#""Safety Tips","","","""#);
        assert_eq!(lines[10], r#""","Never swim alone","","""#);
        assert_eq!(lines.len(), 11);
    }

    #[test]
    fn test_render_with_generated_rows() {
        let mut result = sample();
        result.location = "Malibu".to_owned();
        result.score = 86;
        result.overall = overall_status(86, ActivityType::Surfing);
        result.variables = vec![measurement_from_value(
            MeasurementId::Temperature,
            21.5,
            MeasurementId::Temperature.unit(),
        )];
        result.safety_tips = SAFETY_TIPS.iter().map(|tip| (*tip).to_owned()).collect();

        let csv = render_csv(&result).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(
            lines[4],
            r#""Overall Score","86","Excellent conditions for surfing","""#
        );
        assert_eq!(
            lines[7],
            concat!(
                r#""Sea Surface Temperature","21.5 °C","#,
                r#""Comfortable","Ideal temperature for water activities""#
            )
        );
        assert_eq!(
            lines[10],
            r#""","Always check local weather updates before heading out","","""#
        );
    }

    #[test]
    fn test_render_is_stable() {
        let result = sample();
        assert_eq!(render_csv(&result).unwrap(), render_csv(&result).unwrap());
    }

    #[test]
    fn test_export_filename() {
        let at = Utc.timestamp_millis_opt(1_700_000_000_123).unwrap();
        assert_eq!(
            export_filename(ActivityType::Diving, at),
            "ocean-conditions-diving-1700000000123.csv"
        );
    }
}
