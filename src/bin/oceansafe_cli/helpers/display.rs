// ABOUTME: Output formatting helpers for oceansafe-cli
// ABOUTME: Every printer reads from PlannerState rather than raw service output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 OceanSafe

use oceansafe_core::models::Measurement;
use oceansafe_intelligence::planner::{ChatRole, PlannerState};
use oceansafe_intelligence::ClimateSummary;
use oceansafe_server::external::ClimateRange;

fn print_measurements(readings: &[Measurement]) {
    for m in readings {
        println!(
            "   {:<20} {:>8} {:<5} {:<9} {}",
            m.name,
            m.value,
            m.unit,
            m.status_text,
            m.recommendation
        );
    }
}

/// Print the latest check held in `state`
pub fn print_result(state: &PlannerState) {
    let Some(result) = &state.result else {
        println!("No conditions checked yet");
        return;
    };

    println!("\n{} at {} on {}", result.activity, result.location, result.date);
    println!("{}", "=".repeat(60));
    println!("Safety score: {}/100", result.score);
    println!("{}", result.overall);
    println!("{}", result.details);

    if let Some(weather) = &result.weather {
        println!("\nWeather:");
        println!("   {:.1}°C, {}", weather.temp, weather.description);
        println!(
            "   Wind {:.1} km/h from {:.0}°, humidity {:.0}%, pressure {:.0} hPa",
            weather.wind_speed, weather.wind_direction, weather.humidity, weather.pressure
        );
    }
    if let Some(tide) = &result.tide {
        println!(
            "Tide: {:.2} m ({:?}) at {}, next {:?} {:.2} m at {}",
            tide.current.height,
            tide.current.kind,
            tide.current.time,
            tide.next.kind,
            tide.next.height,
            tide.next.time
        );
    }

    println!("\nOcean variables:");
    print_measurements(&result.variables);

    println!("\nSafety tips:");
    for tip in &result.safety_tips {
        println!("   - {tip}");
    }
}

/// Print the readings held in `state`
pub fn print_readings(state: &PlannerState) {
    if state.readings.is_empty() {
        println!("No readings yet");
        return;
    }
    println!("\nCurrent readings for {}:", state.location);
    print_measurements(&state.readings);
}

/// Print the climate summary held in `state`
pub fn print_climate(state: &PlannerState, range: ClimateRange) {
    println!(
        "\nClimate for {} ({} to {}):",
        state.location,
        range.start(),
        range.end()
    );
    match state.climate {
        Some(ClimateSummary::Ok(p)) => {
            println!("   Hot days (>32°C):  {}%", p.hot);
            println!("   Cold days (<5°C):  {}%", p.cold);
            println!("   Based on {} days", p.days);
        }
        Some(ClimateSummary::InsufficientData) | None => {
            println!("   Insufficient data for this location and period");
        }
    }
}

/// Print the assistant transcript
pub fn print_transcript(state: &PlannerState) {
    for entry in &state.transcript {
        let who = match entry.role {
            ChatRole::User => "You",
            ChatRole::Assistant => "Assistant",
        };
        println!("{who}: {}\n", entry.content);
    }
}
