// ABOUTME: OceanSafe CLI - command-line front end for conditions checks and lookups
// ABOUTME: Drives a PlannerState through the reducer and renders it to the terminal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 OceanSafe
//!
//! Usage:
//! ```bash
//! # Check diving conditions at a named place, resolving coordinates first
//! oceansafe-cli check --activity diving --location "La Jolla, CA" --geocode
//!
//! # Check at an explicit coordinate and save the CSV export
//! oceansafe-cli check --activity surfing --location Malibu \
//!     --latitude 34.03 --longitude -118.78 --export ./exports
//!
//! # Watch live readings until Ctrl-C
//! oceansafe-cli watch --latitude 32.85 --longitude -117.27 --interval-secs 30
//!
//! # Ask the assistant
//! oceansafe-cli ask "is it safe for beginners today?"
//!
//! # Hot/cold day probabilities for last year
//! oceansafe-cli climate --latitude 32.85 --longitude -117.27
//!
//! # Search places
//! oceansafe-cli search "Santa Cruz"
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use oceansafe_server::logging::LoggingConfig;
use tracing::debug;

use commands::CliContext;

#[derive(Parser)]
#[command(
    name = "oceansafe-cli",
    about = "OceanSafe command-line client",
    long_about = "Check ocean conditions for an activity, watch live readings, ask the safety assistant and look up climate probabilities."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Score conditions for an activity at a place and date
    Check {
        /// Activity: surfing, fishing, diving, sailing, kayaking or swimming
        #[arg(long)]
        activity: String,

        /// Location label
        #[arg(long)]
        location: String,

        /// Latitude in degrees
        #[arg(long, requires = "longitude", allow_hyphen_values = true)]
        latitude: Option<f64>,

        /// Longitude in degrees
        #[arg(long, requires = "latitude", allow_hyphen_values = true)]
        longitude: Option<f64>,

        /// Planned date, YYYY-MM-DD (defaults to today)
        #[arg(long)]
        date: Option<String>,

        /// Write the CSV export to this file or directory
        #[arg(long)]
        export: Option<PathBuf>,

        /// Resolve the location to coordinates before checking
        #[arg(long)]
        geocode: bool,
    },

    /// Print one set of current readings
    Readings {
        /// Latitude in degrees
        #[arg(long, requires = "longitude", allow_hyphen_values = true)]
        latitude: Option<f64>,

        /// Longitude in degrees
        #[arg(long, requires = "latitude", allow_hyphen_values = true)]
        longitude: Option<f64>,
    },

    /// Refresh readings periodically until Ctrl-C
    Watch {
        /// Latitude in degrees
        #[arg(long, requires = "longitude", allow_hyphen_values = true)]
        latitude: Option<f64>,

        /// Longitude in degrees
        #[arg(long, requires = "latitude", allow_hyphen_values = true)]
        longitude: Option<f64>,

        /// Seconds between refreshes (defaults to READINGS_REFRESH_SECS)
        #[arg(long)]
        interval_secs: Option<u64>,
    },

    /// Ask the ocean safety assistant
    Ask {
        /// Question text
        message: String,
    },

    /// Hot and cold day probabilities for a point
    Climate {
        /// Latitude in degrees
        #[arg(long, allow_hyphen_values = true)]
        latitude: f64,

        /// Longitude in degrees
        #[arg(long, allow_hyphen_values = true)]
        longitude: f64,

        /// First day, YYYYMMDD
        #[arg(long)]
        start: Option<String>,

        /// Last day, YYYYMMDD
        #[arg(long)]
        end: Option<String>,
    },

    /// Search for places by name
    Search {
        /// Free-text query
        query: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    LoggingConfig::for_cli(cli.verbose).init()?;

    let context = CliContext::from_env()?;
    debug!("CLI context ready");

    match cli.command {
        Command::Check {
            activity,
            location,
            latitude,
            longitude,
            date,
            export,
            geocode,
        } => {
            commands::conditions::check(
                &context,
                commands::conditions::CheckArgs {
                    activity,
                    location,
                    latitude,
                    longitude,
                    date,
                    export,
                    geocode,
                },
            )
            .await?;
        }
        Command::Readings {
            latitude,
            longitude,
        } => {
            commands::conditions::readings(&context, latitude, longitude).await?;
        }
        Command::Watch {
            latitude,
            longitude,
            interval_secs,
        } => {
            commands::conditions::watch(&context, latitude, longitude, interval_secs).await?;
        }
        Command::Ask { message } => {
            commands::assistant::ask(message)?;
        }
        Command::Climate {
            latitude,
            longitude,
            start,
            end,
        } => {
            commands::climate::probabilities(&context, latitude, longitude, start, end).await?;
        }
        Command::Search { query } => {
            commands::locations::search(&context, &query).await;
        }
    }

    Ok(())
}
