// ABOUTME: Conditions commands: one-off check, single readings and live watch
// ABOUTME: Results flow through the planner reducer before being printed
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 OceanSafe

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use chrono::{NaiveDate, Utc};
use oceansafe_core::models::{ActivityType, Coordinates};
use oceansafe_intelligence::planner::{reduce, PlannerAction, PlannerState};
use oceansafe_server::export::{export_filename, render_csv};
use oceansafe_server::services::{CheckRequest, ReadingsRefresher};
use tokio::{fs, signal};
use tracing::{info, warn};

use super::CliContext;
use crate::helpers::display::{print_readings, print_result};

/// Arguments of `check`
pub struct CheckArgs {
    pub activity: String,
    pub location: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub date: Option<String>,
    pub export: Option<PathBuf>,
    pub geocode: bool,
}

/// Run one conditions check and print it
pub async fn check(context: &CliContext, args: CheckArgs) -> Result<()> {
    let activity: ActivityType = args.activity.parse()?;
    let date = match args.date.as_deref() {
        Some(raw) => NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
            .with_context(|| format!("Invalid date {raw}, expected YYYY-MM-DD"))?,
        None => Utc::now().date_naive(),
    };

    let mut label = args.location;
    let mut coordinates = Coordinates::from_optional(args.latitude, args.longitude)?;
    if args.geocode && coordinates.is_none() {
        match context.geocoder.geocode(&label).await {
            Some(candidate) => {
                info!("Resolved {label} to {}", candidate.display_name);
                coordinates = Some(candidate.coordinates());
                label = candidate.display_name;
            }
            None => warn!("Could not resolve {label}; readings will be synthesized"),
        }
    }

    let mut state = CliContext::initial_state();
    state = reduce(state, PlannerAction::SelectActivity(activity));
    state = reduce(state, PlannerAction::SetLocation { label, coordinates });
    state = reduce(state, PlannerAction::SetDate(date));
    if !state.can_check() {
        bail!("Please enter a location");
    }

    let result = context
        .conditions
        .check(CheckRequest {
            activity: state.activity,
            location: state.location.clone(),
            date: state.date,
            coordinates: state.coordinates,
        })
        .await;
    state = reduce(state, PlannerAction::ResultReady(Box::new(result)));
    print_result(&state);

    if let Some(path) = args.export {
        export(&state, path).await?;
    }
    Ok(())
}

async fn export(state: &PlannerState, path: PathBuf) -> Result<()> {
    let Some(result) = &state.result else {
        return Ok(());
    };
    let csv = render_csv(result)?;
    let is_dir = fs::metadata(&path).await.is_ok_and(|m| m.is_dir());
    let target = if is_dir {
        path.join(export_filename(result.activity, Utc::now()))
    } else {
        path
    };
    fs::write(&target, csv)
        .await
        .with_context(|| format!("Failed to write {}", target.display()))?;
    println!("Exported to {}", target.display());
    Ok(())
}

/// Print one set of readings
pub async fn readings(
    context: &CliContext,
    latitude: Option<f64>,
    longitude: Option<f64>,
) -> Result<()> {
    let coordinates = Coordinates::from_optional(latitude, longitude)?;
    let readings = context.conditions.current_readings(coordinates).await;
    let state = reduce(
        CliContext::initial_state(),
        PlannerAction::ReadingsRefreshed(readings),
    );
    print_readings(&state);
    Ok(())
}

/// Refresh readings on an interval until Ctrl-C
pub async fn watch(
    context: &CliContext,
    latitude: Option<f64>,
    longitude: Option<f64>,
    interval_secs: Option<u64>,
) -> Result<()> {
    let coordinates = Coordinates::from_optional(latitude, longitude)?;
    let secs = interval_secs.unwrap_or(context.config.app_behavior.readings_refresh_secs);
    if secs == 0 {
        bail!("Refresh interval must be at least one second");
    }

    let refresher = ReadingsRefresher::spawn(
        Arc::clone(&context.conditions),
        coordinates,
        Duration::from_secs(secs),
    );
    let mut updates = refresher.subscribe();
    let mut state = CliContext::initial_state();
    println!("Refreshing every {secs}s, press Ctrl-C to stop");

    let ctrl_c = signal::ctrl_c();
    tokio::pin!(ctrl_c);
    loop {
        tokio::select! {
            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
                let readings = updates.borrow_and_update().clone();
                state = reduce(state, PlannerAction::ReadingsRefreshed(readings));
                print_readings(&state);
            }
            _ = &mut ctrl_c => break,
        }
    }

    refresher.stop().await;
    println!("Stopped");
    Ok(())
}
