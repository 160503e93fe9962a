// ABOUTME: Core data models and types for the OceanSafe conditions API
// ABOUTME: Re-exports ActivityType, Measurement, ActivityResult and persistence records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 OceanSafe

//! # Data Models
//!
//! Data structures shared by the scoring logic, the persistence layer and
//! the HTTP surface.
//!
//! ## Core Models
//!
//! - `ActivityType`: The six supported ocean activities
//! - `Measurement`: One classified environmental reading
//! - `ActivityResult`: Immutable outcome of a conditions check
//! - `WeatherSnapshot` / `TideSnapshot`: Optional context attached to a result
//! - `User`, `HistoryRecord`, `FishSpecies`, `ConservationAlert`: stored records

mod activity;
mod conditions;
mod conservation;
mod history;
mod measurement;
mod user;

// Activity domain
pub use activity::ActivityType;

// Measurement domain
pub use measurement::{Measurement, MeasurementId, StatusTier};

// Conditions domain
pub use conditions::{
    ActivityResult, Coordinates, ExternalReadings, TideKind, TideReading, TideSnapshot,
    WeatherSnapshot,
};

// Persistence domain
pub use conservation::{AlertDraft, AlertType, ConservationAlert, FishSpecies};
pub use history::HistoryRecord;
pub use user::User;
