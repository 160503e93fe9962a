// ABOUTME: Route module organization for the OceanSafe HTTP API
// ABOUTME: One struct per domain exposing routes(resources) -> axum::Router
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 OceanSafe

//! Route module for the OceanSafe API
//!
//! Each domain module contains only route definitions and thin handlers that
//! delegate to services, stores and the intelligence crate.

/// Assistant routes
pub mod assistant;
/// Registration, login and current-user routes
pub mod auth;
/// Climate probability routes
pub mod climate;
/// Readings, conditions check and CSV export routes
pub mod conditions;
/// Species catalogue and breeding alert routes
pub mod conservation;
/// Health check and readiness routes
pub mod health;
/// Activity history routes
pub mod history;
/// Place search and reverse geocoding routes
pub mod locations;

pub use assistant::AssistantRoutes;
pub use auth::AuthRoutes;
pub use climate::ClimateRoutes;
pub use conditions::ConditionsRoutes;
pub use conservation::ConservationRoutes;
pub use health::HealthRoutes;
pub use history::HistoryRoutes;
pub use locations::LocationRoutes;
