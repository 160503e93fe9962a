// ABOUTME: Main library entry point for the OceanSafe conditions API
// ABOUTME: REST server, persistence, external adapters and the CLI share this crate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 OceanSafe

// Crate-level attributes:
// - deny(unsafe_code): Zero-tolerance unsafe policy.
#![deny(unsafe_code)]

//! # OceanSafe Server
//!
//! Backend for planning ocean activities. Given an activity, a place and a
//! date it produces six classified environmental readings, a safety score and
//! an overall verdict, using live weather where available and synthesized
//! values otherwise.
//!
//! ## Features
//!
//! - **Conditions checks**: scoring for surfing, fishing, diving, sailing,
//!   kayaking and swimming
//! - **Live readings**: OpenWeather current weather with per-field fallback
//! - **Geocoding**: Nominatim place search and reverse lookup
//! - **Climate probabilities**: hot/cold day percentages from NASA POWER
//! - **Accounts**: JWT authentication, activity history and breeding-season alerts
//! - **Export**: CSV download of any result
//!
//! ## Architecture
//!
//! - `oceansafe_core`: errors, models and constant tables
//! - `oceansafe_intelligence`: pure generation, scoring and summaries
//! - this crate: configuration, I/O, HTTP routes and binaries
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use oceansafe_server::config::ServerConfig;
//! use oceansafe_server::server::{run, ServerResources};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     let resources = Arc::new(ServerResources::from_config(config).await?);
//!     run(resources).await
//! }
//! ```

/// JWT tokens, password hashing, registration and login
pub mod auth;

/// Environment-based configuration
pub mod config;

/// Server-level constants
pub mod constants;

/// SQLite persistence for users, history and conservation alerts
pub mod database;

/// CSV rendering of conditions results
pub mod export;

/// Weather, geocoding and climate data clients
pub mod external;

/// Structured logging setup and helpers
pub mod logging;

/// Authentication helpers and CORS
pub mod middleware;

/// HTTP route handlers
pub mod routes;

/// Shared resources, router and serve loop
pub mod server;

/// Conditions orchestration and periodic refresh
pub mod services;

/// HTTP client helpers
pub mod utils;

pub use oceansafe_core::{errors, models};
