// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Threshold tables, user-facing messages, defaults and service identifiers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 OceanSafe

//! Constants module
//!
//! Constants are grouped by domain rather than kept in a single large file.

/// Classification thresholds and synthesized value ranges
pub mod thresholds;

/// Labels, recommendations and other fixed user-facing text
pub mod messages;

/// Default configuration values
pub mod defaults;

/// External service identifiers used in logs and errors
pub mod services {
    /// OpenWeather current-weather API
    pub const OPENWEATHER: &str = "OpenWeather";
    /// Nominatim geocoder
    pub const NOMINATIM: &str = "Nominatim";
    /// NASA POWER climate data API
    pub const NASA_POWER: &str = "NASA POWER";
}

/// API endpoints
pub mod endpoints {
    /// Health check endpoint
    pub const HEALTH_CHECK: &str = "/health";
    /// API base path
    pub const API_BASE: &str = "/api";
}
