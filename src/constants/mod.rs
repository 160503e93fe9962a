// ABOUTME: Server-level constants layered on top of the core constant tables
// ABOUTME: Service names, environment variable keys and HTTP header values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 OceanSafe

//! # Constants Module
//!
//! Server-side constants. Domain tables (thresholds, messages, defaults) live
//! in `oceansafe_core::constants` and are re-exported here.

pub use oceansafe_core::constants::{defaults, endpoints, messages, services, thresholds};

/// Service names used in structured logs
pub mod service_names {
    /// HTTP server
    pub const OCEANSAFE_SERVER: &str = "oceansafe_server";
    /// Command-line client
    pub const OCEANSAFE_CLI: &str = "oceansafe_cli";
}

/// Environment variable names read by `ServerConfig::from_env`
pub mod env_keys {
    /// Bind address
    pub const HOST: &str = "HOST";
    /// HTTP port
    pub const HTTP_PORT: &str = "HTTP_PORT";
    /// SQLite connection string
    pub const DATABASE_URL: &str = "DATABASE_URL";
    /// JWT signing secret
    pub const JWT_SECRET: &str = "JWT_SECRET";
    /// JWT lifetime in hours
    pub const JWT_EXPIRY_HOURS: &str = "JWT_EXPIRY_HOURS";
    /// bcrypt work factor
    pub const BCRYPT_COST: &str = "BCRYPT_COST";
    /// OpenWeather API key
    pub const OPENWEATHER_API_KEY: &str = "OPENWEATHER_API_KEY";
    /// OpenWeather base URL
    pub const OPENWEATHER_BASE_URL: &str = "OPENWEATHER_BASE_URL";
    /// Weather lookups on/off
    pub const WEATHER_SERVICE_ENABLED: &str = "WEATHER_SERVICE_ENABLED";
    /// Geocoder base URL
    pub const GEOCODING_BASE_URL: &str = "GEOCODING_BASE_URL";
    /// Geocoder on/off
    pub const GEOCODING_SERVICE_ENABLED: &str = "GEOCODING_SERVICE_ENABLED";
    /// Geocoder User-Agent
    pub const GEOCODING_USER_AGENT: &str = "GEOCODING_USER_AGENT";
    /// Climate data base URL
    pub const CLIMATE_BASE_URL: &str = "CLIMATE_BASE_URL";
    /// Climate data on/off
    pub const CLIMATE_SERVICE_ENABLED: &str = "CLIMATE_SERVICE_ENABLED";
    /// Outbound request timeout
    pub const HTTP_TIMEOUT_SECS: &str = "HTTP_TIMEOUT_SECS";
    /// Readings refresh interval
    pub const READINGS_REFRESH_SECS: &str = "READINGS_REFRESH_SECS";
    /// Default history page size
    pub const HISTORY_DEFAULT_LIMIT: &str = "HISTORY_DEFAULT_LIMIT";
    /// Maximum history page size
    pub const HISTORY_MAX_LIMIT: &str = "HISTORY_MAX_LIMIT";
    /// Allowed CORS origins, comma separated or `*`
    pub const CORS_ORIGINS: &str = "CORS_ORIGINS";
    /// Deployment environment
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
}

/// HTTP header values
pub mod http_headers {
    /// CSV export content type
    pub const CSV_CONTENT_TYPE: &str = "text/csv; charset=utf-8";
    /// Bearer scheme prefix
    pub const BEARER_PREFIX: &str = "Bearer ";
    /// Request correlation header set and echoed by the router
    pub const REQUEST_ID: &str = "x-request-id";
}
