// ABOUTME: Configuration management module for centralized server settings
// ABOUTME: Re-exports the environment-driven ServerConfig and its sections
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 OceanSafe

//! Configuration module
//!
//! All configuration comes from environment variables (optionally seeded from
//! a `.env` file). There are no configuration files.

/// Environment and server configuration
pub mod environment;

pub use environment::{
    AppBehaviorConfig, AuthConfig, ClimateServiceConfig, DatabaseConfig, DatabaseUrl,
    Environment, ExternalServicesConfig, GeocodingServiceConfig, ServerConfig,
    WeatherServiceConfig,
};
