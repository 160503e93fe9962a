// ABOUTME: External API client modules (weather, geocoding, climate data)
// ABOUTME: Each client sits behind a trait so services can run against stubs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 OceanSafe

//! External API Clients
//!
//! None of these calls are retried or cached. Callers decide the fallback.

pub mod climate;
pub mod geocoding;
pub mod weather;

// Re-export commonly used types
pub use climate::{ClimateDataSource, ClimateRange, ClimateSeries, NasaPowerClient};
pub use geocoding::{GeoCandidate, Geocoder, NominatimClient};
pub use weather::{CurrentWeather, OpenWeatherClient, WeatherSource};
