// ABOUTME: Default configuration values for the OceanSafe server
// ABOUTME: Ports, limits, intervals, security parameters and upstream URLs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 OceanSafe

/// Default HTTP port
pub const DEFAULT_HTTP_PORT: u16 = 8081;

/// Default SQLite database location
pub const DEFAULT_DATABASE_URL: &str = "sqlite:./data/oceansafe.db";

/// JWT lifetime in hours
pub const DEFAULT_JWT_EXPIRY_HOURS: i64 = 24;

/// JWT audience claim
pub const JWT_AUDIENCE: &str = "oceansafe";

/// bcrypt work factor
pub const DEFAULT_BCRYPT_COST: u32 = 12;

/// Minimum password length accepted at registration
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Readings refresh interval in seconds
pub const DEFAULT_REFRESH_INTERVAL_SECS: u64 = 30;

/// History entries returned when no limit is given
pub const DEFAULT_HISTORY_LIMIT: u32 = 10;

/// Largest history page a caller may request
pub const MAX_HISTORY_LIMIT: u32 = 100;

/// Outbound HTTP timeout in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Outbound HTTP connect timeout in seconds
pub const DEFAULT_HTTP_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Geocoder candidates returned for search-as-you-type
pub const GEOCODE_SEARCH_LIMIT: usize = 5;

/// Shortest query the geocoder is asked about
pub const GEOCODE_MIN_QUERY_CHARS: usize = 2;

/// User agent sent to the geocoder
pub const DEFAULT_GEOCODING_USER_AGENT: &str = "OceanSafeApp/1.0";

/// OpenWeather base URL
pub const DEFAULT_OPENWEATHER_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

/// Nominatim base URL
pub const DEFAULT_GEOCODING_BASE_URL: &str = "https://nominatim.openstreetmap.org";

/// NASA POWER base URL
pub const DEFAULT_CLIMATE_BASE_URL: &str = "https://power.larc.nasa.gov";

/// Hours between the current tide and the next change
pub const TIDE_NEXT_CHANGE_HOURS: i64 = 6;
