// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Parses environment variables into a validated ServerConfig
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 OceanSafe

//! Environment-based configuration management

use crate::constants::{defaults, env_keys};
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::error::Error as StdError;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::{info, warn};

/// Environment type for logging and security settings
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Type-safe database location
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum DatabaseUrl {
    /// SQLite database with file path
    SQLite {
        /// Database file
        path: PathBuf,
    },
    /// In-memory SQLite (for testing)
    Memory,
}

impl DatabaseUrl {
    /// Parse from string; anything that is not `sqlite::memory:` is a file path
    #[must_use]
    pub fn parse_url(s: &str) -> Self {
        let path_str = s.strip_prefix("sqlite:").unwrap_or(s);
        let path_str = path_str.strip_prefix("//").unwrap_or(path_str);
        if path_str == ":memory:" {
            Self::Memory
        } else {
            Self::SQLite {
                path: PathBuf::from(path_str),
            }
        }
    }

    /// Convert to connection string
    #[must_use]
    pub fn to_connection_string(&self) -> String {
        match self {
            Self::SQLite { path } => format!("sqlite:{}", path.display()),
            Self::Memory => "sqlite::memory:".to_owned(),
        }
    }

    /// Check if this is an in-memory database
    #[must_use]
    pub const fn is_memory(&self) -> bool {
        matches!(self, Self::Memory)
    }
}

impl Default for DatabaseUrl {
    fn default() -> Self {
        Self::parse_url(defaults::DEFAULT_DATABASE_URL)
    }
}

impl fmt::Display for DatabaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_connection_string())
    }
}

/// Complete server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address
    pub host: String,
    /// HTTP API port
    pub http_port: u16,
    /// Deployment environment
    pub environment: Environment,
    /// Database configuration
    pub database: DatabaseConfig,
    /// Authentication configuration
    pub auth: AuthConfig,
    /// External service configuration
    pub external_services: ExternalServicesConfig,
    /// Application behavior settings
    pub app_behavior: AppBehaviorConfig,
    /// CORS allowed origins
    pub cors_origins: Vec<String>,
}

/// Database settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// SQLite location
    pub url: DatabaseUrl,
}

/// Authentication settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// JWT signing secret; a random one is generated when absent
    #[serde(skip)]
    pub jwt_secret: Option<String>,
    /// JWT expiry time in hours
    pub jwt_expiry_hours: i64,
    /// bcrypt work factor
    pub bcrypt_cost: u32,
}

/// External HTTP collaborators
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExternalServicesConfig {
    /// Weather service configuration
    pub weather: WeatherServiceConfig,
    /// Geocoding service configuration
    pub geocoding: GeocodingServiceConfig,
    /// Climate data service configuration
    pub climate: ClimateServiceConfig,
    /// Request timeout for every outbound call
    pub http_timeout_secs: u64,
}

/// OpenWeather settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherServiceConfig {
    /// OpenWeather API key
    #[serde(skip)]
    pub api_key: Option<String>,
    /// Weather service base URL
    pub base_url: String,
    /// Enable weather service
    pub enabled: bool,
}

impl WeatherServiceConfig {
    /// Enabled and has a key
    #[must_use]
    pub const fn is_usable(&self) -> bool {
        self.enabled && self.api_key.is_some()
    }
}

/// Nominatim settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocodingServiceConfig {
    /// Geocoding service base URL
    pub base_url: String,
    /// Enable geocoding service
    pub enabled: bool,
    /// User-Agent sent with every request
    pub user_agent: String,
}

/// NASA POWER settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClimateServiceConfig {
    /// Climate data base URL
    pub base_url: String,
    /// Enable climate data service
    pub enabled: bool,
}

/// Behaviour knobs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppBehaviorConfig {
    /// Seconds between readings refreshes
    pub readings_refresh_secs: u64,
    /// History entries returned when no limit is given
    pub history_default_limit: u32,
    /// Largest history page a caller may request
    pub history_max_limit: u32,
}

impl ServerConfig {
    /// Load configuration from environment variables, reading `.env` first if present
    ///
    /// # Errors
    ///
    /// Returns an error if a variable cannot be parsed or validation fails
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        if let Err(e) = dotenvy::dotenv() {
            warn!("No .env file found or failed to load: {}", e);
        }

        let config = Self {
            host: env_var_or(env_keys::HOST, "0.0.0.0"),
            http_port: parse_env(env_keys::HTTP_PORT, defaults::DEFAULT_HTTP_PORT)?,
            environment: Environment::from_str_or_default(&env_var_or(
                env_keys::ENVIRONMENT,
                "development",
            )),
            database: DatabaseConfig {
                url: DatabaseUrl::parse_url(&env_var_or(
                    env_keys::DATABASE_URL,
                    defaults::DEFAULT_DATABASE_URL,
                )),
            },
            auth: AuthConfig {
                jwt_secret: non_empty_env(env_keys::JWT_SECRET),
                jwt_expiry_hours: parse_env(
                    env_keys::JWT_EXPIRY_HOURS,
                    defaults::DEFAULT_JWT_EXPIRY_HOURS,
                )?,
                bcrypt_cost: parse_env(env_keys::BCRYPT_COST, defaults::DEFAULT_BCRYPT_COST)?,
            },
            external_services: ExternalServicesConfig {
                weather: WeatherServiceConfig {
                    api_key: non_empty_env(env_keys::OPENWEATHER_API_KEY),
                    base_url: env_var_or(
                        env_keys::OPENWEATHER_BASE_URL,
                        defaults::DEFAULT_OPENWEATHER_BASE_URL,
                    ),
                    enabled: parse_env(env_keys::WEATHER_SERVICE_ENABLED, true)?,
                },
                geocoding: GeocodingServiceConfig {
                    base_url: env_var_or(
                        env_keys::GEOCODING_BASE_URL,
                        defaults::DEFAULT_GEOCODING_BASE_URL,
                    ),
                    enabled: parse_env(env_keys::GEOCODING_SERVICE_ENABLED, true)?,
                    user_agent: env_var_or(
                        env_keys::GEOCODING_USER_AGENT,
                        defaults::DEFAULT_GEOCODING_USER_AGENT,
                    ),
                },
                climate: ClimateServiceConfig {
                    base_url: env_var_or(
                        env_keys::CLIMATE_BASE_URL,
                        defaults::DEFAULT_CLIMATE_BASE_URL,
                    ),
                    enabled: parse_env(env_keys::CLIMATE_SERVICE_ENABLED, true)?,
                },
                http_timeout_secs: parse_env(
                    env_keys::HTTP_TIMEOUT_SECS,
                    defaults::DEFAULT_HTTP_TIMEOUT_SECS,
                )?,
            },
            app_behavior: AppBehaviorConfig {
                readings_refresh_secs: parse_env(
                    env_keys::READINGS_REFRESH_SECS,
                    defaults::DEFAULT_REFRESH_INTERVAL_SECS,
                )?,
                history_default_limit: parse_env(
                    env_keys::HISTORY_DEFAULT_LIMIT,
                    defaults::DEFAULT_HISTORY_LIMIT,
                )?,
                history_max_limit: parse_env(
                    env_keys::HISTORY_MAX_LIMIT,
                    defaults::MAX_HISTORY_LIMIT,
                )?,
            },
            cors_origins: parse_origins(&env_var_or(env_keys::CORS_ORIGINS, "*")),
        };

        config.validate()?;
        info!("Configuration loaded successfully");
        Ok(config)
    }

    /// Configuration with built-in defaults and no external keys, for tests and tools
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            http_port: defaults::DEFAULT_HTTP_PORT,
            environment: Environment::Testing,
            database: DatabaseConfig {
                url: DatabaseUrl::Memory,
            },
            auth: AuthConfig {
                jwt_secret: Some("test-secret-for-oceansafe".to_owned()),
                jwt_expiry_hours: defaults::DEFAULT_JWT_EXPIRY_HOURS,
                bcrypt_cost: 4,
            },
            external_services: ExternalServicesConfig {
                weather: WeatherServiceConfig {
                    api_key: None,
                    base_url: defaults::DEFAULT_OPENWEATHER_BASE_URL.to_owned(),
                    enabled: false,
                },
                geocoding: GeocodingServiceConfig {
                    base_url: defaults::DEFAULT_GEOCODING_BASE_URL.to_owned(),
                    enabled: false,
                    user_agent: defaults::DEFAULT_GEOCODING_USER_AGENT.to_owned(),
                },
                climate: ClimateServiceConfig {
                    base_url: defaults::DEFAULT_CLIMATE_BASE_URL.to_owned(),
                    enabled: false,
                },
                http_timeout_secs: defaults::DEFAULT_HTTP_TIMEOUT_SECS,
            },
            app_behavior: AppBehaviorConfig {
                readings_refresh_secs: defaults::DEFAULT_REFRESH_INTERVAL_SECS,
                history_default_limit: defaults::DEFAULT_HISTORY_LIMIT,
                history_max_limit: defaults::MAX_HISTORY_LIMIT,
            },
            cors_origins: vec!["*".to_owned()],
        }
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error describing the first invalid value
    pub fn validate(&self) -> Result<()> {
        if self.app_behavior.readings_refresh_secs == 0 {
            bail!("READINGS_REFRESH_SECS must be greater than zero");
        }
        if self.app_behavior.history_default_limit == 0 || self.app_behavior.history_max_limit == 0
        {
            bail!("History limits must be greater than zero");
        }
        if self.app_behavior.history_default_limit > self.app_behavior.history_max_limit {
            bail!("HISTORY_DEFAULT_LIMIT cannot exceed HISTORY_MAX_LIMIT");
        }
        if !(4..=31).contains(&self.auth.bcrypt_cost) {
            bail!("BCRYPT_COST must be between 4 and 31");
        }
        if self.auth.jwt_expiry_hours <= 0 {
            bail!("JWT_EXPIRY_HOURS must be positive");
        }

        if self.external_services.weather.enabled
            && self.external_services.weather.api_key.is_none()
        {
            warn!(
                "Weather service is enabled but OPENWEATHER_API_KEY is missing; \
                 readings will be synthesized"
            );
        }

        Ok(())
    }

    /// Get a summary of the configuration for logging (without secrets)
    #[must_use]
    pub fn summary(&self) -> String {
        let enabled = |on: bool| if on { "Enabled" } else { "Disabled" };
        format!(
            "OceanSafe Server Configuration:\n\
             - Bind: {}:{}\n\
             - Environment: {}\n\
             - Database: {}\n\
             - Weather Service: {}\n\
             - Geocoding Service: {}\n\
             - Climate Service: {}\n\
             - Readings Refresh: {}s\n\
             - History Limits: {} (max {})\n\
             - CORS Origins: {}",
            self.host,
            self.http_port,
            self.environment,
            if self.database.url.is_memory() {
                "SQLite (in-memory)"
            } else {
                "SQLite"
            },
            enabled(self.external_services.weather.is_usable()),
            enabled(self.external_services.geocoding.enabled),
            enabled(self.external_services.climate.enabled),
            self.app_behavior.readings_refresh_secs,
            self.app_behavior.history_default_limit,
            self.app_behavior.history_max_limit,
            self.cors_origins.join(", "),
        )
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Environment variable, treating an empty value as unset
fn non_empty_env(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Parse an environment variable, falling back to `default` when unset
fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: StdError + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("Invalid {key} value: {raw}")),
        Err(_) => Ok(default),
    }
}

/// Parse comma-separated CORS origins
fn parse_origins(origins_str: &str) -> Vec<String> {
    if origins_str.trim() == "*" {
        vec!["*".to_owned()]
    } else {
        origins_str
            .split(',')
            .map(|s| s.trim().to_owned())
            .filter(|s| !s.is_empty())
            .collect()
    }
}
