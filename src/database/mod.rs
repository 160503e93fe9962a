// ABOUTME: SQLite persistence for users, activity history and conservation alerts
// ABOUTME: Owns the connection pool and creates tables on startup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 OceanSafe

//! # Database Management
//!
//! One [`Database`] handle wraps the pool. Operations are grouped by table in
//! submodules, each adding an `impl Database` block.

mod conservation;
mod history;
mod users;

pub use conservation::SEED_SPECIES;

use std::str::FromStr;
use std::time::Instant;

use chrono::{DateTime, Utc};
use oceansafe_core::errors::{AppError, AppResult};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use tracing::info;
use uuid::Uuid;

use crate::config::DatabaseUrl;
use crate::logging::AppLogger;

/// Database manager for all persisted state
#[derive(Clone)]
pub struct Database {
    pool: Pool<Sqlite>,
}

impl Database {
    /// Connect and run migrations
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or migrated
    pub async fn new(url: &DatabaseUrl) -> AppResult<Self> {
        let pool = match url {
            DatabaseUrl::Memory => {
                // every connection to :memory: is a separate database
                SqlitePoolOptions::new()
                    .max_connections(1)
                    .connect_with(
                        SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true),
                    )
                    .await?
            }
            DatabaseUrl::SQLite { path } => {
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    tokio::fs::create_dir_all(parent).await.map_err(|e| {
                        AppError::database(format!(
                            "Cannot create database directory {}: {e}",
                            parent.display()
                        ))
                    })?;
                }
                SqlitePoolOptions::new()
                    .connect_with(
                        SqliteConnectOptions::new()
                            .filename(path)
                            .create_if_missing(true)
                            .foreign_keys(true),
                    )
                    .await?
            }
        };

        let db = Self { pool };
        db.migrate().await?;
        info!("Database ready at {url}");
        Ok(db)
    }

    /// Get a reference to the database pool for advanced operations
    #[must_use]
    pub const fn pool(&self) -> &Pool<Sqlite> {
        &self.pool
    }

    /// Round-trip a trivial query
    ///
    /// # Errors
    ///
    /// Returns an error if the pool cannot serve a query
    pub async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// Create all tables and indexes, then seed the species catalogue
    ///
    /// # Errors
    ///
    /// Returns an error if any statement fails
    pub async fn migrate(&self) -> AppResult<()> {
        self.migrate_users().await?;
        self.migrate_history().await?;
        self.migrate_conservation().await?;
        self.seed_species().await?;
        Ok(())
    }
}

/// Parse a UUID stored as text
pub(crate) fn parse_uuid(raw: &str) -> AppResult<Uuid> {
    Uuid::parse_str(raw).map_err(|e| AppError::database(format!("Invalid UUID {raw}: {e}")))
}

/// Log timing for one database operation
pub(crate) fn record_operation(operation: &str, table: &str, started: Instant, success: bool) {
    let duration_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
    AppLogger::log_database_operation(operation, table, success, duration_ms);
}

/// Current time, truncated to microseconds so stored and returned values match
pub(crate) fn now() -> DateTime<Utc> {
    let now = Utc::now();
    DateTime::from_timestamp_micros(now.timestamp_micros()).unwrap_or(now)
}
