// ABOUTME: Activity-log database operations for authenticated conditions checks
// ABOUTME: Append, list newest first and owner-scoped delete
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 OceanSafe

use std::time::Instant;

use oceansafe_core::errors::{AppError, AppResult};
use oceansafe_core::models::{ActivityResult, ActivityType, HistoryRecord};
use serde_json::json;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use uuid::Uuid;

use super::{now, parse_uuid, record_operation, Database};

impl Database {
    /// Create activity history table
    pub(super) async fn migrate_history(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS activity_history (
                id TEXT PRIMARY KEY,
                user_id TEXT NOT NULL REFERENCES users(id) ON DELETE CASCADE,
                activity_type TEXT NOT NULL,
                location TEXT NOT NULL,
                latitude REAL,
                longitude REAL,
                date TEXT NOT NULL,
                score INTEGER NOT NULL,
                overall_status TEXT NOT NULL,
                conditions_data TEXT NOT NULL,
                created_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_activity_history_user ON activity_history(user_id, created_at)",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Store a scored check for `owner`
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the insert fails
    pub async fn append_history(
        &self,
        owner: Uuid,
        result: &ActivityResult,
    ) -> AppResult<HistoryRecord> {
        let started = Instant::now();
        let record = HistoryRecord {
            id: Uuid::new_v4(),
            user_id: owner,
            activity_type: result.activity,
            location: result.location.clone(),
            latitude: result.coordinates.map(|c| c.latitude),
            longitude: result.coordinates.map(|c| c.longitude),
            date: result.date,
            score: result.score,
            overall_status: result.overall.clone(),
            conditions_data: json!({
                "variables": result.variables,
                "weather": result.weather,
                "tide": result.tide,
            }),
            created_at: now(),
        };

        let outcome = sqlx::query(
            r"
            INSERT INTO activity_history (
                id, user_id, activity_type, location, latitude, longitude,
                date, score, overall_status, conditions_data, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            ",
        )
        .bind(record.id.to_string())
        .bind(owner.to_string())
        .bind(record.activity_type.as_str())
        .bind(&record.location)
        .bind(record.latitude)
        .bind(record.longitude)
        .bind(record.date)
        .bind(i64::from(record.score))
        .bind(&record.overall_status)
        .bind(serde_json::to_string(&record.conditions_data)?)
        .bind(record.created_at)
        .execute(&self.pool)
        .await;

        record_operation("insert", "activity_history", started, outcome.is_ok());
        outcome?;
        Ok(record)
    }

    /// Most recent checks for `owner`, newest first
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a row is corrupt
    pub async fn list_recent_history(
        &self,
        owner: Uuid,
        limit: u32,
    ) -> AppResult<Vec<HistoryRecord>> {
        let rows = sqlx::query(
            r"
            SELECT id, user_id, activity_type, location, latitude, longitude,
                   date, score, overall_status, conditions_data, created_at
            FROM activity_history
            WHERE user_id = $1
            ORDER BY created_at DESC, rowid DESC
            LIMIT $2
            ",
        )
        .bind(owner.to_string())
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(Self::row_to_history).collect()
    }

    /// Delete one of `owner`'s records; `false` when nothing matched
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails
    pub async fn delete_history(&self, owner: Uuid, id: Uuid) -> AppResult<bool> {
        let started = Instant::now();
        let outcome = sqlx::query("DELETE FROM activity_history WHERE id = $1 AND user_id = $2")
            .bind(id.to_string())
            .bind(owner.to_string())
            .execute(&self.pool)
            .await;
        record_operation("delete", "activity_history", started, outcome.is_ok());
        Ok(outcome?.rows_affected() > 0)
    }

    fn row_to_history(row: &SqliteRow) -> AppResult<HistoryRecord> {
        let id: String = row.try_get("id")?;
        let user_id: String = row.try_get("user_id")?;
        let activity: String = row.try_get("activity_type")?;
        let score: i64 = row.try_get("score")?;
        let conditions: String = row.try_get("conditions_data")?;

        Ok(HistoryRecord {
            id: parse_uuid(&id)?,
            user_id: parse_uuid(&user_id)?,
            activity_type: activity
                .parse::<ActivityType>()
                .map_err(|e| AppError::database(e.message))?,
            location: row.try_get("location")?,
            latitude: row.try_get("latitude")?,
            longitude: row.try_get("longitude")?,
            date: row.try_get("date")?,
            score: u32::try_from(score)
                .map_err(|_| AppError::database(format!("Invalid stored score {score}")))?,
            overall_status: row.try_get("overall_status")?,
            conditions_data: serde_json::from_str(&conditions)?,
            created_at: row.try_get("created_at")?,
        })
    }
}
