// ABOUTME: Fish-species catalogue and conservation alert database operations
// ABOUTME: Seeded catalogue, idempotent alert creation, owner-scoped read and dismiss
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 OceanSafe

use std::time::Instant;

use oceansafe_core::errors::AppResult;
use oceansafe_core::models::{AlertDraft, AlertType, ConservationAlert, FishSpecies};
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use tracing::info;
use uuid::Uuid;

use super::{now, parse_uuid, record_operation, Database};

/// One built-in catalogue entry
pub struct SeedSpecies {
    /// Common name
    pub name: &'static str,
    /// Binomial name
    pub scientific_name: &'static str,
    /// Conservation status
    pub status: &'static str,
    /// Months (1..=12) in which the species spawns
    pub breeding_months: &'static [u32],
    /// Short description
    pub description: &'static str,
    /// Threat level label
    pub threat_level: &'static str,
}

/// Catalogue inserted on first migration
pub const SEED_SPECIES: &[SeedSpecies] = &[
    SeedSpecies {
        name: "Atlantic Bluefin Tuna",
        scientific_name: "Thunnus thynnus",
        status: "Endangered",
        breeding_months: &[5, 6, 7],
        description: "Large migratory tuna that spawns in warm waters of the Gulf of Mexico and Mediterranean.",
        threat_level: "high",
    },
    SeedSpecies {
        name: "Nassau Grouper",
        scientific_name: "Epinephelus striatus",
        status: "Critically Endangered",
        breeding_months: &[12, 1, 2],
        description: "Reef grouper that gathers in large spawning aggregations around the winter full moons.",
        threat_level: "critical",
    },
    SeedSpecies {
        name: "Goliath Grouper",
        scientific_name: "Epinephelus itajara",
        status: "Vulnerable",
        breeding_months: &[7, 8, 9],
        description: "The largest Atlantic grouper, aggregating at wrecks and ledges to spawn in late summer.",
        threat_level: "high",
    },
    SeedSpecies {
        name: "Giant Sea Bass",
        scientific_name: "Stereolepis gigas",
        status: "Vulnerable",
        breeding_months: &[6, 7, 8, 9],
        description: "Slow-growing kelp forest giant of the Pacific coast, protected from commercial take.",
        threat_level: "high",
    },
    SeedSpecies {
        name: "Atlantic Cod",
        scientific_name: "Gadus morhua",
        status: "Vulnerable",
        breeding_months: &[1, 2, 3, 4],
        description: "Cold-water groundfish whose stocks collapsed under heavy fishing pressure.",
        threat_level: "medium",
    },
    SeedSpecies {
        name: "Red Snapper",
        scientific_name: "Lutjanus campechanus",
        status: "Near Threatened",
        breeding_months: &[5, 6, 7, 8, 9],
        description: "Popular reef fish with a long spawning season across the Gulf of Mexico.",
        threat_level: "medium",
    },
    SeedSpecies {
        name: "Scalloped Hammerhead",
        scientific_name: "Sphyrna lewini",
        status: "Critically Endangered",
        breeding_months: &[4, 5, 6, 7],
        description: "Schooling shark that pups in shallow coastal nurseries.",
        threat_level: "critical",
    },
];

impl Database {
    /// Create species and alert tables
    pub(super) async fn migrate_conservation(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS fish_species (
                id TEXT PRIMARY KEY,
                name TEXT UNIQUE NOT NULL,
                scientific_name TEXT NOT NULL,
                status TEXT NOT NULL,
                breeding_months TEXT NOT NULL,
                description TEXT NOT NULL,
                image_url TEXT,
                threat_level TEXT NOT NULL,
                created_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS conservation_alerts (
                id TEXT PRIMARY KEY,
                user_id TEXT NOT NULL REFERENCES users(id) ON DELETE CASCADE,
                fish_species_id TEXT REFERENCES fish_species(id) ON DELETE CASCADE,
                alert_type TEXT NOT NULL CHECK (alert_type IN ('breeding_season', 'conservation')),
                message TEXT NOT NULL,
                is_read INTEGER NOT NULL DEFAULT 0,
                latitude REAL,
                longitude REAL,
                created_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r"
            CREATE UNIQUE INDEX IF NOT EXISTS idx_conservation_alerts_unique
            ON conservation_alerts(user_id, fish_species_id, alert_type)
            ",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Insert the built-in catalogue into an empty species table
    pub(super) async fn seed_species(&self) -> AppResult<()> {
        let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM fish_species")
            .fetch_one(&self.pool)
            .await?;
        if existing > 0 {
            return Ok(());
        }

        let created_at = now();
        for species in SEED_SPECIES {
            sqlx::query(
                r"
                INSERT OR IGNORE INTO fish_species (
                    id, name, scientific_name, status, breeding_months,
                    description, image_url, threat_level, created_at
                ) VALUES ($1, $2, $3, $4, $5, $6, NULL, $7, $8)
                ",
            )
            .bind(Uuid::new_v4().to_string())
            .bind(species.name)
            .bind(species.scientific_name)
            .bind(species.status)
            .bind(serde_json::to_string(species.breeding_months)?)
            .bind(species.description)
            .bind(species.threat_level)
            .bind(created_at)
            .execute(&self.pool)
            .await?;
        }

        info!(count = SEED_SPECIES.len(), "Seeded fish species catalogue");
        Ok(())
    }

    /// Whole species catalogue ordered by name
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a row is corrupt
    pub async fn list_species(&self) -> AppResult<Vec<FishSpecies>> {
        let rows = sqlx::query(
            r"
            SELECT id, name, scientific_name, status, breeding_months,
                   description, image_url, threat_level, created_at
            FROM fish_species
            ORDER BY name
            ",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(|row| Self::row_to_species(row, "")).collect()
    }

    /// Insert alerts for `owner`; drafts that already exist are skipped
    ///
    /// Returns the number of alerts actually created.
    ///
    /// # Errors
    ///
    /// Returns an error if an insert fails for a reason other than a duplicate
    pub async fn create_alerts(&self, owner: Uuid, drafts: &[AlertDraft]) -> AppResult<u64> {
        let started = Instant::now();
        let mut created = 0;
        for draft in drafts {
            let outcome = sqlx::query(
                r"
                INSERT OR IGNORE INTO conservation_alerts (
                    id, user_id, fish_species_id, alert_type, message, is_read, created_at
                ) VALUES ($1, $2, $3, $4, $5, 0, $6)
                ",
            )
            .bind(Uuid::new_v4().to_string())
            .bind(owner.to_string())
            .bind(draft.fish_species_id.to_string())
            .bind(draft.alert_type.as_str())
            .bind(&draft.message)
            .bind(now())
            .execute(&self.pool)
            .await;

            match outcome {
                Ok(done) => created += done.rows_affected(),
                Err(e) => {
                    record_operation("insert", "conservation_alerts", started, false);
                    return Err(e.into());
                }
            }
        }
        record_operation("insert", "conservation_alerts", started, true);
        Ok(created)
    }

    /// Unread alerts for `owner` with their species, newest first
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a row is corrupt
    pub async fn list_unread_alerts(&self, owner: Uuid) -> AppResult<Vec<ConservationAlert>> {
        let rows = sqlx::query(
            r"
            SELECT a.id, a.user_id, a.fish_species_id, a.alert_type, a.message, a.is_read,
                   a.latitude, a.longitude, a.created_at,
                   s.id AS s_id, s.name AS s_name, s.scientific_name AS s_scientific_name,
                   s.status AS s_status, s.breeding_months AS s_breeding_months,
                   s.description AS s_description, s.image_url AS s_image_url,
                   s.threat_level AS s_threat_level, s.created_at AS s_created_at
            FROM conservation_alerts a
            LEFT JOIN fish_species s ON s.id = a.fish_species_id
            WHERE a.user_id = $1 AND a.is_read = 0
            ORDER BY a.created_at DESC, a.rowid DESC
            ",
        )
        .bind(owner.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(Self::row_to_alert).collect()
    }

    /// Mark one of `owner`'s alerts read; `false` when nothing matched
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails
    pub async fn mark_alert_read(&self, owner: Uuid, id: Uuid) -> AppResult<bool> {
        let done = sqlx::query(
            "UPDATE conservation_alerts SET is_read = 1 WHERE id = $1 AND user_id = $2",
        )
        .bind(id.to_string())
        .bind(owner.to_string())
        .execute(&self.pool)
        .await?;
        Ok(done.rows_affected() > 0)
    }

    /// Delete one of `owner`'s alerts; `false` when nothing matched
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails
    pub async fn dismiss_alert(&self, owner: Uuid, id: Uuid) -> AppResult<bool> {
        let done = sqlx::query("DELETE FROM conservation_alerts WHERE id = $1 AND user_id = $2")
            .bind(id.to_string())
            .bind(owner.to_string())
            .execute(&self.pool)
            .await?;
        Ok(done.rows_affected() > 0)
    }

    /// Species columns, optionally prefixed (used for joined rows)
    fn row_to_species(row: &SqliteRow, prefix: &str) -> AppResult<FishSpecies> {
        let col = |name: &str| format!("{prefix}{name}");
        let id: String = row.try_get(col("id").as_str())?;
        let months: String = row.try_get(col("breeding_months").as_str())?;
        Ok(FishSpecies {
            id: parse_uuid(&id)?,
            name: row.try_get(col("name").as_str())?,
            scientific_name: row.try_get(col("scientific_name").as_str())?,
            status: row.try_get(col("status").as_str())?,
            breeding_months: serde_json::from_str(&months)?,
            description: row.try_get(col("description").as_str())?,
            image_url: row.try_get(col("image_url").as_str())?,
            threat_level: row.try_get(col("threat_level").as_str())?,
            created_at: row.try_get(col("created_at").as_str())?,
        })
    }

    fn row_to_alert(row: &SqliteRow) -> AppResult<ConservationAlert> {
        let id: String = row.try_get("id")?;
        let user_id: String = row.try_get("user_id")?;
        let species_id: Option<String> = row.try_get("fish_species_id")?;
        let alert_type: String = row.try_get("alert_type")?;
        let joined: Option<String> = row.try_get("s_id")?;

        Ok(ConservationAlert {
            id: parse_uuid(&id)?,
            user_id: parse_uuid(&user_id)?,
            fish_species_id: species_id.as_deref().map(parse_uuid).transpose()?,
            alert_type: AlertType::from_str_lossy(&alert_type),
            message: row.try_get("message")?,
            is_read: row.try_get("is_read")?,
            latitude: row.try_get("latitude")?,
            longitude: row.try_get("longitude")?,
            created_at: row.try_get("created_at")?,
            fish_species: joined
                .map(|_| Self::row_to_species(row, "s_"))
                .transpose()?,
        })
    }
}
