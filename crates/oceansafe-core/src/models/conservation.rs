// ABOUTME: Marine conservation models for fish species and user alerts
// ABOUTME: Species catalogue entries, alert drafts and stored alerts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 OceanSafe

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Catalogue entry for a fish species
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FishSpecies {
    /// Species id
    pub id: Uuid,
    /// Common name
    pub name: String,
    /// Latin name
    pub scientific_name: String,
    /// Conservation status, e.g. "Endangered"
    pub status: String,
    /// Months (1-12) in which the species breeds
    pub breeding_months: Vec<u32>,
    /// Short description
    pub description: String,
    /// Optional picture
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Threat level, e.g. "high"
    pub threat_level: String,
    /// Catalogue insertion time
    pub created_at: DateTime<Utc>,
}

impl FishSpecies {
    /// Whether the species breeds in `month` (1-12)
    #[must_use]
    pub fn breeds_in(&self, month: u32) -> bool {
        self.breeding_months.contains(&month)
    }
}

/// Kind of conservation alert
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AlertType {
    /// Species is currently breeding
    BreedingSeason,
    /// Any other conservation notice
    Conservation,
}

impl AlertType {
    /// Storage identifier
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BreedingSeason => "breeding_season",
            Self::Conservation => "conservation",
        }
    }

    /// Parse a storage identifier; unknown values map to `Conservation`
    #[must_use]
    pub fn from_str_lossy(value: &str) -> Self {
        match value {
            "breeding_season" => Self::BreedingSeason,
            _ => Self::Conservation,
        }
    }
}

/// An alert that has been planned but not stored yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertDraft {
    /// Species the alert is about
    pub fish_species_id: Uuid,
    /// Alert kind
    pub alert_type: AlertType,
    /// Message shown to the user
    pub message: String,
}

/// Stored alert for one user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConservationAlert {
    /// Alert id
    pub id: Uuid,
    /// Owner
    pub user_id: Uuid,
    /// Related species
    pub fish_species_id: Option<Uuid>,
    /// Alert kind
    pub alert_type: AlertType,
    /// Message
    pub message: String,
    /// Read flag
    pub is_read: bool,
    /// Latitude the alert relates to
    pub latitude: Option<f64>,
    /// Longitude the alert relates to
    pub longitude: Option<f64>,
    /// Creation time
    pub created_at: DateTime<Utc>,
    /// Joined species record
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fish_species: Option<FishSpecies>,
}
