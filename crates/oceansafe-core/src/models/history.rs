// ABOUTME: Activity-log record persisted for authenticated conditions checks
// ABOUTME: Holds the scored summary plus a free-form conditions blob
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 OceanSafe

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ActivityType;

/// One stored conditions check
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryRecord {
    /// Record id
    pub id: Uuid,
    /// Owner
    pub user_id: Uuid,
    /// Activity checked
    pub activity_type: ActivityType,
    /// Location label
    pub location: String,
    /// Latitude, when the check had a coordinate
    pub latitude: Option<f64>,
    /// Longitude, when the check had a coordinate
    pub longitude: Option<f64>,
    /// Planned date
    pub date: NaiveDate,
    /// Safety score
    pub score: u32,
    /// Overall status sentence
    pub overall_status: String,
    /// `{variables, weather, tide}` as stored
    pub conditions_data: serde_json::Value,
    /// Insertion time
    pub created_at: DateTime<Utc>,
}
