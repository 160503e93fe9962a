// ABOUTME: User account model for the identity service
// ABOUTME: Password hashes are never serialized
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 OceanSafe

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Registered user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Opaque user id
    pub id: Uuid,
    /// Login email, unique
    pub email: String,
    /// Display name
    pub full_name: String,
    /// bcrypt hash
    #[serde(skip)]
    pub password_hash: String,
    /// Account creation time
    pub created_at: DateTime<Utc>,
}
