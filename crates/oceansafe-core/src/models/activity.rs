// ABOUTME: Ocean activity enumeration with parsing and display implementations
// ABOUTME: Covers surfing, fishing, diving, sailing, kayaking and swimming
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 OceanSafe

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::messages;
use crate::errors::AppError;

/// Recreational ocean activity a user can check conditions for
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ActivityType {
    /// Board surfing
    Surfing,
    /// Shore or boat fishing
    Fishing,
    /// Scuba or free diving
    Diving,
    /// Sailing
    Sailing,
    /// Sea kayaking
    Kayaking,
    /// Open-water swimming
    Swimming,
}

impl ActivityType {
    /// Every supported activity, in display order
    pub const ALL: [Self; 6] = [
        Self::Surfing,
        Self::Fishing,
        Self::Diving,
        Self::Sailing,
        Self::Kayaking,
        Self::Swimming,
    ];

    /// Lowercase identifier used on the wire and in storage
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Surfing => "surfing",
            Self::Fishing => "fishing",
            Self::Diving => "diving",
            Self::Sailing => "sailing",
            Self::Kayaking => "kayaking",
            Self::Swimming => "swimming",
        }
    }

    /// Which factors matter most for this activity
    #[must_use]
    pub const fn details(self) -> &'static str {
        match self {
            Self::Surfing => messages::DETAILS_SURFING,
            Self::Fishing => messages::DETAILS_FISHING,
            Self::Diving => messages::DETAILS_DIVING,
            Self::Sailing => messages::DETAILS_SAILING,
            Self::Kayaking => messages::DETAILS_KAYAKING,
            Self::Swimming => messages::DETAILS_SWIMMING,
        }
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActivityType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|activity| activity.as_str() == normalized)
            .ok_or_else(|| AppError::invalid_input(format!("Unknown activity: {s}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("Diving".parse::<ActivityType>().unwrap(), ActivityType::Diving);
        assert_eq!(" kayaking ".parse::<ActivityType>().unwrap(), ActivityType::Kayaking);
        assert!("snorkeling".parse::<ActivityType>().is_err());
    }

    #[test]
    fn test_serde_uses_lowercase() {
        let json = serde_json::to_string(&ActivityType::Sailing).unwrap();
        assert_eq!(json, "\"sailing\"");
    }
}
