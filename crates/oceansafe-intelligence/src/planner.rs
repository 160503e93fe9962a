// ABOUTME: Explicit planner state with a pure reducer for the conditions workflow
// ABOUTME: Replaces ambient mutable UI state with PlannerState and PlannerAction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 OceanSafe

//! Planner state
//!
//! Front ends hold one [`PlannerState`] and feed every event through
//! [`reduce`]. Side effects (running a check, calling the assistant) happen
//! outside the reducer and report back with an action.

use chrono::{DateTime, NaiveDate, Utc};
use oceansafe_core::constants::messages::ASSISTANT_GREETING;
use oceansafe_core::models::{ActivityResult, ActivityType, Coordinates, Measurement};
use serde::{Deserialize, Serialize};

use crate::climate_stats::ClimateSummary;

/// Location shown before the user picks one
pub const DEFAULT_LOCATION: &str = "Santa Monica, CA";

/// Top-level view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    /// Activity, location and date selection plus results
    Planner,
    /// Live readings
    Dashboard,
    /// Past checks
    History,
    /// Climate probabilities
    Climate,
}

/// Who wrote a transcript entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatRole {
    /// The person asking
    User,
    /// The assistant
    Assistant,
}

/// One transcript entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatEntry {
    /// Author
    pub role: ChatRole,
    /// Text
    pub content: String,
    /// When it was added
    pub timestamp: DateTime<Utc>,
}

/// Whole planner state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannerState {
    /// Current view
    pub view: View,
    /// Selected activity
    pub activity: ActivityType,
    /// Location label
    pub location: String,
    /// Coordinate for the location, when resolved
    pub coordinates: Option<Coordinates>,
    /// Planned date
    pub date: NaiveDate,
    /// Latest generator output
    pub readings: Vec<Measurement>,
    /// Latest check
    pub result: Option<ActivityResult>,
    /// Latest climate summary
    pub climate: Option<ClimateSummary>,
    /// Assistant transcript, oldest first
    pub transcript: Vec<ChatEntry>,
}

/// Events the planner reacts to
#[derive(Debug, Clone)]
pub enum PlannerAction {
    /// Switch view
    ShowView(View),
    /// Pick an activity
    SelectActivity(ActivityType),
    /// Change location; without coordinates the previous coordinate is dropped
    SetLocation {
        /// New label
        label: String,
        /// Resolved coordinate, if any
        coordinates: Option<Coordinates>,
    },
    /// Change date
    SetDate(NaiveDate),
    /// Periodic refresh produced new readings
    ReadingsRefreshed(Vec<Measurement>),
    /// A check finished
    ResultReady(Box<ActivityResult>),
    /// Climate summary arrived
    ClimateReady(ClimateSummary),
    /// User asked the assistant something
    UserMessage {
        /// Question
        content: String,
        /// Time asked
        at: DateTime<Utc>,
    },
    /// Assistant answered
    AssistantReplied {
        /// Answer
        content: String,
        /// Time answered
        at: DateTime<Utc>,
    },
}

impl PlannerState {
    /// Fresh state for `today`, with the assistant greeting stamped `now`
    #[must_use]
    pub fn new(today: NaiveDate, now: DateTime<Utc>) -> Self {
        Self {
            view: View::Planner,
            activity: ActivityType::Surfing,
            location: DEFAULT_LOCATION.to_owned(),
            coordinates: None,
            date: today,
            readings: Vec::new(),
            result: None,
            climate: None,
            transcript: vec![ChatEntry {
                role: ChatRole::Assistant,
                content: ASSISTANT_GREETING.to_owned(),
                timestamp: now,
            }],
        }
    }

    /// A check needs a non-blank location
    #[must_use]
    pub fn can_check(&self) -> bool {
        !self.location.trim().is_empty()
    }
}

/// Apply one action
#[must_use]
pub fn reduce(mut state: PlannerState, action: PlannerAction) -> PlannerState {
    match action {
        PlannerAction::ShowView(view) => state.view = view,
        PlannerAction::SelectActivity(activity) => state.activity = activity,
        PlannerAction::SetLocation { label, coordinates } => {
            state.location = label;
            state.coordinates = coordinates;
            state.climate = None;
        }
        PlannerAction::SetDate(date) => state.date = date,
        PlannerAction::ReadingsRefreshed(readings) => state.readings = readings,
        PlannerAction::ResultReady(result) => {
            state.result = Some(*result);
            state.view = View::Planner;
        }
        PlannerAction::ClimateReady(summary) => state.climate = Some(summary),
        PlannerAction::UserMessage { content, at } => {
            // blank questions never reach the transcript
            if !content.trim().is_empty() {
                state.transcript.push(ChatEntry {
                    role: ChatRole::User,
                    content,
                    timestamp: at,
                });
            }
        }
        PlannerAction::AssistantReplied { content, at } => {
            state.transcript.push(ChatEntry {
                role: ChatRole::Assistant,
                content,
                timestamp: at,
            });
        }
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;

    fn initial() -> PlannerState {
        PlannerState::new(
            NaiveDate::from_ymd_opt(2025, 8, 1).unwrap(),
            DateTime::<Utc>::UNIX_EPOCH,
        )
    }

    #[test]
    fn test_initial_state() {
        let state = initial();
        assert_eq!(state.view, View::Planner);
        assert_eq!(state.activity, ActivityType::Surfing);
        assert_eq!(state.location, DEFAULT_LOCATION);
        assert_eq!(state.transcript.len(), 1);
        assert_eq!(state.transcript[0].content, ASSISTANT_GREETING);
    }

    #[test]
    fn test_location_change_without_coordinates_clears_them() {
        let coords = Coordinates::new(36.6, -121.9).unwrap();
        let state = reduce(
            initial(),
            PlannerAction::SetLocation {
                label: "Monterey".to_owned(),
                coordinates: Some(coords),
            },
        );
        assert_eq!(state.coordinates, Some(coords));

        let state = reduce(
            state,
            PlannerAction::SetLocation {
                label: "Somewhere else".to_owned(),
                coordinates: None,
            },
        );
        assert_eq!(state.location, "Somewhere else");
        assert!(state.coordinates.is_none());
    }

    #[test]
    fn test_blank_question_is_ignored() {
        let state = reduce(
            initial(),
            PlannerAction::UserMessage {
                content: "   ".to_owned(),
                at: Utc::now(),
            },
        );
        assert_eq!(state.transcript.len(), 1);
    }

    #[test]
    fn test_conversation_appends_in_order() {
        let now = Utc::now();
        let state = reduce(
            initial(),
            PlannerAction::UserMessage {
                content: "tide?".to_owned(),
                at: now,
            },
        );
        let state = reduce(
            state,
            PlannerAction::AssistantReplied {
                content: "Plan around tide times.".to_owned(),
                at: now,
            },
        );
        let roles: Vec<ChatRole> = state.transcript.iter().map(|e| e.role).collect();
        assert_eq!(
            roles,
            vec![ChatRole::Assistant, ChatRole::User, ChatRole::Assistant]
        );
    }
}
