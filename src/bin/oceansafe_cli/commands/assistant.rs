// ABOUTME: `ask` command sending one question to the canned assistant
// ABOUTME: The exchange is recorded in the planner transcript before printing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 OceanSafe

use anyhow::{bail, Result};
use chrono::Utc;
use oceansafe_core::constants::messages::MESSAGE_REQUIRED;
use oceansafe_intelligence::assistant::respond;
use oceansafe_intelligence::planner::{reduce, PlannerAction};
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::CliContext;
use crate::helpers::display::print_transcript;

/// Ask the assistant and print the conversation
pub fn ask(message: String) -> Result<()> {
    if message.trim().is_empty() {
        bail!(MESSAGE_REQUIRED);
    }

    let mut rng = StdRng::from_entropy();
    let reply = respond(&message, &mut rng).to_owned();

    let state = CliContext::initial_state();
    let state = reduce(
        state,
        PlannerAction::UserMessage {
            content: message,
            at: Utc::now(),
        },
    );
    let state = reduce(
        state,
        PlannerAction::AssistantReplied {
            content: reply,
            at: Utc::now(),
        },
    );

    print_transcript(&state);
    Ok(())
}
