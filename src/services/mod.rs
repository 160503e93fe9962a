// ABOUTME: Application services composing external adapters with pure domain logic
// ABOUTME: Conditions checks and the periodic readings refresher
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 OceanSafe

/// Conditions check orchestration
pub mod conditions;

/// Periodic readings refresh
pub mod refresh;

pub use conditions::{CheckRequest, ConditionsContext, ConditionsService};
pub use refresh::ReadingsRefresher;
