// ABOUTME: Helper modules for oceansafe-cli
// ABOUTME: Terminal rendering of planner state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 OceanSafe

pub mod display;
