// ABOUTME: Core types and constants for the OceanSafe conditions platform
// ABOUTME: Foundation crate with error handling, domain models, and threshold tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 OceanSafe

#![deny(unsafe_code)]

//! # OceanSafe Core
//!
//! Foundation crate providing shared types and constants for the OceanSafe
//! ocean conditions platform. It has no I/O of its own and changes rarely,
//! which keeps incremental builds of the server crate fast.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode` and `AppResult`
//! - **constants**: Threshold tables, defaults and service names
//! - **models**: Activities, measurements, results, users, history and conservation records

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (ActivityType, Measurement, ActivityResult, User, ...)
pub mod models;
