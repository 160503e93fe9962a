// ABOUTME: HTTP middleware for authentication and cross-origin access
// ABOUTME: Bearer-token identity helpers, request spans and the CORS layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 OceanSafe

//! HTTP middleware

/// Bearer-token identity
pub mod auth;
/// Cross-origin configuration
pub mod cors;
/// Per-request tracing spans
pub mod tracing;

// Authentication helpers
pub use auth::{optional_user, require_user, AuthenticatedUser};

// CORS configuration
pub use cors::setup_cors;

// Request spans
pub use tracing::create_request_span;
