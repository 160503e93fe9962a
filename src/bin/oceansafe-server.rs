// ABOUTME: OceanSafe API server binary
// ABOUTME: Loads configuration, initializes logging and serves the REST API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 OceanSafe

//! # OceanSafe Server Binary
//!
//! Starts the REST API backed by SQLite and the configured external services.

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use oceansafe_server::config::ServerConfig;
use oceansafe_server::logging;
use oceansafe_server::server::{run, ServerResources};
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "oceansafe-server")]
#[command(about = "OceanSafe API - ocean conditions and activity safety service")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override bind address
    #[arg(long)]
    host: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(host) = args.host {
        config.host = host;
    }

    logging::init_from_env()?;

    info!("Starting OceanSafe API");
    info!("{}", config.summary());

    let resources = Arc::new(ServerResources::from_config(config.clone()).await?);
    info!("Server resources initialized");

    display_available_endpoints(&config);

    if let Err(e) = run(resources).await {
        error!("Server error: {e:#}");
        return Err(e);
    }
    Ok(())
}

/// Log the endpoint list once at startup
#[allow(clippy::cognitive_complexity)]
fn display_available_endpoints(config: &ServerConfig) {
    let base = format!("http://{}:{}", config.host, config.http_port);
    info!("=== Available API Endpoints ===");
    info!("   Health:            GET  {base}/health");
    info!("   Readiness:         GET  {base}/ready");
    info!("   Register:          POST {base}/api/auth/register");
    info!("   Login:             POST {base}/api/auth/login");
    info!("   Current User:      GET  {base}/api/auth/me");
    info!("   Readings:          GET  {base}/api/readings");
    info!("   Conditions Check:  POST {base}/api/conditions/check");
    info!("   CSV Export:        POST {base}/api/conditions/export");
    info!("   Location Search:   GET  {base}/api/locations/search?q=");
    info!("   Reverse Lookup:    GET  {base}/api/locations/reverse");
    info!("   History:           GET  {base}/api/history");
    info!("   Assistant:         POST {base}/api/assistant");
    info!("   Climate:           GET  {base}/api/climate/probabilities");
    info!("   Species:           GET  {base}/api/conservation/species");
    info!("   Alerts:            GET  {base}/api/conservation/alerts");
    info!("=== End of Endpoint List ===");
}
