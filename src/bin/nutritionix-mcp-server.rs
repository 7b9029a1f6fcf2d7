// ABOUTME: Stdio MCP server binary exposing Nutritionix lookups as tools
// ABOUTME: Parses credentials, initializes logging and serves JSON-RPC on stdin/stdout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Nutritionix MCP Server Binary
//!
//! ```text
//! nutritionix-mcp-server --app-id <ID> --app-key <KEY>
//! ```
//!
//! Exits with an error before serving anything when a credential is missing.

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use nutritionix_mcp_server::{
    cli::Args,
    config::ServerConfig,
    logging,
    mcp::{resources::ServerResources, transport::StdioTransport},
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config = ServerConfig::from_args(args)?;

    logging::init_from_env()?;

    info!("Starting Nutritionix MCP server - stdio mode");
    info!("{}", config.summary());

    let resources = Arc::new(ServerResources::new(config));
    info!(
        tools = resources.tool_registry.len(),
        "Tool registry initialized"
    );

    StdioTransport::new(resources).run_stdio().await?;

    info!("Nutritionix MCP server shut down");
    Ok(())
}
