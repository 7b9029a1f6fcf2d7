// ABOUTME: Main library entry point for the Nutritionix MCP server
// ABOUTME: Exposes Nutritionix food search, nutrition and exercise lookups as MCP tools
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Nutritionix MCP Server
//!
//! A Model Context Protocol (MCP) server that wraps three Nutritionix API
//! lookups and returns their results as human-readable text:
//!
//! - `search_food` - instant search over common and branded foods
//! - `get_food_nutrition` - natural-language nutrient parsing ("1 egg and toast")
//! - `get_exercise_nutrition` - natural-language exercise calorie estimates
//!
//! ## Architecture
//!
//! - **Config**: credentials parsed once from the command line and injected everywhere
//! - **External**: the Nutritionix HTTP client, one request per call
//! - **Tools**: `McpTool` implementations that format API payloads as text
//! - **MCP**: JSON-RPC 2.0 request processing over a line-delimited stdio transport
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use nutritionix_mcp_server::config::{NutritionixCredentials, ServerConfig};
//! use nutritionix_mcp_server::mcp::{resources::ServerResources, transport::StdioTransport};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let credentials = NutritionixCredentials::new("my-app-id", "my-app-key")?;
//! let config = ServerConfig::new(credentials);
//! let resources = Arc::new(ServerResources::new(config));
//!
//! StdioTransport::new(resources).run_stdio().await?;
//! # Ok(())
//! # }
//! ```

/// Command-line argument parsing
pub mod cli;

/// Credential and server configuration
pub mod config;

/// Application constants (endpoints, header names, protocol values)
pub mod constants;

/// Unified error handling with standard error codes
pub mod errors;

/// External API clients (Nutritionix)
pub mod external;

/// Unified JSON-RPC 2.0 message types
pub mod jsonrpc;

/// Structured logging setup
pub mod logging;

/// Model Context Protocol request processing and transport
pub mod mcp;

/// MCP tool trait, registry and implementations
pub mod tools;

/// Small text helpers shared by formatters
pub mod utils;
