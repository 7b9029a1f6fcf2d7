// ABOUTME: Configuration module for credentials and server settings
// ABOUTME: Re-exports the immutable ServerConfig built once at startup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration for the Nutritionix MCP server.
//!
//! Configuration is assembled once from command-line arguments (see
//! [`crate::cli::Args`]) and then shared read-only through
//! [`crate::mcp::resources::ServerResources`].

/// Credentials and server configuration
pub mod environment;

pub use environment::{NutritionixCredentials, ServerConfig};
