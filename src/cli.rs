// ABOUTME: Command-line argument definitions for the MCP server binary
// ABOUTME: Parses Nutritionix credentials with environment-variable fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use clap::Parser;

use crate::constants::{env_vars, nutritionix::DEFAULT_BASE_URL};

/// Nutritionix MCP server arguments
///
/// Credentials are optional at the parser level so that a missing value is
/// reported by configuration validation with a single consistent message.
#[derive(Debug, Clone, Parser)]
#[command(name = "nutritionix-mcp-server")]
#[command(about = "MCP app for Nutritionix", version)]
pub struct Args {
    /// The app id from Nutritionix
    #[arg(long = "app-id", env = env_vars::APP_ID)]
    pub app_id: Option<String>,

    /// The app key from Nutritionix
    #[arg(long = "app-key", env = env_vars::APP_KEY, hide_env_values = true)]
    pub app_key: Option<String>,

    /// Base URL of the Nutritionix v2 API
    #[arg(long = "base-url", env = env_vars::BASE_URL, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,
}
