// ABOUTME: System-wide constants for the Nutritionix MCP server
// ABOUTME: Contains protocol constants, error codes, API endpoints and tool names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Constants Module
//!
//! Application constants grouped by concern.

/// Protocol-related constants
pub mod protocol {
    /// `MCP` protocol version advertised during `initialize`
    pub const MCP_PROTOCOL_VERSION: &str = "2025-06-18";

    /// `JSON-RPC` version (standard, not configurable)
    pub const JSONRPC_VERSION: &str = "2.0";

    /// Server name reported in `serverInfo`
    pub const SERVER_NAME: &str = "nutritionix-mcp-server";

    /// Server version from Cargo.toml
    pub const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");
}

/// `JSON-RPC` and `MCP` error codes
pub mod errors {
    /// Invalid JSON was received
    pub const ERROR_PARSE_ERROR: i32 = -32700;

    /// The JSON sent is not a valid request object
    pub const ERROR_INVALID_REQUEST: i32 = -32600;

    /// Method not found
    pub const ERROR_METHOD_NOT_FOUND: i32 = -32601;

    /// Invalid parameters
    pub const ERROR_INVALID_PARAMS: i32 = -32602;

    /// Internal error
    pub const ERROR_INTERNAL_ERROR: i32 = -32603;
}

/// Nutritionix API endpoints and headers
pub mod nutritionix {
    /// Production base URL for the v2 track API
    pub const DEFAULT_BASE_URL: &str = "https://trackapi.nutritionix.com/v2";

    /// Instant food search (GET)
    pub const SEARCH_INSTANT_PATH: &str = "/search/instant";

    /// Natural-language nutrient parsing (POST)
    pub const NATURAL_NUTRIENTS_PATH: &str = "/natural/nutrients";

    /// Natural-language exercise parsing (POST)
    pub const NATURAL_EXERCISE_PATH: &str = "/natural/exercise";

    /// Application id header
    pub const APP_ID_HEADER: &str = "x-app-id";

    /// Application key header
    pub const APP_KEY_HEADER: &str = "x-app-key";

    /// Service label used in logs and errors
    pub const SERVICE_NAME: &str = "Nutritionix API";
}

/// Environment variable names
pub mod env_vars {
    /// Application id fallback for `--app-id`
    pub const APP_ID: &str = "NUTRITIONIX_APP_ID";

    /// Application key fallback for `--app-key`
    pub const APP_KEY: &str = "NUTRITIONIX_APP_KEY";

    /// Base URL override for `--base-url`
    pub const BASE_URL: &str = "NUTRITIONIX_BASE_URL";
}

/// Tool names exposed over `MCP`
pub mod tools {
    /// Instant food search
    pub const SEARCH_FOOD: &str = "search_food";

    /// Natural-language nutrition lookup
    pub const GET_FOOD_NUTRITION: &str = "get_food_nutrition";

    /// Natural-language exercise lookup
    pub const GET_EXERCISE_NUTRITION: &str = "get_exercise_nutrition";
}

/// Display limits for formatted tool output
pub mod limits {
    /// Maximum entries shown per search section (common, branded)
    pub const MAX_SEARCH_RESULTS_PER_SECTION: usize = 5;

    /// Placeholder for fields the API omitted
    pub const MISSING_VALUE: &str = "N/A";
}
