// ABOUTME: MCP tool architecture: trait, registry, execution context and results.
// ABOUTME: Re-exports the types tool implementations and the request processor share.
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! MCP tools for the Nutritionix server.
//!
//! Tools implement [`McpTool`] and are registered in a [`ToolRegistry`] at
//! startup. The request processor looks them up by name for `tools/call`.

pub mod context;
pub mod errors;
pub mod implementations;
pub mod registry;
pub mod result;
pub mod traits;

pub use context::ToolExecutionContext;
pub use errors::ToolError;
pub use registry::ToolRegistry;
pub use result::ToolResult;
pub use traits::{McpTool, ToolCapabilities};
