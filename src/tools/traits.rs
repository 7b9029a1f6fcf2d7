// ABOUTME: Defines the McpTool trait and ToolCapabilities for the tool registry.
// ABOUTME: Tools implement this trait to be listed and executed via the ToolRegistry.
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # MCP Tool Trait and Capabilities
//!
//! All tools implement [`McpTool`], which provides:
//! - Tool metadata (name, description, input schema)
//! - Capability flags used for logging and discovery
//! - Async execution with a per-call context

use async_trait::async_trait;
use bitflags::bitflags;
use serde_json::Value;

use crate::errors::AppResult;
use crate::mcp::schema::{JsonSchema, ToolSchema};

use super::context::ToolExecutionContext;
use super::result::ToolResult;

bitflags! {
    /// Capabilities that tools can declare.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ToolCapabilities: u8 {
        /// Tool reads data and has no side effects
        const READS_DATA = 0b0000_0001;
        /// Tool calls a remote HTTP API
        const EXTERNAL_API = 0b0000_0010;
        /// Tool needs the configured Nutritionix credentials
        const REQUIRES_CREDENTIALS = 0b0000_0100;
    }
}

impl ToolCapabilities {
    /// Check if tool reads data
    #[must_use]
    pub const fn reads_data(self) -> bool {
        self.contains(Self::READS_DATA)
    }

    /// Check if tool performs network I/O
    #[must_use]
    pub const fn is_external(self) -> bool {
        self.contains(Self::EXTERNAL_API)
    }

    /// Get a description of all enabled capabilities for logging
    #[must_use]
    pub fn describe(&self) -> String {
        let parts: Vec<&str> = [
            (Self::READS_DATA, "reads_data"),
            (Self::EXTERNAL_API, "external_api"),
            (Self::REQUIRES_CREDENTIALS, "requires_credentials"),
        ]
        .into_iter()
        .filter(|(flag, _)| self.contains(*flag))
        .map(|(_, label)| label)
        .collect();

        if parts.is_empty() {
            "none".to_owned()
        } else {
            parts.join(", ")
        }
    }
}

/// The trait every MCP tool implements.
///
/// Tools are `Send + Sync` so one instance can serve concurrent calls.
/// `name()` returns `&'static str` for allocation-free lookup.
///
/// # Example
///
/// ```rust,no_run
/// use async_trait::async_trait;
/// use nutritionix_mcp_server::tools::{
///     McpTool, ToolCapabilities, ToolExecutionContext, ToolResult,
/// };
/// use nutritionix_mcp_server::mcp::schema::JsonSchema;
/// use nutritionix_mcp_server::errors::AppResult;
/// use serde_json::Value;
///
/// struct EchoTool;
///
/// #[async_trait]
/// impl McpTool for EchoTool {
///     fn name(&self) -> &'static str {
///         "echo"
///     }
///
///     fn description(&self) -> &'static str {
///         "Echo the query back"
///     }
///
///     fn input_schema(&self) -> JsonSchema {
///         JsonSchema::single_string("query", "Text to echo")
///     }
///
///     fn capabilities(&self) -> ToolCapabilities {
///         ToolCapabilities::READS_DATA
///     }
///
///     async fn execute(&self, args: Value, _ctx: &ToolExecutionContext) -> AppResult<ToolResult> {
///         Ok(ToolResult::text(args.to_string()))
///     }
/// }
/// ```
#[async_trait]
pub trait McpTool: Send + Sync {
    /// Unique tool name used in `tools/call`
    fn name(&self) -> &'static str;

    /// Human-readable description shown in `tools/list`
    fn description(&self) -> &'static str;

    /// JSON schema for the tool arguments
    fn input_schema(&self) -> JsonSchema;

    /// Capability flags
    fn capabilities(&self) -> ToolCapabilities;

    /// Execute the tool.
    ///
    /// Remote failures are reported as an error [`ToolResult`]; an `Err`
    /// is reserved for failures the protocol layer must answer itself.
    ///
    /// # Errors
    ///
    /// Returns an error if the tool cannot produce any result
    async fn execute(&self, args: Value, ctx: &ToolExecutionContext) -> AppResult<ToolResult>;

    /// Schema entry advertised in `tools/list`
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: self.name().to_owned(),
            description: self.description().to_owned(),
            input_schema: self.input_schema(),
        }
    }
}
