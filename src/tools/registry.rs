// ABOUTME: Central registry for MCP tools with lookup, schema listing and execution.
// ABOUTME: Provides feature-flag-based registration of the built-in Nutritionix tools.
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Tool Registry
//!
//! Central registry for MCP tools, providing:
//! - Tool registration and lookup
//! - Feature-flag-based conditional registration
//! - Schema generation for MCP `tools/list` responses
//!
//! The registry is built once at startup and then used immutably. Tools are
//! `Arc`-wrapped so concurrent calls can share them.
//!
//! # Example
//!
//! ```
//! use nutritionix_mcp_server::tools::registry::ToolRegistry;
//!
//! let registry = ToolRegistry::with_builtin_tools();
//! let names: Vec<String> = registry.list_schemas().into_iter().map(|s| s.name).collect();
//! assert_eq!(names, ["get_exercise_nutrition", "get_food_nutrition", "search_food"]);
//! ```

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::errors::AppResult;
use crate::mcp::schema::ToolSchema;

use super::context::ToolExecutionContext;
use super::errors::ToolError;
use super::result::ToolResult;
use super::traits::{McpTool, ToolCapabilities};

/// Central registry for MCP tools.
pub struct ToolRegistry {
    /// Registered tools by name
    tools: HashMap<String, Arc<dyn McpTool>>,
}

impl ToolRegistry {
    /// Create a new empty registry
    #[must_use]
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    /// Create a registry holding every built-in tool enabled at compile time
    #[must_use]
    pub fn with_builtin_tools() -> Self {
        let mut registry = Self::new();
        registry.register_builtin_tools();
        registry
    }

    /// Register a tool in the registry
    ///
    /// # Returns
    ///
    /// `true` if the tool was registered, `false` if a tool with the same name exists
    pub fn register(&mut self, tool: Arc<dyn McpTool>) -> bool {
        let name = tool.name().to_owned();

        if self.tools.contains_key(&name) {
            warn!("Tool '{}' is already registered, skipping", name);
            return false;
        }

        let capabilities = tool.capabilities();
        debug!(
            read_only = capabilities.reads_data(),
            external = capabilities.is_external(),
            "Registering tool '{}' with capabilities: {}",
            name,
            capabilities.describe()
        );
        self.tools.insert(name, tool);
        true
    }

    /// Get a tool by name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Arc<dyn McpTool>> {
        self.tools.get(name)
    }

    /// Check if a tool is registered
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// Get the number of registered tools
    #[must_use]
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Check if the registry is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// List all tool names, sorted
    #[must_use]
    pub fn tool_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.tools.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Schemas for every registered tool, sorted by name
    #[must_use]
    pub fn list_schemas(&self) -> Vec<ToolSchema> {
        let mut schemas: Vec<ToolSchema> = self.tools.values().map(|tool| tool.schema()).collect();
        schemas.sort_by(|a, b| a.name.cmp(&b.name));
        schemas
    }

    /// Filter tools by capabilities
    #[must_use]
    pub fn filter_by_capabilities(&self, required: ToolCapabilities) -> Vec<&Arc<dyn McpTool>> {
        self.tools
            .values()
            .filter(|tool| tool.capabilities().contains(required))
            .collect()
    }

    /// Execute a tool by name
    ///
    /// # Errors
    ///
    /// Returns `AppError` if the tool is not found or cannot produce a result
    pub async fn execute(
        &self,
        name: &str,
        args: serde_json::Value,
        context: &ToolExecutionContext,
    ) -> AppResult<ToolResult> {
        let tool = self.get(name).ok_or_else(|| ToolError::not_found(name))?;
        if tool.capabilities().is_external() {
            debug!(tool = %name, request_id = ?context.request_id, "Executing external tool");
        }
        tool.execute(args, context).await
    }

    /// Register all built-in tools based on feature flags
    pub fn register_builtin_tools(&mut self) {
        info!("Registering built-in tools...");

        // Nutrition tools
        #[cfg(feature = "tools-nutrition")]
        self.register_nutrition_tools();

        info!("Registered {} built-in tools", self.len());
    }

    /// Register Nutritionix tools
    #[cfg(feature = "tools-nutrition")]
    fn register_nutrition_tools(&mut self) {
        use super::implementations::nutrition::create_nutrition_tools;

        debug!(
            "Registering nutrition tools (registry has {} tools)",
            self.tools.len()
        );

        for tool in create_nutrition_tools() {
            self.register(Arc::from(tool));
        }

        info!(
            "Registered nutrition tools (registry now has {} tools)",
            self.tools.len()
        );
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ToolRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolRegistry")
            .field("tool_count", &self.tools.len())
            .field("tools", &self.tool_names())
            .finish()
    }
}
