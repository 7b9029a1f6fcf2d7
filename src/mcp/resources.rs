// ABOUTME: Centralized resource container for dependency injection in the MCP server
// ABOUTME: Holds the immutable server configuration and the tool registry
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Server Resources Module
//!
//! Everything a request needs, built once at startup and shared behind `Arc`.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::tools::registry::ToolRegistry;

/// Centralized resource container for dependency injection
#[derive(Clone)]
pub struct ServerResources {
    /// Immutable server configuration
    pub config: Arc<ServerConfig>,
    /// Registered MCP tools
    pub tool_registry: Arc<ToolRegistry>,
}

impl ServerResources {
    /// Create resources with every built-in tool registered
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        Self::with_registry(config, ToolRegistry::with_builtin_tools())
    }

    /// Create resources with a caller-supplied registry
    #[must_use]
    pub fn with_registry(config: ServerConfig, tool_registry: ToolRegistry) -> Self {
        Self {
            config: Arc::new(config),
            tool_registry: Arc::new(tool_registry),
        }
    }
}
