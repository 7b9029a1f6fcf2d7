// ABOUTME: Defines ToolExecutionContext which gives tools access to shared server resources.
// ABOUTME: Carries the request id for tracing and builds per-call Nutritionix clients.
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Tool Execution Context
//!
//! Every tool call receives a [`ToolExecutionContext`] holding the shared
//! [`ServerResources`] and the JSON-RPC id of the request being served.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::config::ServerConfig;
use crate::external::NutritionixClient;
use crate::mcp::resources::ServerResources;

/// Context provided to every tool execution.
#[derive(Clone)]
pub struct ToolExecutionContext {
    /// Request ID for tracing/logging
    pub request_id: Option<Value>,
    /// Shared server resources
    pub resources: Arc<ServerResources>,
}

impl ToolExecutionContext {
    /// Create a new context
    #[must_use]
    pub const fn new(resources: Arc<ServerResources>) -> Self {
        Self {
            request_id: None,
            resources,
        }
    }

    /// Set request ID for tracing
    #[must_use]
    pub fn with_request_id(mut self, request_id: Value) -> Self {
        self.request_id = Some(request_id);
        self
    }

    /// Server configuration
    #[must_use]
    pub fn config(&self) -> &ServerConfig {
        &self.resources.config
    }

    /// Fresh Nutritionix client for this call, released when dropped
    #[must_use]
    pub fn nutritionix_client(&self) -> NutritionixClient {
        NutritionixClient::new(self.config())
    }
}

impl fmt::Debug for ToolExecutionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolExecutionContext")
            .field("request_id", &self.request_id)
            .field("resources", &"<ServerResources>")
            .finish()
    }
}
