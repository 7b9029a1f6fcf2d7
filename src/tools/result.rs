// ABOUTME: Defines ToolResult returned by tool execution.
// ABOUTME: Converts text results into the MCP tools/call response shape.
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Tool Result Types
//!
//! Every tool in this server answers with human-readable text, so a
//! [`ToolResult`] is a text payload plus an error flag.

use crate::mcp::schema::{Content, ToolResponse};

/// Result returned by tool execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolResult {
    /// Formatted text returned to the client
    pub text: String,
    /// Whether this result represents an error condition
    pub is_error: bool,
}

impl ToolResult {
    /// Create a successful text result
    #[must_use]
    pub fn text(message: impl Into<String>) -> Self {
        Self {
            text: message.into(),
            is_error: false,
        }
    }

    /// Create an error text result
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            text: message.into(),
            is_error: true,
        }
    }

    /// Convert into the MCP `tools/call` result
    #[must_use]
    pub fn into_response(self) -> ToolResponse {
        ToolResponse {
            content: vec![Content::Text { text: self.text }],
            is_error: self.is_error,
        }
    }
}
