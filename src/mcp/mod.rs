// ABOUTME: Model Context Protocol (MCP) implementation for AI assistant integration
// ABOUTME: Request processing, shared resources, schemas and the stdio transport
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// JSON-RPC method routing and `tools/call` execution
pub mod request_processor;
pub mod resources;
pub mod schema;
/// Newline-delimited JSON-RPC over stdin/stdout
pub mod transport;
