// ABOUTME: MCP request processing and protocol handling for the stdio server
// ABOUTME: Validates, routes, and executes MCP protocol requests with proper error handling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;
use std::time::Instant;

use serde_json::{json, Value};
use tracing::{debug, error, warn};

use super::resources::ServerResources;
use super::schema::{InitializeResponse, ToolCall};
use crate::constants::errors::{
    ERROR_INTERNAL_ERROR, ERROR_INVALID_PARAMS, ERROR_INVALID_REQUEST, ERROR_METHOD_NOT_FOUND,
};
use crate::constants::protocol::{
    JSONRPC_VERSION, MCP_PROTOCOL_VERSION, SERVER_NAME, SERVER_VERSION,
};
use crate::errors::{AppError, ErrorCode};
use crate::jsonrpc::{JsonRpcError, JsonRpcRequest, JsonRpcResponse};
use crate::logging::AppLogger;
use crate::tools::context::ToolExecutionContext;
use crate::tools::result::ToolResult;

/// Processes MCP protocol requests with validation, routing, and execution
pub struct McpRequestProcessor {
    resources: Arc<ServerResources>,
}

impl McpRequestProcessor {
    /// Create a new MCP request processor
    #[must_use]
    pub const fn new(resources: Arc<ServerResources>) -> Self {
        Self { resources }
    }

    /// Handle an MCP request and return a response.
    ///
    /// Notifications (`notifications/*` or a request without an id) return `None`.
    pub async fn handle_request(&self, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
        let start_time = Instant::now();
        debug!(method = %request.method, id = ?request.id, "Processing MCP request");

        if request.method.starts_with("notifications/") || request.is_notification() {
            debug!(method = %request.method, "Received notification");
            return None;
        }

        let response = self.process_request(&request).await;

        debug!(
            method = %request.method,
            duration_ms = start_time.elapsed().as_millis(),
            "MCP request completed"
        );
        Some(response)
    }

    async fn process_request(&self, request: &JsonRpcRequest) -> JsonRpcResponse {
        if request.jsonrpc != JSONRPC_VERSION {
            warn!(version = %request.jsonrpc, "Rejecting request with wrong JSON-RPC version");
            return JsonRpcResponse::error(
                request.id.clone(),
                ERROR_INVALID_REQUEST,
                format!(
                    "Invalid JSON-RPC version: got '{}', expected '{JSONRPC_VERSION}'",
                    request.jsonrpc
                ),
            );
        }

        match request.method.as_str() {
            "initialize" => Self::handle_initialize(request),
            "ping" => JsonRpcResponse::success(request.id.clone(), json!({})),
            "tools/list" => self.handle_tools_list(request),
            "tools/call" => self.handle_tools_call(request).await,
            "resources/list" => {
                JsonRpcResponse::success(request.id.clone(), json!({ "resources": [] }))
            }
            "prompts/list" => {
                JsonRpcResponse::success(request.id.clone(), json!({ "prompts": [] }))
            }
            _ => Self::handle_unknown_method(request),
        }
    }

    /// Handle MCP initialize request
    fn handle_initialize(request: &JsonRpcRequest) -> JsonRpcResponse {
        debug!("Handling initialize request");

        let init = InitializeResponse::new(
            MCP_PROTOCOL_VERSION.to_owned(),
            SERVER_NAME.to_owned(),
            SERVER_VERSION.to_owned(),
        );

        match serde_json::to_value(&init) {
            Ok(result) => JsonRpcResponse::success(request.id.clone(), result),
            Err(e) => Self::error_response(request.id.clone(), &AppError::from(e)),
        }
    }

    /// Handle tools/list request
    fn handle_tools_list(&self, request: &JsonRpcRequest) -> JsonRpcResponse {
        debug!("Handling tools/list request");

        let tools = self.resources.tool_registry.list_schemas();
        JsonRpcResponse::success(request.id.clone(), json!({ "tools": tools }))
    }

    /// Handle tools/call request
    async fn handle_tools_call(&self, request: &JsonRpcRequest) -> JsonRpcResponse {
        let Some(params) = request.params.clone() else {
            return JsonRpcResponse::error(
                request.id.clone(),
                ERROR_INVALID_PARAMS,
                "Missing parameters for tools/call",
            );
        };

        let call: ToolCall = match serde_json::from_value(params) {
            Ok(call) => call,
            Err(e) => {
                return JsonRpcResponse::error(
                    request.id.clone(),
                    ERROR_INVALID_PARAMS,
                    format!("Invalid tools/call parameters: {e}"),
                );
            }
        };

        debug!(tool = %call.name, "Handling tools/call request");

        let mut context = ToolExecutionContext::new(self.resources.clone());
        if let Some(id) = &request.id {
            context = context.with_request_id(id.clone());
        }

        let start = Instant::now();
        let arguments = call.arguments.unwrap_or_else(|| json!({}));
        let outcome = self
            .resources
            .tool_registry
            .execute(&call.name, arguments, &context)
            .await;
        let duration_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);

        let result = match outcome {
            Ok(result) => result,
            Err(e) if e.code == ErrorCode::ResourceNotFound => {
                warn!(tool = %call.name, "Unknown tool requested");
                return Self::error_response(request.id.clone(), &e);
            }
            // Argument errors become error results
            Err(e)
                if matches!(
                    e.code,
                    ErrorCode::InvalidInput | ErrorCode::MissingRequiredField
                ) =>
            {
                ToolResult::error(e.message)
            }
            Err(e) => {
                error!(tool = %call.name, error = %e, "Tool execution failed");
                AppLogger::log_mcp_tool_call(&call.name, false, duration_ms);
                return Self::error_response(request.id.clone(), &e);
            }
        };

        AppLogger::log_mcp_tool_call(&call.name, !result.is_error, duration_ms);

        match serde_json::to_value(result.into_response()) {
            Ok(value) => JsonRpcResponse::success(request.id.clone(), value),
            Err(e) => JsonRpcResponse::error(
                request.id.clone(),
                ERROR_INTERNAL_ERROR,
                format!("Failed to serialize tool result: {e}"),
            ),
        }
    }

    fn handle_unknown_method(request: &JsonRpcRequest) -> JsonRpcResponse {
        warn!(method = %request.method, "Unknown MCP method");
        JsonRpcResponse::error(
            request.id.clone(),
            ERROR_METHOD_NOT_FOUND,
            format!("Method not found: {}", request.method),
        )
    }

    fn error_response(id: Option<Value>, error: &AppError) -> JsonRpcResponse {
        JsonRpcResponse::from_error(id, JsonRpcError::from(error))
    }
}
