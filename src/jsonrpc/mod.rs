// ABOUTME: JSON-RPC 2.0 message types used by the MCP stdio protocol
// ABOUTME: Provides request, response and error shapes plus AppError conversion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # JSON-RPC 2.0 Messages
//!
//! Request, response and error types for line-delimited JSON-RPC 2.0.
//! A request without an `id` is a notification and never receives a response.
//!
//! ```rust
//! use nutritionix_mcp_server::jsonrpc::{JsonRpcRequest, JsonRpcResponse};
//! # use serde_json::json;
//!
//! let request = JsonRpcRequest::with_id("tools/list", None, json!(1));
//! let response = JsonRpcResponse::success(request.id.clone(), json!({"tools": []}));
//! assert!(response.is_success());
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::constants::errors::ERROR_PARSE_ERROR;
use crate::constants::protocol::JSONRPC_VERSION;
use crate::errors::AppError;

/// JSON-RPC 2.0 Request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    /// JSON-RPC version (always "2.0")
    pub jsonrpc: String,

    /// Method name to invoke
    pub method: String,

    /// Optional parameters for the method
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,

    /// Request identifier; absent for notifications
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
}

/// JSON-RPC 2.0 Response
///
/// Exactly one of `result` or `error` is present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    /// JSON-RPC version (always "2.0")
    pub jsonrpc: String,

    /// Result of the method call
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,

    /// Error information
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,

    /// Request identifier; serialized as `null` when unknown
    pub id: Option<Value>,
}

/// JSON-RPC 2.0 Error Object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonRpcError {
    /// Error code
    pub code: i32,

    /// Human-readable error message
    pub message: String,

    /// Additional error information
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl JsonRpcRequest {
    /// Create a request with a specific id
    #[must_use]
    pub fn with_id(method: impl Into<String>, params: Option<Value>, id: Value) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_owned(),
            method: method.into(),
            params,
            id: Some(id),
        }
    }

    /// Create a notification (no id, no response expected)
    #[must_use]
    pub fn notification(method: impl Into<String>, params: Option<Value>) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_owned(),
            method: method.into(),
            params,
            id: None,
        }
    }

    /// True when the request carries no id
    #[must_use]
    pub const fn is_notification(&self) -> bool {
        self.id.is_none()
    }
}

impl JsonRpcResponse {
    /// Create a success response
    #[must_use]
    pub fn success(id: Option<Value>, result: Value) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_owned(),
            result: Some(result),
            error: None,
            id,
        }
    }

    /// Create an error response
    #[must_use]
    pub fn error(id: Option<Value>, code: i32, message: impl Into<String>) -> Self {
        Self::from_error(id, JsonRpcError::new(code, message))
    }

    /// Create an error response from a prepared error object
    #[must_use]
    pub fn from_error(id: Option<Value>, error: JsonRpcError) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_owned(),
            result: None,
            error: Some(error),
            id,
        }
    }

    /// Response for a line that is not valid JSON
    #[must_use]
    pub fn parse_error() -> Self {
        Self::error(None, ERROR_PARSE_ERROR, "Parse error")
    }

    /// Check if this is a success response
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.error.is_none() && self.result.is_some()
    }

    /// Check if this is an error response
    #[must_use]
    pub const fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

impl JsonRpcError {
    /// Create a new error
    #[must_use]
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
        }
    }

    /// Create an error with data
    #[must_use]
    pub fn with_data(code: i32, message: impl Into<String>, data: Value) -> Self {
        Self {
            code,
            message: message.into(),
            data: Some(data),
        }
    }
}

impl From<&AppError> for JsonRpcError {
    fn from(error: &AppError) -> Self {
        Self {
            code: error.code.jsonrpc_code(),
            message: error.message.clone(),
            data: Some(serde_json::json!({ "error_code": error.code })),
        }
    }
}

/// Standard JSON-RPC error codes
pub mod error_codes {
    pub use crate::constants::errors::{
        ERROR_INTERNAL_ERROR as INTERNAL_ERROR, ERROR_INVALID_PARAMS as INVALID_PARAMS,
        ERROR_INVALID_REQUEST as INVALID_REQUEST, ERROR_METHOD_NOT_FOUND as METHOD_NOT_FOUND,
        ERROR_PARSE_ERROR as PARSE_ERROR,
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_error_wire_format() {
        let value = serde_json::to_value(JsonRpcResponse::parse_error()).ok();
        assert_eq!(
            value,
            Some(json!({
                "jsonrpc": "2.0",
                "error": {"code": -32700, "message": "Parse error"},
                "id": null
            }))
        );
    }

    #[test]
    fn test_request_without_id_is_notification() {
        let request: Option<JsonRpcRequest> =
            serde_json::from_str(r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#).ok();
        assert!(request.is_some_and(|r| r.is_notification()));
    }

    #[test]
    fn test_app_error_conversion_uses_jsonrpc_code() {
        let error = AppError::not_found("Tool 'nope'");
        let rpc = JsonRpcError::from(&error);
        assert_eq!(rpc.code, -32602);
        assert_eq!(rpc.message, "Tool 'nope' not found");
    }
}
