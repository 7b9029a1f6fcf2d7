// ABOUTME: Line-delimited JSON-RPC transport for MCP over stdin/stdout
// ABOUTME: Parses one request per line, dispatches it and writes one response line
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use serde_json::Value;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{debug, info, warn};

use super::request_processor::McpRequestProcessor;
use super::resources::ServerResources;
use crate::constants::errors::ERROR_INVALID_REQUEST;
use crate::errors::AppResult;
use crate::jsonrpc::{JsonRpcRequest, JsonRpcResponse};

/// Stdio transport: requests are handled one at a time in arrival order
pub struct StdioTransport {
    processor: McpRequestProcessor,
}

impl StdioTransport {
    /// Creates a new stdio transport instance
    #[must_use]
    pub const fn new(resources: Arc<ServerResources>) -> Self {
        Self {
            processor: McpRequestProcessor::new(resources),
        }
    }

    /// Serve the process stdin/stdout until stdin closes
    ///
    /// # Errors
    /// Returns an error if reading stdin or writing stdout fails
    pub async fn run_stdio(&self) -> AppResult<()> {
        info!("MCP stdio transport ready - listening on stdin/stdout");
        let stdin = BufReader::new(tokio::io::stdin());
        let stdout = tokio::io::stdout();
        self.run(stdin, stdout).await
    }

    /// Serve requests read from `reader`, writing responses to `writer`.
    ///
    /// Returns when the reader reaches end of input.
    ///
    /// # Errors
    /// Returns an error if reading or writing fails
    pub async fn run<R, W>(&self, mut reader: R, mut writer: W) -> AppResult<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut buf = Vec::new();

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf).await? == 0 {
                break;
            }

            let response = match std::str::from_utf8(&buf) {
                Ok(line) if line.trim().is_empty() => continue,
                Ok(line) => self.handle_line(line.trim_end_matches(['\n', '\r'])).await,
                Err(e) => {
                    warn!("Non UTF-8 input line: {}", e);
                    Some(JsonRpcResponse::parse_error())
                }
            };

            if let Some(response) = response {
                Self::write_response(&mut writer, &response).await?;
            }
        }

        debug!("stdin closed, stopping stdio transport");
        Ok(())
    }

    /// Handle one raw line, returning the response to write (if any)
    async fn handle_line(&self, line: &str) -> Option<JsonRpcResponse> {
        let message = match serde_json::from_str::<Value>(line) {
            Ok(message) => message,
            Err(e) => {
                warn!("Invalid JSON-RPC message: {}", e);
                return Some(JsonRpcResponse::parse_error());
            }
        };

        let id = message.get("id").cloned().filter(|id| !id.is_null());
        match serde_json::from_value::<JsonRpcRequest>(message) {
            Ok(request) => self.processor.handle_request(request).await,
            Err(e) => {
                warn!("Malformed JSON-RPC request: {}", e);
                Some(JsonRpcResponse::error(
                    id,
                    ERROR_INVALID_REQUEST,
                    format!("Invalid Request: {e}"),
                ))
            }
        }
    }

    async fn write_response<W>(writer: &mut W, response: &JsonRpcResponse) -> AppResult<()>
    where
        W: AsyncWrite + Unpin,
    {
        let mut json = serde_json::to_vec(response)?;
        json.push(b'\n');
        writer.write_all(&json).await?;
        writer.flush().await?;
        Ok(())
    }
}
