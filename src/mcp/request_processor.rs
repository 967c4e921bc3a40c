// ABOUTME: MCP request processing shared by the stdio and HTTP transports
// ABOUTME: Validates, routes, and executes JSON-RPC requests and maps failures to JSON-RPC errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;
use std::time::Instant;

use serde_json::{json, Value};
use tracing::{debug, warn};

use nutrition_core::constants::errors::{
    ERROR_INTERNAL_ERROR, ERROR_INVALID_PARAMS, ERROR_INVALID_REQUEST, ERROR_PARSE,
    MSG_PARSE_ERROR,
};
use nutrition_core::constants::protocol::JSONRPC_VERSION;

use crate::tools::ToolExecutionContext;

use super::protocol::{request_id, McpRequest, McpResponse, ProtocolHandler};
use super::resources::ServerResources;
use super::schema::ToolCall;

/// Processes MCP protocol requests with validation, routing, and execution
#[derive(Debug, Clone)]
pub struct McpRequestProcessor {
    resources: Arc<ServerResources>,
}

impl McpRequestProcessor {
    /// Create a new MCP request processor
    #[must_use]
    pub const fn new(resources: Arc<ServerResources>) -> Self {
        Self { resources }
    }

    /// Shared resources
    #[must_use]
    pub const fn resources(&self) -> &Arc<ServerResources> {
        &self.resources
    }

    /// Handle one raw JSON-RPC frame
    ///
    /// Returns `None` for notifications.
    pub async fn handle_frame(&self, frame: &str) -> Option<McpResponse> {
        let message: Value = match serde_json::from_str(frame) {
            Ok(message) => message,
            Err(e) => {
                warn!("Invalid JSON-RPC message: {}", e);
                return Some(Self::parse_error_response());
            }
        };
        self.handle_message(message).await
    }

    /// Handle one parsed JSON-RPC message
    pub async fn handle_message(&self, message: Value) -> Option<McpResponse> {
        let id = message.get("id").cloned().unwrap_or(Value::Null);
        match serde_json::from_value::<McpRequest>(message) {
            Ok(request) => self.handle_request(request).await,
            Err(e) => {
                warn!("Failed to parse MCP request: {}", e);
                Some(McpResponse::error(
                    id,
                    ERROR_INVALID_REQUEST,
                    format!("Invalid request: {e}"),
                ))
            }
        }
    }

    /// Handle an MCP request and return a response
    pub async fn handle_request(&self, request: McpRequest) -> Option<McpResponse> {
        let started = Instant::now();
        debug!(method = %request.method, id = ?request.id, "Processing MCP request");

        if request.is_notification() {
            debug!("Received notification: {}", request.method);
            return None;
        }

        let response = if request.jsonrpc == JSONRPC_VERSION {
            self.route(&request).await
        } else {
            McpResponse::error(
                request_id(&request),
                ERROR_INVALID_REQUEST,
                format!(
                    "Invalid JSON-RPC version: got '{}', expected '{}'",
                    request.jsonrpc, JSONRPC_VERSION
                ),
            )
        };

        debug!(
            method = %request.method,
            duration_ms = started.elapsed().as_millis(),
            "MCP request completed"
        );
        Some(response)
    }

    async fn route(&self, request: &McpRequest) -> McpResponse {
        match request.method.as_str() {
            "initialize" => ProtocolHandler::handle_initialize(request),
            "ping" => ProtocolHandler::handle_ping(request),
            "tools/list" => ProtocolHandler::handle_tools_list(request, &self.resources),
            "tools/call" => self.handle_tools_call(request).await,
            "resources/list" => ProtocolHandler::handle_resources_list(request, &self.resources),
            "resources/read" => ProtocolHandler::handle_resources_read(request, &self.resources),
            _ => ProtocolHandler::handle_unknown_method(request),
        }
    }

    /// Handle tools/call request
    ///
    /// Analysis failures come back as a normal result; only argument and
    /// lookup failures become JSON-RPC errors.
    async fn handle_tools_call(&self, request: &McpRequest) -> McpResponse {
        let id = request_id(request);

        let Some(call) = request
            .params
            .clone()
            .and_then(|p| serde_json::from_value::<ToolCall>(p).ok())
        else {
            return McpResponse::error(id, ERROR_INVALID_PARAMS, "Missing tool name");
        };

        let context = ToolExecutionContext::new(Arc::clone(&self.resources));
        let args = call.arguments.unwrap_or_else(|| json!({}));

        match self.resources.tools.execute(&call.name, args, &context).await {
            Ok(result) => match serde_json::to_value(result.into_response()) {
                Ok(value) => McpResponse::success(id, value),
                Err(e) => {
                    warn!("Failed to serialize tool response: {}", e);
                    McpResponse::error(id, ERROR_INTERNAL_ERROR, "Internal error")
                }
            },
            Err(e) => {
                warn!(tool = %call.name, error = %e, "Tool call rejected");
                McpResponse::error(id, e.code.jsonrpc_code(), e.message)
            }
        }
    }

    /// JSON-RPC parse error response
    #[must_use]
    pub fn parse_error_response() -> McpResponse {
        McpResponse::error(Value::Null, ERROR_PARSE, MSG_PARSE_ERROR)
    }
}
