// ABOUTME: JSON-RPC message types and handlers for the core MCP protocol operations
// ABOUTME: Handles initialize, ping, tools/list, resources/list, and resources/read
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # MCP Protocol Handlers
//!
//! Message types shared by both transports, and the handlers for the
//! protocol operations that do not execute tools.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{debug, warn};

use nutrition_core::constants::errors::{
    ERROR_INTERNAL_ERROR, ERROR_INVALID_PARAMS, ERROR_METHOD_NOT_FOUND,
};
use nutrition_core::constants::protocol::JSONRPC_VERSION;

use super::resources::ServerResources;
use super::schema::{
    InitializeResponse, ListResourcesResponse, ListToolsResponse, ReadResourceRequest,
    ReadResourceResponse,
};

/// MCP request
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct McpRequest {
    /// Protocol version marker, always "2.0"
    pub jsonrpc: String,
    /// Method name
    pub method: String,
    /// Method parameters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,
    /// Optional ID - notifications don't have IDs, only regular requests do
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
}

impl McpRequest {
    /// Whether this message expects no response
    #[must_use]
    pub fn is_notification(&self) -> bool {
        self.method.starts_with("notifications/")
    }
}

/// MCP response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct McpResponse {
    /// Protocol version marker
    pub jsonrpc: String,
    /// Successful result
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    /// Failure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<McpError>,
    /// Echo of the request ID, `null` when unknown
    pub id: Value,
}

/// MCP error
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct McpError {
    /// JSON-RPC error code
    pub code: i32,
    /// Error message
    pub message: String,
    /// Additional error data
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl McpError {
    /// Create a new MCP error
    #[must_use]
    pub const fn new(code: i32, message: String) -> Self {
        Self {
            code,
            message,
            data: None,
        }
    }
}

impl McpResponse {
    /// Create a successful MCP response
    #[must_use]
    pub fn success(id: Value, result: Value) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_owned(),
            result: Some(result),
            error: None,
            id,
        }
    }

    /// Create an error MCP response
    #[must_use]
    pub fn error(id: Value, code: i32, message: impl Into<String>) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_owned(),
            result: None,
            error: Some(McpError::new(code, message.into())),
            id,
        }
    }

    /// Serialize `result` or answer with an internal error
    fn from_serializable<T: Serialize>(id: Value, result: &T) -> Self {
        match serde_json::to_value(result) {
            Ok(value) => Self::success(id, value),
            Err(e) => {
                warn!("Failed to serialize MCP result: {}", e);
                Self::error(id, ERROR_INTERNAL_ERROR, "Internal error")
            }
        }
    }
}

/// Default ID for responses to requests that carried none
pub(crate) fn request_id(request: &McpRequest) -> Value {
    request.id.clone().unwrap_or(Value::Null)
}

/// MCP protocol handlers
pub struct ProtocolHandler;

impl ProtocolHandler {
    /// Handle initialize request
    #[must_use]
    pub fn handle_initialize(request: &McpRequest) -> McpResponse {
        debug!("Handling initialize request");
        McpResponse::from_serializable(request_id(request), &InitializeResponse::new())
    }

    /// Handle ping request
    #[must_use]
    pub fn handle_ping(request: &McpRequest) -> McpResponse {
        McpResponse::success(request_id(request), json!({}))
    }

    /// Handle tools list request
    #[must_use]
    pub fn handle_tools_list(request: &McpRequest, resources: &ServerResources) -> McpResponse {
        debug!("Handling tools/list request");
        let response = ListToolsResponse {
            tools: resources.tools.schemas(),
        };
        McpResponse::from_serializable(request_id(request), &response)
    }

    /// Handle resources list request
    #[must_use]
    pub fn handle_resources_list(request: &McpRequest, resources: &ServerResources) -> McpResponse {
        let response = ListResourcesResponse {
            resources: vec![resources.widget.schema()],
        };
        McpResponse::from_serializable(request_id(request), &response)
    }

    /// Handle resources read request
    #[must_use]
    pub fn handle_resources_read(request: &McpRequest, resources: &ServerResources) -> McpResponse {
        let id = request_id(request);

        let Some(read) = request
            .params
            .clone()
            .and_then(|p| serde_json::from_value::<ReadResourceRequest>(p).ok())
        else {
            return McpResponse::error(id, ERROR_INVALID_PARAMS, "Missing uri parameter");
        };

        if read.uri != resources.widget.uri() {
            return McpResponse::error(
                id,
                ERROR_INVALID_PARAMS,
                format!("Unknown resource URI: {}", read.uri),
            );
        }

        let response = ReadResourceResponse {
            contents: vec![resources.widget.contents()],
        };
        McpResponse::from_serializable(id, &response)
    }

    /// Handle unknown method request
    #[must_use]
    pub fn handle_unknown_method(request: &McpRequest) -> McpResponse {
        McpResponse::error(
            request_id(request),
            ERROR_METHOD_NOT_FOUND,
            format!("Unknown method: {}", request.method),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_detection() {
        let request: McpRequest = serde_json::from_value(json!({
            "jsonrpc": "2.0",
            "method": "notifications/initialized"
        }))
        .unwrap();
        assert!(request.is_notification());
        assert_eq!(request_id(&request), Value::Null);
    }

    #[test]
    fn test_error_response_omits_result() {
        let value =
            serde_json::to_value(McpResponse::error(json!(7), ERROR_METHOD_NOT_FOUND, "nope"))
                .unwrap();
        assert!(value.get("result").is_none());
        assert_eq!(value["error"]["code"], json!(-32601));
        assert_eq!(value["id"], json!(7));
    }
}
