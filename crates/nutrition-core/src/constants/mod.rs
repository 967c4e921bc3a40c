// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Protocol, error code, tool, widget, and environment constants for the nutrition server
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into small domain modules rather than one flat list.

/// MCP and JSON-RPC protocol constants
pub mod protocol {
    /// JSON-RPC version (standard, not configurable)
    pub const JSONRPC_VERSION: &str = "2.0";
    /// MCP protocol version negotiated during `initialize`
    pub const MCP_PROTOCOL_VERSION: &str = "2025-06-18";
    /// Server name reported in `serverInfo`
    pub const SERVER_NAME: &str = "nutrition-mcp-server";
    /// Server version from Cargo.toml
    pub const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");
}

/// JSON-RPC error codes
pub mod errors {
    /// Invalid JSON was received
    pub const ERROR_PARSE: i32 = -32700;
    /// The JSON sent is not a valid request object
    pub const ERROR_INVALID_REQUEST: i32 = -32600;
    /// The method does not exist or is not available
    pub const ERROR_METHOD_NOT_FOUND: i32 = -32601;
    /// Invalid method parameters
    pub const ERROR_INVALID_PARAMS: i32 = -32602;
    /// Internal JSON-RPC error
    pub const ERROR_INTERNAL_ERROR: i32 = -32603;

    /// Message for [`ERROR_PARSE`]
    pub const MSG_PARSE_ERROR: &str = "Parse error";
    /// Message for [`ERROR_METHOD_NOT_FOUND`]
    pub const MSG_METHOD_NOT_FOUND: &str = "Method not found";
}

/// Tool identifiers and tool-related strings
pub mod tools {
    /// The nutrition analysis tool
    pub const ANALYZE_NUTRITION: &str = "analyze_nutrition";
    /// Human-readable tool title
    pub const ANALYZE_NUTRITION_TITLE: &str = "Analyze Nutrition";
}

/// Widget resource and host rendering directives
pub mod widget {
    /// Resource URI of the widget markup
    pub const WIDGET_URI: &str = "ui://widget/nutrition-tracker.html";
    /// Resource name advertised in `resources/list`
    pub const WIDGET_NAME: &str = "nutrition-tracker";
    /// Mime type hosts expect for widget markup
    pub const WIDGET_MIME_TYPE: &str = "text/html+skybridge";

    /// Directive key: template used to render the tool output
    pub const META_OUTPUT_TEMPLATE: &str = "openai/outputTemplate";
    /// Directive key: status shown while the tool runs
    pub const META_INVOKING: &str = "openai/toolInvocation/invoking";
    /// Directive key: status shown once the tool finished
    pub const META_INVOKED: &str = "openai/toolInvocation/invoked";
    /// Directive key: widget may call tools itself
    pub const META_WIDGET_ACCESSIBLE: &str = "openai/widgetAccessible";
    /// Directive key: result can be rendered by a widget
    pub const META_RESULT_CAN_PRODUCE_WIDGET: &str = "openai/resultCanProduceWidget";

    /// Invoking status text
    pub const INVOKING_TEXT: &str = "Analyzing nutrition...";
    /// Invoked status text
    pub const INVOKED_TEXT: &str = "Nutrition analysis complete";
}

/// Environment variable names
pub mod env_config {
    /// Credential for the live inference service
    pub const OPENAI_API_KEY: &str = "OPENAI_API_KEY";
    /// OpenAI-compatible base URL
    pub const OPENAI_BASE_URL: &str = "OPENAI_BASE_URL";
    /// Model used for nutrition analysis
    pub const NUTRITION_MODEL: &str = "NUTRITION_MODEL";
    /// Timeout of the inference request in seconds
    pub const LLM_REQUEST_TIMEOUT_SECS: &str = "LLM_REQUEST_TIMEOUT_SECS";
    /// HTTP transport port
    pub const HTTP_PORT: &str = "HTTP_PORT";
    /// Optional widget markup override
    pub const WIDGET_HTML_PATH: &str = "WIDGET_HTML_PATH";
}

/// Default configuration values
pub mod defaults {
    /// Default OpenAI-compatible endpoint
    pub const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
    /// Default analysis model
    pub const NUTRITION_MODEL: &str = "gpt-4o-mini";
    /// Default inference request timeout
    pub const LLM_REQUEST_TIMEOUT_SECS: u64 = 60;
    /// Default connect timeout for the inference client
    pub const LLM_CONNECT_TIMEOUT_SECS: u64 = 10;
    /// Default HTTP port
    pub const HTTP_PORT: u16 = 8000;
    /// Sampling temperature for analysis requests
    pub const ANALYSIS_TEMPERATURE: f32 = 0.2;
    /// Completion token cap for analysis requests
    pub const ANALYSIS_MAX_TOKENS: u32 = 2048;
}

/// API endpoints
pub mod endpoints {
    /// Health check endpoint
    pub const HEALTH_CHECK: &str = "/health";
    /// MCP JSON-RPC endpoint
    pub const MCP: &str = "/mcp";
}
