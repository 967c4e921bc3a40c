// ABOUTME: Defines ToolResult, the value returned by tool execution.
// ABOUTME: Carries text, structured content, and host directives and converts into the MCP response.
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Tool Result Types
//!
//! Bridges tool implementations with the MCP `tools/call` response format.

use serde_json::Value;

use crate::mcp::schema::{Content, ToolResponse};

/// Result returned by tool execution.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolResult {
    /// Human-readable summary
    pub text: String,
    /// Machine-readable payload
    pub structured_content: Option<Value>,
    /// Host rendering directives
    pub meta: Option<Value>,
    /// Whether this result represents an error condition
    pub is_error: bool,
}

impl ToolResult {
    /// Create a successful result with text and structured content
    #[must_use]
    pub fn ok(text: impl Into<String>, structured_content: Value) -> Self {
        Self {
            text: text.into(),
            structured_content: Some(structured_content),
            meta: None,
            is_error: false,
        }
    }

    /// Create a text-only result
    #[must_use]
    pub fn text(message: impl Into<String>) -> Self {
        Self {
            text: message.into(),
            structured_content: None,
            meta: None,
            is_error: false,
        }
    }

    /// Attach host rendering directives
    #[must_use]
    pub fn with_meta(mut self, meta: Value) -> Self {
        self.meta = Some(meta);
        self
    }

    /// Convert into the MCP wire response
    #[must_use]
    pub fn into_response(self) -> ToolResponse {
        ToolResponse {
            content: vec![Content::Text { text: self.text }],
            is_error: self.is_error,
            structured_content: self.structured_content,
            meta: self.meta,
        }
    }
}
