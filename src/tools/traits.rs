// ABOUTME: Defines the McpTool trait and ToolCapabilities for the pluggable tools architecture.
// ABOUTME: Tools implement this trait to be registered and executed via the ToolRegistry.
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # MCP Tool Trait and Capabilities
//!
//! All tools implement [`McpTool`], which provides:
//! - Tool metadata (name, description, input schema, host directives)
//! - Capability flags for discovery and logging
//! - Async execution with context

use async_trait::async_trait;
use bitflags::bitflags;
use serde_json::Value;

use crate::errors::AppResult;
use crate::mcp::schema::JsonSchema;

use super::context::ToolExecutionContext;
use super::result::ToolResult;

bitflags! {
    /// Capabilities that tools can declare for filtering and discovery.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ToolCapabilities: u8 {
        /// Tool has no side effects
        const READ_ONLY = 0b0000_0001;
        /// Tool performs analysis on its input
        const ANALYTICS = 0b0000_0010;
        /// Tool may call an external service
        const EXTERNAL_SERVICE = 0b0000_0100;
        /// Tool output is rendered by a host widget
        const PRODUCES_WIDGET = 0b0000_1000;
    }
}

impl ToolCapabilities {
    /// Check if tool output is rendered by a widget
    #[must_use]
    pub const fn produces_widget(self) -> bool {
        self.contains(Self::PRODUCES_WIDGET)
    }

    /// Get a description of all enabled capabilities for logging
    #[must_use]
    pub fn describe(&self) -> String {
        let parts: Vec<&str> = [
            (Self::READ_ONLY, "read_only"),
            (Self::ANALYTICS, "analytics"),
            (Self::EXTERNAL_SERVICE, "external_service"),
            (Self::PRODUCES_WIDGET, "produces_widget"),
        ]
        .into_iter()
        .filter(|(flag, _)| self.contains(*flag))
        .map(|(_, name)| name)
        .collect();

        if parts.is_empty() {
            "none".to_owned()
        } else {
            parts.join(", ")
        }
    }
}

/// The main trait that all MCP tools must implement.
///
/// Tools are registered with the `ToolRegistry` at startup and shared
/// immutably across requests.
#[async_trait]
pub trait McpTool: Send + Sync {
    /// Unique identifier for the tool (e.g., `analyze_nutrition`)
    fn name(&self) -> &'static str;

    /// Human-readable title shown by hosts
    fn title(&self) -> Option<&'static str> {
        None
    }

    /// Description for LLM consumption
    fn description(&self) -> &'static str;

    /// JSON Schema for input parameters
    fn input_schema(&self) -> JsonSchema;

    /// Capability flags for discovery and logging
    fn capabilities(&self) -> ToolCapabilities;

    /// Host directives advertised in `tools/list` under `_meta`
    fn descriptor_meta(&self) -> Option<Value> {
        None
    }

    /// Execute the tool with given arguments and context
    ///
    /// # Errors
    ///
    /// Returns `AppError` when the arguments are invalid. Domain failures are
    /// reported inside the returned `ToolResult` instead.
    async fn execute(&self, args: Value, context: &ToolExecutionContext) -> AppResult<ToolResult>;
}
