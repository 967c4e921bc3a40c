// ABOUTME: Central registry for MCP tools with lookup, schema listing, and timed execution.
// ABOUTME: Built once at startup and shared immutably across transports.
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Tool Registry
//!
//! Central registry for MCP tools, providing:
//! - Tool registration and lookup
//! - Schema generation for MCP tools/list responses
//! - Execution with timing and structured logging

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use serde_json::Value;
use tracing::{debug, warn};

use crate::errors::{AppError, AppResult};
use crate::logging::AppLogger;
use crate::mcp::schema::ToolSchema;

use super::context::ToolExecutionContext;
use super::implementations::nutrition::create_nutrition_tools;
use super::result::ToolResult;
use super::traits::McpTool;

/// Central registry for MCP tools.
///
/// Built once at startup, then used immutably. Tools are listed in name order.
pub struct ToolRegistry {
    tools: BTreeMap<String, Arc<dyn McpTool>>,
}

impl ToolRegistry {
    /// Create a new empty registry
    #[must_use]
    pub const fn new() -> Self {
        Self {
            tools: BTreeMap::new(),
        }
    }

    /// Create a registry holding every built-in tool
    #[must_use]
    pub fn with_builtin_tools() -> Self {
        let mut registry = Self::new();
        for tool in create_nutrition_tools() {
            registry.register(Arc::from(tool));
        }
        registry
    }

    /// Register a tool in the registry
    ///
    /// Returns `false` if a tool with the same name exists
    pub fn register(&mut self, tool: Arc<dyn McpTool>) -> bool {
        let name = tool.name().to_owned();
        if self.tools.contains_key(&name) {
            warn!("Tool '{}' is already registered, skipping", name);
            return false;
        }
        debug!(
            "Registering tool '{}' with capabilities: {}",
            name,
            tool.capabilities().describe()
        );
        self.tools.insert(name, tool);
        true
    }

    /// Get a tool by name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Arc<dyn McpTool>> {
        self.tools.get(name)
    }

    /// Get the number of registered tools
    #[must_use]
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Check if the registry is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// List all tool names
    #[must_use]
    pub fn tool_names(&self) -> Vec<&str> {
        self.tools.keys().map(String::as_str).collect()
    }

    /// Schemas for `tools/list`
    ///
    /// Host directives are only advertised for tools rendered by a widget.
    #[must_use]
    pub fn schemas(&self) -> Vec<ToolSchema> {
        self.tools
            .values()
            .map(|tool| ToolSchema {
                name: tool.name().to_owned(),
                title: tool.title().map(str::to_owned),
                description: tool.description().to_owned(),
                input_schema: tool.input_schema(),
                meta: if tool.capabilities().produces_widget() {
                    tool.descriptor_meta()
                } else {
                    None
                },
            })
            .collect()
    }

    /// Execute a tool by name
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for unknown tools and propagates argument
    /// validation errors from the tool.
    pub async fn execute(
        &self,
        name: &str,
        args: Value,
        context: &ToolExecutionContext,
    ) -> AppResult<ToolResult> {
        let tool = self
            .get(name)
            .ok_or_else(|| AppError::not_found(format!("Tool '{name}'")))?;

        let started = Instant::now();
        let result = tool.execute(args, context).await;
        let duration_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

        AppLogger::log_mcp_tool_call(
            &context.request_id_str(),
            name,
            result.as_ref().is_ok_and(|r| !r.is_error),
            duration_ms,
        );
        result
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ToolRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolRegistry")
            .field("tools", &self.tool_names())
            .finish()
    }
}
