// ABOUTME: Defines ToolExecutionContext which gives tools access to shared server resources.
// ABOUTME: Carries a per-request id for log correlation alongside the Arc'd resources.
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Tool Execution Context

use std::fmt;
use std::sync::Arc;

use uuid::Uuid;

use crate::mcp::resources::ServerResources;

/// Context provided to every tool execution.
///
/// `resources` is shared read-only across concurrent requests; cloning the
/// context only bumps the `Arc`.
#[derive(Clone)]
pub struct ToolExecutionContext {
    /// Request ID for tracing/logging
    pub request_id: Uuid,
    /// Access to all server resources
    pub resources: Arc<ServerResources>,
}

impl ToolExecutionContext {
    /// Create a context with a fresh request id
    #[must_use]
    pub fn new(resources: Arc<ServerResources>) -> Self {
        Self {
            request_id: Uuid::new_v4(),
            resources,
        }
    }

    /// Request id as a string for structured logs
    #[must_use]
    pub fn request_id_str(&self) -> String {
        self.request_id.to_string()
    }
}

impl fmt::Debug for ToolExecutionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolExecutionContext")
            .field("request_id", &self.request_id)
            .field("resources", &"<ServerResources>")
            .finish()
    }
}
