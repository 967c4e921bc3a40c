// ABOUTME: Pluggable MCP tool architecture for the nutrition server
// ABOUTME: Exposes the McpTool trait, the registry, and the nutrition tool implementation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Tools
//!
//! Tools implement [`McpTool`] and are collected in a [`ToolRegistry`] built
//! once at startup. Each call receives a [`ToolExecutionContext`] with the
//! shared server resources.

pub mod context;
pub mod implementations;
pub mod registry;
pub mod result;
pub mod traits;

pub use context::ToolExecutionContext;
pub use registry::ToolRegistry;
pub use result::ToolResult;
pub use traits::{McpTool, ToolCapabilities};
