// ABOUTME: Main library entry point for the nutrition MCP server
// ABOUTME: Serves the analyze_nutrition tool and the nutrition tracker widget over MCP
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Nutrition MCP Server
//!
//! A Model Context Protocol server exposing one tool, `analyze_nutrition`,
//! whose result is rendered by a host-embedded nutrition tracker widget.
//!
//! ## Architecture
//!
//! - **Tools**: the analysis strategy selector behind `analyze_nutrition`
//! - **LLM**: an OpenAI-compatible client used for live analysis
//! - **MCP**: JSON-RPC handling over stdio and HTTP
//! - **Config**: environment-only configuration
//!
//! The widget-side logic (envelope normalization, render state, presentation)
//! lives in the `nutrition-widget` crate and is re-exported as [`widget`].
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use nutrition_mcp_server::config::ServerConfig;
//! use nutrition_mcp_server::errors::AppResult;
//!
//! fn main() -> AppResult<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("{}", config.summary());
//!     Ok(())
//! }
//! ```

/// Environment-based configuration
pub mod config;

/// Error types
pub mod errors;

/// Inference provider abstraction and the OpenAI-compatible client
pub mod llm;

/// Structured logging setup
pub mod logging;

/// Model Context Protocol implementation
pub mod mcp;

/// HTTP routes
pub mod routes;

/// MCP tools
pub mod tools;

/// Canonical nutrition data model and shared constants
pub use nutrition_core;

/// Widget-side envelope normalization, render state, and presentation
pub use nutrition_widget as widget;
