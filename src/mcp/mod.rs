// ABOUTME: Model Context Protocol (MCP) implementation for the nutrition server
// ABOUTME: Message types, request routing, shared resources, and the stdio transport
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod protocol;
pub mod request_processor;
pub mod resources;
pub mod schema;
pub mod transport;
pub mod widget_resource;
