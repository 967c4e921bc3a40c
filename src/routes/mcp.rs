// ABOUTME: HTTP transport for MCP: JSON-RPC frames posted to a single endpoint
// ABOUTME: Notifications are acknowledged with 202 and no body
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};

use nutrition_core::constants::endpoints::MCP;

use crate::mcp::request_processor::McpRequestProcessor;
use crate::mcp::resources::ServerResources;

/// MCP routes implementation
pub struct McpRoutes;

impl McpRoutes {
    /// Create the MCP endpoint
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(MCP, post(Self::handle_mcp))
            .with_state(McpRequestProcessor::new(resources))
    }

    /// The body is taken as text so malformed JSON still gets a JSON-RPC parse error
    async fn handle_mcp(State(processor): State<McpRequestProcessor>, body: String) -> Response {
        match processor.handle_frame(&body).await {
            Some(response) => Json(response).into_response(),
            None => StatusCode::ACCEPTED.into_response(),
        }
    }
}
