// ABOUTME: HTTP route assembly for the nutrition MCP server
// ABOUTME: Combines the MCP endpoint and health check behind trace and CORS layers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! HTTP routes
//!
//! Hosts fetch the MCP endpoint cross-origin, so CORS is permissive.

/// Health check route
pub mod health;
/// Model Context Protocol endpoint
pub mod mcp;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::mcp::resources::ServerResources;

pub use health::HealthRoutes;
pub use mcp::McpRoutes;

/// Build the full HTTP router
pub fn router(resources: &Arc<ServerResources>) -> Router {
    Router::new()
        .merge(McpRoutes::routes(Arc::clone(resources)))
        .merge(HealthRoutes::routes(Arc::clone(resources)))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Serve HTTP until Ctrl-C
///
/// # Errors
///
/// Returns an error if the port cannot be bound or the server fails
pub async fn serve(resources: Arc<ServerResources>, port: u16) -> Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind HTTP listener on {addr}"))?;
    info!("MCP HTTP transport listening on http://{}", addr);

    axum::serve(listener, router(&resources))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
    }
    info!("Shutdown signal received");
}
