// ABOUTME: Health check route handler for service monitoring
// ABOUTME: Reports status, version, and whether live analysis is available
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use serde_json::{json, Value};

use nutrition_core::constants::endpoints::HEALTH_CHECK;
use nutrition_core::constants::protocol::{SERVER_NAME, SERVER_VERSION};

use crate::mcp::resources::ServerResources;

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create the health check route
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(HEALTH_CHECK, get(Self::handle_health))
            .with_state(resources)
    }

    async fn handle_health(State(resources): State<Arc<ServerResources>>) -> Json<Value> {
        Json(json!({
            "status": "healthy",
            "service": SERVER_NAME,
            "version": SERVER_VERSION,
            "environment": resources.config.environment.to_string(),
            "live_analysis": resources.analyzer.is_some(),
            "timestamp": Utc::now().to_rfc3339()
        }))
    }
}
