// ABOUTME: Integration tests for the HTTP MCP endpoint and health check
// ABOUTME: Drives the axum router in-process with tower's oneshot
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use anyhow::Result;
use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::response::Response;
use serde_json::{json, Value};
use tower::ServiceExt;

use nutrition_mcp_server::routes::router;

use common::test_resources;

fn post_mcp(body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/mcp")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_owned()))
        .unwrap()
}

async fn json_body(response: Response) -> Result<Value> {
    let bytes = to_bytes(response.into_body(), usize::MAX).await?;
    Ok(serde_json::from_slice(&bytes)?)
}

#[tokio::test]
async fn test_http_tools_call_deferred() -> Result<()> {
    let app = router(&test_resources(false, None));
    let body = json!({
        "jsonrpc": "2.0",
        "id": 1,
        "method": "tools/call",
        "params": {"name": "analyze_nutrition", "arguments": {"foodDescription": "100g blueberries"}}
    });

    let response = app.oneshot(post_mcp(&body.to_string())).await?;
    assert_eq!(response.status(), StatusCode::OK);

    let value = json_body(response).await?;
    assert_eq!(value["result"]["structuredContent"]["foodDescription"], "100g blueberries");
    Ok(())
}

#[tokio::test]
async fn test_http_notification_is_accepted() -> Result<()> {
    let app = router(&test_resources(false, None));
    let response = app
        .oneshot(post_mcp(r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#))
        .await?;
    assert_eq!(response.status(), StatusCode::ACCEPTED);
    Ok(())
}

#[tokio::test]
async fn test_http_malformed_body_is_parse_error() -> Result<()> {
    let app = router(&test_resources(false, None));
    let response = app.oneshot(post_mcp("{")).await?;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await?["error"]["code"], -32700);
    Ok(())
}

#[tokio::test]
async fn test_health_reports_live_analysis() -> Result<()> {
    let app = router(&test_resources(false, None));
    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty())?)
        .await?;
    assert_eq!(response.status(), StatusCode::OK);

    let value = json_body(response).await?;
    assert_eq!(value["status"], "healthy");
    assert_eq!(value["live_analysis"], false);
    assert!(value["timestamp"].is_string());
    Ok(())
}
