// ABOUTME: Integration tests for the analyze_nutrition strategy selector
// ABOUTME: Exercises passthrough, deferral, and live analysis through a scripted provider
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::sync::Arc;

use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::json;

use nutrition_core::constants::widget::{META_OUTPUT_TEMPLATE, WIDGET_URI};
use nutrition_mcp_server::errors::{AnalysisError, AppError, ErrorCode};
use nutrition_core::constants::defaults::ANALYSIS_MAX_TOKENS;
use nutrition_mcp_server::llm::{LlmCapabilities, MessageRole, ResponseFormat};
use nutrition_mcp_server::tools::implementations::nutrition::{
    fulfill, select_strategy, widget_directives, AnalysisStrategy, AnalyzeNutritionRequest,
};
use nutrition_mcp_server::tools::ToolExecutionContext;

use common::{big_mac_payload, init_test_logging, test_resources, StubProvider};

#[test]
fn test_strategy_is_chosen_by_inputs() {
    let bare = AnalyzeNutritionRequest::new("100g blueberries");
    let complete = bare.clone().with_analyzed_data(big_mac_payload());

    assert_eq!(select_strategy(&bare, false), AnalysisStrategy::Deferred);
    assert_eq!(select_strategy(&bare, true), AnalysisStrategy::LiveService);
    assert_eq!(
        select_strategy(&complete, true),
        AnalysisStrategy::Passthrough(big_mac_payload())
    );
    assert_eq!(
        select_strategy(&complete, false),
        AnalysisStrategy::Passthrough(big_mac_payload())
    );
}

#[test]
fn test_payload_without_totals_is_incomplete() {
    let request = AnalyzeNutritionRequest::new("toast")
        .with_analyzed_data(json!({"loggedMeals": [{"meal_name": "Toast"}]}));
    assert_eq!(select_strategy(&request, false), AnalysisStrategy::Deferred);
}

#[tokio::test]
async fn test_deferred_without_credential() {
    init_test_logging();
    let request = AnalyzeNutritionRequest::new("100g blueberries");
    let envelope = fulfill(&request, false, None).await;

    assert_eq!(envelope.strategy, "deferred");
    assert_eq!(envelope.structured_content["foodDescription"], "100g blueberries");
    let error = envelope.error().unwrap();
    assert!(!error.is_empty());
    assert_eq!(error, AnalysisError::Deferred.to_string());
    assert_eq!(envelope.text, error);
    assert!(envelope.structured_content.get("loggedMeals").is_none());
    assert_eq!(envelope.meta, widget_directives());
}

#[tokio::test]
async fn test_passthrough_returns_payload_verbatim() {
    let stub = StubProvider::replying(&json!({}));
    let request = AnalyzeNutritionRequest::new("big mac meal").with_analyzed_data(big_mac_payload());
    let envelope = fulfill(&request, true, Some(&stub)).await;

    assert_eq!(envelope.strategy, "passthrough");
    assert_eq!(envelope.structured_content, big_mac_payload());
    assert_eq!(envelope.text, "Analyzed nutrition for: big mac meal");
    assert!(stub.requests().is_empty());
}

#[tokio::test]
async fn test_live_service_parses_reply() {
    let stub = StubProvider::replying(&big_mac_payload());
    let request = AnalyzeNutritionRequest::new("a Big Mac meal");
    let envelope = fulfill(&request, true, Some(&stub)).await;

    assert_eq!(envelope.strategy, "live_service");
    assert_eq!(envelope.structured_content, big_mac_payload());
    assert!(envelope.error().is_none());

    let requests = stub.requests();
    assert_eq!(requests.len(), 1);
    let sent = &requests[0];
    assert_eq!(sent.response_format, ResponseFormat::JsonObject);
    assert_eq!(sent.messages[0].role, MessageRole::System);
    assert_eq!(sent.messages[1].role, MessageRole::User);
    assert!(sent.messages[1].content.contains("a Big Mac meal"));
    assert_eq!(sent.max_tokens, Some(ANALYSIS_MAX_TOKENS));
}

#[tokio::test]
async fn test_live_service_adapts_to_plain_provider() {
    let stub =
        StubProvider::replying(&big_mac_payload()).with_capabilities(LlmCapabilities::empty());
    let envelope = fulfill(&AnalyzeNutritionRequest::new("a Big Mac meal"), true, Some(&stub)).await;

    assert!(envelope.error().is_none());
    let sent = &stub.requests()[0];
    assert_eq!(sent.response_format, ResponseFormat::Text);
    assert_eq!(sent.messages.len(), 1);
    assert_eq!(sent.messages[0].role, MessageRole::User);
    assert!(sent.messages[0].content.contains("a Big Mac meal"));
}

#[tokio::test]
async fn test_live_service_rejects_null_sections() {
    for reply in [
        json!({"dailyTotals": null, "loggedMeals": []}),
        json!({"dailyTotals": {"calories": 100}, "loggedMeals": null}),
    ] {
        let stub = StubProvider::replying(&reply);
        let envelope = fulfill(&AnalyzeNutritionRequest::new("soup"), true, Some(&stub)).await;
        assert_eq!(
            envelope.error(),
            Some(AnalysisError::ValidationFailed.to_string().as_str())
        );
    }
}

#[tokio::test]
async fn test_live_service_rejects_reply_missing_meals() {
    let stub = StubProvider::replying(&json!({"dailyTotals": {"calories": 100}}));
    let envelope = fulfill(&AnalyzeNutritionRequest::new("soup"), true, Some(&stub)).await;

    assert_eq!(
        envelope.error(),
        Some(AnalysisError::ValidationFailed.to_string().as_str())
    );
    assert_eq!(envelope.structured_content["foodDescription"], "soup");
}

#[tokio::test]
async fn test_live_service_reports_non_json_reply() {
    let stub = StubProvider::replying_raw("I think it is about 300 calories");
    let envelope = fulfill(&AnalyzeNutritionRequest::new("soup"), true, Some(&stub)).await;

    let error = envelope.error().unwrap();
    assert!(error.starts_with("Nutrition analysis failed:"));
}

#[tokio::test]
async fn test_live_service_carries_upstream_message() {
    let stub = StubProvider::failing(AppError::new(
        ErrorCode::ExternalRateLimited,
        "OpenAI API rate limit exceeded",
    ));
    let envelope = fulfill(&AnalyzeNutritionRequest::new("soup"), true, Some(&stub)).await;

    assert_eq!(
        envelope.error(),
        Some("Nutrition analysis failed: OpenAI API rate limit exceeded")
    );
    assert_eq!(stub.requests().len(), 1);
}

#[tokio::test]
async fn test_credential_without_client_is_reported() {
    let envelope = fulfill(&AnalyzeNutritionRequest::new("soup"), true, None).await;
    assert_eq!(
        envelope.error(),
        Some(AnalysisError::CredentialMissing.to_string().as_str())
    );
}

#[tokio::test]
async fn test_tool_execution_uses_server_resources() -> Result<()> {
    let stub = Arc::new(StubProvider::replying(&big_mac_payload()));
    let resources = test_resources(true, Some(stub.clone()));
    let context = ToolExecutionContext::new(resources.clone());

    let result = resources
        .tools
        .execute(
            "analyze_nutrition",
            json!({"foodDescription": "a Big Mac meal"}),
            &context,
        )
        .await?;

    assert!(!result.is_error);
    assert_eq!(result.structured_content, Some(big_mac_payload()));
    assert_eq!(result.meta.as_ref().unwrap()[META_OUTPUT_TEMPLATE], WIDGET_URI);
    assert_eq!(stub.requests().len(), 1);
    Ok(())
}

#[tokio::test]
async fn test_tool_rejects_missing_description() {
    let resources = test_resources(false, None);
    let context = ToolExecutionContext::new(resources.clone());

    let error = resources
        .tools
        .execute("analyze_nutrition", json!({}), &context)
        .await
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::MissingRequiredField);
}
