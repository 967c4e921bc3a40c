// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging, a scripted inference provider, and server resource builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `nutrition_mcp_server`

use std::env;
use std::sync::{Arc, Mutex, Once};

use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::Level;

use nutrition_mcp_server::config::{LlmConfig, ServerConfig};
use nutrition_mcp_server::errors::AppError;
use nutrition_mcp_server::llm::{
    ChatRequest, ChatResponse, LlmCapabilities, LlmProvider, TokenUsage,
};
use nutrition_mcp_server::mcp::request_processor::McpRequestProcessor;
use nutrition_mcp_server::mcp::resources::ServerResources;
use nutrition_mcp_server::mcp::widget_resource::WidgetResource;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// What the scripted provider answers
#[derive(Clone)]
pub enum StubReply {
    /// Reply with this body
    Body(String),
    /// Fail with this error
    Fail(AppError),
}

/// Inference provider that replays a fixed answer and records every request
pub struct StubProvider {
    reply: StubReply,
    capabilities: LlmCapabilities,
    requests: Mutex<Vec<ChatRequest>>,
}

impl StubProvider {
    pub fn replying(body: &Value) -> Self {
        Self::new(StubReply::Body(body.to_string()))
    }

    pub fn replying_raw(body: &str) -> Self {
        Self::new(StubReply::Body(body.to_owned()))
    }

    pub fn failing(error: AppError) -> Self {
        Self::new(StubReply::Fail(error))
    }

    /// Advertise a different capability set
    pub const fn with_capabilities(mut self, capabilities: LlmCapabilities) -> Self {
        self.capabilities = capabilities;
        self
    }

    fn new(reply: StubReply) -> Self {
        Self {
            reply,
            capabilities: LlmCapabilities::JSON_MODE.union(LlmCapabilities::SYSTEM_MESSAGES),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Requests seen so far
    pub fn requests(&self) -> Vec<ChatRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmProvider for StubProvider {
    fn name(&self) -> &'static str {
        "stub"
    }

    fn display_name(&self) -> &'static str {
        "Stub Provider"
    }

    fn capabilities(&self) -> LlmCapabilities {
        self.capabilities
    }

    fn default_model(&self) -> &str {
        "stub-model"
    }

    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, AppError> {
        self.requests.lock().unwrap().push(request.clone());
        match &self.reply {
            StubReply::Body(content) => Ok(ChatResponse {
                content: content.clone(),
                model: "stub-model".to_owned(),
                usage: Some(TokenUsage {
                    prompt_tokens: 10,
                    completion_tokens: 20,
                    total_tokens: 30,
                }),
                finish_reason: Some("stop".to_owned()),
            }),
            StubReply::Fail(error) => Err(error.clone()),
        }
    }
}

/// Configuration with or without an inference credential
pub fn test_config(credential: bool) -> ServerConfig {
    ServerConfig {
        llm: LlmConfig {
            api_key: credential.then(|| "sk-test".to_owned()),
            ..LlmConfig::default()
        },
        ..ServerConfig::default()
    }
}

/// Resources using the bundled widget and an optional analyzer
pub fn test_resources(
    credential: bool,
    analyzer: Option<Arc<dyn LlmProvider>>,
) -> Arc<ServerResources> {
    init_test_logging();
    Arc::new(ServerResources::new(
        test_config(credential),
        WidgetResource::bundled(),
        analyzer,
    ))
}

/// Request processor over [`test_resources`]
pub fn test_processor(
    credential: bool,
    analyzer: Option<Arc<dyn LlmProvider>>,
) -> McpRequestProcessor {
    McpRequestProcessor::new(test_resources(credential, analyzer))
}

/// A complete analysis for one meal with three ingredients
pub fn big_mac_payload() -> Value {
    json!({
        "dailyTotals": {"calories": 657, "protein": 30, "carbs": 62, "fat": 35},
        "loggedMeals": [{
            "meal_name": "Big Mac Meal",
            "meal_size": "1 sandwich",
            "total_nutrients": {"calories": 657, "protein": 30, "carbs": 62, "fat": 35},
            "ingredients": [
                {
                    "name": "Big Mac",
                    "brand": "McDonald's",
                    "serving_info": "1 sandwich",
                    "nutrients": {"calories": 563, "protein": 25.5, "carbs": 44, "fat": 33}
                },
                {
                    "name": "Pickles",
                    "serving_info": "2 slices",
                    "nutrients": {"calories": 4, "protein": 0.1, "carbs": 0.8, "fat": 0}
                },
                {
                    "name": "Special sauce",
                    "serving_info": "1 tbsp",
                    "nutrients": {"calories": 90, "protein": 4.4, "carbs": 17.2, "fat": 2}
                }
            ]
        }]
    })
}
