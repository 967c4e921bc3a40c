// ABOUTME: The analyze_nutrition tool and the strategy selector that fulfills it.
// ABOUTME: Chooses passthrough, deferral, or a live inference call and always returns one envelope shape.
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Nutrition Analysis Tool
//!
//! `analyze_nutrition` obtains analyzed nutrition data in one of three ways,
//! selected by what the request carries rather than by a mode flag:
//!
//! - **Passthrough**: the caller already supplied complete `analyzedData`;
//!   it is returned verbatim.
//! - **Deferred**: nothing was supplied and live analysis is not configured;
//!   the caller is asked to resubmit with `analyzedData`.
//! - **Live service**: nothing was supplied and a credential is configured;
//!   one inference request is made.
//!
//! Every path produces an [`AnalysisEnvelope`] with the same directives.
//! Failures end up in `structuredContent.error`, never in a protocol error.

use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::{debug, warn};

use nutrition_core::constants::defaults::{ANALYSIS_MAX_TOKENS, ANALYSIS_TEMPERATURE};
use nutrition_core::constants::tools::{ANALYZE_NUTRITION, ANALYZE_NUTRITION_TITLE};
use nutrition_core::constants::widget::{
    INVOKED_TEXT, INVOKING_TEXT, META_INVOKED, META_INVOKING, META_OUTPUT_TEMPLATE,
    META_RESULT_CAN_PRODUCE_WIDGET, META_WIDGET_ACCESSIBLE, WIDGET_URI,
};

use crate::errors::{AnalysisError, AppError, AppResult};
use crate::llm::prompts::{nutrition_analysis_prompt, NUTRITION_SYSTEM_PROMPT};
use crate::llm::{ChatMessage, ChatRequest, LlmProvider};
use crate::logging::AppLogger;
use crate::mcp::schema::{JsonSchema, PropertySchema};
use crate::tools::context::ToolExecutionContext;
use crate::tools::result::ToolResult;
use crate::tools::traits::{McpTool, ToolCapabilities};

const FOOD_DESCRIPTION: &str = "foodDescription";
const ANALYZED_DATA: &str = "analyzedData";
const DAILY_TOTALS: &str = "dailyTotals";
const LOGGED_MEALS: &str = "loggedMeals";

// ============================================================================
// Request
// ============================================================================

/// Validated `analyze_nutrition` arguments
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzeNutritionRequest {
    /// Free-text description of what was eaten
    pub food_description: String,
    /// Caller-supplied analysis, if any
    pub analyzed_data: Option<Value>,
}

impl AnalyzeNutritionRequest {
    /// Create a request without pre-analyzed data
    #[must_use]
    pub fn new(food_description: impl Into<String>) -> Self {
        Self {
            food_description: food_description.into(),
            analyzed_data: None,
        }
    }

    /// Attach caller-supplied analysis
    #[must_use]
    pub fn with_analyzed_data(mut self, analyzed_data: Value) -> Self {
        self.analyzed_data = Some(analyzed_data);
        self
    }

    /// Parse and validate tool arguments
    ///
    /// # Errors
    ///
    /// Returns an error when `foodDescription` is missing, blank, or not a string
    pub fn from_args(args: &Value) -> AppResult<Self> {
        let food_description = match args.get(FOOD_DESCRIPTION) {
            None | Some(Value::Null) => return Err(AppError::missing_field(FOOD_DESCRIPTION)),
            Some(Value::String(text)) if text.trim().is_empty() => {
                return Err(AppError::invalid_input("foodDescription must not be blank"));
            }
            Some(Value::String(text)) => text.clone(),
            Some(_) => return Err(AppError::invalid_input("foodDescription must be a string")),
        };

        Ok(Self {
            food_description,
            analyzed_data: args.get(ANALYZED_DATA).filter(|v| !v.is_null()).cloned(),
        })
    }
}

// ============================================================================
// Strategy selection
// ============================================================================

/// How a request will be fulfilled
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisStrategy {
    /// Return the caller's complete payload verbatim
    Passthrough(Value),
    /// Ask the caller to resubmit with analysis populated
    Deferred,
    /// Call the inference service once
    LiveService,
}

impl AnalysisStrategy {
    /// Strategy name for logs
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Passthrough(_) => "passthrough",
            Self::Deferred => "deferred",
            Self::LiveService => "live_service",
        }
    }
}

/// Whether a payload carries both an aggregate totals object and at least one meal
#[must_use]
pub fn is_complete_payload(payload: &Value) -> bool {
    let has_totals = payload.get(DAILY_TOTALS).is_some_and(Value::is_object);
    let has_meals = payload
        .get(LOGGED_MEALS)
        .and_then(Value::as_array)
        .is_some_and(|meals| !meals.is_empty());
    has_totals && has_meals
}

/// Pick the fulfillment strategy from what the request carries
///
/// An incomplete `analyzedData` counts as not supplied.
#[must_use]
pub fn select_strategy(
    request: &AnalyzeNutritionRequest,
    credential_configured: bool,
) -> AnalysisStrategy {
    match &request.analyzed_data {
        Some(payload) if is_complete_payload(payload) => {
            AnalysisStrategy::Passthrough(payload.clone())
        }
        _ if credential_configured => AnalysisStrategy::LiveService,
        _ => AnalysisStrategy::Deferred,
    }
}

// ============================================================================
// Envelope
// ============================================================================

/// Host rendering directives attached to every response
#[must_use]
pub fn widget_directives() -> Value {
    json!({
        META_OUTPUT_TEMPLATE: WIDGET_URI,
        META_INVOKING: INVOKING_TEXT,
        META_INVOKED: INVOKED_TEXT,
        META_WIDGET_ACCESSIBLE: true,
        META_RESULT_CAN_PRODUCE_WIDGET: true,
    })
}

/// Uniform response produced by every strategy
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisEnvelope {
    /// Strategy that produced this envelope
    pub strategy: &'static str,
    /// Human-readable summary
    pub text: String,
    /// Meal data, or `{foodDescription, error}` on failure
    pub structured_content: Value,
    /// Host rendering directives
    pub meta: Value,
}

impl AnalysisEnvelope {
    fn analyzed(strategy: &'static str, food_description: &str, data: Value) -> Self {
        Self {
            strategy,
            text: format!("Analyzed nutrition for: {food_description}"),
            structured_content: data,
            meta: widget_directives(),
        }
    }

    fn failed(strategy: &'static str, food_description: &str, error: &AnalysisError) -> Self {
        let message = error.to_string();
        Self {
            strategy,
            text: message.clone(),
            structured_content: json!({
                FOOD_DESCRIPTION: food_description,
                "error": message,
            }),
            meta: widget_directives(),
        }
    }

    /// Error message carried in the structured content, if any
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.structured_content.get("error").and_then(Value::as_str)
    }

    /// Convert into a tool result
    #[must_use]
    pub fn into_tool_result(self) -> ToolResult {
        ToolResult::ok(self.text, self.structured_content).with_meta(self.meta)
    }
}

// ============================================================================
// Live analysis
// ============================================================================

/// Run one inference request and validate its body
///
/// # Errors
///
/// Returns `UpstreamCallFailed` when the call fails or the body is not a JSON
/// object, and `ValidationFailed` when `dailyTotals` or `loggedMeals` is
/// missing or `null`.
pub async fn analyze_live(
    food_description: &str,
    analyzer: &dyn LlmProvider,
) -> Result<Value, AnalysisError> {
    let capabilities = analyzer.capabilities();
    let user_prompt = nutrition_analysis_prompt(food_description);
    let messages = if capabilities.supports_system_messages() {
        vec![
            ChatMessage::system(NUTRITION_SYSTEM_PROMPT),
            ChatMessage::user(user_prompt),
        ]
    } else {
        vec![ChatMessage::user(format!(
            "{NUTRITION_SYSTEM_PROMPT}\n\n{user_prompt}"
        ))]
    };

    let mut request = ChatRequest::new(messages)
        .with_model(analyzer.default_model())
        .with_temperature(ANALYSIS_TEMPERATURE)
        .with_max_tokens(ANALYSIS_MAX_TOKENS);
    if capabilities.supports_json_mode() {
        request = request.with_json_response();
    }

    debug!(
        provider = analyzer.display_name(),
        json_mode = capabilities.supports_json_mode(),
        "Requesting nutrition analysis"
    );

    let response = analyzer
        .complete(&request)
        .await
        .map_err(|e| AnalysisError::upstream(&e))?;

    debug!(model = %response.model, "Inference response received");

    let parsed: Value =
        serde_json::from_str(&response.content).map_err(|e| AnalysisError::UpstreamCallFailed {
            message: format!("response was not valid JSON: {e}"),
        })?;

    if !parsed.is_object() {
        return Err(AnalysisError::UpstreamCallFailed {
            message: "response was not a JSON object".to_owned(),
        });
    }
    let present = |key: &str| parsed.get(key).is_some_and(|v| !v.is_null());
    if !present(DAILY_TOTALS) || !present(LOGGED_MEALS) {
        return Err(AnalysisError::ValidationFailed);
    }
    Ok(parsed)
}

/// Fulfill a request with the strategy its inputs select
///
/// `analyzer` is `None` when no inference client could be built; with a
/// credential configured that yields a `CredentialMissing` failure.
pub async fn fulfill(
    request: &AnalyzeNutritionRequest,
    credential_configured: bool,
    analyzer: Option<&dyn LlmProvider>,
) -> AnalysisEnvelope {
    let strategy = select_strategy(request, credential_configured);
    let name = strategy.as_str();
    let description = request.food_description.as_str();

    match strategy {
        AnalysisStrategy::Passthrough(payload) => {
            AnalysisEnvelope::analyzed(name, description, payload)
        }
        AnalysisStrategy::Deferred => {
            AnalysisEnvelope::failed(name, description, &AnalysisError::Deferred)
        }
        AnalysisStrategy::LiveService => {
            let Some(analyzer) = analyzer else {
                return AnalysisEnvelope::failed(
                    name,
                    description,
                    &AnalysisError::CredentialMissing,
                );
            };
            match analyze_live(description, analyzer).await {
                Ok(data) => AnalysisEnvelope::analyzed(name, description, data),
                Err(e) => AnalysisEnvelope::failed(name, description, &e),
            }
        }
    }
}

// ============================================================================
// AnalyzeNutritionTool
// ============================================================================

/// Tool analyzing a free-text food description for the nutrition widget
pub struct AnalyzeNutritionTool;

#[async_trait]
impl McpTool for AnalyzeNutritionTool {
    fn name(&self) -> &'static str {
        ANALYZE_NUTRITION
    }

    fn title(&self) -> Option<&'static str> {
        Some(ANALYZE_NUTRITION_TITLE)
    }

    fn description(&self) -> &'static str {
        "Analyze the nutritional content of foods or meals described in free text and show \
         daily totals and per-meal breakdowns in the nutrition tracker widget. If you can \
         estimate the nutrition yourself, pass it as analyzedData with dailyTotals and loggedMeals."
    }

    fn input_schema(&self) -> JsonSchema {
        let mut properties = HashMap::new();
        properties.insert(
            FOOD_DESCRIPTION.to_owned(),
            PropertySchema {
                property_type: "string".to_owned(),
                description: Some(
                    "What was eaten, e.g. 'a Big Mac meal' or '100g blueberries'".to_owned(),
                ),
            },
        );
        properties.insert(
            ANALYZED_DATA.to_owned(),
            PropertySchema {
                property_type: "object".to_owned(),
                description: Some(
                    "Pre-analyzed nutrition with dailyTotals {calories, protein, carbs, fat} \
                     and loggedMeals [{meal_name, meal_size, total_nutrients, ingredients}]"
                        .to_owned(),
                ),
            },
        );

        JsonSchema {
            schema_type: "object".to_owned(),
            properties: Some(properties),
            required: Some(vec![FOOD_DESCRIPTION.to_owned()]),
        }
    }

    fn capabilities(&self) -> ToolCapabilities {
        ToolCapabilities::READ_ONLY
            | ToolCapabilities::ANALYTICS
            | ToolCapabilities::EXTERNAL_SERVICE
            | ToolCapabilities::PRODUCES_WIDGET
    }

    fn descriptor_meta(&self) -> Option<Value> {
        Some(widget_directives())
    }

    async fn execute(&self, args: Value, context: &ToolExecutionContext) -> AppResult<ToolResult> {
        let request = AnalyzeNutritionRequest::from_args(&args)?;
        let resources = &context.resources;

        let envelope = fulfill(
            &request,
            resources.config.llm.credential_configured(),
            resources.analyzer.as_deref(),
        )
        .await;

        AppLogger::log_strategy(&context.request_id_str(), envelope.strategy);
        if let Some(error) = envelope.error() {
            warn!(strategy = envelope.strategy, error = %error, "Nutrition analysis did not produce data");
        }

        Ok(envelope.into_tool_result())
    }
}

/// Create all nutrition tools for registration
#[must_use]
pub fn create_nutrition_tools() -> Vec<Box<dyn McpTool>> {
    vec![Box::new(AnalyzeNutritionTool)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_args_rejects_blank_description() {
        let error = AnalyzeNutritionRequest::from_args(&json!({"foodDescription": "   "}))
            .unwrap_err();
        assert_eq!(error.code.jsonrpc_code(), -32602);
    }

    #[test]
    fn test_from_args_rejects_missing_description() {
        assert!(AnalyzeNutritionRequest::from_args(&Value::Null).is_err());
        assert!(AnalyzeNutritionRequest::from_args(&json!({"foodDescription": 42})).is_err());
    }

    #[test]
    fn test_null_analyzed_data_is_absent() {
        let request = AnalyzeNutritionRequest::from_args(&json!({
            "foodDescription": "toast",
            "analyzedData": null
        }))
        .unwrap();
        assert!(request.analyzed_data.is_none());
    }

    #[test]
    fn test_incomplete_payload_is_not_passthrough() {
        let request = AnalyzeNutritionRequest::new("toast")
            .with_analyzed_data(json!({"dailyTotals": {"calories": 80}, "loggedMeals": []}));
        assert_eq!(select_strategy(&request, false), AnalysisStrategy::Deferred);
        assert_eq!(select_strategy(&request, true), AnalysisStrategy::LiveService);
    }

    #[test]
    fn test_directives_are_complete() {
        let meta = widget_directives();
        assert_eq!(meta[META_OUTPUT_TEMPLATE], WIDGET_URI);
        assert_eq!(meta[META_WIDGET_ACCESSIBLE], true);
        assert_eq!(meta[META_RESULT_CAN_PRODUCE_WIDGET], true);
        assert!(meta[META_INVOKING].is_string());
        assert!(meta[META_INVOKED].is_string());
    }
}
