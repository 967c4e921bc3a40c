// ABOUTME: Centralized resource container shared by both MCP transports
// ABOUTME: Holds configuration, widget markup, the optional inference client, and the tool registry
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Server Resources
//!
//! Built once at startup, wrapped in `Arc` and never mutated afterwards.

use std::fmt;
use std::sync::Arc;

use tracing::{error, info, warn};

use crate::config::ServerConfig;
use crate::errors::AppResult;
use crate::llm::{LlmProvider, OpenAiProvider};
use crate::tools::ToolRegistry;

use super::widget_resource::WidgetResource;

/// Centralized resource container for dependency injection
pub struct ServerResources {
    /// Server configuration
    pub config: Arc<ServerConfig>,
    /// Widget markup served through `resources/read`
    pub widget: WidgetResource,
    /// Inference client, present only when one could be built
    pub analyzer: Option<Arc<dyn LlmProvider>>,
    /// Registered tools
    pub tools: Arc<ToolRegistry>,
}

impl ServerResources {
    /// Assemble resources from explicit parts
    #[must_use]
    pub fn new(
        config: ServerConfig,
        widget: WidgetResource,
        analyzer: Option<Arc<dyn LlmProvider>>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            widget,
            analyzer,
            tools: Arc::new(ToolRegistry::with_builtin_tools()),
        }
    }

    /// Build resources from configuration, loading the widget markup once
    ///
    /// # Errors
    ///
    /// Returns an error if the widget override file cannot be read
    pub async fn from_config(config: ServerConfig) -> AppResult<Self> {
        let widget = WidgetResource::load(&config).await?;
        let analyzer = Self::build_analyzer(&config);
        let resources = Self::new(config, widget, analyzer);
        info!(
            tools = resources.tools.len(),
            widget = %resources.widget.origin(),
            live_analysis = resources.analyzer.is_some(),
            "Server resources ready"
        );
        Ok(resources)
    }

    fn build_analyzer(config: &ServerConfig) -> Option<Arc<dyn LlmProvider>> {
        if !config.llm.credential_configured() {
            warn!("No inference credential configured; analyze_nutrition will defer to the caller");
            return None;
        }
        match OpenAiProvider::new(&config.llm) {
            Ok(provider) => Some(Arc::new(provider)),
            Err(e) => {
                error!("Failed to create inference client: {}", e);
                None
            }
        }
    }
}

impl fmt::Debug for ServerResources {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerResources")
            .field("config", &self.config)
            .field("widget", &self.widget.origin())
            .field(
                "analyzer",
                &self.analyzer.as_ref().map(|a| a.display_name()),
            )
            .field("tools", &self.tools)
            .finish()
    }
}
