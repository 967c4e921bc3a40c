// ABOUTME: The nutrition tracker widget markup served as an MCP resource
// ABOUTME: Loaded once at startup from the bundled asset or an override file
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::Path;
use std::sync::Arc;

use tokio::fs;
use tracing::info;

use nutrition_core::constants::widget::{WIDGET_MIME_TYPE, WIDGET_NAME, WIDGET_URI};

use crate::config::ServerConfig;
use crate::errors::{AppError, AppResult};

use super::schema::{ResourceContents, ResourceSchema};

const BUNDLED_MARKUP: &str = include_str!("../../assets/nutrition-widget.html");

/// Widget markup, fixed for the lifetime of the server
#[derive(Debug, Clone)]
pub struct WidgetResource {
    markup: Arc<str>,
    origin: String,
}

impl WidgetResource {
    /// Markup compiled into the binary
    #[must_use]
    pub fn bundled() -> Self {
        Self::from_markup(BUNDLED_MARKUP, "bundled")
    }

    /// Wrap arbitrary markup
    #[must_use]
    pub fn from_markup(markup: &str, origin: impl Into<String>) -> Self {
        Self {
            markup: Arc::from(markup),
            origin: origin.into(),
        }
    }

    /// Load the markup named by configuration, or the bundled copy
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the override file cannot be read
    pub async fn load(config: &ServerConfig) -> AppResult<Self> {
        let Some(path) = &config.widget_html_path else {
            return Ok(Self::bundled());
        };
        let resource = Self::read_file(path).await?;
        info!(path = %path.display(), bytes = resource.markup.len(), "Loaded widget markup");
        Ok(resource)
    }

    async fn read_file(path: &Path) -> AppResult<Self> {
        let markup = fs::read_to_string(path).await.map_err(|e| {
            AppError::config(format!(
                "Failed to read widget markup from {}: {e}",
                path.display()
            ))
        })?;
        Ok(Self::from_markup(&markup, path.display().to_string()))
    }

    /// Resource URI
    #[must_use]
    pub const fn uri(&self) -> &'static str {
        WIDGET_URI
    }

    /// Where the markup came from
    #[must_use]
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// The markup itself
    #[must_use]
    pub fn markup(&self) -> &str {
        &self.markup
    }

    /// Entry for `resources/list`
    #[must_use]
    pub fn schema(&self) -> ResourceSchema {
        ResourceSchema {
            uri: WIDGET_URI.to_owned(),
            name: WIDGET_NAME.to_owned(),
            description: Some("Nutrition tracker widget showing daily totals and meals".to_owned()),
            mime_type: WIDGET_MIME_TYPE.to_owned(),
        }
    }

    /// Body for `resources/read`
    #[must_use]
    pub fn contents(&self) -> ResourceContents {
        ResourceContents {
            uri: WIDGET_URI.to_owned(),
            mime_type: WIDGET_MIME_TYPE.to_owned(),
            text: self.markup().to_owned(),
        }
    }
}
