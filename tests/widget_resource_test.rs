// ABOUTME: Integration tests for loading the widget markup and building server resources
// ABOUTME: Uses temporary files to exercise the markup override path
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::fs;

use anyhow::Result;
use tempfile::TempDir;

use nutrition_mcp_server::config::ServerConfig;
use nutrition_mcp_server::mcp::resources::ServerResources;
use nutrition_mcp_server::mcp::widget_resource::WidgetResource;

use common::{init_test_logging, test_config};

#[tokio::test]
async fn test_override_file_replaces_bundled_markup() -> Result<()> {
    init_test_logging();
    let dir = TempDir::new()?;
    let path = dir.path().join("widget.html");
    fs::write(&path, "<html><body>custom</body></html>")?;

    let config = ServerConfig {
        widget_html_path: Some(path.clone()),
        ..ServerConfig::default()
    };
    let widget = WidgetResource::load(&config).await?;

    assert_eq!(widget.markup(), "<html><body>custom</body></html>");
    assert_eq!(widget.origin(), path.display().to_string());
    Ok(())
}

#[tokio::test]
async fn test_default_config_uses_bundled_markup() -> Result<()> {
    let widget = WidgetResource::load(&ServerConfig::default()).await?;
    assert_eq!(widget.origin(), "bundled");
    assert_eq!(widget.markup(), WidgetResource::bundled().markup());
    Ok(())
}

#[tokio::test]
async fn test_resources_without_credential_have_no_analyzer() -> Result<()> {
    init_test_logging();
    let resources = ServerResources::from_config(test_config(false)).await?;
    assert!(resources.analyzer.is_none());
    assert_eq!(resources.tools.tool_names(), ["analyze_nutrition"]);
    Ok(())
}

#[tokio::test]
async fn test_resources_with_credential_build_a_client() -> Result<()> {
    init_test_logging();
    let resources = ServerResources::from_config(test_config(true)).await?;
    let analyzer = resources.analyzer.as_ref().unwrap();
    assert_eq!(analyzer.default_model(), "gpt-4o-mini");
    Ok(())
}
