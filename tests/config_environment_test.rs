// ABOUTME: Integration tests for environment-based server configuration
// ABOUTME: Validates defaults, overrides, blank credentials, and invalid numeric values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use serial_test::serial;

use nutrition_core::constants::env_config;
use nutrition_mcp_server::config::{Environment, ServerConfig};
use nutrition_mcp_server::errors::ErrorCode;
use nutrition_mcp_server::logging::LoggingConfig;

const ALL_VARS: [&str; 7] = [
    env_config::OPENAI_API_KEY,
    env_config::OPENAI_BASE_URL,
    env_config::NUTRITION_MODEL,
    env_config::LLM_REQUEST_TIMEOUT_SECS,
    env_config::HTTP_PORT,
    env_config::WIDGET_HTML_PATH,
    "ENVIRONMENT",
];

fn clear_env() {
    for key in ALL_VARS {
        env::remove_var(key);
    }
}

#[test]
#[serial]
fn test_defaults_without_environment() {
    clear_env();
    let config = ServerConfig::from_env().unwrap();

    assert_eq!(config.http_port, 8000);
    assert_eq!(config.environment, Environment::Development);
    assert!(!config.llm.credential_configured());
    assert_eq!(config.llm.base_url, "https://api.openai.com/v1");
    assert_eq!(config.llm.model, "gpt-4o-mini");
    assert_eq!(config.llm.request_timeout, Duration::from_secs(60));
    assert!(config.widget_html_path.is_none());
}

#[test]
#[serial]
fn test_overrides_are_applied() {
    clear_env();
    env::set_var(env_config::OPENAI_API_KEY, "sk-live");
    env::set_var(env_config::OPENAI_BASE_URL, "http://localhost:11434/v1/");
    env::set_var(env_config::NUTRITION_MODEL, "llama3");
    env::set_var(env_config::LLM_REQUEST_TIMEOUT_SECS, "5");
    env::set_var(env_config::HTTP_PORT, "9100");
    env::set_var(env_config::WIDGET_HTML_PATH, "/srv/widget.html");
    env::set_var("ENVIRONMENT", "production");

    let config = ServerConfig::from_env().unwrap();
    clear_env();

    assert!(config.llm.credential_configured());
    assert_eq!(config.llm.base_url, "http://localhost:11434/v1");
    assert_eq!(config.llm.model, "llama3");
    assert_eq!(config.llm.request_timeout, Duration::from_secs(5));
    assert_eq!(config.http_port, 9100);
    assert_eq!(config.widget_html_path, Some(PathBuf::from("/srv/widget.html")));
    assert!(config.environment.is_production());
}

#[test]
#[serial]
fn test_blank_credential_counts_as_unset() {
    clear_env();
    env::set_var(env_config::OPENAI_API_KEY, "   ");
    let config = ServerConfig::from_env().unwrap();
    clear_env();

    assert!(!config.llm.credential_configured());
    assert!(config.summary().contains("Inference Credential: not configured"));
}

#[test]
#[serial]
fn test_invalid_port_is_config_error() {
    clear_env();
    env::set_var(env_config::HTTP_PORT, "eighty");
    let error = ServerConfig::from_env().unwrap_err();
    clear_env();

    assert_eq!(error.code, ErrorCode::ConfigInvalid);
    assert!(error.message.contains("HTTP_PORT"));
}

#[test]
#[serial]
fn test_summary_never_prints_credential() {
    clear_env();
    env::set_var(env_config::OPENAI_API_KEY, "sk-very-secret");
    let config = ServerConfig::from_env().unwrap();
    clear_env();

    let summary = config.summary();
    assert!(summary.contains("Inference Credential: configured"));
    assert!(!summary.contains("sk-very-secret"));
}

#[test]
#[serial]
fn test_logging_follows_production_environment() {
    clear_env();
    env::remove_var("LOG_INCLUDE_LOCATION");
    env::remove_var("LOG_INCLUDE_SPANS");

    env::set_var("ENVIRONMENT", "prod");
    let production = LoggingConfig::from_env();
    env::set_var("ENVIRONMENT", "development");
    let development = LoggingConfig::from_env();
    clear_env();

    assert!(production.include_location);
    assert!(production.include_spans);
    assert!(!development.include_location);
    assert!(!development.include_spans);
}
