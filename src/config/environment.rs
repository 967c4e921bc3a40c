// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Reads the inference credential, model, timeouts, port, and widget override from env vars
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration management

use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use nutrition_core::constants::{defaults, env_config};
use nutrition_core::errors::{AppError, AppResult};
use tracing::info;

/// Environment type reported in logs and health checks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Test runs
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Settings for the live inference service
#[derive(Clone)]
pub struct LlmConfig {
    /// API credential, `None` when unset or empty
    pub api_key: Option<String>,
    /// OpenAI-compatible base URL
    pub base_url: String,
    /// Model requested for analysis
    pub model: String,
    /// Timeout for the single inference attempt
    pub request_timeout: Duration,
}

impl LlmConfig {
    /// Whether a credential for live analysis is configured
    #[must_use]
    pub const fn credential_configured(&self) -> bool {
        self.api_key.is_some()
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: defaults::OPENAI_BASE_URL.to_owned(),
            model: defaults::NUTRITION_MODEL.to_owned(),
            request_timeout: Duration::from_secs(defaults::LLM_REQUEST_TIMEOUT_SECS),
        }
    }
}

// Never print the credential
impl fmt::Debug for LlmConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LlmConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

/// Main server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port of the HTTP transport
    pub http_port: u16,
    /// Deployment environment
    pub environment: Environment,
    /// Live inference settings
    pub llm: LlmConfig,
    /// File overriding the bundled widget markup
    pub widget_html_path: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_port: defaults::HTTP_PORT,
            environment: Environment::default(),
            llm: LlmConfig::default(),
            widget_html_path: None,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns a `ConfigInvalid` error when a numeric variable does not parse
    pub fn from_env() -> AppResult<Self> {
        info!("Loading configuration from environment variables");

        let config = Self {
            http_port: parse_env_or(env_config::HTTP_PORT, defaults::HTTP_PORT)?,
            environment: Environment::from_str_or_default(&env_var_or("ENVIRONMENT", "development")),
            llm: LlmConfig {
                api_key: non_empty_env(env_config::OPENAI_API_KEY),
                base_url: env_var_or(env_config::OPENAI_BASE_URL, defaults::OPENAI_BASE_URL)
                    .trim_end_matches('/')
                    .to_owned(),
                model: env_var_or(env_config::NUTRITION_MODEL, defaults::NUTRITION_MODEL),
                request_timeout: Duration::from_secs(parse_env_or(
                    env_config::LLM_REQUEST_TIMEOUT_SECS,
                    defaults::LLM_REQUEST_TIMEOUT_SECS,
                )?),
            },
            widget_html_path: non_empty_env(env_config::WIDGET_HTML_PATH).map(PathBuf::from),
        };

        info!(
            environment = %config.environment,
            credential_configured = config.llm.credential_configured(),
            "Configuration loaded"
        );
        Ok(config)
    }

    /// Human-readable summary with the credential redacted
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Nutrition MCP Server Configuration:\n\
             - HTTP Port: {}\n\
             - Environment: {}\n\
             - Inference Credential: {}\n\
             - Inference Endpoint: {}\n\
             - Model: {}\n\
             - Request Timeout: {}s\n\
             - Widget Markup: {}",
            self.http_port,
            self.environment,
            if self.llm.credential_configured() {
                "configured"
            } else {
                "not configured"
            },
            self.llm.base_url,
            self.llm.model,
            self.llm.request_timeout.as_secs(),
            self.widget_html_path
                .as_ref()
                .map_or_else(|| "bundled".to_owned(), |path| path.display().to_string()),
        )
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Get environment variable, treating empty or blank values as unset
fn non_empty_env(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}

/// Parse environment variable or fall back to a default when unset
fn parse_env_or<T: FromStr>(key: &str, default: T) -> AppResult<T> {
    match non_empty_env(key) {
        Some(raw) => raw
            .parse()
            .map_err(|_| AppError::config_invalid(key, &raw)),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_parsing() {
        assert_eq!(Environment::from_str_or_default("PROD"), Environment::Production);
        assert_eq!(Environment::from_str_or_default("test"), Environment::Testing);
        assert_eq!(Environment::from_str_or_default("staging"), Environment::Development);
    }

    #[test]
    fn test_debug_redacts_credential() {
        let config = LlmConfig {
            api_key: Some("sk-secret".to_owned()),
            ..LlmConfig::default()
        };
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("sk-secret"));
        assert!(rendered.contains("[REDACTED]"));
    }

    #[test]
    fn test_summary_redacts_credential() {
        let mut config = ServerConfig::default();
        config.llm.api_key = Some("sk-secret".to_owned());
        let summary = config.summary();
        assert!(summary.contains("Inference Credential: configured"));
        assert!(!summary.contains("sk-secret"));
        assert!(summary.contains("Widget Markup: bundled"));
    }
}
