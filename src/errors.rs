// ABOUTME: Error types for the nutrition MCP server
// ABOUTME: Re-exports the core AppError system and defines analysis strategy failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Error Handling
//!
//! Protocol and infrastructure failures use [`AppError`]. Analysis strategy
//! failures use [`AnalysisError`]; they are rendered into the tool response
//! and never surface as JSON-RPC errors.

use thiserror::Error;

pub use nutrition_core::errors::{AppError, AppResult, ErrorCode};

/// Failures of the nutrition analysis strategies
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// No analyzed data was supplied and live analysis is not configured
    #[error(
        "No analyzed nutrition data was provided and live analysis is not configured. \
         Analyze the food description and call analyze_nutrition again with analyzedData \
         populated with dailyTotals and loggedMeals."
    )]
    Deferred,

    /// A credential is configured but no analysis client is available
    #[error("Live nutrition analysis is unavailable: the inference client is not configured")]
    CredentialMissing,

    /// The inference service call failed
    #[error("Nutrition analysis failed: {message}")]
    UpstreamCallFailed {
        /// Upstream message, when one was available
        message: String,
    },

    /// The inference service replied without `dailyTotals` and `loggedMeals`
    #[error("Invalid response format from nutrition analysis service: expected dailyTotals and loggedMeals")]
    ValidationFailed,
}

impl AnalysisError {
    /// Build an upstream failure from an application error, keeping its message
    #[must_use]
    pub fn upstream(error: &AppError) -> Self {
        Self::UpstreamCallFailed {
            message: error.message.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_keeps_message() {
        let app_error = AppError::external_service("OpenAI", "quota exceeded");
        let error = AnalysisError::upstream(&app_error);
        assert_eq!(error.to_string(), "Nutrition analysis failed: OpenAI: quota exceeded");
    }

    #[test]
    fn test_deferred_mentions_resubmission() {
        assert!(AnalysisError::Deferred.to_string().contains("analyzedData"));
    }
}
