// ABOUTME: Envelope normalizer reconciling host response envelopes into canonical MealData
// ABOUTME: Probes a fixed ordered list of nesting paths and extracts the error independently
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Envelope Normalization
//!
//! Hosts deliver tool output in several shapes. The analysis result may sit
//! under `result.structuredContent`, under `structuredContent`, directly under
//! `result`, or at the top level of the envelope itself. The normalizer probes
//! those locations in a fixed order and takes the first one that is present.
//! Candidates are never merged across paths.
//!
//! Normalization never fails. An envelope that matches no known path
//! yields `meal_data: None` and `source: None`.

use nutrition_core::models::{Meal, MealData};
use serde_json::Value;
use tracing::debug;

const RESULT: &str = "result";
const STRUCTURED_CONTENT: &str = "structuredContent";
const LOGGED_MEALS: &str = "loggedMeals";
const DAILY_TOTALS: &str = "dailyTotals";
const ERROR: &str = "error";

/// Location inside a raw envelope where `MealData` was found
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnvelopePath {
    /// `envelope.result.structuredContent`
    ResultStructuredContent,
    /// `envelope.structuredContent`
    StructuredContent,
    /// `envelope.result`
    Result,
    /// The envelope itself, because it carries `loggedMeals` or `dailyTotals`
    TopLevel,
}

impl EnvelopePath {
    /// Probe order, first match wins
    pub const PROBE_ORDER: [Self; 4] = [
        Self::ResultStructuredContent,
        Self::StructuredContent,
        Self::Result,
        Self::TopLevel,
    ];

    /// Return the candidate value at this path, if present and not null
    #[must_use]
    pub fn probe(self, envelope: &Value) -> Option<&Value> {
        let candidate = match self {
            Self::ResultStructuredContent => envelope.get(RESULT)?.get(STRUCTURED_CONTENT),
            Self::StructuredContent => envelope.get(STRUCTURED_CONTENT),
            Self::Result => envelope.get(RESULT),
            Self::TopLevel => {
                if present(envelope.get(LOGGED_MEALS)) || present(envelope.get(DAILY_TOTALS)) {
                    Some(envelope)
                } else {
                    None
                }
            }
        };
        candidate.filter(|value| !value.is_null())
    }

    /// Dotted path used in logs
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ResultStructuredContent => "result.structuredContent",
            Self::StructuredContent => "structuredContent",
            Self::Result => "result",
            Self::TopLevel => "<envelope>",
        }
    }
}

/// Result of normalizing one envelope
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NormalizedEnvelope {
    /// Canonical data, when a recognized path held a well-formed payload
    pub meal_data: Option<MealData>,
    /// Error string from the payload or the envelope, whichever is found first
    pub error: Option<String>,
    /// Path that won the probe, `None` when the shape was unrecognized
    pub source: Option<EnvelopePath>,
}

impl NormalizedEnvelope {
    /// Whether no known path matched
    #[must_use]
    pub const fn is_unrecognized(&self) -> bool {
        self.source.is_none()
    }

    /// Logged meals of the normalized data, empty when absent
    #[must_use]
    pub fn meals(&self) -> &[Meal] {
        match &self.meal_data {
            Some(data) => data.meals(),
            None => &[],
        }
    }
}

/// Normalize a raw host envelope into canonical `MealData`
///
/// A missing envelope and a JSON `null` envelope behave identically.
#[must_use]
pub fn normalize(envelope: Option<&Value>) -> NormalizedEnvelope {
    let Some(envelope) = envelope.filter(|value| !value.is_null()) else {
        return NormalizedEnvelope::default();
    };

    let found = EnvelopePath::PROBE_ORDER
        .into_iter()
        .find_map(|path| path.probe(envelope).map(|candidate| (path, candidate)));

    let Some((path, candidate)) = found else {
        return NormalizedEnvelope {
            meal_data: None,
            error: error_string(envelope),
            source: None,
        };
    };

    let meal_data = match serde_json::from_value::<MealData>(candidate.clone()) {
        Ok(data) => Some(data),
        Err(e) => {
            debug!(path = path.as_str(), error = %e, "Envelope payload is not valid meal data");
            None
        }
    };

    let error = error_string(candidate).or_else(|| error_string(envelope));

    NormalizedEnvelope {
        meal_data,
        error,
        source: Some(path),
    }
}

fn present(value: Option<&Value>) -> bool {
    value.is_some_and(|v| !v.is_null())
}

fn error_string(value: &Value) -> Option<String> {
    value
        .get(ERROR)
        .and_then(Value::as_str)
        .filter(|message| !message.is_empty())
        .map(str::to_owned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_result_structured_content_wins_over_result() {
        let envelope = json!({
            "result": {
                "structuredContent": {"loggedMeals": []},
                "loggedMeals": [{"meal_name": "ignored", "total_nutrients": {}}]
            }
        });
        let normalized = normalize(Some(&envelope));
        assert_eq!(normalized.source, Some(EnvelopePath::ResultStructuredContent));
        assert!(normalized.meals().is_empty());
    }

    #[test]
    fn test_null_structured_content_falls_through() {
        let envelope = json!({"structuredContent": null, "loggedMeals": []});
        let normalized = normalize(Some(&envelope));
        assert_eq!(normalized.source, Some(EnvelopePath::TopLevel));
    }

    #[test]
    fn test_malformed_winner_does_not_fall_through() {
        let envelope = json!({
            "structuredContent": {"loggedMeals": "not a list"},
            "result": {"loggedMeals": []}
        });
        let normalized = normalize(Some(&envelope));
        assert_eq!(normalized.source, Some(EnvelopePath::StructuredContent));
        assert!(normalized.meal_data.is_none());
    }

    #[test]
    fn test_error_survives_malformed_payload() {
        let envelope = json!({"structuredContent": {"error": "boom", "loggedMeals": 3}});
        let normalized = normalize(Some(&envelope));
        assert!(normalized.meal_data.is_none());
        assert_eq!(normalized.error.as_deref(), Some("boom"));
    }

    #[test]
    fn test_empty_error_is_ignored() {
        let envelope = json!({"error": "", "loggedMeals": []});
        assert!(normalize(Some(&envelope)).error.is_none());
    }

    #[test]
    fn test_non_object_envelope_is_unrecognized() {
        let normalized = normalize(Some(&json!("hello")));
        assert!(normalized.is_unrecognized());
        assert!(normalized.meal_data.is_none());
    }
}
