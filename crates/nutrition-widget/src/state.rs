// ABOUTME: Render state derivation for the nutrition widget
// ABOUTME: Maps a raw envelope and its normalized data to exactly one of Error, Loading, Empty, Ready
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Render State
//!
//! The state is recomputed from scratch on every envelope; nothing about
//! the previous state constrains the next one. Rules are checked in
//! priority order:
//!
//! 1. `Error` when an error string was extracted
//! 2. `Loading` when no envelope has arrived, or when the analysis looks
//!    accepted but not yet completed (see [`awaiting_analysis`])
//! 3. `Empty` when no meals were logged
//! 4. `Ready` otherwise

use serde_json::Value;

use crate::envelope::NormalizedEnvelope;

const FOOD_DESCRIPTION: &str = "foodDescription";
const LOGGED_MEALS: &str = "loggedMeals";

/// The single state the widget renders for one envelope
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderState {
    /// An error was reported; the message is shown verbatim
    Error(String),
    /// Waiting for the first envelope or for the analysis to complete
    Loading,
    /// Analysis finished without any logged meals
    Empty,
    /// At least one meal is available for display
    Ready,
}

impl RenderState {
    /// Short lowercase label used in logs and the preview output
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Error(_) => "error",
            Self::Loading => "loading",
            Self::Empty => "empty",
            Self::Ready => "ready",
        }
    }
}

/// Whether the producer accepted a request but has not delivered its analysis
///
/// The envelope contract has no explicit pending status. The only signal is
/// a `foodDescription` echoed at the top level while no meals are present,
/// neither in the normalized data nor as a non-empty top-level `loggedMeals`.
#[must_use]
pub fn awaiting_analysis(envelope: &Value, normalized: &NormalizedEnvelope) -> bool {
    let has_description = envelope
        .get(FOOD_DESCRIPTION)
        .is_some_and(|value| !value.is_null());
    let exposes_meals = envelope
        .get(LOGGED_MEALS)
        .and_then(Value::as_array)
        .is_some_and(|meals| !meals.is_empty());

    normalized.meals().is_empty() && has_description && !exposes_meals
}

/// Derive the render state for one envelope
///
/// `envelope` is the raw host envelope (`None` before the first update) and
/// `normalized` is its normalization.
#[must_use]
pub fn derive_render_state(envelope: Option<&Value>, normalized: &NormalizedEnvelope) -> RenderState {
    if let Some(message) = &normalized.error {
        return RenderState::Error(message.clone());
    }

    let Some(envelope) = envelope.filter(|value| !value.is_null()) else {
        return RenderState::Loading;
    };

    if awaiting_analysis(envelope, normalized) {
        return RenderState::Loading;
    }

    if normalized.meals().is_empty() {
        RenderState::Empty
    } else {
        RenderState::Ready
    }
}
