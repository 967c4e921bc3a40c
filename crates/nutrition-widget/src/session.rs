// ABOUTME: Widget session tying normalization, render state, and presentation together
// ABOUTME: Holds the latest host envelope and the breakdown toggles, reset on every arrival
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde_json::Value;
use tracing::debug;

use crate::envelope::{normalize, NormalizedEnvelope};
use crate::presenter::{present, BreakdownToggles, ReadyView};
use crate::state::{derive_render_state, RenderState};

/// What the widget displays for the current envelope
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetView {
    /// Spinner while waiting for analysis
    Loading,
    /// Error message shown verbatim
    Error(String),
    /// Analysis finished with no meals
    Empty,
    /// Daily totals and meal cards
    Ready(ReadyView),
}

/// Client-side session for one widget instance
///
/// Each envelope fully replaces the previous one. Nothing is merged across
/// updates and the breakdown toggles start collapsed again.
#[derive(Debug, Clone, Default)]
pub struct WidgetSession {
    envelope: Option<Value>,
    normalized: NormalizedEnvelope,
    toggles: BreakdownToggles,
}

impl WidgetSession {
    /// Session before any envelope arrived
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept a new envelope from the host
    pub fn receive(&mut self, envelope: Value) {
        self.normalized = normalize(Some(&envelope));
        debug!(
            source = self.normalized.source.map(|path| path.as_str()),
            meals = self.normalized.meals().len(),
            "Widget received envelope"
        );
        self.envelope = Some(envelope);
        self.toggles.clear();
    }

    /// Normalization of the current envelope
    #[must_use]
    pub const fn normalized(&self) -> &NormalizedEnvelope {
        &self.normalized
    }

    /// Render state of the current envelope
    #[must_use]
    pub fn state(&self) -> RenderState {
        derive_render_state(self.envelope.as_ref(), &self.normalized)
    }

    /// Flip the breakdown panel of the meal at `index`
    ///
    /// Returns the new expanded state, or `None` when that meal offers no
    /// breakdown (out of range, or one ingredient or fewer).
    pub fn toggle_breakdown(&mut self, index: usize) -> Option<bool> {
        let offered = self
            .normalized
            .meals()
            .get(index)
            .is_some_and(|meal| meal.ingredients.len() > 1);
        offered.then(|| self.toggles.toggle(index))
    }

    /// Build the view for the current envelope
    #[must_use]
    pub fn view(&self) -> WidgetView {
        match self.state() {
            RenderState::Error(message) => WidgetView::Error(message),
            RenderState::Loading => WidgetView::Loading,
            RenderState::Empty => WidgetView::Empty,
            RenderState::Ready => match &self.normalized.meal_data {
                Some(data) => WidgetView::Ready(present(data, &self.toggles)),
                None => WidgetView::Empty,
            },
        }
    }
}
