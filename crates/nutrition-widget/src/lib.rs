// ABOUTME: Client-side logic of the nutrition widget expressed as pure Rust functions
// ABOUTME: Normalizes host envelopes, derives the render state, and builds display views
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Nutrition Widget
//!
//! Everything the widget decides before it draws anything. A host update
//! flows through the pipeline below; every stage is a pure function of its
//! input, so the same envelope always renders the same way.
//!
//! ```text
//! raw envelope -> envelope::normalize -> state::derive_render_state -> presenter::present
//! ```
//!
//! `session::WidgetSession` glues the stages together and owns the only
//! mutable state the widget has: the per-meal breakdown toggles.

/// Envelope normalization into canonical `MealData`
pub mod envelope;

/// Plain-text rendering of widget views
pub mod render;

/// Display values for the Ready state
pub mod presenter;

/// Widget session holding the latest envelope and breakdown toggles
pub mod session;

/// Render state derivation
pub mod state;

pub use envelope::{normalize, EnvelopePath, NormalizedEnvelope};
pub use presenter::{
    present, round_nutrient, Breakdown, BreakdownToggles, DisplayNutrients, IngredientLine,
    MealCardView, ReadyView,
};
pub use render::render_text;
pub use session::{WidgetSession, WidgetView};
pub use state::{awaiting_analysis, derive_render_state, RenderState};
