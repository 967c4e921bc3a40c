// ABOUTME: Core data models shared by the MCP server and the widget logic
// ABOUTME: Re-exports the canonical Nutrients, Ingredient, Meal, and MealData types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! The canonical shape every other component speaks. The server copies or
//! produces it, the widget normalizes arbitrary envelopes into it, and the
//! presenter reads it without ever mutating it.

mod meal;

pub use meal::{Ingredient, Meal, MealData, Nutrients};
