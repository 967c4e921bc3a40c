// ABOUTME: Core types and constants for the nutrition analysis MCP server
// ABOUTME: Foundation crate with the canonical meal data model, error handling, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Nutrition Core
//!
//! Foundation crate shared by the MCP server and the widget logic. It changes
//! rarely, so the heavier crates above it keep their incremental builds.
//!
//! ## Modules
//!
//! - **models**: Canonical `Nutrients` / `Ingredient` / `Meal` / `MealData` vocabulary
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Protocol, tool, widget, and configuration constants

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Canonical meal data model
pub mod models;
