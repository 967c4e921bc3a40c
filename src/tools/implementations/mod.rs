// ABOUTME: Tool implementations registered with the ToolRegistry
// ABOUTME: Currently the nutrition analysis tool
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Nutrition analysis tool and its fulfillment strategies
pub mod nutrition;
