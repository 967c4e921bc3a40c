// ABOUTME: Instruction templates for nutrition analysis loaded at compile time
// ABOUTME: Embeds the food description into the fixed JSON-only analysis prompt
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Prompts
//!
//! Prompts are loaded at compile time from markdown files for easy maintenance.

/// Placeholder replaced with the caller's food description
const FOOD_DESCRIPTION_PLACEHOLDER: &str = "{food_description}";

/// Nutrition analysis instruction template
pub const NUTRITION_ANALYSIS_PROMPT: &str = include_str!("nutrition_analysis.md");

/// System message sent ahead of the analysis instruction
pub const NUTRITION_SYSTEM_PROMPT: &str =
    "You are a precise nutrition analyst. You always answer with one valid JSON object.";

/// Build the analysis instruction for one food description
#[must_use]
pub fn nutrition_analysis_prompt(food_description: &str) -> String {
    NUTRITION_ANALYSIS_PROMPT.replacen(FOOD_DESCRIPTION_PLACEHOLDER, food_description, 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_description_once() {
        let prompt = nutrition_analysis_prompt("2 eggs and toast");
        assert!(prompt.contains("Food description: 2 eggs and toast"));
        assert!(!prompt.contains(FOOD_DESCRIPTION_PLACEHOLDER));
        assert!(prompt.contains("\"loggedMeals\""));
    }
}
