// ABOUTME: Canonical meal data model for nutrition analysis results
// ABOUTME: Nutrients, Ingredient, Meal, and MealData definitions with their wire names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Deserializer, Serialize};

/// Deserialize an explicit `null` the same way as a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Macronutrient and energy values
///
/// Calories are unitless kcal, the other three are grams. Values are taken
/// as supplied; nothing checks that they are physically consistent. A
/// missing or `null` value reads as 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Nutrients {
    /// Energy in kcal
    #[serde(default, deserialize_with = "null_as_default")]
    pub calories: f64,
    /// Protein in grams
    #[serde(default, deserialize_with = "null_as_default")]
    pub protein: f64,
    /// Carbohydrates in grams
    #[serde(default, deserialize_with = "null_as_default")]
    pub carbs: f64,
    /// Fat in grams
    #[serde(default, deserialize_with = "null_as_default")]
    pub fat: f64,
}

impl Nutrients {
    /// Create a nutrient set from its four values
    #[must_use]
    pub const fn new(calories: f64, protein: f64, carbs: f64, fat: f64) -> Self {
        Self {
            calories,
            protein,
            carbs,
            fat,
        }
    }
}

/// One ingredient of a meal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Ingredient name
    pub name: String,
    /// Brand name (if applicable)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    /// Free-text serving description ("1 medium", "100g"), empty when not supplied
    #[serde(default, deserialize_with = "null_as_default")]
    pub serving_info: String,
    /// Nutrients for the serving described above
    #[serde(default, deserialize_with = "null_as_default")]
    pub nutrients: Nutrients,
}

/// A logged meal with its producer-supplied totals
///
/// `total_nutrients` is authoritative for display even when it disagrees
/// with the sum of the ingredient nutrients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    /// Meal name
    pub meal_name: String,
    /// Free-text portion size ("large", "2 slices")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meal_size: Option<String>,
    /// Ingredients in display order
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    /// Totals for the whole meal
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_nutrients: Nutrients,
}

/// Canonical analysis result consumed by the widget
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealData {
    /// Aggregate totals across all logged meals
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily_totals: Option<Nutrients>,
    /// Logged meals in display order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logged_meals: Option<Vec<Meal>>,
    /// Error reported by the producer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl MealData {
    /// Logged meals, or an empty slice when the field is absent
    #[must_use]
    pub fn meals(&self) -> &[Meal] {
        self.logged_meals.as_deref().unwrap_or_default()
    }

    /// Whether at least one meal was logged
    #[must_use]
    pub fn has_meals(&self) -> bool {
        !self.meals().is_empty()
    }
}
