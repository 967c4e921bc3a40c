// ABOUTME: Meal and ingredient presenter deriving display values from canonical MealData
// ABOUTME: Rounds nutrients, builds meal cards, and applies per-meal breakdown toggles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Presenter
//!
//! Read-only derivation of everything the Ready state displays. Producer
//! totals are shown as given and are never recomputed from ingredients.

use std::collections::BTreeMap;

use nutrition_core::models::{Ingredient, Meal, MealData, Nutrients};

/// Round a nutrient value for display
///
/// Halves round away from zero, so `56.5` displays as `57`. Non-finite
/// values display as `0`.
#[must_use]
// Float-to-int casts saturate at the i64 bounds
#[allow(clippy::cast_possible_truncation)]
pub fn round_nutrient(value: f64) -> i64 {
    if !value.is_finite() {
        return 0;
    }
    value.round() as i64
}

/// Rounded nutrient values ready for display
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisplayNutrients {
    /// Rounded kcal
    pub calories: i64,
    /// Rounded grams of protein
    pub protein: i64,
    /// Rounded grams of carbohydrates
    pub carbs: i64,
    /// Rounded grams of fat
    pub fat: i64,
}

impl DisplayNutrients {
    /// Field labels in display order
    pub const LABELS: [&'static str; 4] = ["Calories", "Protein", "Carbs", "Fat"];

    /// Formatted values in display order: calories unlabeled, the rest in grams
    #[must_use]
    pub fn formatted(&self) -> [String; 4] {
        [
            self.calories.to_string(),
            format!("{}g", self.protein),
            format!("{}g", self.carbs),
            format!("{}g", self.fat),
        ]
    }
}

impl From<&Nutrients> for DisplayNutrients {
    fn from(nutrients: &Nutrients) -> Self {
        Self {
            calories: round_nutrient(nutrients.calories),
            protein: round_nutrient(nutrients.protein),
            carbs: round_nutrient(nutrients.carbs),
            fat: round_nutrient(nutrients.fat),
        }
    }
}

/// One line of an expanded ingredient breakdown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngredientLine {
    /// Ingredient name
    pub name: String,
    /// Brand, when supplied
    pub brand: Option<String>,
    /// Serving description
    pub serving_info: String,
    /// Rounded ingredient nutrients
    pub nutrients: DisplayNutrients,
}

impl From<&Ingredient> for IngredientLine {
    fn from(ingredient: &Ingredient) -> Self {
        Self {
            name: ingredient.name.clone(),
            brand: ingredient.brand.clone(),
            serving_info: ingredient.serving_info.clone(),
            nutrients: DisplayNutrients::from(&ingredient.nutrients),
        }
    }
}

/// Ingredient breakdown panel of a meal card
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Breakdown {
    /// Meal has one ingredient or none, so no panel is offered
    Unavailable,
    /// Panel offered but collapsed
    Collapsed {
        /// Number of ingredients behind the toggle
        ingredient_count: usize,
    },
    /// Panel expanded by the user
    Expanded(Vec<IngredientLine>),
}

/// Display card for one logged meal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MealCardView {
    /// Position of the meal in `loggedMeals`, which keys its toggle
    pub index: usize,
    /// Meal name
    pub name: String,
    /// Portion description, when supplied
    pub size: Option<String>,
    /// Rounded producer totals
    pub totals: DisplayNutrients,
    /// Ingredient breakdown panel
    pub breakdown: Breakdown,
}

/// Everything the Ready state displays
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadyView {
    /// Daily totals card, only when `dailyTotals` was supplied
    pub daily_totals: Option<DisplayNutrients>,
    /// One card per logged meal in order
    pub meals: Vec<MealCardView>,
}

/// Expanded/collapsed state of each meal's breakdown panel, keyed by meal position
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BreakdownToggles {
    expanded: BTreeMap<usize, bool>,
}

impl BreakdownToggles {
    /// All panels collapsed
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the panel of the meal at `index` is expanded
    #[must_use]
    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded.get(&index).copied().unwrap_or(false)
    }

    /// Flip one panel and return its new state
    pub fn toggle(&mut self, index: usize) -> bool {
        let entry = self.expanded.entry(index).or_insert(false);
        *entry = !*entry;
        *entry
    }

    /// Set one panel explicitly
    pub fn set(&mut self, index: usize, expanded: bool) {
        self.expanded.insert(index, expanded);
    }

    /// Collapse every panel
    pub fn clear(&mut self) {
        self.expanded.clear();
    }
}

fn meal_card(index: usize, meal: &Meal, toggles: &BreakdownToggles) -> MealCardView {
    let breakdown = if meal.ingredients.len() <= 1 {
        Breakdown::Unavailable
    } else if toggles.is_expanded(index) {
        Breakdown::Expanded(meal.ingredients.iter().map(IngredientLine::from).collect())
    } else {
        Breakdown::Collapsed {
            ingredient_count: meal.ingredients.len(),
        }
    };

    MealCardView {
        index,
        name: meal.meal_name.clone(),
        size: meal.meal_size.clone(),
        totals: DisplayNutrients::from(&meal.total_nutrients),
        breakdown,
    }
}

/// Build the Ready view for canonical data and the current toggles
#[must_use]
pub fn present(data: &MealData, toggles: &BreakdownToggles) -> ReadyView {
    ReadyView {
        daily_totals: data.daily_totals.as_ref().map(DisplayNutrients::from),
        meals: data
            .meals()
            .iter()
            .enumerate()
            .map(|(index, meal)| meal_card(index, meal, toggles))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_half_away_from_zero() {
        assert_eq!(round_nutrient(56.5), 57);
        assert_eq!(round_nutrient(56.49), 56);
        assert_eq!(round_nutrient(0.0), 0);
        assert_eq!(round_nutrient(-0.5), -1);
        assert_eq!(round_nutrient(f64::NAN), 0);
    }

    #[test]
    fn test_round_saturates_out_of_range_values() {
        assert_eq!(round_nutrient(1e30), i64::MAX);
        assert_eq!(round_nutrient(-1e30), i64::MIN);
    }

    #[test]
    fn test_formatted_units() {
        let display = DisplayNutrients::from(&Nutrients::new(657.2, 30.0, 61.5, 0.0));
        assert_eq!(display.formatted(), ["657", "30g", "62g", "0g"]);
    }

    #[test]
    fn test_toggle_flips_independently() {
        let mut toggles = BreakdownToggles::new();
        assert!(toggles.toggle(1));
        assert!(!toggles.is_expanded(0));
        assert!(!toggles.toggle(1));
        toggles.set(2, true);
        toggles.clear();
        assert!(!toggles.is_expanded(2));
    }
}
