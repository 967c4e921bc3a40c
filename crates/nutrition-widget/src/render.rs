// ABOUTME: Plain-text rendering of widget views for terminals and logs
// ABOUTME: Lays out daily totals, meal cards, and expanded ingredient breakdowns as text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt::Write;

use crate::presenter::{Breakdown, DisplayNutrients, MealCardView, ReadyView};
use crate::session::WidgetView;

const LOADING_TEXT: &str = "Analyzing your meal...";
const EMPTY_TEXT: &str = "No meals logged yet.";

/// Render a widget view as plain text
#[must_use]
pub fn render_text(view: &WidgetView) -> String {
    match view {
        WidgetView::Loading => format!("{LOADING_TEXT}\n"),
        WidgetView::Error(message) => format!("Error: {message}\n"),
        WidgetView::Empty => format!("{EMPTY_TEXT}\n"),
        WidgetView::Ready(ready) => render_ready(ready),
    }
}

fn render_ready(view: &ReadyView) -> String {
    let mut out = String::new();
    if let Some(totals) = &view.daily_totals {
        out.push_str("Daily Totals\n");
        push_nutrients(&mut out, totals, "  ");
        out.push('\n');
    }
    for meal in &view.meals {
        push_meal(&mut out, meal);
    }
    out
}

fn push_meal(out: &mut String, meal: &MealCardView) {
    match &meal.size {
        Some(size) => {
            let _ = writeln!(out, "[{}] {} ({size})", meal.index, meal.name);
        }
        None => {
            let _ = writeln!(out, "[{}] {}", meal.index, meal.name);
        }
    }
    push_nutrients(out, &meal.totals, "  ");

    match &meal.breakdown {
        Breakdown::Unavailable => {}
        Breakdown::Collapsed { ingredient_count } => {
            let _ = writeln!(out, "  + Show breakdown ({ingredient_count} ingredients)");
        }
        Breakdown::Expanded(lines) => {
            out.push_str("  - Hide breakdown\n");
            for line in lines {
                match &line.brand {
                    Some(brand) => {
                        let _ = writeln!(out, "    {} [{brand}], {}", line.name, line.serving_info);
                    }
                    None => {
                        let _ = writeln!(out, "    {}, {}", line.name, line.serving_info);
                    }
                }
                push_nutrients(out, &line.nutrients, "      ");
            }
        }
    }
    out.push('\n');
}

fn push_nutrients(out: &mut String, nutrients: &DisplayNutrients, indent: &str) {
    let fields: Vec<String> = DisplayNutrients::LABELS
        .iter()
        .zip(nutrients.formatted())
        .map(|(label, value)| format!("{label}: {value}"))
        .collect();
    let _ = writeln!(out, "{indent}{}", fields.join("  "));
}
