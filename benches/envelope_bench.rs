// ABOUTME: Criterion benchmarks for envelope normalization and render state derivation
// ABOUTME: Measures the per-update widget pipeline for envelopes with growing meal counts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the widget pipeline.

#![allow(
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    missing_docs
)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use serde_json::{json, Value};

use nutrition_mcp_server::widget::{
    derive_render_state, normalize, present, BreakdownToggles, WidgetSession,
};

const MEAL_COUNTS: [usize; 3] = [1, 10, 100];

fn meal(index: usize) -> Value {
    json!({
        "meal_name": format!("Meal {index}"),
        "meal_size": "1 plate",
        "total_nutrients": {"calories": 512.4, "protein": 21.5, "carbs": 60.2, "fat": 18.9},
        "ingredients": [
            {"name": "Rice", "serving_info": "1 cup", "nutrients": {"calories": 206, "protein": 4.3, "carbs": 45, "fat": 0.4}},
            {"name": "Chicken", "brand": "Farm", "serving_info": "100g", "nutrients": {"calories": 239, "protein": 27, "carbs": 0, "fat": 14}},
            {"name": "Oil", "serving_info": "1 tbsp", "nutrients": {"calories": 67.4, "protein": 0, "carbs": 0, "fat": 4.5}}
        ]
    })
}

fn envelope(meals: usize) -> Value {
    json!({
        "result": {
            "structuredContent": {
                "dailyTotals": {"calories": 2000, "protein": 90, "carbs": 250, "fat": 70},
                "loggedMeals": (0..meals).map(meal).collect::<Vec<_>>()
            }
        }
    })
}

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");
    for count in MEAL_COUNTS {
        let raw = envelope(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &raw, |b, raw| {
            b.iter(|| normalize(Some(black_box(raw))));
        });
    }
    group.finish();
}

fn bench_state_and_present(c: &mut Criterion) {
    let mut group = c.benchmark_group("state_and_present");
    let toggles = BreakdownToggles::new();
    for count in MEAL_COUNTS {
        let raw = envelope(count);
        let normalized = normalize(Some(&raw));
        let data = normalized.meal_data.clone().unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(count), &raw, |b, raw| {
            b.iter(|| {
                let state = derive_render_state(Some(black_box(raw)), &normalized);
                let view = present(black_box(&data), &toggles);
                (state, view)
            });
        });
    }
    group.finish();
}

fn bench_session_update(c: &mut Criterion) {
    let raw = envelope(10);
    c.bench_function("session_receive_and_view", |b| {
        b.iter(|| {
            let mut session = WidgetSession::new();
            session.receive(black_box(raw.clone()));
            session.view()
        });
    });
}

criterion_group!(
    benches,
    bench_normalize,
    bench_state_and_present,
    bench_session_update
);
criterion_main!(benches);
