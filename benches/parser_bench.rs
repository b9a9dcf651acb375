// ABOUTME: Criterion benchmarks for the workout parsing pipeline
// ABOUTME: Measures full parses, preprocessing, type detection, and result serialization
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the workout parsing pipeline.
//!
//! Measures end-to-end parses over representative workout texts, the
//! preprocessing and type-detection stages in isolation, and JSON
//! serialization of parse results.

#![allow(
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    missing_docs
)]

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use wodparse::extractors::workout_type;
use wodparse::models::ParsedWorkoutResult;
use wodparse::preprocessor::TextPreprocessor;
use wodparse::WorkoutParser;

const AMRAP_TEXT: &str = "20 min AMRAP\n5 Pull-ups\n10 Push-ups\n15 Air Squats";

const FOR_TIME_TEXT: &str = "\"Fran\"\n21-15-9\nThrusters (95/65 lb)\nPull-ups";

const EMOM_TEXT: &str = "EMOM 12\n10 Wall Balls (20/14 lb)\n12 cal Row\n15 Double-unders";

const MIXED_TEXT: &str = "5 Rounds for time, 25 min cap\n\
    400m Run\n\
    15 Overhead Squats (95/65)\n\
    20 Box Jumps (24/20 in)\n\
    10 Toes-to-Bar\n\
    Rest 2 min";

/// Synthetic long chipper: one header plus `line_count` movement lines.
fn generate_chipper(line_count: usize) -> String {
    let mut text = String::from("For Time\n");
    let movements = [
        "Burpees",
        "Pull-ups",
        "Wall Balls (20/14 lb)",
        "cal Row",
        "Deadlifts (225/155 lb)",
        "Box Jumps",
        "Double-unders",
        "Sit-ups",
    ];
    for index in 0..line_count {
        let reps = 10 + (index * 7) % 40;
        let movement = movements[index % movements.len()];
        text.push_str(&format!("{reps} {movement}\n"));
    }
    text
}

/// Benchmark end-to-end parses across workout shapes
fn bench_full_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_parse");
    let parser = WorkoutParser::new();

    for (name, text) in [
        ("amrap_triplet", AMRAP_TEXT),
        ("named_for_time", FOR_TIME_TEXT),
        ("emom_triplet", EMOM_TEXT),
        ("rounds_with_cap", MIXED_TEXT),
    ] {
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_function(name, |b| {
            b.iter(|| parser.parse(black_box(text)));
        });
    }

    let chipper_50 = generate_chipper(50);
    group.throughput(Throughput::Bytes(chipper_50.len() as u64));
    group.bench_function("chipper_50_lines", |b| {
        b.iter(|| parser.parse(black_box(&chipper_50)));
    });

    group.finish();
}

/// Benchmark failure paths: rejected input must stay cheap
fn bench_rejection(c: &mut Criterion) {
    let mut group = c.benchmark_group("rejection");
    let parser = WorkoutParser::new();

    group.bench_function("empty_input", |b| {
        b.iter(|| parser.parse(black_box("   \n\n  ")));
    });

    let oversized = "10 Burpees\n".repeat(2_000);
    group.bench_function("oversized_input", |b| {
        b.iter(|| parser.parse(black_box(&oversized)));
    });

    group.finish();
}

/// Benchmark preprocessing in isolation
fn bench_preprocess(c: &mut Criterion) {
    let mut group = c.benchmark_group("preprocess");
    let preprocessor = TextPreprocessor::new();

    group.bench_function("mixed_workout", |b| {
        b.iter(|| preprocessor.preprocess(black_box(MIXED_TEXT)));
    });

    let chipper_50 = generate_chipper(50);
    group.throughput(Throughput::Bytes(chipper_50.len() as u64));
    group.bench_function("chipper_50_lines", |b| {
        b.iter(|| preprocessor.preprocess(black_box(&chipper_50)));
    });

    group.finish();
}

/// Benchmark workout-type detection over single header lines
fn bench_type_detection(c: &mut Criterion) {
    let mut group = c.benchmark_group("type_detection");

    for (name, line) in [
        ("amrap", "20 min AMRAP"),
        ("emom_trailing", "EMOM 10"),
        ("enmom", "E2MOM for 20 minutes"),
        ("rounds_for_time", "5 Rounds for time, 25 min cap"),
        ("tabata", "Tabata Squats"),
        ("bare_scheme", "21-15-9"),
        ("no_match", "10 Burpees"),
    ] {
        group.bench_function(name, |b| {
            b.iter(|| workout_type::detect_line(black_box(line), 1));
        });
    }

    group.finish();
}

/// Benchmark serializing parse results to JSON
fn bench_result_serialization(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialize_result");
    let parser = WorkoutParser::new();

    let result = parser.parse(MIXED_TEXT);
    let serialized = serde_json::to_vec(&result).unwrap();

    group.throughput(Throughput::Bytes(serialized.len() as u64));
    group.bench_function("to_vec", |b| {
        b.iter(|| serde_json::to_vec(black_box(&result)));
    });

    group.bench_function("roundtrip", |b| {
        b.iter(|| {
            let bytes = serde_json::to_vec(black_box(&result)).unwrap();
            serde_json::from_slice::<ParsedWorkoutResult>(&bytes).unwrap()
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_full_parse,
    bench_rejection,
    bench_preprocess,
    bench_type_detection,
    bench_result_serialization,
);
criterion_main!(benches);
