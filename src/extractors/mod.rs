// ABOUTME: Pattern extraction engine: independent, composable extractors over single lines
// ABOUTME: Every extractor returns None for "no match"; only the result validator decides blocking-ness

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Pattern Extraction Engine
//!
//! A family of independent extractors, each a pure function over a line or
//! substring:
//!
//! - [`workout_type`]: type detection with documented precedence
//! - [`rep_scheme`]: hyphen/slash rep sequences and "n rounds of m reps"
//! - [`load`]: weights and weight pairs (lb/kg/pood)
//! - [`distance`]: meters/kilometers/feet/miles
//! - [`calories`]: calorie targets and pairs
//! - [`duration`]: durations, time caps, round counts, intervals
//! - [`percentage`]: percentage load references
//! - [`movement_line`]: full movement-line decomposition
//!
//! Failure policy: extractors never throw when a line doesn't fit; absence of
//! a match is `None` and is not itself an error.

pub mod calories;
pub mod distance;
pub mod duration;
pub mod load;
pub mod movement_line;
pub mod percentage;
pub mod rep_scheme;
pub mod workout_type;
