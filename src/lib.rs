// ABOUTME: Main library entry point for the wodparse workout description parser
// ABOUTME: Exposes the parsing pipeline, data models, and movement resolution contract

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # wodparse
//!
//! A deterministic parser that turns free-form, human-written workout
//! descriptions ("20 min AMRAP / 10 Pull-ups / 15 Push-ups / 20 Air Squats")
//! into a structured, validated representation: a workout-type classification,
//! timing parameters, an ordered list of movements with quantities, loads, and
//! distances, and a confidence-scored diagnostic report with per-line error
//! and warning attribution.
//!
//! ## Pipeline
//!
//! - **Validation**: sanitize whitespace, reject empty/oversized/binary input
//! - **Preprocessing**: normalize Unicode look-alikes, split and classify lines
//! - **Extraction**: ordered pattern families for workout type, rep schemes,
//!   weights, distances, calories, durations, and percentages
//! - **Resolution**: map movement text to canonical identities via a pluggable
//!   [`movements::MovementResolver`]
//! - **Scoring**: assemble the final result with a 0-100 confidence score
//!
//! ## Example Usage
//!
//! ```
//! use wodparse::parser::WorkoutParser;
//!
//! let parser = WorkoutParser::new();
//! let result = parser.parse("21-15-9\nThrusters (95/65 lb)\nPull-ups");
//! assert!(result.success);
//! assert!(result.is_usable);
//! ```
//!
//! Errors never cross the parse boundary as panics: every failure mode is a
//! value in the result's error list, and callers always receive a complete
//! [`models::ParsedWorkoutResult`].

/// Parser configuration with documented limits
pub mod config;

/// Documented numeric constants (conversions, limits, scoring weights)
pub mod constants;

/// Diagnostics model: blocking errors and non-blocking warnings
pub mod errors;

/// Pattern extraction engine: independent per-concept extractors
pub mod extractors;

/// Immutable data models for parsed workouts
pub mod models;

/// Movement resolver contract and built-in catalog
pub mod movements;

/// The parse orchestrator and entry point
pub mod parser;

/// Text preprocessing: normalization and line classification
pub mod preprocessor;

/// Confidence scoring functions
pub mod scoring;

/// Input validation and sanitization
pub mod validation;

pub use errors::{ParseError, ParseErrorType, ParseWarning, WarningCode};
pub use models::{ParsedWorkout, ParsedWorkoutResult, WorkoutType};
pub use parser::WorkoutParser;
