// ABOUTME: Data model for parsed workouts: units, workout structure, movements, results
// ABOUTME: Re-exports the public types used throughout the parsing pipeline

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Immutable value types produced by the parsing pipeline.
//!
//! ## Design Principles
//!
//! - **Serializable**: every public result type supports JSON serialization
//! - **Immutable**: results are constructed once from fully-computed inputs
//! - **Option-typed**: every "no match" is a proper absent value, never a sentinel

mod movement;
mod result;
mod units;
mod workout;

// Unit-bearing values
pub use units::{CaloriePair, Distance, DistanceUnit, Percentage, Weight, WeightPair, WeightUnit};

// Workout structure
pub use workout::{
    IntervalConfig, ParsedWorkout, RepScheme, RepSchemeType, WorkoutType, WorkoutTypeDetection,
};

// Movements
pub use movement::{MovementCategory, MovementIdentity, ParsedMovement, ParsedMovementLine};

// Results
pub use result::{
    ConfidenceBreakdown, ConfidenceLevel, LineParseResult, ParsedWorkoutResult, SkipReason,
};
