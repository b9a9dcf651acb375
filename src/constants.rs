// ABOUTME: Documented numeric constants for unit conversion, input limits, and scoring
// ABOUTME: Single source of truth so conversions and confidence weights stay testable

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Parser Constants
//!
//! Centralized constants used across the parsing pipeline. Conversion factors
//! and confidence weights live here so tests can pin them and call sites never
//! embed magic numbers.

/// Unit conversion factors.
pub mod conversion {
    /// Pounds to kilograms (exact avoirdupois definition).
    pub const LB_TO_KG: f64 = 0.453_592_37;

    /// Pood (Russian kettlebell unit) to kilograms.
    pub const POOD_TO_KG: f64 = 16.38;

    /// Miles to meters.
    pub const MILES_TO_METERS: f64 = 1_609.34;

    /// Feet to meters.
    pub const FEET_TO_METERS: f64 = 0.3048;

    /// Kilometers to meters.
    pub const KM_TO_METERS: f64 = 1_000.0;
}

/// Input validation limits.
pub mod limits {
    /// Minimum accepted input length after sanitization (boundary value is valid).
    pub const MIN_INPUT_LENGTH: usize = 5;

    /// Maximum accepted input length after sanitization (boundary value is valid).
    pub const MAX_INPUT_LENGTH: usize = 10_000;

    /// Rep counts above this are syntactically valid but flagged as suspicious.
    pub const SUSPICIOUS_REP_COUNT: u32 = 500;

    /// Largest round count a "{n} rounds of {m} reps" declaration may
    /// materialize as a rep scheme; larger counts are treated as no match.
    pub const MAX_SCHEME_ROUNDS: u32 = 1_000;
}

/// Tabata protocol constants: 8 rounds of 20s work / 10s rest.
pub mod tabata {
    /// Number of Tabata rounds.
    pub const ROUNDS: u32 = 8;

    /// Work interval in seconds.
    pub const WORK_SECONDS: u32 = 20;

    /// Rest interval in seconds.
    pub const REST_SECONDS: u32 = 10;
}

/// Confidence scoring weights. The overall score is
/// `type*TYPE_WEIGHT + time*TIME_WEIGHT + movement*MOVEMENT_WEIGHT - warnings*WARNING_PENALTY`,
/// clamped to [0, 100] and capped at [`ERROR_SCORE_CAP`] when any blocking
/// error is present. A perfect parse scores exactly 100.
pub mod scoring {
    /// Weight of workout-type detection confidence (0..=1 scaled by this).
    pub const TYPE_WEIGHT: f64 = 25.0;

    /// Weight of time-domain confidence (0..=1 scaled by this).
    pub const TIME_WEIGHT: f64 = 15.0;

    /// Weight of movement-identification confidence (0..=1 scaled by this).
    pub const MOVEMENT_WEIGHT: f64 = 60.0;

    /// Points subtracted per warning.
    pub const WARNING_PENALTY: f64 = 5.0;

    /// Hard cap applied when any blocking error is present (keeps level "Low").
    pub const ERROR_SCORE_CAP: f64 = 40.0;

    /// Time-domain confidence when the domain-appropriate parameter is missing.
    pub const MISSING_TIME_PARAMETER_CONFIDENCE: f64 = 0.5;

    /// Per-line base confidence.
    pub const LINE_BASE: f64 = 100.0;

    /// Per-line deduction when the movement could not be resolved.
    pub const LINE_UNRESOLVED_PENALTY: f64 = 30.0;

    /// Per-line deduction when no quantity (reps/load/distance/calories/duration) was found.
    pub const LINE_NO_QUANTITY_PENALTY: f64 = 10.0;

    /// Per-line deduction for a suspicious rep count.
    pub const LINE_SUSPICIOUS_REPS_PENALTY: f64 = 10.0;
}

/// Workout-type detection confidences per pattern family.
pub mod detection {
    /// Confidence for explicit AMRAP / For Time / EMOM / Tabata declarations.
    pub const KEYWORD_CONFIDENCE: f64 = 1.0;

    /// Confidence for "{n} Rounds" style declarations.
    pub const ROUNDS_CONFIDENCE: f64 = 0.9;

    /// Confidence for a bare chipper rep scheme ("21-15-9") with no keyword.
    pub const CHIPPER_CONFIDENCE: f64 = 0.8;

    /// Fallback confidence when nothing matches (ForTime default).
    pub const FALLBACK_CONFIDENCE: f64 = 0.5;
}
