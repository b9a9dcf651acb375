// ABOUTME: Confidence scoring as a small set of documented pure functions
// ABOUTME: Weights live in constants::scoring and are pinned by unit and property tests

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Confidence Scoring
//!
//! The overall score combines workout-type confidence, time-domain confidence,
//! and movement-identification confidence, minus a penalty per warning:
//!
//! ```text
//! raw = type*25 + time*15 + (movement/100)*60 - 5*warnings
//! ```
//!
//! clamped to [0, 100]. Any blocking error additionally caps the score at 40,
//! which keeps the label "Low". A perfect parse (all movements resolved, type
//! confidence 1.0, no warnings) scores exactly 100 ("Perfect").

use crate::constants::scoring;
use crate::models::{ConfidenceBreakdown, WorkoutType, WorkoutTypeDetection};

/// Overall confidence in [0, 100] from the breakdown factors.
#[must_use]
pub fn overall_confidence(
    breakdown: &ConfidenceBreakdown,
    warning_count: usize,
    has_blocking_error: bool,
) -> f64 {
    let raw = breakdown.type_confidence * scoring::TYPE_WEIGHT
        + breakdown.time_domain_confidence * scoring::TIME_WEIGHT
        + (breakdown.movement_confidence / 100.0) * scoring::MOVEMENT_WEIGHT
        - scoring::WARNING_PENALTY * warning_count as f64;
    let clamped = raw.clamp(0.0, 100.0);
    if has_blocking_error {
        clamped.min(scoring::ERROR_SCORE_CAP)
    } else {
        clamped
    }
}

/// Time-domain confidence: 1.0 when the domain-appropriate parameter is
/// present (AMRAP needs a cap, EMOM/Intervals an interval, Rounds a count;
/// ForTime needs nothing), reduced otherwise.
#[must_use]
pub fn time_domain_confidence(detection: &WorkoutTypeDetection) -> f64 {
    let satisfied = match detection.workout_type {
        WorkoutType::Amrap => detection.time_cap_seconds.is_some(),
        WorkoutType::Emom | WorkoutType::Intervals => detection.interval.is_some(),
        WorkoutType::Rounds => detection.round_count.is_some(),
        WorkoutType::ForTime => true,
    };
    if satisfied {
        1.0
    } else {
        scoring::MISSING_TIME_PARAMETER_CONFIDENCE
    }
}

/// Per-line confidence in [0, 100]: base 100, minus deductions for an
/// unresolved movement, a missing quantity, and a suspicious rep count.
#[must_use]
pub fn line_confidence(resolved: bool, has_quantity: bool, suspicious_reps: bool) -> f64 {
    let mut score = scoring::LINE_BASE;
    if !resolved {
        score -= scoring::LINE_UNRESOLVED_PENALTY;
    }
    if !has_quantity {
        score -= scoring::LINE_NO_QUANTITY_PENALTY;
    }
    if suspicious_reps {
        score -= scoring::LINE_SUSPICIOUS_REPS_PENALTY;
    }
    score.clamp(0.0, 100.0)
}

/// Movement-identification confidence: resolved / total, scaled to [0, 100].
/// Zero movement lines yield zero.
#[must_use]
pub fn movement_confidence(identified: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        identified as f64 / total as f64 * 100.0
    }
}
