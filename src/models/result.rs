// ABOUTME: Per-line and top-level parse result types with confidence breakdown
// ABOUTME: ParsedWorkoutResult is assembled once from fully-computed inputs, never mutated

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use crate::errors::{ParseError, ParseWarning};
use crate::models::movement::ParsedMovement;
use crate::models::workout::ParsedWorkout;

/// Why a line was skipped rather than parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// The line is structural (type declaration, time cap, rep scheme, ...).
    HeaderLine,
    /// The line was blank after normalization.
    BlankLine,
}

/// Per-line parse outcome. Exactly one of the three states holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LineParseResult {
    /// The line decomposed into a movement.
    Success {
        /// The parsed movement.
        movement: ParsedMovement,
        /// Per-line confidence in [0, 100].
        confidence: f64,
        /// Non-blocking diagnostics attached to this line.
        warnings: Vec<ParseWarning>,
    },
    /// The line could not be parsed as a movement.
    Failed {
        /// The blocking diagnostic.
        error: ParseError,
    },
    /// The line was intentionally not parsed as a movement.
    Skipped {
        /// Why it was skipped.
        reason: SkipReason,
    },
}

/// Human-facing confidence label. Thresholds: ≥100 Perfect, ≥80 High,
/// ≥60 Medium, else Low.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfidenceLevel {
    /// Score of exactly 100.
    Perfect,
    /// Score in [80, 100).
    High,
    /// Score in [60, 80).
    Medium,
    /// Score below 60.
    Low,
}

impl ConfidenceLevel {
    /// Map a numeric score to its label, exact at the boundaries.
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score >= 100.0 {
            Self::Perfect
        } else if score >= 80.0 {
            Self::High
        } else if score >= 60.0 {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

/// Itemized confidence factors feeding the overall score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceBreakdown {
    /// Workout-type detection confidence in [0, 1].
    pub type_confidence: f64,
    /// Time-domain confidence in [0, 1]: 1.0 when the domain-appropriate
    /// parameter (cap/interval/rounds) was found, reduced otherwise.
    pub time_domain_confidence: f64,
    /// Movement-identification confidence in [0, 100]:
    /// resolved count / total movement lines, scaled.
    pub movement_confidence: f64,
    /// Number of movement lines the resolver identified.
    pub movements_identified: usize,
    /// Total number of movement-classified lines.
    pub total_movement_lines: usize,
    /// Movements both identified and carrying at least one quantity.
    pub movements_with_complete_data: usize,
}

/// The top-level artifact of a parse call.
///
/// Constructed once per parse, fully immutable after construction, never
/// persisted by this crate. `parse` never panics and never returns `Err`;
/// every failure mode is a value in `errors`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedWorkoutResult {
    /// True iff no blocking error occurred.
    pub success: bool,
    /// The fully parsed workout; `None` unless `success`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workout: Option<ParsedWorkout>,
    /// Best-effort structure recovered from a failed parse.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partial_result: Option<ParsedWorkout>,
    /// Blocking diagnostics, in emission order.
    pub errors: Vec<ParseError>,
    /// Non-blocking diagnostics, in emission order.
    pub warnings: Vec<ParseWarning>,
    /// Overall confidence in [0, 100].
    pub confidence: f64,
    /// Itemized confidence factors.
    pub breakdown: ConfidenceBreakdown,
    /// Label for `confidence`.
    pub confidence_level: ConfidenceLevel,
    /// True whenever the assembled workout (full or partial) has at least one
    /// movement; independent of the numeric confidence.
    pub is_usable: bool,
    /// Per-line outcomes, in preprocessed line order.
    pub line_results: Vec<LineParseResult>,
    /// The original input text, echoed for audit.
    pub original_text: String,
}
