// ABOUTME: Diagnostics model: parse errors (blocking) and warnings (non-blocking) as values
// ABOUTME: Errors never cross the parse boundary as panics; everything is data in the result

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Parse Diagnostics
//!
//! Two severities exist in the pipeline:
//!
//! - **Errors** are blocking: the overall parse is marked unsuccessful,
//!   though a partial result may still be returned.
//! - **Warnings** are non-blocking: they reduce confidence but never flip
//!   `success` to false.
//!
//! Lower-level extractors never decide success or failure themselves. They
//! surface "no match" as `None` or a structured diagnostic, and only the
//! result validator decides whether a given absence is blocking.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Machine-readable error classification.
///
/// Serialized in PascalCase (e.g. `"UnrecognizedMovementFormat"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParseErrorType {
    /// Input was null, empty, or whitespace-only.
    EmptyInput,
    /// Sanitized input is shorter than the configured minimum.
    InputTooShort,
    /// Sanitized input exceeds the configured maximum.
    InputTooLong,
    /// Input contains control characters other than TAB/LF/CR.
    BinaryContent,
    /// Input contains a denylisted dangerous substring.
    InvalidCharacters,
    /// No movement line parsed successfully.
    NoMovementsDetected,
    /// A workout-type header was present but malformed (e.g. "0 min AMRAP").
    TypeDetectionFailed,
    /// A movement line yielded no residual movement text after extraction.
    UnrecognizedMovementFormat,
    /// A movement line declared a rep count of zero.
    InvalidRepCount,
}

/// A blocking parse error with line attribution.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct ParseError {
    /// Machine-readable classification.
    pub error_type: ParseErrorType,
    /// Human-readable description.
    pub message: String,
    /// 1-indexed line the error refers to; 0 for whole-input errors.
    pub line_number: usize,
    /// The offending fragment, when one exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_text: Option<String>,
}

impl ParseError {
    /// Error attributed to the whole input rather than a single line.
    #[must_use]
    pub fn whole_input(error_type: ParseErrorType, message: impl Into<String>) -> Self {
        Self {
            error_type,
            message: message.into(),
            line_number: 0,
            original_text: None,
        }
    }

    /// Error attributed to a specific 1-indexed line.
    #[must_use]
    pub fn at_line(
        error_type: ParseErrorType,
        message: impl Into<String>,
        line_number: usize,
        original_text: impl Into<String>,
    ) -> Self {
        Self {
            error_type,
            message: message.into(),
            line_number,
            original_text: Some(original_text.into()),
        }
    }
}

/// Machine-readable warning code.
///
/// Serialized in SCREAMING_SNAKE_CASE (e.g. `"UNKNOWN_MOVEMENT"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WarningCode {
    /// Sanitized input contains no digit at all.
    NoWorkoutStructure,
    /// The movement resolver returned no identity for a line.
    UnknownMovement,
    /// AMRAP workout without a time cap.
    MissingTimeCap,
    /// EMOM workout without an interval duration.
    MissingInterval,
    /// Rounds-type workout without a round count.
    MissingRounds,
    /// More than one workout-type keyword family matched the same header.
    AmbiguousType,
    /// Syntactically valid but implausibly large rep count.
    SuspiciousRepCount,
}

/// Fixed severity marker carried on every warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WarningSeverity {
    /// The only severity: non-blocking.
    #[default]
    Warning,
}

/// A non-blocking parse warning with optional suggestion and line attribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseWarning {
    /// Machine-readable code.
    pub code: WarningCode,
    /// Human-readable description.
    pub message: String,
    /// Actionable suggestion, when one is available.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    /// 1-indexed line the warning refers to; absent for whole-input warnings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    /// Always `"warning"`.
    pub severity: WarningSeverity,
    /// The triggering fragment, when one exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_text: Option<String>,
}

impl ParseWarning {
    /// Warning attributed to the whole input.
    #[must_use]
    pub fn whole_input(code: WarningCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            suggestion: None,
            line: None,
            severity: WarningSeverity::Warning,
            original_text: None,
        }
    }

    /// Warning attributed to a specific 1-indexed line.
    #[must_use]
    pub fn at_line(
        code: WarningCode,
        message: impl Into<String>,
        line: usize,
        original_text: impl Into<String>,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            suggestion: None,
            line: Some(line),
            severity: WarningSeverity::Warning,
            original_text: Some(original_text.into()),
        }
    }

    /// Attach a suggestion.
    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}
