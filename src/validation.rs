// ABOUTME: Input validator: sanitizes and gatekeeps raw text before any parsing begins
// ABOUTME: Length checks precede content checks so exactly one blocking error is emitted

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Input Validation
//!
//! The first pipeline stage. Sanitization normalizes whitespace without ever
//! mutating semantics (no case folding, no stemming); validation rejects
//! inputs that are empty, out of the configured length bounds, binary, or
//! carrying denylisted dangerous substrings.
//!
//! Check order is documented and testable: length checks run before content
//! checks, and the first failing check wins, so every rejected input carries
//! exactly one error.

use tracing::debug;

use crate::config::ParserConfig;
use crate::errors::{ParseError, ParseErrorType, ParseWarning, WarningCode};

/// Dangerous substrings rejected outright. A small denylist, not a general
/// HTML sanitizer.
const DANGEROUS_SUBSTRINGS: &[&str] = &["<script", "javascript:", "data:"];

/// Outcome of input validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    /// True iff no blocking error was found.
    pub is_valid: bool,
    /// Whitespace-normalized text; empty only for empty/whitespace input.
    pub sanitized_text: String,
    /// Blocking diagnostics (at most one).
    pub errors: Vec<ParseError>,
    /// Non-blocking diagnostics.
    pub warnings: Vec<ParseWarning>,
}

/// Sanitizes and validates raw input text.
#[derive(Debug, Clone, Default)]
pub struct InputValidator {
    config: ParserConfig,
}

impl InputValidator {
    /// Validator with default limits.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validator with custom limits.
    #[must_use]
    pub const fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Sanitize `text` and run the blocking checks in documented order.
    #[must_use]
    pub fn validate(&self, text: &str) -> ValidationResult {
        let sanitized = sanitize(text);

        if let Some(error) = self.first_blocking_error(&sanitized) {
            debug!(error_type = ?error.error_type, "input rejected");
            let sanitized_text = if error.error_type == ParseErrorType::EmptyInput {
                String::new()
            } else {
                sanitized
            };
            return ValidationResult {
                is_valid: false,
                sanitized_text,
                errors: vec![error],
                warnings: Vec::new(),
            };
        }

        let mut warnings = Vec::new();
        if !sanitized.bytes().any(|b| b.is_ascii_digit()) {
            warnings.push(ParseWarning::whole_input(
                WarningCode::NoWorkoutStructure,
                "Input contains no numbers; it may not describe a workout",
            ));
        }

        ValidationResult {
            is_valid: true,
            sanitized_text: sanitized,
            errors: Vec::new(),
            warnings,
        }
    }

    /// First failing check wins. Length checks precede content checks so any
    /// under-minimum input yields exactly EmptyInput or InputTooShort.
    fn first_blocking_error(&self, sanitized: &str) -> Option<ParseError> {
        if sanitized.is_empty() {
            return Some(ParseError::whole_input(
                ParseErrorType::EmptyInput,
                "Input is empty or whitespace-only",
            ));
        }
        let len = sanitized.chars().count();
        if len < self.config.min_input_length {
            return Some(ParseError::whole_input(
                ParseErrorType::InputTooShort,
                format!(
                    "Input is {len} characters; at least {} required",
                    self.config.min_input_length
                ),
            ));
        }
        if len > self.config.max_input_length {
            return Some(ParseError::whole_input(
                ParseErrorType::InputTooLong,
                format!(
                    "Input is {len} characters; at most {} allowed",
                    self.config.max_input_length
                ),
            ));
        }
        if sanitized
            .chars()
            .any(|c| c.is_control() && c != '\t' && c != '\n' && c != '\r')
        {
            return Some(ParseError::whole_input(
                ParseErrorType::BinaryContent,
                "Input contains non-text control characters",
            ));
        }
        let lowered = sanitized.to_lowercase();
        if let Some(found) = DANGEROUS_SUBSTRINGS.iter().find(|s| lowered.contains(**s)) {
            return Some(ParseError {
                error_type: ParseErrorType::InvalidCharacters,
                message: format!("Input contains a disallowed sequence: {found}"),
                line_number: 0,
                original_text: Some((*found).into()),
            });
        }
        None
    }
}

/// Whitespace normalization: trim ends, collapse runs of spaces/tabs to one
/// space, collapse runs of blank lines to a single blank line, preserve
/// single newlines. Never case-folds or stems.
fn sanitize(text: &str) -> String {
    let unified = text.replace("\r\n", "\n").replace('\r', "\n");
    let mut lines = Vec::new();
    let mut previous_blank = false;
    for raw_line in unified.lines() {
        let collapsed = collapse_spaces(raw_line.trim());
        let blank = collapsed.is_empty();
        if blank && previous_blank {
            continue;
        }
        previous_blank = blank;
        lines.push(collapsed);
    }
    lines.join("\n").trim().to_owned()
}

fn collapse_spaces(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut in_gap = false;
    for c in line.chars() {
        if c == ' ' || c == '\t' {
            if !in_gap {
                out.push(' ');
            }
            in_gap = true;
        } else {
            in_gap = false;
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_collapses_whitespace_runs() {
        assert_eq!(sanitize("  10   Pull-ups\t\tnow  "), "10 Pull-ups now");
    }

    #[test]
    fn sanitize_collapses_blank_line_runs() {
        assert_eq!(sanitize("a\n\n\n\nb"), "a\n\nb");
    }

    #[test]
    fn empty_input_yields_single_error_and_empty_text() {
        for input in ["", "   ", "\n\t\n"] {
            let result = InputValidator::new().validate(input);
            assert!(!result.is_valid);
            assert_eq!(result.errors.len(), 1);
            assert_eq!(result.errors[0].error_type, ParseErrorType::EmptyInput);
            assert_eq!(result.sanitized_text, "");
        }
    }

    #[test]
    fn boundary_lengths_are_valid() {
        let result = InputValidator::new().validate("5 min");
        assert!(result.is_valid, "exactly-at-minimum input must pass");
        let result = InputValidator::new().validate("4min");
        assert_eq!(result.errors[0].error_type, ParseErrorType::InputTooShort);
    }

    #[test]
    fn max_length_boundary_is_inclusive() {
        use crate::constants::limits;

        let header = "20 min AMRAP\n";
        let filler = limits::MAX_INPUT_LENGTH - header.chars().count();

        let at_limit = format!("{header}{}", "a".repeat(filler));
        let result = InputValidator::new().validate(&at_limit);
        assert!(result.is_valid, "exactly-at-maximum input must pass");

        let over_limit = format!("{header}{}", "a".repeat(filler + 1));
        let result = InputValidator::new().validate(&over_limit);
        assert!(!result.is_valid);
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].error_type, ParseErrorType::InputTooLong);
    }

    #[test]
    fn url_scheme_payloads_are_rejected() {
        for input in [
            "10 Pull-ups javascript:alert(1)",
            "10 Pull-ups data:text/html;base64,AAAA",
        ] {
            let result = InputValidator::new().validate(input);
            assert!(!result.is_valid, "input {input:?} must be rejected");
            assert_eq!(
                result.errors[0].error_type,
                ParseErrorType::InvalidCharacters
            );
        }
    }

    #[test]
    fn script_tag_is_rejected() {
        let result = InputValidator::new().validate("20 min AMRAP <script>alert(1)</script>");
        assert!(!result.is_valid);
        assert_eq!(result.errors.len(), 1);
        assert_eq!(
            result.errors[0].error_type,
            ParseErrorType::InvalidCharacters
        );
    }

    #[test]
    fn binary_content_is_rejected() {
        let result = InputValidator::new().validate("10 Pull\u{1}ups today");
        assert_eq!(result.errors[0].error_type, ParseErrorType::BinaryContent);
    }

    #[test]
    fn digit_free_input_warns_but_passes() {
        let result = InputValidator::new().validate("run then lift heavy things");
        assert!(result.is_valid);
        assert_eq!(result.warnings.len(), 1);
        assert_eq!(result.warnings[0].code, WarningCode::NoWorkoutStructure);
    }
}
