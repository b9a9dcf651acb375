// ABOUTME: WorkoutParser orchestrator: validation, preprocessing, extraction, resolution, assembly
// ABOUTME: parse() never panics and never returns Err; every outcome is a ParsedWorkoutResult value

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Workout Parser
//!
//! The entry point of the crate. A single parse runs strictly in sequence:
//! input validation, preprocessing, workout-type detection over the header
//! lines, movement-line decomposition plus resolution, and final result
//! assembly with confidence scoring.
//!
//! The pipeline is pure and synchronous with no shared mutable state, so a
//! `WorkoutParser` can be shared freely across threads when its resolver is
//! `Send + Sync`.
//!
//! ## Example
//!
//! ```
//! use wodparse::parser::WorkoutParser;
//! use wodparse::models::WorkoutType;
//!
//! let parser = WorkoutParser::new();
//! let result = parser.parse("20 min AMRAP\n10 Pull-ups\n15 Push-ups\n20 Air Squats");
//! assert!(result.success);
//! let workout = result.workout.unwrap();
//! assert_eq!(workout.workout_type, WorkoutType::Amrap);
//! assert_eq!(workout.time_cap_seconds, Some(1200));
//! assert_eq!(workout.movements.len(), 3);
//! ```

use std::collections::HashSet;

use tracing::debug;

use crate::config::ParserConfig;
use crate::errors::{ParseError, ParseErrorType, ParseWarning, WarningCode};
use crate::extractors::{duration, movement_line, rep_scheme, workout_type};
use crate::models::{
    ConfidenceBreakdown, ConfidenceLevel, LineParseResult, ParsedMovement, ParsedWorkout,
    ParsedWorkoutResult, RepScheme, SkipReason, WorkoutType, WorkoutTypeDetection,
};
use crate::movements::{MovementResolver, StaticMovementCatalog};
use crate::preprocessor::{PreprocessedText, TextPreprocessor};
use crate::scoring;
use crate::validation::InputValidator;

/// Parses free-form workout text into a structured, confidence-scored result.
pub struct WorkoutParser {
    config: ParserConfig,
    validator: InputValidator,
    preprocessor: TextPreprocessor,
    resolver: Box<dyn MovementResolver + Send + Sync>,
}

impl WorkoutParser {
    /// Parser with default limits and the built-in movement catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::with_resolver(Box::new(StaticMovementCatalog::new()))
    }

    /// Parser with a custom movement resolver.
    #[must_use]
    pub fn with_resolver(resolver: Box<dyn MovementResolver + Send + Sync>) -> Self {
        Self::with_config(ParserConfig::default(), resolver)
    }

    /// Parser with custom limits and resolver.
    #[must_use]
    pub fn with_config(
        config: ParserConfig,
        resolver: Box<dyn MovementResolver + Send + Sync>,
    ) -> Self {
        Self {
            validator: InputValidator::with_config(config.clone()),
            preprocessor: TextPreprocessor::new(),
            config,
            resolver,
        }
    }

    /// Parse `text` into a [`ParsedWorkoutResult`].
    ///
    /// Never panics and never returns `Err`: every failure mode is a value in
    /// the result's error list, and a best-effort partial workout is populated
    /// whenever some structure was recovered.
    #[must_use]
    pub fn parse(&self, text: &str) -> ParsedWorkoutResult {
        let validation = self.validator.validate(text);
        if !validation.is_valid {
            debug!("input rejected before parsing");
            return input_failure(text, validation.errors, validation.warnings);
        }
        let mut warnings = validation.warnings;

        let pre = self.preprocessor.preprocess(&validation.sanitized_text);
        debug!(lines = pre.lines.len(), "preprocessed input");

        let mut errors = Vec::new();
        let detection = detect_type(&pre, &mut errors);
        if detection.ambiguous {
            warnings.push(
                ParseWarning::at_line(
                    WarningCode::AmbiguousType,
                    "More than one workout-type keyword matched the same header",
                    detection.source_line,
                    pre.lines
                        .get(detection.source_line.saturating_sub(1))
                        .map_or("", String::as_str),
                )
                .with_suggestion("Keep a single type declaration per workout"),
            );
        }

        let line_results = self.parse_lines(&pre, &mut errors, &mut warnings);
        let movements: Vec<ParsedMovement> = line_results
            .iter()
            .filter_map(|r| match r {
                LineParseResult::Success { movement, .. } => Some(movement.clone()),
                _ => None,
            })
            .collect();

        validate_structure(&detection, &movements, &mut errors, &mut warnings);

        assemble(
            text,
            &pre,
            detection,
            movements,
            line_results,
            errors,
            warnings,
        )
    }

    /// Decompose and resolve every line, producing one result per line.
    fn parse_lines(
        &self,
        pre: &PreprocessedText,
        errors: &mut Vec<ParseError>,
        warnings: &mut Vec<ParseWarning>,
    ) -> Vec<LineParseResult> {
        let movement_numbers: HashSet<usize> = pre.movement_lines().map(|(n, _)| n).collect();
        pre.lines
            .iter()
            .enumerate()
            .map(|(index, line)| {
                let line_number = index + 1;
                if movement_numbers.contains(&line_number) {
                    self.parse_movement_line(line, line_number, errors, warnings)
                } else {
                    LineParseResult::Skipped {
                        reason: SkipReason::HeaderLine,
                    }
                }
            })
            .collect()
    }

    fn parse_movement_line(
        &self,
        line: &str,
        line_number: usize,
        errors: &mut Vec<ParseError>,
        warnings: &mut Vec<ParseWarning>,
    ) -> LineParseResult {
        let parsed = movement_line::decompose(line);

        if parsed.movement_text.is_empty() {
            let error = ParseError::at_line(
                ParseErrorType::UnrecognizedMovementFormat,
                "Line contains no movement text",
                line_number,
                line,
            );
            errors.push(error.clone());
            return LineParseResult::Failed { error };
        }
        if parsed.reps == Some(0) {
            let error = ParseError::at_line(
                ParseErrorType::InvalidRepCount,
                "Rep count must be greater than zero",
                line_number,
                line,
            );
            errors.push(error.clone());
            return LineParseResult::Failed { error };
        }

        let mut line_warnings = Vec::new();
        let identity = self.resolver.resolve(&parsed.movement_text);
        if identity.is_none() {
            let mut warning = ParseWarning::at_line(
                WarningCode::UnknownMovement,
                format!("Unrecognized movement: {}", parsed.movement_text),
                line_number,
                line,
            );
            if let Some(suggestion) = self.resolver.suggest(&parsed.movement_text) {
                warning = warning.with_suggestion(format!("Did you mean \"{suggestion}\"?"));
            }
            line_warnings.push(warning);
        }
        let suspicious =
            parsed.reps.is_some_and(|reps| reps > self.config.suspicious_rep_count);
        if suspicious {
            line_warnings.push(ParseWarning::at_line(
                WarningCode::SuspiciousRepCount,
                format!(
                    "Rep count above {} is unusual; double-check the prescription",
                    self.config.suspicious_rep_count
                ),
                line_number,
                line,
            ));
        }

        let confidence =
            scoring::line_confidence(identity.is_some(), parsed.has_quantity(), suspicious);
        warnings.extend(line_warnings.iter().cloned());
        LineParseResult::Success {
            movement: ParsedMovement {
                line: parsed,
                identity,
                line_number,
            },
            confidence,
            warnings: line_warnings,
        }
    }
}

impl Default for WorkoutParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Run type detection over the header lines, first match wins; remaining
/// header lines still contribute missing time caps, round counts, and
/// intervals.
fn detect_type(pre: &PreprocessedText, errors: &mut Vec<ParseError>) -> WorkoutTypeDetection {
    let mut detection: Option<WorkoutTypeDetection> = None;
    for (line_number, line) in pre.header_lines() {
        match workout_type::detect_line(line, line_number) {
            Ok(Some(found)) if detection.is_none() => detection = Some(found),
            Ok(_) => {}
            Err(error) => errors.push(error),
        }
    }
    let mut detection = detection.unwrap_or_else(WorkoutTypeDetection::fallback);

    for (_, line) in pre.header_lines() {
        if detection.time_cap_seconds.is_none() {
            detection.time_cap_seconds = duration::extract_time_cap_seconds(line);
        }
        if detection.round_count.is_none() {
            detection.round_count = duration::extract_round_count(line);
        }
        if detection.interval.is_none() {
            detection.interval = duration::extract_interval(line);
        }
    }
    debug!(workout_type = ?detection.workout_type, confidence = detection.confidence, "detected workout type");
    detection
}

/// Final structural checks: blocking when no movements parsed, non-blocking
/// when a domain-appropriate time parameter is missing.
fn validate_structure(
    detection: &WorkoutTypeDetection,
    movements: &[ParsedMovement],
    errors: &mut Vec<ParseError>,
    warnings: &mut Vec<ParseWarning>,
) {
    if movements.is_empty() {
        errors.push(ParseError::whole_input(
            ParseErrorType::NoMovementsDetected,
            "No movement lines were recognized",
        ));
    }
    match detection.workout_type {
        WorkoutType::Amrap if detection.time_cap_seconds.is_none() => {
            warnings.push(
                ParseWarning::whole_input(
                    WarningCode::MissingTimeCap,
                    "AMRAP workout has no time cap",
                )
                .with_suggestion("Add a duration, e.g. \"20 min AMRAP\""),
            );
        }
        WorkoutType::Emom if detection.interval.is_none() => {
            warnings.push(
                ParseWarning::whole_input(
                    WarningCode::MissingInterval,
                    "EMOM workout has no interval duration",
                )
                .with_suggestion("Specify the length, e.g. \"EMOM 10\""),
            );
        }
        WorkoutType::Rounds if detection.round_count.is_none() => {
            warnings.push(
                ParseWarning::whole_input(
                    WarningCode::MissingRounds,
                    "Rounds workout has no round count",
                )
                .with_suggestion("State the rounds, e.g. \"5 Rounds\""),
            );
        }
        _ => {}
    }
}

/// Build the failure result for inputs rejected by the validator.
fn input_failure(
    original_text: &str,
    errors: Vec<ParseError>,
    warnings: Vec<ParseWarning>,
) -> ParsedWorkoutResult {
    let breakdown = ConfidenceBreakdown {
        type_confidence: 0.0,
        time_domain_confidence: 0.0,
        movement_confidence: 0.0,
        movements_identified: 0,
        total_movement_lines: 0,
        movements_with_complete_data: 0,
    };
    let confidence = scoring::overall_confidence(&breakdown, warnings.len(), true);
    ParsedWorkoutResult {
        success: false,
        workout: None,
        partial_result: None,
        errors,
        warnings,
        confidence,
        confidence_level: ConfidenceLevel::from_score(confidence),
        breakdown,
        is_usable: false,
        line_results: Vec::new(),
        original_text: original_text.to_owned(),
    }
}

/// Assemble the immutable top-level result from fully-computed inputs.
fn assemble(
    original_text: &str,
    pre: &PreprocessedText,
    detection: WorkoutTypeDetection,
    movements: Vec<ParsedMovement>,
    line_results: Vec<LineParseResult>,
    errors: Vec<ParseError>,
    warnings: Vec<ParseWarning>,
) -> ParsedWorkoutResult {
    let total_movement_lines = pre.movement_lines().count();
    let movements_identified = movements.iter().filter(|m| m.is_resolved()).count();
    let movements_with_complete_data = movements
        .iter()
        .filter(|m| m.is_resolved() && m.line.has_quantity())
        .count();
    let breakdown = ConfidenceBreakdown {
        type_confidence: detection.confidence,
        time_domain_confidence: scoring::time_domain_confidence(&detection),
        movement_confidence: scoring::movement_confidence(
            movements_identified,
            total_movement_lines,
        ),
        movements_identified,
        total_movement_lines,
        movements_with_complete_data,
    };

    let scheme: Option<RepScheme> = pre
        .header_lines()
        .find_map(|(_, line)| rep_scheme::extract(line));

    let success = errors.is_empty();
    let has_movements = !movements.is_empty();
    let workout = ParsedWorkout {
        workout_type: detection.workout_type,
        type_confidence: detection.confidence,
        time_cap_seconds: detection.time_cap_seconds,
        interval: detection.interval,
        round_count: detection.round_count,
        rep_scheme: scheme,
        name: pre.workout_name.clone(),
        movements,
    };
    let recovered_structure = has_movements
        || workout.rep_scheme.is_some()
        || workout.time_cap_seconds.is_some()
        || workout.round_count.is_some()
        || workout.interval.is_some();

    let confidence = scoring::overall_confidence(&breakdown, warnings.len(), !success);
    let (full, partial) = if success {
        (Some(workout), None)
    } else if recovered_structure {
        (None, Some(workout))
    } else {
        (None, None)
    };

    ParsedWorkoutResult {
        success,
        workout: full,
        partial_result: partial,
        errors,
        warnings,
        confidence,
        confidence_level: ConfidenceLevel::from_score(confidence),
        breakdown,
        is_usable: has_movements,
        line_results,
        original_text: original_text.to_owned(),
    }
}
