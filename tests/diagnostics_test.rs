// ABOUTME: Tests for diagnostic serialization shapes and result JSON structure
// ABOUTME: Pins PascalCase error types, SCREAMING_SNAKE_CASE warning codes, fixed severity

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

// Test modules don't need documentation
#![allow(missing_docs)]
// Allow unwrap in tests - tests should panic on failure
#![allow(clippy::unwrap_used)]

use serde_json::json;
use wodparse::errors::{ParseError, ParseErrorType, ParseWarning, WarningCode};
use wodparse::WorkoutParser;

#[test]
fn error_type_serializes_in_pascal_case() {
    let error = ParseError::at_line(
        ParseErrorType::UnrecognizedMovementFormat,
        "Line contains no movement text",
        3,
        "95 lb",
    );
    let value = serde_json::to_value(&error).unwrap();
    assert_eq!(value["error_type"], json!("UnrecognizedMovementFormat"));
    assert_eq!(value["line_number"], json!(3));
    assert_eq!(value["original_text"], json!("95 lb"));
}

#[test]
fn whole_input_errors_use_line_zero() {
    let error = ParseError::whole_input(ParseErrorType::EmptyInput, "Input is empty");
    let value = serde_json::to_value(&error).unwrap();
    assert_eq!(value["line_number"], json!(0));
    assert!(value.get("original_text").is_none());
}

#[test]
fn warning_serializes_with_screaming_snake_code_and_fixed_severity() {
    let warning = ParseWarning::at_line(
        WarningCode::UnknownMovement,
        "Unrecognized movement: Thrustters",
        2,
        "10 Thrustters",
    )
    .with_suggestion("Did you mean \"Thruster\"?");
    let value = serde_json::to_value(&warning).unwrap();
    assert_eq!(value["code"], json!("UNKNOWN_MOVEMENT"));
    assert_eq!(value["severity"], json!("warning"));
    assert_eq!(value["line"], json!(2));
    assert_eq!(value["suggestion"], json!("Did you mean \"Thruster\"?"));
}

#[test]
fn all_warning_codes_are_screaming_snake() {
    let codes = [
        (WarningCode::NoWorkoutStructure, "NO_WORKOUT_STRUCTURE"),
        (WarningCode::UnknownMovement, "UNKNOWN_MOVEMENT"),
        (WarningCode::MissingTimeCap, "MISSING_TIME_CAP"),
        (WarningCode::MissingInterval, "MISSING_INTERVAL"),
        (WarningCode::MissingRounds, "MISSING_ROUNDS"),
        (WarningCode::AmbiguousType, "AMBIGUOUS_TYPE"),
        (WarningCode::SuspiciousRepCount, "SUSPICIOUS_REP_COUNT"),
    ];
    for (code, expected) in codes {
        assert_eq!(serde_json::to_value(code).unwrap(), json!(expected));
    }
}

#[test]
fn full_result_round_trips_through_json() {
    let result = WorkoutParser::new().parse("20 min AMRAP\n10 Pull-ups\n15 Push-ups");
    let serialized = serde_json::to_string(&result).unwrap();
    let deserialized: wodparse::models::ParsedWorkoutResult =
        serde_json::from_str(&serialized).unwrap();
    assert_eq!(result, deserialized);
}

#[test]
fn result_json_exposes_the_documented_fields() {
    let result = WorkoutParser::new().parse("EMOM\n10 Burpees");
    let value = serde_json::to_value(&result).unwrap();
    assert_eq!(value["success"], json!(true));
    assert!(value["confidence"].is_number());
    assert!(value["breakdown"]["type_confidence"].is_number());
    assert!(value["warnings"][0]["code"].is_string());
    assert!(value.get("partial_result").is_none(), "absent on success");
}
