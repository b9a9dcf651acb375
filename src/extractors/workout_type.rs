// ABOUTME: Workout-type detector: ordered pattern families with fixed confidences
// ABOUTME: Side-extracts time caps, round counts, and intervals from the same header text

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Workout-Type Detection
//!
//! Pattern families are evaluated in the documented precedence order
//! [`PRECEDENCE`], first-match-wins. Fixed confidences:
//! AMRAP / For Time / EMOM / Tabata 1.0, Rounds 0.9, bare chipper scheme 0.8,
//! fallback ForTime 0.5.
//!
//! Malformed declarations ("0 min AMRAP", "E0MOM", "0 rounds") are a
//! structured [`ParseError`] of kind `TypeDetectionFailed`, never a silent
//! fallback. When two or more keyword families match the same header text the
//! precedence winner is returned with `ambiguous` set, which the result
//! validator turns into an `AMBIGUOUS_TYPE` warning.

use std::sync::LazyLock;

use regex::Regex;

use crate::constants::detection;
use crate::errors::{ParseError, ParseErrorType};
use crate::extractors::duration;
use crate::models::{IntervalConfig, WorkoutType, WorkoutTypeDetection};

const SECONDS_PER_MINUTE: u32 = 60;

/// Pattern family identifiers in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternFamily {
    /// "20 min AMRAP", "AMRAP 20", bare "AMRAP".
    Amrap,
    /// "For Time", "{n} RFT".
    ForTime,
    /// "EMOM 10", "E{n}MOM", "every minute on the minute".
    Emom,
    /// "Tabata".
    Tabata,
    /// "{n} Rounds", "{n} Sets".
    Rounds,
    /// A bare rep-scheme line ("21-15-9") with no keyword.
    ChipperScheme,
}

/// Documented evaluation order, first-match-wins.
pub const PRECEDENCE: &[PatternFamily] = &[
    PatternFamily::Amrap,
    PatternFamily::ForTime,
    PatternFamily::Emom,
    PatternFamily::Tabata,
    PatternFamily::Rounds,
    PatternFamily::ChipperScheme,
];

static AMRAP_WITH_MINUTES: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Matches: 20 min AMRAP, 12 minute AMRAP
    Regex::new(r"(?i)\b(\d+)\s*min(?:ute)?s?\s+AMRAP\b").ok()
});

static AMRAP_TRAILING: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Matches: AMRAP 20, AMRAP for 12
    Regex::new(r"(?i)\bAMRAP\s*(?:for\s+)?(\d+)\b").ok()
});

static AMRAP_BARE: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Matches: AMRAP
    Regex::new(r"(?i)\bAMRAP\b").ok()
});

static FOR_TIME: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Matches: For Time, for time:
    Regex::new(r"(?i)\bfor\s+time\b").ok()
});

static RFT: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Matches: 5 RFT, 3RFT
    Regex::new(r"(?i)\b(\d+)\s*RFT\b").ok()
});

static EMOM_TRAILING: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Matches: EMOM 10, EMOM for 12 (value in minutes)
    Regex::new(r"(?i)\bEMOM\s*(?:for\s+)?(\d+)\b").ok()
});

static ENMOM: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Matches: E2MOM, E3MOM 21 (optional total minutes)
    Regex::new(r"(?i)\bE(\d+)MOM\b(?:\s*(?:for\s+)?(\d+))?").ok()
});

static EMOM_BARE: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Matches: EMOM
    Regex::new(r"(?i)\bEMOM\b").ok()
});

static EVERY_MINUTE: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Matches: every minute on the minute, every minute on the minute for 10 minutes
    Regex::new(r"(?i)\bevery\s+minute\s+on\s+the\s+minute\b(?:\s+for\s+(\d+)\s*min(?:ute)?s?)?")
        .ok()
});

static TABATA: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Matches: Tabata
    Regex::new(r"(?i)\btabata\b").ok()
});

static ROUNDS: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Matches: 5 Rounds, 3 rounds of:, 4 Sets
    Regex::new(r"(?i)\b(\d+)\s*(?:rounds?|sets?)\b").ok()
});

static BARE_SCHEME_LINE: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Matches: 21-15-9 (entire line)
    Regex::new(r"^\d+(?:\s*[-/]\s*\d+)+$").ok()
});

fn is_match(pattern: &LazyLock<Option<Regex>>, text: &str) -> bool {
    pattern.as_ref().is_some_and(|re| re.is_match(text))
}

fn capture_u32(pattern: &LazyLock<Option<Regex>>, text: &str, group: usize) -> Option<u32> {
    let re = pattern.as_ref()?;
    let caps = re.captures(text)?;
    caps.get(group)?.as_str().parse().ok()
}

fn malformed(line_number: usize, text: &str, what: &str) -> ParseError {
    ParseError::at_line(
        ParseErrorType::TypeDetectionFailed,
        format!("Malformed workout declaration: {what}"),
        line_number,
        text,
    )
}

/// Detect the workout type on a single header line.
///
/// Returns `Ok(None)` when no family matches this line; the caller applies
/// the ForTime-at-0.5 fallback over the whole input.
///
/// # Errors
///
/// Returns a `TypeDetectionFailed` error for malformed declarations such as
/// "0 min AMRAP", "E0MOM", or "0 rounds".
pub fn detect_line(
    line: &str,
    line_number: usize,
) -> Result<Option<WorkoutTypeDetection>, ParseError> {
    let ambiguous = keyword_family_count(line) > 1;
    for family in PRECEDENCE {
        if let Some(mut detection) = try_family(*family, line, line_number)? {
            detection.ambiguous = ambiguous;
            return Ok(Some(detection));
        }
    }
    Ok(None)
}

/// How many of the keyword families (AMRAP, For Time, EMOM, Tabata) match.
fn keyword_family_count(line: &str) -> usize {
    let emom = is_match(&EMOM_BARE, line)
        || is_match(&ENMOM, line)
        || is_match(&EVERY_MINUTE, line);
    [
        is_match(&AMRAP_BARE, line),
        is_match(&FOR_TIME, line),
        emom,
        is_match(&TABATA, line),
    ]
    .iter()
    .filter(|m| **m)
    .count()
}

fn try_family(
    family: PatternFamily,
    line: &str,
    line_number: usize,
) -> Result<Option<WorkoutTypeDetection>, ParseError> {
    match family {
        PatternFamily::Amrap => try_amrap(line, line_number),
        PatternFamily::ForTime => try_for_time(line, line_number),
        PatternFamily::Emom => try_emom(line, line_number),
        PatternFamily::Tabata => Ok(try_tabata(line, line_number)),
        PatternFamily::Rounds => try_rounds(line, line_number),
        PatternFamily::ChipperScheme => Ok(try_chipper(line, line_number)),
    }
}

fn base(
    workout_type: WorkoutType,
    confidence: f64,
    source_line: usize,
) -> WorkoutTypeDetection {
    WorkoutTypeDetection {
        workout_type,
        confidence,
        time_cap_seconds: None,
        round_count: None,
        interval: None,
        source_line,
        ambiguous: false,
    }
}

fn try_amrap(
    line: &str,
    line_number: usize,
) -> Result<Option<WorkoutTypeDetection>, ParseError> {
    let minutes = capture_u32(&AMRAP_WITH_MINUTES, line, 1)
        .or_else(|| capture_u32(&AMRAP_TRAILING, line, 1));
    if let Some(minutes) = minutes {
        if minutes == 0 {
            return Err(malformed(line_number, line, "AMRAP of zero minutes"));
        }
        let Some(cap) = minutes.checked_mul(SECONDS_PER_MINUTE) else {
            return Err(malformed(line_number, line, "unrepresentable AMRAP duration"));
        };
        let mut detection = base(
            WorkoutType::Amrap,
            detection::KEYWORD_CONFIDENCE,
            line_number,
        );
        detection.time_cap_seconds = Some(cap);
        return Ok(Some(detection));
    }
    if is_match(&AMRAP_BARE, line) {
        return Ok(Some(base(
            WorkoutType::Amrap,
            detection::KEYWORD_CONFIDENCE,
            line_number,
        )));
    }
    Ok(None)
}

fn try_for_time(
    line: &str,
    line_number: usize,
) -> Result<Option<WorkoutTypeDetection>, ParseError> {
    if let Some(rounds) = capture_u32(&RFT, line, 1) {
        if rounds == 0 {
            return Err(malformed(line_number, line, "zero rounds for time"));
        }
        let mut detection = base(
            WorkoutType::ForTime,
            detection::KEYWORD_CONFIDENCE,
            line_number,
        );
        detection.round_count = Some(rounds);
        detection.time_cap_seconds = duration::extract_time_cap_seconds(line);
        return Ok(Some(detection));
    }
    if is_match(&FOR_TIME, line) {
        let mut detection = base(
            WorkoutType::ForTime,
            detection::KEYWORD_CONFIDENCE,
            line_number,
        );
        detection.time_cap_seconds = duration::extract_time_cap_seconds(line);
        return Ok(Some(detection));
    }
    Ok(None)
}

fn try_emom(
    line: &str,
    line_number: usize,
) -> Result<Option<WorkoutTypeDetection>, ParseError> {
    // E{n}MOM: n-minute interval, optional trailing total minutes.
    if let Some(caps) = ENMOM.as_ref().and_then(|re| re.captures(line)) {
        let n: u32 = caps
            .get(1)
            .and_then(|m| m.as_str().parse().ok())
            .unwrap_or(0);
        if n == 0 {
            return Err(malformed(line_number, line, "E0MOM interval"));
        }
        let Some(work_seconds) = n.checked_mul(SECONDS_PER_MINUTE) else {
            return Err(malformed(line_number, line, "unrepresentable EMOM interval"));
        };
        let total_minutes: Option<u32> = caps.get(2).and_then(|m| m.as_str().parse().ok());
        let total_seconds = total_minutes
            .map(|total| {
                total
                    .checked_mul(SECONDS_PER_MINUTE)
                    .ok_or_else(|| malformed(line_number, line, "unrepresentable EMOM duration"))
            })
            .transpose()?;
        let mut detection = base(
            WorkoutType::Emom,
            detection::KEYWORD_CONFIDENCE,
            line_number,
        );
        let rounds = total_minutes.map_or(0, |total| total / n);
        detection.interval = Some(IntervalConfig::new(rounds, work_seconds, 0));
        detection.time_cap_seconds = total_seconds;
        return Ok(Some(detection));
    }

    // EMOM {n} or "every minute on the minute for {n} minutes": 60s interval.
    let minutes = capture_u32(&EMOM_TRAILING, line, 1)
        .or_else(|| capture_u32(&EVERY_MINUTE, line, 1));
    if let Some(minutes) = minutes {
        if minutes == 0 {
            return Err(malformed(line_number, line, "EMOM of zero minutes"));
        }
        let Some(cap) = minutes.checked_mul(SECONDS_PER_MINUTE) else {
            return Err(malformed(line_number, line, "unrepresentable EMOM duration"));
        };
        let mut detection = base(
            WorkoutType::Emom,
            detection::KEYWORD_CONFIDENCE,
            line_number,
        );
        detection.interval = Some(IntervalConfig::new(minutes, SECONDS_PER_MINUTE, 0));
        detection.time_cap_seconds = Some(cap);
        return Ok(Some(detection));
    }

    // Bare EMOM: no interval duration; MissingInterval fires downstream.
    if is_match(&EMOM_BARE, line) || is_match(&EVERY_MINUTE, line) {
        return Ok(Some(base(
            WorkoutType::Emom,
            detection::KEYWORD_CONFIDENCE,
            line_number,
        )));
    }
    Ok(None)
}

fn try_tabata(line: &str, line_number: usize) -> Option<WorkoutTypeDetection> {
    if !is_match(&TABATA, line) {
        return None;
    }
    let mut detection = base(
        WorkoutType::Intervals,
        detection::KEYWORD_CONFIDENCE,
        line_number,
    );
    detection.interval = Some(IntervalConfig::tabata());
    Some(detection)
}

fn try_rounds(
    line: &str,
    line_number: usize,
) -> Result<Option<WorkoutTypeDetection>, ParseError> {
    let Some(rounds) = capture_u32(&ROUNDS, line, 1) else {
        return Ok(None);
    };
    if rounds == 0 {
        return Err(malformed(line_number, line, "zero rounds"));
    }
    let mut detection = base(
        WorkoutType::Rounds,
        detection::ROUNDS_CONFIDENCE,
        line_number,
    );
    detection.round_count = Some(rounds);
    Ok(Some(detection))
}

fn try_chipper(line: &str, line_number: usize) -> Option<WorkoutTypeDetection> {
    if !is_match(&BARE_SCHEME_LINE, line) {
        return None;
    }
    Some(base(
        WorkoutType::ForTime,
        detection::CHIPPER_CONFIDENCE,
        line_number,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amrap_with_minutes() {
        let d = detect_line("20 min AMRAP", 1).unwrap().unwrap();
        assert_eq!(d.workout_type, WorkoutType::Amrap);
        assert!((d.confidence - 1.0).abs() < 1e-9);
        assert_eq!(d.time_cap_seconds, Some(1200));
    }

    #[test]
    fn amrap_trailing_minutes() {
        let d = detect_line("AMRAP 12", 1).unwrap().unwrap();
        assert_eq!(d.time_cap_seconds, Some(720));
    }

    #[test]
    fn bare_amrap_has_no_cap() {
        let d = detect_line("AMRAP", 1).unwrap().unwrap();
        assert_eq!(d.workout_type, WorkoutType::Amrap);
        assert!(d.time_cap_seconds.is_none());
    }

    #[test]
    fn rft_is_for_time_with_rounds() {
        let d = detect_line("5 RFT", 1).unwrap().unwrap();
        assert_eq!(d.workout_type, WorkoutType::ForTime);
        assert!((d.confidence - 1.0).abs() < 1e-9);
        assert_eq!(d.round_count, Some(5));
    }

    #[test]
    fn for_time_with_cap_suffix() {
        let d = detect_line("For Time (20 min cap)", 1).unwrap().unwrap();
        assert_eq!(d.workout_type, WorkoutType::ForTime);
        assert_eq!(d.time_cap_seconds, Some(1200));
    }

    #[test]
    fn emom_trailing_minutes() {
        let d = detect_line("EMOM 10", 1).unwrap().unwrap();
        assert_eq!(d.workout_type, WorkoutType::Emom);
        assert_eq!(d.interval, Some(IntervalConfig::new(10, 60, 0)));
        assert_eq!(d.time_cap_seconds, Some(600));
    }

    #[test]
    fn every_minute_phrase() {
        let d = detect_line("Every minute on the minute for 10 minutes", 1)
            .unwrap()
            .unwrap();
        assert_eq!(d.workout_type, WorkoutType::Emom);
        assert_eq!(d.interval.unwrap().work_seconds, 60);
        assert_eq!(d.time_cap_seconds, Some(600));
    }

    #[test]
    fn enmom_interval() {
        let d = detect_line("E2MOM 20", 1).unwrap().unwrap();
        let interval = d.interval.unwrap();
        assert_eq!(interval.work_seconds, 120);
        assert_eq!(interval.rounds, 10);
        assert_eq!(d.time_cap_seconds, Some(1200));

        let d = detect_line("E3MOM", 1).unwrap().unwrap();
        assert_eq!(d.interval.unwrap().work_seconds, 180);
    }

    #[test]
    fn bare_emom_has_no_interval() {
        let d = detect_line("EMOM", 1).unwrap().unwrap();
        assert_eq!(d.workout_type, WorkoutType::Emom);
        assert!(d.interval.is_none());
    }

    #[test]
    fn tabata_fixed_interval() {
        let d = detect_line("Tabata", 1).unwrap().unwrap();
        assert_eq!(d.workout_type, WorkoutType::Intervals);
        let interval = d.interval.unwrap();
        assert_eq!(interval.total_seconds(), 240);
        assert!((interval.work_rest_ratio().unwrap() - 2.0).abs() < 1e-9);
    }

    #[test]
    fn rounds_declaration() {
        let d = detect_line("5 Rounds of:", 1).unwrap().unwrap();
        assert_eq!(d.workout_type, WorkoutType::Rounds);
        assert!((d.confidence - 0.9).abs() < 1e-9);
        assert_eq!(d.round_count, Some(5));
    }

    #[test]
    fn bare_chipper_scheme() {
        let d = detect_line("21-15-9", 1).unwrap().unwrap();
        assert_eq!(d.workout_type, WorkoutType::ForTime);
        assert!((d.confidence - 0.8).abs() < 1e-9);
    }

    #[test]
    fn malformed_declarations_error() {
        assert!(detect_line("0 min AMRAP", 1).is_err());
        assert!(detect_line("E0MOM", 1).is_err());
        assert!(detect_line("0 rounds of", 1).is_err());
    }

    #[test]
    fn unrepresentable_durations_are_malformed() {
        assert!(detect_line("80000000 min AMRAP", 1).is_err());
        assert!(detect_line("EMOM 4294967295", 1).is_err());
        assert!(detect_line("E4294967295MOM", 1).is_err());
        assert!(detect_line("E2MOM 4294967295", 1).is_err());
    }

    #[test]
    fn ambiguous_when_two_keyword_families_match() {
        let d = detect_line("20 min AMRAP for time", 1).unwrap().unwrap();
        assert_eq!(d.workout_type, WorkoutType::Amrap);
        assert!(d.ambiguous);
    }

    #[test]
    fn plain_movement_text_matches_nothing() {
        assert!(detect_line("10 Pull-ups", 1).unwrap().is_none());
    }
}
