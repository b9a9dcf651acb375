// ABOUTME: Text preprocessor: Unicode normalization, line splitting, header classification
// ABOUTME: Opportunistically extracts a quoted workout name from the first line

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Text Preprocessing
//!
//! Normalizes Unicode look-alikes (em/en dash, curly quotes) and line endings,
//! splits the input into trimmed non-empty lines, and classifies each line as
//! a **header** (structural: type declarations, time caps, round counts, rep
//! schemes, rest instructions) or a **movement** line. All non-blank lines
//! that match no structural pattern are movement lines by default.
//!
//! Preprocessing is idempotent: running it over its own `normalized_text`
//! yields the same `normalized_text`.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Classification of a preprocessed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    /// Structural line: consumed by type/time extraction, never a movement.
    Header,
    /// Default classification: decomposed into a movement.
    Movement,
}

/// Output of preprocessing: ordered lines with a parallel classification.
///
/// Invariant: `lines.len() == kinds.len()`; blank lines are dropped, never
/// classified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreprocessedText {
    /// True iff normalization produced zero lines.
    pub is_empty: bool,
    /// The input exactly as received.
    pub original_text: String,
    /// Trimmed non-empty lines joined by `\n`.
    pub normalized_text: String,
    /// Trimmed, non-empty lines in order.
    pub lines: Vec<String>,
    /// Parallel classification for `lines`.
    pub kinds: Vec<LineKind>,
    /// Explicitly quoted workout name from the first line, when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workout_name: Option<String>,
}

impl PreprocessedText {
    /// Header lines with their 1-indexed positions.
    pub fn header_lines(&self) -> impl Iterator<Item = (usize, &str)> {
        self.indexed_lines(LineKind::Header)
    }

    /// Movement lines with their 1-indexed positions.
    pub fn movement_lines(&self) -> impl Iterator<Item = (usize, &str)> {
        self.indexed_lines(LineKind::Movement)
    }

    fn indexed_lines(&self, kind: LineKind) -> impl Iterator<Item = (usize, &str)> {
        self.lines
            .iter()
            .zip(&self.kinds)
            .enumerate()
            .filter(move |(_, (_, k))| **k == kind)
            .map(|(i, (line, _))| (i + 1, line.as_str()))
    }
}

static TIME_CAP_HEADER: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Matches: Time Cap: 20, TC: 15, Cap 12
    Regex::new(r"(?i)^(?:time\s*cap|tc|cap)\b").ok()
});

static ROUNDS_HEADER: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Matches: 5 Rounds, 3 rounds of:, 4 Sets, 5 RFT
    Regex::new(r"(?i)^\d+\s*(?:rounds?|sets?|rft)\b").ok()
});

static TYPE_KEYWORD_HEADER: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Matches: 20 min AMRAP, EMOM 10, E2MOM, For Time, Tabata, every minute on the minute
    Regex::new(r"(?i)\b(?:amrap|e\d*mom|for\s+time|tabata|every\s+minute|every\s+\d+\s*min)\b")
        .ok()
});

static BARE_REP_SCHEME: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Matches: 21-15-9, 10/20/30 (entire line, no movement text)
    Regex::new(r"^\d+(?:\s*[-/]\s*\d+)+$").ok()
});

static EMBEDDED_REP_SCHEME: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Matches: 21-15-9 reps of:, 3 Rounds: 21-15-9 reps of
    Regex::new(r"(?i)\d+(?:\s*-\s*\d+)+\s*reps?\s+of\b").ok()
});

static REST_HEADER: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Matches: Rest 2 min, rest 90 sec between rounds
    Regex::new(r"(?i)^rest\b").ok()
});

static QUOTED_NAME: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Matches: "Fran", "Murph" (whole first line)
    Regex::new(r#"^"([^"]+)"$"#).ok()
});

/// Normalizes and classifies raw workout text.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextPreprocessor;

impl TextPreprocessor {
    /// Stateless preprocessor.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Normalize `text`, split it into lines, classify each line, and
    /// extract an explicitly quoted workout name when one leads the input.
    #[must_use]
    pub fn preprocess(&self, text: &str) -> PreprocessedText {
        let normalized_chars = normalize_chars(text);
        let lines: Vec<String> = normalized_chars
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(ToOwned::to_owned)
            .collect();

        // Quoted-name contract: a first line that is exactly a quoted token
        // names the workout. The line stays in place as a header so that
        // preprocessing its own output is stable.
        let workout_name = lines.first().and_then(|first| {
            let re = QUOTED_NAME.as_ref()?;
            let caps = re.captures(first)?;
            Some(caps.get(1)?.as_str().to_owned())
        });

        let mut kinds: Vec<LineKind> = lines.iter().map(|l| classify_line(l)).collect();
        if workout_name.is_some() {
            kinds[0] = LineKind::Header;
        }
        for (line, kind) in lines.iter().zip(&kinds) {
            trace!(line, ?kind, "classified line");
        }
        let normalized_text = lines.join("\n");

        PreprocessedText {
            is_empty: lines.is_empty(),
            original_text: text.to_owned(),
            normalized_text,
            lines,
            kinds,
            workout_name,
        }
    }
}

/// Header iff the line matches the closed set of structural patterns, in
/// order: type keywords, time-cap declarations, rounds/sets declarations,
/// rep schemes (bare or embedded), rest instructions.
fn classify_line(line: &str) -> LineKind {
    let structural = [
        &TYPE_KEYWORD_HEADER,
        &TIME_CAP_HEADER,
        &ROUNDS_HEADER,
        &BARE_REP_SCHEME,
        &EMBEDDED_REP_SCHEME,
        &REST_HEADER,
    ];
    for pattern in structural {
        if let Some(re) = pattern.as_ref() {
            if re.is_match(line) {
                return LineKind::Header;
            }
        }
    }
    LineKind::Movement
}

/// Unicode look-alike normalization: em/en dash to hyphen, curly quotes to
/// straight quotes, CRLF/CR to LF.
fn normalize_chars(text: &str) -> String {
    text.replace("\r\n", "\n")
        .replace('\r', "\n")
        .replace(['\u{2013}', '\u{2014}'], "-")
        .replace(['\u{2018}', '\u{2019}'], "'")
        .replace(['\u{201C}', '\u{201D}'], "\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dashes_and_quotes_are_normalized() {
        let pre = TextPreprocessor::new().preprocess("21\u{2013}15\u{2014}9\n\u{201C}Fran\u{201D}");
        assert_eq!(pre.lines[0], "21-15-9");
        assert_eq!(pre.lines[1], "\"Fran\"");
    }

    #[test]
    fn blank_lines_are_dropped_never_classified() {
        let pre = TextPreprocessor::new().preprocess("20 min AMRAP\n\n\n10 Pull-ups\n");
        assert_eq!(pre.lines.len(), 2);
        assert_eq!(pre.kinds.len(), 2);
        assert_eq!(pre.kinds[0], LineKind::Header);
        assert_eq!(pre.kinds[1], LineKind::Movement);
    }

    #[test]
    fn bare_rep_scheme_line_is_a_header() {
        let pre = TextPreprocessor::new().preprocess("21-15-9\nThrusters\nPull-ups");
        assert_eq!(pre.kinds[0], LineKind::Header);
        assert_eq!(pre.kinds[1], LineKind::Movement);
    }

    #[test]
    fn embedded_rep_scheme_sentence_is_a_header() {
        let pre = TextPreprocessor::new().preprocess("3 Rounds: 21-15-9 reps of:\nBox Jumps");
        assert_eq!(pre.kinds[0], LineKind::Header);
    }

    #[test]
    fn quoted_name_is_extracted_and_kept_as_header() {
        let pre = TextPreprocessor::new().preprocess("\"Fran\"\n21-15-9\nThrusters (95/65 lb)");
        assert_eq!(pre.workout_name.as_deref(), Some("Fran"));
        assert_eq!(pre.lines.len(), 3);
        assert_eq!(pre.kinds[0], LineKind::Header);
    }

    #[test]
    fn unquoted_first_line_is_not_a_name() {
        let pre = TextPreprocessor::new().preprocess("Cindy\n5 Pull-ups");
        assert!(pre.workout_name.is_none());
        assert_eq!(pre.lines.len(), 2);
    }

    #[test]
    fn preprocessing_is_idempotent() {
        let first = TextPreprocessor::new().preprocess("  20 min AMRAP \r\n\r\n 10 Pull-ups ");
        let second = TextPreprocessor::new().preprocess(&first.normalized_text);
        assert_eq!(first.normalized_text, second.normalized_text);
        assert_eq!(first.kinds, second.kinds);
    }

    #[test]
    fn empty_input_yields_zero_lines() {
        let pre = TextPreprocessor::new().preprocess("  \n \n");
        assert!(pre.is_empty);
        assert!(pre.lines.is_empty());
    }

    #[test]
    fn rest_instruction_is_structural() {
        let pre = TextPreprocessor::new().preprocess("5 Rounds\n400m Run\nRest 2 min");
        assert_eq!(pre.kinds[2], LineKind::Header);
    }
}
