// ABOUTME: Full movement-line decomposer: reps, loads, distances, calories, durations, modifiers
// ABOUTME: Strips consumed tokens so the residual text is the bare movement name

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Movement-Line Decomposition
//!
//! Extraction order, each step optional and independent: leading rep count
//! (only when the leading integer is not attached to a unit token),
//! weight-pair then weight, calorie-pair then calories, distance, duration,
//! percentage, trailing parenthesized modifier. The residual text, stripped
//! of all consumed tokens, becomes the movement text.
//!
//! Mutual-exclusivity invariants are enforced here: a weight-pair match
//! suppresses single-weight extraction, and a calorie-pair match suppresses
//! single-calorie extraction.

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

use crate::extractors::{calories, distance, duration, load, percentage};
use crate::models::ParsedMovementLine;

static LEADING_REPS: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Matches: 21 Thrusters, 10 Pull-ups (integer followed by whitespace)
    Regex::new(r"^(\d+)\s+(\S+)").ok()
});

static TRAILING_MODIFIER: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Matches: (24/20 in), (each side), (strict)
    Regex::new(r"\(([^)]*)\)\s*$").ok()
});

/// Unit tokens that disqualify a leading integer from being a rep count
/// ("10 cal Row" is calories, "400 m Run" is a distance).
const UNIT_TOKENS: &[&str] = &[
    "lb", "lbs", "pound", "pounds", "#", "kg", "kgs", "kilo", "kilos", "pood", "poods", "cal",
    "cals", "calorie", "calories", "m", "meter", "meters", "metre", "metres", "k", "km",
    "kilometer", "kilometers", "ft", "foot", "feet", "mi", "mile", "miles", "min", "mins",
    "minute", "minutes", "sec", "secs", "second", "seconds", "%",
];

/// Decompose a single movement line into its components.
///
/// Never fails: a line that fits no pattern simply yields a decomposition
/// with everything absent and the whole line as movement text; a line that is
/// consumed entirely by tokens yields empty movement text. The result
/// validator decides whether either case is blocking.
#[must_use]
pub fn decompose(line: &str) -> ParsedMovementLine {
    let mut remaining = line.to_owned();
    let mut parsed = ParsedMovementLine::default();

    if let Some((reps, range)) = extract_leading_reps(&remaining) {
        parsed.reps = Some(reps);
        consume(&mut remaining, &range);
    }

    // Pair forms suppress their single counterparts.
    if let Some((pair, range)) = load::extract_weight_pair_spanned(&remaining) {
        parsed.weight_pair = Some(pair);
        consume(&mut remaining, &range);
    } else if let Some((weight, range)) = load::extract_weight_spanned(&remaining) {
        parsed.weight = Some(weight);
        consume(&mut remaining, &range);
    }

    if let Some((pair, range)) = calories::extract_pair_spanned(&remaining) {
        parsed.calorie_pair = Some(pair);
        consume(&mut remaining, &range);
    } else if let Some((cals, range)) = calories::extract_spanned(&remaining) {
        parsed.calories = Some(cals);
        consume(&mut remaining, &range);
    }

    if let Some((dist, range)) = distance::extract_spanned(&remaining) {
        parsed.distance = Some(dist);
        consume(&mut remaining, &range);
    }

    if let Some((seconds, range)) = duration::extract_duration_spanned(&remaining) {
        parsed.duration_seconds = Some(seconds);
        consume(&mut remaining, &range);
    }

    if let Some((pct, range)) = percentage::extract_spanned(&remaining) {
        parsed.percentage = Some(pct);
        consume(&mut remaining, &range);
    }

    if let Some((modifier, range)) = extract_modifier(&remaining) {
        parsed.modifier = Some(modifier);
        consume(&mut remaining, &range);
    }

    parsed.movement_text = tidy_residual(&remaining);
    parsed
}

/// Leading integer is a rep count only when separated from the next token by
/// whitespace and that token is not a bare unit.
fn extract_leading_reps(text: &str) -> Option<(u32, Range<usize>)> {
    let re = LEADING_REPS.as_ref()?;
    let caps = re.captures(text)?;
    let following = caps.get(2)?.as_str();
    let following_norm: String = following
        .chars()
        .filter(|c| !matches!(c, '.' | ',' | ':' | ';' | ')' | '('))
        .collect::<String>()
        .to_lowercase();
    if UNIT_TOKENS.contains(&following_norm.as_str()) {
        return None;
    }
    let reps_match = caps.get(1)?;
    let reps: u32 = reps_match.as_str().parse().ok()?;
    Some((reps, reps_match.start()..reps_match.end()))
}

fn extract_modifier(text: &str) -> Option<(String, Range<usize>)> {
    let re = TRAILING_MODIFIER.as_ref()?;
    let caps = re.captures(text)?;
    let content = caps.get(1)?.as_str().trim();
    if content.is_empty() {
        return None;
    }
    let whole = caps.get(0)?;
    Some((content.to_owned(), whole.start()..whole.end()))
}

/// Blank out a consumed byte range, preserving indices for later spans.
fn consume(text: &mut String, range: &Range<usize>) {
    let replacement = " ".repeat(range.len());
    text.replace_range(range.clone(), &replacement);
}

/// Collapse whitespace, drop leftover empty parens, trim stray punctuation.
fn tidy_residual(text: &str) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    let collapsed = collapsed.replace("( )", " ").replace("()", " ");
    collapsed
        .trim_matches(|c: char| {
            c.is_whitespace() || matches!(c, '-' | ':' | ',' | '.' | '(' | ')' | '@' | 'x' | 'X')
        })
        .trim()
        .to_owned()
}
