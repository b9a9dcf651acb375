// ABOUTME: Weight and weight-pair extractors with unit-aware parsing (lb/kg/pood)
// ABOUTME: Bare paired numbers default to pounds unless a non-weight unit follows

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

use crate::models::{Weight, WeightPair, WeightUnit};

static WEIGHT_PAIR: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Matches: 95/65 lb, 42.5/30 kg, 95/65 (optional trailing unit token captured for vetting)
    Regex::new(r"(?i)(\d+(?:\.\d+)?)\s*/\s*(\d+(?:\.\d+)?)\s*([a-z#]+)?").ok()
});

static SINGLE_WEIGHT: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Matches: 95 lb, 135lbs, 95#, 60 kg, 1.5 pood, 24 kilos
    Regex::new(r"(?i)(\d+(?:\.\d+)?)\s*(lbs?\b|pounds?\b|#|kgs?\b|kilos?\b|poods?\b)").ok()
});

fn parse_unit(token: &str) -> Option<WeightUnit> {
    match token.to_lowercase().as_str() {
        "lb" | "lbs" | "pound" | "pounds" | "#" => Some(WeightUnit::Lb),
        "kg" | "kgs" | "kilo" | "kilos" => Some(WeightUnit::Kg),
        "pood" | "poods" => Some(WeightUnit::Pood),
        _ => None,
    }
}

/// Extract a paired male/female load such as "95/65 lb".
///
/// A bare pair with no unit token defaults to pounds; a pair followed by a
/// non-weight unit token (e.g. "24/20 in" box heights) is not a load.
#[must_use]
pub fn extract_weight_pair(text: &str) -> Option<WeightPair> {
    extract_weight_pair_spanned(text).map(|(pair, _)| pair)
}

pub(crate) fn extract_weight_pair_spanned(text: &str) -> Option<(WeightPair, Range<usize>)> {
    let re = WEIGHT_PAIR.as_ref()?;
    let caps = re.captures(text)?;
    let male: f64 = caps.get(1)?.as_str().parse().ok()?;
    let female: f64 = caps.get(2)?.as_str().parse().ok()?;
    let (unit, end) = match caps.get(3) {
        Some(token) => (parse_unit(token.as_str())?, token.end()),
        None => (WeightUnit::Lb, caps.get(2)?.end()),
    };
    let start = caps.get(1)?.start();
    Some((WeightPair::new(male, female, unit), start..end))
}

/// Extract a single load such as "135 lb", "95#", "60 kg", or "1.5 pood".
#[must_use]
pub fn extract_weight(text: &str) -> Option<Weight> {
    extract_weight_spanned(text).map(|(weight, _)| weight)
}

pub(crate) fn extract_weight_spanned(text: &str) -> Option<(Weight, Range<usize>)> {
    let re = SINGLE_WEIGHT.as_ref()?;
    let caps = re.captures(text)?;
    let value: f64 = caps.get(1)?.as_str().parse().ok()?;
    let unit = parse_unit(caps.get(2)?.as_str())?;
    let whole = caps.get(0)?;
    Some((Weight::new(value, unit), whole.start()..whole.end()))
}
