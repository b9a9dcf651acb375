// ABOUTME: Distance extractor for meter/kilometer/foot/mile tokens in multiple spellings
// ABOUTME: Decimal values allowed; calories are never a distance unit

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

use crate::models::{Distance, DistanceUnit};

static DISTANCE: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Matches: 400m, 5 km, 5k, 1.5 miles, 50 ft, 800 meters
    Regex::new(
        r"(?i)\b(\d+(?:\.\d+)?)\s*(meters?|metres?|miles?|mi|kilometers?|kilometres?|km|k|m|feet|foot|ft)\b",
    )
    .ok()
});

fn parse_unit(token: &str) -> Option<DistanceUnit> {
    match token.to_lowercase().as_str() {
        "m" | "meter" | "meters" | "metre" | "metres" => Some(DistanceUnit::Meters),
        "k" | "km" | "kilometer" | "kilometers" | "kilometre" | "kilometres" => {
            Some(DistanceUnit::Kilometers)
        }
        "ft" | "foot" | "feet" => Some(DistanceUnit::Feet),
        "mi" | "mile" | "miles" => Some(DistanceUnit::Miles),
        _ => None,
    }
}

/// Extract a distance such as "400m", "5k", or "1.5 miles".
#[must_use]
pub fn extract(text: &str) -> Option<Distance> {
    extract_spanned(text).map(|(distance, _)| distance)
}

pub(crate) fn extract_spanned(text: &str) -> Option<(Distance, Range<usize>)> {
    let re = DISTANCE.as_ref()?;
    let caps = re.captures(text)?;
    let value: f64 = caps.get(1)?.as_str().parse().ok()?;
    let unit = parse_unit(caps.get(2)?.as_str())?;
    let whole = caps.get(0)?;
    Some((Distance::new(value, unit), whole.start()..whole.end()))
}
