// ABOUTME: Percentage extractor: "70% of 1RM", "85% 1RM", and bodyweight references
// ABOUTME: "bodyweight"/"BW" parses as 100% of a "bodyweight" reference

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

use crate::models::Percentage;

static PERCENT: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Matches: 70%, 85% 1RM, 70% of 1RM, 50% bodyweight
    Regex::new(r"(?i)(\d+(?:\.\d+)?)\s*%\s*(?:of\s+)?(1\s*RM|bodyweight|BW)?").ok()
});

static BODYWEIGHT: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Matches: bodyweight, BW (without a percent sign)
    Regex::new(r"(?i)\b(?:bodyweight|BW)\b").ok()
});

/// Reference string used for bodyweight-relative loads.
const BODYWEIGHT_REFERENCE: &str = "bodyweight";

/// Extract a percentage load reference.
#[must_use]
pub fn extract(text: &str) -> Option<Percentage> {
    extract_spanned(text).map(|(percentage, _)| percentage)
}

pub(crate) fn extract_spanned(text: &str) -> Option<(Percentage, Range<usize>)> {
    if let Some(re) = PERCENT.as_ref() {
        if let Some(caps) = re.captures(text) {
            let value: f64 = caps.get(1)?.as_str().parse().ok()?;
            let reference = caps.get(2).map(|m| normalize_reference(m.as_str()));
            let whole = caps.get(0)?;
            return Some((Percentage { value, reference }, whole.start()..whole.end()));
        }
    }
    let re = BODYWEIGHT.as_ref()?;
    let m = re.find(text)?;
    Some((
        Percentage {
            value: 100.0,
            reference: Some(BODYWEIGHT_REFERENCE.into()),
        },
        m.start()..m.end(),
    ))
}

fn normalize_reference(raw: &str) -> String {
    let lowered = raw.to_lowercase();
    if lowered == "bw" || lowered == BODYWEIGHT_REFERENCE {
        BODYWEIGHT_REFERENCE.into()
    } else {
        // "1 RM" and "1rm" normalize to the canonical "1RM".
        "1RM".into()
    }
}
