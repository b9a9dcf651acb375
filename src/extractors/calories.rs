// ABOUTME: Calorie and calorie-pair extractors ("15 cal", "21/15 cal")
// ABOUTME: A pair match suppresses single-calorie extraction at the call site

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

use crate::models::CaloriePair;

static CALORIE_PAIR: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Matches: 21/15 cal, 20/14 calories
    Regex::new(r"(?i)(\d+)\s*/\s*(\d+)\s*cal(?:orie)?s?\b").ok()
});

static SINGLE_CALORIES: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Matches: 15 cal, 20 cals, 50 calories
    Regex::new(r"(?i)(\d+)\s*cal(?:orie)?s?\b").ok()
});

/// Extract paired male/female calorie targets such as "21/15 cal".
#[must_use]
pub fn extract_pair(text: &str) -> Option<CaloriePair> {
    extract_pair_spanned(text).map(|(pair, _)| pair)
}

pub(crate) fn extract_pair_spanned(text: &str) -> Option<(CaloriePair, Range<usize>)> {
    let re = CALORIE_PAIR.as_ref()?;
    let caps = re.captures(text)?;
    let male: u32 = caps.get(1)?.as_str().parse().ok()?;
    let female: u32 = caps.get(2)?.as_str().parse().ok()?;
    let whole = caps.get(0)?;
    Some((CaloriePair { male, female }, whole.start()..whole.end()))
}

/// Extract a single calorie target such as "15 cal".
#[must_use]
pub fn extract(text: &str) -> Option<u32> {
    extract_spanned(text).map(|(calories, _)| calories)
}

pub(crate) fn extract_spanned(text: &str) -> Option<(u32, Range<usize>)> {
    let re = SINGLE_CALORIES.as_ref()?;
    let caps = re.captures(text)?;
    let calories: u32 = caps.get(1)?.as_str().parse().ok()?;
    let whole = caps.get(0)?;
    Some((calories, whole.start()..whole.end()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_calorie_spellings() {
        assert_eq!(extract("15 cal Row"), Some(15));
        assert_eq!(extract("Bike 20 cals"), Some(20));
        assert_eq!(extract("50 calories Ski"), Some(50));
    }

    #[test]
    fn calorie_pair() {
        let pair = extract_pair("Row 21/15 cal").unwrap();
        assert_eq!(pair, CaloriePair { male: 21, female: 15 });
    }

    #[test]
    fn no_match_is_none() {
        assert!(extract("10 Pull-ups").is_none());
        assert!(extract_pair("15 cal Row").is_none());
    }
}
