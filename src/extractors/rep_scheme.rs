// ABOUTME: Rep-scheme extractor: hyphen/slash-delimited sequences and "n rounds of m reps"
// ABOUTME: Pure function; "no match" is None, never an error

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::LazyLock;

use regex::Regex;

use crate::constants::limits;
use crate::models::RepScheme;

static ROUNDS_OF_REPS: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Matches: 5 rounds of 10 reps, 3 Rounds of 15 Reps
    Regex::new(r"(?i)\b(\d+)\s+rounds?\s+of\s+(\d+)\s+reps?\b").ok()
});

static DELIMITED_SCHEME: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Matches: 21-15-9, 10/20/30, 21 - 15 - 9 (bare or embedded in "... reps of:")
    Regex::new(r"\b(\d+(?:\s*[-/]\s*\d+)+)\b").ok()
});

/// Extract a rep scheme from header text.
///
/// Recognizes "{n} rounds of {m} reps" (a Fixed scheme of n copies of m) and
/// hyphen- or slash-delimited integer sequences of two or more numbers, bare
/// or embedded in a sentence ("21-15-9 reps of:"). Round counts above
/// [`limits::MAX_SCHEME_ROUNDS`] are never materialized and count as no match.
#[must_use]
pub fn extract(text: &str) -> Option<RepScheme> {
    if let Some(re) = ROUNDS_OF_REPS.as_ref() {
        if let Some(caps) = re.captures(text) {
            let rounds: u32 = caps.get(1)?.as_str().parse().ok()?;
            let reps: u32 = caps.get(2)?.as_str().parse().ok()?;
            if (1..=limits::MAX_SCHEME_ROUNDS).contains(&rounds) {
                return RepScheme::from_reps(vec![reps; rounds as usize]);
            }
        }
    }

    let re = DELIMITED_SCHEME.as_ref()?;
    let caps = re.captures(text)?;
    let reps: Vec<u32> = caps
        .get(1)?
        .as_str()
        .split(['-', '/'])
        .map(|part| part.trim().parse::<u32>())
        .collect::<Result<_, _>>()
        .ok()?;
    RepScheme::from_reps(reps)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RepSchemeType;

    #[test]
    fn classic_descending_scheme() {
        let scheme = extract("21-15-9").unwrap();
        assert_eq!(scheme.reps, vec![21, 15, 9]);
        assert_eq!(scheme.total_reps, 45);
        assert_eq!(scheme.round_count, 3);
        assert_eq!(scheme.scheme_type, RepSchemeType::Descending);
    }

    #[test]
    fn embedded_in_sentence() {
        let scheme = extract("3 Rounds: 21-15-9 reps of:").unwrap();
        assert_eq!(scheme.reps, vec![21, 15, 9]);
    }

    #[test]
    fn slash_delimited_and_spaced() {
        assert_eq!(extract("10/20/30").unwrap().reps, vec![10, 20, 30]);
        assert_eq!(extract("21 - 15 - 9").unwrap().reps, vec![21, 15, 9]);
    }

    #[test]
    fn rounds_of_reps_is_fixed() {
        let scheme = extract("5 rounds of 10 reps").unwrap();
        assert_eq!(scheme.reps, vec![10; 5]);
        assert_eq!(scheme.scheme_type, RepSchemeType::Fixed);
        assert_eq!(scheme.total_reps, 50);
    }

    #[test]
    fn pyramid_is_custom() {
        let scheme = extract("1-2-3-2-1").unwrap();
        assert_eq!(scheme.scheme_type, RepSchemeType::Custom);
    }

    #[test]
    fn huge_round_counts_are_never_materialized() {
        assert!(extract("4000000000 rounds of 10 reps").is_none());
        assert!(extract("1001 rounds of 10 reps").is_none());
        assert_eq!(
            extract("1000 rounds of 10 reps").unwrap().round_count,
            1000
        );
    }

    #[test]
    fn single_number_is_no_scheme() {
        assert!(extract("21").is_none());
        assert!(extract("just words").is_none());
    }
}
