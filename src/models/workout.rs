// ABOUTME: Workout-level model types: type classification, rep schemes, intervals
// ABOUTME: All types are immutable values constructed once by the parsing pipeline

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use crate::constants::tabata;
use crate::models::movement::ParsedMovement;

/// Workout type classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutType {
    /// As Many Rounds/Reps As Possible within a time cap.
    Amrap,
    /// Complete prescribed work as fast as possible, optionally capped.
    ForTime,
    /// Every Minute (or every n minutes) On the Minute.
    Emom,
    /// Fixed work/rest interval protocol (Tabata and friends).
    Intervals,
    /// n rounds of fixed work.
    Rounds,
}

/// Outcome of workout-type detection over the header lines.
///
/// Side extractions from the same header text (time cap, round count,
/// interval) piggyback here. When no pattern matches at all the detection
/// defaults to [`WorkoutType::ForTime`] at confidence 0.5, a deliberate
/// low-confidence fallback rather than a failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutTypeDetection {
    /// Detected type.
    pub workout_type: WorkoutType,
    /// Detection confidence in [0, 1].
    pub confidence: f64,
    /// Time cap in seconds, when inferred from the header.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_cap_seconds: Option<u32>,
    /// Round count, when inferred from the header.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub round_count: Option<u32>,
    /// Interval configuration, when inferred from the header.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<IntervalConfig>,
    /// 1-indexed header line the detection came from; 0 when defaulted.
    pub source_line: usize,
    /// True when more than one keyword family matched the same header.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub ambiguous: bool,
}

impl WorkoutTypeDetection {
    /// The ForTime-at-0.5 fallback used when no header pattern matches.
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            workout_type: WorkoutType::ForTime,
            confidence: crate::constants::detection::FALLBACK_CONFIDENCE,
            time_cap_seconds: None,
            round_count: None,
            interval: None,
            source_line: 0,
            ambiguous: false,
        }
    }
}

/// Shape classification of a rep scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RepSchemeType {
    /// Strictly increasing (e.g. 5-10-15).
    Ascending,
    /// Strictly decreasing (e.g. 21-15-9).
    Descending,
    /// All rounds equal (e.g. 5-5-5, or "5 rounds of 10 reps").
    Fixed,
    /// Anything else (e.g. pyramid 1-2-3-2-1).
    Custom,
}

/// An ordered sequence of per-round rep counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepScheme {
    /// Per-round rep counts in prescription order.
    pub reps: Vec<u32>,
    /// Sum of all rounds.
    pub total_reps: u32,
    /// Number of rounds (length of `reps`).
    pub round_count: u32,
    /// Shape classification.
    pub scheme_type: RepSchemeType,
}

impl RepScheme {
    /// Build a scheme from per-round counts, classifying its shape.
    ///
    /// Strictly increasing sequences are Ascending, strictly decreasing are
    /// Descending, all-equal (including single-element) is Fixed, anything
    /// else is Custom. Returns `None` for an empty sequence. The total
    /// saturates at `u32::MAX` rather than overflowing.
    #[must_use]
    pub fn from_reps(reps: Vec<u32>) -> Option<Self> {
        if reps.is_empty() {
            return None;
        }
        let scheme_type = Self::classify(&reps);
        let total_reps = reps.iter().fold(0u32, |acc, r| acc.saturating_add(*r));
        let round_count = reps.len() as u32;
        Some(Self {
            reps,
            total_reps,
            round_count,
            scheme_type,
        })
    }

    fn classify(reps: &[u32]) -> RepSchemeType {
        if reps.windows(2).all(|w| w[0] == w[1]) {
            RepSchemeType::Fixed
        } else if reps.windows(2).all(|w| w[0] < w[1]) {
            RepSchemeType::Ascending
        } else if reps.windows(2).all(|w| w[0] > w[1]) {
            RepSchemeType::Descending
        } else {
            RepSchemeType::Custom
        }
    }
}

/// Work/rest interval configuration.
///
/// `rounds == 0` means the round count is open-ended (e.g. a bare "E2MOM"
/// header with no total duration); derived totals are 0 in that case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntervalConfig {
    /// Number of intervals; 0 when open-ended.
    pub rounds: u32,
    /// Work portion of each interval, in seconds.
    pub work_seconds: u32,
    /// Rest portion of each interval, in seconds.
    pub rest_seconds: u32,
}

impl IntervalConfig {
    /// Construct an interval configuration.
    #[must_use]
    pub const fn new(rounds: u32, work_seconds: u32, rest_seconds: u32) -> Self {
        Self {
            rounds,
            work_seconds,
            rest_seconds,
        }
    }

    /// The fixed Tabata protocol: 8 × (20s work / 10s rest).
    #[must_use]
    pub const fn tabata() -> Self {
        Self::new(tabata::ROUNDS, tabata::WORK_SECONDS, tabata::REST_SECONDS)
    }

    /// Total duration: `rounds × (work + rest)`, saturating at `u32::MAX`.
    #[must_use]
    pub const fn total_seconds(&self) -> u32 {
        self.rounds
            .saturating_mul(self.work_seconds.saturating_add(self.rest_seconds))
    }

    /// Work-to-rest ratio; `None` when rest is zero.
    #[must_use]
    pub fn work_rest_ratio(&self) -> Option<f64> {
        if self.rest_seconds == 0 {
            None
        } else {
            Some(f64::from(self.work_seconds) / f64::from(self.rest_seconds))
        }
    }
}

/// The fully parsed workout structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedWorkout {
    /// Detected workout type.
    pub workout_type: WorkoutType,
    /// Confidence of the type detection in [0, 1].
    pub type_confidence: f64,
    /// Time cap in seconds, when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_cap_seconds: Option<u32>,
    /// Interval configuration, when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<IntervalConfig>,
    /// Round count, when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub round_count: Option<u32>,
    /// Rep scheme, when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rep_scheme: Option<RepScheme>,
    /// Workout name, when an explicit quoted name led the input.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Ordered movements, one per successfully parsed movement line.
    pub movements: Vec<ParsedMovement>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rep_scheme_classification() {
        let cases = [
            (vec![21, 15, 9], RepSchemeType::Descending),
            (vec![5, 10, 15], RepSchemeType::Ascending),
            (vec![10, 10, 10], RepSchemeType::Fixed),
            (vec![1, 2, 3, 2, 1], RepSchemeType::Custom),
            (vec![42], RepSchemeType::Fixed),
        ];
        for (reps, expected) in cases {
            let scheme = RepScheme::from_reps(reps.clone()).unwrap();
            assert_eq!(scheme.scheme_type, expected, "reps {reps:?}");
            assert_eq!(scheme.total_reps, reps.iter().sum::<u32>());
            assert_eq!(scheme.round_count, reps.len() as u32);
        }
        assert!(RepScheme::from_reps(vec![]).is_none());
    }

    #[test]
    fn total_reps_saturates_instead_of_overflowing() {
        let scheme = RepScheme::from_reps(vec![u32::MAX, u32::MAX]).unwrap();
        assert_eq!(scheme.total_reps, u32::MAX);
        assert_eq!(scheme.scheme_type, RepSchemeType::Fixed);
    }

    #[test]
    fn total_seconds_saturates_instead_of_overflowing() {
        let interval = IntervalConfig::new(u32::MAX, u32::MAX, u32::MAX);
        assert_eq!(interval.total_seconds(), u32::MAX);
    }

    #[test]
    fn tabata_interval_invariants() {
        let t = IntervalConfig::tabata();
        assert_eq!(t.total_seconds(), 240);
        assert!((t.work_rest_ratio().unwrap() - 2.0).abs() < 1e-9);
    }

    #[test]
    fn zero_rest_has_no_ratio() {
        assert!(IntervalConfig::new(10, 60, 0).work_rest_ratio().is_none());
    }
}
