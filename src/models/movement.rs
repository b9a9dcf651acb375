// ABOUTME: Movement-level model types: line decomposition, resolved identity, category
// ABOUTME: Enforces mutual exclusivity between single loads and paired loads

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use crate::models::units::{CaloriePair, Distance, Percentage, Weight, WeightPair};

/// Broad movement category, as resolved by the movement catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MovementCategory {
    /// Bodyweight skills (pull-ups, handstand push-ups, ...).
    Gymnastics,
    /// Barbell, dumbbell, and kettlebell lifts.
    Weightlifting,
    /// Cyclical cardio work (run, row, bike, ...).
    Monostructural,
    /// Everything else.
    Other,
}

/// A canonical movement identity returned by a resolver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovementIdentity {
    /// Stable kebab-case identifier (e.g. `"toes-to-bar"`).
    pub id: String,
    /// Canonical lowercase name (e.g. `"toes to bar"`).
    pub canonical_name: String,
    /// Display name (e.g. `"Toes-to-Bar"`).
    pub display_name: String,
    /// Broad category.
    pub category: MovementCategory,
}

/// The decomposition of a single movement line.
///
/// Every component is optional and independent. Invariants enforced by the
/// decomposer: `weight` and `weight_pair` are mutually exclusive, as are
/// `calories` and `calorie_pair`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ParsedMovementLine {
    /// Leading rep count, when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reps: Option<u32>,
    /// Residual movement text after all tokens were consumed.
    pub movement_text: String,
    /// Single prescribed load.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<Weight>,
    /// Paired male/female load; suppresses `weight`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_pair: Option<WeightPair>,
    /// Prescribed distance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<Distance>,
    /// Single calorie target.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calories: Option<u32>,
    /// Paired male/female calorie targets; suppresses `calories`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calorie_pair: Option<CaloriePair>,
    /// Duration in seconds (e.g. "30 sec Plank Hold").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<u32>,
    /// Percentage load reference (e.g. "70% of 1RM").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percentage: Option<Percentage>,
    /// Trailing parenthesized modifier text (e.g. box height "24/20 in").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier: Option<String>,
}

impl ParsedMovementLine {
    /// True iff a weight or weight pair is present.
    #[must_use]
    pub const fn has_load(&self) -> bool {
        self.weight.is_some() || self.weight_pair.is_some()
    }

    /// True iff any quantity (reps, load, distance, calories, duration) is present.
    #[must_use]
    pub const fn has_quantity(&self) -> bool {
        self.reps.is_some()
            || self.has_load()
            || self.distance.is_some()
            || self.calories.is_some()
            || self.calorie_pair.is_some()
            || self.duration_seconds.is_some()
    }
}

/// A movement line plus its resolution outcome and source position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedMovement {
    /// The decomposed line.
    #[serde(flatten)]
    pub line: ParsedMovementLine,
    /// Resolved canonical identity, when the resolver recognized the text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identity: Option<MovementIdentity>,
    /// 1-indexed source line in the preprocessed input.
    pub line_number: usize,
}

impl ParsedMovement {
    /// True iff the resolver identified this movement.
    #[must_use]
    pub const fn is_resolved(&self) -> bool {
        self.identity.is_some()
    }
}
