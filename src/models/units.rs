// ABOUTME: Unit-bearing value types: weights, weight pairs, distances, calories, percentages
// ABOUTME: Conversions use the documented exact factors from constants::conversion

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use crate::constants::conversion;

/// Weight unit as written in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightUnit {
    /// Pounds (also written `lbs` or `#`).
    Lb,
    /// Kilograms.
    Kg,
    /// Pood: Russian kettlebell unit, 16.38 kg.
    Pood,
}

/// A single prescribed load.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Weight {
    /// Numeric value in `unit`.
    pub value: f64,
    /// Unit the value was written in.
    pub unit: WeightUnit,
}

impl Weight {
    /// Construct a weight.
    #[must_use]
    pub const fn new(value: f64, unit: WeightUnit) -> Self {
        Self { value, unit }
    }

    /// Value converted to kilograms.
    #[must_use]
    pub fn to_kg(&self) -> f64 {
        match self.unit {
            WeightUnit::Lb => self.value * conversion::LB_TO_KG,
            WeightUnit::Kg => self.value,
            WeightUnit::Pood => self.value * conversion::POOD_TO_KG,
        }
    }

    /// Value converted to pounds.
    #[must_use]
    pub fn to_lb(&self) -> f64 {
        match self.unit {
            WeightUnit::Lb => self.value,
            WeightUnit::Kg => self.value / conversion::LB_TO_KG,
            WeightUnit::Pood => self.value * conversion::POOD_TO_KG / conversion::LB_TO_KG,
        }
    }
}

/// Paired male/female loads sharing one unit (e.g. "95/65 lb").
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightPair {
    /// Prescribed male load.
    pub male: f64,
    /// Prescribed female load.
    pub female: f64,
    /// Unit shared by both values.
    pub unit: WeightUnit,
}

impl WeightPair {
    /// Construct a weight pair.
    #[must_use]
    pub const fn new(male: f64, female: f64, unit: WeightUnit) -> Self {
        Self { male, female, unit }
    }

    /// The male load as a [`Weight`].
    #[must_use]
    pub const fn male_weight(&self) -> Weight {
        Weight::new(self.male, self.unit)
    }

    /// The female load as a [`Weight`].
    #[must_use]
    pub const fn female_weight(&self) -> Weight {
        Weight::new(self.female, self.unit)
    }
}

/// Distance unit as written in the source text. Calories are not a distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistanceUnit {
    /// Meters.
    Meters,
    /// Kilometers (also written `k`).
    Kilometers,
    /// Feet.
    Feet,
    /// Miles.
    Miles,
}

/// A prescribed distance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Distance {
    /// Numeric value in `unit`.
    pub value: f64,
    /// Unit the value was written in.
    pub unit: DistanceUnit,
}

impl Distance {
    /// Construct a distance.
    #[must_use]
    pub const fn new(value: f64, unit: DistanceUnit) -> Self {
        Self { value, unit }
    }

    /// Value converted to meters.
    #[must_use]
    pub fn to_meters(&self) -> f64 {
        match self.unit {
            DistanceUnit::Meters => self.value,
            DistanceUnit::Kilometers => self.value * conversion::KM_TO_METERS,
            DistanceUnit::Feet => self.value * conversion::FEET_TO_METERS,
            DistanceUnit::Miles => self.value * conversion::MILES_TO_METERS,
        }
    }
}

/// Paired male/female calorie targets (e.g. "21/15 cal").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaloriePair {
    /// Male calorie target.
    pub male: u32,
    /// Female calorie target.
    pub female: u32,
}

/// A percentage load reference (e.g. "70% of 1RM", "bodyweight").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Percentage {
    /// Percentage value (100.0 for bodyweight).
    pub value: f64,
    /// What the percentage is of (e.g. "1RM", "bodyweight"), when stated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}
