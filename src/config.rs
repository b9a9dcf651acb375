// ABOUTME: Parser configuration with documented defaults
// ABOUTME: Plain struct, no env or file loading; the library is a pure function boundary

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Parser Configuration

use serde::{Deserialize, Serialize};

use crate::constants::limits;

/// Tunable limits for a [`crate::parser::WorkoutParser`].
///
/// Defaults match the documented contract: inputs shorter than 5 characters
/// (after sanitization) or longer than 10,000 characters are rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Minimum sanitized input length; the boundary value itself is valid.
    pub min_input_length: usize,
    /// Maximum sanitized input length; the boundary value itself is valid.
    pub max_input_length: usize,
    /// Rep counts above this threshold emit a `SUSPICIOUS_REP_COUNT` warning.
    pub suspicious_rep_count: u32,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            min_input_length: limits::MIN_INPUT_LENGTH,
            max_input_length: limits::MAX_INPUT_LENGTH,
            suspicious_rep_count: limits::SUSPICIOUS_REP_COUNT,
        }
    }
}
