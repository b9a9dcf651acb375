// ABOUTME: Movement resolver contract plus the built-in static catalog implementation
// ABOUTME: Resolution failure is never an error; the parser downgrades confidence instead

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Movement Resolution
//!
//! The parser calls a lookup capability that maps free text (including known
//! abbreviations like "T2B", "HSPU", "DU") to a canonical movement identity,
//! or returns none. "None" is not an error by itself: per-line confidence is
//! downgraded, an `UNKNOWN_MOVEMENT` warning with a best-effort suggestion is
//! emitted, and the line still lands in the result.
//!
//! Catalog storage and alias administration are external concerns; this
//! module only defines the contract and a default in-process implementation.

mod catalog;

pub use catalog::StaticMovementCatalog;

use crate::models::MovementIdentity;

/// Lookup capability consumed by the parser.
///
/// The parser must function correctly with a resolver that always returns
/// none (see [`NullResolver`]), which keeps it unit-testable in isolation.
pub trait MovementResolver {
    /// Resolve free text to a canonical movement, or none.
    fn resolve(&self, text: &str) -> Option<MovementIdentity>;

    /// Best-effort suggestion for unrecognized text, when one exists.
    fn suggest(&self, _text: &str) -> Option<String> {
        None
    }
}

/// Resolver that recognizes nothing; used to test the parser in isolation.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullResolver;

impl MovementResolver for NullResolver {
    fn resolve(&self, _text: &str) -> Option<MovementIdentity> {
        None
    }
}
