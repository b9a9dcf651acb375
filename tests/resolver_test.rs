// ABOUTME: Tests for the movement resolver contract and the built-in catalog
// ABOUTME: Verifies the parser functions correctly with a resolver that knows nothing

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

// Test modules don't need documentation
#![allow(missing_docs)]
// Allow unwrap in tests - tests should panic on failure
#![allow(clippy::unwrap_used)]

use wodparse::errors::WarningCode;
use wodparse::models::MovementCategory;
use wodparse::movements::{MovementResolver, NullResolver, StaticMovementCatalog};
use wodparse::WorkoutParser;

#[test]
fn null_resolver_keeps_the_parser_functional() {
    let parser = WorkoutParser::with_resolver(Box::new(NullResolver));
    let result = parser.parse("20 min AMRAP\n10 Pull-ups\n15 Push-ups");

    assert!(result.success, "unresolved movements are not errors");
    assert!(result.is_usable);
    let workout = result.workout.unwrap();
    assert_eq!(workout.movements.len(), 2);
    assert!(workout.movements.iter().all(|m| m.identity.is_none()));

    let unknown_count = result
        .warnings
        .iter()
        .filter(|w| w.code == WarningCode::UnknownMovement)
        .count();
    assert_eq!(unknown_count, 2);
    assert_eq!(result.breakdown.movements_identified, 0);
    assert!(
        result.breakdown.movement_confidence.abs() < f64::EPSILON,
        "no identifications means zero movement confidence"
    );
}

#[test]
fn catalog_resolves_common_abbreviations() {
    let catalog = StaticMovementCatalog::new();
    let cases = [
        ("T2B", "toes-to-bar"),
        ("HSPU", "handstand-push-up"),
        ("DU", "double-under"),
        ("dubs", "double-under"),
        ("C2B", "chest-to-bar-pull-up"),
        ("KBS", "kettlebell-swing"),
        ("OHS", "overhead-squat"),
        ("SDHP", "sumo-deadlift-high-pull"),
        ("MU", "muscle-up"),
    ];
    for (alias, expected_id) in cases {
        let identity = catalog.resolve(alias).unwrap();
        assert_eq!(identity.id, expected_id, "alias {alias}");
    }
}

#[test]
fn catalog_categories_are_sensible() {
    let catalog = StaticMovementCatalog::new();
    assert_eq!(
        catalog.resolve("Pull-ups").unwrap().category,
        MovementCategory::Gymnastics
    );
    assert_eq!(
        catalog.resolve("Deadlift").unwrap().category,
        MovementCategory::Weightlifting
    );
    assert_eq!(
        catalog.resolve("Row").unwrap().category,
        MovementCategory::Monostructural
    );
}

#[test]
fn catalog_identity_shape() {
    let identity = StaticMovementCatalog::new().resolve("toes to bar").unwrap();
    assert_eq!(identity.id, "toes-to-bar");
    assert_eq!(identity.canonical_name, "toes to bar");
    assert_eq!(identity.display_name, "Toes-to-Bar");
}

#[test]
fn typo_gets_a_suggestion_but_no_identity() {
    let catalog = StaticMovementCatalog::new();
    assert!(catalog.resolve("Burpeees").is_none());
    assert_eq!(catalog.suggest("Burpeees").as_deref(), Some("Burpee"));
}

#[test]
fn custom_resolver_is_honored() {
    struct OnlyBurpees;
    impl MovementResolver for OnlyBurpees {
        fn resolve(&self, text: &str) -> Option<wodparse::models::MovementIdentity> {
            text.to_lowercase().contains("burpee").then(|| {
                wodparse::models::MovementIdentity {
                    id: "burpee".into(),
                    canonical_name: "burpee".into(),
                    display_name: "Burpee".into(),
                    category: MovementCategory::Gymnastics,
                }
            })
        }
    }

    let parser = WorkoutParser::with_resolver(Box::new(OnlyBurpees));
    let result = parser.parse("For Time\n50 Burpees\n50 Pull-ups");
    assert!(result.success);
    let workout = result.workout.unwrap();
    assert!(workout.movements[0].is_resolved());
    assert!(!workout.movements[1].is_resolved());
    assert_eq!(result.breakdown.movements_identified, 1);
    assert_eq!(result.breakdown.total_movement_lines, 2);
}
