// ABOUTME: Built-in movement catalog covering the common vocabulary and abbreviations
// ABOUTME: Normalized alias lookup with a Levenshtein-based suggestion fallback

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::HashMap;

use crate::models::{MovementCategory, MovementIdentity};
use crate::movements::MovementResolver;

/// One catalog row: id, display name, category, aliases.
struct CatalogEntry {
    id: &'static str,
    display_name: &'static str,
    category: MovementCategory,
    aliases: &'static [&'static str],
}

use MovementCategory::{Gymnastics, Monostructural, Other, Weightlifting};

/// The built-in vocabulary. Ids are stable kebab-case slugs; canonical names
/// derive from the id with hyphens replaced by spaces.
const CATALOG: &[CatalogEntry] = &[
    CatalogEntry { id: "pull-up", display_name: "Pull-up", category: Gymnastics, aliases: &["pullup", "pull up", "strict pull up", "kipping pull up"] },
    CatalogEntry { id: "push-up", display_name: "Push-up", category: Gymnastics, aliases: &["pushup", "push up", "hand release push up", "hr push up"] },
    CatalogEntry { id: "air-squat", display_name: "Air Squat", category: Gymnastics, aliases: &["squat", "bodyweight squat"] },
    CatalogEntry { id: "sit-up", display_name: "Sit-up", category: Gymnastics, aliases: &["situp", "sit up", "abmat sit up"] },
    CatalogEntry { id: "ghd-sit-up", display_name: "GHD Sit-up", category: Gymnastics, aliases: &["ghd", "ghd situp"] },
    CatalogEntry { id: "v-up", display_name: "V-up", category: Gymnastics, aliases: &["vup", "v up"] },
    CatalogEntry { id: "toes-to-bar", display_name: "Toes-to-Bar", category: Gymnastics, aliases: &["t2b", "ttb", "toes to bar"] },
    CatalogEntry { id: "chest-to-bar-pull-up", display_name: "Chest-to-Bar Pull-up", category: Gymnastics, aliases: &["c2b", "chest to bar", "ctb"] },
    CatalogEntry { id: "handstand-push-up", display_name: "Handstand Push-up", category: Gymnastics, aliases: &["hspu", "handstand pushup", "strict hspu", "kipping hspu"] },
    CatalogEntry { id: "handstand-walk", display_name: "Handstand Walk", category: Gymnastics, aliases: &["hs walk", "hsw"] },
    CatalogEntry { id: "wall-walk", display_name: "Wall Walk", category: Gymnastics, aliases: &[] },
    CatalogEntry { id: "muscle-up", display_name: "Muscle-up", category: Gymnastics, aliases: &["mu", "ring muscle up", "rmu", "bar muscle up", "bmu"] },
    CatalogEntry { id: "rope-climb", display_name: "Rope Climb", category: Gymnastics, aliases: &["rope"] },
    CatalogEntry { id: "ring-dip", display_name: "Ring Dip", category: Gymnastics, aliases: &["dip", "ring dips"] },
    CatalogEntry { id: "ring-row", display_name: "Ring Row", category: Gymnastics, aliases: &[] },
    CatalogEntry { id: "burpee", display_name: "Burpee", category: Gymnastics, aliases: &["bar facing burpee", "lateral burpee"] },
    CatalogEntry { id: "burpee-box-jump-over", display_name: "Burpee Box Jump Over", category: Gymnastics, aliases: &["bbjo"] },
    CatalogEntry { id: "box-jump", display_name: "Box Jump", category: Gymnastics, aliases: &["box jump over", "bjo"] },
    CatalogEntry { id: "lunge", display_name: "Lunge", category: Gymnastics, aliases: &["walking lunge", "reverse lunge", "overhead lunge"] },
    CatalogEntry { id: "pistol", display_name: "Pistol", category: Gymnastics, aliases: &["pistol squat", "single leg squat"] },
    CatalogEntry { id: "plank", display_name: "Plank", category: Gymnastics, aliases: &["plank hold"] },
    CatalogEntry { id: "double-under", display_name: "Double-under", category: Monostructural, aliases: &["du", "dus", "dubs", "double unders"] },
    CatalogEntry { id: "single-under", display_name: "Single-under", category: Monostructural, aliases: &["su", "singles"] },
    CatalogEntry { id: "run", display_name: "Run", category: Monostructural, aliases: &["running", "sprint"] },
    CatalogEntry { id: "row", display_name: "Row", category: Monostructural, aliases: &["rowing", "erg"] },
    CatalogEntry { id: "bike", display_name: "Bike", category: Monostructural, aliases: &["assault bike", "echo bike", "air bike", "bike erg"] },
    CatalogEntry { id: "ski-erg", display_name: "Ski Erg", category: Monostructural, aliases: &["ski", "skierg"] },
    CatalogEntry { id: "swim", display_name: "Swim", category: Monostructural, aliases: &["swimming"] },
    CatalogEntry { id: "thruster", display_name: "Thruster", category: Weightlifting, aliases: &[] },
    CatalogEntry { id: "deadlift", display_name: "Deadlift", category: Weightlifting, aliases: &["dl"] },
    CatalogEntry { id: "sumo-deadlift-high-pull", display_name: "Sumo Deadlift High Pull", category: Weightlifting, aliases: &["sdhp"] },
    CatalogEntry { id: "clean", display_name: "Clean", category: Weightlifting, aliases: &["squat clean"] },
    CatalogEntry { id: "power-clean", display_name: "Power Clean", category: Weightlifting, aliases: &["pc"] },
    CatalogEntry { id: "hang-clean", display_name: "Hang Clean", category: Weightlifting, aliases: &["hang power clean", "hpc"] },
    CatalogEntry { id: "clean-and-jerk", display_name: "Clean and Jerk", category: Weightlifting, aliases: &["c&j", "clean jerk", "clean & jerk"] },
    CatalogEntry { id: "snatch", display_name: "Snatch", category: Weightlifting, aliases: &["squat snatch"] },
    CatalogEntry { id: "power-snatch", display_name: "Power Snatch", category: Weightlifting, aliases: &[] },
    CatalogEntry { id: "hang-snatch", display_name: "Hang Snatch", category: Weightlifting, aliases: &["hang power snatch"] },
    CatalogEntry { id: "dumbbell-snatch", display_name: "Dumbbell Snatch", category: Weightlifting, aliases: &["db snatch", "alternating db snatch"] },
    CatalogEntry { id: "overhead-squat", display_name: "Overhead Squat", category: Weightlifting, aliases: &["ohs"] },
    CatalogEntry { id: "front-squat", display_name: "Front Squat", category: Weightlifting, aliases: &["fs"] },
    CatalogEntry { id: "back-squat", display_name: "Back Squat", category: Weightlifting, aliases: &["bs"] },
    CatalogEntry { id: "shoulder-press", display_name: "Shoulder Press", category: Weightlifting, aliases: &["strict press", "press", "shoulder to overhead", "s2o"] },
    CatalogEntry { id: "push-press", display_name: "Push Press", category: Weightlifting, aliases: &["pp"] },
    CatalogEntry { id: "push-jerk", display_name: "Push Jerk", category: Weightlifting, aliases: &["jerk", "split jerk"] },
    CatalogEntry { id: "bench-press", display_name: "Bench Press", category: Weightlifting, aliases: &["bench"] },
    CatalogEntry { id: "kettlebell-swing", display_name: "Kettlebell Swing", category: Weightlifting, aliases: &["kbs", "kb swing", "american swing", "russian swing"] },
    CatalogEntry { id: "goblet-squat", display_name: "Goblet Squat", category: Weightlifting, aliases: &["kb goblet squat"] },
    CatalogEntry { id: "wall-ball", display_name: "Wall Ball", category: Weightlifting, aliases: &["wall balls", "wb", "wall ball shot"] },
    CatalogEntry { id: "man-maker", display_name: "Man Maker", category: Weightlifting, aliases: &["man makers"] },
    CatalogEntry { id: "devil-press", display_name: "Devil Press", category: Weightlifting, aliases: &["devils press"] },
    CatalogEntry { id: "farmer-carry", display_name: "Farmer Carry", category: Other, aliases: &["farmers carry", "farmer walk", "farmers walk"] },
    CatalogEntry { id: "sled-push", display_name: "Sled Push", category: Other, aliases: &["sled"] },
    CatalogEntry { id: "sandbag-carry", display_name: "Sandbag Carry", category: Other, aliases: &["sandbag"] },
];

/// Suggestion cutoff: edit distance must not exceed this.
const MAX_SUGGESTION_DISTANCE: usize = 3;

/// In-memory resolver over the built-in catalog.
///
/// Lookup normalizes case, punctuation, and plurals, so "Pull-ups",
/// "pull ups", and "PULLUP" all resolve to the same identity.
pub struct StaticMovementCatalog {
    by_alias: HashMap<String, usize>,
}

impl StaticMovementCatalog {
    /// Build the alias index.
    #[must_use]
    pub fn new() -> Self {
        let mut by_alias = HashMap::new();
        for (index, entry) in CATALOG.iter().enumerate() {
            by_alias.insert(normalize(&entry.id.replace('-', " ")), index);
            by_alias.insert(normalize(entry.display_name), index);
            for alias in entry.aliases {
                by_alias.insert(normalize(alias), index);
            }
        }
        Self { by_alias }
    }

    fn identity(entry: &CatalogEntry) -> MovementIdentity {
        MovementIdentity {
            id: entry.id.into(),
            canonical_name: entry.id.replace('-', " "),
            display_name: entry.display_name.into(),
            category: entry.category,
        }
    }
}

impl Default for StaticMovementCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl MovementResolver for StaticMovementCatalog {
    fn resolve(&self, text: &str) -> Option<MovementIdentity> {
        let key = normalize(text);
        if key.is_empty() {
            return None;
        }
        self.by_alias
            .get(&key)
            .map(|&index| Self::identity(&CATALOG[index]))
    }

    fn suggest(&self, text: &str) -> Option<String> {
        let key = normalize(text);
        if key.is_empty() {
            return None;
        }
        let (best_alias, best_distance) = self
            .by_alias
            .keys()
            .map(|alias| (alias, levenshtein(&key, alias)))
            .min_by_key(|(_, d)| *d)?;
        if best_distance > MAX_SUGGESTION_DISTANCE {
            return None;
        }
        self.by_alias
            .get(best_alias)
            .map(|&index| CATALOG[index].display_name.into())
    }
}

/// Lowercase, fold punctuation to spaces, collapse whitespace, fold plurals.
fn normalize(text: &str) -> String {
    let folded: String = text
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '&' { c } else { ' ' })
        .collect();
    folded
        .split_whitespace()
        .map(strip_plural)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Fold trailing plurals ("swings" -> "swing") without touching "-ss" words.
fn strip_plural(word: &str) -> &str {
    if word.len() > 2 && word.ends_with('s') && !word.ends_with("ss") {
        &word[..word.len() - 1]
    } else {
        word
    }
}

/// Classic two-row Levenshtein edit distance.
fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    let mut previous: Vec<usize> = (0..=b.len()).collect();
    let mut current = vec![0; b.len() + 1];
    for (i, &ca) in a.iter().enumerate() {
        current[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let substitution = previous[j] + usize::from(ca != cb);
            current[j + 1] = substitution
                .min(previous[j + 1] + 1)
                .min(current[j] + 1);
        }
        std::mem::swap(&mut previous, &mut current);
    }
    previous[b.len()]
}
