// ABOUTME: Duration, time-cap, round-count, and interval extractors
// ABOUTME: Handles min/sec words, clock format "m:ss", ":30" seconds, and EMOM/Tabata intervals

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

use crate::models::IntervalConfig;

const SECONDS_PER_MINUTE: u32 = 60;

static MINUTES: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Matches: 20 min, 5 minutes, 3min
    Regex::new(r"(?i)\b(\d+(?:\.\d+)?)\s*min(?:ute)?s?\b").ok()
});

static SECONDS: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Matches: 30 sec, 45 seconds, 20s
    Regex::new(r"(?i)\b(\d+)\s*sec(?:ond)?s?\b").ok()
});

static CLOCK: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Matches: 2:30, 12:05
    Regex::new(r"\b(\d{1,2}):([0-5]\d)\b").ok()
});

static COLON_SECONDS: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Matches: :30, :45 (colon-prefixed seconds)
    Regex::new(r"(?:^|\s):(\d{1,3})\b").ok()
});

static TIME_CAP: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Matches: Time Cap: 20, TC: 15, Cap 12 (value in minutes)
    Regex::new(r"(?i)\b(?:time\s*cap|tc|cap)\s*[:\-]?\s*(\d+)\b").ok()
});

static MIN_CAP: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Matches: 20 min cap, 15 minute cap
    Regex::new(r"(?i)\b(\d+)\s*min(?:ute)?s?\s*cap\b").ok()
});

static ROUND_COUNT: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Matches: 5 rounds, 3 sets, 5 RFT
    Regex::new(r"(?i)\b(\d+)\s*(?:rounds?|sets?|rft)\b").ok()
});

static EVERY_N_MIN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Matches: every 2 min, every 3 minutes
    Regex::new(r"(?i)\bevery\s+(\d+)\s*min(?:ute)?s?\b").ok()
});

static ENMOM: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Matches: E2MOM, e3mom
    Regex::new(r"(?i)\bE(\d+)MOM\b").ok()
});

static ON_OFF: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Matches: 40 sec on / 20 sec off, 30s on 30s off
    Regex::new(r"(?i)\b(\d+)\s*s(?:ec(?:ond)?s?)?\s+on\s*/?\s*(\d+)\s*s(?:ec(?:ond)?s?)?\s+off\b")
        .ok()
});

static TABATA: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Matches: Tabata
    Regex::new(r"(?i)\btabata\b").ok()
});

fn first_capture_u32(pattern: &LazyLock<Option<Regex>>, text: &str) -> Option<u32> {
    let re = pattern.as_ref()?;
    let caps = re.captures(text)?;
    caps.get(1)?.as_str().parse().ok()
}

/// Extract a duration in seconds: "20 min", "30 sec", clock "2:30", or ":30".
#[must_use]
pub fn extract_duration_seconds(text: &str) -> Option<u32> {
    extract_duration_spanned(text).map(|(seconds, _)| seconds)
}

pub(crate) fn extract_duration_spanned(text: &str) -> Option<(u32, Range<usize>)> {
    if let Some(re) = MINUTES.as_ref() {
        if let Some(caps) = re.captures(text) {
            let minutes: f64 = caps.get(1)?.as_str().parse().ok()?;
            let whole = caps.get(0)?;
            let seconds = (minutes * f64::from(SECONDS_PER_MINUTE)).round() as u32;
            return Some((seconds, whole.start()..whole.end()));
        }
    }
    if let Some(re) = SECONDS.as_ref() {
        if let Some(caps) = re.captures(text) {
            let seconds: u32 = caps.get(1)?.as_str().parse().ok()?;
            let whole = caps.get(0)?;
            return Some((seconds, whole.start()..whole.end()));
        }
    }
    if let Some(re) = CLOCK.as_ref() {
        if let Some(caps) = re.captures(text) {
            let minutes: u32 = caps.get(1)?.as_str().parse().ok()?;
            let seconds: u32 = caps.get(2)?.as_str().parse().ok()?;
            let whole = caps.get(0)?;
            return Some((
                minutes * SECONDS_PER_MINUTE + seconds,
                whole.start()..whole.end(),
            ));
        }
    }
    if let Some(re) = COLON_SECONDS.as_ref() {
        if let Some(caps) = re.captures(text) {
            let seconds: u32 = caps.get(1)?.as_str().parse().ok()?;
            let group = caps.get(1)?;
            // Include the colon in the consumed span.
            return Some((seconds, group.start().saturating_sub(1)..group.end()));
        }
    }
    None
}

/// Extract a time cap in seconds: "Time Cap: 20", "TC: 15", "Cap 12",
/// "20 min cap". Plain values are minutes; clock format is minutes:seconds.
#[must_use]
pub fn extract_time_cap_seconds(text: &str) -> Option<u32> {
    if let Some(minutes) = first_capture_u32(&MIN_CAP, text) {
        return minutes.checked_mul(SECONDS_PER_MINUTE);
    }
    let re = TIME_CAP.as_ref()?;
    let caps = re.captures(text)?;
    let value_start = caps.get(1)?.start();
    // Clock-format caps ("Cap: 12:30") take the whole m:ss value.
    if let Some(clock) = CLOCK.as_ref() {
        if let Some(clock_caps) = clock.captures_at(text, value_start) {
            if clock_caps.get(0).is_some_and(|m| m.start() == value_start) {
                let minutes: u32 = clock_caps.get(1)?.as_str().parse().ok()?;
                let seconds: u32 = clock_caps.get(2)?.as_str().parse().ok()?;
                return Some(minutes * SECONDS_PER_MINUTE + seconds);
            }
        }
    }
    let minutes: u32 = caps.get(1)?.as_str().parse().ok()?;
    minutes.checked_mul(SECONDS_PER_MINUTE)
}

/// Extract a round count: "5 rounds", "3 sets", "5 RFT".
#[must_use]
pub fn extract_round_count(text: &str) -> Option<u32> {
    first_capture_u32(&ROUND_COUNT, text)
}

/// Extract an interval configuration: "E{n}MOM", "every {n} min",
/// "{w} sec on / {r} sec off", or the fixed Tabata protocol.
///
/// EMOM-style intervals have zero rest and an open-ended round count
/// (rounds = 0) unless the caller derives one from a total duration.
#[must_use]
pub fn extract_interval(text: &str) -> Option<IntervalConfig> {
    if let Some(re) = TABATA.as_ref() {
        if re.is_match(text) {
            return Some(IntervalConfig::tabata());
        }
    }
    if let Some(re) = ON_OFF.as_ref() {
        if let Some(caps) = re.captures(text) {
            let work: u32 = caps.get(1)?.as_str().parse().ok()?;
            let rest: u32 = caps.get(2)?.as_str().parse().ok()?;
            return Some(IntervalConfig::new(0, work, rest));
        }
    }
    if let Some(n) = first_capture_u32(&ENMOM, text) {
        let work = n.checked_mul(SECONDS_PER_MINUTE)?;
        return Some(IntervalConfig::new(0, work, 0));
    }
    if let Some(n) = first_capture_u32(&EVERY_N_MIN, text) {
        let work = n.checked_mul(SECONDS_PER_MINUTE)?;
        return Some(IntervalConfig::new(0, work, 0));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_spellings() {
        assert_eq!(extract_duration_seconds("20 min"), Some(1200));
        assert_eq!(extract_duration_seconds("5 minutes"), Some(300));
        assert_eq!(extract_duration_seconds("30 sec hold"), Some(30));
        assert_eq!(extract_duration_seconds("2:30"), Some(150));
        assert_eq!(extract_duration_seconds("plank :45"), Some(45));
        assert_eq!(extract_duration_seconds("no time here"), None);
    }

    #[test]
    fn time_cap_spellings() {
        assert_eq!(extract_time_cap_seconds("Time Cap: 20"), Some(1200));
        assert_eq!(extract_time_cap_seconds("TC: 15"), Some(900));
        assert_eq!(extract_time_cap_seconds("Cap 12"), Some(720));
        assert_eq!(extract_time_cap_seconds("20 min cap"), Some(1200));
        assert_eq!(extract_time_cap_seconds("Cap: 12:30"), Some(750));
        assert_eq!(extract_time_cap_seconds("no cap"), None);
    }

    #[test]
    fn round_count_spellings() {
        assert_eq!(extract_round_count("5 Rounds of"), Some(5));
        assert_eq!(extract_round_count("3 sets"), Some(3));
        assert_eq!(extract_round_count("5 RFT"), Some(5));
        assert_eq!(extract_round_count("Rounds"), None);
    }

    #[test]
    fn unrepresentable_values_are_no_match() {
        assert_eq!(extract_time_cap_seconds("Cap 4294967295"), None);
        assert_eq!(extract_time_cap_seconds("80000000 min cap"), None);
        assert_eq!(extract_interval("every 80000000 min"), None);
        assert_eq!(extract_interval("E4294967295MOM"), None);
    }

    #[test]
    fn interval_families() {
        let emom2 = extract_interval("E2MOM").unwrap();
        assert_eq!(emom2.work_seconds, 120);
        assert_eq!(emom2.rounds, 0);

        let every3 = extract_interval("every 3 min").unwrap();
        assert_eq!(every3.work_seconds, 180);

        let on_off = extract_interval("40 sec on / 20 sec off").unwrap();
        assert_eq!((on_off.work_seconds, on_off.rest_seconds), (40, 20));

        assert_eq!(extract_interval("Tabata"), Some(IntervalConfig::tabata()));
        assert_eq!(extract_interval("5 rounds"), None);
    }
}
