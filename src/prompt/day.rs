//! Day-name canonicalization.
//!
//! Accepts full names, three-letter abbreviations, two-letter forms, single-letter
//! codes (M T W R F S U, with R = Thursday and U = Sunday) and numeric codes 1-7
//! with Monday = 1. Anything else is unscheduled.

use chrono::Weekday;

/// Week order used for day buckets.
pub const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

const SHORT_CODES: &[(&str, Weekday)] = &[
    ("M", Weekday::Mon),
    ("T", Weekday::Tue),
    ("W", Weekday::Wed),
    ("R", Weekday::Thu),
    ("F", Weekday::Fri),
    ("S", Weekday::Sat),
    ("U", Weekday::Sun),
    ("MO", Weekday::Mon),
    ("TU", Weekday::Tue),
    ("WE", Weekday::Wed),
    ("TH", Weekday::Thu),
    ("FR", Weekday::Fri),
    ("SA", Weekday::Sat),
    ("SU", Weekday::Sun),
];

pub fn canonical_day(raw: &str) -> Option<Weekday> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(n) = trimmed.parse::<usize>() {
        return (1..=7).contains(&n).then(|| WEEK[n - 1]);
    }

    let upper = trimmed.to_ascii_uppercase();
    if let Some((_, day)) = SHORT_CODES.iter().find(|(code, _)| *code == upper) {
        return Some(*day);
    }

    // chrono handles "Mon"/"Monday" case-insensitively
    trimmed.parse::<Weekday>().ok()
}

pub fn day_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
