//! Uniform-step detection over date sequences.

use chrono::NaiveDate;

use crate::models::interval::parse_date;
use crate::models::Granularity;

/// Fixed step length, in days, that identifies each pattern.
///
/// Month and year are the 30- and 365-day approximations, not calendar
/// units: a sequence stepping across a 31-day month does not match.
pub fn step_days(pattern: Granularity) -> u64 {
    match pattern {
        Granularity::Day => 1,
        Granularity::Week => 7,
        Granularity::Month => 30,
        Granularity::Year => 365,
    }
}

/// Detects the uniform step of a `yyyy-MM-dd` sequence.
///
/// Unparsable entries are dropped first. Returns `None` when fewer than
/// two valid dates remain, when consecutive gaps differ, or when the
/// common gap is not 1, 7, 30, or 365 days.
pub fn detect_pattern<S: AsRef<str>>(dates: &[S]) -> Option<Granularity> {
    if dates.len() < 2 {
        return None;
    }

    let parsed: Vec<NaiveDate> = dates.iter().filter_map(|d| parse_date(d.as_ref())).collect();
    if parsed.len() < 2 {
        return None;
    }

    let first_gap = (parsed[1] - parsed[0]).num_days();
    let uniform = parsed
        .windows(2)
        .all(|w| (w[1] - w[0]).num_days() == first_gap);
    if !uniform {
        return None;
    }

    Granularity::ALL
        .into_iter()
        .find(|g| step_days(*g) as i64 == first_gap)
}
