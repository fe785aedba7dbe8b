//! Date extrapolation.

use chrono::Days;
use tracing::debug;

use super::pattern::{detect_pattern, step_days};
use crate::error::{GridError, Result};
use crate::models::interval::parse_date;
use crate::models::Granularity;

/// Generates `count` dates after `start`, stepping by the pattern's fixed length.
///
/// `start` itself is not included. Stepping stops early only if the
/// calendar's representable range is exhausted.
///
/// # Errors
/// [`GridError::InvalidDate`] if `start` is not a `yyyy-MM-dd` date.
pub fn generate_next_dates(start: &str, pattern: Granularity, count: usize) -> Result<Vec<String>> {
    let mut current = parse_date(start).ok_or_else(|| GridError::InvalidDate(start.to_string()))?;
    let step = Days::new(step_days(pattern));

    let mut dates = Vec::with_capacity(count);
    for _ in 0..count {
        let Some(next) = current.checked_add_days(step) else {
            break;
        };
        current = next;
        dates.push(current.format("%Y-%m-%d").to_string());
    }
    Ok(dates)
}

/// Extends a selected date run up to `target_count` entries.
///
/// Returns only the new dates, `target_count - selected.len()` of them
/// (none if the selection already reaches the target). The step comes
/// from [`detect_pattern`]; without a detectable pattern the run
/// continues one day at a time from the last selected date.
///
/// # Errors
/// - [`GridError::EmptyAutofillSource`] if `selected` is empty.
/// - [`GridError::InvalidDate`] if the last selected date is unparsable.
///
/// # Examples
///
/// ```
/// use u_timegrid::autofill::autofill_dates;
///
/// let filled = autofill_dates(&["2024-01-01", "2024-01-08"], 4).unwrap();
/// assert_eq!(filled, vec!["2024-01-15", "2024-01-22"]);
/// ```
pub fn autofill_dates<S: AsRef<str>>(selected: &[S], target_count: usize) -> Result<Vec<String>> {
    let last = selected.last().ok_or(GridError::EmptyAutofillSource)?;

    let count = target_count.saturating_sub(selected.len());
    if count == 0 {
        return Ok(Vec::new());
    }

    let detected = detect_pattern(selected);
    let pattern = detected.unwrap_or(Granularity::Day);
    debug!(?detected, count, "autofilling dates");

    generate_next_dates(last.as_ref(), pattern, count)
}
