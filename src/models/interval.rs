//! Date intervals and the interval-source abstraction.
//!
//! Host data arrives as string-encoded dates that may be absent, empty,
//! or malformed. [`RawInterval`] carries those strings untouched;
//! [`DateInterval`] is the parsed, well-formed form the timeline works with.
//!
//! # Time Model
//! All instants are local wall-clock [`NaiveDateTime`] values. RFC 3339
//! input carrying an offset is converted to the local calendar once, at
//! parse time; nothing downstream is timezone-aware.

use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime, NaiveTime};

use super::Granularity;

/// An unparsed `(start, end)` pair as supplied by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RawInterval<'a> {
    /// Start date string, if any.
    pub start: Option<&'a str>,
    /// End date string, if any.
    pub end: Option<&'a str>,
}

impl<'a> RawInterval<'a> {
    /// Creates a raw interval from optional endpoint strings.
    pub fn new(start: Option<&'a str>, end: Option<&'a str>) -> Self {
        Self { start, end }
    }

    /// Creates a raw interval where both endpoints are present.
    pub fn between(start: &'a str, end: &'a str) -> Self {
        Self::new(Some(start), Some(end))
    }
}

/// A well-formed interval with both endpoints parsed.
///
/// `start <= end` is expected but not enforced here; see
/// [`validate_wells`](crate::validation::validate_wells) for that check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateInterval {
    /// First instant.
    pub start: NaiveDateTime,
    /// Last instant.
    pub end: NaiveDateTime,
}

impl DateInterval {
    /// Creates an interval from parsed endpoints.
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    /// Parses both endpoints of a raw interval.
    ///
    /// Returns `None` if either endpoint is absent, empty, or unparsable.
    pub fn parse(raw: &RawInterval<'_>) -> Option<Self> {
        let start = parse_instant(raw.start?)?;
        let end = parse_instant(raw.end?)?;
        Some(Self { start, end })
    }

    /// Widens the interval to whole calendar units.
    ///
    /// Under `Year` the interval covers its containing calendar years;
    /// under every other granularity it covers whole local days.
    pub fn snapped(&self, granularity: Granularity) -> Self {
        match granularity {
            Granularity::Year => Self {
                start: start_of_day(first_day_of_year(self.start.date())),
                end: end_of_day(last_day_of_year(self.end.date())),
            },
            _ => Self {
                start: start_of_day(self.start.date()),
                end: end_of_day(self.end.date()),
            },
        }
    }

    /// Whether the start lies after the end.
    pub fn is_reversed(&self) -> bool {
        self.start > self.end
    }
}

/// Something that exposes zero or more raw intervals.
///
/// Implemented by every node of the host tree so the scanner can walk a
/// forest of wells, events, or bare interval lists alike.
pub trait IntervalSource {
    /// Appends every interval this node and its descendants carry.
    fn collect_intervals<'a>(&'a self, out: &mut Vec<RawInterval<'a>>);
}

impl IntervalSource for RawInterval<'_> {
    fn collect_intervals<'a>(&'a self, out: &mut Vec<RawInterval<'a>>) {
        out.push(*self);
    }
}

impl<T: IntervalSource> IntervalSource for [T] {
    fn collect_intervals<'a>(&'a self, out: &mut Vec<RawInterval<'a>>) {
        for item in self {
            item.collect_intervals(out);
        }
    }
}

impl<T: IntervalSource> IntervalSource for Vec<T> {
    fn collect_intervals<'a>(&'a self, out: &mut Vec<RawInterval<'a>>) {
        self.as_slice().collect_intervals(out);
    }
}

/// Parses a host date string into a local instant.
///
/// Accepts `yyyy-MM-dd`, `yyyy-MM-ddTHH:MM:SS[.fff]`,
/// `yyyy-MM-dd HH:MM:SS[.fff]`, `yyyy-MM-ddTHH:MM`, and RFC 3339 with an
/// offset. Empty or whitespace-only input yields `None`.
pub fn parse_instant(raw: &str) -> Option<NaiveDateTime> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(start_of_day(date));
    }

    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }

    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.with_timezone(&Local).naive_local())
}

/// Parses a strict `yyyy-MM-dd` calendar date.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

/// Local midnight of `date`.
#[inline]
pub fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::default())
}

/// Last representable millisecond of `date` (23:59:59.999).
#[inline]
pub fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::from_hms_milli_opt(23, 59, 59, 999).unwrap_or_default())
}

pub(crate) fn first_day_of_year(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), 1, 1).unwrap_or(date)
}

pub(crate) fn last_day_of_year(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), 12, 31).unwrap_or(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dt(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f").unwrap()
    }

    #[test]
    fn test_parse_instant_formats() {
        assert_eq!(parse_instant("2024-03-05"), Some(dt("2024-03-05 00:00:00")));
        assert_eq!(
            parse_instant("2024-03-05T14:30:00"),
            Some(dt("2024-03-05 14:30:00"))
        );
        assert_eq!(
            parse_instant("2024-03-05 14:30:00.250"),
            Some(dt("2024-03-05 14:30:00.250"))
        );
        assert_eq!(parse_instant("2024-03-05T08:15"), Some(dt("2024-03-05 08:15:00")));
        assert!(parse_instant("2024-03-05T08:15:00+03:00").is_some());
    }

    #[test]
    fn test_parse_instant_rejects_garbage() {
        assert!(parse_instant("").is_none());
        assert!(parse_instant("   ").is_none());
        assert!(parse_instant("not a date").is_none());
        assert!(parse_instant("2024-02-30").is_none());
    }

    #[test]
    fn test_interval_parse_requires_both_ends() {
        assert!(DateInterval::parse(&RawInterval::new(Some("2024-01-01"), None)).is_none());
        assert!(DateInterval::parse(&RawInterval::new(None, Some("2024-01-01"))).is_none());
        assert!(DateInterval::parse(&RawInterval::between("2024-01-01", "")).is_none());

        let iv = DateInterval::parse(&RawInterval::between("2024-01-01", "2024-01-05")).unwrap();
        assert_eq!(iv.start, dt("2024-01-01 00:00:00"));
        assert_eq!(iv.end, dt("2024-01-05 00:00:00"));
    }

    #[test]
    fn test_snapped_to_days() {
        let iv = DateInterval::new(dt("2024-05-10 13:00:00"), dt("2024-05-12 08:00:00"));
        let s = iv.snapped(Granularity::Week);
        assert_eq!(s.start, dt("2024-05-10 00:00:00"));
        assert_eq!(s.end, dt("2024-05-12 23:59:59.999"));
    }

    #[test]
    fn test_snapped_to_years() {
        let iv = DateInterval::new(dt("2023-05-10 13:00:00"), dt("2024-02-12 08:00:00"));
        let s = iv.snapped(Granularity::Year);
        assert_eq!(s.start, dt("2023-01-01 00:00:00"));
        assert_eq!(s.end, dt("2024-12-31 23:59:59.999"));
    }

    #[test]
    fn test_reversed() {
        let iv = DateInterval::new(dt("2024-05-12 00:00:00"), dt("2024-05-10 00:00:00"));
        assert!(iv.is_reversed());
    }
}
