//! Overall date span of a host tree.
//!
//! Walks every interval-bearing node, drops the ones that cannot be
//! parsed, snaps the rest to whole days (or whole years under `year`
//! granularity), and folds them into a single `[min, max]` span.
//!
//! # Tolerance
//! Scanning never fails. Absent endpoints are skipped silently,
//! unparsable or reversed ones are skipped with a warning, and a tree with
//! no usable interval yields a fallback span around the current date.

use chrono::{Datelike, Local, NaiveDate, NaiveDateTime};
use tracing::{debug, warn};

use crate::models::interval::{end_of_day, first_day_of_year, last_day_of_year, start_of_day};
use crate::models::{DateInterval, Granularity, IntervalSource, RawInterval};

/// Inclusive span covering every scanned interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateSpan {
    /// Earliest instant.
    pub min: NaiveDateTime,
    /// Latest instant.
    pub max: NaiveDateTime,
    /// Whether the span is the no-data fallback rather than derived from input.
    pub fallback: bool,
}

/// Reduces a tree of dated nodes to its overall span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntervalScanner {
    /// Granularity the span will be bucketed at.
    pub granularity: Granularity,
    /// Reference date for the fallback span.
    pub today: NaiveDate,
}

impl IntervalScanner {
    /// Creates a scanner anchored at today's local date.
    pub fn new(granularity: Granularity) -> Self {
        Self {
            granularity,
            today: Local::now().date_naive(),
        }
    }

    /// Overrides the reference date used for the fallback span.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// Scans a source and returns its overall span.
    pub fn scan<S: IntervalSource + ?Sized>(&self, source: &S) -> DateSpan {
        let mut raw = Vec::new();
        source.collect_intervals(&mut raw);

        let mut span: Option<(NaiveDateTime, NaiveDateTime)> = None;
        let mut skipped = 0usize;

        for interval in raw.iter().filter_map(|r| self.accept(r, &mut skipped)) {
            let snapped = interval.snapped(self.granularity);
            span = Some(match span {
                None => (snapped.start, snapped.end),
                Some((min, max)) => (min.min(snapped.start), max.max(snapped.end)),
            });
        }

        debug!(
            intervals = raw.len(),
            skipped,
            granularity = %self.granularity,
            "scanned date intervals"
        );

        match span {
            Some((min, max)) => DateSpan {
                min,
                max,
                fallback: false,
            },
            None => self.fallback_span(),
        }
    }

    /// Span used when no valid interval exists.
    ///
    /// The current calendar year under `year` granularity, the current
    /// calendar month otherwise.
    pub fn fallback_span(&self) -> DateSpan {
        let (first, last) = match self.granularity {
            Granularity::Year => (first_day_of_year(self.today), last_day_of_year(self.today)),
            _ => (
                self.today.with_day(1).unwrap_or(self.today),
                month_last_day(self.today),
            ),
        };
        warn!(%first, %last, "no valid date intervals found, using fallback span");
        DateSpan {
            min: start_of_day(first),
            max: end_of_day(last),
            fallback: true,
        }
    }

    fn accept(&self, raw: &RawInterval<'_>, skipped: &mut usize) -> Option<DateInterval> {
        let (start, end) = match (raw.start, raw.end) {
            (Some(s), Some(e)) if !s.trim().is_empty() && !e.trim().is_empty() => (s, e),
            _ => {
                *skipped += 1;
                return None;
            }
        };

        let Some(interval) = DateInterval::parse(raw) else {
            warn!(start, end, "invalid date format, interval skipped");
            *skipped += 1;
            return None;
        };

        if interval.is_reversed() {
            warn!(start, end, "interval ends before it starts, skipped");
            *skipped += 1;
            return None;
        }

        Some(interval)
    }
}

fn month_last_day(date: NaiveDate) -> NaiveDate {
    (28..=31)
        .rev()
        .find_map(|d| date.with_day(d))
        .unwrap_or(date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Event, OperatingState, Operation, Resource, Well};

    fn dt(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f").unwrap()
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 14).unwrap()
    }

    fn scanner(g: Granularity) -> IntervalScanner {
        IntervalScanner::new(g).with_today(today())
    }

    #[test]
    fn test_scan_skips_null_end() {
        let wells = vec![Well::new("W1")
            .with_event(Event {
                start_date: Some("2024-01-01".into()),
                end_date: None,
                ..Event::new("broken")
            })
            .with_event(Event::new("ok").with_dates("2024-03-05", "2024-03-20"))];

        let span = scanner(Granularity::Day).scan(&wells);
        assert!(!span.fallback);
        assert_eq!(span.min, dt("2024-03-05 00:00:00"));
        assert_eq!(span.max, dt("2024-03-20 23:59:59.999"));
    }

    #[test]
    fn test_scan_skips_unparsable_and_reversed() {
        let intervals = vec![
            RawInterval::between("garbage", "2024-01-01"),
            RawInterval::between("2024-05-10", "2024-05-01"),
            RawInterval::between("", "2024-05-01"),
            RawInterval::between("2024-04-01T10:00:00", "2024-04-02T09:00:00"),
        ];
        let span = scanner(Granularity::Month).scan(&intervals);
        assert_eq!(span.min, dt("2024-04-01 00:00:00"));
        assert_eq!(span.max, dt("2024-04-02 23:59:59.999"));
    }

    #[test]
    fn test_scan_walks_whole_tree() {
        let wells = vec![
            Well::new("W1").with_event(
                Event::new("E1")
                    .with_dates("2024-03-01", "2024-03-10")
                    .with_operating_state(OperatingState::new("2024-02-01", "2024-03-01"))
                    .with_resource(
                        Resource::new("R1")
                            .with_operation(Operation::new("O1").with_dates("2024-03-02", "2024-03-04"))
                            .with_operation(Operation::new("O2").with_dates("2024-03-05", "2024-04-15")),
                    ),
            ),
            Well::new("W2").with_event(
                Event::new("E2").with_resource(Resource::new("R2").with_dates("2024-01-20", "2024-01-25")),
            ),
        ];

        let span = scanner(Granularity::Week).scan(&wells);
        assert_eq!(span.min, dt("2024-01-20 00:00:00"));
        assert_eq!(span.max, dt("2024-04-15 23:59:59.999"));
    }

    #[test]
    fn test_first_last_operation_rule_widens_span() {
        // Only the first/last pair forms a complete interval.
        let r = Resource::new("R1")
            .with_operation(Operation::new("first").with_start("2024-06-01"))
            .with_operation(Operation::new("last").with_end("2024-06-30"));

        let span = scanner(Granularity::Day).scan(&r);
        assert!(!span.fallback);
        assert_eq!(span.min, dt("2024-06-01 00:00:00"));
        assert_eq!(span.max, dt("2024-06-30 23:59:59.999"));
    }

    #[test]
    fn test_year_granularity_widens_to_years() {
        let intervals = vec![RawInterval::between("2023-07-04", "2024-02-01")];
        let span = scanner(Granularity::Year).scan(&intervals);
        assert_eq!(span.min, dt("2023-01-01 00:00:00"));
        assert_eq!(span.max, dt("2024-12-31 23:59:59.999"));
    }

    #[test]
    fn test_order_independent() {
        let a = vec![
            RawInterval::between("2024-01-10", "2024-01-12"),
            RawInterval::between("2023-12-30", "2024-01-02"),
            RawInterval::between("2024-02-01", "2024-02-03"),
        ];
        let mut b = a.clone();
        b.reverse();
        let s = scanner(Granularity::Day);
        assert_eq!(s.scan(&a), s.scan(&b));
    }

    #[test]
    fn test_fallback_current_month() {
        let empty: Vec<Well> = Vec::new();
        let span = scanner(Granularity::Month).scan(&empty);
        assert!(span.fallback);
        assert_eq!(span.min, dt("2024-02-01 00:00:00"));
        assert_eq!(span.max, dt("2024-02-29 23:59:59.999"));
    }

    #[test]
    fn test_fallback_current_year() {
        let only_bad = vec![RawInterval::new(None, None)];
        let span = scanner(Granularity::Year).scan(&only_bad);
        assert!(span.fallback);
        assert_eq!(span.min, dt("2024-01-01 00:00:00"));
        assert_eq!(span.max, dt("2024-12-31 23:59:59.999"));
    }

    #[test]
    fn test_month_last_day() {
        let d = |y, m, day| NaiveDate::from_ymd_opt(y, m, day).unwrap();
        assert_eq!(month_last_day(d(2023, 2, 3)), d(2023, 2, 28));
        assert_eq!(month_last_day(d(2024, 4, 30)), d(2024, 4, 30));
        assert_eq!(month_last_day(d(2024, 12, 1)), d(2024, 12, 31));
    }
}
