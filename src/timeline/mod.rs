//! Time axis derivation.
//!
//! Turns a host tree into the ordered column headers of the grid:
//! [`IntervalScanner`] reduces the tree to one span, and
//! [`BucketGenerator`] cuts that span into calendar buckets.
//!
//! Both stages are pure given their inputs. The host decides when to
//! recompute (typically whenever the tree or the granularity changes) and
//! whether to memoize; nothing here caches.
//!
//! # Usage
//!
//! ```
//! use chrono::NaiveDate;
//! use u_timegrid::models::{Event, Granularity, Well};
//! use u_timegrid::timeline::{grouped_dates_with, BucketGenerator, IntervalScanner};
//!
//! let wells = vec![Well::new("W1").with_event(
//!     Event::new("E1").with_dates("2024-01-15", "2024-03-10"),
//! )];
//!
//! let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let scanner = IntervalScanner::new(Granularity::Month).with_today(today);
//! let buckets = grouped_dates_with(&wells, &scanner, &BucketGenerator::new());
//! assert_eq!(buckets.len(), 3);
//! ```

mod buckets;
mod scanner;

pub use buckets::{format_bucket, Bucket, BucketGenerator};
pub use scanner::{DateSpan, IntervalScanner};

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::models::{Granularity, IntervalSource};

/// Host-facing timeline settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineConfig {
    /// Bucket granularity.
    pub granularity: Granularity,
    /// First day of the week for `week` buckets.
    pub week_start: Weekday,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            granularity: Granularity::default(),
            week_start: Weekday::Mon,
        }
    }
}

impl TimelineConfig {
    /// Creates a config for the given granularity.
    pub fn new(granularity: Granularity) -> Self {
        Self {
            granularity,
            ..Default::default()
        }
    }

    /// Sets the first day of the week.
    pub fn with_week_start(mut self, week_start: Weekday) -> Self {
        self.week_start = week_start;
        self
    }

    /// Scanner for this config, anchored at today's local date.
    pub fn scanner(&self) -> IntervalScanner {
        IntervalScanner::new(self.granularity)
    }

    /// Bucket generator for this config.
    pub fn generator(&self) -> BucketGenerator {
        BucketGenerator::new().with_week_start(self.week_start)
    }
}

/// Scans `source` and buckets its span according to `config`.
pub fn grouped_dates<S: IntervalSource + ?Sized>(source: &S, config: &TimelineConfig) -> Vec<Bucket> {
    grouped_dates_with(source, &config.scanner(), &config.generator())
}

/// Scans `source` with an explicit scanner and generator.
pub fn grouped_dates_with<S: IntervalSource + ?Sized>(
    source: &S,
    scanner: &IntervalScanner,
    generator: &BucketGenerator,
) -> Vec<Bucket> {
    let span = scanner.scan(source);
    generator.generate(span.min, span.max, scanner.granularity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Event, Well};
    use chrono::NaiveDate;

    #[test]
    fn test_config_from_json() {
        let cfg: TimelineConfig =
            serde_json::from_str(r#"{"granularity": "week", "week_start": "Sun"}"#).unwrap();
        assert_eq!(cfg.granularity, Granularity::Week);
        assert_eq!(cfg.week_start, Weekday::Sun);

        let defaults: TimelineConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(defaults, TimelineConfig::default());
        assert_eq!(defaults.granularity, Granularity::Month);
    }

    #[test]
    fn test_grouped_dates_weekly() {
        let wells = vec![Well::new("W1").with_event(Event::new("E1").with_dates("2024-01-03", "2024-01-20"))];
        let buckets = grouped_dates(&wells, &TimelineConfig::new(Granularity::Week));
        assert_eq!(buckets.len(), 3);
        assert_eq!(buckets[0].key, "2024-01-03T00:00:00.000");
    }

    #[test]
    fn test_grouped_dates_recompute_on_granularity_change() {
        let wells = vec![Well::new("W1").with_event(Event::new("E1").with_dates("2024-01-01", "2024-02-15"))];
        let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let gen = BucketGenerator::new();

        let monthly = grouped_dates_with(&wells, &IntervalScanner::new(Granularity::Month).with_today(today), &gen);
        let daily = grouped_dates_with(&wells, &IntervalScanner::new(Granularity::Day).with_today(today), &gen);
        let yearly = grouped_dates_with(&wells, &IntervalScanner::new(Granularity::Year).with_today(today), &gen);

        assert_eq!(monthly.len(), 2);
        assert_eq!(daily.len(), 46);
        assert_eq!(yearly.len(), 1);
        assert_eq!(format_bucket(&yearly[0], Granularity::Year), "2024");
    }

    #[test]
    fn test_grouped_dates_empty_tree_uses_fallback_month() {
        let today = NaiveDate::from_ymd_opt(2023, 2, 10).unwrap();
        let scanner = IntervalScanner::new(Granularity::Day).with_today(today);
        let empty: Vec<Well> = Vec::new();
        let buckets = grouped_dates_with(&empty, &scanner, &BucketGenerator::new());
        assert_eq!(buckets.len(), 28);
        assert_eq!(format_bucket(&buckets[27], Granularity::Day), "2023-02-28");
    }
}
