//! Calendar bucket generation.
//!
//! Splits a `[min, max]` span into an ordered run of calendar-unit
//! buckets. The first bucket starts at `min` (normalized to local
//! midnight); every later bucket starts on a calendar-unit boundary, so
//! each bucket's end is exactly one millisecond before the next start.
//!
//! # Calendar Arithmetic
//! Month and year stepping is calendar-aware: month lengths and leap
//! years come from the calendar, never from a fixed duration.

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, Weekday};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::models::interval::{end_of_day, first_day_of_year, last_day_of_year, start_of_day};
use crate::models::Granularity;

/// One column of the time axis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bucket {
    /// First instant covered.
    pub start: NaiveDateTime,
    /// Last instant covered (23:59:59.999 of the unit's final day).
    pub end: NaiveDateTime,
    /// Stable, sortable join key: ISO form of `start`.
    pub key: String,
}

impl Bucket {
    /// Whether an instant falls inside this bucket (inclusive).
    pub fn contains(&self, instant: NaiveDateTime) -> bool {
        instant >= self.start && instant <= self.end
    }
}

/// Generates bucket sequences for a configured week convention.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use u_timegrid::models::Granularity;
/// use u_timegrid::timeline::BucketGenerator;
///
/// let min = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap().and_hms_opt(0, 0, 0).unwrap();
/// let max = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap().and_hms_opt(0, 0, 0).unwrap();
///
/// let buckets = BucketGenerator::new().generate(min, max, Granularity::Month);
/// assert_eq!(buckets.len(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BucketGenerator {
    /// First day of the week; weeks end the day before.
    pub week_start: Weekday,
}

impl Default for BucketGenerator {
    fn default() -> Self {
        Self {
            week_start: Weekday::Mon,
        }
    }
}

impl BucketGenerator {
    /// Creates a generator with Monday-start weeks.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the first day of the week.
    pub fn with_week_start(mut self, week_start: Weekday) -> Self {
        self.week_start = week_start;
        self
    }

    /// Produces the ordered bucket sequence covering `[min, max]`.
    ///
    /// Always returns at least one bucket. When `min == max` the single
    /// bucket is anchored at that exact instant.
    pub fn generate(
        &self,
        min: NaiveDateTime,
        max: NaiveDateTime,
        granularity: Granularity,
    ) -> Vec<Bucket> {
        if min == max {
            return vec![self.bucket_at(min, granularity)];
        }

        let mut buckets = Vec::new();
        let mut current = start_of_day(min.date());

        while current <= max {
            buckets.push(self.bucket_at(current, granularity));
            let next = self.bucket_next(current, granularity);
            if next <= current {
                // calendar overflow at the far end of the representable range
                break;
            }
            current = next;
        }

        if buckets.is_empty() {
            warn!(%min, %max, %granularity, "empty bucket range, emitting fallback bucket");
            buckets.push(self.bucket_at(self.bucket_start(min, granularity), granularity));
        }

        debug!(
            count = buckets.len(),
            %granularity,
            first = %buckets[0].key,
            "generated time buckets"
        );
        buckets
    }

    /// Builds the bucket that starts at `start`.
    pub fn bucket_at(&self, start: NaiveDateTime, granularity: Granularity) -> Bucket {
        Bucket {
            start,
            end: self.bucket_end(start, granularity),
            key: iso_key(start),
        }
    }

    /// First instant of the calendar unit containing `instant`.
    pub fn bucket_start(&self, instant: NaiveDateTime, granularity: Granularity) -> NaiveDateTime {
        let date = instant.date();
        let first = match granularity {
            Granularity::Day => date,
            Granularity::Week => date
                .checked_sub_days(Days::new(self.days_into_week(date)))
                .unwrap_or(date),
            Granularity::Month => date.with_day(1).unwrap_or(date),
            Granularity::Year => first_day_of_year(date),
        };
        start_of_day(first)
    }

    /// Last instant (23:59:59.999) of the calendar unit containing `instant`.
    pub fn bucket_end(&self, instant: NaiveDateTime, granularity: Granularity) -> NaiveDateTime {
        end_of_day(self.last_day_of_unit(instant.date(), granularity))
    }

    /// First instant of the calendar unit following the one containing `instant`.
    ///
    /// For an instant already on a unit boundary this is exactly one unit
    /// later: +1 day, +7 days, +1 month, or +1 year.
    pub fn bucket_next(&self, instant: NaiveDateTime, granularity: Granularity) -> NaiveDateTime {
        let last = self.last_day_of_unit(instant.date(), granularity);
        start_of_day(last.succ_opt().unwrap_or(last))
    }

    fn last_day_of_unit(&self, date: NaiveDate, granularity: Granularity) -> NaiveDate {
        match granularity {
            Granularity::Day => date,
            Granularity::Week => date
                .checked_add_days(Days::new(6 - self.days_into_week(date)))
                .unwrap_or(date),
            Granularity::Month => last_day_of_month(date),
            Granularity::Year => last_day_of_year(date),
        }
    }

    fn days_into_week(&self, date: NaiveDate) -> u64 {
        let day = date.weekday().num_days_from_monday();
        let start = self.week_start.num_days_from_monday();
        u64::from((day + 7 - start) % 7)
    }
}

/// Display label for a bucket.
///
/// `day` → `yyyy-MM-dd`, `week` → `yyyy-MM-dd - yyyy-MM-dd`,
/// `month` → `yyyy-MM`, `year` → `yyyy`.
pub fn format_bucket(bucket: &Bucket, granularity: Granularity) -> String {
    match granularity {
        Granularity::Day => bucket.start.format("%Y-%m-%d").to_string(),
        Granularity::Week => format!(
            "{} - {}",
            bucket.start.format("%Y-%m-%d"),
            bucket.end.format("%Y-%m-%d")
        ),
        Granularity::Month => bucket.start.format("%Y-%m").to_string(),
        Granularity::Year => bucket.start.format("%Y").to_string(),
    }
}

fn iso_key(instant: NaiveDateTime) -> String {
    instant.format("%Y-%m-%dT%H:%M:%S%.3f").to_string()
}

fn last_day_of_month(date: NaiveDate) -> NaiveDate {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|first_of_next| first_of_next.pred_opt())
        .unwrap_or(date)
}
