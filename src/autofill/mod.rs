//! Date-pattern autofill.
//!
//! Infers a uniform step (day, week, month, year) from a partial run of
//! `yyyy-MM-dd` dates and extrapolates further entries. The output is
//! typically written back into the grid through
//! [`SelectionModel::set_selected_values`](crate::selection::SelectionModel::set_selected_values).
//!
//! # Step Model
//! Steps are fixed durations (1, 7, 30, 365 days), both for detection and
//! for extrapolation. This is an approximation of calendar months and
//! years and differs from the calendar-aware stepping of
//! [`BucketGenerator`](crate::timeline::BucketGenerator).

mod fill;
mod pattern;

pub use fill::{autofill_dates, generate_next_dates};
pub use pattern::{detect_pattern, step_days};
