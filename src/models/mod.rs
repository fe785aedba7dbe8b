//! Time-grid domain models.
//!
//! Provides the host tree the grid is drawn from and the primitive
//! date types the timeline engine works with.
//!
//! # Tree Shape
//!
//! | Level | Type | Dates carried |
//! |-------|------|---------------|
//! | 1 | `Well` | none (container) |
//! | 2 | `Event` | own span, operating-state history |
//! | 3 | `Resource` | own span, first-to-last operation span |
//! | 4 | `Operation` | own span (or start only) |
//!
//! Every level implements [`IntervalSource`], so the scanner accepts a
//! single node, a slice of nodes, or a bare list of [`RawInterval`]s.

mod granularity;
pub mod interval;
mod resource;
mod well;

pub use granularity::Granularity;
pub use interval::{DateInterval, IntervalSource, RawInterval};
pub use resource::{Operation, Resource};
pub use well::{Event, OperatingState, Well};
