//! Time-grid core for the U-Engine ecosystem.
//!
//! Provides the engine behind a hierarchical scheduling grid
//! (wells → events → resources → operations) drawn against a time axis.
//! Rendering, locale formatting, and persistence belong to the host;
//! this crate owns the algorithms.
//!
//! # Modules
//!
//! - **`models`**: Host tree types (`Well`, `Event`, `Resource`,
//!   `Operation`, `OperatingState`), `Granularity`, and the
//!   `DateInterval` / `IntervalSource` primitives
//! - **`timeline`**: Span scanning and calendar bucket generation
//! - **`autofill`**: Uniform-step detection and date extrapolation
//! - **`selection`**: Rectangular cell selection and bulk cell I/O
//! - **`expansion`**: Per-grid expand/collapse row state
//! - **`validation`**: Input integrity checks (duplicate IDs, bad dates,
//!   operating-state contiguity)
//!
//! # Architecture
//!
//! Everything is synchronous and single-threaded. Timeline functions are
//! pure: the host recomputes them when its data or granularity changes.
//! Interaction state (`SelectionModel`, `ExpansionStore`) is owned by
//! each grid instance; there are no process-wide singletons.

pub mod autofill;
pub mod error;
pub mod expansion;
pub mod models;
pub mod selection;
pub mod timeline;
pub mod validation;

pub use error::{GridError, Result};
