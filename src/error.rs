//! Error types for u-timegrid.
//!
//! Only contract violations are reported here. Ordinary data variance
//! (unparsable dates in the source tree, navigation past the grid edge,
//! short or long paste buffers) is absorbed by the engine and never
//! becomes an error.

use thiserror::Error;

/// Result type for u-timegrid operations.
pub type Result<T> = std::result::Result<T, GridError>;

/// Errors raised by invalid invocations of the grid core.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// A selection model was constructed with an empty axis.
    #[error("Invalid grid dimensions: {rows} rows x {cols} cols")]
    InvalidDimensions { rows: usize, cols: usize },

    /// Autofill was asked to extrapolate from an empty date list.
    #[error("Autofill requires at least one source date")]
    EmptyAutofillSource,

    /// A date string could not be parsed as `yyyy-MM-dd`.
    #[error("Invalid date: {0}")]
    InvalidDate(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let e = GridError::InvalidDimensions { rows: 0, cols: 3 };
        assert_eq!(e.to_string(), "Invalid grid dimensions: 0 rows x 3 cols");

        let e = GridError::InvalidDate("2024-13-01".into());
        assert!(e.to_string().contains("2024-13-01"));
    }
}
