//! Input validation for well data.
//!
//! Checks structural integrity of the host tree before it is drawn.
//! Detects:
//! - Duplicate well, event, and resource IDs
//! - Dates that are present but unparsable
//! - Intervals that end before they start
//! - Operating-state histories with gaps or overlaps
//!
//! None of these checks gate the timeline engine, which tolerates every
//! one of them. They exist so a host can report bad data to its users.

use chrono::NaiveDate;
use std::collections::HashSet;

use crate::models::interval::parse_instant;
use crate::models::{DateInterval, OperatingState, RawInterval, Well};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities of the same level share an ID.
    DuplicateId,
    /// A date string is present but cannot be parsed.
    MalformedDate,
    /// An interval ends before it starts.
    ReversedInterval,
    /// Sorted operating states do not chain end-to-start.
    NonContiguousOperatingStates,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Whether an operating-state history is contiguous.
///
/// States are sorted by start; each state's end day must equal the next
/// state's start day. Empty and single-entry histories are contiguous.
/// Any state with a missing or unparsable endpoint makes the history
/// non-contiguous.
pub fn validate_operating_states(states: &[OperatingState]) -> bool {
    let mut days: Vec<(NaiveDate, NaiveDate)> = Vec::with_capacity(states.len());
    for state in states {
        match DateInterval::parse(&state.interval()) {
            Some(iv) => days.push((iv.start.date(), iv.end.date())),
            None => return false,
        }
    }

    days.sort_by_key(|(start, _)| *start);
    days.windows(2).all(|w| w[0].1 == w[1].0)
}

/// Validates a set of wells.
///
/// Checks:
/// 1. No duplicate well IDs
/// 2. No duplicate event IDs (across all wells)
/// 3. No duplicate resource IDs within an event
/// 4. Every present date parses
/// 5. No interval ends before it starts
/// 6. Every event's operating states are contiguous
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_wells(wells: &[Well]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut well_ids = HashSet::new();
    let mut event_ids = HashSet::new();

    for well in wells {
        if !well_ids.insert(well.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate well ID: {}", well.id),
            ));
        }

        for event in &well.events {
            if !event_ids.insert(event.id.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::DuplicateId,
                    format!("Duplicate event ID: {}", event.id),
                ));
            }

            check_interval(&event.interval(), &format!("Event '{}'", event.id), &mut errors);

            for (i, state) in event.operating_states.iter().enumerate() {
                check_interval(
                    &state.interval(),
                    &format!("Operating state #{i} of event '{}'", event.id),
                    &mut errors,
                );
            }

            if !validate_operating_states(&event.operating_states) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::NonContiguousOperatingStates,
                    format!("Event '{}' has non-contiguous operating states", event.id),
                ));
            }

            let mut resource_ids = HashSet::new();
            for resource in &event.resources {
                if !resource_ids.insert(resource.id.as_str()) {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::DuplicateId,
                        format!(
                            "Duplicate resource ID '{}' in event '{}'",
                            resource.id, event.id
                        ),
                    ));
                }

                check_interval(
                    &RawInterval::new(resource.start_date.as_deref(), resource.end_date.as_deref()),
                    &format!("Resource '{}'", resource.id),
                    &mut errors,
                );

                for op in &resource.operations {
                    check_interval(&op.interval(), &format!("Operation '{}'", op.id), &mut errors);
                }
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_interval(raw: &RawInterval<'_>, owner: &str, errors: &mut Vec<ValidationError>) {
    let mut malformed = false;
    for value in [raw.start, raw.end].into_iter().flatten() {
        if !value.trim().is_empty() && parse_instant(value).is_none() {
            malformed = true;
            errors.push(ValidationError::new(
                ValidationErrorKind::MalformedDate,
                format!("{owner} has malformed date '{value}'"),
            ));
        }
    }

    if malformed {
        return;
    }

    if let Some(iv) = DateInterval::parse(raw) {
        if iv.is_reversed() {
            errors.push(ValidationError::new(
                ValidationErrorKind::ReversedInterval,
                format!("{owner} ends before it starts"),
            ));
        }
    }
}
