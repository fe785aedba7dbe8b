//! Resource model.
//!
//! Resources are the crews, rigs, and equipment attached to a well event.
//! A resource may carry its own date span and an ordered list of
//! operations (stages) it performs.

use serde::{Deserialize, Serialize};

use super::interval::{IntervalSource, RawInterval};

/// A resource attached to an event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    /// Unique resource identifier.
    pub id: String,
    /// Human-readable name.
    #[serde(default)]
    pub name: String,
    /// Resource classification (host-defined).
    #[serde(rename = "type", default)]
    pub resource_type: String,
    /// Resource start date.
    #[serde(rename = "startDate", default)]
    pub start_date: Option<String>,
    /// Resource end date.
    #[serde(rename = "endDate", default)]
    pub end_date: Option<String>,
    /// Operations in execution order.
    #[serde(default, alias = "stages")]
    pub operations: Vec<Operation>,
}

/// A single operation (stage) performed by a resource.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    /// Unique operation identifier.
    pub id: String,
    /// Human-readable name.
    #[serde(default)]
    pub name: String,
    /// Operation start date.
    #[serde(rename = "startDate", default)]
    pub start_date: Option<String>,
    /// Operation end date. Point operations leave this empty.
    #[serde(rename = "endDate", default)]
    pub end_date: Option<String>,
}

impl Resource {
    /// Creates a new resource.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    /// Sets the resource name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the resource type.
    pub fn with_type(mut self, resource_type: impl Into<String>) -> Self {
        self.resource_type = resource_type.into();
        self
    }

    /// Sets the resource's own date span.
    pub fn with_dates(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.start_date = Some(start.into());
        self.end_date = Some(end.into());
        self
    }

    /// Appends an operation.
    pub fn with_operation(mut self, operation: Operation) -> Self {
        self.operations.push(operation);
        self
    }

    /// Span from the first operation's start to the last operation's end.
    ///
    /// Returns `None` when the resource has no operations.
    pub fn operations_span(&self) -> Option<RawInterval<'_>> {
        let first = self.operations.first()?;
        let last = self.operations.last()?;
        Some(RawInterval::new(
            first.start_date.as_deref(),
            last.end_date.as_deref(),
        ))
    }
}

impl Operation {
    /// Creates a new operation.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    /// Sets the operation name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the start date.
    pub fn with_start(mut self, start: impl Into<String>) -> Self {
        self.start_date = Some(start.into());
        self
    }

    /// Sets the end date.
    pub fn with_end(mut self, end: impl Into<String>) -> Self {
        self.end_date = Some(end.into());
        self
    }

    /// Sets both dates.
    pub fn with_dates(self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.with_start(start).with_end(end)
    }

    /// The operation's interval as supplied.
    pub fn interval(&self) -> RawInterval<'_> {
        RawInterval::new(self.start_date.as_deref(), self.end_date.as_deref())
    }
}

impl IntervalSource for Operation {
    fn collect_intervals<'a>(&'a self, out: &mut Vec<RawInterval<'a>>) {
        out.push(self.interval());
    }
}

impl IntervalSource for Resource {
    fn collect_intervals<'a>(&'a self, out: &mut Vec<RawInterval<'a>>) {
        out.push(RawInterval::new(
            self.start_date.as_deref(),
            self.end_date.as_deref(),
        ));
        if let Some(span) = self.operations_span() {
            out.push(span);
        }
        self.operations.collect_intervals(out);
    }
}
