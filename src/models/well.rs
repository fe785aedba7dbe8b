//! Well and event models.
//!
//! A well is the root of the host tree. Each well owns a list of events
//! (workovers, drilling campaigns, shutdowns); each event may carry its
//! own dates, a history of operating states, and attached resources.
//!
//! Field names follow the host JSON (`startDate`, `operating_states`, ...)
//! so documents deserialize without a mapping layer.

use serde::{Deserialize, Serialize};

use super::interval::{IntervalSource, RawInterval};
use super::Resource;

/// A well: the root node of the scheduling grid.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Well {
    /// Unique well identifier.
    pub id: String,
    /// Human-readable name.
    #[serde(default)]
    pub name: String,
    /// Current well state label.
    #[serde(default)]
    pub state: Option<String>,
    /// Events recorded against this well.
    #[serde(default)]
    pub events: Vec<Event>,
}

/// An event on a well's timeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Unique event identifier.
    pub id: String,
    /// Human-readable name.
    #[serde(default)]
    pub name: String,
    /// Optional event kind.
    #[serde(default)]
    pub kind: Option<String>,
    /// Event classification (host-defined).
    #[serde(rename = "type", default)]
    pub event_type: String,
    /// Event start date.
    #[serde(rename = "startDate", default)]
    pub start_date: Option<String>,
    /// Event end date.
    #[serde(rename = "endDate", default)]
    pub end_date: Option<String>,
    /// Attached resources.
    #[serde(default)]
    pub resources: Vec<Resource>,
    /// Operating-state history during the event.
    #[serde(default)]
    pub operating_states: Vec<OperatingState>,
    /// Whether the event stops the well.
    #[serde(default)]
    pub stop_well: bool,
    /// Whether the event shuts the well in.
    #[serde(default)]
    pub shut_well: bool,
}

/// One entry of an event's operating-state history.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OperatingState {
    /// State start date.
    #[serde(rename = "startDate", default)]
    pub start_date: Option<String>,
    /// State end date.
    #[serde(rename = "endDate", default)]
    pub end_date: Option<String>,
    /// State label.
    #[serde(default)]
    pub state: Option<String>,
}

impl Well {
    /// Creates a new well.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    /// Sets the well name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the well state.
    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    /// Appends an event.
    pub fn with_event(mut self, event: Event) -> Self {
        self.events.push(event);
        self
    }
}

impl Event {
    /// Creates a new event.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    /// Sets the event name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the event type.
    pub fn with_type(mut self, event_type: impl Into<String>) -> Self {
        self.event_type = event_type.into();
        self
    }

    /// Sets the event's dates.
    pub fn with_dates(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.start_date = Some(start.into());
        self.end_date = Some(end.into());
        self
    }

    /// Appends a resource.
    pub fn with_resource(mut self, resource: Resource) -> Self {
        self.resources.push(resource);
        self
    }

    /// Appends an operating state.
    pub fn with_operating_state(mut self, state: OperatingState) -> Self {
        self.operating_states.push(state);
        self
    }

    /// The event's own interval as supplied.
    pub fn interval(&self) -> RawInterval<'_> {
        RawInterval::new(self.start_date.as_deref(), self.end_date.as_deref())
    }
}

impl OperatingState {
    /// Creates an operating state spanning `start..=end`.
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start_date: Some(start.into()),
            end_date: Some(end.into()),
            state: None,
        }
    }

    /// Sets the state label.
    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    /// The state's interval as supplied.
    pub fn interval(&self) -> RawInterval<'_> {
        RawInterval::new(self.start_date.as_deref(), self.end_date.as_deref())
    }
}

impl IntervalSource for OperatingState {
    fn collect_intervals<'a>(&'a self, out: &mut Vec<RawInterval<'a>>) {
        out.push(self.interval());
    }
}

impl IntervalSource for Event {
    fn collect_intervals<'a>(&'a self, out: &mut Vec<RawInterval<'a>>) {
        self.operating_states.collect_intervals(out);
        out.push(self.interval());
        self.resources.collect_intervals(out);
    }
}

impl IntervalSource for Well {
    fn collect_intervals<'a>(&'a self, out: &mut Vec<RawInterval<'a>>) {
        self.events.collect_intervals(out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Operation;

    #[test]
    fn test_well_builder() {
        let well = Well::new("W1")
            .with_name("Well 1")
            .with_state("producing")
            .with_event(Event::new("E1").with_type("workover"));

        assert_eq!(well.id, "W1");
        assert_eq!(well.state.as_deref(), Some("producing"));
        assert_eq!(well.events[0].event_type, "workover");
    }

    #[test]
    fn test_event_collects_nested_intervals() {
        let event = Event::new("E1")
            .with_dates("2024-03-01", "2024-03-10")
            .with_operating_state(OperatingState::new("2024-02-20", "2024-03-01"))
            .with_resource(
                crate::models::Resource::new("R1")
                    .with_operation(Operation::new("O1").with_dates("2024-03-02", "2024-03-04")),
            );

        let mut out = Vec::new();
        event.collect_intervals(&mut out);
        // state, event, resource own (empty), op span, op
        assert_eq!(out.len(), 5);
        assert_eq!(out[0], RawInterval::between("2024-02-20", "2024-03-01"));
        assert_eq!(out[1], RawInterval::between("2024-03-01", "2024-03-10"));
        assert_eq!(out[2], RawInterval::default());
    }

    #[test]
    fn test_deserialize_host_document() {
        let json = r#"[{
            "id": "W1",
            "name": "North-12",
            "state": null,
            "events": [{
                "id": "E1",
                "name": "Workover",
                "type": "repair",
                "startDate": "2024-01-01",
                "endDate": null,
                "resources": [],
                "operating_states": [
                    {"startDate": "2024-01-01", "endDate": "2024-01-05", "state": "down"}
                ],
                "stop_well": true,
                "shut_well": false
            }]
        }]"#;

        let wells: Vec<Well> = serde_json::from_str(json).unwrap();
        let event = &wells[0].events[0];
        assert!(wells[0].state.is_none());
        assert_eq!(event.event_type, "repair");
        assert!(event.end_date.is_none());
        assert!(event.stop_well);
        assert_eq!(event.operating_states[0].state.as_deref(), Some("down"));
    }

    #[test]
    fn test_deserialize_minimal_event() {
        let event: Event = serde_json::from_str(r#"{"id": "E9"}"#).unwrap();
        assert!(event.resources.is_empty());
        assert!(event.operating_states.is_empty());
        assert!(!event.shut_well);
    }
}
