//! Expand/collapse state for event and resource rows.
//!
//! Each grid instance owns its own store. Collapsing an event also
//! collapses every expanded resource, since resource rows are only
//! reachable through an expanded event.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Expanded row ids for one grid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpansionStore {
    expanded_events: HashSet<String>,
    expanded_resources: HashSet<String>,
}

impl ExpansionStore {
    /// Creates a store with everything collapsed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggles an event row. Collapsing clears all expanded resources.
    pub fn toggle_event(&mut self, event_id: &str) {
        if self.expanded_events.remove(event_id) {
            self.expanded_resources.clear();
        } else {
            self.expanded_events.insert(event_id.to_string());
        }
    }

    /// Toggles a resource row.
    pub fn toggle_resource(&mut self, resource_id: &str) {
        if !self.expanded_resources.remove(resource_id) {
            self.expanded_resources.insert(resource_id.to_string());
        }
    }

    /// Whether an event row is expanded.
    pub fn is_event_expanded(&self, event_id: &str) -> bool {
        self.expanded_events.contains(event_id)
    }

    /// Whether a resource row is expanded.
    pub fn is_resource_expanded(&self, resource_id: &str) -> bool {
        self.expanded_resources.contains(resource_id)
    }

    /// Ids of expanded events.
    pub fn expanded_events(&self) -> &HashSet<String> {
        &self.expanded_events
    }

    /// Ids of expanded resources.
    pub fn expanded_resources(&self) -> &HashSet<String> {
        &self.expanded_resources
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_event() {
        let mut store = ExpansionStore::new();
        store.toggle_event("E1");
        assert!(store.is_event_expanded("E1"));
        store.toggle_event("E1");
        assert!(!store.is_event_expanded("E1"));
    }

    #[test]
    fn test_collapsing_event_collapses_resources() {
        let mut store = ExpansionStore::new();
        store.toggle_event("E1");
        store.toggle_event("E2");
        store.toggle_resource("R1");
        store.toggle_resource("R2");
        assert_eq!(store.expanded_resources().len(), 2);

        store.toggle_event("E1");
        assert!(store.expanded_resources().is_empty());
        assert!(store.is_event_expanded("E2"));
    }

    #[test]
    fn test_toggle_resource_independent() {
        let mut store = ExpansionStore::new();
        store.toggle_resource("R1");
        store.toggle_resource("R2");
        store.toggle_resource("R1");
        assert!(!store.is_resource_expanded("R1"));
        assert!(store.is_resource_expanded("R2"));
    }

    #[test]
    fn test_stores_are_independent() {
        let mut a = ExpansionStore::new();
        let b = ExpansionStore::new();
        a.toggle_event("E1");
        assert!(!b.is_event_expanded("E1"));
    }
}
