use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::{Event, EventHierarchy};

static ORCH_START: Lazy<Regex> = Lazy::new(|| Regex::new(r"Orchestration job \w+ start").unwrap());
static ORCH_END: Lazy<Regex> = Lazy::new(|| Regex::new(r"Orchestration job \w+ end").unwrap());
static ORCH_SCHEDULED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Orchestration job \w+ scheduled").unwrap());
static CLONING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Cloning ([1-9][0-9]{0,2}|1000) \w+ to workspace").unwrap());

/// First-match-wins decision list. The rules overlap (a message can satisfy
/// several), so their order is observable behavior — do not reorder.
fn classify_event(event: &Event) -> EventHierarchy {
    if ORCH_START.is_match(&event.message) {
        return EventHierarchy::Orchestration;
    }
    if ORCH_END.is_match(&event.message) {
        return EventHierarchy::Orchestration;
    }
    if ORCH_SCHEDULED.is_match(&event.message) {
        return EventHierarchy::OrchestrationState;
    }
    if event.message.contains("Component") {
        return EventHierarchy::ComponentStatus;
    }
    if event.message.contains("Job") {
        return EventHierarchy::Job;
    }
    if CLONING.is_match(&event.message) {
        return EventHierarchy::Storage;
    }
    if event.component.contains("storage") {
        return EventHierarchy::Storage;
    }
    if event.message.contains("Running component") {
        return EventHierarchy::Component;
    }
    if event.message.contains("Using component tag:") {
        return EventHierarchy::ComponentStat;
    }
    EventHierarchy::Derived(parse_component(&event.component))
}

/// Fallback label for events no rule matched: drop the vendor prefix of the
/// component name and join the remaining segments with `_`
/// (`keboola.ex-db-mysql` -> `ex_db_mysql`). A name with no separator at all
/// yields the empty string.
fn parse_component(component: &str) -> String {
    let segments: Vec<&str> = component.split(['-', '.']).collect();
    if segments.len() > 1 {
        segments[1..].join("_")
    } else {
        String::new()
    }
}

pub fn classify(events: &[Event]) -> Vec<EventHierarchy> {
    events.iter().map(classify_event).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(message: &str, component: &str) -> Event {
        Event {
            created: "2024-01-01T10:00:00+00:00".into(),
            message: message.into(),
            component: component.into(),
            run_id: "1".into(),
        }
    }

    #[test]
    fn orchestration_lifecycle_messages() {
        assert_eq!(
            classify_event(&event("Orchestration job abc123 start", "")),
            EventHierarchy::Orchestration
        );
        assert_eq!(
            classify_event(&event("Orchestration job abc123 end", "")),
            EventHierarchy::Orchestration
        );
        assert_eq!(
            classify_event(&event("Orchestration job abc123 scheduled", "")),
            EventHierarchy::OrchestrationState
        );
    }

    #[test]
    fn running_component_classifies_as_component() {
        // "Running component extractor" contains no capital-C "Component",
        // so it falls through to the running-component rule.
        assert_eq!(
            classify_event(&event("Running component extractor", "keboola.ex-db-mysql")),
            EventHierarchy::Component
        );
    }

    #[test]
    fn component_status_wins_over_later_rules() {
        // Matches both the "Component" and "Job" substring rules; the earlier
        // rule decides.
        assert_eq!(
            classify_event(&event("Component finished processing Job 42", "storage")),
            EventHierarchy::ComponentStatus
        );
    }

    #[test]
    fn storage_by_message_and_by_component() {
        assert_eq!(
            classify_event(&event("Cloning 42 tables to workspace", "")),
            EventHierarchy::Storage
        );
        assert_eq!(
            classify_event(&event("Cloning 1000 tables to workspace", "")),
            EventHierarchy::Storage
        );
        // Counts outside 1..=1000 don't match the cloning rule.
        assert_eq!(
            classify_event(&event("Cloning 0 tables to workspace", "")),
            EventHierarchy::Derived(String::new())
        );
        assert_eq!(
            classify_event(&event("table imported", "storage")),
            EventHierarchy::Storage
        );
    }

    #[test]
    fn component_tag_messages() {
        assert_eq!(
            classify_event(&event("Using component tag: 1.2.3", "")),
            EventHierarchy::ComponentStat
        );
    }

    #[test]
    fn fallback_joins_suffix_segments() {
        assert_eq!(
            classify_event(&event("no rule matches this", "keboola.ex-db-mysql")),
            EventHierarchy::Derived("ex_db_mysql".into())
        );
    }

    #[test]
    fn fallback_without_separator_is_empty() {
        assert_eq!(
            classify_event(&event("no rule matches this", "docker")),
            EventHierarchy::Derived(String::new())
        );
    }

    #[test]
    fn classify_assigns_exactly_one_label_per_event() {
        let events = vec![
            event("Orchestration job x start", ""),
            event("unmatched", "keboola.processor-filter"),
        ];
        let labels = classify(&events);
        assert_eq!(labels.len(), events.len());
        assert_eq!(labels[0], EventHierarchy::Orchestration);
        assert_eq!(labels[1], EventHierarchy::Derived("processor_filter".into()));
    }
}
