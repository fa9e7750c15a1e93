use std::collections::HashMap;

use crate::model::{Event, EventHierarchy};

/// Stage label broadcast to runs whose candidate set filtered down to nothing.
pub const UNRESOLVED_STAGE: &str = "unresolved";

/// One chronological row of the job timeline: the classified event enriched
/// with its successor's timestamp, the run's stage, and the derived duration.
#[derive(Clone, Debug)]
pub struct TimelineRow {
    pub event: Event,
    pub hierarchy: EventHierarchy,
    /// `created` of the chronologically next row; `None` on the last row.
    pub next_event: Option<String>,
    pub stage: String,
    /// Whole seconds until the next event, clamped to zero.
    pub duration: u64,
}

/// runId -> representative component, `None` when every candidate was
/// filtered out (the defined "unresolved stage" outcome).
#[derive(Clone, Debug, Default)]
pub struct StageMap {
    entries: HashMap<String, Option<String>>,
}

impl StageMap {
    pub fn insert(&mut self, run_id: String, stage: Option<String>) {
        self.entries.insert(run_id, stage);
    }

    /// Stage label for a run; unknown runs resolve to the unresolved marker
    /// rather than being treated as a lookup fault.
    pub fn label_for(&self, run_id: &str) -> &str {
        match self.entries.get(run_id) {
            Some(Some(stage)) => stage,
            _ => UNRESOLVED_STAGE,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn unresolved_runs(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(|(_, stage)| stage.is_none())
            .map(|(run_id, _)| run_id.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_run_resolves_to_unresolved_marker() {
        let map = StageMap::default();
        assert_eq!(map.label_for("missing"), UNRESOLVED_STAGE);
    }

    #[test]
    fn resolved_and_unresolved_entries() {
        let mut map = StageMap::default();
        map.insert("1".into(), Some("keboola.processor-filter".into()));
        map.insert("2".into(), None);

        assert_eq!(map.label_for("1"), "keboola.processor-filter");
        assert_eq!(map.label_for("2"), UNRESOLVED_STAGE);
        assert_eq!(map.unresolved_runs().collect::<Vec<_>>(), vec!["2"]);
    }
}
