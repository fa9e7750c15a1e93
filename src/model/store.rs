use crate::model::TimelineRow;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RowId(pub usize);

/// Chronologically ordered timeline rows with stable ids for UI selection.
#[derive(Default)]
pub struct RowStore {
    rows: Vec<TimelineRow>,
}

impl RowStore {
    pub fn from_rows(rows: Vec<TimelineRow>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (RowId, &TimelineRow)> {
        self.rows.iter().enumerate().map(|(i, r)| (RowId(i), r))
    }

    pub fn get(&self, id: RowId) -> Option<&TimelineRow> {
        self.rows.get(id.0)
    }

    pub fn first_id(&self) -> Option<RowId> {
        if self.rows.is_empty() {
            None
        } else {
            Some(RowId(0))
        }
    }

    /// Distinct stage labels in order of first appearance; one Gantt lane each.
    pub fn stage_lanes(&self) -> Vec<String> {
        let mut lanes: Vec<String> = Vec::new();
        for row in &self.rows {
            if !lanes.iter().any(|l| l == &row.stage) {
                lanes.push(row.stage.clone());
            }
        }
        lanes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Event, EventHierarchy};

    fn row(stage: &str) -> TimelineRow {
        TimelineRow {
            event: Event::default(),
            hierarchy: EventHierarchy::Job,
            next_event: None,
            stage: stage.into(),
            duration: 0,
        }
    }

    #[test]
    fn empty_store_has_no_first_id() {
        let store = RowStore::default();
        assert!(store.is_empty());
        assert!(store.first_id().is_none());
        assert!(store.stage_lanes().is_empty());
    }

    #[test]
    fn lanes_preserve_first_appearance_order() {
        let store = RowStore::from_rows(vec![row("b"), row("a"), row("b"), row("c")]);
        assert_eq!(store.stage_lanes(), vec!["b", "a", "c"]);
        assert_eq!(store.first_id(), Some(RowId(0)));
        assert_eq!(store.get(RowId(3)).unwrap().stage, "c");
    }
}
