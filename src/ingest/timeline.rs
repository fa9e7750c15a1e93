use tracing::warn;

use crate::model::{Event, EventHierarchy, StageMap, TimelineRow};

/// Components that mark generic infrastructure work rather than the task a
/// run exists for; filtered out when picking a run's stage.
const STAGE_FILTER: [&str; 2] = ["docker", "storage"];

/// Turn the retrieved event collection (newest-first, as the API returns it)
/// into chronological timeline rows with `next_event` boundaries and a stage
/// label broadcast per run. Durations are derived in a later pass.
pub fn build_rows(events: Vec<Event>, hierarchy: Vec<EventHierarchy>) -> (Vec<TimelineRow>, StageMap) {
    let mut pairs: Vec<(Event, EventHierarchy)> = events.into_iter().zip(hierarchy).collect();
    pairs.reverse();

    let stages = resolve_stages(pairs.iter().map(|(ev, _)| ev));

    let next_events: Vec<Option<String>> = (0..pairs.len())
        .map(|i| pairs.get(i + 1).map(|(ev, _)| ev.created.clone()))
        .collect();

    let rows = pairs
        .into_iter()
        .zip(next_events)
        .map(|((event, hierarchy), next_event)| {
            let stage = stages.label_for(&event.run_id).to_string();
            TimelineRow {
                event,
                hierarchy,
                next_event,
                stage,
                duration: 0,
            }
        })
        .collect();

    (rows, stages)
}

/// For every distinct run, the first distinct component (in order of first
/// appearance) that isn't a generic infrastructure marker. A run whose
/// candidates all get filtered away is recorded as unresolved instead of
/// indexing into an empty list.
fn resolve_stages<'a>(events: impl Iterator<Item = &'a Event>) -> StageMap {
    let mut run_order: Vec<String> = Vec::new();
    let mut components: Vec<Vec<String>> = Vec::new();

    for event in events {
        let idx = match run_order.iter().position(|r| r == &event.run_id) {
            Some(idx) => idx,
            None => {
                run_order.push(event.run_id.clone());
                components.push(Vec::new());
                run_order.len() - 1
            }
        };
        if !components[idx].iter().any(|c| c == &event.component) {
            components[idx].push(event.component.clone());
        }
    }

    let mut stages = StageMap::default();
    for (run_id, candidates) in run_order.into_iter().zip(components) {
        let stage = candidates
            .into_iter()
            .find(|c| !STAGE_FILTER.iter().any(|f| c.contains(f)));
        if stage.is_none() {
            warn!(%run_id, "no stage candidate left after filtering");
        }
        stages.insert(run_id, stage);
    }
    stages
}
