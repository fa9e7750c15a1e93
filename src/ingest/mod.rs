mod classify;
mod duration;
mod fetch;
mod timeline;

use anyhow::Result;
use tracing::info;

use crate::model::{JobSummary, RowStore, StageMap};
use crate::settings::Settings;
use crate::util::time::parse_event_timestamp;

pub struct JobDataset {
    pub job_id: String,
    pub rows: RowStore,
    pub stages: StageMap,
    pub summary: JobSummary,
    /// Operator-visible progress lines, one per page plus any diagnostics.
    pub fetch_log: Vec<String>,
    /// Diagnostic from a terminated pagination; the rows above are partial.
    pub fetch_error: Option<String>,
}

/// Run the whole pipeline for one settings record:
/// fetch -> classify -> timeline -> durations.
///
/// Fetch failures surface as `fetch_error` alongside whatever was
/// accumulated; an empty result is a valid dataset, not an error.
pub fn gather(settings: &Settings) -> Result<JobDataset> {
    let mut fetch_log = Vec::new();
    let outcome = fetch::fetch_events(settings, &mut fetch_log);
    let fetch_error = outcome.error.map(|e| e.to_string());

    let hierarchy = classify::classify(&outcome.events);
    let (mut rows, stages) = timeline::build_rows(outcome.events, hierarchy);
    duration::derive_durations(&mut rows);

    for run_id in stages.unresolved_runs() {
        fetch_log.push(format!("run {run_id}: unresolved stage"));
    }

    let summary = summarize(&rows, &stages);
    info!("job {}: {}", settings.job_id, summary.pretty().replace('\n', ", "));

    Ok(JobDataset {
        job_id: settings.job_id.clone(),
        rows: RowStore::from_rows(rows),
        stages,
        summary,
        fetch_log,
        fetch_error,
    })
}

fn summarize(rows: &[crate::model::TimelineRow], stages: &StageMap) -> JobSummary {
    let timestamps = rows
        .iter()
        .filter_map(|r| parse_event_timestamp(&r.event.created));

    let mut start = None;
    let mut end = None;
    for ts in timestamps {
        start = Some(match start {
            None => ts,
            Some(prev) if ts < prev => ts,
            Some(prev) => prev,
        });
        end = Some(match end {
            None => ts,
            Some(prev) if ts > prev => ts,
            Some(prev) => prev,
        });
    }

    JobSummary {
        event_count: rows.len(),
        task_count: stages.len(),
        start,
        end,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Event, EventHierarchy, TimelineRow};

    fn row(created: &str, run_id: &str) -> TimelineRow {
        TimelineRow {
            event: Event {
                created: created.into(),
                run_id: run_id.into(),
                ..Event::default()
            },
            hierarchy: EventHierarchy::Job,
            next_event: None,
            stage: "s".into(),
            duration: 0,
        }
    }

    #[test]
    fn summary_spans_min_to_max_created() {
        let mut stages = StageMap::default();
        stages.insert("1".into(), Some("a".into()));
        stages.insert("2".into(), Some("b".into()));

        let rows = vec![
            row("2024-01-01T10:00:00+00:00", "1"),
            row("2024-01-01T10:05:30+00:00", "2"),
            row("not a timestamp", "2"),
        ];
        let summary = summarize(&rows, &stages);

        assert_eq!(summary.event_count, 3);
        assert_eq!(summary.task_count, 2);
        assert_eq!(summary.start_clock().unwrap(), "10:00:00");
        assert_eq!(summary.end_clock().unwrap(), "10:05:30");
        assert_eq!(summary.duration_string().unwrap(), "0:05:30");
    }

    #[test]
    fn empty_rows_summarize_without_error() {
        let summary = summarize(&[], &StageMap::default());
        assert_eq!(summary.event_count, 0);
        assert!(summary.start.is_none());
        assert!(summary.duration_string().is_none());
    }
}
