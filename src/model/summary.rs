use time::PrimitiveDateTime;

use crate::util::time::{clock_string, span_string};

/// Headline numbers shown after a gather completes. Everything is optional so
/// an empty dataset reports zeros instead of raising.
#[derive(Clone, Debug, Default)]
pub struct JobSummary {
    pub event_count: usize,
    pub task_count: usize,
    pub start: Option<PrimitiveDateTime>,
    pub end: Option<PrimitiveDateTime>,
}

impl JobSummary {
    pub fn start_clock(&self) -> Option<String> {
        self.start.map(clock_string)
    }

    pub fn end_clock(&self) -> Option<String> {
        self.end.map(clock_string)
    }

    pub fn duration_string(&self) -> Option<String> {
        match (self.start, self.end) {
            (Some(start), Some(end)) => Some(span_string(start, end)),
            _ => None,
        }
    }

    pub fn pretty(&self) -> String {
        let mut lines = Vec::new();

        lines.push(format!("Events: {}", self.event_count));
        lines.push(format!("Tasks: {}", self.task_count));
        if let Some(start) = self.start_clock() {
            lines.push(format!("Job start: {start}"));
        }
        if let Some(end) = self.end_clock() {
            lines.push(format!("Job end: {end}"));
        }
        if let Some(dur) = self.duration_string() {
            lines.push(format!("Job duration: {dur}"));
        }

        if self.event_count == 0 {
            "<no events>".into()
        } else {
            lines.join("\n")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::time::parse_event_timestamp;

    #[test]
    fn empty_summary_reports_no_events() {
        let summary = JobSummary::default();
        assert_eq!(summary.pretty(), "<no events>");
        assert!(summary.duration_string().is_none());
    }

    #[test]
    fn pretty_includes_clock_times_and_span() {
        let summary = JobSummary {
            event_count: 12,
            task_count: 3,
            start: parse_event_timestamp("2024-01-01T10:00:00"),
            end: parse_event_timestamp("2024-01-01T10:05:30"),
        };
        let text = summary.pretty();
        assert!(text.contains("Events: 12"));
        assert!(text.contains("Job start: 10:00:00"));
        assert!(text.contains("Job duration: 0:05:30"));
    }
}
