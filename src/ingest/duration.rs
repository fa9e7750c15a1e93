use tracing::warn;

use crate::model::TimelineRow;
use crate::util::time::parse_event_timestamp;

/// Fill in each row's `duration` as the whole seconds to its `next_event`.
///
/// Missing boundaries, unparseable timestamps, and negative intervals (clock
/// skew between event sources can produce them) all clamp to 0; the last
/// chronological row has no boundary and stays 0 by the same rule.
pub fn derive_durations(rows: &mut [TimelineRow]) {
    let mut parse_failures = 0usize;

    for row in rows.iter_mut() {
        row.duration = match &row.next_event {
            None => 0,
            Some(next) => {
                match (
                    parse_event_timestamp(&row.event.created),
                    parse_event_timestamp(next),
                ) {
                    (Some(start), Some(end)) => (end - start).whole_seconds().max(0) as u64,
                    _ => {
                        parse_failures += 1;
                        0
                    }
                }
            }
        };
    }

    if parse_failures > 0 {
        warn!(parse_failures, "could not parse datetime properly (duration)");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Event, EventHierarchy};

    fn row(created: &str, next_event: Option<&str>) -> TimelineRow {
        TimelineRow {
            event: Event {
                created: created.into(),
                ..Event::default()
            },
            hierarchy: EventHierarchy::Job,
            next_event: next_event.map(str::to_string),
            stage: "s".into(),
            duration: 0,
        }
    }

    #[test]
    fn duration_is_gap_to_next_event() {
        let mut rows = vec![
            row("2024-01-01T10:00:00.000Z", Some("2024-01-01T10:00:05.000Z")),
            row("2024-01-01T10:00:05.000Z", None),
        ];
        derive_durations(&mut rows);
        assert_eq!(rows[0].duration, 5);
        assert_eq!(rows[1].duration, 0);
    }

    #[test]
    fn last_row_always_zero() {
        let mut rows = vec![row("2024-01-01T10:00:00+00:00", None)];
        derive_durations(&mut rows);
        assert_eq!(rows[0].duration, 0);
    }

    #[test]
    fn negative_interval_clamps_to_zero() {
        let mut rows = vec![row(
            "2024-01-01T10:00:10+00:00",
            Some("2024-01-01T10:00:00+00:00"),
        )];
        derive_durations(&mut rows);
        assert_eq!(rows[0].duration, 0);
    }

    #[test]
    fn unparseable_timestamps_default_to_zero() {
        let mut rows = vec![
            row("garbage", Some("2024-01-01T10:00:00+00:00")),
            row("2024-01-01T10:00:00+00:00", Some("also garbage")),
        ];
        derive_durations(&mut rows);
        assert_eq!(rows[0].duration, 0);
        assert_eq!(rows[1].duration, 0);
    }

    #[test]
    fn fractional_seconds_truncate_before_subtraction() {
        let mut rows = vec![row(
            "2024-01-01T10:00:00.900Z",
            Some("2024-01-01T10:00:02.100Z"),
        )];
        derive_durations(&mut rows);
        assert_eq!(rows[0].duration, 2);
    }
}
