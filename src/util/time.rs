use time::format_description::FormatItem;
use time::macros::format_description;
use time::PrimitiveDateTime;

const EVENT_TIMESTAMP: &[FormatItem<'static>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");

/// Parse an event timestamp down to whole-second precision.
///
/// The API emits ISO-8601 with fractional seconds and a timezone suffix; only
/// the first 19 characters are significant here. Anything without a valid
/// prefix yields `None` rather than an error.
pub fn parse_event_timestamp(raw: &str) -> Option<PrimitiveDateTime> {
    let prefix = raw.get(..19)?;
    PrimitiveDateTime::parse(prefix, EVENT_TIMESTAMP).ok()
}

pub fn clock_string(ts: PrimitiveDateTime) -> String {
    format!("{:02}:{:02}:{:02}", ts.hour(), ts.minute(), ts.second())
}

/// Format a span between two timestamps as H:MM:SS.
pub fn span_string(start: PrimitiveDateTime, end: PrimitiveDateTime) -> String {
    let secs = (end - start).whole_seconds().max(0);
    format!("{}:{:02}:{:02}", secs / 3600, (secs % 3600) / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_iso_timestamp_with_suffix() {
        let ts = parse_event_timestamp("2024-01-01T10:00:05.000Z").unwrap();
        assert_eq!(ts.hour(), 10);
        assert_eq!(ts.second(), 5);
    }

    #[test]
    fn parses_timestamp_without_timezone() {
        assert!(parse_event_timestamp("2024-01-01T10:00:05").is_some());
    }

    #[test]
    fn rejects_short_or_garbage_input() {
        assert!(parse_event_timestamp("").is_none());
        assert!(parse_event_timestamp("2024-01-01").is_none());
        assert!(parse_event_timestamp("not a timestamp at all").is_none());
    }

    #[test]
    fn span_formats_hours_minutes_seconds() {
        let a = parse_event_timestamp("2024-01-01T10:00:00").unwrap();
        let b = parse_event_timestamp("2024-01-01T11:02:03").unwrap();
        assert_eq!(span_string(a, b), "1:02:03");
        assert_eq!(clock_string(a), "10:00:00");
    }
}
