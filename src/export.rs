use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use crate::model::RowStore;

pub const CSV_COLUMNS: [&str; 8] = [
    "created",
    "message",
    "runId",
    "component",
    "event_hierarchy",
    "next_event",
    "stage",
    "duration",
];

pub const DEFAULT_CSV_NAME: &str = "file.csv";

/// Serialize the preview table to UTF-8 CSV, one record per timeline row.
pub fn write_csv<W: Write>(rows: &RowStore, writer: W) -> Result<()> {
    let mut out = csv::Writer::from_writer(writer);
    out.write_record(CSV_COLUMNS)?;

    for (_, row) in rows.iter() {
        let duration = row.duration.to_string();
        out.write_record([
            row.event.created.as_str(),
            row.event.message.as_str(),
            row.event.run_id.as_str(),
            row.event.component.as_str(),
            row.hierarchy.as_str(),
            row.next_event.as_deref().unwrap_or(""),
            row.stage.as_str(),
            duration.as_str(),
        ])?;
    }

    out.flush()?;
    Ok(())
}

pub fn save_csv(rows: &RowStore, path: &Path) -> Result<()> {
    let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    write_csv(rows, file).with_context(|| format!("write {}", path.display()))
}
