//! Weekday summary report.
//!
//! Renders the presence log as a two-column table: host name and the
//! abbreviated weekdays on which it answered a probe.

use std::collections::BTreeSet;
use std::path::Path;

use serde::Serialize;
use tracing::debug;

use crate::daylog::PresenceLog;
use crate::error::{Error, Result};

/// One report line. `days_connected` is a comma-joined, sorted list of
/// weekday abbreviations, empty when the host was never seen online.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryRow {
    pub host: String,
    pub days_connected: String,
}

/// Reduce the log to one row per host. Only online entries count, and only
/// days that have an abbreviation; weekend and unattributed entries are
/// dropped from the listing, not reported as errors.
pub fn summarize(log: &PresenceLog) -> Vec<SummaryRow> {
    log.iter()
        .map(|(host, days)| {
            let abbreviations: BTreeSet<&'static str> = days
                .iter()
                .filter(|entry| entry.status.is_online())
                .filter_map(|entry| entry.day.abbreviation())
                .collect();
            SummaryRow {
                host: host.to_string(),
                days_connected: abbreviations.into_iter().collect::<Vec<_>>().join(","),
            }
        })
        .collect()
}

/// Write the rows as CSV with a `PC Name, Days Connected` header. The
/// header is written even when there are no rows.
pub fn write_report(path: &Path, rows: &[SummaryRow]) -> Result<()> {
    write_rows(path, rows).map_err(|source| Error::ReportWrite {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), rows = rows.len(), "report written");
    Ok(())
}

fn write_rows(path: &Path, rows: &[SummaryRow]) -> std::result::Result<(), csv::Error> {
    let mut writer = csv::WriterBuilder::new().has_headers(false).from_path(path)?;
    writer.write_record(["PC Name", "Days Connected"])?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}
