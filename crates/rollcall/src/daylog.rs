//! Persisted presence log: which days each host has been seen on.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::probe::{DayLabel, ProbeRecord, ProbeStatus};

/// One observation: the day a probe ran and what it saw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayEntry {
    pub day: DayLabel,
    pub status: ProbeStatus,
}

/// The durable host-to-days mapping, stored as one JSON object so the file
/// stays hand-inspectable. Hosts are kept sorted so rewrites are stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PresenceLog {
    entries: BTreeMap<String, Vec<DayEntry>>,
}

impl PresenceLog {
    /// Read a log from disk. `None` when the file is absent, unreadable, or
    /// not valid JSON; callers decide whether that means "start empty" or
    /// "skip the step".
    pub fn try_load(path: &Path) -> Option<Self> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "no presence log yet");
                return None;
            }
            Err(err) => {
                warn!(path = %path.display(), "presence log unreadable: {err}");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(log) => Some(log),
            Err(err) => {
                warn!(path = %path.display(), "presence log unparsable, ignoring it: {err}");
                None
            }
        }
    }

    /// Read a log from disk, starting fresh when there is nothing usable.
    pub fn load(path: &Path) -> Self {
        Self::try_load(path).unwrap_or_default()
    }

    /// Fold a probe batch into the log. The first entry recorded for a host
    /// on a given day wins; later records for that day, whether from an
    /// earlier run or from earlier in this same batch, are dropped. Returns
    /// how many entries were appended.
    pub fn merge(&mut self, records: &[ProbeRecord]) -> usize {
        let mut appended = 0;
        for record in records {
            let days = self.entries.entry(record.host.clone()).or_default();
            if days.iter().any(|entry| entry.day == record.day) {
                debug!(host = %record.host, day = %record.day, "day already logged, keeping the first entry");
                continue;
            }
            days.push(DayEntry {
                day: record.day.clone(),
                status: record.status.clone(),
            });
            appended += 1;
        }
        appended
    }

    /// Replace the log file in one step: encode into a sibling temp file,
    /// then rename it over the target so readers never see a half-written
    /// log.
    pub fn save(&self, path: &Path) -> Result<()> {
        let encoded = serde_json::to_string_pretty(self)?;
        let tmp = sibling_tmp(path);
        fs::write(&tmp, encoded).map_err(|source| Error::LogWrite {
            path: tmp.clone(),
            source,
        })?;
        fs::rename(&tmp, path).map_err(|source| Error::LogWrite {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), hosts = self.entries.len(), "presence log written");
        Ok(())
    }

    /// Entries recorded for one host, if any.
    pub fn days_for(&self, host: &str) -> Option<&[DayEntry]> {
        self.entries.get(host).map(Vec::as_slice)
    }

    /// Hosts and their recorded days, in host order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[DayEntry])> {
        self.entries
            .iter()
            .map(|(host, days)| (host.as_str(), days.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn sibling_tmp(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|name| name.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
