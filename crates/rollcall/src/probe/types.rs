//! Probe domain types.
//!
//! The weekday vocabulary, the day label attached to log entries, the probe
//! status and the per-host record a probe batch produces.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Day of the week, in the local timezone of the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// Full English name, the form persisted in the day log.
    pub fn name(self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }

    /// Report abbreviation. Weekends have none: the log records them, the
    /// report never shows them.
    pub fn abbreviation(self) -> Option<&'static str> {
        match self {
            Weekday::Monday => Some("M"),
            Weekday::Tuesday => Some("T"),
            Weekday::Wednesday => Some("W"),
            Weekday::Thursday => Some("Th"),
            Weekday::Friday => Some("F"),
            Weekday::Saturday | Weekday::Sunday => None,
        }
    }

    /// Parse a full English name. Case-sensitive, matching what the log
    /// format has always stored.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Monday" => Some(Weekday::Monday),
            "Tuesday" => Some(Weekday::Tuesday),
            "Wednesday" => Some(Weekday::Wednesday),
            "Thursday" => Some(Weekday::Thursday),
            "Friday" => Some(Weekday::Friday),
            "Saturday" => Some(Weekday::Saturday),
            "Sunday" => Some(Weekday::Sunday),
            _ => None,
        }
    }

    /// The current weekday in the local timezone.
    pub fn today_local() -> Self {
        use chrono::Datelike;
        chrono::Local::now().weekday().into()
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(day: chrono::Weekday) -> Self {
        match day {
            chrono::Weekday::Mon => Weekday::Monday,
            chrono::Weekday::Tue => Weekday::Tuesday,
            chrono::Weekday::Wed => Weekday::Wednesday,
            chrono::Weekday::Thu => Weekday::Thursday,
            chrono::Weekday::Fri => Weekday::Friday,
            chrono::Weekday::Sat => Weekday::Saturday,
            chrono::Weekday::Sun => Weekday::Sunday,
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Label attached to a day-log entry.
///
/// Besides the seven weekday names a log can carry labels this tool never
/// writes for a successful probe: failed probes are tagged `"unknown"`, and
/// a hand-edited or foreign file may hold anything. Raw labels survive a
/// load and save untouched and stay distinct for deduplication; the
/// reporter skips them. Equality and hashing are on the serialized form.
#[derive(Debug, Clone)]
pub enum DayLabel {
    Day(Weekday),
    Raw(String),
}

impl DayLabel {
    /// Label recorded when a probe failed before the day could be
    /// attributed.
    pub fn unknown() -> Self {
        DayLabel::Raw("unknown".to_string())
    }

    /// The serialized form of the label.
    pub fn as_str(&self) -> &str {
        match self {
            DayLabel::Day(day) => day.name(),
            DayLabel::Raw(raw) => raw,
        }
    }

    /// Report abbreviation, if this label maps to a reportable weekday.
    pub fn abbreviation(&self) -> Option<&'static str> {
        match self {
            DayLabel::Day(day) => day.abbreviation(),
            DayLabel::Raw(_) => None,
        }
    }
}

impl From<Weekday> for DayLabel {
    fn from(day: Weekday) -> Self {
        DayLabel::Day(day)
    }
}

impl PartialEq for DayLabel {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for DayLabel {}

impl Hash for DayLabel {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state)
    }
}

impl fmt::Display for DayLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for DayLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for DayLabel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(match Weekday::from_name(&raw) {
            Some(day) => DayLabel::Day(day),
            None => DayLabel::Raw(raw),
        })
    }
}

/// Outcome of a single reachability probe.
///
/// Serialized as a bare string: `"online"`, `"offline"` or
/// `"error: <message>"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeStatus {
    Online,
    Offline,
    /// The probe itself could not run (the ping command failed to start),
    /// as opposed to an unreachable host.
    Error(String),
}

impl ProbeStatus {
    pub fn is_online(&self) -> bool {
        matches!(self, ProbeStatus::Online)
    }
}

impl fmt::Display for ProbeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeStatus::Online => f.write_str("online"),
            ProbeStatus::Offline => f.write_str("offline"),
            ProbeStatus::Error(message) => write!(f, "error: {message}"),
        }
    }
}

impl Serialize for ProbeStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ProbeStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        match raw.as_str() {
            "online" => Ok(ProbeStatus::Online),
            "offline" => Ok(ProbeStatus::Offline),
            other => match other.strip_prefix("error: ") {
                Some(message) => Ok(ProbeStatus::Error(message.to_string())),
                None => Err(D::Error::custom(format!("unrecognized probe status {raw:?}"))),
            },
        }
    }
}

/// Result of probing one roster entry, tagged with the day it was observed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeRecord {
    pub host: String,
    pub day: DayLabel,
    pub status: ProbeStatus,
}

impl ProbeRecord {
    /// Record for a host that answered the echo request.
    pub fn online(host: impl Into<String>, day: Weekday) -> Self {
        Self { host: host.into(), day: day.into(), status: ProbeStatus::Online }
    }

    /// Record for a host that did not answer.
    pub fn offline(host: impl Into<String>, day: Weekday) -> Self {
        Self { host: host.into(), day: day.into(), status: ProbeStatus::Offline }
    }

    /// Record for a probe that could not run. Such records are not
    /// attributed to a weekday; the log files them under `"unknown"`.
    pub fn error(host: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            day: DayLabel::unknown(),
            status: ProbeStatus::Error(message.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weekday_names_round_trip() {
        for day in [
            Weekday::Monday,
            Weekday::Tuesday,
            Weekday::Wednesday,
            Weekday::Thursday,
            Weekday::Friday,
            Weekday::Saturday,
            Weekday::Sunday,
        ] {
            assert_eq!(Weekday::from_name(day.name()), Some(day));
        }
        assert_eq!(Weekday::from_name("monday"), None);
        assert_eq!(Weekday::from_name("unknown"), None);
    }

    #[test]
    fn only_weekdays_have_abbreviations() {
        assert_eq!(Weekday::Monday.abbreviation(), Some("M"));
        assert_eq!(Weekday::Tuesday.abbreviation(), Some("T"));
        assert_eq!(Weekday::Wednesday.abbreviation(), Some("W"));
        assert_eq!(Weekday::Thursday.abbreviation(), Some("Th"));
        assert_eq!(Weekday::Friday.abbreviation(), Some("F"));
        assert_eq!(Weekday::Saturday.abbreviation(), None);
        assert_eq!(Weekday::Sunday.abbreviation(), None);
    }

    #[test]
    fn day_label_serde_keeps_raw_labels() {
        let monday: DayLabel = serde_json::from_str("\"Monday\"").unwrap();
        assert_eq!(monday, DayLabel::Day(Weekday::Monday));
        assert_eq!(serde_json::to_string(&monday).unwrap(), "\"Monday\"");

        let alien: DayLabel = serde_json::from_str("\"Lunedi\"").unwrap();
        assert_eq!(alien, DayLabel::Raw("Lunedi".to_string()));
        assert_eq!(serde_json::to_string(&alien).unwrap(), "\"Lunedi\"");

        assert_eq!(serde_json::to_string(&DayLabel::unknown()).unwrap(), "\"unknown\"");
    }

    #[test]
    fn day_label_equality_is_on_serialized_form() {
        assert_eq!(DayLabel::Day(Weekday::Monday), DayLabel::Raw("Monday".to_string()));
        assert_ne!(DayLabel::unknown(), DayLabel::Raw("Saturday".to_string()));
    }

    #[test]
    fn probe_status_serde() {
        assert_eq!(serde_json::to_string(&ProbeStatus::Online).unwrap(), "\"online\"");
        assert_eq!(serde_json::to_string(&ProbeStatus::Offline).unwrap(), "\"offline\"");
        assert_eq!(
            serde_json::to_string(&ProbeStatus::Error("boom".to_string())).unwrap(),
            "\"error: boom\""
        );

        let status: ProbeStatus = serde_json::from_str("\"error: no ping binary\"").unwrap();
        assert_eq!(status, ProbeStatus::Error("no ping binary".to_string()));
        assert!(serde_json::from_str::<ProbeStatus>("\"degraded\"").is_err());
    }

    #[test]
    fn error_records_are_unattributed() {
        let record = ProbeRecord::error("pc-1", "spawn failed");
        assert_eq!(record.day.as_str(), "unknown");
        assert_eq!(record.status, ProbeStatus::Error("spawn failed".to_string()));
        assert!(!record.status.is_online());
    }
}
