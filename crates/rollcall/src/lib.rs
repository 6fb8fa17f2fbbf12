//! Rollcall - host presence probing and weekday reporting
//!
//! This library reads a roster of hosts, probes them over ICMP echo via the
//! system ping command, accumulates which weekday each host was seen on in a
//! JSON log, and renders that log as a per-host weekday summary.

pub mod daylog;
pub mod error;
pub mod probe;
pub mod report;
pub mod roster;

// Re-export main types
pub use daylog::{DayEntry, PresenceLog};
pub use error::{Error, Result};
pub use probe::{DayLabel, Pinger, ProbeRecord, ProbeRunner, ProbeStatus, SystemPinger, Weekday};
pub use report::{summarize, write_report, SummaryRow};
pub use roster::load_roster;
