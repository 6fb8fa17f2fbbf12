//! Probe layer. [`Pinger`] abstracts how a single host is reached,
//! [`ProbeRunner`] fans a batch out across tasks, and the types module
//! carries the records the rest of the crate consumes.

pub mod pinger;
pub mod runner;
pub mod types;

pub use pinger::{Pinger, SystemPinger};
pub use runner::ProbeRunner;
pub use types::{DayLabel, ProbeRecord, ProbeStatus, Weekday};
