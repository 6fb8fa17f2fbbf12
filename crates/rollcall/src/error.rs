//! Library error type.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from roster, day-log and report operations.
///
/// Tolerated conditions (a missing roster, a missing or unparsable day
/// log) never surface here; they degrade to empty inputs as the pipeline
/// contract requires.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read host list {path}: {source}")]
    RosterRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write day log {path}: {source}")]
    LogWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode day log: {0}")]
    LogEncode(#[from] serde_json::Error),

    #[error("failed to write report {path}: {source}")]
    ReportWrite {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
