//! End-to-end run: load the roster, probe it, fold the results into the
//! presence log, and regenerate the report.

use std::sync::Arc;
use std::time::Duration;

use rollcall::daylog::PresenceLog;
use rollcall::probe::{Pinger, ProbeRunner, SystemPinger};
use rollcall::report::{summarize, write_report};
use rollcall::roster::load_roster;
use tracing::{debug, info};

use crate::config::Config;


/// Probe every host on the roster, update the presence log, and write the
/// report. An empty or missing roster leaves both files untouched.
pub async fn run(config: &Config) -> anyhow::Result<()> {
    let pinger = match config.probe.timeout_secs {
        Some(secs) => SystemPinger::with_timeout(Duration::from_secs(secs)),
        None => SystemPinger::new(),
    };
    run_with(config, Arc::new(pinger)).await
}

pub(crate) async fn run_with(config: &Config, pinger: Arc<dyn Pinger>) -> anyhow::Result<()> {
    let hosts = load_roster(&config.paths.hosts)?;
    if hosts.is_empty() {
        info!(path = %config.paths.hosts.display(), "no hosts to probe, nothing to do");
        return Ok(());
    }

    info!(hosts = hosts.len(), "probing roster");
    let records = ProbeRunner::new(pinger).run(&hosts).await;

    let mut log = PresenceLog::load(&config.paths.log);
    let appended = log.merge(&records);
    log.save(&config.paths.log)?;
    debug!(appended, hosts = log.len(), "presence log merged");
    println!("Ping results saved to {}.", config.paths.log.display());

    report(config)
}

/// Render the report from whatever log is on disk. When the log is missing
/// or unreadable the step is skipped without touching the report file.
pub fn report(config: &Config) -> anyhow::Result<()> {
    let Some(log) = PresenceLog::try_load(&config.paths.log) else {
        debug!(path = %config.paths.log.display(), "no usable presence log, skipping the report");
        return Ok(());
    };

    let rows = summarize(&log);
    write_report(&config.paths.report, &rows)?;
    println!("Report generated: {}", config.paths.report.display());
    Ok(())
}
