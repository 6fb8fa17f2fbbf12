//! Concurrent probe batches.

use std::sync::Arc;

use futures::future::join_all;

use super::pinger::Pinger;
use super::types::{ProbeRecord, Weekday};

/// Runs one probe per roster entry, all in flight at once, and collects
/// records in roster order regardless of completion order.
pub struct ProbeRunner {
    pinger: Arc<dyn Pinger>,
}

impl ProbeRunner {
    pub fn new(pinger: Arc<dyn Pinger>) -> Self {
        Self { pinger }
    }

    /// Probe every host in the batch. The weekday is sampled once, when the
    /// results are interpreted. A probe that fails to run (or a probe task
    /// that dies) yields an error-status record instead of aborting the
    /// batch.
    pub async fn run(&self, hosts: &[String]) -> Vec<ProbeRecord> {
        let tasks: Vec<_> = hosts
            .iter()
            .map(|host| {
                let pinger = Arc::clone(&self.pinger);
                let host = host.clone();
                tokio::spawn(async move {
                    let outcome = pinger.ping(&host).await;
                    (host, outcome)
                })
            })
            .collect();

        let outcomes = join_all(tasks).await;
        let day = Weekday::today_local();
        outcomes
            .into_iter()
            .zip(hosts)
            .map(|(joined, host)| match joined {
                Ok((host, Ok(true))) => ProbeRecord::online(host, day),
                Ok((host, Ok(false))) => ProbeRecord::offline(host, day),
                Ok((host, Err(err))) => ProbeRecord::error(host, format!("{err:#}")),
                Err(err) => ProbeRecord::error(host.clone(), err.to_string()),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::types::{DayLabel, ProbeStatus};
    use anyhow::bail;
    use async_trait::async_trait;
    use std::collections::HashSet;
    use std::time::Duration;

    struct ScriptedPinger {
        up: HashSet<&'static str>,
        failing: HashSet<&'static str>,
        stagger: bool,
    }

    impl ScriptedPinger {
        fn new(up: &[&'static str], failing: &[&'static str]) -> Self {
            Self {
                up: up.iter().copied().collect(),
                failing: failing.iter().copied().collect(),
                stagger: false,
            }
        }
    }

    #[async_trait]
    impl Pinger for ScriptedPinger {
        async fn ping(&self, host: &str) -> anyhow::Result<bool> {
            if self.stagger {
                // Earlier roster entries answer last.
                let delay = match host {
                    "a" => 30,
                    "b" => 20,
                    _ => 1,
                };
                tokio::time::sleep(Duration::from_millis(delay)).await;
            }
            if self.failing.contains(host) {
                bail!("ping binary missing");
            }
            Ok(self.up.contains(host))
        }
    }

    fn hosts(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| name.to_string()).collect()
    }

    #[tokio::test]
    async fn maps_outcomes_to_records() {
        let runner = ProbeRunner::new(Arc::new(ScriptedPinger::new(&["a"], &["c"])));
        let records = runner.run(&hosts(&["a", "b", "c"])).await;

        assert_eq!(records.len(), 3);
        assert_eq!(records[0].status, ProbeStatus::Online);
        assert_eq!(records[0].day, DayLabel::Day(Weekday::today_local()));
        assert_eq!(records[1].status, ProbeStatus::Offline);
        assert!(matches!(records[2].status, ProbeStatus::Error(_)));
        assert_eq!(records[2].day, DayLabel::unknown());
    }

    #[tokio::test]
    async fn one_failing_probe_never_aborts_the_batch() {
        let runner = ProbeRunner::new(Arc::new(ScriptedPinger::new(&["a", "c"], &["b"])));
        let records = runner.run(&hosts(&["a", "b", "c"])).await;

        assert_eq!(records[0].status, ProbeStatus::Online);
        assert_eq!(records[2].status, ProbeStatus::Online);
    }

    #[tokio::test]
    async fn records_follow_roster_order_not_completion_order() {
        let mut pinger = ScriptedPinger::new(&["a", "b", "c"], &[]);
        pinger.stagger = true;
        let runner = ProbeRunner::new(Arc::new(pinger));

        let records = runner.run(&hosts(&["a", "b", "c"])).await;
        let order: Vec<&str> = records.iter().map(|record| record.host.as_str()).collect();
        assert_eq!(order, ["a", "b", "c"]);
    }

    #[tokio::test]
    async fn empty_roster_probes_nothing() {
        let runner = ProbeRunner::new(Arc::new(ScriptedPinger::new(&[], &[])));
        assert!(runner.run(&[]).await.is_empty());
    }
}
