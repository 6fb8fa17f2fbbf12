//! Reachability probes via the system ping command.

use std::process::Stdio;
use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use tokio::process::Command;

/// A single-shot reachability probe.
///
/// `Ok(true)` means the host answered, `Ok(false)` means it did not, and
/// `Err` means the probe itself could not run.
#[async_trait]
pub trait Pinger: Send + Sync {
    async fn ping(&self, host: &str) -> Result<bool>;
}

/// Probes with the operating system's ping binary: one echo request per
/// call, reachability decided by the exit status.
#[derive(Debug, Clone, Default)]
pub struct SystemPinger {
    timeout: Option<Duration>,
}

impl SystemPinger {
    /// Pinger relying on the OS default echo timeout.
    pub fn new() -> Self {
        Self { timeout: None }
    }

    /// Pinger passing an explicit per-probe timeout to the ping command.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self { timeout: Some(timeout) }
    }

    fn args(&self, host: &str) -> Vec<String> {
        let mut args = single_echo_args();
        if let Some(timeout) = self.timeout {
            args.push(timeout_flag().to_string());
            args.push(timeout_value(timeout));
        }
        args.push(host.to_string());
        args
    }
}

#[async_trait]
impl Pinger for SystemPinger {
    async fn ping(&self, host: &str) -> Result<bool> {
        let status = Command::new("ping")
            .args(self.args(host))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .with_context(|| format!("failed to run ping for {host}"))?;
        Ok(status.success())
    }
}

#[cfg(target_os = "windows")]
fn single_echo_args() -> Vec<String> {
    vec!["-n".to_string(), "1".to_string()]
}

#[cfg(not(target_os = "windows"))]
fn single_echo_args() -> Vec<String> {
    vec!["-c".to_string(), "1".to_string()]
}

#[cfg(target_os = "windows")]
fn timeout_flag() -> &'static str {
    "-w" // milliseconds
}

#[cfg(not(target_os = "windows"))]
fn timeout_flag() -> &'static str {
    "-W" // seconds
}

#[cfg(target_os = "windows")]
fn timeout_value(timeout: Duration) -> String {
    timeout.as_millis().max(1).to_string()
}

#[cfg(not(target_os = "windows"))]
fn timeout_value(timeout: Duration) -> String {
    timeout.as_secs().max(1).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn args_request_one_echo_with_host_last() {
        let args = SystemPinger::new().args("pc-alpha");
        assert_eq!(args.len(), 3);
        assert!(args.contains(&"1".to_string()));
        assert_eq!(args.last().map(String::as_str), Some("pc-alpha"));
    }

    #[test]
    fn timeout_flag_only_present_when_configured() {
        let bare = SystemPinger::new().args("h");
        let timed = SystemPinger::with_timeout(Duration::from_secs(2)).args("h");
        assert_eq!(timed.len(), bare.len() + 2);
        assert_eq!(timed.last(), bare.last());
    }
}
