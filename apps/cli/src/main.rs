mod config;
mod logging;
mod pipeline;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::config::Config;

/// Network presence checker.
///
/// Reads a roster of host names, pings each one, records which weekday it
/// answered on, and keeps a two-column summary of those days up to date.
#[derive(Parser, Debug)]
#[command(name = "rollcall", version, about = "Pings a host roster and tracks the weekdays each host is seen")]
struct Cli {
    /// Path to a TOML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Host list file, one name per line (overrides the config)
    #[arg(long, global = true)]
    hosts: Option<PathBuf>,

    /// Presence log file (overrides the config)
    #[arg(long, global = true)]
    log: Option<PathBuf>,

    /// Report file (overrides the config)
    #[arg(long, global = true)]
    report: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Probe the roster, update the log, and regenerate the report
    Run {
        /// Per-probe timeout in seconds
        #[arg(long)]
        timeout_secs: Option<u64>,
    },
    /// Regenerate the report from the existing log, without probing
    Report,
}

#[tokio::main]
async fn main() -> Result<()> {
    logging::init();

    let cli = Cli::parse();
    let mut config =
        Config::load(cli.config.as_deref()).context("failed to load configuration")?;
    if let Some(hosts) = cli.hosts {
        config.paths.hosts = hosts;
    }
    if let Some(log) = cli.log {
        config.paths.log = log;
    }
    if let Some(report) = cli.report {
        config.paths.report = report;
    }

    match cli.command.unwrap_or(Command::Run { timeout_secs: None }) {
        Command::Run { timeout_secs } => {
            if timeout_secs.is_some() {
                config.probe.timeout_secs = timeout_secs;
            }
            pipeline::run(&config).await
        }
        Command::Report => pipeline::report(&config),
    }
}
