//! request-monitor - standalone monitoring engine host
//!
//! Loads thresholds, starts the periodic evaluation and cleanup scheduler
//! and logs every alert until interrupted.

#![allow(missing_docs)]

use anyhow::Context;
use clap::Parser;
use request_monitor::{
    AlertSeverity, Config, MonitoringEngine, MonitoringScheduler, TracingChannel,
};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "request-monitor", version, about = "Request monitoring and alerting engine")]
struct Cli {
    /// YAML configuration file; MONITOR_* environment variables are used when omitted
    #[arg(short, long, env = "MONITOR_CONFIG")]
    config: Option<PathBuf>,

    /// Emit logs as JSON
    #[arg(long)]
    json_logs: bool,

    /// Lowest alert severity written to the log
    #[arg(long, default_value = "info", value_parser = parse_severity)]
    min_severity: AlertSeverity,
}

fn parse_severity(raw: &str) -> Result<AlertSeverity, String> {
    match raw.to_ascii_lowercase().as_str() {
        "info" => Ok(AlertSeverity::Info),
        "warning" | "warn" => Ok(AlertSeverity::Warning),
        "critical" => Ok(AlertSeverity::Critical),
        other => Err(format!("unknown severity: {}", other)),
    }
}

fn init_logging(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => Config::from_file(path)
            .await
            .with_context(|| format!("loading {}", path.display()))?,
        None => Config::from_env().context("loading configuration from environment")?,
    };

    let engine = MonitoringEngine::new(config.monitoring())?;
    engine.attach_channel(Arc::new(TracingChannel::new(cli.min_severity)));

    let mut scheduler = MonitoringScheduler::start(engine.clone(), config.scheduler())?;
    info!("Monitoring engine running, press Ctrl-C to stop");

    tokio::signal::ctrl_c()
        .await
        .context("waiting for shutdown signal")?;

    scheduler.stop();
    let health = engine.health_summary();
    info!(
        "Shutting down (uptime {}s, health {})",
        engine.uptime().as_secs(),
        health.status
    );
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_logging(cli.json_logs);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
